//! Foldable type class - structures that can be reduced to a summary value.
//!
//! For ordered sets the fold order is the canonical order: `fold_left` visits
//! elements ascending, `fold_right` associates from the largest element.

use super::{Monoid, TypeConstructor};
use crate::ordered_set::OrderedSet;

/// A type class for structures whose elements can be folded.
///
/// Implementors provide `fold_left` and `fold_right`; the remaining methods
/// are derived from `fold_left`.
///
/// # Examples
///
/// ```rust
/// use sorted_set::ordered_set::OrderedSet;
/// use sorted_set::typeclass::Foldable;
///
/// let set = OrderedSet::from([3, 1, 2]);
/// let digits = set.fold_left(String::new(), |mut accumulator, element| {
///     accumulator.push_str(&element.to_string());
///     accumulator
/// });
/// assert_eq!(digits, "123");
/// ```
pub trait Foldable: TypeConstructor {
    /// Folds the structure from left to right with an accumulator.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds the structure from right to left with an accumulator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_set::ordered_set::OrderedSet;
    /// use sorted_set::typeclass::Foldable;
    ///
    /// let set = OrderedSet::from([1, 2, 3]);
    /// let nested = set.fold_right(String::from("."), |element, accumulator| {
    ///     format!("({element} {accumulator})")
    /// });
    /// assert_eq!(nested, "(1 (2 (3 .)))");
    /// ```
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Maps each element to a [`Monoid`] and combines the results in fold order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_set::ordered_set::OrderedSet;
    /// use sorted_set::typeclass::Foldable;
    ///
    /// let words = OrderedSet::from(["pear", "fig"]);
    /// let letters: OrderedSet<char> = words.fold_map(|word| word.chars().collect());
    /// assert_eq!(letters.to_vec(), vec!['a', 'e', 'f', 'g', 'i', 'p', 'r']);
    /// ```
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Returns whether the structure contains no elements.
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold_left(true, |_, _| false)
    }

    /// Returns the number of elements in the structure.
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Collects the elements into a `Vec`, in fold order.
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Returns the first element, in fold order, satisfying `predicate`.
    fn find<P>(self, mut predicate: P) -> Option<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(None, |accumulator, element| {
            accumulator.or_else(|| predicate(&element).then_some(element))
        })
    }

    /// Returns `true` if any element satisfies `predicate`.
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        self.clone().find(|element| predicate(element)).is_some()
    }

    /// Returns `true` if every element satisfies `predicate` (vacuously for none).
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        !self.exists(|element| !predicate(element))
    }
}

impl<T: Ord> Foldable for OrderedSet<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    fn to_list(self) -> Vec<T> {
        self.into_vec()
    }
}
