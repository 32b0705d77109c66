//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! For all `a`, `b`, `c`:
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! Ordered sets form a semigroup under union; vectors under concatenation.

use crate::ordered_set::OrderedSet;

/// A type class for types with an associative binary operation.
///
/// # Examples
///
/// ```rust
/// use sorted_set::ordered_set::OrderedSet;
/// use sorted_set::typeclass::Semigroup;
///
/// let left = OrderedSet::from([1, 3]);
/// let right = OrderedSet::from([2, 3]);
/// assert_eq!(left.combine(right), OrderedSet::from([1, 2, 3]));
/// ```
pub trait Semigroup {
    /// Combines two values into one. Must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default implementation clones both operands.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Reduces every value of an iterator with `combine`.
    ///
    /// Returns `None` for an empty iterator; see
    /// [`Monoid::combine_all`](super::Monoid::combine_all) for a total version.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_set::ordered_set::OrderedSet;
    /// use sorted_set::typeclass::Semigroup;
    ///
    /// let sets = vec![OrderedSet::from([1]), OrderedSet::from([3]), OrderedSet::from([2])];
    /// assert_eq!(OrderedSet::reduce_all(sets), Some(OrderedSet::from([1, 2, 3])));
    /// assert_eq!(OrderedSet::<i32>::reduce_all(Vec::new()), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

impl<T: Clone> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.extend_from_slice(self);
        result.extend_from_slice(other);
        result
    }
}

impl<T: Clone + Ord> Semigroup for OrderedSet<T> {
    fn combine(self, other: Self) -> Self {
        self.union(&other)
    }

    fn combine_ref(&self, other: &Self) -> Self {
        self.union(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn vec_combine_concatenates() {
        assert_eq!(vec![1, 2].combine(vec![3, 4]), vec![1, 2, 3, 4]);
    }

    #[rstest]
    fn vec_combine_ref_preserves_operands() {
        let left = vec![1];
        let right = vec![2];
        assert_eq!(left.combine_ref(&right), vec![1, 2]);
        assert_eq!(left, vec![1]);
        assert_eq!(right, vec![2]);
    }

    #[rstest]
    fn ordered_set_combine_is_union() {
        let left = OrderedSet::from([1, 2, 3]);
        let right = OrderedSet::from([2, 3, 4]);
        assert_eq!(left.combine(right), OrderedSet::from([1, 2, 3, 4]));
    }

    #[rstest]
    fn ordered_set_combine_is_associative() {
        let a = OrderedSet::from([1, 5]);
        let b = OrderedSet::from([2, 5, 8]);
        let c = OrderedSet::from([0, 8, 9]);
        assert_eq!(
            a.combine_ref(&b).combine_ref(&c),
            a.combine_ref(&b.combine_ref(&c))
        );
    }

    #[rstest]
    fn reduce_all_empty_returns_none() {
        let empty: Vec<Vec<i32>> = Vec::new();
        assert_eq!(Vec::reduce_all(empty), None);
    }
}
