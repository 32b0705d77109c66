//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! ```text
//! Monoid::empty().combine(a) == a
//! a.combine(Monoid::empty()) == a
//! ```
//!
//! The identity of the union semigroup on ordered sets is the empty set.

use super::Semigroup;
use crate::ordered_set::OrderedSet;

/// A [`Semigroup`] with an identity element.
///
/// # Examples
///
/// ```rust
/// use sorted_set::ordered_set::OrderedSet;
/// use sorted_set::typeclass::{Monoid, Semigroup};
///
/// let set = OrderedSet::from([4, 2]);
/// assert_eq!(<OrderedSet<i32> as Monoid>::empty().combine(set.clone()), set);
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element.
    fn empty() -> Self;

    /// Combines every value of an iterator, starting from [`Monoid::empty`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_set::ordered_set::OrderedSet;
    /// use sorted_set::typeclass::Monoid;
    ///
    /// let sets = vec![OrderedSet::from([3, 1]), OrderedSet::from([2])];
    /// assert_eq!(OrderedSet::combine_all(sets), OrderedSet::from([1, 2, 3]));
    /// assert!(OrderedSet::<i32>::combine_all(Vec::new()).is_empty());
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Returns whether this value is the identity element.
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}

impl<T: Clone> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Clone + Ord> Monoid for OrderedSet<T> {
    fn empty() -> Self {
        Self::new()
    }
}
