//! Ordered set backed by a canonical sorted sequence.
//!
//! This module provides [`OrderedSet`], an immutable-by-convention collection
//! of unique elements stored as a strictly ascending sequence.
//!
//! # Overview
//!
//! The backing storage is a `SmallVec` that keeps up to
//! [`INLINE_CAPACITY`] elements inline and spills to the heap beyond that.
//! Whatever the size, the storage is always sorted and free of duplicates, so:
//!
//! - the index of an element is its ascending rank,
//! - two sets holding the same members have identical storage, which makes
//!   structural equality and hashing valid set equality and hashing,
//! - iteration always yields ascending order.
//!
//! # Functional Programming Principles
//!
//! - **Immutability**: `insert`, `remove`, `filter` and the set algebra return
//!   new sets and never modify their inputs.
//! - **Exclusive ownership**: every set owns its storage outright. Binary
//!   operations build fresh storage; no two sets share a buffer.
//!
//! # Time Complexity
//!
//! | Operation                  | Complexity   |
//! |----------------------------|--------------|
//! | `from_sequence`            | O(n log n)   |
//! | `insert` / `remove`        | O(n)         |
//! | `contains` / `rank`        | O(log n)     |
//! | `len` / `is_empty`         | O(1)         |
//! | `min` / `max` / `get`      | O(1)         |
//! | `union` / `intersection`   | O(n + m)     |
//! | `difference`               | O(n + m)     |
//! | `is_subset` / `is_disjoint`| O(n + m)     |
//! | `filter` / `reject`        | O(n)         |
//!
//! # Examples
//!
//! ```rust
//! use sorted_set::ordered_set::OrderedSet;
//!
//! let set = OrderedSet::from_sequence([5, 1, 3, 1, 5]);
//! assert_eq!(set.to_vec(), vec![1, 3, 5]);
//!
//! // Mutation returns a new set, the original is unchanged
//! let extended = set.insert(2);
//! assert_eq!(set.len(), 3);
//! assert_eq!(extended.to_vec(), vec![1, 2, 3, 5]);
//!
//! // Merge-based set algebra
//! let other = OrderedSet::from([3, 4, 5]);
//! assert_eq!(set.union(&other).to_vec(), vec![1, 3, 4, 5]);
//! assert_eq!(set.intersection(&other).to_vec(), vec![3, 5]);
//! assert_eq!(set.difference(&other).to_vec(), vec![1]);
//! ```

mod iter;
mod merge;

pub use iter::OrderedSetIntoIterator;
pub use iter::OrderedSetIterator;

use smallvec::SmallVec;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Bound, RangeBounds, Sub};

use crate::error::EmptyCollectionError;

/// Number of elements stored inline before the storage spills to the heap.
pub const INLINE_CAPACITY: usize = 8;

/// Canonical storage: strictly ascending, no duplicates.
pub(crate) type Storage<T> = SmallVec<[T; INLINE_CAPACITY]>;

/// Message for `debug_assert!` when a trusted construction path receives
/// non-canonical input.
const CANONICAL_INVARIANT_MESSAGE: &str =
    "ordered set storage requires strictly increasing elements (sorted + deduplicated)";

#[inline]
fn is_strictly_sorted<T: Ord>(slice: &[T]) -> bool {
    slice.windows(2).all(|window| window[0] < window[1])
}

/// A set of unique elements kept as a canonical ascending sequence.
///
/// # Type Parameters
///
/// * `T` - The element type. Its `Ord` implementation is the total order that
///   decides both position and uniqueness; wrap elements in
///   [`std::cmp::Reverse`] or a newtype to use a different order.
///
/// # Examples
///
/// ```rust
/// use sorted_set::ordered_set::OrderedSet;
///
/// let built_up = OrderedSet::new().insert(3).insert(1).insert(2);
/// let collected: OrderedSet<i32> = [2, 3, 1, 3].into_iter().collect();
///
/// // Same members, same canonical sequence
/// assert_eq!(built_up, collected);
/// assert_eq!(built_up.as_slice(), &[1, 2, 3]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct OrderedSet<T> {
    elements: Storage<T>,
}

static_assertions::assert_impl_all!(OrderedSet<i32>: Send, Sync);
static_assertions::assert_impl_all!(OrderedSet<String>: Send, Sync);
static_assertions::assert_not_impl_any!(OrderedSet<std::rc::Rc<i32>>: Send, Sync);

impl<T> OrderedSet<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_set::ordered_set::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = OrderedSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: SmallVec::new(),
        }
    }

    /// Returns the number of elements in the set.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the smallest element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyCollectionError`] if the set is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_set::ordered_set::OrderedSet;
    ///
    /// let set = OrderedSet::from([0, 1, 2, 3, 4, 5]);
    /// assert_eq!(set.min(), Ok(&0));
    ///
    /// let empty: OrderedSet<i32> = OrderedSet::new();
    /// assert!(empty.min().is_err());
    /// ```
    #[inline]
    pub fn min(&self) -> Result<&T, EmptyCollectionError> {
        self.first().ok_or(EmptyCollectionError { operation: "min" })
    }

    /// Returns the largest element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyCollectionError`] if the set is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_set::ordered_set::OrderedSet;
    ///
    /// let set = OrderedSet::from([0, 1, 2, 3, 4, 5]);
    /// assert_eq!(set.max(), Ok(&5));
    /// ```
    #[inline]
    pub fn max(&self) -> Result<&T, EmptyCollectionError> {
        self.last().ok_or(EmptyCollectionError { operation: "max" })
    }

    /// Returns the smallest element, or `None` if the set is empty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Returns the largest element, or `None` if the set is empty.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Returns the element of the given ascending rank (0-based).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_set::ordered_set::OrderedSet;
    ///
    /// let set = OrderedSet::from([30, 10, 20]);
    /// assert_eq!(set.get(1), Some(&20));
    /// assert_eq!(set.get(3), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn get(&self, rank: usize) -> Option<&T> {
        self.elements.get(rank)
    }

    /// Returns an iterator over the elements in ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_set::ordered_set::OrderedSet;
    ///
    /// let set = OrderedSet::from([3, 1, 2]);
    /// let ascending: Vec<&i32> = set.iter().collect();
    /// assert_eq!(ascending, vec![&1, &2, &3]);
    ///
    /// let descending: Vec<&i32> = set.iter().rev().collect();
    /// assert_eq!(descending, vec![&3, &2, &1]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> OrderedSetIterator<'_, T> {
        OrderedSetIterator {
            inner: self.elements.iter(),
        }
    }

    /// Returns the canonical ascending sequence as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Consumes the set, returning its canonical ascending sequence.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.elements.into_vec()
    }
}

impl<T: Ord> OrderedSet<T> {
    /// Wraps storage that is already canonical.
    #[inline]
    fn from_canonical(elements: Storage<T>) -> Self {
        debug_assert!(is_strictly_sorted(&elements), "{}", CANONICAL_INVARIANT_MESSAGE);
        Self { elements }
    }

    /// Creates a set holding exactly one element.
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        let mut elements = Storage::new();
        elements.push(element);
        Self { elements }
    }

    /// Builds a set from an arbitrary sequence.
    ///
    /// The input is sorted and adjacent elements comparing equal are collapsed
    /// to the first of their run, so each distinct value appears exactly once
    /// regardless of input order or repetition.
    ///
    /// # Complexity
    ///
    /// O(n log n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_set::ordered_set::OrderedSet;
    ///
    /// let set = OrderedSet::from_sequence(vec![4, 2, 4, 9, 2, 2]);
    /// assert_eq!(set.as_slice(), &[2, 4, 9]);
    /// ```
    #[must_use]
    pub fn from_sequence<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut elements: Storage<T> = items.into_iter().collect();
        canonicalize(&mut elements);
        Self::from_canonical(elements)
    }

    /// Applies `function` to every input item, then builds a set as
    /// [`from_sequence`](Self::from_sequence) does.
    ///
    /// The mapping is eager; a panic inside `function` propagates to the caller.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_set::ordered_set::OrderedSet;
    ///
    /// let lengths = OrderedSet::from_sequence_mapped(["aa", "b", "cc", "ddd"], str::len);
    /// assert_eq!(lengths.as_slice(), &[1, 2, 3]);
    /// ```
    #[must_use]
    pub fn from_sequence_mapped<S, I, F>(items: I, function: F) -> Self
    where
        I: IntoIterator<Item = S>,
        F: FnMut(S) -> T,
    {
        Self::from_sequence(items.into_iter().map(function))
    }

    /// Builds a set from a vector that is expected to be strictly ascending.
    ///
    /// The input is verified with one linear scan. If it is out of order or
    /// holds duplicates, it is sorted and deduplicated the same way as
    /// [`from_sequence`](Self::from_sequence), so the result is always in
    /// canonical form.
    ///
    /// # Complexity
    ///
    /// O(n) for sorted input, O(n log n) otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_set::ordered_set::OrderedSet;
    ///
    /// let set = OrderedSet::from_sorted_vec(vec![2, 4, 6]);
    /// assert!(set.contains(&4));
    /// ```
    #[must_use]
    pub fn from_sorted_vec(vec: Vec<T>) -> Self {
        let mut elements = SmallVec::from_vec(vec);
        if !is_strictly_sorted(&elements) {
            canonicalize(&mut elements);
        }
        Self::from_canonical(elements)
    }

    /// Locates `element` by binary search: `Ok(rank)` if present, otherwise
    /// `Err(position)` where it would be inserted.
    #[inline]
    fn search<Q>(&self, element: &Q) -> Result<usize, usize>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.elements
            .binary_search_by(|item| T::borrow(item).cmp(element))
    }

    /// Returns `true` if the set contains an element equal to `element`.
    ///
    /// Borrowed forms of `T` are accepted, so an `OrderedSet<String>` can be
    /// queried with a `&str`.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_set::ordered_set::OrderedSet;
    ///
    /// let names = OrderedSet::from(["bob".to_string(), "alice".to_string()]);
    /// assert!(names.contains("alice"));
    /// assert!(!names.contains("carol"));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(element).is_ok()
    }

    /// Returns the ascending rank of `element`, or `None` if it is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_set::ordered_set::OrderedSet;
    ///
    /// let set = OrderedSet::from([30, 10, 20]);
    /// assert_eq!(set.rank(&30), Some(2));
    /// assert_eq!(set.rank(&15), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn rank<Q>(&self, element: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(element).ok()
    }

    /// Returns an ascending iterator over the elements within `range`.
    ///
    /// Both bounds are located by binary search.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_set::ordered_set::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = (1..=10).collect();
    /// let middle: Vec<i32> = set.range(4..7).copied().collect();
    /// assert_eq!(middle, vec![4, 5, 6]);
    ///
    /// let tail: Vec<i32> = set.range(9..).copied().collect();
    /// assert_eq!(tail, vec![9, 10]);
    /// ```
    #[must_use]
    pub fn range<Q, R>(&self, range: R) -> OrderedSetIterator<'_, T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
        R: RangeBounds<Q>,
    {
        let below = |bound: &Q, inclusive: bool| {
            self.elements.partition_point(|item| {
                let item = T::borrow(item);
                if inclusive { item < bound } else { item <= bound }
            })
        };

        let start = match range.start_bound() {
            Bound::Included(bound) => below(bound, true),
            Bound::Excluded(bound) => below(bound, false),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(bound) => below(bound, false),
            Bound::Excluded(bound) => below(bound, true),
            Bound::Unbounded => self.len(),
        };

        OrderedSetIterator {
            inner: self.elements[start..end.max(start)].iter(),
        }
    }
}

impl<T: Clone + Ord> OrderedSet<T> {
    /// Returns a set with `element` added at its ascending position.
    ///
    /// If an equal element is already present, returns a clone of the current
    /// set (idempotent operation).
    ///
    /// # Complexity
    ///
    /// O(n): binary search for the position, then a copy into fresh storage.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_set::ordered_set::OrderedSet;
    ///
    /// let set = OrderedSet::from([1, 3]);
    /// let inserted = set.insert(2);
    /// assert_eq!(inserted.as_slice(), &[1, 2, 3]);
    ///
    /// // Duplicate insertion is idempotent
    /// assert_eq!(inserted.insert(2), inserted);
    /// ```
    #[must_use]
    pub fn insert(&self, element: T) -> Self {
        match self.search(&element) {
            Ok(_) => self.clone(),
            Err(position) => {
                let mut elements = Storage::with_capacity(self.len() + 1);
                elements.extend(self.elements[..position].iter().cloned());
                elements.push(element);
                elements.extend(self.elements[position..].iter().cloned());
                Self::from_canonical(elements)
            }
        }
    }

    /// Returns a set without the element equal to `element`.
    ///
    /// Removing an absent element is not an error: the result equals the
    /// current set.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_set::ordered_set::OrderedSet;
    ///
    /// let set = OrderedSet::from([1, 2, 3]);
    /// assert_eq!(set.remove(&2).as_slice(), &[1, 3]);
    /// assert_eq!(set.remove(&9), set);
    /// ```
    #[must_use]
    pub fn remove<Q>(&self, element: &Q) -> Self
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self.search(element) {
            Err(_) => self.clone(),
            Ok(position) => {
                let mut elements = Storage::with_capacity(self.len() - 1);
                elements.extend(self.elements[..position].iter().cloned());
                elements.extend(self.elements[position + 1..].iter().cloned());
                Self::from_canonical(elements)
            }
        }
    }

    /// Returns the union of two sets.
    ///
    /// # Complexity
    ///
    /// O(n + m), a single merge scan over both sequences.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_set::ordered_set::OrderedSet;
    ///
    /// let left = OrderedSet::from([1, 3, 5]);
    /// let right = OrderedSet::from([2, 3, 4]);
    /// assert_eq!(left.union(&right).as_slice(), &[1, 2, 3, 4, 5]);
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self::from_canonical(merge::union_slices(&self.elements, &other.elements))
    }

    /// Returns the elements present in both sets.
    ///
    /// # Complexity
    ///
    /// O(n + m)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_set::ordered_set::OrderedSet;
    ///
    /// let left = OrderedSet::from([1, 2, 3, 4, 5]);
    /// let right = OrderedSet::from([3, 4, 5, 6, 7]);
    /// assert_eq!(left.intersection(&right).as_slice(), &[3, 4, 5]);
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        Self::from_canonical(merge::intersection_slices(&self.elements, &other.elements))
    }

    /// Returns the elements of `self` that are not in `other`.
    ///
    /// Not symmetric: `a.difference(&b)` keeps what only `a` holds.
    ///
    /// # Complexity
    ///
    /// O(n + m)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_set::ordered_set::OrderedSet;
    ///
    /// let a = OrderedSet::from([1, 2, 3]);
    /// let b = OrderedSet::from([2, 3, 4]);
    /// assert_eq!(a.difference(&b).as_slice(), &[1]);
    /// assert_eq!(b.difference(&a).as_slice(), &[4]);
    /// ```
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        Self::from_canonical(merge::difference_slices(&self.elements, &other.elements))
    }

    /// Returns the elements held by exactly one of the two sets.
    ///
    /// # Complexity
    ///
    /// O(n + m)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_set::ordered_set::OrderedSet;
    ///
    /// let a = OrderedSet::from([1, 2, 3]);
    /// let b = OrderedSet::from([2, 3, 4]);
    /// assert_eq!(a.symmetric_difference(&b).as_slice(), &[1, 4]);
    /// ```
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        Self::from_canonical(merge::symmetric_difference_slices(
            &self.elements,
            &other.elements,
        ))
    }

    /// Returns the elements for which `predicate` holds, in ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_set::ordered_set::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = (1..=6).collect();
    /// assert_eq!(set.filter(|element| element % 2 == 0).as_slice(), &[2, 4, 6]);
    /// ```
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        let elements = self
            .elements
            .iter()
            .filter(|element| predicate(element))
            .cloned()
            .collect();
        Self::from_canonical(elements)
    }

    /// Returns the elements for which `predicate` does not hold.
    ///
    /// Exactly the elements [`filter`](Self::filter) excludes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_set::ordered_set::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = (1..=6).collect();
    /// assert_eq!(set.reject(|element| element % 2 == 0).as_slice(), &[1, 3, 5]);
    /// ```
    #[must_use]
    pub fn reject<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.filter(|element| !predicate(element))
    }

    /// Splits the set into `(filter(predicate), reject(predicate))` in one pass.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_set::ordered_set::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = (1..=5).collect();
    /// let (small, large) = set.partition(|element| *element < 3);
    /// assert_eq!(small.as_slice(), &[1, 2]);
    /// assert_eq!(large.as_slice(), &[3, 4, 5]);
    /// ```
    #[must_use]
    pub fn partition<P>(&self, mut predicate: P) -> (Self, Self)
    where
        P: FnMut(&T) -> bool,
    {
        let mut accepted = Storage::new();
        let mut rejected = Storage::new();
        for element in &self.elements {
            if predicate(element) {
                accepted.push(element.clone());
            } else {
                rejected.push(element.clone());
            }
        }
        (Self::from_canonical(accepted), Self::from_canonical(rejected))
    }

    /// Returns a copy of the canonical ascending sequence.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.elements.to_vec()
    }
}

impl<T: Ord> OrderedSet<T> {
    /// Returns `true` if `self` and `other` share no element.
    ///
    /// Stops at the first shared element.
    ///
    /// # Complexity
    ///
    /// O(n + m) worst case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_set::ordered_set::OrderedSet;
    ///
    /// assert!(OrderedSet::from([1, 2, 3]).is_disjoint(&OrderedSet::from([4, 5, 6])));
    /// assert!(!OrderedSet::from([4, 5, 6]).is_disjoint(&OrderedSet::from([2, 3, 4])));
    /// ```
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        merge::is_disjoint_slices(&self.elements, &other.elements)
    }

    /// Returns `true` if every element of `self` is in `other`.
    ///
    /// Stops as soon as an element of `self` is passed over in `other`.
    ///
    /// # Complexity
    ///
    /// O(n + m) worst case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_set::ordered_set::OrderedSet;
    ///
    /// assert!(OrderedSet::from([4]).is_subset(&OrderedSet::from([4, 5, 6])));
    /// assert!(!OrderedSet::from([4, 5, 6]).is_subset(&OrderedSet::from([4])));
    /// ```
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        merge::is_subset_slices(&self.elements, &other.elements)
    }

    /// Returns `true` if every element of `other` is in `self`.
    #[inline]
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Applies `function` to every element and builds a new set from the
    /// results. Elements that map to equal values collapse into one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_set::ordered_set::OrderedSet;
    ///
    /// let set = OrderedSet::from([-2, -1, 0, 1, 2]);
    /// let squares = set.map(|element| element * element);
    /// assert_eq!(squares.as_slice(), &[0, 1, 4]);
    /// ```
    #[must_use]
    pub fn map<U, F>(&self, function: F) -> OrderedSet<U>
    where
        U: Ord,
        F: FnMut(&T) -> U,
    {
        OrderedSet::from_sequence(self.iter().map(function))
    }
}

/// Sorts and removes adjacent elements that compare equal, keeping the first
/// of each run.
fn canonicalize<T: Ord>(elements: &mut Storage<T>) {
    elements.sort();
    elements.dedup_by(|current, previous| T::cmp(current, previous) == Ordering::Equal);
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for OrderedSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for OrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_sequence(iter)
    }
}

impl<T: Ord> From<Vec<T>> for OrderedSet<T> {
    fn from(vec: Vec<T>) -> Self {
        let mut elements = SmallVec::from_vec(vec);
        canonicalize(&mut elements);
        Self::from_canonical(elements)
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for OrderedSet<T> {
    fn from(array: [T; N]) -> Self {
        Self::from_sequence(array)
    }
}

impl<T: Ord> Extend<T> for OrderedSet<T> {
    /// Adds every item in place. Items equal to an existing member are dropped.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let before = self.len();
        self.elements.extend(iter);
        if self.len() != before {
            // Stable sort keeps existing members ahead of equal newcomers.
            canonicalize(&mut self.elements);
        }
    }
}

impl<T> IntoIterator for OrderedSet<T> {
    type Item = T;
    type IntoIter = OrderedSetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        OrderedSetIntoIterator {
            inner: self.elements.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a OrderedSet<T> {
    type Item = &'a T;
    type IntoIter = OrderedSetIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for OrderedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Operator Implementations
// =============================================================================

impl<T: Clone + Ord> BitOr for &OrderedSet<T> {
    type Output = OrderedSet<T>;

    /// `&a | &b` is [`OrderedSet::union`].
    fn bitor(self, other: Self) -> OrderedSet<T> {
        self.union(other)
    }
}

impl<T: Clone + Ord> BitAnd for &OrderedSet<T> {
    type Output = OrderedSet<T>;

    /// `&a & &b` is [`OrderedSet::intersection`].
    fn bitand(self, other: Self) -> OrderedSet<T> {
        self.intersection(other)
    }
}

impl<T: Clone + Ord> Sub for &OrderedSet<T> {
    type Output = OrderedSet<T>;

    /// `&a - &b` is [`OrderedSet::difference`].
    fn sub(self, other: Self) -> OrderedSet<T> {
        self.difference(other)
    }
}

impl<T: Clone + Ord> BitXor for &OrderedSet<T> {
    type Output = OrderedSet<T>;

    /// `&a ^ &b` is [`OrderedSet::symmetric_difference`].
    fn bitxor(self, other: Self) -> OrderedSet<T> {
        self.symmetric_difference(other)
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for OrderedSet<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct OrderedSetVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> OrderedSetVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for OrderedSetVisitor<T>
where
    T: serde::Deserialize<'de> + Ord,
{
    type Value = OrderedSet<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        // Input order is untrusted: normalize like any other sequence.
        let mut elements: Storage<T> = Storage::new();
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        canonicalize(&mut elements);
        Ok(OrderedSet::from_canonical(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for OrderedSet<T>
where
    T: serde::Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(OrderedSetVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
