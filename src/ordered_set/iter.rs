//! Ascending iterators over an [`OrderedSet`](super::OrderedSet).

use std::iter::FusedIterator;

use super::INLINE_CAPACITY;

/// Iterator over references to the elements of an `OrderedSet`, in ascending order.
///
/// Created by [`OrderedSet::iter`](super::OrderedSet::iter) and
/// [`OrderedSet::range`](super::OrderedSet::range).
pub struct OrderedSetIterator<'a, T> {
    pub(super) inner: std::slice::Iter<'a, T>,
}

impl<T> Clone for OrderedSetIterator<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T> Iterator for OrderedSetIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for OrderedSetIterator<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for OrderedSetIterator<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for OrderedSetIterator<'_, T> {}

/// Owning iterator over the elements of an `OrderedSet`, in ascending order.
pub struct OrderedSetIntoIterator<T> {
    pub(super) inner: smallvec::IntoIter<[T; INLINE_CAPACITY]>,
}

impl<T> Iterator for OrderedSetIntoIterator<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for OrderedSetIntoIterator<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for OrderedSetIntoIterator<T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for OrderedSetIntoIterator<T> {}
