//! Two-pointer merge scans over canonical (strictly ascending) slices.
//!
//! Every function here walks both inputs once, front to back, so each runs in
//! O(n + m). The builders return fresh storage; neither input is modified.
//! Ranges that cannot overlap (`left.last() < right.first()` or the reverse)
//! skip the comparison loop entirely.

use std::cmp::Ordering;

use super::Storage;

/// Returns `true` when every element of one slice is strictly below every
/// element of the other.
#[inline]
fn ranges_disjoint<T: Ord>(left: &[T], right: &[T]) -> bool {
    match (left.first(), left.last(), right.first(), right.last()) {
        (Some(left_first), Some(left_last), Some(right_first), Some(right_last)) => {
            left_last < right_first || right_last < left_first
        }
        _ => true,
    }
}

/// Copies a slice into fresh storage.
#[inline]
fn to_storage<T: Clone>(slice: &[T]) -> Storage<T> {
    slice.iter().cloned().collect()
}

/// Union: emits the smaller head at each step, a shared head once.
pub(super) fn union_slices<T: Clone + Ord>(left: &[T], right: &[T]) -> Storage<T> {
    if left.is_empty() {
        return to_storage(right);
    }
    if right.is_empty() {
        return to_storage(left);
    }

    let mut result = Storage::with_capacity(left.len() + right.len());

    if ranges_disjoint(left, right) {
        let (lower, upper) = if left[0] < right[0] {
            (left, right)
        } else {
            (right, left)
        };
        result.extend(lower.iter().cloned());
        result.extend(upper.iter().cloned());
        return result;
    }

    let mut left_index = 0;
    let mut right_index = 0;

    while left_index < left.len() && right_index < right.len() {
        match left[left_index].cmp(&right[right_index]) {
            Ordering::Less => {
                result.push(left[left_index].clone());
                left_index += 1;
            }
            Ordering::Greater => {
                result.push(right[right_index].clone());
                right_index += 1;
            }
            Ordering::Equal => {
                result.push(left[left_index].clone());
                left_index += 1;
                right_index += 1;
            }
        }
    }

    result.extend(left[left_index..].iter().cloned());
    result.extend(right[right_index..].iter().cloned());
    result
}

/// Intersection: emits only heads that compare equal.
pub(super) fn intersection_slices<T: Clone + Ord>(left: &[T], right: &[T]) -> Storage<T> {
    if ranges_disjoint(left, right) {
        return Storage::new();
    }

    let mut result = Storage::with_capacity(left.len().min(right.len()));
    let mut left_index = 0;
    let mut right_index = 0;

    while left_index < left.len() && right_index < right.len() {
        match left[left_index].cmp(&right[right_index]) {
            Ordering::Less => left_index += 1,
            Ordering::Greater => right_index += 1,
            Ordering::Equal => {
                result.push(left[left_index].clone());
                left_index += 1;
                right_index += 1;
            }
        }
    }

    result
}

/// Difference (`left` minus `right`): keeps the elements only `left` holds.
pub(super) fn difference_slices<T: Clone + Ord>(left: &[T], right: &[T]) -> Storage<T> {
    if ranges_disjoint(left, right) {
        return to_storage(left);
    }

    let mut result = Storage::with_capacity(left.len());
    let mut left_index = 0;
    let mut right_index = 0;

    while left_index < left.len() && right_index < right.len() {
        match left[left_index].cmp(&right[right_index]) {
            Ordering::Less => {
                result.push(left[left_index].clone());
                left_index += 1;
            }
            Ordering::Greater => right_index += 1,
            Ordering::Equal => {
                left_index += 1;
                right_index += 1;
            }
        }
    }

    result.extend(left[left_index..].iter().cloned());
    result
}

/// Symmetric difference: keeps the elements exactly one side holds.
pub(super) fn symmetric_difference_slices<T: Clone + Ord>(left: &[T], right: &[T]) -> Storage<T> {
    if ranges_disjoint(left, right) {
        return union_slices(left, right);
    }

    let mut result = Storage::with_capacity(left.len() + right.len());
    let mut left_index = 0;
    let mut right_index = 0;

    while left_index < left.len() && right_index < right.len() {
        match left[left_index].cmp(&right[right_index]) {
            Ordering::Less => {
                result.push(left[left_index].clone());
                left_index += 1;
            }
            Ordering::Greater => {
                result.push(right[right_index].clone());
                right_index += 1;
            }
            Ordering::Equal => {
                left_index += 1;
                right_index += 1;
            }
        }
    }

    result.extend(left[left_index..].iter().cloned());
    result.extend(right[right_index..].iter().cloned());
    result
}

/// Returns `false` on the first shared element.
pub(super) fn is_disjoint_slices<T: Ord>(left: &[T], right: &[T]) -> bool {
    if ranges_disjoint(left, right) {
        return true;
    }

    let mut left_index = 0;
    let mut right_index = 0;

    while left_index < left.len() && right_index < right.len() {
        match left[left_index].cmp(&right[right_index]) {
            Ordering::Less => left_index += 1,
            Ordering::Greater => right_index += 1,
            Ordering::Equal => return false,
        }
    }

    true
}

/// Returns `false` as soon as an element of `left` is passed over in `right`.
pub(super) fn is_subset_slices<T: Ord>(left: &[T], right: &[T]) -> bool {
    if left.len() > right.len() {
        return false;
    }

    let mut right_index = 0;

    for element in left {
        loop {
            let Some(candidate) = right.get(right_index) else {
                return false;
            };
            match element.cmp(candidate) {
                // `right` is ascending, so nothing further along can match.
                Ordering::Less => return false,
                Ordering::Equal => {
                    right_index += 1;
                    break;
                }
                Ordering::Greater => right_index += 1,
            }
        }
    }

    true
}
