//! Unit tests for the OrderedSet public API.

use rstest::rstest;
use sorted_set::error::{EmptyCollectionError, SetError};
use sorted_set::ordered_set::OrderedSet;

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_empty_set_has_no_elements() {
    let set: OrderedSet<i32> = OrderedSet::new();
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
    assert_eq!(set, OrderedSet::default());
}

#[rstest]
fn test_from_sequence_sorts_and_deduplicates() {
    let set = OrderedSet::from_sequence(vec![3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5]);
    assert_eq!(set.as_slice(), &[1, 2, 3, 4, 5, 6, 9]);
    assert_eq!(set.len(), 7);
}

#[rstest]
fn test_from_sequence_is_order_independent() {
    let forward = OrderedSet::from_sequence(["pear", "apple", "fig", "apple"]);
    let backward = OrderedSet::from_sequence(["apple", "fig", "apple", "pear"]);
    assert_eq!(forward, backward);
}

#[rstest]
fn test_from_sequence_mapped_applies_function_before_normalizing() {
    let set = OrderedSet::from_sequence_mapped(vec![-3, 1, 2, -1, 3], i32::abs);
    assert_eq!(set.as_slice(), &[1, 2, 3]);
}

#[rstest]
fn test_from_sequence_mapped_changes_element_type() {
    let set: OrderedSet<String> =
        OrderedSet::from_sequence_mapped([3, 1, 2], |number: i32| format!("n{number}"));
    assert_eq!(set.to_vec(), vec!["n1", "n2", "n3"]);
}

#[rstest]
fn test_collect_and_from_array_agree() {
    let collected: OrderedSet<char> = "hello".chars().collect();
    assert_eq!(collected, OrderedSet::from(['e', 'h', 'l', 'o']));
}

// =============================================================================
// Mutation
// =============================================================================

#[rstest]
fn test_insert_returns_new_set_and_keeps_original() {
    let original = OrderedSet::from([10, 30]);
    let inserted = original.insert(20);

    assert_eq!(original.as_slice(), &[10, 30]);
    assert_eq!(inserted.as_slice(), &[10, 20, 30]);
}

#[rstest]
fn test_insert_is_idempotent() {
    let set = OrderedSet::from([1, 2]);
    let once = set.insert(3);
    let twice = once.insert(3);
    assert_eq!(once, twice);
}

#[rstest]
fn test_remove_absent_is_noop() {
    let set = OrderedSet::from([1, 2, 3]);
    assert!(!set.contains(&7));
    assert_eq!(set.remove(&7), set);
}

#[rstest]
fn test_remove_with_borrowed_form() {
    let set = OrderedSet::from(["apple".to_string(), "banana".to_string()]);
    let set = set.remove("apple");
    assert!(!set.contains("apple"));
    assert!(set.contains("banana"));
}

#[rstest]
fn test_different_paths_to_same_members_are_equal() {
    let via_inserts = OrderedSet::new().insert(5).insert(2).insert(9).insert(7).remove(&9);
    let via_removals = OrderedSet::from_sequence(0..10)
        .remove(&0)
        .remove(&1)
        .remove(&3)
        .remove(&4)
        .remove(&6)
        .remove(&8)
        .remove(&9);
    assert_eq!(via_inserts, via_removals);
    assert_eq!(via_inserts.as_slice(), &[2, 5, 7]);
}

// =============================================================================
// Queries
// =============================================================================

#[rstest]
#[case::present(3, true)]
#[case::absent_below(0, false)]
#[case::absent_between(4, false)]
#[case::absent_above(99, false)]
fn test_contains(#[case] element: i32, #[case] expected: bool) {
    let set = OrderedSet::from([1, 3, 5, 7, 9, 11, 13, 15, 17, 19]);
    assert_eq!(set.contains(&element), expected);
}

#[rstest]
fn test_contains_after_insert() {
    let set = OrderedSet::from([1, 2]);
    assert!(set.insert(42).contains(&42));
}

#[rstest]
fn test_min_and_max() {
    let set = OrderedSet::from_sequence([0, 1, 2, 3, 4, 5]);
    assert_eq!(set.min(), Ok(&0));
    assert_eq!(set.max(), Ok(&5));
}

#[rstest]
fn test_min_and_max_on_empty_set_fail() {
    let set: OrderedSet<i32> = OrderedSet::new();
    assert_eq!(set.min(), Err(EmptyCollectionError { operation: "min" }));
    assert_eq!(set.max(), Err(EmptyCollectionError { operation: "max" }));
}

#[rstest]
fn test_min_error_converts_into_set_error() {
    fn smallest(set: &OrderedSet<u8>) -> Result<u8, SetError> {
        Ok(*set.min()?)
    }

    assert_eq!(smallest(&OrderedSet::from([9, 4])), Ok(4));
    assert_eq!(
        smallest(&OrderedSet::new()),
        Err(SetError::EmptyCollection(EmptyCollectionError { operation: "min" }))
    );
}

#[rstest]
fn test_singleton() {
    let set = OrderedSet::singleton("only");
    assert_eq!(set.len(), 1);
    assert_eq!(set.min(), set.max());
}

// =============================================================================
// Set Algebra
// =============================================================================

#[rstest]
fn test_union() {
    let a = OrderedSet::from([1, 2, 3]);
    let b = OrderedSet::from([2, 3, 4]);
    assert_eq!(a.union(&b), OrderedSet::from([1, 2, 3, 4]));
}

#[rstest]
fn test_intersection() {
    let a = OrderedSet::from([1, 2, 3]);
    let b = OrderedSet::from([2, 3, 4]);
    assert_eq!(a.intersection(&b), OrderedSet::from([2, 3]));
}

#[rstest]
fn test_difference_is_asymmetric() {
    let a = OrderedSet::from([1, 2, 3]);
    let b = OrderedSet::from([2, 3, 4]);
    assert_eq!(a.difference(&b), OrderedSet::from([1]));
    assert_eq!(b.difference(&a), OrderedSet::from([4]));
}

#[rstest]
fn test_symmetric_difference() {
    let a = OrderedSet::from([1, 2, 3]);
    let b = OrderedSet::from([2, 3, 4]);
    assert_eq!(a.symmetric_difference(&b), OrderedSet::from([1, 4]));
}

#[rstest]
#[case::separate(vec![1, 2, 3], vec![4, 5, 6], true)]
#[case::touching(vec![4, 5, 6], vec![2, 3, 4], false)]
#[case::empty_left(vec![], vec![1], true)]
fn test_is_disjoint(#[case] left: Vec<i32>, #[case] right: Vec<i32>, #[case] expected: bool) {
    let left = OrderedSet::from(left);
    let right = OrderedSet::from(right);
    assert_eq!(left.is_disjoint(&right), expected);
    assert_eq!(right.is_disjoint(&left), expected);
}

#[rstest]
#[case::single_in_larger(vec![4], vec![4, 5, 6], true)]
#[case::larger_in_single(vec![4, 5, 6], vec![4], false)]
#[case::empty_in_anything(vec![], vec![1, 2], true)]
#[case::equal_sets(vec![1, 2], vec![2, 1], true)]
fn test_is_subset(#[case] left: Vec<i32>, #[case] right: Vec<i32>, #[case] expected: bool) {
    let left = OrderedSet::from(left);
    let right = OrderedSet::from(right);
    assert_eq!(left.is_subset(&right), expected);
    assert_eq!(right.is_superset(&left), expected);
}

#[rstest]
fn test_set_algebra_leaves_inputs_untouched() {
    let a = OrderedSet::from([1, 2, 3]);
    let b = OrderedSet::from([3, 4]);
    let _ = a.union(&b);
    let _ = a.intersection(&b);
    let _ = a.difference(&b);
    assert_eq!(a.as_slice(), &[1, 2, 3]);
    assert_eq!(b.as_slice(), &[3, 4]);
}

// =============================================================================
// Filtering
// =============================================================================

#[rstest]
fn test_filter_and_reject_are_complementary() {
    let set: OrderedSet<i32> = (1..=10).collect();
    let is_multiple_of_three = |element: &i32| element % 3 == 0;

    let kept = set.filter(is_multiple_of_three);
    let dropped = set.reject(is_multiple_of_three);

    assert_eq!(kept.as_slice(), &[3, 6, 9]);
    assert_eq!(kept.union(&dropped), set);
    assert!(kept.intersection(&dropped).is_empty());
}

#[rstest]
fn test_partition_matches_filter_and_reject() {
    let set: OrderedSet<i32> = (1..=10).collect();
    let (kept, dropped) = set.partition(|element| *element > 4);
    assert_eq!(kept, set.filter(|element| *element > 4));
    assert_eq!(dropped, set.reject(|element| *element > 4));
}

#[rstest]
fn test_map_recanonicalizes() {
    let set = OrderedSet::from(["one", "two", "three", "four"]);
    let lengths = set.map(|word| word.len());
    assert_eq!(lengths.as_slice(), &[3, 4, 5]);
}

// =============================================================================
// Iteration and Formatting
// =============================================================================

#[rstest]
fn test_iteration_is_ascending_for_any_construction() {
    let set = OrderedSet::new().insert(3).insert(-4).insert(10).insert(0);
    let ascending: Vec<i32> = set.iter().copied().collect();
    assert_eq!(ascending, vec![-4, 0, 3, 10]);

    let borrowed: Vec<&i32> = (&set).into_iter().collect();
    assert_eq!(borrowed.len(), set.iter().len());
}

#[rstest]
fn test_reverse_ordering_via_wrapper() {
    use std::cmp::Reverse;

    let set = OrderedSet::from_sequence_mapped([1, 3, 2], Reverse);
    let descending: Vec<i32> = set.iter().map(|Reverse(element)| *element).collect();
    assert_eq!(descending, vec![3, 2, 1]);
}

#[rstest]
fn test_display_and_debug() {
    let set = OrderedSet::from(["b", "a"]);
    assert_eq!(format!("{set}"), "{a, b}");
    assert_eq!(format!("{set:?}"), "{\"a\", \"b\"}");
}
