//! Assertion functions for testing pipeline outputs.
//!
//! Panicking assertions with detailed messages, for comparing pipeline
//! output against expected results.

use crate::Grouping;
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};

/// Assert element-by-element equality, order included.
///
/// On failure the message names the first differing index and prints both
/// full collections.
///
/// ```
/// use ironstream::from_vec;
/// use ironstream::testing::assert_collections_equal;
///
/// let doubled = from_vec(vec![1, 2, 3]).map(|v: &i32| v * 2);
/// assert_collections_equal(doubled.as_slice(), &[2, 4, 6]);
/// ```
pub fn assert_collections_equal<T: Debug + PartialEq>(actual: &[T], expected: &[T]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Collection length mismatch:\n  Expected length: {}\n  Actual length: {}\n  Expected: {expected:?}\n  Actual: {actual:?}",
        expected.len(),
        actual.len()
    );

    if let Some((i, (a, e))) = actual
        .iter()
        .zip(expected)
        .enumerate()
        .find(|(_, (a, e))| a != e)
    {
        panic!(
            "Collection mismatch at index {i}:\n  Expected: {e:?}\n  Actual: {a:?}\n  Full expected: {expected:?}\n  Full actual: {actual:?}"
        );
    }
}

/// Assert that two collections contain the same elements, ignoring order.
///
/// Both sides are compared as multisets: each distinct element must occur the
/// same number of times. Useful for output whose order is unspecified, such
/// as the concatenated buckets of a `group_by`.
///
/// # Panics
///
/// Panics if the collections differ in content (ignoring order).
///
/// # Example
///
/// ```
/// use ironstream::testing::assert_collections_unordered_equal;
///
/// let actual = vec![3, 1, 2, 1];
/// let expected = vec![1, 1, 2, 3];
/// assert_collections_unordered_equal(&actual, &expected);
/// ```
pub fn assert_collections_unordered_equal<T: Debug + Eq + Hash>(actual: &[T], expected: &[T]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Collection length mismatch:\n  Expected length: {}\n  Actual length: {}\n  Expected: {expected:?}\n  Actual: {actual:?}",
        expected.len(),
        actual.len()
    );

    let actual_counts = element_counts(actual);
    let expected_counts = element_counts(expected);

    if actual_counts != expected_counts {
        let keys: HashSet<&T> = actual_counts.keys().chain(expected_counts.keys()).copied().collect();
        let mut missing = Vec::new();
        let mut extra = Vec::new();
        for k in keys {
            let a = actual_counts.get(k).copied().unwrap_or(0);
            let e = expected_counts.get(k).copied().unwrap_or(0);
            if e > a {
                missing.push(k);
            } else if a > e {
                extra.push(k);
            }
        }

        panic!(
            "Collection content mismatch:\n  Missing elements: {missing:?}\n  Extra elements: {extra:?}\n  Expected: {expected:?}\n  Actual: {actual:?}"
        );
    }
}

fn element_counts<T: Eq + Hash>(items: &[T]) -> HashMap<&T, usize> {
    let mut counts = HashMap::with_capacity(items.len());
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
    }
    counts
}

/// Assert that two `group_by` results hold the same groups.
///
/// Group order is ignored, since [`group_by`](crate::Pipeline::group_by) does
/// not define one. Within each group the values must match exactly, in order.
///
/// # Panics
///
/// Panics if a key is missing, a key appears twice, or a group's values differ.
///
/// # Example
///
/// ```
/// use ironstream::Grouping;
/// use ironstream::testing::assert_groups_equal;
///
/// let actual = vec![Grouping::new(0, vec![2, 4]), Grouping::new(1, vec![1, 3])];
/// let expected = vec![Grouping::new(1, vec![1, 3]), Grouping::new(0, vec![2, 4])];
/// assert_groups_equal(&actual, &expected);
/// ```
pub fn assert_groups_equal<T, K>(actual: &[Grouping<T, K>], expected: &[Grouping<T, K>])
where
    T: Debug + PartialEq,
    K: Debug + Eq + Hash,
{
    assert_eq!(
        actual.len(),
        expected.len(),
        "Group count mismatch:\n  Expected groups: {}\n  Actual groups: {}\n  Expected: {expected:?}\n  Actual: {actual:?}",
        expected.len(),
        actual.len()
    );

    let mut by_key: HashMap<&K, &[T]> = HashMap::with_capacity(actual.len());
    for g in actual {
        let previous = by_key.insert(&g.key, &g.values);
        assert!(
            previous.is_none(),
            "Duplicate group key {:?}:\n  Actual: {actual:?}",
            g.key
        );
    }

    for e in expected {
        match by_key.get(&e.key) {
            Some(values) => assert_eq!(
                *values,
                e.values.as_slice(),
                "Value mismatch for group {:?}:\n  Expected values: {:?}\n  Actual values: {values:?}",
                e.key,
                e.values
            ),
            None => panic!("Missing group for key {:?}:\n  Actual: {actual:?}", e.key),
        }
    }
}

/// Assert that `actual` is a subsequence of `source`.
///
/// Every element of `actual` must appear in `source`, in the same relative
/// order. Useful for stages like `filter` and `distinct` that may only drop
/// elements.
///
/// # Panics
///
/// Panics at the first element of `actual` that cannot be matched.
///
/// # Example
///
/// ```
/// use ironstream::testing::assert_is_subsequence;
///
/// assert_is_subsequence(&[1, 3, 5], &[1, 2, 3, 4, 5]);
/// ```
pub fn assert_is_subsequence<T: Debug + PartialEq>(actual: &[T], source: &[T]) {
    let mut rest = source.iter();
    for (i, item) in actual.iter().enumerate() {
        assert!(
            rest.any(|s| s == item),
            "Element at index {i} breaks subsequence order:\n  Element: {item:?}\n  Actual: {actual:?}\n  Source: {source:?}"
        );
    }
}

/// Assert that every element satisfies `predicate`.
///
/// ```
/// use ironstream::from_vec;
/// use ironstream::testing::assert_all;
///
/// let evens = from_vec(vec![1, 2, 3, 4]).filter(|v: &i32| v % 2 == 0);
/// assert_all(evens.as_slice(), |v| v % 2 == 0);
/// ```
pub fn assert_all<T: Debug>(collection: &[T], predicate: impl Fn(&T) -> bool) {
    if let Some((i, item)) = collection.iter().enumerate().find(|(_, item)| !predicate(*item)) {
        panic!(
            "Predicate failed for element at index {i}:\n  Element: {item:?}\n  Collection: {collection:?}"
        );
    }
}

/// Assert that at least one element satisfies `predicate`.
pub fn assert_any<T: Debug>(collection: &[T], predicate: impl Fn(&T) -> bool) {
    assert!(
        collection.iter().any(predicate),
        "No element satisfied the predicate:\n  Collection: {collection:?}"
    );
}

/// Assert that no element satisfies `predicate`.
pub fn assert_none<T: Debug>(collection: &[T], predicate: impl Fn(&T) -> bool) {
    if let Some((i, item)) = collection.iter().enumerate().find(|(_, item)| predicate(*item)) {
        panic!(
            "Predicate unexpectedly held for element at index {i}:\n  Element: {item:?}\n  Collection: {collection:?}"
        );
    }
}

/// Assert that two maps hold the same keys with equal values.
///
/// Written with [`to_map`](crate::Pipeline::to_map) output in mind.
///
/// ```
/// use ironstream::from_vec;
/// use ironstream::testing::assert_maps_equal;
/// use std::collections::HashMap;
///
/// let m = from_vec(vec!["ab", "cde"]).to_map(|s: &&str| s.len());
/// assert_maps_equal(&m, &HashMap::from([(2, "ab"), (3, "cde")]));
/// ```
pub fn assert_maps_equal<K, V, S: BuildHasher>(
    actual: &HashMap<K, V, S>,
    expected: &HashMap<K, V, S>,
) where
    K: Debug + Eq + Hash,
    V: Debug + PartialEq,
{
    assert_eq!(
        actual.len(),
        expected.len(),
        "HashMap size mismatch:\n  Expected size: {}\n  Actual size: {}\n  Expected: {expected:?}\n  Actual: {actual:?}",
        expected.len(),
        actual.len()
    );

    for (key, expected_value) in expected {
        match actual.get(key) {
            Some(actual_value) if actual_value == expected_value => {}
            Some(actual_value) => panic!(
                "HashMap value mismatch for key {key:?}:\n  Expected: {expected_value:?}\n  Actual: {actual_value:?}"
            ),
            None => panic!("HashMap missing key: {key:?}"),
        }
    }
}
