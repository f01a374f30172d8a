//! Group-by: partition a pipeline into keyed buckets.
//!
//! Buckets are collected in a `HashMap` during a single ordered pass, so:
//! - every element lands in exactly one bucket,
//! - each bucket lists its elements in input order,
//! - the order of the buckets themselves is **unspecified**.
//!
//! Compare grouped output with
//! [`assert_groups_equal`](crate::testing::assert_groups_equal), never by
//! position.

use crate::Pipeline;
use crate::callbacks::KeyFn;
use std::collections::HashMap;
use std::hash::Hash;
use tracing::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A key and every element that mapped to it, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Grouping<T, K> {
    pub key: K,
    pub values: Vec<T>,
}

impl<T, K> Grouping<T, K> {
    #[must_use]
    pub const fn new(key: K, values: Vec<T>) -> Self {
        Self { key, values }
    }

    #[must_use]
    pub const fn key(&self) -> &K {
        &self.key
    }

    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn into_parts(self) -> (K, Vec<T>) {
        (self.key, self.values)
    }
}

impl<T: Clone> Pipeline<T> {
    /// Partition the elements by `key`.
    ///
    /// Passing [`KeyFn::identity`] (the absent-key policy) groups equal
    /// elements together. Group order is unspecified.
    ///
    /// ```
    /// use ironstream::*;
    ///
    /// let groups = from_vec(vec![1, 2, 3, 4, 5, 6]).group_by(|v: &i32| v % 2);
    /// assert_eq!(groups.len(), 2);
    /// let odd = groups.iter().find(|g| g.key == 1).unwrap();
    /// assert_eq!(odd.values, vec![1, 3, 5]);
    /// ```
    #[must_use]
    pub fn group_by<'f, K>(&self, key: impl Into<KeyFn<'f, T, K>>) -> Vec<Grouping<T, K>>
    where
        T: 'f,
        K: Eq + Hash,
    {
        self.group_by_map(key)
            .into_iter()
            .map(|(k, values)| Grouping::new(k, values))
            .collect()
    }

    /// Same as `group_by(KeyFn::identity())`.
    #[must_use]
    pub fn group_by_value(&self) -> Vec<Grouping<T, T>>
    where
        T: Eq + Hash,
    {
        self.group_by(KeyFn::<T, T>::identity())
    }

    /// Partition the elements by `key` and return the buckets as a map.
    ///
    /// ```
    /// use ironstream::from_vec;
    ///
    /// let words = from_vec(vec!["ant", "bee", "cat", "wasp"]);
    /// let by_len = words.group_by_map(|w: &&str| w.len());
    /// assert_eq!(by_len[&3], vec!["ant", "bee", "cat"]);
    /// assert_eq!(by_len[&4], vec!["wasp"]);
    /// ```
    #[must_use]
    pub fn group_by_map<'f, K>(&self, key: impl Into<KeyFn<'f, T, K>>) -> HashMap<K, Vec<T>>
    where
        T: 'f,
        K: Eq + Hash,
    {
        let key = key.into();
        let mut buckets: HashMap<K, Vec<T>> = HashMap::new();
        for v in self.data.iter() {
            buckets.entry(key.call(v)).or_default().push(v.clone());
        }
        trace!(
            stage = "group_by",
            input = self.data.len(),
            groups = buckets.len(),
            default_policy = key.is_default()
        );
        buckets
    }
}
