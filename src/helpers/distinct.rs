//! Distinct: drop elements whose key has already been seen.
//!
//! # Overview
//! - [`Pipeline::distinct`] - dedupe by a derived key (first occurrence wins)
//! - [`Pipeline::distinct_values`] - dedupe by the element itself
//!
//! Both run a single forward pass with a `HashSet` of seen keys, so the output
//! is always a subsequence of the input.

use crate::Pipeline;
use crate::callbacks::KeyFn;
use std::collections::HashSet;
use std::hash::Hash;
use tracing::trace;

impl<T: Clone> Pipeline<T> {
    /// Remove elements whose key was produced by an earlier element.
    ///
    /// Passing [`KeyFn::identity`] (the absent-key policy) dedupes by value.
    ///
    /// # Example
    /// ```
    /// use ironstream::*;
    ///
    /// #[derive(Clone, Debug, PartialEq)]
    /// struct User { name: &'static str, age: u32 }
    ///
    /// let users = from_vec(vec![
    ///     User { name: "alice", age: 30 },
    ///     User { name: "bob", age: 25 },
    ///     User { name: "alice", age: 31 },
    /// ]);
    /// let out = users.distinct(|u: &User| u.name);
    /// assert_eq!(out.len(), 2);
    /// assert_eq!(out.as_slice()[0].age, 30);
    /// ```
    #[must_use]
    pub fn distinct<'f, K>(&self, key: impl Into<KeyFn<'f, T, K>>) -> Self
    where
        T: 'f,
        K: Eq + Hash,
    {
        let key = key.into();
        let mut seen: HashSet<K> = HashSet::with_capacity(self.data.len());
        let out: Vec<T> = self
            .data
            .iter()
            .filter(|v| seen.insert(key.call(v)))
            .cloned()
            .collect();
        trace!(
            stage = "distinct",
            input = self.data.len(),
            output = out.len(),
            default_policy = key.is_default()
        );
        Self::new(out)
    }

    /// Same as `distinct(KeyFn::identity())`.
    ///
    /// ```
    /// use ironstream::from_vec;
    ///
    /// let out = from_vec(vec![1, 2, 3, 2, 1, 4, 5, 5]).distinct_values();
    /// assert_eq!(out.as_slice(), &[1, 2, 3, 4, 5]);
    /// ```
    #[must_use]
    pub fn distinct_values(&self) -> Self
    where
        T: Eq + Hash,
    {
        self.distinct(KeyFn::<T, T>::identity())
    }
}
