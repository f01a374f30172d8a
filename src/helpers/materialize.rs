//! Terminal accessors: slices, vectors, maps and iteration.
//!
//! [`Pipeline::as_slice`] exposes the backing sequence by shared reference;
//! the borrow checker rules out mutation through it, so no copy is needed.
//! [`Pipeline::to_vec`] and [`Pipeline::into_vec`] hand out an owned vector.

use crate::Pipeline;
use crate::callbacks::KeyFn;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use tracing::trace;

impl<T> Pipeline<T> {
    /// The current sequence, borrowed.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of elements; the terminal spelling of [`len`](Self::len).
    #[must_use]
    pub fn count(&self) -> usize {
        self.data.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T: Clone> Pipeline<T> {
    /// Copy the current sequence into a new vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.data.as_ref().clone()
    }

    /// Take the sequence out of the pipeline.
    ///
    /// No copy is made when this is the last handle to the data; otherwise
    /// the shared vector is cloned.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        Arc::try_unwrap(self.data).unwrap_or_else(|shared| shared.as_ref().clone())
    }

    /// Index the elements by `key`.
    ///
    /// Elements are visited in order and each one is inserted under its key,
    /// so when two elements share a key the later one wins.
    ///
    /// ```
    /// use ironstream::from_vec;
    ///
    /// let p = from_vec(vec![("a", 1), ("b", 5), ("a", 2)]);
    /// let m = p.to_map(|kv: &(&'static str, i32)| kv.0);
    /// assert_eq!(m.len(), 2);
    /// assert_eq!(m["a"], ("a", 2));
    /// ```
    #[must_use]
    pub fn to_map<'f, K>(&self, key: impl Into<KeyFn<'f, T, K>>) -> HashMap<K, T>
    where
        T: 'f,
        K: Eq + Hash,
    {
        let key = key.into();
        let mut out: HashMap<K, T> = HashMap::with_capacity(self.data.len());
        for v in self.data.iter() {
            out.insert(key.call(v), v.clone());
        }
        trace!(
            stage = "to_map",
            input = self.data.len(),
            keys = out.len(),
            default_policy = key.is_default()
        );
        out
    }
}

impl<T: Clone> IntoIterator for Pipeline<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Pipeline<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
