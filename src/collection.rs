use crate::callbacks::Predicate;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// An ordered, immutable sequence of `T` with chainable stages.
///
/// Stages borrow `self` and return a new `Pipeline` over a freshly allocated
/// vector, so earlier pipelines in a chain stay valid and unchanged. Cloning a
/// pipeline only bumps a reference count.
pub struct Pipeline<T> {
    pub(crate) data: Arc<Vec<T>>,
}

/// Wrap `data` in a pipeline. The vector is moved in, not copied.
///
/// ```
/// use ironstream::from_vec;
///
/// let p = from_vec(vec![1, 2, 3]);
/// assert_eq!(p.len(), 3);
/// ```
pub fn from_vec<T>(data: Vec<T>) -> Pipeline<T> {
    Pipeline::new(data)
}

impl<T> Pipeline<T> {
    #[must_use]
    pub fn new(data: Vec<T>) -> Self {
        Self {
            data: Arc::new(data),
        }
    }

    /// Transform every element with `f`, keeping order and length.
    ///
    /// Use [`map_to`] when the element type changes.
    ///
    /// ```
    /// use ironstream::from_vec;
    ///
    /// let p = from_vec(vec![1, 2, 3]).map(|v: &i32| v * 2).map(|v: &i32| v + 1);
    /// assert_eq!(p.as_slice(), &[3, 5, 7]);
    /// ```
    #[must_use]
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(&T) -> T,
    {
        map_to(self, f)
    }

    /// Method form of [`map_to`].
    #[must_use]
    pub fn map_to<R, F>(&self, f: F) -> Pipeline<R>
    where
        F: Fn(&T) -> R,
    {
        map_to(self, f)
    }
}

impl<T: Clone> Pipeline<T> {
    /// Keep the elements for which `pred` holds, in their original order.
    ///
    /// Passing [`Predicate::keep_all`] (the absent-predicate policy) copies
    /// the pipeline unchanged.
    ///
    /// ```
    /// use ironstream::*;
    ///
    /// let p = from_vec(vec!["apple", "banana", "cherry", "date"]);
    /// let long = p.filter(|s: &&str| s.len() > 5);
    /// assert_eq!(long.as_slice(), &["banana", "cherry"]);
    /// ```
    #[must_use]
    pub fn filter<'f>(&self, pred: impl Into<Predicate<'f, T>>) -> Self
    where
        T: 'f,
    {
        let pred = pred.into();
        let out: Vec<T> = self.data.iter().filter(|v| pred.call(v)).cloned().collect();
        trace!(
            stage = "filter",
            input = self.data.len(),
            output = out.len(),
            default_policy = pred.is_default()
        );
        Self::new(out)
    }
}

/// Transform every element of `pipeline` into a possibly different type.
///
/// This is a free function because the output element type `R` is unrelated
/// to `T`. The source pipeline is left untouched.
///
/// ```
/// use ironstream::{from_vec, map_to};
///
/// let nums = from_vec(vec![1, 2, 3]);
/// let labels = map_to(&nums, |v: &i32| format!("num-{v}"));
/// assert_eq!(labels.as_slice(), &["num-1", "num-2", "num-3"]);
/// assert_eq!(nums.as_slice(), &[1, 2, 3]);
/// ```
pub fn map_to<T, R, F>(pipeline: &Pipeline<T>, f: F) -> Pipeline<R>
where
    F: Fn(&T) -> R,
{
    let out: Vec<R> = pipeline.data.iter().map(f).collect();
    trace!(stage = "map", input = pipeline.data.len(), output = out.len());
    Pipeline::new(out)
}

impl<T> Clone for Pipeline<T> {
    fn clone(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
        }
    }
}

impl<T> Default for Pipeline<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T: fmt::Debug> fmt::Debug for Pipeline<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Pipeline<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Eq> Eq for Pipeline<T> {}

impl<T> From<Vec<T>> for Pipeline<T> {
    fn from(data: Vec<T>) -> Self {
        Self::new(data)
    }
}

impl<T> FromIterator<T> for Pipeline<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Pipeline<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.data.as_slice().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Pipeline<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::new)
    }
}
