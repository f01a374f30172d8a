//! Left folds over a pipeline.
//!
//! - [`Pipeline::reduce`] folds into the element type and supports an absent
//!   seed: the first element becomes the accumulator.
//! - [`Pipeline::fold`] always takes a seed and may use any accumulator type.
//!
//! Neither touches the pipeline's backing vector; the pipeline can be reused
//! after either call.

use crate::Pipeline;
use crate::callbacks::FoldFn;
use tracing::trace;

impl<T: Clone> Pipeline<T> {
    /// Fold the elements left to right into a single `T`.
    ///
    /// - `initial = Some(seed)`: every element is folded into `seed`.
    /// - `initial = None`: the first element is the seed and only the rest are
    ///   folded. On an empty pipeline the result is `None`.
    ///
    /// Passing [`FoldFn::replace`] (the absent-fold policy) makes each step
    /// return the current element, so the result is the last element (or the
    /// seed, for an empty pipeline).
    ///
    /// ```
    /// use ironstream::*;
    ///
    /// let p = from_vec(vec![1, 2, 3, 4, 5]);
    /// assert_eq!(p.reduce(|a: i32, b: &i32| a + b, Some(0)), Some(15));
    /// assert_eq!(p.reduce(|a: i32, b: &i32| a * b, Some(1)), Some(120));
    /// assert_eq!(p.reduce(|a: i32, b: &i32| a + b, None), Some(15));
    ///
    /// let empty: Pipeline<i32> = from_vec(vec![]);
    /// assert_eq!(empty.reduce(|a: i32, b: &i32| a + b, None), None);
    /// ```
    #[must_use]
    pub fn reduce<'f>(&self, f: impl Into<FoldFn<'f, T, T>>, initial: Option<T>) -> Option<T>
    where
        T: 'f,
    {
        let f = f.into();
        let seeded = initial.is_some();
        let (seed, rest) = match initial {
            Some(seed) => (seed, self.data.as_slice()),
            None => {
                let (first, rest) = self.data.split_first()?;
                (first.clone(), rest)
            }
        };
        trace!(
            stage = "reduce",
            input = self.data.len(),
            folded = rest.len(),
            seeded,
            default_policy = f.is_default()
        );
        Some(rest.iter().fold(seed, |acc, v| f.call(acc, v)))
    }
}

impl<T> Pipeline<T> {
    /// Fold every element into `init`, left to right.
    ///
    /// The accumulator type is independent of `T`. An empty pipeline returns
    /// `init` unchanged.
    ///
    /// ```
    /// use ironstream::from_vec;
    /// use std::collections::HashMap;
    ///
    /// let ages = from_vec(vec![30u32, 25, 35]);
    /// let stats = ages.fold(HashMap::new(), |mut acc: HashMap<&'static str, u32>, age: &u32| {
    ///     *acc.entry("total").or_default() += age;
    ///     *acc.entry("count").or_default() += 1;
    ///     acc
    /// });
    /// assert_eq!(stats["total"], 90);
    /// assert_eq!(stats["count"], 3);
    /// ```
    pub fn fold<'f, A>(&self, init: A, f: impl Into<FoldFn<'f, A, T>>) -> A
    where
        T: 'f,
    {
        let f = f.into();
        trace!(stage = "fold", input = self.data.len());
        self.data.iter().fold(init, |acc, v| f.call(acc, v))
    }
}
