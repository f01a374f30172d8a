//! Pass-through stages that log what flows through a chain.
//!
//! Each method returns a pipeline equal to its input (sharing the same backing
//! data), so it can be dropped into the middle of a chain and removed again
//! without changing results. Output goes through `tracing` at `debug` level
//! under the `ironstream::debug` target; install a subscriber in the test to
//! see it.

use crate::Pipeline;
use std::fmt::Debug;
use tracing::debug;

/// Elements beyond this index are summarized rather than logged one by one.
const INSPECT_LIMIT: usize = 10;

/// Extension trait adding debug stages to [`Pipeline`].
pub trait PipelineDebugExt<T> {
    /// Log the element count and the first few elements under `label`.
    ///
    /// ```
    /// use ironstream::*;
    /// use ironstream::testing::PipelineDebugExt;
    ///
    /// let out = from_vec(vec![1, 2, 3])
    ///     .debug_inspect("after source")
    ///     .filter(|x: &i32| *x > 1)
    ///     .debug_inspect("after filter");
    /// assert_eq!(out.as_slice(), &[2, 3]);
    /// ```
    #[must_use]
    fn debug_inspect(&self, label: &str) -> Pipeline<T>
    where
        T: Debug;

    /// Like [`debug_inspect`](Self::debug_inspect), but also run `inspector`
    /// on every element.
    #[must_use]
    fn debug_inspect_with<F>(&self, label: &str, inspector: F) -> Pipeline<T>
    where
        T: Debug,
        F: Fn(&T);

    /// Log only the element count under `label`.
    #[must_use]
    fn debug_count(&self, label: &str) -> Pipeline<T>;

    /// Log the first `n` elements under `label`.
    #[must_use]
    fn debug_sample(&self, n: usize, label: &str) -> Pipeline<T>
    where
        T: Debug;
}

impl<T> PipelineDebugExt<T> for Pipeline<T> {
    fn debug_inspect(&self, label: &str) -> Self
    where
        T: Debug,
    {
        self.debug_inspect_with(label, |_| {})
    }

    fn debug_inspect_with<F>(&self, label: &str, inspector: F) -> Self
    where
        T: Debug,
        F: Fn(&T),
    {
        debug!(target: "ironstream::debug", label, count = self.len(), "processing elements");
        for (i, item) in self.iter().enumerate() {
            inspector(item);
            if i < INSPECT_LIMIT {
                debug!(target: "ironstream::debug", label, index = i, item = ?item);
            }
        }
        if self.len() > INSPECT_LIMIT {
            debug!(
                target: "ironstream::debug",
                label,
                remaining = self.len() - INSPECT_LIMIT,
                "more elements not shown"
            );
        }
        self.clone()
    }

    fn debug_count(&self, label: &str) -> Self {
        debug!(target: "ironstream::debug", label, count = self.len());
        self.clone()
    }

    fn debug_sample(&self, n: usize, label: &str) -> Self
    where
        T: Debug,
    {
        debug!(
            target: "ironstream::debug",
            label,
            sampled = n.min(self.len()),
            count = self.len(),
            "sampling elements"
        );
        for (i, item) in self.iter().take(n).enumerate() {
            debug!(target: "ironstream::debug", label, index = i, item = ?item);
        }
        self.clone()
    }
}
