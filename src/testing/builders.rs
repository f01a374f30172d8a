//! Fluent builders and generators for pipeline inputs.

use crate::Pipeline;
use std::ops::RangeInclusive;

/// Accumulates test input and hands it out as a `Vec` or a [`Pipeline`].
///
/// ```
/// use ironstream::testing::TestDataBuilder;
///
/// let data = TestDataBuilder::<i32>::new()
///     .add_range(1..=3)
///     .add_value(3)
///     .add_repeated(7, 2)
///     .build();
///
/// assert_eq!(data, vec![1, 2, 3, 3, 7, 7]);
/// ```
#[derive(Debug, Default)]
pub struct TestDataBuilder<T> {
    data: Vec<T>,
}

impl<T> TestDataBuilder<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    #[must_use]
    pub fn add_value(mut self, value: T) -> Self {
        self.data.push(value);
        self
    }

    #[must_use]
    pub fn add_values(mut self, values: impl IntoIterator<Item = T>) -> Self {
        self.data.extend(values);
        self
    }

    /// Append `count` copies of `value`; handy for seeding duplicates.
    #[must_use]
    pub fn add_repeated(mut self, value: T, count: usize) -> Self
    where
        T: Clone,
    {
        self.data.extend(std::iter::repeat_n(value, count));
        self
    }

    /// Append `count` values produced by `generator(i)` for `i` in `0..count`.
    ///
    /// ```
    /// use ironstream::testing::TestDataBuilder;
    ///
    /// let data = TestDataBuilder::new().add_generated(4, |i| i * i).build();
    /// assert_eq!(data, vec![0, 1, 4, 9]);
    /// ```
    #[must_use]
    pub fn add_generated(mut self, count: usize, generator: impl Fn(usize) -> T) -> Self {
        self.data.extend((0..count).map(generator));
        self
    }

    #[must_use]
    pub fn build(self) -> Vec<T> {
        self.data
    }

    /// Build the dataset and wrap it in a [`Pipeline`].
    ///
    /// ```
    /// use ironstream::testing::TestDataBuilder;
    ///
    /// let p = TestDataBuilder::new().add_repeated("x", 2).build_pipeline();
    /// assert_eq!(p.as_slice(), &["x", "x"]);
    /// ```
    #[must_use]
    pub fn build_pipeline(self) -> Pipeline<T> {
        Pipeline::new(self.data)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T: From<i32>> TestDataBuilder<T> {
    /// Append every integer in `range`, converted into `T`.
    #[must_use]
    pub fn add_range(mut self, range: RangeInclusive<i32>) -> Self {
        self.data.extend(range.map(T::from));
        self
    }
}

/// Deterministic pseudo-random integers in `[min, max)`.
///
/// A fixed-seed linear congruential generator, so the same call always yields
/// the same data. Good enough to shake out order-dependent bugs without
/// pulling in a RNG.
///
/// ```
/// use ironstream::testing::pseudo_random_data;
///
/// let data = pseudo_random_data(50, 0, 10);
/// assert_eq!(data.len(), 50);
/// assert!(data.iter().all(|v| (0..10).contains(v)));
/// assert_eq!(data, pseudo_random_data(50, 0, 10));
/// ```
#[must_use]
pub fn pseudo_random_data(count: usize, min: i32, max: i32) -> Vec<i32> {
    let range = (max - min).cast_unsigned();
    let mut seed: u32 = 12345;
    let mut data = Vec::with_capacity(count);
    for _ in 0..count {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        data.push(((seed / 65536) % range).cast_signed() + min);
    }
    data
}
