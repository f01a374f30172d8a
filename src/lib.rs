//! # Ironstream
//!
//! Eager, chainable processing for in-memory collections. Wrap a `Vec<T>` in a
//! [`Pipeline`], chain transformations, filters and de-duplication, then finish
//! with a grouping, a reduction, or a plain slice/map.
//!
//! ## Key Features
//!
//! - **Chainable stages** - `map`, `filter`, `distinct`, each returning a new pipeline
//! - **Type-changing transforms** - [`map_to`] turns a `Pipeline<T>` into a `Pipeline<R>`
//! - **Terminal operations** - `group_by`, `reduce`, `fold`, `to_map`, `as_slice`
//! - **Typed keys** - keys and accumulators are generic, checked at compile time
//! - **Documented defaults** - every user function has an explicit "absent" policy
//! - **No hidden aliasing** - stages never mutate data another pipeline can see
//!
//! ## Quick Start
//!
//! ```
//! use ironstream::*;
//!
//! let lines = from_vec(vec![
//!     "hello world".to_string(),
//!     "hello rust".to_string(),
//! ]);
//!
//! let words = from_vec(
//!     lines
//!         .iter()
//!         .flat_map(|l| l.split_whitespace().map(String::from))
//!         .collect(),
//! );
//!
//! let unique = words.distinct_values();
//! assert_eq!(unique.as_slice(), &["hello", "world", "rust"]);
//!
//! let total_len = map_to(&unique, |w: &String| w.len()).reduce(|a: usize, b: &usize| a + b, None);
//! assert_eq!(total_len, Some(14));
//! ```
//!
//! ## Core Concepts
//!
//! ### Pipeline
//!
//! A [`Pipeline<T>`] owns one ordered sequence of `T`. Pipelines are:
//! - **Immutable** - every stage allocates a fresh sequence for its output
//! - **Eager** - each stage runs to completion when it is called
//! - **Cheap to clone** - clones share the same read-only backing vector
//!
//! Build one with [`from_vec`], [`Pipeline::new`], `From<Vec<T>>` or `collect()`.
//!
//! ### Stages
//!
//! - [`map`](Pipeline::map) - same-type transform, preserves order and length
//! - [`map_to`] - type-changing transform (free function, also a method)
//! - [`filter`](Pipeline::filter) - keep elements matching a predicate
//! - [`distinct`](Pipeline::distinct) - drop elements whose key was already seen
//!
//! ### Terminal operations
//!
//! - [`group_by`](Pipeline::group_by) - partition into [`Grouping`]s (group order unspecified)
//! - [`reduce`](Pipeline::reduce) - left fold into `T`, optionally seeded
//! - [`fold`](Pipeline::fold) - seeded left fold into any accumulator type
//! - [`to_map`](Pipeline::to_map) - index by key, last write wins
//! - [`as_slice`](Pipeline::as_slice) / [`to_vec`](Pipeline::to_vec) / [`into_vec`](Pipeline::into_vec)
//!
//! ### Absent functions
//!
//! User functions travel through the slot types in [`callbacks`]. A closure
//! converts into a slot; each slot also has a default that stands in for "no
//! function":
//!
//! ```
//! use ironstream::*;
//!
//! let p = from_vec(vec![1, 2, 3, 2, 1, 4, 5, 5]);
//!
//! assert_eq!(p.filter(Predicate::keep_all()), p);
//! assert_eq!(p.distinct(KeyFn::identity()).as_slice(), &[1, 2, 3, 4, 5]);
//! assert_eq!(p.reduce(FoldFn::replace(), None), Some(5));
//! ```
//!
//! ### Grouping
//!
//! ```
//! use ironstream::*;
//! use ironstream::testing::{Person, sample_people};
//!
//! let people = from_vec(sample_people());
//! let groups = people.group_by(|p: &Person| p.age_bracket());
//!
//! let young = groups.iter().find(|g| g.key == "young").unwrap();
//! let names: Vec<_> = young.values.iter().map(|p| p.name.as_str()).collect();
//! assert_eq!(names, ["Alice", "Eve"]);
//! ```
//!
//! Groups come out of a hash map, so never assert on their order; compare
//! with [`testing::assert_groups_equal`] instead.
//!
//! ## Logging
//!
//! Every stage emits a `trace`-level [`tracing`] event with its name, input
//! and output sizes, and whether a default callback was used. The crate never
//! installs a subscriber.
//!
//! ## Feature Flags
//!
//! - `serde` (default) - `Serialize`/`Deserialize` for [`Pipeline`] and [`Grouping`]
//! - `testing` (default) - the [`testing`] module with assertions, builders and fixtures
//!
//! ## Module Overview
//!
//! - [`collection`] - the `Pipeline` type, construction, `map`/`map_to`/`filter`
//! - [`callbacks`] - slots for user functions and their default policies
//! - [`extensions`] - composite transforms
//! - [`testing`] - helpers for writing pipeline tests

pub mod callbacks;
pub mod collection;
pub mod extensions;
pub mod helpers;
#[cfg(feature = "testing")]
pub mod testing;

// General re-exports
pub use callbacks::{FoldFn, KeyFn, Predicate};
pub use collection::{Pipeline, from_vec, map_to};
pub use helpers::Grouping;

