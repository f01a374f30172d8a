//! Testing utilities for ironstream pipelines.
//!
//! This module bundles helpers for writing tests against pipelines:
//!
//! - **Assertions**: compare pipeline output with expected results
//! - **Test data builders**: generate input data fluently
//! - **Debug utilities**: log what flows through a chain
//! - **Fixtures**: small ready-made datasets
//!
//! # Quick Start
//!
//! ```
//! use ironstream::*;
//! use ironstream::testing::*;
//!
//! let out = from_vec(vec![1, 2, 3]).map(|x: &i32| x * 2);
//! assert_collections_equal(out.as_slice(), &[2, 4, 6]);
//! ```
//!
//! # Assertion Functions
//!
//! - [`assert_collections_equal`]: exact, order-dependent comparison
//! - [`assert_collections_unordered_equal`]: order-independent comparison
//! - [`assert_groups_equal`]: compare `group_by` output, ignoring group order
//! - [`assert_is_subsequence`]: check that a stage only removed elements
//! - [`assert_all`], [`assert_any`], [`assert_none`]: predicate checks
//!
//! # Test Data Builders
//!
//! ```
//! use ironstream::testing::*;
//!
//! let data = TestDataBuilder::<i32>::new()
//!     .add_range(1..=10)
//!     .add_range(20..=25)
//!     .build();
//! assert_eq!(data.len(), 16);
//! ```
//!
//! # Debug Utilities
//!
//! ```
//! use ironstream::*;
//! use ironstream::testing::PipelineDebugExt;
//!
//! let out = from_vec(vec![1, 2, 3])
//!     .debug_inspect("after source")
//!     .map(|x: &i32| x * 2)
//!     .debug_count("after map");
//! assert_eq!(out.as_slice(), &[2, 4, 6]);
//! ```

pub mod assertions;
pub mod builders;
pub mod debug;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use debug::*;
pub use fixtures::*;
