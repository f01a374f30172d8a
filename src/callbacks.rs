//! Slots for caller-supplied functions.
//!
//! Every stage that takes a user function receives it through one of the slot
//! types defined here rather than through a bare closure. A slot is built either
//! from any matching closure (via `From`) or from its documented default, and
//! the default is chosen once, when the slot is built. Stages never inspect
//! whether a function was "absent"; they just call the slot.
//!
//! | Slot              | Signature          | Default                          |
//! |-------------------|--------------------|----------------------------------|
//! | [`Predicate`]     | `Fn(&T) -> bool`   | keep every element               |
//! | [`KeyFn`]         | `Fn(&T) -> K`      | the element is its own key       |
//! | [`FoldFn`]        | `Fn(A, &T) -> A`   | replace the accumulator with `x` |
//!
//! The identity and replace defaults only exist where they type-check: an
//! identity key needs `K == T`, and replacing the accumulator needs `A == T`.
//!
//! ```
//! use ironstream::*;
//!
//! let p = from_vec(vec![1, 2, 3, 2, 1]);
//!
//! // A closure converts into a slot.
//! let evens = p.filter(|v: &i32| v % 2 == 0);
//! assert_eq!(evens.as_slice(), &[2, 2]);
//!
//! // The default slot stands in for "no function".
//! let all = p.filter(Predicate::keep_all());
//! assert_eq!(all.as_slice(), p.as_slice());
//!
//! let unique = p.distinct(KeyFn::identity());
//! assert_eq!(unique.as_slice(), &[1, 2, 3]);
//! ```

use std::fmt;

/// A predicate slot: `Fn(&T) -> bool`.
///
/// Defaults to [`Predicate::keep_all`], which retains every element.
pub struct Predicate<'f, T> {
    f: Box<dyn Fn(&T) -> bool + 'f>,
    default: bool,
}

impl<'f, T> Predicate<'f, T> {
    /// Wrap a predicate closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&T) -> bool + 'f,
    {
        Self {
            f: Box::new(f),
            default: false,
        }
    }

    /// Evaluate the predicate for one element.
    #[inline]
    pub fn call(&self, value: &T) -> bool {
        (self.f)(value)
    }

    /// Whether this slot holds the default policy.
    #[must_use]
    pub const fn is_default(&self) -> bool {
        self.default
    }
}

impl<'f, T: 'f> Predicate<'f, T> {
    /// The absent-predicate policy: every element is kept.
    #[must_use]
    pub fn keep_all() -> Self {
        Self {
            f: Box::new(|_: &T| true),
            default: true,
        }
    }
}

impl<'f, T: 'f> Default for Predicate<'f, T> {
    fn default() -> Self {
        Self::keep_all()
    }
}

impl<'f, T, F> From<F> for Predicate<'f, T>
where
    F: Fn(&T) -> bool + 'f,
{
    fn from(f: F) -> Self {
        Self::new(f)
    }
}

impl<T> fmt::Debug for Predicate<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("default", &self.default)
            .finish_non_exhaustive()
    }
}

/// A key-derivation slot: `Fn(&T) -> K`.
///
/// Used by [`distinct`](crate::Pipeline::distinct),
/// [`group_by`](crate::Pipeline::group_by) and [`to_map`](crate::Pipeline::to_map).
/// When `K == T`, [`KeyFn::identity`] (also the `Default`) uses a clone of the
/// element as its key.
pub struct KeyFn<'f, T, K> {
    f: Box<dyn Fn(&T) -> K + 'f>,
    default: bool,
}

impl<'f, T, K> KeyFn<'f, T, K> {
    /// Wrap a key closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&T) -> K + 'f,
    {
        Self {
            f: Box::new(f),
            default: false,
        }
    }

    /// Derive the key for one element.
    #[inline]
    pub fn call(&self, value: &T) -> K {
        (self.f)(value)
    }

    #[must_use]
    pub const fn is_default(&self) -> bool {
        self.default
    }
}

impl<'f, T: Clone + 'f> KeyFn<'f, T, T> {
    /// The absent-key policy: each element is its own key.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            f: Box::new(|v: &T| v.clone()),
            default: true,
        }
    }
}

impl<'f, T: Clone + 'f> Default for KeyFn<'f, T, T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<'f, T, K, F> From<F> for KeyFn<'f, T, K>
where
    F: Fn(&T) -> K + 'f,
{
    fn from(f: F) -> Self {
        Self::new(f)
    }
}

impl<T, K> fmt::Debug for KeyFn<'_, T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyFn")
            .field("default", &self.default)
            .finish_non_exhaustive()
    }
}

/// A fold slot: `Fn(A, &T) -> A`.
///
/// The accumulator is passed by value and the step returns the next one.
/// When `A == T`, [`FoldFn::replace`] (also the `Default`) discards the
/// accumulator and returns a clone of the current element, so a fold with it
/// yields the last element.
pub struct FoldFn<'f, A, T> {
    f: Box<dyn Fn(A, &T) -> A + 'f>,
    default: bool,
}

impl<'f, A, T> FoldFn<'f, A, T> {
    /// Wrap a fold closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(A, &T) -> A + 'f,
    {
        Self {
            f: Box::new(f),
            default: false,
        }
    }

    /// Apply one fold step.
    #[inline]
    pub fn call(&self, acc: A, value: &T) -> A {
        (self.f)(acc, value)
    }

    #[must_use]
    pub const fn is_default(&self) -> bool {
        self.default
    }
}

impl<'f, T: Clone + 'f> FoldFn<'f, T, T> {
    /// The absent-fold policy: `f(acc, x) = x`.
    #[must_use]
    pub fn replace() -> Self {
        Self {
            f: Box::new(|_acc: T, v: &T| v.clone()),
            default: true,
        }
    }
}

impl<'f, T: Clone + 'f> Default for FoldFn<'f, T, T> {
    fn default() -> Self {
        Self::replace()
    }
}

impl<'f, A, T, F> From<F> for FoldFn<'f, A, T>
where
    F: Fn(A, &T) -> A + 'f,
{
    fn from(f: F) -> Self {
        Self::new(f)
    }
}

impl<A, T> fmt::Debug for FoldFn<'_, A, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FoldFn")
            .field("default", &self.default)
            .finish_non_exhaustive()
    }
}
