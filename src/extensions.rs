//! Extension points for custom pipeline stages.
//!
//! - [`CompositeTransform`]: package a sequence of stages into a reusable,
//!   named component
//!
//! These let you build higher-level abstractions on top of the core stages
//! without touching the crate itself.

use crate::Pipeline;

/// A reusable, packaged sequence of stages.
///
/// Implement this trait to bundle several operations into a single named
/// component, e.g. a normalization step shared by several callers.
///
/// # Type Parameters
/// - `I`: Input element type
/// - `O`: Output element type
///
/// # Example: Email Normalization
/// ```
/// use ironstream::*;
/// use ironstream::extensions::CompositeTransform;
///
/// struct NormalizeEmails;
///
/// impl CompositeTransform<String, String> for NormalizeEmails {
///     fn expand(&self, input: &Pipeline<String>) -> Pipeline<String> {
///         input
///             .map(|email: &String| email.trim().to_lowercase())
///             .filter(|email: &String| email.contains('@'))
///             .distinct_values()
///     }
/// }
///
/// let emails = from_vec(vec![
///     "  Alice@EXAMPLE.com  ".to_string(),
///     "invalid".to_string(),
///     "alice@example.com".to_string(),
///     "bob@test.com".to_string(),
/// ]);
///
/// let normalized = emails.apply_composite(&NormalizeEmails);
/// assert_eq!(normalized.as_slice(), &["alice@example.com", "bob@test.com"]);
/// ```
///
/// # Example: Word Lengths
/// ```
/// use ironstream::*;
/// use ironstream::extensions::CompositeTransform;
///
/// struct WordLengths;
///
/// impl CompositeTransform<String, (String, usize)> for WordLengths {
///     fn expand(&self, input: &Pipeline<String>) -> Pipeline<(String, usize)> {
///         let trimmed = input
///             .filter(|s: &String| !s.trim().is_empty())
///             .map(|s: &String| s.trim().to_string());
///         map_to(&trimmed, |s: &String| (s.clone(), s.len()))
///     }
/// }
///
/// let words = from_vec(vec!["hello".to_string(), "  ".to_string(), " rust ".to_string()]);
/// let lengths = words.apply_composite(&WordLengths);
/// assert_eq!(lengths.as_slice(), &[("hello".to_string(), 5), ("rust".to_string(), 4)]);
/// ```
pub trait CompositeTransform<I, O> {
    /// Expand this composite into concrete stages over `input`.
    fn expand(&self, input: &Pipeline<I>) -> Pipeline<O>;
}

impl<T> Pipeline<T> {
    /// Apply a composite transform to this pipeline.
    #[must_use]
    pub fn apply_composite<O, CT>(&self, transform: &CT) -> Pipeline<O>
    where
        CT: CompositeTransform<T, O>,
    {
        transform.expand(self)
    }
}

/// Any `Fn(&Pipeline<I>) -> Pipeline<O>` is a composite transform.
///
/// ```
/// use ironstream::*;
///
/// let evens_squared = |p: &Pipeline<i32>| p.filter(|v: &i32| v % 2 == 0).map(|v: &i32| v * v);
/// let out = from_vec(vec![1, 2, 3, 4]).apply_composite(&evens_squared);
/// assert_eq!(out.as_slice(), &[4, 16]);
/// ```
impl<I, O, F> CompositeTransform<I, O> for F
where
    F: Fn(&Pipeline<I>) -> Pipeline<O>,
{
    fn expand(&self, input: &Pipeline<I>) -> Pipeline<O> {
        self(input)
    }
}
