//! Violation errors
//!
//! A failed validation is reported as a [`ViolationError`] carrying the
//! violated constraint. When the checked constraint was a set, the error
//! carries a new [`Set`] holding only the members that failed.
//!
//! # Example
//!
//! ```rust
//! use constraints::prelude::*;
//!
//! let rules: Set<str> = set![NON_EMPTY, min_length(5)?, NON_BLANK];
//!
//! let err = validate_or_error("", &rules).unwrap_err();
//! assert_eq!(err.to_string(), "required to be non-empty, min length 5");
//! # Ok::<(), ConfigError>(())
//! ```

use std::error::Error as StdError;
use std::fmt;

use super::trait_def::{Constraint, Describe, SharedConstraint};
use super::set::Set;

/// Error describing which constraint a value violated.
///
/// The failing value itself is not retained.
pub struct ViolationError<V: ?Sized> {
    violated: Option<SharedConstraint<V>>,
}

impl<V: ?Sized> ViolationError<V> {
    /// Create a violation of `constraint`.
    pub fn new<C>(constraint: C) -> Self
    where
        C: Constraint<V> + 'static,
    {
        ViolationError {
            violated: Some(constraint.into_shared()),
        }
    }

    /// Create a violation that does not name a constraint.
    ///
    /// # Example
    ///
    /// ```rust
    /// use constraints::ViolationError;
    ///
    /// let err = ViolationError::<str>::undefined();
    /// assert_eq!(err.to_string(), "constraint violation: <undefined>");
    /// assert!(err.violated_constraint().is_none());
    /// ```
    pub fn undefined() -> Self {
        ViolationError { violated: None }
    }

    /// Returns the violated constraint.
    ///
    /// For a set that failed validation this is a set of the violated
    /// members only, not the original set.
    pub fn violated_constraint(&self) -> Option<SharedConstraint<V>> {
        self.violated.clone()
    }

    /// Returns the rendered message, `"required to be <description>"`.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl<V: ?Sized> Clone for ViolationError<V> {
    fn clone(&self) -> Self {
        ViolationError {
            violated: self.violated.clone(),
        }
    }
}

impl<V: ?Sized> fmt::Display for ViolationError<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.violated {
            Some(constraint) => write!(f, "required to be {}", constraint.description()),
            None => f.write_str("constraint violation: <undefined>"),
        }
    }
}

impl<V: ?Sized> fmt::Debug for ViolationError<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViolationError")
            .field("violated", &self.violated)
            .finish()
    }
}

impl<V: ?Sized + 'static> StdError for ViolationError<V> {}

/// Validates `value` against `constraint`.
///
/// Returns `Ok(())` when the value is valid. When `constraint` is a set,
/// every violated member is collected and the error carries a new set made
/// of them (in their original order). Otherwise the error carries a clone
/// of the constraint itself.
///
/// A constraint that is not `Clone` can be validated once wrapped with
/// [`shared`](super::shared); the error then holds the same `Arc`.
///
/// # Example
///
/// ```rust
/// use constraints::prelude::*;
///
/// assert!(validate_or_error(&5_i64, &min(0_i64)).is_ok());
///
/// let err = validate_or_error(&-5_i64, &min(0_i64)).unwrap_err();
/// assert_eq!(err.message(), "required to be min 0");
///
/// // `Func` over a closure that captures a non-`Clone` value
/// let seen = std::sync::Mutex::new(0_u32);
/// let counted = shared(Func::new("counted", move |_: &i64| {
///     *seen.lock().unwrap() += 1;
///     true
/// }));
/// assert!(validate_or_error(&1_i64, &counted).is_ok());
/// ```
pub fn validate_or_error<V, C>(value: &V, constraint: &C) -> Result<(), ViolationError<V>>
where
    V: ?Sized + 'static,
    C: Constraint<V> + Clone + 'static,
{
    if let Some(set) = constraint.as_constraint_set() {
        let violated = set.validate_all(value);
        return if violated.is_empty() {
            Ok(())
        } else {
            Err(ViolationError::new(Set::new(violated)))
        };
    }
    if constraint.is_valid(value) {
        Ok(())
    } else {
        Err(ViolationError::new(constraint.clone()))
    }
}

/// Finds the violated constraint in an error chain.
///
/// Walks `error` and its [`source`](StdError::source) chain and returns the
/// violated constraint of the first [`ViolationError<V>`] found.
///
/// # Example
///
/// ```rust
/// use constraints::prelude::*;
///
/// let err = validate_or_error(&12_i64, &range(0_i64, 10))
///     .context("validating retry count")
///     .unwrap_err();
///
/// let violated = extract_violated_constraint::<i64>(&err).unwrap();
/// assert_eq!(violated.description(), "from 0 to 10");
/// ```
pub fn extract_violated_constraint<V>(
    error: &(dyn StdError + 'static),
) -> Option<SharedConstraint<V>>
where
    V: ?Sized + 'static,
{
    let mut current = Some(error);
    while let Some(err) = current {
        if let Some(violation) = err.downcast_ref::<ViolationError<V>>() {
            return violation.violated_constraint();
        }
        current = err.source();
    }
    None
}

/// Error raised when a constraint is built from an invalid configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A bound is negative or does not fit in `usize`.
    BoundOutOfRange {
        /// Which bound was rejected, e.g. `"min length"`.
        bound: &'static str,
        /// The rejected value, as given.
        value: String,
    },
    /// The lower bound exceeds the upper bound.
    InvertedBounds {
        /// The lower bound.
        min: usize,
        /// The upper bound.
        max: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::BoundOutOfRange { bound, value } => write!(
                f,
                "{} must be zero or a positive integer, got {}",
                bound, value
            ),
            ConfigError::InvertedBounds { min, max } => write!(
                f,
                "min length {} is greater than max length {}",
                min, max
            ),
        }
    }
}

impl StdError for ConfigError {}
