//! Context error handling with error trails
//!
//! This module provides the `ContextError` type, which wraps an error and
//! accumulates context messages as it propagates up the call stack. The
//! wrapped error stays reachable through [`Error::source`](std::error::Error::source),
//! so [`extract_violated_constraint`](crate::extract_violated_constraint)
//! still finds a violation buried under any number of context layers.
//!
//! # Examples
//!
//! ## Basic usage
//!
//! ```
//! use constraints::ContextError;
//!
//! let err = ContextError::new("file not found")
//!     .context("reading config file")
//!     .context("initializing application");
//!
//! assert_eq!(err.inner(), &"file not found");
//! assert_eq!(err.context_trail().len(), 2);
//! ```
//!
//! ## With validation results
//!
//! ```
//! use constraints::prelude::*;
//!
//! let err = validate_or_error(&70_000_i64, &max(65_535_i64))
//!     .context("validating port")
//!     .unwrap_err()
//!     .context("loading settings");
//!
//! assert_eq!(
//!     err.to_string(),
//!     "loading settings: validating port: required to be max 65535"
//! );
//! ```

use std::error::Error as StdError;
use std::fmt;

/// An error wrapper that accumulates context as it propagates
///
/// `ContextError<E>` wraps an underlying error of type `E` and keeps a trail
/// of context messages describing what was being attempted when the error
/// occurred.
///
/// # Examples
///
/// ```
/// use constraints::ContextError;
///
/// let err = ContextError::new("connection refused")
///     .context("connecting to database")
///     .context("initializing user service");
///
/// assert_eq!(
///     err.to_string(),
///     "initializing user service: connecting to database: connection refused"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextError<E> {
    error: E,
    context: Vec<String>,
}

impl<E> ContextError<E> {
    /// Create a new context error
    ///
    /// This wraps an error with an empty context trail. Use the `context` method
    /// to add context layers.
    ///
    /// # Examples
    ///
    /// ```
    /// use constraints::ContextError;
    ///
    /// let err = ContextError::new("base error");
    /// assert_eq!(err.inner(), &"base error");
    /// assert_eq!(err.context_trail(), &[] as &[String]);
    /// ```
    pub fn new(error: E) -> Self {
        ContextError {
            error,
            context: Vec::new(),
        }
    }

    /// Add a context layer
    ///
    /// Context messages are kept in the order they're added, from the
    /// innermost operation to the outermost.
    ///
    /// # Examples
    ///
    /// ```
    /// use constraints::ContextError;
    ///
    /// let err = ContextError::new("parse error")
    ///     .context("reading config file")
    ///     .context("initializing app");
    ///
    /// assert_eq!(err.context_trail(), &["reading config file", "initializing app"]);
    /// ```
    pub fn context(mut self, msg: impl Into<String>) -> Self {
        self.context.push(msg.into());
        self
    }

    /// Get the underlying error
    pub fn inner(&self) -> &E {
        &self.error
    }

    /// Consume and return the underlying error, discarding the trail
    ///
    /// # Examples
    ///
    /// ```
    /// use constraints::ContextError;
    ///
    /// let err = ContextError::new("base error").context("operation failed");
    /// assert_eq!(err.into_inner(), "base error");
    /// ```
    pub fn into_inner(self) -> E {
        self.error
    }

    /// Get the context trail, innermost first
    pub fn context_trail(&self) -> &[String] {
        &self.context
    }
}

impl<E: fmt::Display> fmt::Display for ContextError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ctx in self.context.iter().rev() {
            write!(f, "{}: ", ctx)?;
        }
        write!(f, "{}", self.error)
    }
}

impl<E: StdError + 'static> StdError for ContextError<E> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.error)
    }
}

/// Extension trait for attaching context to a `Result`
///
/// # Examples
///
/// ```
/// use constraints::prelude::*;
///
/// let result = validate_or_error("", &NON_EMPTY).context("reading name");
/// let err = result.unwrap_err();
///
/// assert_eq!(err.context_trail(), &["reading name"]);
/// assert_eq!(err.to_string(), "reading name: required to be non-empty");
/// ```
pub trait ResultExt<T, E> {
    /// Wrap the error, if any, in a [`ContextError`] carrying `msg`.
    fn context(self, msg: impl Into<String>) -> Result<T, ContextError<E>>;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn context(self, msg: impl Into<String>) -> Result<T, ContextError<E>> {
        self.map_err(|e| ContextError::new(e).context(msg))
    }
}
