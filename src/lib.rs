//! # Constraints
//!
//! Composable, self-describing value constraints.
//!
//! A constraint is a predicate over values of one type together with a
//! human-readable description. Descriptions read as the completion of
//! "required to be ...", so a failed check renders as a sentence without
//! any extra wiring.
//!
//! ## Quick Example
//!
//! ```rust
//! use constraints::prelude::*;
//!
//! // Every rule is checked; violations come back in declaration order
//! let username: Set<str> = set![
//!     NON_EMPTY,
//!     length_between(3, 16)?,
//!     no_consecutive('.'),
//! ];
//!
//! assert!(username.is_valid("jane.doe"));
//!
//! let err = validate_or_error("a..", &username).unwrap_err();
//! assert_eq!(err.to_string(), "required to be no consecutive '.'");
//!
//! let err = validate_or_error("", &username).unwrap_err();
//! assert_eq!(err.to_string(), "required to be non-empty, length between 3 and 16");
//! # Ok::<(), ConfigError>(())
//! ```
//!
//! ## Core Types
//!
//! - [`Constraint`]: a predicate with a description
//! - [`Set`]: all members must hold, every violation is reported
//! - [`Any`]: at least one member must hold
//! - [`ViolationError`]: the error returned by [`validate_or_error`]
//! - [`ContextError`]: wraps any error with a trail of context messages
//!
//! ## Features
//!
//! - `tracing`: emits debug events when a constraint is built from an
//!   invalid configuration
//! - `serde`: serializes [`RelOp`] and violation reports
//! - `proptest`: strategies for property-based tests, see [`testing`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod constraint;
pub mod context;
pub mod testing;

// Re-exports
pub use constraint::*;
pub use context::{ContextError, ResultExt};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::constraint::prelude::*;
    pub use crate::context::{ContextError, ResultExt};
    pub use crate::{any, set};
}
