//! Composable value constraints
//!
//! This module provides constraints: immutable rules that classify values of
//! a fixed type as valid or invalid and describe themselves in plain words.
//! Constraints combine into sets (all must hold) and disjunctions (at least
//! one must hold), and a failed validation reports exactly which constraints
//! were violated.
//!
//! # Example
//!
//! ```rust
//! use constraints::prelude::*;
//!
//! let username: Set<str> = set![
//!     length_between(6, 32)?,
//!     char_at_any(0, [shared(char_range('a', 'z'))]),
//!     suffix("_").negate("ends with anything but underscore"),
//!     no_consecutive('_'),
//! ];
//!
//! assert!(username.is_valid("john_doe"));
//!
//! let violated = username.validate_all("_jd_");
//! assert_eq!(violated.len(), 3);
//!
//! let err = validate_or_error("john__doe", &username).unwrap_err();
//! assert_eq!(err.to_string(), "required to be no consecutive '_'");
//! # Ok::<(), ConfigError>(())
//! ```

mod any;
mod error;
mod length;
mod literal;
mod numeric;
mod primitives;
mod relational;
mod rune;
mod set;
mod text;
mod trait_def;

#[cfg(feature = "serde")]
mod serde_impl;

pub mod prelude;

// Re-export core traits
pub use literal::Literal;
pub use trait_def::{
    is_valid, shared, Constraint, ConstraintExt, Describe, SharedConstraint,
};

// Re-export combinators
pub use any::Any;
pub use set::{ConstraintSet, Set};

// Re-export primitive constraints
pub use primitives::{matching, negate, none_of, one_of, Func, Match, Not, OneOf, Operand};
pub use relational::{
    equals, greater_than, greater_than_or_equal_to, less_than, less_than_or_equal_to, max, min,
    not_equal_to, op, range, Compare, Range, RelOp,
};

// Re-export length constraints
pub use length::{length, length_between, max_length, min_length, Length, Measure};

// Re-export numeric constraints
pub use numeric::{
    even, is_even, is_negative, is_odd, is_positive, is_power_of_two, negative, odd, positive,
    power_of_two, Integer, Numeric, NumericConstraint, I16_EVEN, I16_NEGATIVE, I16_POSITIVE,
    I32_EVEN, I32_NEGATIVE, I32_POSITIVE, I64_EVEN, I64_NEGATIVE, I64_POSITIVE, I8_EVEN,
    I8_NEGATIVE, I8_POSITIVE, ISIZE_EVEN, ISIZE_NEGATIVE, ISIZE_POSITIVE,
};

// Re-export text and character constraints
pub use rune::{char_from, char_range, PRINTABLE};
pub use text::{
    char_at_any, chars_any, no_consecutive, prefix, suffix, TextConstraint, TextOperand, EMPTY,
    NON_BLANK, NON_EMPTY,
};

// Re-export violation reporting
pub use error::{extract_violated_constraint, validate_or_error, ConfigError, ViolationError};
