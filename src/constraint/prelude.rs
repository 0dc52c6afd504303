//! Constraint prelude for convenient imports
//!
//! # Example
//!
//! ```rust
//! use constraints::constraint::prelude::*;
//!
//! let percentage = range(0_i64, 100);
//! assert!(percentage.is_valid(&42));
//! ```

// Core traits
pub use super::trait_def::{
    is_valid, shared, Constraint, ConstraintExt, Describe, SharedConstraint,
};

// Combinators
pub use super::any::Any;
pub use super::set::{ConstraintSet, Set};

// Primitive constraints
pub use super::primitives::{matching, negate, none_of, one_of, Func};
pub use super::relational::{
    equals, greater_than, greater_than_or_equal_to, less_than, less_than_or_equal_to, max, min,
    not_equal_to, op, range, RelOp,
};

// Length constraints
pub use super::length::{length, length_between, max_length, min_length};

// Numeric constraints
pub use super::numeric::{even, negative, odd, positive, power_of_two};

// Text and character constraints
pub use super::rune::{char_from, char_range, PRINTABLE};
pub use super::text::{
    char_at_any, chars_any, no_consecutive, prefix, suffix, EMPTY, NON_BLANK, NON_EMPTY,
};

// Violation reporting
pub use super::error::{
    extract_violated_constraint, validate_or_error, ConfigError, ViolationError,
};
