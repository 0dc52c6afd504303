//! Relational constraints
//!
//! This module provides constraints that compare a value against fixed
//! reference values under the value type's ordering.

use std::borrow::Borrow;
use std::fmt;

use super::trait_def::{Constraint, Describe};
use super::literal::Literal;

/// A relational operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RelOp {
    /// `value == reference`
    Equal,
    /// `value != reference`
    NotEqual,
    /// `value < reference`
    Less,
    /// `value <= reference`
    LessOrEqual,
    /// `value > reference`
    Greater,
    /// `value >= reference`
    GreaterOrEqual,
}

impl RelOp {
    /// Every operator, in declaration order.
    pub const ALL: [RelOp; 6] = [
        RelOp::Equal,
        RelOp::NotEqual,
        RelOp::Less,
        RelOp::LessOrEqual,
        RelOp::Greater,
        RelOp::GreaterOrEqual,
    ];

    /// Returns the name of the operator, e.g. `"less or equal"`.
    pub fn name(self) -> &'static str {
        match self {
            RelOp::Equal => "equal",
            RelOp::NotEqual => "not equal",
            RelOp::Less => "less",
            RelOp::LessOrEqual => "less or equal",
            RelOp::Greater => "greater",
            RelOp::GreaterOrEqual => "greater or equal",
        }
    }

    /// Looks an operator up by its [`name`](RelOp::name).
    pub fn from_name(name: &str) -> Option<RelOp> {
        RelOp::ALL.into_iter().find(|op| op.name() == name)
    }

    /// Returns the mathematical symbol of the operator, e.g. `"≤"`.
    pub fn symbol(self) -> &'static str {
        match self {
            RelOp::Equal => "=",
            RelOp::NotEqual => "≠",
            RelOp::Less => "<",
            RelOp::LessOrEqual => "≤",
            RelOp::Greater => ">",
            RelOp::GreaterOrEqual => "≥",
        }
    }

    /// Evaluates `lhs <op> rhs`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use constraints::constraint::RelOp;
    ///
    /// assert!(RelOp::LessOrEqual.holds(&3, &3));
    /// assert!(!RelOp::Greater.holds(&3, &3));
    /// ```
    #[inline]
    pub fn holds<V: ?Sized + PartialOrd>(self, lhs: &V, rhs: &V) -> bool {
        match self {
            RelOp::Equal => lhs == rhs,
            RelOp::NotEqual => lhs != rhs,
            RelOp::Less => lhs < rhs,
            RelOp::LessOrEqual => lhs <= rhs,
            RelOp::Greater => lhs > rhs,
            RelOp::GreaterOrEqual => lhs >= rhs,
        }
    }

    /// Describes a comparison against `reference`, e.g. `"less than 5"`.
    pub fn describe(self, reference: impl fmt::Display) -> String {
        match self {
            RelOp::Equal => format!("equals {}", reference),
            RelOp::NotEqual => format!("not equal to {}", reference),
            RelOp::Less => format!("less than {}", reference),
            RelOp::LessOrEqual => format!("less than or equal to {}", reference),
            RelOp::Greater => format!("greater than {}", reference),
            RelOp::GreaterOrEqual => format!("greater than or equal to {}", reference),
        }
    }
}

impl fmt::Display for RelOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Constraint comparing a value against a reference with a [`RelOp`].
///
/// The reference may be any owned form of the value type, so a
/// `Compare<String>` constrains `str` values as well as `String` ones.
#[derive(Clone, Debug)]
pub struct Compare<T> {
    op: RelOp,
    reference: T,
    label: Option<&'static str>,
}

impl<T> Compare<T> {
    /// Returns the operator.
    pub fn op(&self) -> RelOp {
        self.op
    }

    /// Returns the reference value.
    pub fn reference(&self) -> &T {
        &self.reference
    }
}

impl<T: fmt::Display> Describe for Compare<T> {
    fn description(&self) -> String {
        match self.label {
            Some(label) => format!("{} {}", label, self.reference),
            None => self.op.describe(&self.reference),
        }
    }
}

impl<V, T> Constraint<V> for Compare<T>
where
    V: ?Sized + PartialOrd,
    T: Borrow<V> + fmt::Display + Send + Sync,
{
    #[inline]
    fn is_valid(&self, value: &V) -> bool {
        self.op.holds(value, self.reference.borrow())
    }
}

/// Create a constraint from an operator and a reference value.
///
/// # Example
///
/// ```rust
/// use constraints::prelude::*;
///
/// let c = op(RelOp::NotEqual, 0_i64);
/// assert_eq!(c.description(), "not equal to 0");
/// assert!(c.is_valid(&1));
/// assert!(!c.is_valid(&0));
/// ```
pub fn op<T>(op: RelOp, reference: T) -> Compare<T> {
    Compare {
        op,
        reference,
        label: None,
    }
}

/// Create a constraint requiring the value to equal `reference`.
///
/// # Example
///
/// ```rust
/// use constraints::prelude::*;
///
/// assert_eq!(equals(5_i64).description(), "equals 5");
/// assert!(equals(5_i64).is_valid(&5));
/// ```
pub fn equals<T>(reference: T) -> Compare<T> {
    op(RelOp::Equal, reference)
}

/// Create a constraint requiring the value to differ from `reference`.
pub fn not_equal_to<T>(reference: T) -> Compare<T> {
    op(RelOp::NotEqual, reference)
}

/// Create a constraint requiring the value to be less than `reference`.
///
/// # Example
///
/// ```rust
/// use constraints::prelude::*;
///
/// let c = less_than(0_i64);
/// assert_eq!(c.description(), "less than 0");
/// assert!(c.is_valid(&-1));
/// assert!(!c.is_valid(&0));
/// ```
pub fn less_than<T>(reference: T) -> Compare<T> {
    op(RelOp::Less, reference)
}

/// Create a constraint requiring the value to be at most `reference`.
pub fn less_than_or_equal_to<T>(reference: T) -> Compare<T> {
    op(RelOp::LessOrEqual, reference)
}

/// Create a constraint requiring the value to be greater than `reference`.
pub fn greater_than<T>(reference: T) -> Compare<T> {
    op(RelOp::Greater, reference)
}

/// Create a constraint requiring the value to be at least `reference`.
pub fn greater_than_or_equal_to<T>(reference: T) -> Compare<T> {
    op(RelOp::GreaterOrEqual, reference)
}

/// Create a constraint requiring the value to be at least `reference`,
/// described as `"min N"`.
///
/// # Example
///
/// ```rust
/// use constraints::prelude::*;
///
/// let c = min(5_i64);
/// assert_eq!(c.description(), "min 5");
/// assert!(c.is_valid(&5));
/// assert!(!c.is_valid(&4));
/// ```
pub fn min<T>(reference: T) -> Compare<T> {
    Compare {
        op: RelOp::GreaterOrEqual,
        reference,
        label: Some("min"),
    }
}

/// Create a constraint requiring the value to be at most `reference`,
/// described as `"max N"`.
pub fn max<T>(reference: T) -> Compare<T> {
    Compare {
        op: RelOp::LessOrEqual,
        reference,
        label: Some("max"),
    }
}

/// Constraint for a value within `[min, max]` (inclusive).
#[derive(Clone, Copy, Debug)]
pub struct Range<T> {
    min: T,
    max: T,
}

impl<T> Range<T> {
    /// Returns the lower bound.
    pub fn min(&self) -> &T {
        &self.min
    }

    /// Returns the upper bound.
    pub fn max(&self) -> &T {
        &self.max
    }
}

impl<T: Literal> Describe for Range<T> {
    fn description(&self) -> String {
        format!("from {} to {}", self.min.literal(), self.max.literal())
    }
}

impl<V, T> Constraint<V> for Range<T>
where
    V: ?Sized + PartialOrd,
    T: Borrow<V> + Literal + Send + Sync,
{
    #[inline]
    fn is_valid(&self, value: &V) -> bool {
        value >= self.min.borrow() && value <= self.max.borrow()
    }
}

/// Create a constraint requiring the value to be between `min` and `max`
/// (inclusive).
///
/// # Example
///
/// ```rust
/// use constraints::prelude::*;
///
/// let c = range(0_i64, 10);
/// assert_eq!(c.description(), "from 0 to 10");
/// assert!(c.is_valid(&0));
/// assert!(c.is_valid(&10));
/// assert!(!c.is_valid(&-1));
/// assert!(!c.is_valid(&11));
/// ```
pub fn range<T>(min: T, max: T) -> Range<T> {
    Range { min, max }
}
