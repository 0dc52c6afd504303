//! Text constraints
//!
//! Constraints over `str`. Length constraints for text live in
//! [`length`](super::length) and apply to any sequence-like value.

use super::trait_def::{Constraint, Describe, SharedConstraint};
use super::literal::Literal;
use super::primitives::{Func, Operand};

/// A canonical constraint over text.
pub type TextConstraint = Func<fn(&str) -> bool>;

fn is_empty(value: &str) -> bool {
    value.is_empty()
}

fn is_non_empty(value: &str) -> bool {
    !value.is_empty()
}

fn is_non_blank(value: &str) -> bool {
    value.is_empty() || !value.trim().is_empty()
}

/// Valid for the empty string only.
pub const EMPTY: TextConstraint = Func::from_static("empty", is_empty as fn(&str) -> bool);

/// Valid for any string except the empty one.
pub const NON_EMPTY: TextConstraint =
    Func::from_static("non-empty", is_non_empty as fn(&str) -> bool);

/// Valid unless the string consists of whitespace only.
///
/// The empty string counts as non-blank.
pub const NON_BLANK: TextConstraint =
    Func::from_static("non-blank", is_non_blank as fn(&str) -> bool);

fn has_prefix(value: &str, prefix: &str) -> bool {
    value.starts_with(prefix)
}

fn has_suffix(value: &str, suffix: &str) -> bool {
    value.ends_with(suffix)
}

/// A constraint between the value and a fixed text operand.
pub type TextOperand = Operand<String, fn(&str, &str) -> bool>;

/// Create a constraint for text starting with `prefix`.
///
/// # Example
///
/// ```rust
/// use constraints::prelude::*;
///
/// let c = prefix("https://");
/// assert_eq!(c.description(), "prefix \"https://\"");
/// assert!(c.is_valid("https://example.com"));
/// assert!(!c.is_valid("http://example.com"));
/// ```
pub fn prefix(prefix: impl Into<String>) -> TextOperand {
    let prefix = prefix.into();
    Operand::new(
        format!("prefix {}", prefix.literal()),
        prefix,
        has_prefix as fn(&str, &str) -> bool,
    )
}

/// Create a constraint for text ending with `suffix`.
pub fn suffix(suffix: impl Into<String>) -> TextOperand {
    let suffix = suffix.into();
    Operand::new(
        format!("suffix {}", suffix.literal()),
        suffix,
        has_suffix as fn(&str, &str) -> bool,
    )
}

/// Create a constraint for text that never repeats `c` back to back.
///
/// # Example
///
/// ```rust
/// use constraints::prelude::*;
///
/// let c = no_consecutive('_');
/// assert_eq!(c.description(), "no consecutive '_'");
/// assert!(c.is_valid("a_b_c"));
/// assert!(!c.is_valid("a__b"));
/// ```
pub fn no_consecutive(c: char) -> impl Constraint<str> + Clone {
    Func::new(format!("no consecutive {}", c.literal()), move |value: &str| {
        !value
            .chars()
            .zip(value.chars().skip(1))
            .any(|(a, b)| a == c && b == c)
    })
}

fn describe_any(constraints: &[SharedConstraint<char>]) -> String {
    constraints
        .iter()
        .map(|c| c.description())
        .collect::<Vec<_>>()
        .join(" or ")
}

/// Create a constraint for text whose every character satisfies at least one
/// of `constraints`.
///
/// # Example
///
/// ```rust
/// use constraints::prelude::*;
///
/// let c = chars_any([shared(char_range('a', 'z')), shared(matching('_'))]);
/// assert_eq!(c.description(), "from 'a' to 'z' or equals '_'");
/// assert!(c.is_valid("snake_case"));
/// assert!(!c.is_valid("camelCase"));
/// ```
pub fn chars_any<I>(constraints: I) -> impl Constraint<str> + Clone
where
    I: IntoIterator<Item = SharedConstraint<char>>,
{
    let members: Vec<SharedConstraint<char>> = constraints.into_iter().collect();
    Func::new(describe_any(&members), move |value: &str| {
        value
            .chars()
            .all(|ch| members.iter().any(|m| m.is_valid(&ch)))
    })
}

/// Create a constraint for text whose character at `index` satisfies at
/// least one of `constraints`.
///
/// A negative index counts from the end (`-1` is the last character). Text
/// too short to have a character at `index` is invalid.
///
/// # Example
///
/// ```rust
/// use constraints::prelude::*;
///
/// let starts_with_letter = char_at_any(0, [shared(char_range('a', 'z'))]);
/// assert!(starts_with_letter.is_valid("user1"));
/// assert!(!starts_with_letter.is_valid("1user"));
/// assert!(!starts_with_letter.is_valid(""));
/// ```
pub fn char_at_any<I>(index: isize, constraints: I) -> impl Constraint<str> + Clone
where
    I: IntoIterator<Item = SharedConstraint<char>>,
{
    let members: Vec<SharedConstraint<char>> = constraints.into_iter().collect();
    Func::new(describe_any(&members), move |value: &str| {
        let ch = if index < 0 {
            value.chars().rev().nth(index.unsigned_abs() - 1)
        } else {
            value.chars().nth(index.unsigned_abs())
        };
        ch.is_some_and(|ch| members.iter().any(|m| m.is_valid(&ch)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::{char_range, matching, shared};

    #[test]
    fn test_empty() {
        assert!(EMPTY.is_valid(""));
        assert!(!EMPTY.is_valid(" "));
        assert!(!NON_EMPTY.is_valid(""));
        assert!(NON_EMPTY.is_valid(" "));
    }

    #[test]
    fn test_non_blank() {
        assert!(NON_BLANK.is_valid(""));
        assert!(NON_BLANK.is_valid(" a "));
        assert!(!NON_BLANK.is_valid(" \t\n"));
        assert_eq!(NON_BLANK.description(), "non-blank");
    }

    #[test]
    fn test_prefix_and_suffix() {
        let p = prefix("usr_");
        assert!(p.is_valid("usr_1"));
        assert!(!p.is_valid("1_usr"));
        let s = suffix("_");
        assert_eq!(s.description(), "suffix \"_\"");
        assert!(s.is_valid("name_"));
        assert!(!s.is_valid("name"));
    }

    #[test]
    fn test_no_consecutive() {
        let c = no_consecutive('.');
        assert!(c.is_valid(""));
        assert!(c.is_valid("a.b.c"));
        assert!(!c.is_valid("a..b"));
        assert!(!c.is_valid(".."));
    }

    #[test]
    fn test_chars_any() {
        let c = chars_any([shared(char_range('0', '9'))]);
        assert!(c.is_valid("0123"));
        assert!(c.is_valid(""));
        assert!(!c.is_valid("12a"));
    }

    #[test]
    fn test_char_at_any() {
        let last_is_digit = char_at_any(-1, [shared(char_range('0', '9'))]);
        assert!(last_is_digit.is_valid("abc1"));
        assert!(!last_is_digit.is_valid("1abc"));
        assert!(!last_is_digit.is_valid(""));

        let second = char_at_any(1, [shared(matching('é'))]);
        assert!(second.is_valid("té"));
        assert!(!second.is_valid("t"));
        assert_eq!(second.description(), "equals 'é'");
    }
}
