//! Character constraints

use super::trait_def::Constraint;
use super::literal::{self, Literal};
use super::primitives::Func;
use super::relational::{range, Range};

fn is_printable(value: &char) -> bool {
    literal::is_printable(*value)
}

/// Valid for characters that render as themselves: letters, digits,
/// punctuation, symbols and the ASCII space.
///
/// Format characters, non-ASCII spaces, separators and unassigned code
/// points are not printable. A printable character never needs escaping in
/// a description.
pub const PRINTABLE: Func<fn(&char) -> bool> =
    Func::from_static("printable character", is_printable as fn(&char) -> bool);

/// Create a constraint for characters appearing in `allowed`.
///
/// # Example
///
/// ```rust
/// use constraints::prelude::*;
///
/// let c = char_from("+-*/");
/// assert_eq!(c.description(), "character from \"+-*/\"");
/// assert!(c.is_valid(&'*'));
/// assert!(!c.is_valid(&'%'));
/// ```
pub fn char_from(allowed: impl Into<String>) -> impl Constraint<char> + Clone {
    let allowed = allowed.into();
    Func::new(
        format!("character from {}", allowed.literal()),
        move |value: &char| allowed.contains(*value),
    )
}

/// Create a constraint for characters between `first` and `last`
/// (inclusive).
///
/// `char_range('a', 'z')` is valid for every lowercase latin letter.
pub fn char_range(first: char, last: char) -> Range<char> {
    range(first, last)
}
