//! Disjunction of constraints

use std::fmt;

use super::trait_def::{Constraint, Describe, SharedConstraint};

/// Disjunction (OR) of constraints: valid when at least one member is.
///
/// An empty `Any` is invalid for every value, the mirror image of an empty
/// [`Set`](super::Set) being valid for every value.
///
/// # Example
///
/// ```rust
/// use constraints::prelude::*;
///
/// let c: Any<char> = any![char_range('a', 'z'), char_range('0', '9')];
/// assert_eq!(c.description(), "from 'a' to 'z' or from '0' to '9'");
/// assert!(c.is_valid(&'q'));
/// assert!(!c.is_valid(&'Q'));
/// ```
pub struct Any<V: ?Sized> {
    constraints: Vec<SharedConstraint<V>>,
}

impl<V: ?Sized> Any<V> {
    /// Create a disjunction from shared member constraints.
    pub fn new<I>(constraints: I) -> Self
    where
        I: IntoIterator<Item = SharedConstraint<V>>,
    {
        Any {
            constraints: constraints.into_iter().collect(),
        }
    }

    /// Create an empty disjunction.
    pub fn empty() -> Self {
        Any {
            constraints: Vec::new(),
        }
    }

    /// Returns a copy of the member list.
    pub fn constraint_list(&self) -> Vec<SharedConstraint<V>> {
        self.constraints.clone()
    }

    /// Returns the number of members.
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    /// Returns `true` if there are no members.
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }
}

impl<V: ?Sized> Clone for Any<V> {
    fn clone(&self) -> Self {
        Any {
            constraints: self.constraints.clone(),
        }
    }
}

impl<V: ?Sized> fmt::Debug for Any<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Any").field(&self.constraints).finish()
    }
}

impl<V: ?Sized> Describe for Any<V> {
    fn description(&self) -> String {
        self.constraints
            .iter()
            .map(|c| c.description())
            .collect::<Vec<_>>()
            .join(" or ")
    }
}

impl<V: ?Sized> Constraint<V> for Any<V> {
    #[inline]
    fn is_valid(&self, value: &V) -> bool {
        self.constraints.iter().any(|c| c.is_valid(value))
    }
}

/// Build an [`Any`] from constraints of possibly different types.
#[macro_export]
macro_rules! any {
    () => {
        $crate::Any::empty()
    };
    ($($constraint:expr),+ $(,)?) => {
        $crate::Any::new([$($crate::shared($constraint)),+])
    };
}
