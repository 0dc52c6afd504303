//! Conjunction of constraints
//!
//! A [`Set`] holds an ordered list of member constraints and is valid when
//! every member is. Member order only decides which violation is reported
//! first.

use std::fmt;
use std::slice;

use super::trait_def::{Constraint, Describe, SharedConstraint};

/// A constraint made of other constraints, able to report which of its
/// members a value violates.
pub trait ConstraintSet<V: ?Sized>: Constraint<V> {
    /// Returns the first violated member in declaration order, or `None` if
    /// the value satisfies every member.
    fn validate(&self, value: &V) -> Option<SharedConstraint<V>>;

    /// Returns every violated member, in declaration order.
    fn validate_all(&self, value: &V) -> Vec<SharedConstraint<V>>;

    /// Returns a copy of the member list.
    fn constraint_list(&self) -> Vec<SharedConstraint<V>>;
}

/// Conjunction (AND) of constraints.
///
/// An empty set is valid for every value and has an empty description.
///
/// # Example
///
/// ```rust
/// use constraints::prelude::*;
///
/// let port: Set<i64> = set![min(1_i64), max(65535_i64)];
/// assert_eq!(port.description(), "min 1, max 65535");
/// assert!(port.is_valid(&8080));
///
/// let violated = port.validate(&0).unwrap();
/// assert_eq!(violated.description(), "min 1");
/// ```
pub struct Set<V: ?Sized> {
    constraints: Vec<SharedConstraint<V>>,
}

impl<V: ?Sized> Set<V> {
    /// Create a set from shared member constraints.
    pub fn new<I>(constraints: I) -> Self
    where
        I: IntoIterator<Item = SharedConstraint<V>>,
    {
        Set {
            constraints: constraints.into_iter().collect(),
        }
    }

    /// Create an empty set.
    pub fn empty() -> Self {
        Set {
            constraints: Vec::new(),
        }
    }

    /// Returns a new set with `constraint` appended.
    ///
    /// # Example
    ///
    /// ```rust
    /// use constraints::prelude::*;
    ///
    /// let rules = Set::<str>::empty().with(NON_EMPTY).with(prefix("usr_"));
    /// assert_eq!(rules.description(), "non-empty, prefix \"usr_\"");
    /// ```
    pub fn with<C>(mut self, constraint: C) -> Self
    where
        C: Constraint<V> + 'static,
    {
        self.constraints.push(constraint.into_shared());
        self
    }

    /// Returns the number of members.
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    /// Returns `true` if the set has no members.
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Iterates over the members in order.
    pub fn iter(&self) -> slice::Iter<'_, SharedConstraint<V>> {
        self.constraints.iter()
    }
}

impl<V: ?Sized> Default for Set<V> {
    fn default() -> Self {
        Set::empty()
    }
}

impl<V: ?Sized> Clone for Set<V> {
    fn clone(&self) -> Self {
        Set {
            constraints: self.constraints.clone(),
        }
    }
}

impl<V: ?Sized> fmt::Debug for Set<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Set").field(&self.constraints).finish()
    }
}

impl<'a, V: ?Sized> IntoIterator for &'a Set<V> {
    type Item = &'a SharedConstraint<V>;
    type IntoIter = slice::Iter<'a, SharedConstraint<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V: ?Sized> FromIterator<SharedConstraint<V>> for Set<V> {
    fn from_iter<I: IntoIterator<Item = SharedConstraint<V>>>(iter: I) -> Self {
        Set::new(iter)
    }
}

impl<V: ?Sized> Describe for Set<V> {
    fn description(&self) -> String {
        self.constraints
            .iter()
            .map(|c| c.description())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl<V: ?Sized> Constraint<V> for Set<V> {
    #[inline]
    fn is_valid(&self, value: &V) -> bool {
        self.constraints.iter().all(|c| c.is_valid(value))
    }

    fn as_constraint_set(&self) -> Option<&dyn ConstraintSet<V>> {
        Some(self)
    }
}

impl<V: ?Sized> ConstraintSet<V> for Set<V> {
    fn validate(&self, value: &V) -> Option<SharedConstraint<V>> {
        self.constraints
            .iter()
            .find(|c| !c.is_valid(value))
            .cloned()
    }

    fn validate_all(&self, value: &V) -> Vec<SharedConstraint<V>> {
        self.constraints
            .iter()
            .filter(|c| !c.is_valid(value))
            .cloned()
            .collect()
    }

    fn constraint_list(&self) -> Vec<SharedConstraint<V>> {
        self.constraints.clone()
    }
}

/// Build a [`Set`] from constraints of possibly different types.
///
/// # Example
///
/// ```rust
/// use constraints::prelude::*;
///
/// let rules: Set<str> = set![NON_EMPTY, max_length(8)?];
/// assert_eq!(rules.len(), 2);
/// # Ok::<(), ConfigError>(())
/// ```
#[macro_export]
macro_rules! set {
    () => {
        $crate::Set::empty()
    };
    ($($constraint:expr),+ $(,)?) => {
        $crate::Set::new([$($crate::shared($constraint)),+])
    };
}
