//! Core constraint traits
//!
//! This module provides the foundational [`Constraint`] trait, the
//! value-independent [`Describe`] capability every constraint carries, and the
//! [`ConstraintExt`] trait for method chaining.

use std::fmt;
use std::sync::Arc;

use super::primitives::Not;
use super::set::ConstraintSet;

/// A shared, type-erased constraint over values of type `V`.
///
/// This is the currency of the combinators: sets, `Any` and violation errors
/// all hold their members as `SharedConstraint`s so that a single constraint
/// can be reused across many of them without copying its configuration.
pub type SharedConstraint<V> = Arc<dyn Constraint<V>>;

/// A static, value-independent explanation of a constraint.
///
/// Descriptions read as the completion of "required to be ...", e.g.
/// `"greater than 5"` or `"non-empty"`.
///
/// `Describe` is kept separate from [`Constraint`] because a single
/// constraint may check several value types (a `String` reference can
/// constrain both `String` and `str`), while it only ever has one
/// description.
pub trait Describe {
    /// Returns the description of the constraint.
    fn description(&self) -> String;
}

/// A rule that classifies values of type `V` as valid or invalid.
///
/// Constraints are immutable: whatever configuration they hold (a reference
/// value, a predicate, a list of options) is fixed at construction time.
/// They are `Send + Sync` so they can be shared between threads freely.
///
/// # Example
///
/// ```rust
/// use constraints::prelude::*;
///
/// let c = range(0, 10);
/// assert_eq!(c.description(), "from 0 to 10");
/// assert!(c.is_valid(&10));
/// assert!(!c.is_valid(&11));
/// ```
pub trait Constraint<V: ?Sized>: Describe + Send + Sync {
    /// Checks whether `value` satisfies this constraint.
    fn is_valid(&self, value: &V) -> bool;

    /// Exposes multi-violation reporting if this constraint is a set of
    /// other constraints.
    ///
    /// [`validate_or_error`](crate::validate_or_error) uses this to report
    /// every violated member of a set instead of the set as a whole.
    fn as_constraint_set(&self) -> Option<&dyn ConstraintSet<V>> {
        None
    }

    /// Converts this constraint into a [`SharedConstraint`].
    ///
    /// Already shared constraints are returned as-is, so the resulting
    /// handle points at the same instance.
    fn into_shared(self) -> SharedConstraint<V>
    where
        Self: Sized + 'static,
    {
        Arc::new(self)
    }
}

impl<V: ?Sized> Describe for Arc<dyn Constraint<V>> {
    fn description(&self) -> String {
        (**self).description()
    }
}

impl<V: ?Sized> Constraint<V> for Arc<dyn Constraint<V>> {
    #[inline]
    fn is_valid(&self, value: &V) -> bool {
        (**self).is_valid(value)
    }

    fn as_constraint_set(&self) -> Option<&dyn ConstraintSet<V>> {
        (**self).as_constraint_set()
    }

    fn into_shared(self) -> SharedConstraint<V>
    where
        Self: Sized + 'static,
    {
        self
    }
}

impl<V: ?Sized> fmt::Debug for dyn Constraint<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Constraint")
            .field(&self.description())
            .finish()
    }
}

/// Wraps a constraint into a [`SharedConstraint`].
///
/// # Example
///
/// ```rust
/// use constraints::prelude::*;
///
/// let members: Vec<SharedConstraint<i64>> = vec![shared(min(0_i64)), shared(even::<i64>())];
/// assert_eq!(members.len(), 2);
/// ```
pub fn shared<V, C>(constraint: C) -> SharedConstraint<V>
where
    V: ?Sized,
    C: Constraint<V> + 'static,
{
    constraint.into_shared()
}

/// Checks `value` against `constraint`.
///
/// Free-function form of [`Constraint::is_valid`], handy when the constraint
/// type implements `Constraint` for several value types.
pub fn is_valid<V, C>(constraint: &C, value: &V) -> bool
where
    V: ?Sized,
    C: Constraint<V> + ?Sized,
{
    constraint.is_valid(value)
}

/// Extension trait for constraint combinators.
///
/// # Example
///
/// ```rust
/// use constraints::prelude::*;
///
/// let c = suffix("_").negate("ends with anything but underscore");
/// assert_eq!(c.description(), "ends with anything but underscore");
/// assert!(c.is_valid("john"));
/// assert!(!c.is_valid("john_"));
/// ```
pub trait ConstraintExt: Describe + Sized {
    /// Inverts the constraint. The description becomes `"not "` followed by
    /// the original description.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }

    /// Inverts the constraint and replaces its description.
    fn negate(self, description: impl Into<String>) -> Not<Self> {
        Not::with_description(self, description)
    }
}

impl<C: Describe> ConstraintExt for C {}
