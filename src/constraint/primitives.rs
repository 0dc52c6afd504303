//! Primitive constraints
//!
//! Equality, membership, predicate-function and negation constraints.

use std::borrow::{Borrow, Cow};
use std::fmt;

use super::trait_def::{Constraint, Describe};
use super::literal::Literal;

/// Constraint for a value equal to a fixed reference.
///
/// Unlike [`equals`](super::equals), this only needs `PartialEq`, and the
/// reference renders as a literal (`equals "admin"`, `equals 'x'`).
#[derive(Clone, Copy, Debug)]
pub struct Match<T>(pub T);

impl<T: Literal> Describe for Match<T> {
    fn description(&self) -> String {
        format!("equals {}", self.0.literal())
    }
}

impl<V, T> Constraint<V> for Match<T>
where
    V: ?Sized + PartialEq,
    T: Borrow<V> + Literal + Send + Sync,
{
    #[inline]
    fn is_valid(&self, value: &V) -> bool {
        value == self.0.borrow()
    }
}

/// Create a constraint that matches exactly `reference`.
///
/// # Example
///
/// ```rust
/// use constraints::prelude::*;
///
/// let c = matching(String::from("admin"));
/// assert_eq!(c.description(), "equals \"admin\"");
/// assert!(c.is_valid("admin"));
/// assert!(!c.is_valid("root"));
/// ```
pub fn matching<T>(reference: T) -> Match<T> {
    Match(reference)
}

/// Membership constraint: the value must (or, negated, must not) be one of
/// a fixed list of options.
#[derive(Clone, Debug)]
pub struct OneOf<T> {
    negate: bool,
    options: Vec<T>,
}

impl<T> OneOf<T> {
    /// Returns the options, in construction order.
    pub fn options(&self) -> &[T] {
        &self.options
    }

    /// Returns `true` for a `none_of` constraint.
    pub fn is_negated(&self) -> bool {
        self.negate
    }
}

impl<T: fmt::Display> Describe for OneOf<T> {
    fn description(&self) -> String {
        let options = self
            .options
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        if self.negate {
            format!("none of [{}]", options)
        } else {
            format!("one of [{}]", options)
        }
    }
}

impl<V, T> Constraint<V> for OneOf<T>
where
    V: ?Sized + PartialEq,
    T: Borrow<V> + fmt::Display + Send + Sync,
{
    fn is_valid(&self, value: &V) -> bool {
        let found = self.options.iter().any(|option| option.borrow() == value);
        found != self.negate
    }
}

/// Create a constraint satisfied by any of `options`.
///
/// # Example
///
/// ```rust
/// use constraints::prelude::*;
///
/// let c = one_of(["one", "two", "three"]);
/// assert_eq!(c.description(), "one of [one, two, three]");
/// assert!(c.is_valid("two"));
/// assert!(!c.is_valid("four"));
/// ```
pub fn one_of<T, I>(options: I) -> OneOf<T>
where
    I: IntoIterator<Item = T>,
{
    OneOf {
        negate: false,
        options: options.into_iter().collect(),
    }
}

/// Create a constraint satisfied by anything except `options`.
///
/// # Example
///
/// ```rust
/// use constraints::prelude::*;
///
/// let c = none_of(["one", "two", "three"]);
/// assert_eq!(c.description(), "none of [one, two, three]");
/// assert!(!c.is_valid("two"));
/// assert!(c.is_valid("four"));
/// ```
pub fn none_of<T, I>(options: I) -> OneOf<T>
where
    I: IntoIterator<Item = T>,
{
    OneOf {
        negate: true,
        options: options.into_iter().collect(),
    }
}

/// Constraint backed by an arbitrary predicate function.
///
/// Regular expressions, UTF-8 checks and other external predicates plug in
/// here as opaque functions.
///
/// # Example
///
/// ```rust
/// use constraints::prelude::*;
///
/// let c = Func::new("contains an at sign", |v: &str| v.contains('@'));
/// assert!(c.is_valid("user@example.com"));
/// assert!(!c.is_valid("user"));
/// ```
#[derive(Clone)]
pub struct Func<F> {
    description: Cow<'static, str>,
    negate: bool,
    check: F,
}

impl<F> Func<F> {
    /// Create a predicate constraint.
    pub fn new(description: impl Into<Cow<'static, str>>, check: F) -> Self {
        Func {
            description: description.into(),
            negate: false,
            check,
        }
    }

    /// Create a predicate constraint with a static description.
    ///
    /// Usable in `const` items.
    pub const fn from_static(description: &'static str, check: F) -> Self {
        Func {
            description: Cow::Borrowed(description),
            negate: false,
            check,
        }
    }

    /// Flips the outcome of the predicate. The description is kept.
    pub fn inverted(mut self) -> Self {
        self.negate = !self.negate;
        self
    }
}

impl<F> fmt::Debug for Func<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Func")
            .field("description", &self.description)
            .field("negate", &self.negate)
            .finish_non_exhaustive()
    }
}

impl<F> Describe for Func<F> {
    fn description(&self) -> String {
        self.description.to_string()
    }
}

impl<V, F> Constraint<V> for Func<F>
where
    V: ?Sized,
    F: Fn(&V) -> bool + Send + Sync,
{
    #[inline]
    fn is_valid(&self, value: &V) -> bool {
        (self.check)(value) != self.negate
    }
}

/// Negation of another constraint.
#[derive(Clone, Debug)]
pub struct Not<C> {
    inner: C,
    description: Option<String>,
}

impl<C> Not<C> {
    /// Negates `inner`, describing it as `"not "` plus its description.
    pub fn new(inner: C) -> Self {
        Not {
            inner,
            description: None,
        }
    }

    /// Negates `inner` with an explicit description.
    pub fn with_description(inner: C, description: impl Into<String>) -> Self {
        Not {
            inner,
            description: Some(description.into()),
        }
    }

    /// Returns the negated constraint.
    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<C: Describe> Describe for Not<C> {
    fn description(&self) -> String {
        match &self.description {
            Some(description) => description.clone(),
            None => format!("not {}", self.inner.description()),
        }
    }
}

impl<V, C> Constraint<V> for Not<C>
where
    V: ?Sized,
    C: Constraint<V>,
{
    #[inline]
    fn is_valid(&self, value: &V) -> bool {
        !self.inner.is_valid(value)
    }
}

/// Create a negated constraint, optionally overriding its description.
///
/// # Example
///
/// ```rust
/// use constraints::prelude::*;
///
/// let c = negate(one_of(['_', '-']), None::<String>);
/// assert_eq!(c.description(), "not one of [_, -]");
/// assert!(c.is_valid(&'a'));
/// ```
pub fn negate<C>(inner: C, description: Option<impl Into<String>>) -> Not<C> {
    match description {
        Some(description) => Not::with_description(inner, description),
        None => Not::new(inner),
    }
}

/// Constraint evaluating a two-argument predicate between the value and a
/// fixed operand, e.g. "starts with".
#[derive(Clone)]
pub struct Operand<T, F> {
    description: String,
    operand: T,
    check: F,
}

impl<T, F> Operand<T, F> {
    /// Create an operand constraint.
    pub fn new(description: impl Into<String>, operand: T, check: F) -> Self {
        Operand {
            description: description.into(),
            operand,
            check,
        }
    }

    /// Returns the operand.
    pub fn operand(&self) -> &T {
        &self.operand
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Operand<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operand")
            .field("description", &self.description)
            .field("operand", &self.operand)
            .finish_non_exhaustive()
    }
}

impl<T, F> Describe for Operand<T, F> {
    fn description(&self) -> String {
        self.description.clone()
    }
}

impl<V, T, F> Constraint<V> for Operand<T, F>
where
    V: ?Sized,
    T: Borrow<V> + Send + Sync,
    F: Fn(&V, &V) -> bool + Send + Sync,
{
    #[inline]
    fn is_valid(&self, value: &V) -> bool {
        (self.check)(value, self.operand.borrow())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::ConstraintExt;

    #[test]
    fn test_match() {
        let c = matching(7_i32);
        assert_eq!(c.description(), "equals 7");
        assert!(c.is_valid(&7));
        assert!(!c.is_valid(&8));
        assert_eq!(matching('x').description(), "equals 'x'");
    }

    #[test]
    fn test_one_of_preserves_order() {
        let c = one_of([3_i32, 1, 2]);
        assert_eq!(c.description(), "one of [3, 1, 2]");
        assert_eq!(c.options(), &[3, 1, 2]);
        assert!(!c.is_negated());
    }

    #[test]
    fn test_none_of_negates_membership() {
        let yes = one_of(["one", "two", "three"]);
        let no = none_of(["one", "two", "three"]);
        for value in ["one", "two", "three", "four", ""] {
            assert_eq!(yes.is_valid(value), !no.is_valid(value));
        }
    }

    #[test]
    fn test_empty_one_of() {
        let empty: OneOf<i32> = one_of([]);
        assert!(!empty.is_valid(&1));
        assert_eq!(empty.description(), "one of []");
        assert!(none_of(Vec::<i32>::new()).is_valid(&1));
    }

    #[test]
    fn test_func() {
        let c = Func::new("even", |v: &i32| v % 2 == 0);
        assert_eq!(c.description(), "even");
        assert!(c.is_valid(&2));
        assert!(!c.is_valid(&3));
    }

    #[test]
    fn test_func_inverted_keeps_description() {
        let c = Func::new("odd", |v: &i32| v % 2 == 0).inverted();
        assert_eq!(c.description(), "odd");
        assert!(c.is_valid(&3));
        assert!(!c.is_valid(&2));
    }

    #[test]
    fn test_not_description_override() {
        let c = Func::new("blank", |v: &str| v.trim().is_empty()).negate("has content");
        assert_eq!(c.description(), "has content");
        assert!(c.is_valid("x"));
        assert!(!c.is_valid("  "));
    }

    #[test]
    fn test_negate_fn() {
        let c = negate(matching(0_i32), Some("non-zero"));
        assert_eq!(c.description(), "non-zero");
        assert!(c.is_valid(&1));
        assert!(!c.is_valid(&0));
    }

    #[test]
    fn test_operand() {
        fn contains(value: &str, operand: &str) -> bool {
            value.contains(operand)
        }
        let c = Operand::new("contains \"@\"", String::from("@"), contains);
        assert!(c.is_valid("a@b"));
        assert!(!c.is_valid("ab"));
        assert_eq!(c.operand(), "@");
    }
}
