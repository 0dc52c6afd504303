//! Testing utilities and helpers for constraints
//!
//! This module provides assertion macros for checking values against
//! constraints, and property-based testing support behind the `proptest`
//! feature.
//!
//! # Examples
//!
//! ## Assertion Macros
//!
//! ```rust
//! use constraints::prelude::*;
//! use constraints::{assert_invalid, assert_valid, assert_violations};
//!
//! assert_valid!(min(0_i64), &5_i64);
//! assert_invalid!(NON_BLANK, "   ");
//!
//! let rules: Set<str> = set![NON_EMPTY, min_length(3)?, NON_BLANK];
//! assert_violations!(rules, "", ["non-empty", "min length 3"]);
//! # Ok::<(), ConfigError>(())
//! ```

/// Assert that a value satisfies a constraint.
///
/// The constraint is borrowed and the value is passed by reference. This
/// macro will panic with the constraint's description if the value is
/// invalid.
///
/// # Example
///
/// ```rust
/// use constraints::prelude::*;
/// use constraints::assert_valid;
///
/// assert_valid!(range(1_i64, 10), &7_i64);
/// assert_valid!(prefix("https://"), "https://example.com");
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($constraint:expr, $value:expr) => {{
        let constraint = &$constraint;
        let value = $value;
        if !$crate::is_valid(constraint, value) {
            panic!(
                "Expected {:?} to be valid, violates: {}",
                value,
                $crate::Describe::description(constraint)
            );
        }
    }};
}

/// Assert that a value violates a constraint.
///
/// # Example
///
/// ```rust
/// use constraints::prelude::*;
/// use constraints::assert_invalid;
///
/// assert_invalid!(even::<i64>(), &3_i64);
/// ```
#[macro_export]
macro_rules! assert_invalid {
    ($constraint:expr, $value:expr) => {{
        let constraint = &$constraint;
        let value = $value;
        if $crate::is_valid(constraint, value) {
            panic!(
                "Expected {:?} to be invalid, satisfies: {}",
                value,
                $crate::Describe::description(constraint)
            );
        }
    }};
}

/// Assert that a set reports exactly the listed violations, in order.
///
/// Violations are compared by description.
///
/// # Example
///
/// ```rust
/// use constraints::prelude::*;
/// use constraints::assert_violations;
///
/// let rules: Set<i64> = set![min(0_i64), even::<i64>()];
/// assert_violations!(rules, &-3_i64, ["min 0", "even"]);
/// assert_violations!(rules, &4_i64, []);
/// ```
#[macro_export]
macro_rules! assert_violations {
    ($set:expr, $value:expr, [$($expected:expr),* $(,)?]) => {{
        let actual: ::std::vec::Vec<::std::string::String> =
            $crate::ConstraintSet::validate_all(&$set, $value)
                .iter()
                .map(|c| $crate::Describe::description(c))
                .collect();
        let expected: ::std::vec::Vec<::std::string::String> =
            ::std::vec![$(::std::string::String::from($expected)),*];
        assert_eq!(actual, expected, "violations of {:?}", $value);
    }};
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
use crate::constraint::{Length, RelOp};

#[cfg(feature = "proptest")]
impl Arbitrary for RelOp {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        proptest::sample::select(RelOp::ALL.to_vec()).boxed()
    }
}

/// Strategy producing every relational operator.
#[cfg(feature = "proptest")]
pub fn arb_rel_op() -> impl Strategy<Value = RelOp> {
    any::<RelOp>()
}

/// Strategy producing well-formed length constraints.
///
/// Bounds are drawn below 64, and a lower bound never exceeds an upper one.
#[cfg(feature = "proptest")]
pub fn arb_length() -> impl Strategy<Value = Length> {
    (
        proptest::option::of(0usize..64),
        proptest::option::of(0usize..64),
    )
        .prop_map(|bounds| match bounds {
            (Some(a), Some(b)) => Length::from_bounds(Some(a.min(b)), Some(a.max(b))),
            (min, max) => Length::from_bounds(min, max),
        })
}

#[cfg(test)]
mod tests {
    use crate::constraint::{
        even, max_length, min, min_length, Any, Set, NON_BLANK, NON_EMPTY,
    };

    #[test]
    fn assert_valid_macro() {
        assert_valid!(min(0_i64), &0_i64);
        assert_valid!(NON_EMPTY, "x");
    }

    #[test]
    fn assert_invalid_macro() {
        assert_invalid!(even::<i32>(), &1_i32);
        assert_invalid!(Any::<str>::empty(), "anything");
    }

    #[test]
    fn assert_violations_macro() {
        let rules: Set<str> = crate::set![NON_EMPTY, min_length(2).unwrap(), NON_BLANK];
        assert_violations!(rules, "", ["non-empty", "min length 2"]);
        assert_violations!(rules, " ", ["min length 2", "non-blank"]);
        assert_violations!(rules, "ok", []);
    }

    #[test]
    #[should_panic(expected = "to be valid, violates: max length 3")]
    fn assert_valid_panics_on_violation() {
        assert_valid!(max_length(3).unwrap(), "toolong");
    }

    #[test]
    #[should_panic(expected = "to be invalid, satisfies: min 0")]
    fn assert_invalid_panics_on_valid_value() {
        assert_invalid!(min(0_i64), &1_i64);
    }

    #[test]
    #[should_panic(expected = "violations of")]
    fn assert_violations_panics_on_mismatch() {
        let rules: Set<str> = crate::set![NON_EMPTY];
        assert_violations!(rules, "", []);
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::super::{arb_length, arb_rel_op};
        use crate::constraint::{Constraint, RelOp};
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn arb_rel_op_round_trips_name(op in arb_rel_op()) {
                prop_assert_eq!(RelOp::from_name(op.name()), Some(op));
            }

            #[test]
            fn arb_length_bounds_are_ordered(len in arb_length()) {
                if let (Some(min), Some(max)) = (len.min(), len.max()) {
                    prop_assert!(min <= max);
                }
            }

            #[test]
            fn arb_length_accepts_its_lower_bound(len in arb_length()) {
                let min = len.min().unwrap_or(0);
                let value = vec![0u8; min];
                prop_assert!(Constraint::<Vec<u8>>::is_valid(&len, &value));
            }
        }
    }
}
