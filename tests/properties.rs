//! Property-based tests for constraint composition

use proptest::prelude::*;
use std::sync::Arc;

use constraints::{
    extract_violated_constraint, length_between, op, range, shared, validate_or_error, Any,
    Constraint, ConstraintExt, ConstraintSet, Describe, RelOp, Set, SharedConstraint,
};

fn rel_op() -> impl Strategy<Value = RelOp> {
    prop::sample::select(RelOp::ALL.to_vec())
}

fn comparisons() -> impl Strategy<Value = Vec<(RelOp, i64)>> {
    prop::collection::vec((rel_op(), -20i64..20), 0..8)
}

fn build(rules: &[(RelOp, i64)]) -> Vec<SharedConstraint<i64>> {
    rules
        .iter()
        .map(|&(rel, reference)| shared(op(rel, reference)))
        .collect()
}

fn descriptions(constraints: &[SharedConstraint<i64>]) -> Vec<String> {
    constraints.iter().map(|c| c.description()).collect()
}

proptest! {
    #[test]
    fn prop_rel_op_matches_integer_comparison(
        rel in rel_op(),
        value in -50i64..50,
        reference in -50i64..50
    ) {
        let expected = match rel {
            RelOp::Equal => value == reference,
            RelOp::NotEqual => value != reference,
            RelOp::Less => value < reference,
            RelOp::LessOrEqual => value <= reference,
            RelOp::Greater => value > reference,
            RelOp::GreaterOrEqual => value >= reference,
        };
        prop_assert_eq!(op(rel, reference).is_valid(&value), expected);
    }

    #[test]
    fn prop_negation_inverts_validity(
        rel in rel_op(),
        value in -50i64..50,
        reference in -50i64..50
    ) {
        let c = op(rel, reference);
        let description = Describe::description(&c);
        let negated = c.clone().not();

        prop_assert_eq!(negated.is_valid(&value), !c.is_valid(&value));
        prop_assert_eq!(negated.description(), format!("not {}", description));
    }

    #[test]
    fn prop_range_is_inclusive(value in -50i64..50, a in -50i64..50, b in -50i64..50) {
        let (lo, hi) = (a.min(b), a.max(b));
        prop_assert_eq!(range(lo, hi).is_valid(&value), lo <= value && value <= hi);
    }

    #[test]
    fn prop_validate_all_is_the_failing_subsequence(
        rules in comparisons(),
        value in -30i64..30
    ) {
        let members = build(&rules);
        let set: Set<i64> = Set::new(members.iter().cloned());

        let expected: Vec<SharedConstraint<i64>> = members
            .iter()
            .filter(|c| !c.is_valid(&value))
            .cloned()
            .collect();
        let actual = set.validate_all(&value);

        prop_assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(&expected) {
            prop_assert!(Arc::ptr_eq(a, e));
        }

        match (set.validate(&value), expected.first()) {
            (Some(first), Some(e)) => prop_assert!(Arc::ptr_eq(&first, e)),
            (None, None) => {}
            (got, want) => prop_assert!(
                false,
                "validate returned {:?}, expected {:?}",
                got,
                want
            ),
        }
    }

    #[test]
    fn prop_set_and_any_follow_all_and_any(
        rules in comparisons(),
        value in -30i64..30
    ) {
        let members = build(&rules);
        let all = members.iter().all(|c| c.is_valid(&value));
        let some = members.iter().any(|c| c.is_valid(&value));

        prop_assert_eq!(Set::new(members.iter().cloned()).is_valid(&value), all);
        prop_assert_eq!(Any::new(members.iter().cloned()).is_valid(&value), some);
    }

    #[test]
    fn prop_validate_or_error_agrees_with_is_valid(
        rules in comparisons(),
        value in -30i64..30
    ) {
        let set: Set<i64> = Set::new(build(&rules));
        let result = validate_or_error(&value, &set);
        prop_assert_eq!(result.is_ok(), set.is_valid(&value));

        if let Err(err) = result {
            let violated = err.violated_constraint().unwrap();
            let reported = violated.as_constraint_set().unwrap().constraint_list();
            prop_assert_eq!(
                descriptions(&reported),
                descriptions(&set.validate_all(&value))
            );
        }
    }

    #[test]
    fn prop_extract_returns_the_violated_constraint(
        rel in rel_op(),
        value in -30i64..30,
        reference in -30i64..30
    ) {
        let c: SharedConstraint<i64> = shared(op(rel, reference));
        match validate_or_error(&value, &c) {
            Ok(()) => prop_assert!(c.is_valid(&value)),
            Err(err) => {
                let extracted = extract_violated_constraint::<i64>(&err).unwrap();
                prop_assert!(Arc::ptr_eq(&c, &extracted));
            }
        }
    }

    #[test]
    fn prop_length_between_bounds_lengths(
        a in 0usize..20,
        b in 0usize..20,
        items in prop::collection::vec(any::<u8>(), 0..30)
    ) {
        let (lo, hi) = (a.min(b), a.max(b));
        let c = length_between(lo, hi).unwrap();
        prop_assert_eq!(
            Constraint::<[u8]>::is_valid(&c, &items),
            lo <= items.len() && items.len() <= hi
        );
    }
}

#[test]
fn empty_set_accepts_and_empty_any_rejects() {
    for value in [-1_i64, 0, 1] {
        assert!(Set::<i64>::empty().is_valid(&value));
        assert!(Set::<i64>::empty().validate_all(&value).is_empty());
        assert!(!Any::<i64>::empty().is_valid(&value));
    }
}
