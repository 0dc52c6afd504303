//! Scenario tests: a username rule set built from library constraints and
//! an opaque regex predicate

use constraints::prelude::*;
use constraints::{assert_invalid, assert_valid, assert_violations};
use regex::Regex;

fn username_rules() -> Set<str> {
    let pattern = Regex::new(r"^[a-z0-9_]*$").unwrap();
    let allowed = Func::new("lowercase letters, digits or underscore", move |v: &str| {
        pattern.is_match(v)
    });

    set![
        length_between(6, 32).unwrap(),
        char_at_any(0, [shared(char_range('a', 'z'))]),
        suffix("_").negate("ends with anything but underscore"),
        no_consecutive('_'),
        allowed,
    ]
}

#[test]
fn accepts_well_formed_names() {
    let rules = username_rules();
    for name in ["john_doe", "jdoe1984", "a_b_c_d_e"] {
        assert_valid!(rules, name);
    }
}

#[test]
fn reports_every_violation_in_declaration_order() {
    let rules = username_rules();
    assert_violations!(
        rules,
        "_jd_",
        [
            "length between 6 and 32",
            "from 'a' to 'z'",
            "ends with anything but underscore",
        ]
    );
    assert_violations!(
        rules,
        "John__Doe",
        [
            "from 'a' to 'z'",
            "no consecutive '_'",
            "lowercase letters, digits or underscore",
        ]
    );
}

#[test]
fn error_message_lists_violated_rules() {
    let rules = username_rules();
    let err = validate_or_error("john__doe", &rules).unwrap_err();
    assert_eq!(err.to_string(), "required to be no consecutive '_'");

    let err = validate_or_error("ab-c", &rules).unwrap_err();
    assert_eq!(
        err.to_string(),
        "required to be length between 6 and 32, lowercase letters, digits or underscore"
    );
}

#[test]
fn violation_survives_context_and_boxing() {
    fn register(name: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        validate_or_error(name, &username_rules()).context("validating username")?;
        Ok(())
    }

    assert!(register("jane_doe").is_ok());

    let err = register("x").unwrap_err();
    assert_eq!(
        err.to_string(),
        "validating username: required to be length between 6 and 32"
    );

    let violated = extract_violated_constraint::<str>(err.as_ref()).unwrap();
    let members = violated.as_constraint_set().unwrap().constraint_list();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].description(), "length between 6 and 32");
}

#[test]
fn alternatives_with_any() {
    let handle: Any<str> = any![prefix("@"), EMPTY];
    assert_valid!(handle, "@jane");
    assert_valid!(handle, "");
    assert_invalid!(handle, "jane");
    assert_eq!(handle.description(), "prefix \"@\" or empty");
}
