//! Username Rules Example
//!
//! Builds a username rule set from small constraints and reports every
//! rule a candidate breaks.
//!
//! Run with: cargo run --example username
//! Or, to see rejected configurations logged: cargo run --example username --features tracing

use constraints::prelude::*;

fn main() -> Result<(), ConfigError> {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Username Rules Example ===\n");

    let rules = username_rules()?;
    println!("rules: {}\n", rules.description());

    for candidate in ["john_doe", "_jd_", "john__doe", "Jane", "a_very_long_username_indeed_2024"] {
        check(&rules, candidate);
    }

    println!("\n--- Rejected configuration ---\n");
    match length_between(32, 6) {
        Ok(c) => println!("unexpectedly built: {}", c.description()),
        Err(e) => println!("length_between(32, 6): {}", e),
    }

    Ok(())
}

fn username_rules() -> Result<Set<str>, ConfigError> {
    let lower = shared(char_range('a', 'z'));
    let digit = shared(char_range('0', '9'));
    let underscore = shared(matching('_'));

    Ok(set![
        length_between(6, 24)?,
        char_at_any(0, [lower.clone()]),
        chars_any([lower, digit, underscore]),
        suffix("_").negate("ends with anything but underscore"),
        no_consecutive('_'),
    ])
}

fn check(rules: &Set<str>, candidate: &str) {
    match validate_or_error(candidate, rules).context(format!("checking {:?}", candidate)) {
        Ok(()) => println!("  {:<34} ok", candidate),
        Err(err) => {
            println!("  {:<34} {}", candidate, err.inner());
            if let Some(violated) = extract_violated_constraint::<str>(&err) {
                if let Some(set) = violated.as_constraint_set() {
                    for member in set.constraint_list() {
                        println!("  {:<34}   - {}", "", member.description());
                    }
                }
            }
        }
    }
}
