//! Serde support for violation reports (feature-gated)
//!
//! [`RelOp`] round-trips through its [`name`](RelOp::name).
//! [`ViolationError`] serializes as a report:
//!
//! ```json
//! {"message": "required to be non-empty, min length 5", "violated": ["non-empty", "min length 5"]}
//! ```
//!
//! Reports are one-way; constraints hold predicates and cannot be
//! rebuilt from their descriptions.

use serde::de::{self, Visitor};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::error::ViolationError;
use super::relational::RelOp;
use super::trait_def::Describe;

impl Serialize for RelOp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

struct RelOpVisitor;

impl Visitor<'_> for RelOpVisitor {
    type Value = RelOp;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a relational operator name")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<RelOp, E> {
        RelOp::from_name(value).ok_or_else(|| {
            let names: Vec<&'static str> = RelOp::ALL.iter().map(|op| op.name()).collect();
            E::custom(format!(
                "unknown operator {:?}, expected one of {}",
                value,
                names.join(", ")
            ))
        })
    }
}

impl<'de> Deserialize<'de> for RelOp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(RelOpVisitor)
    }
}

impl<V: ?Sized> Serialize for ViolationError<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let violated: Vec<String> = match self.violated_constraint() {
            Some(c) => match c.as_constraint_set() {
                Some(set) => set
                    .constraint_list()
                    .iter()
                    .map(|member| member.description())
                    .collect(),
                None => vec![c.description()],
            },
            None => Vec::new(),
        };

        let mut state = serializer.serialize_struct("ViolationError", 2)?;
        state.serialize_field("message", &self.message())?;
        state.serialize_field("violated", &violated)?;
        state.end()
    }
}
