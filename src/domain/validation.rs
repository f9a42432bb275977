//! Declarative validation policy for the person payload.
//!
//! Untyped request bodies cross into the domain only through
//! [`validate_person`], which inspects the whole payload before returning:
//! every rule violation is collected so the form can report all of them at
//! once. Unknown keys are silently stripped, never rejected.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::domain::person::PersonDraft;

/// Field-keyed, human-readable validation messages.
///
/// At most one message per field; when several rules flag the same field
/// the later one in policy-evaluation order wins.
pub type FieldErrors = BTreeMap<String, String>;

/// Result of validating a raw payload against the person policy.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome {
    /// The payload satisfied the policy; only declared fields survive.
    Valid(PersonDraft),
    /// One entry per offending field.
    Invalid(FieldErrors),
}

/// Declared type of a payload field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    Text,
    Number,
}

/// A required field in the person payload schema.
struct FieldRule {
    name: &'static str,
    kind: FieldKind,
}

/// Person payload policy: `{name: required string, age: required number}`.
const PERSON_POLICY: &[FieldRule] = &[
    FieldRule {
        name: "name",
        kind: FieldKind::Text,
    },
    FieldRule {
        name: "age",
        kind: FieldKind::Number,
    },
];

enum FieldValue {
    Text(String),
    Number(f64),
}

fn check_field(rule: &FieldRule, value: Option<&Value>) -> Result<FieldValue, String> {
    let Some(value) = value.filter(|v| !v.is_null()) else {
        return Err(format!("{} is required", rule.name));
    };
    match rule.kind {
        FieldKind::Text => match value {
            Value::String(text) if !text.trim().is_empty() => Ok(FieldValue::Text(text.clone())),
            Value::String(_) => Err(format!("{} must not be empty", rule.name)),
            _ => Err(format!("{} must be a string", rule.name)),
        },
        FieldKind::Number => coerce_number(value)
            .map(FieldValue::Number)
            .ok_or_else(|| format!("{} must be a number", rule.name)),
    }
}

/// Numeric strings coerce like JSON numbers; non-finite values are refused.
fn coerce_number(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|number| number.is_finite())
}

/// Validate a raw key-value payload against the person policy.
///
/// Pure over its input. On success the draft carries only the declared
/// fields, coerced to their declared types, and never an `id` — the store
/// assigns one at insertion.
#[must_use]
pub fn validate_person(payload: &Map<String, Value>) -> ValidationOutcome {
    let mut errors = FieldErrors::new();
    let mut name = None;
    let mut age = None;

    for rule in PERSON_POLICY {
        match check_field(rule, payload.get(rule.name)) {
            Ok(FieldValue::Text(value)) => name = Some(value),
            Ok(FieldValue::Number(value)) => age = Some(value),
            Err(message) => {
                errors.insert(rule.name.to_owned(), message);
            }
        }
    }

    match (name, age) {
        (Some(name), Some(age)) if errors.is_empty() => {
            ValidationOutcome::Valid(PersonDraft { name, age })
        }
        _ => ValidationOutcome::Invalid(errors),
    }
}
