//! Exact-schema validation of decoded payloads.
//!
//! A payload is accepted only when its key set is exactly the schema's field
//! set and every field satisfies its rule. Checks run in a fixed order and the
//! first failure is reported:
//!
//! 1. keys not in the schema (extra fields)
//! 2. schema fields absent from the payload (missing fields)
//! 3. per-field rules, in declared schema order

use crate::payload::{FieldValue, Payload};

/// Type rule for one schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// A string that is not empty after trimming whitespace.
    NonEmptyString,
    /// A whole number strictly greater than zero.
    PositiveInteger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub rule: FieldRule,
}

impl FieldSpec {
    pub const fn text(name: &'static str) -> Self {
        FieldSpec {
            name,
            rule: FieldRule::NonEmptyString,
        }
    }

    pub const fn positive_integer(name: &'static str) -> Self {
        FieldSpec {
            name,
            rule: FieldRule::PositiveInteger,
        }
    }
}

/// Ordered list of required fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    pub fields: &'static [FieldSpec],
}

impl Schema {
    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }
}

/// First rule a payload broke.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaViolation {
    #[error("extra field(s): {}", .0.join(", "))]
    ExtraFields(Vec<String>),
    #[error("missing field(s): {}", .0.join(", "))]
    MissingFields(Vec<String>),
    #[error("field '{0}' is empty or not a string")]
    NotNonEmptyString(String),
    #[error("field '{0}' must be an integer")]
    NotInteger(String),
    #[error("field '{0}' must be > 0")]
    NotPositive(String),
}

/// Checks `payload` against `schema` without modifying it.
pub fn validate(payload: &Payload, schema: &Schema) -> Result<(), SchemaViolation> {
    let extra: Vec<String> = payload
        .keys()
        .filter(|k| !schema.contains(k))
        .map(str::to_string)
        .collect();
    if !extra.is_empty() {
        return Err(SchemaViolation::ExtraFields(extra));
    }

    let missing: Vec<String> = schema
        .fields
        .iter()
        .filter(|f| !payload.contains_key(f.name))
        .map(|f| f.name.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(SchemaViolation::MissingFields(missing));
    }

    for field in schema.fields {
        let value = payload.get(field.name);
        match (field.rule, value) {
            (FieldRule::NonEmptyString, Some(FieldValue::Text(s))) if !s.trim().is_empty() => {}
            (FieldRule::NonEmptyString, _) => {
                return Err(SchemaViolation::NotNonEmptyString(field.name.to_string()))
            }
            (FieldRule::PositiveInteger, Some(FieldValue::Integer(n))) if *n > 0 => {}
            (FieldRule::PositiveInteger, Some(FieldValue::Unsigned(_))) => {}
            (FieldRule::PositiveInteger, Some(FieldValue::Integer(_))) => {
                return Err(SchemaViolation::NotPositive(field.name.to_string()))
            }
            (FieldRule::PositiveInteger, _) => {
                return Err(SchemaViolation::NotInteger(field.name.to_string()))
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SCHEMA: Schema = Schema {
        fields: &[
            FieldSpec::text("title"),
            FieldSpec::text("topic"),
            FieldSpec::positive_integer("duration"),
        ],
    };

    fn payload(value: serde_json::Value) -> Payload {
        Payload::from_json_str(&value.to_string()).expect("test payload is an object")
    }

    fn valid() -> Payload {
        payload(json!({"title": "Intro", "topic": "Rust", "duration": 5}))
    }

    #[test]
    fn accepts_exact_payload() {
        assert_eq!(validate(&valid(), &SCHEMA), Ok(()));
    }

    #[test]
    fn extra_key_flips_verdict() {
        let mut p = valid();
        p.insert("colour", FieldValue::Text("red".into()));
        let err = validate(&p, &SCHEMA).unwrap_err();
        assert_eq!(err, SchemaViolation::ExtraFields(vec!["colour".into()]));
        assert!(err.to_string().contains("extra field(s): colour"));
    }

    #[test]
    fn removing_each_required_key_flips_verdict() {
        for field in SCHEMA.fields {
            let mut p = valid();
            p.remove(field.name);
            let err = validate(&p, &SCHEMA).unwrap_err();
            assert_eq!(err, SchemaViolation::MissingFields(vec![field.name.into()]));
            assert!(err.to_string().starts_with("missing field(s)"));
        }
    }

    #[test]
    fn extra_fields_are_reported_before_missing_ones() {
        let p = payload(json!({"title": "Intro", "colour": "red"}));
        assert!(matches!(
            validate(&p, &SCHEMA),
            Err(SchemaViolation::ExtraFields(_))
        ));
    }

    #[test]
    fn blank_and_non_string_text_fields_are_rejected() {
        let p = payload(json!({"title": "   ", "topic": "Rust", "duration": 5}));
        assert_eq!(
            validate(&p, &SCHEMA),
            Err(SchemaViolation::NotNonEmptyString("title".into()))
        );

        let p = payload(json!({"title": "Intro", "topic": 7, "duration": 5}));
        assert_eq!(
            validate(&p, &SCHEMA),
            Err(SchemaViolation::NotNonEmptyString("topic".into()))
        );
    }

    #[test]
    fn rules_are_checked_in_declared_order() {
        let p = payload(json!({"title": "", "topic": "", "duration": 0}));
        assert_eq!(
            validate(&p, &SCHEMA),
            Err(SchemaViolation::NotNonEmptyString("title".into()))
        );
    }

    #[test]
    fn positive_integer_boundary() {
        for (duration, expected) in [
            (json!(0), Err(SchemaViolation::NotPositive("duration".into()))),
            (json!(-1), Err(SchemaViolation::NotPositive("duration".into()))),
            (json!(1), Ok(())),
            (json!(i64::MAX), Ok(())),
            (json!(9_223_372_036_854_775_808u64), Ok(())),
            (json!(u64::MAX), Ok(())),
            (json!("5"), Err(SchemaViolation::NotInteger("duration".into()))),
            (json!(2.5), Err(SchemaViolation::NotInteger("duration".into()))),
        ] {
            let p = payload(json!({"title": "Intro", "topic": "Rust", "duration": duration}));
            assert_eq!(validate(&p, &SCHEMA), expected, "duration = {duration}");
        }
    }

    #[test]
    fn validation_does_not_mutate_payload() {
        let p = valid();
        let before = p.clone();
        let _ = validate(&p, &SCHEMA);
        assert_eq!(p, before);
    }
}
