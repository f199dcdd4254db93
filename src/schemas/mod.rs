//! JSON-shape validation for model output.
//!
//! The completion model returns free text with no schema guarantee, so after
//! generic parsing the value is checked against the schema derived from
//! [`Itinerary`] before deserialization. Deliberately permissive where the
//! contract is: `days` length and `Activity.type` values are never
//! constrained here.

use std::sync::OnceLock;

use jsonschema::{Draft, JSONSchema};
use serde_json::Value;

use crate::error::PlannerError;
use crate::types::Itinerary;

const MAX_SCHEMA_ERRORS: usize = 3;

/// JSON Schema for [`Itinerary`], generated once per process.
pub fn itinerary_schema() -> &'static Value {
    static SCHEMA: OnceLock<Value> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        let root = schemars::schema_for!(Itinerary);
        serde_json::to_value(root).expect("itinerary schema serializes")
    })
}

/// Compiled validator, built once per process like the schema it checks
/// against. A compile failure is remembered and re-reported.
fn compiled_validator() -> std::result::Result<&'static JSONSchema, PlannerError> {
    static COMPILED: OnceLock<std::result::Result<JSONSchema, String>> = OnceLock::new();
    COMPILED
        .get_or_init(|| {
            JSONSchema::options()
                .with_draft(Draft::Draft7)
                .compile(itinerary_schema())
                .map_err(|err| err.to_string())
        })
        .as_ref()
        .map_err(|err| {
            PlannerError::Unknown(format!(
                "Failed to prepare itinerary schema for validation: {err}"
            ))
        })
}

/// Validate a parsed payload against the itinerary schema.
pub fn validate_itinerary_shape(payload: &Value) -> std::result::Result<(), PlannerError> {
    let validator = compiled_validator()?;

    if let Err(errors) = validator.validate(payload) {
        let mut details = Vec::new();
        let mut truncated = false;

        for (idx, error) in errors.enumerate() {
            if idx < MAX_SCHEMA_ERRORS {
                let mut path = error.instance_path.to_string();
                if path.is_empty() {
                    path = "<root>".to_string();
                }
                details.push(format!("{path}: {error}"));
            } else {
                truncated = true;
                break;
            }
        }

        let mut detail_str = if details.is_empty() {
            "payload failed schema validation".to_string()
        } else {
            details.join("; ")
        };

        if truncated {
            detail_str.push_str("; additional errors truncated");
        }

        return Err(PlannerError::MalformedOutput(format!(
            "model output does not match the itinerary shape: {detail_str}"
        )));
    }

    Ok(())
}
