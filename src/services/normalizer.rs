//! Raw model text to structured [`Itinerary`].
//!
//! Models routinely wrap JSON in markdown code fences despite being told not
//! to; everything else is a malformed-output error, never a partial value.

use serde_json::Value;

use crate::error::{PlannerError, Result};
use crate::schemas::validate_itinerary_shape;
use crate::types::Itinerary;

/// Remove markdown code-fence markers (with or without a `json` tag) and
/// trim surrounding whitespace.
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

/// Convert raw model text into a validated [`Itinerary`].
pub fn parse_itinerary(raw: &str) -> Result<Itinerary> {
    let cleaned = strip_code_fences(raw);

    let payload: Value = serde_json::from_str(&cleaned).map_err(|err| {
        PlannerError::MalformedOutput(format!("model output is not valid JSON: {err}"))
    })?;

    validate_itinerary_shape(&payload)?;

    let raw_json = payload.to_string();
    let mut deserializer = serde_json::Deserializer::from_str(&raw_json);
    let itinerary = serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
        let path = err.path().to_string();
        let location = if path.is_empty() {
            "<root>".to_string()
        } else {
            path
        };
        PlannerError::MalformedOutput(format!(
            "failed to deserialize itinerary at {location}: {err}"
        ))
    })?;

    Ok(itinerary)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: &str = r#"{
        "title": "Two Days in Banswara",
        "summary": "Temples, backwaters and tribal crafts.",
        "days": [
            {
                "day": 1,
                "theme": "Sacred Banswara",
                "activities": [
                    {
                        "time": "7:00 AM",
                        "name": "Tripura Sundari Temple",
                        "description": "Sunrise darshan at the Shakti Peetha.",
                        "type": "temple",
                        "location": "Tripura Sundari",
                        "duration": "2 hours"
                    }
                ],
                "meals": { "breakfast": "Poha", "lunch": "Dal baati", "dinner": "Thali" },
                "stay_suggestion": "Heritage homestay",
                "tips": "Start before sunrise."
            }
        ],
        "packing_tips": ["Comfortable shoes"],
        "best_time_to_visit": "October to March"
    }"#;

    #[test]
    fn parses_unfenced_json() {
        let itinerary = parse_itinerary(PLAIN).unwrap();
        assert_eq!(itinerary.title, "Two Days in Banswara");
        assert_eq!(itinerary.days.len(), 1);
        assert_eq!(itinerary.days[0].activities[0].kind, "temple");
    }

    #[test]
    fn strips_tagged_fences() {
        let fenced = format!("```json\n{PLAIN}\n```");
        let from_fenced = parse_itinerary(&fenced).unwrap();
        let from_plain = parse_itinerary(PLAIN).unwrap();
        assert_eq!(from_fenced.title, from_plain.title);
        assert_eq!(from_fenced.days.len(), from_plain.days.len());
    }

    #[test]
    fn strips_untagged_fences_and_whitespace() {
        let fenced = format!("\n```\n{PLAIN}\n```\n\n");
        assert!(parse_itinerary(&fenced).is_ok());
    }

    #[test]
    fn prose_is_a_malformed_output_error() {
        let err = parse_itinerary("Here is your itinerary! Enjoy Vagad.").unwrap_err();
        assert_eq!(err.error_code(), "MALFORMED_OUTPUT");
    }

    #[test]
    fn wrong_shape_is_rejected_not_coerced() {
        let err = parse_itinerary(r#"{"title": "No days here"}"#).unwrap_err();
        assert_eq!(err.error_code(), "MALFORMED_OUTPUT");
    }

    #[test]
    fn fence_markers_are_removed_wherever_they_appear() {
        let cleaned = strip_code_fences("```json\n{\"a\": 1}\n```");
        assert_eq!(cleaned, "{\"a\": 1}");
        assert_eq!(strip_code_fences("  no fences  "), "no fences");
    }
}
