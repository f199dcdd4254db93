use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Structured multi-day travel plan produced by the completion model.
///
/// `days` is expected to match the requested trip duration but the length is
/// not enforced; content generation is delegated to an external model.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Itinerary {
    /// Catchy itinerary title
    pub title: String,
    /// Two-sentence trip overview
    pub summary: String,
    /// Day-by-day plan, 1-based and in order
    pub days: Vec<DayPlan>,
    /// Optional packing checklist
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packing_tips: Option<Vec<String>>,
    /// Recommended season or months for the trip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_time_to_visit: Option<String>,
    /// Free-text budget estimate (e.g. "₹4,500 - ₹6,000")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_budget_per_person: Option<String>,
}

/// One day of the itinerary.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DayPlan {
    /// 1-based day counter
    pub day: u32,
    /// Short theme for the day
    pub theme: String,
    /// Activities in chronological order
    pub activities: Vec<Activity>,
    /// Breakfast, lunch and dinner suggestions
    pub meals: Meals,
    /// Type of accommodation suggested for the night
    pub stay_suggestion: String,
    /// One local tip for this day
    pub tips: String,
}

/// Fixed meal triple for a day.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Meals {
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
}

/// A single scheduled activity.
///
/// `kind` is advisory: the model is asked for one of the known labels but may
/// emit anything, so it stays a free string here and consumers fall back via
/// [`ActivityKind::from_label`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Activity {
    /// Time-of-day label (e.g. "7:00 AM")
    pub time: String,
    pub name: String,
    pub description: String,
    /// Advisory category label, not validated
    #[serde(rename = "type")]
    pub kind: String,
    /// Specific place name
    pub location: String,
    /// Free-text duration (e.g. "2 hours")
    pub duration: String,
}

impl Activity {
    pub fn kind(&self) -> ActivityKind {
        ActivityKind::from_label(&self.kind)
    }
}

/// Known activity categories with a graceful fallback for anything else the
/// model invents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Temple,
    Nature,
    Craft,
    Food,
    Adventure,
    Heritage,
    Other,
}

impl ActivityKind {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "temple" => ActivityKind::Temple,
            "nature" => ActivityKind::Nature,
            "craft" => ActivityKind::Craft,
            "food" => ActivityKind::Food,
            "adventure" => ActivityKind::Adventure,
            "heritage" => ActivityKind::Heritage,
            _ => ActivityKind::Other,
        }
    }

    /// Display glyph used by list renderings.
    pub fn icon(&self) -> &'static str {
        match self {
            ActivityKind::Temple => "🛕",
            ActivityKind::Nature => "🌿",
            ActivityKind::Craft => "🎨",
            ActivityKind::Food => "🍽️",
            ActivityKind::Adventure => "🚵",
            ActivityKind::Heritage => "🏛️",
            ActivityKind::Other => "📌",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_activity_labels_fall_back() {
        assert_eq!(ActivityKind::from_label("temple"), ActivityKind::Temple);
        assert_eq!(ActivityKind::from_label("Heritage"), ActivityKind::Heritage);
        assert_eq!(ActivityKind::from_label("waterfall"), ActivityKind::Other);
        assert_eq!(ActivityKind::from_label(""), ActivityKind::Other);
        assert_eq!(ActivityKind::Other.icon(), "📌");
    }

    #[test]
    fn activity_kind_comes_from_the_free_label() {
        let activity = Activity {
            time: "4:00 PM".to_string(),
            name: "Bamboo weaving demo".to_string(),
            description: "Watch a Bhil artisan at work.".to_string(),
            kind: "craft".to_string(),
            location: "Ghatol".to_string(),
            duration: "1 hour".to_string(),
        };
        assert_eq!(activity.kind(), ActivityKind::Craft);
        assert_eq!(activity.kind().icon(), "🎨");
    }

    #[test]
    fn optional_sections_may_be_absent() {
        let raw = serde_json::json!({
            "title": "Weekend in Banswara",
            "summary": "Two days of temples and backwaters.",
            "days": []
        });
        let itinerary: Itinerary = serde_json::from_value(raw).unwrap();
        assert!(itinerary.packing_tips.is_none());
        assert!(itinerary.best_time_to_visit.is_none());
    }
}
