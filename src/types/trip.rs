use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

/// Tourism style steering the prompt phrasing. Affects wording only, never
/// which landmarks are offered to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TripType {
    Cultural,
    Nature,
    Spiritual,
    Adventure,
    #[default]
    Mixed,
}

impl TripType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TripType::Cultural => "cultural",
            TripType::Nature => "nature",
            TripType::Spiritual => "spiritual",
            TripType::Adventure => "adventure",
            TripType::Mixed => "mixed",
        }
    }
}

impl std::fmt::Display for TripType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TripType {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "cultural" => Ok(TripType::Cultural),
            "nature" => Ok(TripType::Nature),
            "spiritual" => Ok(TripType::Spiritual),
            "adventure" => Ok(TripType::Adventure),
            "mixed" => Ok(TripType::Mixed),
            other => Err(PlannerError::Validation(format!(
                "unknown trip type `{other}`"
            ))),
        }
    }
}

/// Validated trip parameters driving one itinerary generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRequest {
    pub destination: String,
    pub trip_type: TripType,
    pub duration: u32,
    pub interests: Vec<String>,
}

impl TripRequest {
    /// Check the preconditions for dispatching a generation request.
    ///
    /// Stateless, so calling it any number of times on the same value gives
    /// the same verdict.
    pub fn validate(&self) -> Result<()> {
        if self.destination.trim().is_empty() || self.duration == 0 {
            return Err(PlannerError::Validation(
                "destination and duration are required".to_string(),
            ));
        }
        Ok(())
    }
}

/// Inbound wire shape for `POST /api/generate-itinerary`. Every field is
/// optional at the boundary; presence is checked before any downstream call.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateItineraryRequest {
    pub destination: Option<String>,
    pub trip_type: Option<TripType>,
    pub duration: Option<u32>,
    pub interests: Option<Vec<String>>,
}

impl GenerateItineraryRequest {
    /// Promote the wire request to a validated [`TripRequest`], rejecting
    /// requests missing `destination` or `duration`.
    pub fn into_trip_request(self) -> Result<TripRequest> {
        let destination = self.destination.unwrap_or_default();
        let duration = self.duration.unwrap_or(0);

        let request = TripRequest {
            destination,
            trip_type: self.trip_type.unwrap_or_default(),
            duration,
            interests: self.interests.unwrap_or_default(),
        };
        request.validate()?;
        Ok(request)
    }
}
