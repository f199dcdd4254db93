use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use visitvagad::core::ItineraryPlanner;
use visitvagad::error::{PlannerError, Result};
use visitvagad::services::CompletionClient;
use visitvagad::types::{TripRequest, TripType};

struct ScriptedModel {
    reply: Option<String>,
    calls: AtomicUsize,
}

impl ScriptedModel {
    fn replying(body: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(body.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl CompletionClient for ScriptedModel {
    async fn complete(&self, _prompt: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Some(body) => Ok(body.clone()),
            None => Err(PlannerError::Upstream("model unavailable".to_string())),
        }
    }
}

fn request(duration: u32) -> TripRequest {
    TripRequest {
        destination: "Banswara".to_string(),
        trip_type: TripType::Nature,
        duration,
        interests: vec!["kayaking".to_string()],
    }
}

fn day_json(day: u32) -> String {
    format!(
        r#"{{
            "day": {day},
            "theme": "Backwaters",
            "activities": [{{
                "time": "7:00 AM",
                "name": "Kayaking at Kagdi Pickup",
                "description": "Sunrise paddle on the lake.",
                "type": "adventure",
                "location": "Kagdi Pickup Lake",
                "duration": "2 hours"
            }}],
            "meals": {{
                "breakfast": "Poha at a lakeside stall",
                "lunch": "Dal baati churma",
                "dinner": "Tribal thali"
            }},
            "stay_suggestion": "riverside eco hut",
            "tips": "Carry a dry bag for the kayak."
        }}"#
    )
}

fn scripted_itinerary(days: u32) -> String {
    let day_blocks: Vec<String> = (1..=days).map(day_json).collect();
    format!(
        r#"{{
            "title": "City of a Hundred Islands",
            "summary": "Lakes, temples and tribal crafts across {days} days.",
            "days": [{}]
        }}"#,
        day_blocks.join(",")
    )
}

#[tokio::test]
async fn invalid_request_never_reaches_the_model() {
    let model = ScriptedModel::replying(&scripted_itinerary(1));
    let planner = ItineraryPlanner::new(model.clone());

    let err = planner.generate(&request(0)).await.unwrap_err();
    assert_eq!(err.error_code(), "VALIDATION_ERROR");
    assert_eq!(model.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn fenced_model_output_becomes_a_typed_itinerary() {
    let fenced = format!("```json\n{}\n```", scripted_itinerary(2));
    let model = ScriptedModel::replying(&fenced);
    let planner = ItineraryPlanner::new(model.clone());

    let itinerary = planner.generate(&request(2)).await.unwrap();
    assert_eq!(itinerary.title, "City of a Hundred Islands");
    assert_eq!(itinerary.days.len(), 2);
    assert_eq!(itinerary.days[1].day, 2);
    assert_eq!(model.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn upstream_failure_surfaces_as_upstream_error() {
    let planner = ItineraryPlanner::new(ScriptedModel::failing());
    let err = planner.generate(&request(3)).await.unwrap_err();
    assert_eq!(err.error_code(), "UPSTREAM_ERROR");
}

#[tokio::test]
async fn prose_reply_is_malformed_output() {
    let model = ScriptedModel::replying("Here is a lovely plan for your trip!");
    let planner = ItineraryPlanner::new(model);
    let err = planner.generate(&request(2)).await.unwrap_err();
    assert_eq!(err.error_code(), "MALFORMED_OUTPUT");
}

#[tokio::test]
async fn day_count_mismatch_is_tolerated() {
    // Asked for 4 days, the model returned 2. The plan is served as-is.
    let model = ScriptedModel::replying(&scripted_itinerary(2));
    let planner = ItineraryPlanner::new(model);
    let itinerary = planner.generate(&request(4)).await.unwrap();
    assert_eq!(itinerary.days.len(), 2);
}
