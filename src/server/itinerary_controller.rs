use actix_web::{get, post, web, HttpResponse};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use crate::error::PlannerError;
use crate::types::{GenerateItineraryRequest, Itinerary, SavedItinerary, TripType};

use super::AppState;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(generate_itinerary)
        .service(save_itinerary)
        .service(list_itineraries);
}

/// The core operation: validate, build the prompt, call the model, normalize.
/// 400 on missing trip parameters, 500 with a uniform message on any
/// generation failure; the cause goes to the operator log only.
#[post("/generate-itinerary")]
async fn generate_itinerary(
    request: web::Json<GenerateItineraryRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, PlannerError> {
    let trip = request.into_inner().into_trip_request()?;

    match state.planner.generate(&trip).await {
        Ok(itinerary) => Ok(HttpResponse::Ok().json(json!({ "itinerary": itinerary }))),
        Err(err) => {
            error!(target: "visitvagad::planner", code = err.error_code(), %err, "itinerary generation failed");
            Err(err)
        }
    }
}

#[derive(Debug, Deserialize)]
struct SaveItineraryRequest {
    title: String,
    days: u32,
    #[serde(default)]
    trip_type: Option<TripType>,
    #[serde(default)]
    interests: Option<Vec<String>>,
    #[serde(default)]
    plan: Option<Itinerary>,
    #[serde(default)]
    destinations: Option<Vec<String>>,
    #[serde(default)]
    is_public: Option<bool>,
    #[serde(default)]
    user_id: Option<String>,
}

/// Persist a generated plan to the document store.
#[post("/itineraries")]
async fn save_itinerary(
    request: web::Json<SaveItineraryRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, PlannerError> {
    let request = request.into_inner();

    let generated_plan = match &request.plan {
        Some(plan) => Some(serde_json::to_string(plan)?),
        None => None,
    };

    let record = SavedItinerary {
        id: None,
        user_id: request.user_id,
        title: request.title,
        days: request.days,
        trip_type: request.trip_type.unwrap_or_default(),
        interests: request.interests.unwrap_or_default(),
        generated_plan,
        destinations: request.destinations.unwrap_or_default(),
        is_public: request.is_public.unwrap_or(false),
        created_at: Some(Utc::now()),
    };

    let saved = state.catalog.save_itinerary(&record).await?;
    Ok(HttpResponse::Created().json(json!({ "itinerary": saved })))
}

#[derive(Debug, Deserialize)]
struct ItineraryListQuery {
    user_id: Option<String>,
}

/// List a user's saved itineraries, or public ones when no user is given.
#[get("/itineraries")]
async fn list_itineraries(
    query: web::Query<ItineraryListQuery>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, PlannerError> {
    let itineraries = state
        .catalog
        .list_itineraries(query.user_id.as_deref())
        .await?;
    Ok(HttpResponse::Ok().json(json!({
        "total": itineraries.len(),
        "itineraries": itineraries,
    })))
}
