use std::sync::{Arc, Mutex};

use actix_web::{test, web, App};
use async_trait::async_trait;
use serde_json::{json, Value};

use visitvagad::core::ItineraryPlanner;
use visitvagad::error::{PlannerError, Result};
use visitvagad::server::{app_config, AppState};
use visitvagad::services::CompletionClient;
use visitvagad::store::{
    Account, AuthService, Catalog, Document, DocumentStore, Query, Session,
};

struct ScriptedModel {
    reply: Option<String>,
}

#[async_trait]
impl CompletionClient for ScriptedModel {
    async fn complete(&self, _prompt: &str) -> Result<String> {
        match &self.reply {
            Some(body) => Ok(body.clone()),
            None => Err(PlannerError::Upstream("model unavailable".to_string())),
        }
    }
}

fn state_with(
    reply: Option<&str>,
    catalog: Catalog,
    auth: Option<Arc<dyn AuthService>>,
) -> web::Data<AppState> {
    web::Data::new(AppState {
        planner: ItineraryPlanner::new(Arc::new(ScriptedModel {
            reply: reply.map(str::to_string),
        })),
        catalog,
        auth,
    })
}

fn state(reply: Option<&str>) -> web::Data<AppState> {
    state_with(reply, Catalog::without_store(), None)
}

fn scripted_itinerary() -> String {
    json!({
        "title": "Weekend by the Mahi",
        "summary": "Temples and backwaters over two days.",
        "days": [{
            "day": 1,
            "theme": "Temples of Banswara",
            "activities": [{
                "time": "8:00 AM",
                "name": "Tripura Sundari Darshan",
                "description": "Morning visit to the shakti peeth.",
                "type": "temple",
                "location": "Tripura Sundari Temple",
                "duration": "2 hours"
            }],
            "meals": {
                "breakfast": "Kachori and jalebi",
                "lunch": "Rajasthani thali",
                "dinner": "Dal baati churma"
            },
            "stay_suggestion": "heritage home",
            "tips": "Start early to beat the queue."
        }]
    })
    .to_string()
}

#[actix_web::test]
async fn missing_duration_is_a_400_with_the_uniform_message() {
    let app = test::init_service(
        App::new()
            .app_data(state(Some(&scripted_itinerary())))
            .configure(app_config),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/generate-itinerary")
        .set_json(json!({ "destination": "Banswara" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "destination and duration are required");
}

#[actix_web::test]
async fn generation_returns_the_itinerary_envelope() {
    let app = test::init_service(
        App::new()
            .app_data(state(Some(&scripted_itinerary())))
            .configure(app_config),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/generate-itinerary")
        .set_json(json!({
            "destination": "Banswara",
            "duration": 1,
            "trip_type": "spiritual",
            "interests": ["temples"]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["itinerary"]["title"], "Weekend by the Mahi");
    assert_eq!(body["itinerary"]["days"][0]["activities"][0]["type"], "temple");
}

#[actix_web::test]
async fn upstream_failure_hides_the_cause_from_the_caller() {
    let app = test::init_service(
        App::new().app_data(state(None)).configure(app_config),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/generate-itinerary")
        .set_json(json!({ "destination": "Dungarpur", "duration": 2 }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 500);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["error"],
        "Failed to generate itinerary. Check your GEMINI_API_KEY."
    );
}

#[actix_web::test]
async fn catalog_serves_sample_data_without_a_store() {
    let app = test::init_service(
        App::new()
            .app_data(state(Some(&scripted_itinerary())))
            .configure(app_config),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/products").to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["total"].as_u64().unwrap() > 0);
    assert_eq!(body["total"].as_u64().unwrap() as usize, body["products"].as_array().unwrap().len());

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/stays?district=dungarpur")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    for stay in body["stays"].as_array().unwrap() {
        assert_eq!(stay["district"], "dungarpur");
    }
}

#[actix_web::test]
async fn unknown_product_id_is_a_404() {
    let app = test::init_service(
        App::new()
            .app_data(state(Some(&scripted_itinerary())))
            .configure(app_config),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/products/no-such-id")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 404);
}

#[derive(Default)]
struct StubAuth {
    logouts: Mutex<Vec<String>>,
}

#[async_trait]
impl AuthService for StubAuth {
    async fn signup(&self, email: &str, _password: &str, name: Option<&str>) -> Result<Account> {
        Ok(Account {
            id: "user-1".to_string(),
            email: email.to_string(),
            name: name.map(str::to_string),
        })
    }

    async fn login(&self, _email: &str, password: &str) -> Result<Session> {
        if password == "wrong" {
            return Err(PlannerError::Auth("Invalid credentials".to_string()));
        }
        Ok(Session {
            id: "sess-1".to_string(),
            user_id: "user-1".to_string(),
        })
    }

    async fn logout(&self, session_id: &str) -> Result<()> {
        self.logouts.lock().unwrap().push(session_id.to_string());
        Ok(())
    }
}

#[actix_web::test]
async fn auth_endpoints_pass_through_to_the_service() {
    let auth = Arc::new(StubAuth::default());
    let app = test::init_service(
        App::new()
            .app_data(state_with(None, Catalog::without_store(), Some(auth.clone())))
            .configure(app_config),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/signup")
            .set_json(json!({
                "email": "traveller@example.com",
                "password": "hunter22",
                "name": "Asha"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 201);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["account"]["email"], "traveller@example.com");
    assert_eq!(body["account"]["name"], "Asha");

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "email": "traveller@example.com", "password": "hunter22" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["session"]["id"], "sess-1");

    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri("/api/auth/sessions/sess-1")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 204);
    assert_eq!(auth.logouts.lock().unwrap().as_slice(), ["sess-1"]);
}

#[actix_web::test]
async fn bad_credentials_are_a_401() {
    let app = test::init_service(
        App::new()
            .app_data(state_with(
                None,
                Catalog::without_store(),
                Some(Arc::new(StubAuth::default())),
            ))
            .configure(app_config),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "email": "traveller@example.com", "password": "wrong" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 401);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid credentials");
}

#[actix_web::test]
async fn unconfigured_auth_is_an_error_not_a_missing_route() {
    let app = test::init_service(App::new().app_data(state(None)).configure(app_config)).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "email": "traveller@example.com", "password": "hunter22" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 500);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("auth service is not configured"));
}

struct SavedItineraryStore;

#[async_trait]
impl DocumentStore for SavedItineraryStore {
    async fn list_documents(
        &self,
        collection_id: &str,
        queries: &[Query],
    ) -> Result<Vec<Document>> {
        assert_eq!(collection_id, "itineraries");
        assert!(queries
            .iter()
            .any(|q| q.to_wire().contains(r#""attribute":"user_id""#)));
        let doc = Document::from_value(json!({
            "$id": "it-1",
            "title": "Weekend by the Mahi",
            "days": 2,
            "trip_type": "cultural"
        }))?;
        Ok(vec![doc])
    }

    async fn get_document(&self, _collection_id: &str, _document_id: &str) -> Result<Document> {
        Err(PlannerError::Store("not implemented".to_string()))
    }

    async fn create_document(&self, _collection_id: &str, _data: Value) -> Result<Document> {
        Err(PlannerError::Store("not implemented".to_string()))
    }

    async fn delete_document(&self, _collection_id: &str, _document_id: &str) -> Result<()> {
        Err(PlannerError::Store("not implemented".to_string()))
    }
}

#[actix_web::test]
async fn saved_itineraries_are_listed_from_the_store() {
    let app = test::init_service(
        App::new()
            .app_data(state_with(
                None,
                Catalog::new(Some(Arc::new(SavedItineraryStore))),
                None,
            ))
            .configure(app_config),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/itineraries?user_id=user-1")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["itineraries"][0]["title"], "Weekend by the Mahi");
}

#[actix_web::test]
async fn listing_itineraries_without_a_store_is_an_error() {
    let app = test::init_service(App::new().app_data(state(None)).configure(app_config)).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/itineraries").to_request(),
    )
    .await;
    assert_eq!(resp.status(), 500);
}

#[actix_web::test]
async fn health_endpoint_reports_ok() {
    let app = test::init_service(
        App::new()
            .app_data(state(Some(&scripted_itinerary())))
            .configure(app_config),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/health").to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
}
