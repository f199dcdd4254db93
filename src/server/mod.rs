//! HTTP surface of the service.

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer};
use tracing::{info, warn};

use crate::core::ItineraryPlanner;
use crate::error::Result;
use crate::services::GeminiClient;
use crate::store::{AppwriteClient, AuthService, Catalog};

pub mod auth_controller;
pub mod catalog_controller;
pub mod itinerary_controller;

const DEFAULT_WORKER_COUNT: usize = 4;

/// Shared, read-only application state. Built once at startup.
pub struct AppState {
    pub planner: ItineraryPlanner,
    pub catalog: Catalog,
    pub auth: Option<Arc<dyn AuthService>>,
}

pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health))
            .configure(itinerary_controller::config)
            .configure(catalog_controller::config)
            .configure(auth_controller::config),
    );
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// Build state from the environment and serve until shutdown.
///
/// A missing Gemini credential is fatal here; a missing Appwrite
/// configuration is not, the catalog just serves its sample data.
pub async fn run(port: u16) -> Result<()> {
    let gemini = GeminiClient::from_env()?;
    let planner = ItineraryPlanner::new(Arc::new(gemini));

    let (catalog, auth): (Catalog, Option<Arc<dyn AuthService>>) =
        match AppwriteClient::from_env() {
            Ok(client) => {
                let client = Arc::new(client);
                (Catalog::new(Some(client.clone())), Some(client))
            }
            Err(err) => {
                warn!(%err, "document store not configured, serving sample data");
                (Catalog::without_store(), None)
            }
        };

    let app_state = web::Data::new(AppState {
        planner,
        catalog,
        auth,
    });

    info!("Starting VisitVagad on http://127.0.0.1:{port}");

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(Cors::permissive())
            .configure(app_config)
    })
    .workers(DEFAULT_WORKER_COUNT)
    .bind(("127.0.0.1", port))
    .map_err(|err| crate::error::PlannerError::Config(format!("failed to bind port {port}: {err}")))?
    .run()
    .await
    .map_err(|err| crate::error::PlannerError::Unknown(format!("server error: {err}")))
}
