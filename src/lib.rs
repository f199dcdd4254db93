//! visitvagad: AI trip planner and tourism catalog service for the Vagad
//! region of southern Rajasthan (Banswara and Dungarpur districts).
//!
//! The core is a small generation pipeline: validate the trip parameters,
//! build a region-grounded prompt, call Gemini, then normalize the model's
//! reply into a typed [`types::Itinerary`]. Around it sit an Appwrite-backed
//! catalog with bundled sample data as fallback, and an actix-web HTTP
//! surface.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use visitvagad::core::ItineraryPlanner;
//! use visitvagad::services::GeminiClient;
//! use visitvagad::types::{TripRequest, TripType};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GeminiClient::from_env()?;
//!     let planner = ItineraryPlanner::new(Arc::new(client));
//!
//!     let request = TripRequest {
//!         destination: "Banswara".to_string(),
//!         trip_type: TripType::Cultural,
//!         duration: 3,
//!         interests: vec!["tribal crafts".to_string()],
//!     };
//!     let itinerary = planner.generate(&request).await?;
//!     println!("{}", itinerary.title);
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod error;
pub mod prompt;
pub mod provision;
pub mod schemas;
pub mod server;
pub mod services;
pub mod store;
pub mod types;

pub use core::ItineraryPlanner;
pub use error::{PlannerError, Result};
pub use prompt::build_prompt;
pub use schemas::{itinerary_schema, validate_itinerary_shape};
pub use services::{CompletionClient, GeminiClient};
pub use store::{AppwriteClient, Catalog};
pub use types::{Itinerary, TripRequest, TripType};

#[cfg(feature = "cli")]
pub mod cli;
