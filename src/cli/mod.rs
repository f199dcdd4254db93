use clap::{Arg, ArgAction, Command};
use std::env;
use std::sync::Arc;
use tracing::{error, info};

use crate::core::ItineraryPlanner;
use crate::provision;
use crate::server;
use crate::services::GeminiClient;
use crate::store::AppwriteClient;
use crate::types::{TripRequest, TripType};

/// CLI entry point for the VisitVagad service.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let matches = Command::new("visitvagad")
        .version("0.1.0")
        .about("AI trip planner and catalog service for the Vagad region")
        .subcommand_required(true)
        .subcommand(
            Command::new("serve").about("Run the HTTP API server").arg(
                Arg::new("port")
                    .short('p')
                    .long("port")
                    .value_name("PORT")
                    .help("Port to listen on (or set APP_PORT)"),
            ),
        )
        .subcommand(
            Command::new("plan")
                .about("Generate a single itinerary and print it")
                .arg(
                    Arg::new("destination")
                        .help("Destination to plan for, e.g. \"Banswara\"")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("days")
                        .short('d')
                        .long("days")
                        .value_name("DAYS")
                        .help("Trip duration in days")
                        .default_value("3"),
                )
                .arg(
                    Arg::new("trip-type")
                        .short('t')
                        .long("trip-type")
                        .value_name("TYPE")
                        .help("Trip style: cultural, nature, spiritual, adventure or mixed")
                        .default_value("mixed"),
                )
                .arg(
                    Arg::new("interest")
                        .short('i')
                        .long("interest")
                        .value_name("INTEREST")
                        .help("Traveller interest, may be repeated")
                        .action(ArgAction::Append),
                )
                .arg(
                    Arg::new("model")
                        .short('m')
                        .long("model")
                        .value_name("MODEL")
                        .help("Gemini model to use (or set GEMINI_MODEL)"),
                ),
        )
        .subcommand(
            Command::new("setup")
                .about("Provision the Appwrite database, collections, buckets and seed data"),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("serve", sub)) => {
            let port: u16 = sub
                .get_one::<String>("port")
                .cloned()
                .or_else(|| env::var("APP_PORT").ok())
                .unwrap_or_else(|| "8080".to_string())
                .parse()?;
            server::run(port).await?;
        }
        Some(("plan", sub)) => {
            let mut client = GeminiClient::from_env()?;
            if let Some(model) = sub.get_one::<String>("model") {
                client = client.with_model(model);
            }
            let planner = ItineraryPlanner::new(Arc::new(client));

            let destination = sub
                .get_one::<String>("destination")
                .map(String::clone)
                .unwrap_or_default();
            let duration: u32 = sub
                .get_one::<String>("days")
                .map(String::as_str)
                .unwrap_or("3")
                .parse()?;
            let trip_type: TripType = sub
                .get_one::<String>("trip-type")
                .map(String::as_str)
                .unwrap_or("mixed")
                .parse()?;
            let interests: Vec<String> = sub
                .get_many::<String>("interest")
                .map(|values| values.cloned().collect())
                .unwrap_or_default();

            let request = TripRequest {
                destination,
                trip_type,
                duration,
                interests,
            };

            info!("Planning {duration}-day {trip_type} trip to {}", request.destination);
            match planner.generate(&request).await {
                Ok(itinerary) => {
                    println!("{}", serde_json::to_string_pretty(&itinerary)?);
                }
                Err(e) => {
                    error!("Itinerary generation failed: {e}");
                    return Err(e.into());
                }
            }
        }
        Some(("setup", _)) => {
            let project = env::var("APPWRITE_PROJECT").unwrap_or_else(|_| "<unset>".to_string());
            info!("Provisioning Appwrite project {project}");
            let client = AppwriteClient::from_env()?;
            let summary = provision::run(&client).await?;
            println!(
                "Done: {} collections, {} buckets, {} seed records ({} already present)",
                summary.collections_created,
                summary.buckets_created,
                summary.records_added,
                summary.skipped
            );
        }
        _ => unreachable!("subcommand is required"),
    }

    Ok(())
}
