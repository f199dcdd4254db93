use std::sync::Arc;

use tracing::warn;

use crate::error::Result;
use crate::prompt::build_prompt;
use crate::services::{normalizer, CompletionClient};
use crate::types::{Itinerary, TripRequest};

/// Orchestrates one itinerary generation: validation gate, prompt build,
/// completion call, normalization. Stateless across calls; every submission
/// is an independent attempt.
pub struct ItineraryPlanner {
    client: Arc<dyn CompletionClient>,
}

impl ItineraryPlanner {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Generate an itinerary for a trip request.
    ///
    /// Preconditions are checked before any downstream work: an invalid
    /// request returns a validation error without building a prompt or
    /// touching the network. Either a complete itinerary comes back or an
    /// error does; there is no partial result path.
    pub async fn generate(&self, request: &TripRequest) -> Result<Itinerary> {
        request.validate()?;

        let prompt = build_prompt(request);
        let raw = self.client.complete(&prompt).await?;
        let itinerary = normalizer::parse_itinerary(&raw)?;

        // Known fidelity gap: the model controls the day count.
        if itinerary.days.len() != request.duration as usize {
            warn!(
                requested = request.duration,
                produced = itinerary.days.len(),
                "model produced a different number of days than requested"
            );
        }

        Ok(itinerary)
    }
}
