//! Prompt construction for the itinerary generator.
//!
//! Pure string assembly: identical [`TripRequest`] values always render to
//! byte-identical prompts, so the output is snapshot-testable.

use crate::types::TripRequest;

/// Wording substituted when the traveller picked no specific interests.
pub const FALLBACK_INTERESTS: &str = "general sightseeing";

/// Static reference block of regional points of interest fed to the model.
const LANDMARKS_INFO: &str = "\
Key landmarks and experiences in Vagad (Banswara & Dungarpur, Rajasthan):
- Tripura Sundari Temple (Banswara): 1008 CE Shakti temple on a hillock, one of 108 Shakti Peethas — spectacular sunrise views
- Mangarh Dham (Banswara): Historic site of tribal Bhil freedom fighters, forested hilltop memorial
- Mahi Dam & Mahi Island Boating: Scenic reservoir, boat rides on green islands within the backwaters
- Chacha Kota Backwaters (Dungarpur): Serene backwaters via Maahi River tributaries, hilly terrain
- Juna Mahal (Dungarpur): 13th-century heritage palace with intricate stone carvings and fresco paintings
- Kagdi Pick-Up Weir (Banswara): Picturesque picnic spot with stepped stone weir across a river
- Beneshwar Dham (District border): Sacred Triveni confluence of Mahi, Som & Jakham rivers, mega tribal fair
- Phoolwari Ki Nal (Dungarpur): Biodiversity zone with waterfalls, wildlife and indigenous forests
- Bhil tribal craft workshops: Warli painting, bamboo craft, terracotta, stone carving, tribal textiles";

/// Expected output shape, spelled out verbatim inside the prompt.
const OUTPUT_FORMAT: &str = r#"{
  "title": "string — catchy itinerary title",
  "summary": "string — 2-sentence trip overview",
  "days": [
    {
      "day": 1,
      "theme": "string — day theme",
      "activities": [
        {
          "time": "string (e.g. '7:00 AM')",
          "name": "string — activity name",
          "description": "string — 1-2 sentence description",
          "type": "string — one of: temple, nature, craft, food, adventure, heritage",
          "location": "string — specific place name",
          "duration": "string (e.g. '2 hours')"
        }
      ],
      "meals": { "breakfast": "string", "lunch": "string", "dinner": "string" },
      "stay_suggestion": "string — type of accommodation suggestion",
      "tips": "string — one local tip for this day"
    }
  ],
  "packing_tips": ["string"],
  "best_time_to_visit": "string",
  "estimated_budget_per_person": "string"
}"#;

/// Render a validated [`TripRequest`] into the generation instruction.
pub fn build_prompt(request: &TripRequest) -> String {
    let interests = if request.interests.is_empty() {
        FALLBACK_INTERESTS.to_string()
    } else {
        request.interests.join(", ")
    };

    format!(
        "You are a travel expert for the Vagad region (Banswara & Dungarpur districts, Rajasthan, India).\n\
         \n\
         Create a detailed {duration}-day travel itinerary for a tourist visiting {destination} interested in {trip_type} tourism.\n\
         Their specific interests are: {interests}.\n\
         \n\
         {landmarks}\n\
         \n\
         Return a JSON object strictly in this format (no markdown, just raw JSON):\n\
         {format}",
        duration = request.duration,
        destination = request.destination,
        trip_type = request.trip_type,
        interests = interests,
        landmarks = LANDMARKS_INFO,
        format = OUTPUT_FORMAT,
    )
}
