pub mod gemini_client;
pub mod normalizer;

pub use gemini_client::{CompletionClient, GeminiClient};
pub use normalizer::{parse_itinerary, strip_code_fences};
