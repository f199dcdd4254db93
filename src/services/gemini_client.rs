use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::error::{PlannerError, Result};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Fixed request timeout. Single-shot by design: no retry, no backoff.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Outbound boundary to the completion model. Injected into the planner so
/// tests can substitute a canned implementation.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send one prompt, get the model's raw text back. The text is not
    /// guaranteed to be valid JSON.
    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// Gemini REST client. One outbound call per invocation, no caching.
#[derive(Clone, Debug)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| PlannerError::Unknown(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        })
    }

    /// Read the credential and optional overrides from the environment.
    /// A missing key is a fatal configuration error, detected here rather
    /// than per-request.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| {
            PlannerError::Config(
                "GEMINI_API_KEY environment variable must be set before creating a GeminiClient"
                    .to_string(),
            )
        })?;
        let mut client = Self::new(api_key)?;
        if let Ok(base_url) = std::env::var("GEMINI_BASE_URL") {
            client.base_url = base_url;
        }
        if let Ok(model) = std::env::var("GEMINI_MODEL") {
            client.model = model;
        }
        Ok(client)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn request_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait]
impl CompletionClient for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let response = self
            .http
            .post(self.request_url())
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|err| PlannerError::Upstream(format!("HTTP request failed: {err}")))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|err| PlannerError::Upstream(format!("Failed to read response: {err}")))?;

        let response_json: Value = serde_json::from_str(&response_text).map_err(|err| {
            PlannerError::Upstream(format!("Failed to parse model service response: {err}"))
        })?;

        if !status.is_success() {
            let api_message = response_json
                .get("error")
                .and_then(|error| error.get("message"))
                .and_then(|value| value.as_str())
                .map(|s| s.to_string())
                .unwrap_or(response_text);

            return Err(PlannerError::Upstream(format!(
                "HTTP {status} error: {api_message}"
            )));
        }

        extract_candidate_text(&response_json)
    }
}

/// Pull the generated text out of a `generateContent` response, joining the
/// parts of the first candidate.
fn extract_candidate_text(response: &Value) -> Result<String> {
    let parts = response
        .get("candidates")
        .and_then(|c| c.get(0))
        .and_then(|candidate| candidate.get("content"))
        .and_then(|content| content.get("parts"))
        .and_then(|parts| parts.as_array())
        .ok_or_else(|| {
            PlannerError::Upstream("model response contained no candidates".to_string())
        })?;

    let text: String = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(|t| t.as_str()))
        .collect();

    if text.is_empty() {
        return Err(PlannerError::Upstream(
            "model response contained no text parts".to_string(),
        ));
    }

    Ok(text)
}
