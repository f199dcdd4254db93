use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

/// Main error type for the VisitVagad service
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Validation(String),

    #[error("Upstream generation error: {0}")]
    Upstream(String),

    #[error("Malformed model output: {0}")]
    MalformedOutput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Document store error: {0}")]
    Store(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Auth error: {0}")]
    Auth(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, PlannerError>;

impl PlannerError {
    /// Get the error code for structured responses
    pub fn error_code(&self) -> &'static str {
        match self {
            PlannerError::Config(_) => "CONFIG_ERROR",
            PlannerError::Validation(_) => "VALIDATION_ERROR",
            PlannerError::Upstream(_) => "UPSTREAM_ERROR",
            PlannerError::MalformedOutput(_) => "MALFORMED_OUTPUT",
            PlannerError::Serialization(_) => "SERIALIZATION_ERROR",
            PlannerError::Store(_) => "STORE_ERROR",
            PlannerError::AlreadyExists(_) => "ALREADY_EXISTS",
            PlannerError::Auth(_) => "AUTH_ERROR",
            PlannerError::Unknown(_) => "UNKNOWN_ERROR",
        }
    }

    /// Convert to a structured error payload
    pub fn to_error_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
            }
        })
    }

    /// The message exposed to end users. Generation failures collapse into a
    /// single opaque category; the specific cause is logged for operators.
    pub fn user_message(&self) -> String {
        match self {
            PlannerError::Validation(msg) => msg.clone(),
            PlannerError::Auth(msg) => msg.clone(),
            PlannerError::Upstream(_)
            | PlannerError::MalformedOutput(_)
            | PlannerError::Serialization(_)
            | PlannerError::Config(_) => {
                "Failed to generate itinerary. Check your GEMINI_API_KEY.".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl ResponseError for PlannerError {
    fn status_code(&self) -> StatusCode {
        match self {
            PlannerError::Validation(_) => StatusCode::BAD_REQUEST,
            PlannerError::Auth(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "error": self.user_message() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_are_stable() {
        let err = PlannerError::Upstream("socket closed".to_string());
        assert_eq!(err.error_code(), "UPSTREAM_ERROR");

        let payload = err.to_error_payload();
        assert_eq!(payload["error"]["code"], "UPSTREAM_ERROR");
        assert!(payload["error"]["message"]
            .as_str()
            .unwrap()
            .contains("socket closed"));
    }

    #[test]
    fn generation_failures_share_one_user_message() {
        let upstream = PlannerError::Upstream("HTTP 503".to_string());
        let malformed = PlannerError::MalformedOutput("not json".to_string());
        assert_eq!(upstream.user_message(), malformed.user_message());
        assert!(!upstream.user_message().contains("503"));
    }

    #[test]
    fn validation_message_passes_through() {
        let err = PlannerError::Validation("destination and duration are required".to_string());
        assert_eq!(err.user_message(), "destination and duration are required");
        assert_eq!(
            ResponseError::status_code(&err),
            StatusCode::BAD_REQUEST
        );
    }
}
