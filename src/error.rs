use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::models::FeedType;

/// Failures talking to the telemetry provider. Never cached, never retried.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("EMONCMS_API_KEY is not configured")]
    MissingApiKey,

    #[error("no provider feed id configured for feed {0}")]
    MissingFeedId(FeedType),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider responded with status {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed provider payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    #[error("provider timestamp {0} is out of range")]
    InvalidTimestamp(i64),

    #[error("provider returned {0} points, expected 46, 48 or 50")]
    UnexpectedPointCount(usize),
}

impl ProviderError {
    /// Errors that will repeat for every date of a feed until the configuration changes.
    pub fn is_configuration(&self) -> bool {
        matches!(self, ProviderError::MissingApiKey | ProviderError::MissingFeedId(_))
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Config(ref msg) => {
                tracing::error!("Configuration error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Configuration error".to_string())
            }
            AppError::Provider(ref e) => {
                tracing::error!("Provider error: {}", e);
                (StatusCode::BAD_GATEWAY, "Telemetry provider unavailable".to_string())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::Config("PORT".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (
                AppError::Provider(ProviderError::MissingApiKey),
                StatusCode::BAD_GATEWAY,
            ),
            (AppError::NotFound("feed".into()), StatusCode::NOT_FOUND),
            (AppError::InvalidInput("day type".into()), StatusCode::BAD_REQUEST),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_configuration_errors() {
        assert!(ProviderError::MissingApiKey.is_configuration());
        assert!(ProviderError::MissingFeedId(FeedType::PowerTotal).is_configuration());
        assert!(!ProviderError::UnexpectedPointCount(3).is_configuration());
    }
}
