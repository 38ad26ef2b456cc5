//! REST API module for HTTP endpoints
//!
//! - `players` - roster CRUD, season stats and per-player events
//! - `games` - schedule CRUD, boxscores and the live event feed of a game
//! - `events` - cross-game event views
//! - `stats` - leaders and team averages

pub mod events;
pub mod games;
pub mod players;
pub mod stats;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::error::StatsError;

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip)]
    pub status: StatusCode,
}

impl ApiError {
    pub fn new(status: StatusCode, code: &str, message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: code.to_string(),
            status,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "NOT_FOUND", message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "BAD_REQUEST", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", message)
    }
}

impl From<StatsError> for ApiError {
    fn from(err: StatsError) -> Self {
        match err {
            StatsError::Validation(message) => Self::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                "VALIDATION_ERROR",
                message,
            ),
            StatsError::InvalidArgument(message) => Self::bad_request(message),
            StatsError::NotFound(message) => Self::not_found(message),
            StatsError::Transport(e) => {
                tracing::error!(error = %e, "Storage failure");
                Self::new(
                    StatusCode::SERVICE_UNAVAILABLE,
                    "STORAGE_UNAVAILABLE",
                    format!("storage unavailable: {}", e),
                )
            }
            StatsError::Serialization(e) => {
                tracing::error!(error = %e, "Corrupt data");
                Self::internal(format!("serialization error: {}", e))
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

/// A created resource, answered with 201
pub struct Created<T>(pub T);

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_mapping() {
        let cases = [
            (StatsError::validation("bad"), StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR"),
            (StatsError::invalid_argument("bad"), StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            (StatsError::not_found("gone"), StatusCode::NOT_FOUND, "NOT_FOUND"),
            (
                StatsError::Transport(std::io::Error::other("disk")),
                StatusCode::SERVICE_UNAVAILABLE,
                "STORAGE_UNAVAILABLE",
            ),
        ];

        for (err, status, code) in cases {
            let api: ApiError = err.into();
            assert_eq!(api.status, status);
            assert_eq!(api.code, code);
        }
    }

    #[test]
    fn test_error_body_shape() {
        let api: ApiError = StatsError::not_found("Player 9 not found").into();
        let json = serde_json::to_value(&api).unwrap();
        assert_eq!(json["error"], "Player 9 not found");
        assert_eq!(json["code"], "NOT_FOUND");
        assert!(json.get("status").is_none());
    }
}
