use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use service::errors::ServiceError;
use thiserror::Error;
use tracing::warn;

/// Request-level failures on `/workshop`; bodies are plain text.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid JSON data")]
    InvalidJson(#[source] serde_json::Error),
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidJson(_) | ApiError::Service(ServiceError::InvalidSweaterScore(_)) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::InvalidJson(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::InvalidJson(e) = &self {
            warn!(error = %e, "request body is not a workshop document");
        }
        (self.status(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_and_statuses() {
        let invalid = ApiError::from(ServiceError::InvalidSweaterScore(42));
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
        assert_eq!(invalid.to_string(), "Invalid SweaterScore: 42. Score must be between 1 and 10.");

        let json_err = serde_json::from_str::<serde_json::Value>("{").map_err(ApiError::from);
        let json_err = match json_err {
            Err(e) => e,
            Ok(v) => panic!("unexpected parse success: {v}"),
        };
        assert_eq!(json_err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_err.to_string(), "Invalid JSON data");

        assert_eq!(ApiError::MethodNotAllowed.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(ApiError::MethodNotAllowed.to_string(), "Method not allowed");
    }
}
