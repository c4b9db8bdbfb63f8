//! Errors surfaced while handling a registration request.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MockError {
    /// Registration body exceeded `maxBodyBytes`
    #[error("mock body exceeds {limit} bytes")]
    BodyTooLarge { limit: usize },
    /// Body stream failed before its end
    #[error("failed to read mock body: {0}")]
    BodyRead(String),
}

impl MockError {
    pub fn status(&self) -> StatusCode {
        match self {
            MockError::BodyTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            MockError::BodyRead(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for MockError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
