use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use thiserror::Error as ThisError;
use tracing::error;

use super::dto::ErrorMessage;

/// Failures reported by an `AccountStore`
#[derive(Debug, ThisError)]
pub enum StoreError {
    #[error("account {0} not found")]
    NotFound(i32),
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

/// Handler error, rendered as `{"error": "<message>"}`
#[derive(Debug, ThisError)]
pub enum Error {
    #[error("{0}")]
    Decode(String),
    #[error("{0}")]
    InvalidArgument(String),
    #[error("method not allowed {0}")]
    MethodNotAllowed(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Storage(String),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::Decode(_) | Error::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            Error::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        if let Error::Storage(msg) = &self {
            error!(error = %msg, "storage failure");
        }
        (status, Json(ErrorMessage::new(self.to_string()))).into_response()
    }
}

impl From<StoreError> for Error {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound(_) => Error::NotFound(error.to_string()),
            StoreError::Storage(_) => Error::Storage(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_follows_error_kind() {
        assert_eq!(Error::Decode("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            Error::InvalidArgument("invalid id abc".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            Error::MethodNotAllowed("PUT".into()).status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(Error::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            Error::Storage("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn store_errors_keep_their_kind() {
        let err: Error = StoreError::NotFound(7).into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "account 7 not found");

        let err: Error = StoreError::Storage(sqlx::Error::PoolTimedOut).into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().starts_with("storage error"));
    }

    #[test]
    fn method_not_allowed_names_the_method() {
        let err = Error::MethodNotAllowed("PATCH".into());
        assert_eq!(err.to_string(), "method not allowed PATCH");
    }
}
