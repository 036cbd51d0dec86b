use axum::{http::StatusCode, response::IntoResponse, Json};
use thiserror::Error;

use crate::api::dto::ApiResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Internal server error: {0}")]
    InternalServerError(String),

    #[error("Body parsing error: {0}")]
    BodyParsingError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Helper for mapping any unknown error into internal error
pub fn internal_error<E: ToString>(err: E) -> AppError {
    AppError::InternalServerError(err.to_string())
}

impl AppError {
    /// Recover the most specific variant from a service-layer error.
    pub fn from_anyhow(err: anyhow::Error) -> Self {
        let err = match err.downcast::<AppError>() {
            Ok(app) => return app,
            Err(err) => err,
        };
        let err = match err.downcast::<validator::ValidationErrors>() {
            Ok(v) => return AppError::ValidationError(v.to_string()),
            Err(err) => err,
        };
        match err.downcast_ref::<std::io::Error>() {
            Some(_) => AppError::DatabaseError(format!("{err:#}")),
            None => internal_error(format!("{err:#}")),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BodyParsingError(_) => StatusCode::BAD_REQUEST,
            AppError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        // String provided by thiserror → safe JSON message
        let body = Json(ApiResponse::<()>::err(self.to_string()));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Named {
        #[validate(length(min = 1))]
        name: String,
    }

    #[test]
    fn app_errors_survive_anyhow_round_trip() {
        let err = anyhow::Error::new(AppError::NotFound("employee x".into()));
        let app = AppError::from_anyhow(err);

        assert!(matches!(app, AppError::NotFound(_)));
        assert_eq!(app.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_errors_map_to_unprocessable() {
        let errs = Named { name: String::new() }.validate().unwrap_err();
        let app = AppError::from_anyhow(errs.into());

        assert_eq!(app.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn io_errors_map_to_database_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let app = AppError::from_anyhow(anyhow::Error::new(io).context("Failed to open file"));

        assert!(matches!(app, AppError::DatabaseError(_)));
    }

    #[test]
    fn other_errors_are_internal() {
        let app = AppError::from_anyhow(anyhow::anyhow!("boom"));

        assert_eq!(app.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(app.to_string(), "Internal server error: boom");
    }
}
