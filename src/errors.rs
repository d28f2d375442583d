use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("inventory data unavailable: {0}")]
    DataUnavailable(String),

    #[error("schema validation error: {0}")]
    SchemaValidation(String),

    #[error("an elicitation context is required for book_room")]
    MissingContext,

    #[error("elicitation failed: {0}")]
    Elicitation(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::DataUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::SchemaValidation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::MissingContext => StatusCode::BAD_REQUEST,
            AppError::Elicitation(_) => StatusCode::BAD_GATEWAY,
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}
