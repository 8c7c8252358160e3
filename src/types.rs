// Error taxonomy and shared result alias

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use tracing::error;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Could not extract text from files.")]
    Extraction,

    #[error("LLM API error: {0}")]
    LLMApi(String),

    #[error("Invalid model output: {0}")]
    Normalization(String),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) | AppError::Extraction => StatusCode::BAD_REQUEST,
            AppError::LLMApi(_) | AppError::Normalization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message exposed to the caller in the `detail` field. The frontend
    /// displays these verbatim, so they carry the underlying error text.
    fn detail(&self) -> String {
        match self {
            AppError::InvalidRequest(msg) => msg.clone(),
            AppError::Extraction => self.to_string(),
            AppError::LLMApi(msg) | AppError::Normalization(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = self.detail();
        error!(%status, "Request failed: {}", self);
        (status, Json(serde_json::json!({ "detail": detail }))).into_response()
    }
}
