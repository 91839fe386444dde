use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Failures surfaced by the analysis endpoints.
///
/// The variant only steers logging; every variant is reported to the
/// caller as a 500 whose detail is the underlying message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Detection(anyhow::Error),
    #[error("{0}")]
    Translation(anyhow::Error),
    #[error("{0}")]
    Sentiment(anyhow::Error),
    #[error("{0}")]
    Store(anyhow::Error),
}

impl AppError {
    pub fn stage(&self) -> &'static str {
        match self {
            AppError::Detection(_) => "detection",
            AppError::Translation(_) => "translation",
            AppError::Sentiment(_) => "sentiment",
            AppError::Store(_) => "store",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!("Analysis failed during {}: {}", self.stage(), self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": self.to_string() })),
        )
            .into_response()
    }
}
