use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tracing::warn;

use crate::error::AppError;
use crate::handlers::analyze;
use crate::record::{AnalysisResponse, TextInput};
use crate::sentiment::SentimentModel;
use crate::state::AppState;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/", get(home))
        .route("/test-db", get(test_db))
        // Analysis
        .route("/npl-textblob", post(analyze_textblob))
        .route("/npl-vader", post(analyze_vader))
}

async fn home() -> Json<Value> {
    Json(json!({ "message": "API está rodando!" }))
}

/// Store failures are reported in the body, never as a server error
async fn test_db(State(state): State<AppState>) -> Json<Value> {
    match state.store.ping().await {
        Ok(()) => Json(json!({ "message": "Conexão com MongoDB bem-sucedida!" })),
        Err(e) => {
            warn!("Database ping failed: {}", e);
            Json(json!({ "error": e.to_string() }))
        }
    }
}

async fn analyze_textblob(
    State(state): State<AppState>,
    Json(payload): Json<TextInput>,
) -> Result<Json<AnalysisResponse>, AppError> {
    analyze(&state, payload.texto, SentimentModel::TextBlob)
        .await
        .map(Json)
}

async fn analyze_vader(
    State(state): State<AppState>,
    Json(payload): Json<TextInput>,
) -> Result<Json<AnalysisResponse>, AppError> {
    analyze(&state, payload.texto, SentimentModel::Vader)
        .await
        .map(Json)
}
