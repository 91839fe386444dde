use tracing::{debug, info, info_span, Instrument};
use uuid::Uuid;

use crate::error::AppError;
use crate::record::{AnalysisResponse, SentimentRecord};
use crate::sentiment::SentimentModel;
use crate::state::AppState;
use crate::translate::ENGLISH;

/// Detect, translate when needed, score with `model`, persist, respond.
///
/// Exactly one record is inserted per successful call. Nothing is stored
/// when an earlier step fails.
pub async fn analyze(
    state: &AppState,
    text: String,
    model: SentimentModel,
) -> Result<AnalysisResponse, AppError> {
    let request_id = Uuid::new_v4();
    let span = info_span!("analyze", %request_id, %model);
    run_analysis(state, text, model).instrument(span).await
}

async fn run_analysis(
    state: &AppState,
    text: String,
    model: SentimentModel,
) -> Result<AnalysisResponse, AppError> {
    let detected = state
        .translator
        .detect(&text)
        .await
        .map_err(AppError::Detection)?;

    let english = if detected != ENGLISH {
        debug!("Translating from {}", detected);
        state
            .translator
            .translate(&text, ENGLISH)
            .await
            .map_err(AppError::Translation)?
    } else {
        text.clone()
    };

    let scores = state
        .analyzer(model)
        .analyze(&english)
        .await
        .map_err(AppError::Sentiment)?;

    let record = SentimentRecord::new(text, detected, english, scores);
    state
        .store
        .insert(&record)
        .await
        .map_err(AppError::Store)?;

    info!(
        "Stored {} analysis: language={}, sentiment={}",
        record.modelo, record.idioma_detectado, record.sentimento
    );
    Ok(AnalysisResponse::from(&record))
}
