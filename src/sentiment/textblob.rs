use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use super::interface::{SentimentInterface, SentimentModel, SentimentScores};
use crate::nlp_service::NlpServiceClient;

/// TextBlob pattern analyzer - actual implementation in the NLP sidecar
pub struct TextBlobAnalyzer {
    nlp_service: Arc<NlpServiceClient>,
}

impl TextBlobAnalyzer {
    pub fn new(nlp_service: Arc<NlpServiceClient>) -> Self {
        Self { nlp_service }
    }
}

#[async_trait]
impl SentimentInterface for TextBlobAnalyzer {
    fn model(&self) -> SentimentModel {
        SentimentModel::TextBlob
    }

    async fn analyze(&self, text: &str) -> Result<SentimentScores, anyhow::Error> {
        let reply = self.nlp_service.textblob_sentiment(text).await?;
        debug!(
            "TextBlob scores: polarity={}, subjectivity={}",
            reply.polarity, reply.subjectivity
        );

        Ok(SentimentScores::TextBlob {
            polarity: reply.polarity,
            subjectivity: reply.subjectivity,
        })
    }
}
