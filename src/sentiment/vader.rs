use async_trait::async_trait;
use std::collections::HashMap;
use tracing::debug;

use super::interface::{SentimentInterface, SentimentModel, SentimentScores};

/// VADER lexicon analyzer, scored in process
#[derive(Debug, Clone, Copy, Default)]
pub struct VaderAnalyzer;

impl VaderAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Run VADER over `text`. The analyzer only borrows the shared static lexicons,
    /// so building one per call is free.
    pub fn polarity_scores(&self, text: &str) -> Result<SentimentScores, anyhow::Error> {
        let analyzer = vader_sentiment::SentimentIntensityAnalyzer::new();
        let scores = analyzer.polarity_scores(text);

        Ok(SentimentScores::Vader {
            compound: score(&scores, "compound")?,
            neg: score(&scores, "neg")?,
            neu: score(&scores, "neu")?,
            pos: score(&scores, "pos")?,
        })
    }
}

fn score(scores: &HashMap<&str, f64>, key: &str) -> Result<f64, anyhow::Error> {
    scores
        .get(key)
        .copied()
        .ok_or_else(|| anyhow::anyhow!("VADER result is missing '{}'", key))
}

#[async_trait]
impl SentimentInterface for VaderAnalyzer {
    fn model(&self) -> SentimentModel {
        SentimentModel::Vader
    }

    async fn analyze(&self, text: &str) -> Result<SentimentScores, anyhow::Error> {
        let scores = self.polarity_scores(text)?;
        debug!("VADER scores: {:?}", scores);
        Ok(scores)
    }
}
