use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// VADER compound at or beyond +/- this value is polar.
pub const VADER_COMPOUND_THRESHOLD: f64 = 0.05;

/// Sentiment models the service can run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentModel {
    TextBlob,
    Vader,
}

impl SentimentModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentModel::TextBlob => "textblob",
            SentimentModel::Vader => "vader",
        }
    }
}

impl std::fmt::Display for SentimentModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }

    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            SentimentLabel::Positive
        } else if polarity < 0.0 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn from_compound(compound: f64) -> Self {
        if compound >= VADER_COMPOUND_THRESHOLD {
            SentimentLabel::Positive
        } else if compound <= -VADER_COMPOUND_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw scores produced by a model; serialized with the stored field names.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SentimentScores {
    TextBlob {
        #[serde(rename = "polaridade")]
        polarity: f64,
        #[serde(rename = "subjectividade")]
        subjectivity: f64,
    },
    Vader {
        compound: f64,
        neg: f64,
        neu: f64,
        pos: f64,
    },
}

impl SentimentScores {
    pub fn model(&self) -> SentimentModel {
        match self {
            SentimentScores::TextBlob { .. } => SentimentModel::TextBlob,
            SentimentScores::Vader { .. } => SentimentModel::Vader,
        }
    }

    pub fn label(&self) -> SentimentLabel {
        match *self {
            SentimentScores::TextBlob { polarity, .. } => SentimentLabel::from_polarity(polarity),
            SentimentScores::Vader { compound, .. } => SentimentLabel::from_compound(compound),
        }
    }
}

/// Interface for an English-text sentiment model
#[async_trait]
pub trait SentimentInterface: Send + Sync {
    fn model(&self) -> SentimentModel;

    /// Score `text`, which is expected to already be English
    async fn analyze(&self, text: &str) -> Result<SentimentScores, anyhow::Error>;
}
