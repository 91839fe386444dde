use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::sentiment::{SentimentLabel, SentimentModel, SentimentScores};

/// Request body shared by both analysis endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextInput {
    pub texto: String,
}

/// One analysed request, as written to the document store.
/// Never updated once persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentRecord {
    pub texto: String,
    pub idioma_detectado: String,
    pub traducao: String,
    #[serde(flatten)]
    pub scores: SentimentScores,
    pub sentimento: SentimentLabel,
    pub modelo: SentimentModel,
    pub data: DateTime<Utc>,
}

impl SentimentRecord {
    pub fn new(texto: String, idioma_detectado: String, traducao: String, scores: SentimentScores) -> Self {
        Self {
            texto,
            idioma_detectado,
            traducao,
            sentimento: scores.label(),
            modelo: scores.model(),
            scores,
            data: Utc::now(),
        }
    }
}

/// Response payload of the analysis endpoints
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResponse {
    pub texto: String,
    pub idioma_detectado: String,
    pub english: String,
    pub sentimento: SentimentLabel,
    #[serde(flatten)]
    pub scores: SentimentScores,
}

impl From<&SentimentRecord> for AnalysisResponse {
    fn from(record: &SentimentRecord) -> Self {
        Self {
            texto: record.texto.clone(),
            idioma_detectado: record.idioma_detectado.clone(),
            english: record.traducao.clone(),
            sentimento: record.sentimento,
            scores: record.scores,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_derives_label_and_model_from_scores() {
        let record = SentimentRecord::new(
            "odeio isso".to_string(),
            "pt".to_string(),
            "I hate this".to_string(),
            SentimentScores::TextBlob { polarity: -0.8, subjectivity: 0.9 },
        );
        assert_eq!(record.sentimento, SentimentLabel::Negative);
        assert_eq!(record.modelo, SentimentModel::TextBlob);
    }

    #[test]
    fn test_textblob_response_fields() {
        let record = SentimentRecord::new(
            "good".to_string(),
            "en".to_string(),
            "good".to_string(),
            SentimentScores::TextBlob { polarity: 0.7, subjectivity: 0.6 },
        );
        let value = serde_json::to_value(AnalysisResponse::from(&record)).unwrap();
        assert_eq!(
            value,
            json!({
                "texto": "good",
                "idioma_detectado": "en",
                "english": "good",
                "sentimento": "positive",
                "polaridade": 0.7,
                "subjectividade": 0.6
            })
        );
    }

    #[test]
    fn test_vader_response_fields() {
        let record = SentimentRecord::new(
            "meh".to_string(),
            "en".to_string(),
            "meh".to_string(),
            SentimentScores::Vader { compound: 0.0, neg: 0.0, neu: 1.0, pos: 0.0 },
        );
        let value = serde_json::to_value(AnalysisResponse::from(&record)).unwrap();
        let object = value.as_object().unwrap();
        for key in ["texto", "idioma_detectado", "english", "compound", "neg", "neu", "pos", "sentimento"] {
            assert!(object.contains_key(key), "missing {}", key);
        }
        assert_eq!(object.len(), 8);
        assert_eq!(value["sentimento"], "neutral");
    }
}
