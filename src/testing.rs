//! Test doubles for the injected collaborators

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::record::SentimentRecord;
use crate::sentiment::{SentimentInterface, SentimentModel, SentimentScores, VaderAnalyzer};
use crate::state::AppState;
use crate::store::RecordStore;
use crate::translate::TranslateInterface;

/// Translator that reports a fixed language and translation, counting calls
pub struct FakeTranslator {
    language: String,
    translation: String,
    failure: Option<String>,
    pub detect_calls: AtomicUsize,
    pub translate_calls: AtomicUsize,
}

impl FakeTranslator {
    pub fn new(language: &str, translation: &str) -> Self {
        Self {
            language: language.to_string(),
            translation: translation.to_string(),
            failure: None,
            detect_calls: AtomicUsize::new(0),
            translate_calls: AtomicUsize::new(0),
        }
    }

    pub fn english() -> Self {
        Self::new("en", "")
    }

    /// Detection succeeds with `language`, translation fails with `message`
    pub fn failing_translation(language: &str, message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::new(language, "")
        }
    }

    pub fn translate_count(&self) -> usize {
        self.translate_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TranslateInterface for FakeTranslator {
    async fn detect(&self, _text: &str) -> Result<String, anyhow::Error> {
        self.detect_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.language.clone())
    }

    async fn translate(&self, _text: &str, _dest: &str) -> Result<String, anyhow::Error> {
        self.translate_calls.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(message) => Err(anyhow::anyhow!("{}", message)),
            None => Ok(self.translation.clone()),
        }
    }
}

/// Model that always returns the same scores
pub struct FixedSentiment {
    scores: SentimentScores,
}

impl FixedSentiment {
    pub fn textblob(polarity: f64, subjectivity: f64) -> Self {
        Self {
            scores: SentimentScores::TextBlob { polarity, subjectivity },
        }
    }
}

#[async_trait]
impl SentimentInterface for FixedSentiment {
    fn model(&self) -> SentimentModel {
        self.scores.model()
    }

    async fn analyze(&self, _text: &str) -> Result<SentimentScores, anyhow::Error> {
        Ok(self.scores)
    }
}

/// In-memory record store; can be made unreachable
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<Vec<SentimentRecord>>,
    unreachable: Option<String>,
}

impl MemoryStore {
    pub fn unreachable(message: &str) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            unreachable: Some(message.to_string()),
        }
    }

    pub fn records(&self) -> Vec<SentimentRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn ping(&self) -> Result<(), anyhow::Error> {
        match &self.unreachable {
            Some(message) => Err(anyhow::anyhow!("{}", message)),
            None => Ok(()),
        }
    }

    async fn insert(&self, record: &SentimentRecord) -> Result<(), anyhow::Error> {
        self.ping().await?;
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

/// State wired with the given translator and store, a fixed TextBlob model
/// and the real VADER analyzer
pub fn state_with(
    translator: Arc<FakeTranslator>,
    textblob: FixedSentiment,
    store: Arc<MemoryStore>,
) -> AppState {
    AppState::from_parts(translator, Arc::new(textblob), Arc::new(VaderAnalyzer::new()), store)
}
