use std::sync::Arc;
use tracing::{info, warn};

use crate::nlp_service::NlpServiceClient;
use crate::sentiment::{SentimentInterface, SentimentModel, TextBlobAnalyzer, VaderAnalyzer};
use crate::settings::Settings;
use crate::store::{MongoStore, RecordStore};
use crate::translate::{GoogleTranslator, TranslateInterface};

/// Shared, read-only collaborators handed to every request
#[derive(Clone)]
pub struct AppState {
    pub translator: Arc<dyn TranslateInterface>,
    pub textblob: Arc<dyn SentimentInterface>,
    pub vader: Arc<dyn SentimentInterface>,
    pub store: Arc<dyn RecordStore>,
}

impl AppState {
    /// Build the production collaborators from `settings`
    pub async fn new(settings: &Settings) -> anyhow::Result<Self> {
        let timeout = settings.request_timeout();

        let translator = Arc::new(GoogleTranslator::new(&settings.translate_url, timeout)?);

        let nlp_service = Arc::new(NlpServiceClient::new(&settings.nlp_service_url, timeout)?);
        match nlp_service.health_check().await {
            Ok(true) => info!("NLP service reachable at {}", nlp_service.base_url()),
            Ok(false) | Err(_) => warn!(
                "NLP service at {} is not healthy; /npl-textblob will fail until it is",
                nlp_service.base_url()
            ),
        }

        let store = Arc::new(
            MongoStore::connect(
                &settings.mongo_uri,
                &settings.mongo_database,
                &settings.mongo_collection,
                timeout,
            )
            .await?,
        );

        let textblob: Arc<dyn SentimentInterface> = Arc::new(TextBlobAnalyzer::new(nlp_service));
        let vader: Arc<dyn SentimentInterface> = Arc::new(VaderAnalyzer::new());
        info!("Sentiment models ready: {}, {}", textblob.model(), vader.model());

        Ok(Self::from_parts(translator, textblob, vader, store))
    }

    pub fn from_parts(
        translator: Arc<dyn TranslateInterface>,
        textblob: Arc<dyn SentimentInterface>,
        vader: Arc<dyn SentimentInterface>,
        store: Arc<dyn RecordStore>,
    ) -> Self {
        Self {
            translator,
            textblob,
            vader,
            store,
        }
    }

    pub fn analyzer(&self, model: SentimentModel) -> &Arc<dyn SentimentInterface> {
        match model {
            SentimentModel::TextBlob => &self.textblob,
            SentimentModel::Vader => &self.vader,
        }
    }
}
