use anyhow::Result;
use async_trait::async_trait;
use mongodb::bson::{doc, DateTime as BsonDateTime, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use std::time::Duration;
use tracing::{debug, info};

use super::interface::RecordStore;
use crate::record::SentimentRecord;
use crate::sentiment::SentimentScores;

/// MongoDB-backed record store
#[derive(Debug, Clone)]
pub struct MongoStore {
    database: Database,
    collection: Collection<Document>,
}

impl MongoStore {
    /// Build a client for `uri`. The driver connects lazily, so this succeeds
    /// even when the server is down; use `ping` to check reachability.
    pub async fn connect(
        uri: &str,
        database: &str,
        collection: &str,
        timeout: Duration,
    ) -> Result<Self> {
        let mut options = ClientOptions::parse(uri).await?;
        options.server_selection_timeout = Some(timeout);
        options.connect_timeout = Some(timeout);
        if options.app_name.is_none() {
            options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        }

        let client = Client::with_options(options)?;
        let database = client.database(database);
        let collection = database.collection::<Document>(collection);
        info!(
            "MongoDB store configured: database={}, collection={}",
            database.name(),
            collection.name()
        );

        Ok(Self { database, collection })
    }
}

/// Flatten a record into the stored document layout
pub fn to_document(record: &SentimentRecord) -> Document {
    let mut document = doc! {
        "texto": record.texto.as_str(),
        "idioma_detectado": record.idioma_detectado.as_str(),
        "traducao": record.traducao.as_str(),
    };

    match record.scores {
        SentimentScores::TextBlob { polarity, subjectivity } => {
            document.insert("polaridade", polarity);
            document.insert("subjectividade", subjectivity);
        }
        SentimentScores::Vader { compound, neg, neu, pos } => {
            document.insert("compound", compound);
            document.insert("neg", neg);
            document.insert("neu", neu);
            document.insert("pos", pos);
        }
    }

    document.insert("sentimento", record.sentimento.as_str());
    document.insert("modelo", record.modelo.as_str());
    document.insert("data", BsonDateTime::from_millis(record.data.timestamp_millis()));
    document
}

#[async_trait]
impl RecordStore for MongoStore {
    async fn ping(&self) -> Result<(), anyhow::Error> {
        self.database.run_command(doc! { "ping": 1 }, None).await?;
        Ok(())
    }

    async fn insert(&self, record: &SentimentRecord) -> Result<(), anyhow::Error> {
        let result = self.collection.insert_one(to_document(record), None).await?;
        debug!("Inserted sentiment record {}", result.inserted_id);
        Ok(())
    }
}
