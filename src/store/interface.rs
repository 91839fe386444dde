use async_trait::async_trait;

use crate::record::SentimentRecord;

/// Append-only store for analysed requests
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Round-trip to the backing store to check it is reachable
    async fn ping(&self) -> Result<(), anyhow::Error>;

    async fn insert(&self, record: &SentimentRecord) -> Result<(), anyhow::Error>;
}
