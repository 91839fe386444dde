use async_trait::async_trait;

/// Language code the sentiment models expect
pub const ENGLISH: &str = "en";

/// Language detection and translation - actual implementation in an external service
#[async_trait]
pub trait TranslateInterface: Send + Sync {
    /// Detect the language of `text`, returning its ISO code (e.g. "pt", "en")
    async fn detect(&self, text: &str) -> Result<String, anyhow::Error>;

    /// Translate `text` into the `dest` language
    async fn translate(&self, text: &str, dest: &str) -> Result<String, anyhow::Error>;
}
