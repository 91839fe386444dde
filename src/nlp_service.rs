use anyhow::Result;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// HTTP client for the NLP sidecar that hosts the Python-only models (TextBlob)
#[derive(Debug, Clone)]
pub struct NlpServiceClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TextBlobRequest {
    pub text: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TextBlobResponse {
    pub polarity: f64,
    pub subjectivity: f64,
}

impl NlpServiceClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn textblob_sentiment(&self, text: &str) -> Result<TextBlobResponse> {
        let url = format!("{}/sentiment/textblob", self.base_url);
        let request = TextBlobRequest { text: text.to_string() };

        let response = self.client.post(&url).json(&request).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("NLP service returned {}: {}", status, body);
        }

        let result: TextBlobResponse = response.json().await?;
        Ok(result)
    }

    pub async fn health_check(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let response = self.client.get(&url).send().await?;
        Ok(response.status().is_success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let client = NlpServiceClient::new("http://nlp:8001/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url(), "http://nlp:8001");
    }

    #[test]
    fn test_textblob_reply_shape() {
        let reply: TextBlobResponse =
            serde_json::from_str(r#"{"polarity": -0.25, "subjectivity": 0.4, "extra": true}"#).unwrap();
        assert_eq!(reply.polarity, -0.25);
        assert_eq!(reply.subjectivity, 0.4);
    }

    #[tokio::test]
    async fn test_unreachable_service_is_an_error() {
        let client = NlpServiceClient::new("http://127.0.0.1:9", Duration::from_millis(500)).unwrap();
        assert!(client.textblob_sentiment("hello").await.is_err());
    }
}
