//! Google Translate web endpoint client
//!
//! Talks to the keyless `translate_a/single` endpoint used by the
//! Translate web widget. One call returns both the detected source
//! language and the translated segments:
//!
//! ```text
//! [[["I love this","Eu amo isso",null,null,10]],null,"pt",...]
//! ```

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use super::interface::{TranslateInterface, ENGLISH};

#[derive(Debug, Clone)]
pub struct GoogleTranslator {
    client: Client,
    base_url: String,
}

/// Parsed reply of a single translate call
#[derive(Debug, Clone, PartialEq)]
pub struct GoogleReply {
    pub source_lang: String,
    pub text: String,
}

impl GoogleTranslator {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    async fn fetch(&self, text: &str, dest: &str) -> Result<GoogleReply> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", dest),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(anyhow!("Translate API error ({}): {}", status, body));
        }

        let json: Value = response.json().await?;
        parse_reply(&json)
    }
}

/// Pull the detected language and the joined translation out of a raw reply
pub fn parse_reply(json: &Value) -> Result<GoogleReply> {
    let source_lang = json
        .get(2)
        .and_then(|v| v.as_str())
        .ok_or_else(|| anyhow!("Invalid translate response: missing source language"))?
        .to_string();

    let segments = json
        .get(0)
        .and_then(|v| v.as_array())
        .ok_or_else(|| anyhow!("Invalid translate response: missing segments"))?;

    let text = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(|t| t.as_str()))
        .collect::<String>();

    Ok(GoogleReply { source_lang, text })
}

#[async_trait]
impl TranslateInterface for GoogleTranslator {
    async fn detect(&self, text: &str) -> Result<String, anyhow::Error> {
        let reply = self.fetch(text, ENGLISH).await?;
        debug!("Detected language: {}", reply.source_lang);
        Ok(reply.source_lang)
    }

    async fn translate(&self, text: &str, dest: &str) -> Result<String, anyhow::Error> {
        let reply = self.fetch(text, dest).await?;
        debug!("Translated {} -> {}: {}", reply.source_lang, dest, reply.text);
        Ok(reply.text)
    }
}
