use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_CONFIG_PATH: &str = "conf.yaml";
const ENV_PREFIX: &str = "SENTIMENT";

/// Runtime settings, layered from defaults, an optional YAML file and the environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub mongo_uri: String,
    pub mongo_database: String,
    pub mongo_collection: String,
    pub translate_url: String,
    pub nlp_service_url: String,
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            mongo_uri: "mongodb://localhost:27017/analisador".to_string(),
            mongo_database: "analisador".to_string(),
            mongo_collection: "analiseSentimento".to_string(),
            translate_url: "https://translate.googleapis.com/translate_a/single".to_string(),
            nlp_service_url: "http://localhost:8001".to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl Settings {
    /// Load settings for the running process.
    ///
    /// Order of precedence (last wins): defaults, the YAML file named by
    /// `CONFIG_PATH` (must exist) or `conf.yaml` (optional), `SENTIMENT_*`
    /// variables, `MONGO_URI`.
    pub fn load() -> Result<Self> {
        match std::env::var("CONFIG_PATH") {
            Ok(path) => Self::read(&path, true, true),
            Err(_) => Self::read(DEFAULT_CONFIG_PATH, false, true),
        }
    }

    fn read(path: &str, required: bool, with_env: bool) -> Result<Self> {
        let mut builder = Config::builder().add_source(File::with_name(path).required(required));
        if with_env {
            builder = builder
                .add_source(Environment::with_prefix(ENV_PREFIX))
                .set_override_option("mongo_uri", std::env::var("MONGO_URI").ok())?;
        }

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    fn validate(&self) -> Result<()> {
        if self.mongo_uri.trim().is_empty() {
            anyhow::bail!("mongo_uri cannot be empty");
        }
        if self.mongo_database.trim().is_empty() || self.mongo_collection.trim().is_empty() {
            anyhow::bail!("mongo_database and mongo_collection must be set");
        }
        if self.request_timeout_secs == 0 {
            anyhow::bail!("request_timeout_secs must be greater than zero");
        }
        Ok(())
    }
}
