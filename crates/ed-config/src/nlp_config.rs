use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_EMOTION_MODEL, DEFAULT_HTTP_TIMEOUT_SECS,
    DEFAULT_NLP_BASE_URL, DEFAULT_SUMMARIZER_MODEL,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NlpConfig {
    /// When false the server runs without inference models; analysis
    /// requests are refused with a 500.
    pub enabled: bool,
    pub base_url: String,
    pub emotion_model: String,
    pub summarizer_model: String,
    /// Bearer token for the inference endpoints, if required.
    pub api_token: Option<String>,
    pub timeout_secs: u64,
}

impl Default for NlpConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: String::from(DEFAULT_NLP_BASE_URL),
            emotion_model: String::from(DEFAULT_EMOTION_MODEL),
            summarizer_model: String::from(DEFAULT_SUMMARIZER_MODEL),
            api_token: None,
            timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

impl NlpConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.enabled {
            return Ok(());
        }

        if self.base_url.trim().is_empty() {
            return Err(ConfigError::nlp("nlp.base_url must not be empty"));
        }

        if self.emotion_model.trim().is_empty() {
            return Err(ConfigError::nlp("nlp.emotion_model must not be empty"));
        }

        if self.summarizer_model.trim().is_empty() {
            return Err(ConfigError::nlp("nlp.summarizer_model must not be empty"));
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::nlp("nlp.timeout_secs must be >= 1"));
        }

        Ok(())
    }
}
