//! HTTP client for hosted inference endpoints.
//!
//! Speaks the Hugging Face inference JSON shape: `{"inputs": text}` in,
//! prediction arrays (flat or nested) or `summary_text` objects out. One
//! client instance per model, built once at startup.

use crate::{EmotionClassifier, NlpError, Prediction, Result as NlpResult, Summarizer};

use std::panic::Location;
use std::time::Duration;

use async_trait::async_trait;
use error_location::ErrorLocation;
use serde_json::{Value, json};

pub struct HfInferenceClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    api_token: Option<String>,
}

impl HfInferenceClient {
    #[track_caller]
    pub fn new(
        base_url: &str,
        model: &str,
        api_token: Option<String>,
        timeout: Duration,
    ) -> NlpResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NlpError::Client {
                message: format!("Failed to build HTTP client: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self {
            http,
            endpoint: format!("{}/models/{}", base_url.trim_end_matches('/'), model),
            model: model.to_string(),
            api_token,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn call(&self, text: &str) -> NlpResult<Value> {
        let mut request = self.http.post(&self.endpoint).json(&json!({ "inputs": text }));
        if let Some(ref token) = self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| NlpError::Request {
            model: self.model.clone(),
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(NlpError::Endpoint {
                model: self.model.clone(),
                status: status.as_u16(),
                message,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        response.json().await.map_err(|e| NlpError::Request {
            model: self.model.clone(),
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

#[async_trait]
impl EmotionClassifier for HfInferenceClient {
    async fn classify(&self, text: &str) -> NlpResult<Vec<Prediction>> {
        let body = self.call(text).await?;
        parse_classification(&self.model, &body)
    }
}

#[async_trait]
impl Summarizer for HfInferenceClient {
    async fn summarize(&self, text: &str) -> NlpResult<String> {
        let body = self.call(text).await?;
        parse_summary(&self.model, &body)
    }
}

/// Parse a classification response.
///
/// The hosted API answers `[{"label", "score"}, ...]` for a single input but
/// `[[...]]` when the pipeline wraps per-input results; accept both.
pub(crate) fn parse_classification(model: &str, body: &Value) -> NlpResult<Vec<Prediction>> {
    let items = match body.as_array() {
        Some(outer) if outer.first().is_some_and(Value::is_array) => {
            outer[0].as_array().map(Vec::as_slice).unwrap_or(&[])
        }
        Some(outer) => outer.as_slice(),
        None => {
            return Err(malformed(model, "expected a prediction array"));
        }
    };

    let mut predictions = Vec::with_capacity(items.len());
    for item in items {
        let label = item
            .get("label")
            .and_then(Value::as_str)
            .ok_or_else(|| malformed(model, "prediction is missing 'label'"))?;
        let score = item.get("score").and_then(Value::as_f64).unwrap_or(0.0);
        predictions.push(Prediction::new(label, score));
    }

    Ok(predictions)
}

/// Parse a summarization response: `[{"summary_text"}]` or a bare object.
pub(crate) fn parse_summary(model: &str, body: &Value) -> NlpResult<String> {
    let item = match body.as_array() {
        Some(outer) => outer
            .first()
            .ok_or_else(|| malformed(model, "empty summary array"))?,
        None => body,
    };

    item.get("summary_text")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| malformed(model, "summary is missing 'summary_text'"))
}

#[track_caller]
fn malformed(model: &str, message: &str) -> NlpError {
    NlpError::MalformedResponse {
        model: model.to_string(),
        message: message.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}
