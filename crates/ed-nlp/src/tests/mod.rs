
use crate::{EmotionClassifier, NlpError, Prediction, Result as NlpResult, Summarizer};

use std::panic::Location;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use error_location::ErrorLocation;

/// Classifier that always answers with one fixed label.
pub(crate) struct FixedClassifier {
    pub label: &'static str,
}

#[async_trait]
impl EmotionClassifier for FixedClassifier {
    async fn classify(&self, _text: &str) -> NlpResult<Vec<Prediction>> {
        Ok(vec![Prediction::new(self.label, 0.97)])
    }
}

/// Classifier that answers with an empty prediction list.
pub(crate) struct EmptyClassifier;

#[async_trait]
impl EmotionClassifier for EmptyClassifier {
    async fn classify(&self, _text: &str) -> NlpResult<Vec<Prediction>> {
        Ok(Vec::new())
    }
}

/// Classifier that fails every call.
pub(crate) struct FailingClassifier;

#[async_trait]
impl EmotionClassifier for FailingClassifier {
    async fn classify(&self, _text: &str) -> NlpResult<Vec<Prediction>> {
        Err(endpoint_error("emotion"))
    }
}

/// Summarizer that records how often it was invoked.
#[derive(Default)]
pub(crate) struct CountingSummarizer {
    pub calls: AtomicUsize,
}

#[async_trait]
impl Summarizer for CountingSummarizer {
    async fn summarize(&self, _text: &str) -> NlpResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok("요약".to_string())
    }
}

/// Summarizer that fails every call.
pub(crate) struct FailingSummarizer;

#[async_trait]
impl Summarizer for FailingSummarizer {
    async fn summarize(&self, _text: &str) -> NlpResult<String> {
        Err(endpoint_error("summarizer"))
    }
}

fn endpoint_error(model: &str) -> NlpError {
    NlpError::Endpoint {
        model: model.to_string(),
        status: 503,
        message: "unavailable".to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}
