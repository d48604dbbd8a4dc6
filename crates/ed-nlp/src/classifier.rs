//! Seams for the two pretrained-model collaborators.
//!
//! The pipeline only ever sees these traits; the HTTP-backed implementation
//! lives in [`crate::hf_client`] and tests substitute canned ones.

use crate::{Prediction, Result as NlpResult};

use async_trait::async_trait;

/// Text classification over a small closed label set.
#[async_trait]
pub trait EmotionClassifier: Send + Sync {
    /// Classify `text`; predictions are ordered best-first.
    async fn classify(&self, text: &str) -> NlpResult<Vec<Prediction>>;
}

/// Abstractive summarization.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, text: &str) -> NlpResult<String>;
}
