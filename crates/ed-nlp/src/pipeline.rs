//! Categorization & emotion pipeline.
//!
//! Category precedence is a strict chain: hashtag, then keyword table, then
//! the fixed fallback. The first success short-circuits the rest.

use crate::{
    EmotionClassifier, NlpError, Result as NlpResult, Summarizer, emotion_map, first_hashtag,
    match_keywords,
};

use ed_core::AnalysisResult;

use std::panic::Location;

use chrono::Local;
use error_location::ErrorLocation;
use log::debug;

/// Category assigned when neither a hashtag nor a keyword matches.
pub const FALLBACK_CATEGORY: &str = "기타";

/// Minute resolution, local clock, no timezone normalization.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d-%H:%M";

/// Run emotion classification and category assignment over one diary text.
///
/// Empty text is the caller's problem; the handler rejects it before this
/// runs. Fails if either inference call fails or the classifier returns no
/// predictions.
pub async fn analyze(
    text: &str,
    classifier: &dyn EmotionClassifier,
    summarizer: Option<&dyn Summarizer>,
) -> NlpResult<AnalysisResult> {
    let predictions = classifier.classify(text).await?;
    let top = predictions.first().ok_or_else(|| NlpError::EmptyPrediction {
        model: "emotion classifier".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let emotion = emotion_map::display_emotion(&top.label);
    debug!("emotion label '{}' mapped to '{}'", top.label, emotion);

    let category = resolve_category(text, summarizer).await?;

    let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();

    Ok(AnalysisResult {
        emotion: emotion.to_string(),
        emotion_label: top.label.clone(),
        category,
        timestamp,
    })
}

async fn resolve_category(text: &str, summarizer: Option<&dyn Summarizer>) -> NlpResult<String> {
    if let Some(tag) = first_hashtag(text) {
        debug!("hashtag '#{}' found, assigned as category", tag);
        return Ok(tag.to_string());
    }

    if let Some(matched) = match_keywords(text) {
        debug!(
            "keyword '{}' found, category: {}",
            matched.keyword, matched.category
        );
        return Ok(matched.category.to_string());
    }

    if let Some(summarizer) = summarizer {
        // Summary output is discarded; only a failing call matters here.
        let _summary = summarizer.summarize(text).await?;
    }
    debug!("no hashtag or keyword, category: {}", FALLBACK_CATEGORY);

    Ok(FALLBACK_CATEGORY.to_string())
}
