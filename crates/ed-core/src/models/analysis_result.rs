use serde::{Deserialize, Serialize};

/// Output of one run of the categorization & emotion pipeline.
///
/// Produced once per request and never mutated afterwards; `timestamp` is
/// preformatted as `YYYY-MM-DD-HH:MM` (minute resolution, local clock).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Localized display emotion (e.g. "기쁨", "슬픔").
    pub emotion: String,
    /// Raw classifier output label (e.g. "happy", "sad").
    pub emotion_label: String,
    /// Coarse topical tag: hashtag text, keyword category, or the fallback.
    pub category: String,
    pub timestamp: String,
}
