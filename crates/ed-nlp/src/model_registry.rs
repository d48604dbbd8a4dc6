use crate::{EmotionClassifier, Summarizer};

use std::sync::Arc;

/// Process-wide handle to the loaded inference collaborators.
///
/// Built once at startup and shared read-only by every request (load-once,
/// use-many; no reload path). Either slot may be empty: the server still runs
/// in that degraded mode, but analysis requests are refused.
pub struct ModelRegistry {
    emotion: Option<Arc<dyn EmotionClassifier>>,
    summarizer: Option<Arc<dyn Summarizer>>,
}

impl ModelRegistry {
    pub fn new(
        emotion: Option<Arc<dyn EmotionClassifier>>,
        summarizer: Option<Arc<dyn Summarizer>>,
    ) -> Self {
        Self { emotion, summarizer }
    }

    /// Registry with nothing loaded; analysis is refused until restart.
    pub fn disabled() -> Self {
        Self {
            emotion: None,
            summarizer: None,
        }
    }

    /// Both models loaded? Gates the analysis endpoint.
    pub fn ready(&self) -> bool {
        self.emotion.is_some() && self.summarizer.is_some()
    }

    pub fn emotion_classifier(&self) -> Option<&dyn EmotionClassifier> {
        self.emotion.as_deref()
    }

    pub fn summarizer(&self) -> Option<&dyn Summarizer> {
        self.summarizer.as_deref()
    }
}
