use ed_core::Position;

use serde::Serialize;

/// Success body for POST /analyze_diary: the analysis plus the echoed entry.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub status: &'static str,
    pub emotion: String,
    pub emotion_label: String,
    pub category: String,
    pub timestamp: String,
    pub text: String,
    pub position: Position,
}
