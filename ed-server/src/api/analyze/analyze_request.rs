use ed_core::Position;

use serde::Deserialize;

/// Request body for POST /analyze_diary
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub diary_entry: String,
    #[serde(default)]
    pub user_email: String,
    #[serde(default)]
    pub position: Option<Position>,
}
