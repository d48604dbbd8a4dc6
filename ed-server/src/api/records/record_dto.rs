use ed_core::{Position, Record};

use serde::Serialize;

/// Record DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct RecordDto {
    pub timestamp: String,
    pub emotion: String,
    pub category: String,
    pub text: String,
    pub position: Position,
}

impl From<Record> for RecordDto {
    fn from(r: Record) -> Self {
        Self {
            timestamp: r.timestamp,
            emotion: r.emotion,
            category: r.category,
            text: r.text,
            position: r.position,
        }
    }
}
