//! Persisted diary record and its spreadsheet row encoding.

use crate::{CoreError, Position, Result as CoreResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Header row written when a user's sheet is provisioned; skipped on read.
pub const RECORD_HEADER: [&str; 7] = [
    "Timestamp",
    "Emotion",
    "Category",
    "Diary Text",
    "x",
    "y",
    "z",
];

/// Stored row order: `[timestamp, emotion, category, text, x, y, z]`.
pub const RECORD_COLUMNS: usize = 7;

/// One persisted diary submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub timestamp: String,
    pub emotion: String,
    pub category: String,
    pub text: String,
    pub position: Position,
}

impl Record {
    /// Encode into the stored row order.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.timestamp.clone(),
            self.emotion.clone(),
            self.category.clone(),
            self.text.clone(),
            self.position.x.to_string(),
            self.position.y.to_string(),
            self.position.z.to_string(),
        ]
    }

    /// Decode a stored row.
    ///
    /// Rows must carry all [`RECORD_COLUMNS`] cells; the position columns must
    /// parse as numbers.
    #[track_caller]
    pub fn from_row(row: &[String]) -> CoreResult<Self> {
        if row.len() < RECORD_COLUMNS {
            return Err(CoreError::ShortRow {
                expected: RECORD_COLUMNS,
                actual: row.len(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            timestamp: row[0].clone(),
            emotion: row[1].clone(),
            category: row[2].clone(),
            text: row[3].clone(),
            position: Position {
                x: parse_axis("x", &row[4])?,
                y: parse_axis("y", &row[5])?,
                z: parse_axis("z", &row[6])?,
            },
        })
    }

    /// True for the literal header row a provisioned sheet starts with.
    pub fn is_header_row(row: &[String]) -> bool {
        row.len() == RECORD_COLUMNS && row.iter().zip(RECORD_HEADER).all(|(cell, head)| cell == head)
    }
}

#[track_caller]
fn parse_axis(column: &'static str, value: &str) -> CoreResult<f64> {
    value.parse().map_err(|_| CoreError::InvalidNumber {
        column,
        value: value.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}
