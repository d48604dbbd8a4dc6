use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Row has {actual} cells, expected at least {expected} {location}")]
    ShortRow {
        expected: usize,
        actual: usize,
        location: ErrorLocation,
    },

    #[error("Invalid number in column {column}: {value:?} {location}")]
    InvalidNumber {
        column: &'static str,
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
