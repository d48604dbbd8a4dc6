use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SheetsError {
    /// The store cannot be reached at all (network, credentials).
    #[error("Spreadsheet service unavailable: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },

    /// The store answered with an API-level failure.
    #[error("Spreadsheet API returned {status}: {message} {location}")]
    Api {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("Spreadsheet request failed: {source} {location}")]
    Http {
        source: reqwest::Error,
        location: ErrorLocation,
    },

    /// The addressed sheet does not exist. New users hit this on first read.
    #[error("No sheet titled '{title}' {location}")]
    MissingSheet {
        title: String,
        location: ErrorLocation,
    },

    #[error("Malformed sheet data: {message} {location}")]
    Malformed {
        message: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, SheetsError>;
