use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Failed to read service account key {path}: {source}")]
    KeyFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid service account key: {message} {location}")]
    KeyParse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid RSA private key: {message} {location}")]
    InvalidPrivateKey {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to sign token assertion: {message} {location}")]
    Sign {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token request failed: {source} {location}")]
    TokenRequest {
        source: reqwest::Error,
        location: ErrorLocation,
    },

    #[error("Token endpoint returned {status}: {message} {location}")]
    TokenExchange {
        status: u16,
        message: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, AuthError>;
