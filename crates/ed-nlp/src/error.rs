use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NlpError {
    #[error("Inference client setup failed: {message} {location}")]
    Client {
        message: String,
        location: ErrorLocation,
    },

    #[error("Inference request to {model} failed: {source} {location}")]
    Request {
        model: String,
        source: reqwest::Error,
        location: ErrorLocation,
    },

    #[error("Inference endpoint {model} returned {status}: {message} {location}")]
    Endpoint {
        model: String,
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("Classifier {model} returned no predictions {location}")]
    EmptyPrediction {
        model: String,
        location: ErrorLocation,
    },

    #[error("Malformed response from {model}: {message} {location}")]
    MalformedResponse {
        model: String,
        message: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, NlpError>;
