use crate::{AuthError, Result as AuthResult};

use std::panic::Location;
use std::path::Path;

use error_location::ErrorLocation;
use serde::Deserialize;

/// The fields of a Google service account `credentials.json` this backend
/// needs. Extra fields in the file are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    "https://oauth2.googleapis.com/token".to_string()
}

impl ServiceAccountKey {
    #[track_caller]
    pub fn from_file(path: &Path) -> AuthResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| AuthError::KeyFile {
            path: path.display().to_string(),
            source: e,
        })?;

        serde_json::from_str(&contents).map_err(|e| AuthError::KeyParse {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
