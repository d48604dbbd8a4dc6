//! OAuth2 access tokens for the spreadsheet API.
//!
//! Service-account flow: sign a short-lived RS256 JWT assertion, exchange it
//! at the token endpoint, cache the access token until near expiry. One
//! provider instance is shared by every request.

use crate::{AuthError, Result as AuthResult, ServiceAccountKey};

use std::panic::Location;

use chrono::{DateTime, TimeDelta, Utc};
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use log::debug;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_TTL_SECS: i64 = 3600;
/// Refresh this long before the reported expiry.
const EXPIRY_SKEW_SECS: i64 = 60;

#[derive(Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

#[derive(Debug)]
struct CachedToken {
    token: String,
    expires_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct AccessTokenProvider {
    key: ServiceAccountKey,
    encoding_key: EncodingKey,
    http: reqwest::Client,
    cached: Mutex<Option<CachedToken>>,
}

impl AccessTokenProvider {
    #[track_caller]
    pub fn new(key: ServiceAccountKey) -> AuthResult<Self> {
        let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes()).map_err(|e| {
            AuthError::InvalidPrivateKey {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        Ok(Self {
            key,
            encoding_key,
            http: reqwest::Client::new(),
            cached: Mutex::new(None),
        })
    }

    /// Current access token, minting a fresh one when the cache is empty or
    /// about to expire.
    pub async fn token(&self) -> AuthResult<String> {
        let mut cached = self.cached.lock().await;

        if let Some(ref entry) = *cached
            && entry.expires_at > Utc::now() + TimeDelta::seconds(EXPIRY_SKEW_SECS)
        {
            return Ok(entry.token.clone());
        }

        let (token, expires_in) = self.exchange().await?;
        debug!("minted spreadsheet access token, expires in {}s", expires_in);

        *cached = Some(CachedToken {
            token: token.clone(),
            expires_at: Utc::now() + TimeDelta::seconds(expires_in),
        });

        Ok(token)
    }

    async fn exchange(&self) -> AuthResult<(String, i64)> {
        let now = Utc::now().timestamp();
        let claims = AssertionClaims {
            iss: &self.key.client_email,
            scope: SHEETS_SCOPE,
            aud: &self.key.token_uri,
            iat: now,
            exp: now + ASSERTION_TTL_SECS,
        };

        let assertion = jsonwebtoken::encode(
            &Header::new(Algorithm::RS256),
            &claims,
            &self.encoding_key,
        )
        .map_err(|e| AuthError::Sign {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let response = self
            .http
            .post(&self.key.token_uri)
            .form(&[
                ("grant_type", JWT_BEARER_GRANT),
                ("assertion", assertion.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AuthError::TokenRequest {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AuthError::TokenExchange {
                status: status.as_u16(),
                message,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let parsed: TokenResponse =
            response.json().await.map_err(|e| AuthError::TokenRequest {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok((parsed.access_token, parsed.expires_in))
    }
}
