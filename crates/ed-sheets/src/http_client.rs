//! Sheets v4 REST implementation of [`SheetsApi`].

use crate::{Result as SheetsResult, SheetsApi, SheetsError};

use ed_auth::AccessTokenProvider;

use std::panic::Location;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use error_location::ErrorLocation;
use log::debug;
use reqwest::{Response, StatusCode};
use serde::Deserialize;
use serde_json::{Value, json};

/// Response body marker Google uses when a range names a nonexistent sheet.
const MISSING_SHEET_MARKER: &str = "Unable to parse range";

#[derive(Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

pub struct HttpSheetsClient {
    http: reqwest::Client,
    base_url: String,
    spreadsheet_id: String,
    tokens: Arc<AccessTokenProvider>,
}

impl HttpSheetsClient {
    #[track_caller]
    pub fn new(
        base_url: &str,
        spreadsheet_id: &str,
        tokens: Arc<AccessTokenProvider>,
        timeout: Duration,
    ) -> SheetsResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SheetsError::Unavailable {
                message: format!("Failed to build HTTP client: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            spreadsheet_id: spreadsheet_id.to_string(),
            tokens,
        })
    }

    fn values_url(&self, range: &str) -> String {
        format!(
            "{}/v4/spreadsheets/{}/values/{}",
            self.base_url, self.spreadsheet_id, range
        )
    }

    async fn bearer(&self) -> SheetsResult<String> {
        self.tokens
            .token()
            .await
            .map_err(|e| SheetsError::Unavailable {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Map non-success responses to typed errors; `range` is only used to
    /// name the sheet in the missing-sheet case.
    async fn check(response: Response, range: &str) -> SheetsResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        if status == StatusCode::BAD_REQUEST && message.contains(MISSING_SHEET_MARKER) {
            return Err(SheetsError::MissingSheet {
                title: sheet_title(range).to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Err(SheetsError::Api {
            status: status.as_u16(),
            message,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

#[async_trait]
impl SheetsApi for HttpSheetsClient {
    async fn get_values(&self, range: &str) -> SheetsResult<Vec<Vec<String>>> {
        let token = self.bearer().await?;

        let response = self
            .http
            .get(self.values_url(range))
            .bearer_auth(token)
            .send()
            .await
            .map_err(send_error)?;
        let response = Self::check(response, range).await?;

        let body: ValueRange = response.json().await.map_err(send_error)?;
        let rows = body
            .values
            .into_iter()
            .map(|row| row.iter().map(cell_to_string).collect())
            .collect();

        Ok(rows)
    }

    async fn append_values(&self, range: &str, rows: Vec<Vec<String>>) -> SheetsResult<()> {
        let token = self.bearer().await?;
        let row_count = rows.len();

        let response = self
            .http
            .post(format!("{}:append", self.values_url(range)))
            .query(&[
                ("valueInputOption", "USER_ENTERED"),
                ("insertDataOption", "INSERT_ROWS"),
            ])
            .bearer_auth(token)
            .json(&json!({ "values": rows }))
            .send()
            .await
            .map_err(send_error)?;
        Self::check(response, range).await?;

        debug!("appended {} row(s) to '{}'", row_count, range);
        Ok(())
    }

    async fn add_sheet(&self, title: &str) -> SheetsResult<()> {
        let token = self.bearer().await?;

        let body = json!({
            "requests": [{ "addSheet": { "properties": { "title": title } } }]
        });

        let response = self
            .http
            .post(format!(
                "{}/v4/spreadsheets/{}:batchUpdate",
                self.base_url, self.spreadsheet_id
            ))
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(send_error)?;
        Self::check(response, title).await?;

        debug!("created sheet '{}'", title);
        Ok(())
    }
}

/// Sheet title part of an A1-notation range.
fn sheet_title(range: &str) -> &str {
    range.split('!').next().unwrap_or(range)
}

/// Cells come back as JSON strings for USER_ENTERED data, but numbers can
/// appear too; stringify whatever arrives.
fn cell_to_string(cell: &Value) -> String {
    match cell {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[track_caller]
fn send_error(source: reqwest::Error) -> SheetsError {
    if source.is_connect() || source.is_timeout() {
        SheetsError::Unavailable {
            message: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    } else {
        SheetsError::Http {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
