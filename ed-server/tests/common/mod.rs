#![allow(dead_code)]

//! Test infrastructure for ed-server API tests

use ed_nlp::{
    EmotionClassifier, ModelRegistry, NlpError, Prediction, Result as NlpResult, Summarizer,
};
use ed_server::AppState;
use ed_sheets::{Result as SheetsResult, SheetsApi, SheetsError, UserDirectory};

use std::collections::BTreeMap;
use std::panic::Location;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use error_location::ErrorLocation;
use http_body_util::BodyExt;
use tower::ServiceExt;

// =============================================================================
// Fake store
// =============================================================================

/// In-memory stand-in for the spreadsheet service, keyed by sheet title.
pub struct InMemorySheets {
    sheets: Mutex<BTreeMap<String, Vec<Vec<String>>>>,
}

impl InMemorySheets {
    pub fn with_users_sheet() -> Self {
        let mut sheets = BTreeMap::new();
        sheets.insert("users".to_string(), Vec::new());
        Self {
            sheets: Mutex::new(sheets),
        }
    }

    pub fn rows(&self, title: &str) -> Option<Vec<Vec<String>>> {
        self.sheets.lock().unwrap().get(title).cloned()
    }
}

fn title_of(range: &str) -> String {
    range.split('!').next().unwrap_or(range).to_string()
}

fn missing(title: &str) -> SheetsError {
    SheetsError::MissingSheet {
        title: title.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}

#[async_trait]
impl SheetsApi for InMemorySheets {
    async fn get_values(&self, range: &str) -> SheetsResult<Vec<Vec<String>>> {
        let title = title_of(range);
        self.sheets
            .lock()
            .unwrap()
            .get(&title)
            .cloned()
            .ok_or_else(|| missing(&title))
    }

    async fn append_values(&self, range: &str, rows: Vec<Vec<String>>) -> SheetsResult<()> {
        let title = title_of(range);
        let mut sheets = self.sheets.lock().unwrap();
        let sheet = sheets.get_mut(&title).ok_or_else(|| missing(&title))?;
        sheet.extend(rows);
        Ok(())
    }

    async fn add_sheet(&self, title: &str) -> SheetsResult<()> {
        self.sheets
            .lock()
            .unwrap()
            .insert(title.to_string(), Vec::new());
        Ok(())
    }
}

/// Store whose every call fails as unreachable.
pub struct UnavailableSheets;

fn unavailable() -> SheetsError {
    SheetsError::Unavailable {
        message: "connection refused".to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}

#[async_trait]
impl SheetsApi for UnavailableSheets {
    async fn get_values(&self, _range: &str) -> SheetsResult<Vec<Vec<String>>> {
        Err(unavailable())
    }

    async fn append_values(&self, _range: &str, _rows: Vec<Vec<String>>) -> SheetsResult<()> {
        Err(unavailable())
    }

    async fn add_sheet(&self, _title: &str) -> SheetsResult<()> {
        Err(unavailable())
    }
}

// =============================================================================
// Fake models
// =============================================================================

/// Classifier that always answers with one fixed label.
pub struct FixedClassifier {
    pub label: &'static str,
}

#[async_trait]
impl EmotionClassifier for FixedClassifier {
    async fn classify(&self, _text: &str) -> NlpResult<Vec<Prediction>> {
        Ok(vec![Prediction::new(self.label, 0.97)])
    }
}

/// Classifier that fails every call.
pub struct FailingClassifier;

#[async_trait]
impl EmotionClassifier for FailingClassifier {
    async fn classify(&self, _text: &str) -> NlpResult<Vec<Prediction>> {
        Err(NlpError::Endpoint {
            model: "emotion".to_string(),
            status: 503,
            message: "unavailable".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

/// Summarizer that always succeeds; its output is discarded anyway.
pub struct FixedSummarizer;

#[async_trait]
impl Summarizer for FixedSummarizer {
    async fn summarize(&self, _text: &str) -> NlpResult<String> {
        Ok("요약".to_string())
    }
}

// =============================================================================
// State builders
// =============================================================================

/// AppState with an empty users sheet and a classifier pinned to `label`.
pub fn create_test_state_with_label(label: &'static str) -> (AppState, Arc<InMemorySheets>) {
    let sheets = Arc::new(InMemorySheets::with_users_sheet());
    let models = Arc::new(ModelRegistry::new(
        Some(Arc::new(FixedClassifier { label })),
        Some(Arc::new(FixedSummarizer)),
    ));

    (
        AppState {
            sheets: sheets.clone(),
            models,
        },
        sheets,
    )
}

pub fn create_test_state() -> (AppState, Arc<InMemorySheets>) {
    create_test_state_with_label("happy")
}

/// AppState whose models never loaded.
pub fn create_degraded_state() -> (AppState, Arc<InMemorySheets>) {
    let sheets = Arc::new(InMemorySheets::with_users_sheet());
    (
        AppState {
            sheets: sheets.clone(),
            models: Arc::new(ModelRegistry::disabled()),
        },
        sheets,
    )
}

/// Register a user directly against the store, returning the user id.
pub async fn create_test_user(state: &AppState, email: &str, password: &str) -> String {
    UserDirectory::new(state.sheets.clone())
        .create_user(email, password)
        .await
        .expect("Failed to create test user")
}

// =============================================================================
// Request helpers
// =============================================================================

/// POST a JSON body and return (status, parsed JSON body).
pub async fn post_json(
    app: axum::Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);

    (status, json)
}

/// GET a path and return (status, parsed JSON body).
pub async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);

    (status, json)
}
