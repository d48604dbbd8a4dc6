//! Diary analysis REST API handler
//!
//! Runs the categorization & emotion pipeline over the submitted text, then
//! persists the resulting record. A partially persisted request is not
//! rolled back; the failure is reported as-is.

use crate::{AnalyzeRequest, AnalyzeResponse, ApiError, ApiResult, AppState};

use ed_core::Record;
use ed_nlp::analyze;
use ed_sheets::{RecordStore, UserDirectory};

use std::panic::Location;

use axum::{Json, extract::State};
use error_location::ErrorLocation;
use log::debug;

/// POST /analyze_diary
///
/// Check order mirrors the rest of the validation surface: models first,
/// then text, email, and position, then the user lookup.
pub async fn analyze_diary(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> ApiResult<Json<AnalyzeResponse>> {
    let (Some(classifier), Some(summarizer)) = (
        state.models.emotion_classifier(),
        state.models.summarizer(),
    ) else {
        return Err(ApiError::UpstreamUnavailable {
            message: "Inference models are not loaded".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    };

    debug!(
        "received diary text: '{}' user: {}",
        request.diary_entry, request.user_email
    );

    if request.diary_entry.trim().is_empty() {
        return Err(validation("Diary text is empty"));
    }
    if request.user_email.trim().is_empty() {
        return Err(validation("User email is empty"));
    }
    let Some(position) = request.position else {
        return Err(validation("Position data is missing"));
    };

    let directory = UserDirectory::new(state.sheets.clone());
    let user_id = directory
        .find_user_id(&request.user_email)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: "User not found".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let analysis = analyze(&request.diary_entry, classifier, Some(summarizer)).await?;

    let record = Record {
        timestamp: analysis.timestamp.clone(),
        emotion: analysis.emotion.clone(),
        category: analysis.category.clone(),
        text: request.diary_entry.clone(),
        position,
    };
    RecordStore::new(state.sheets.clone())
        .append(&user_id, &record)
        .await?;

    Ok(Json(AnalyzeResponse {
        status: "success",
        emotion: analysis.emotion,
        emotion_label: analysis.emotion_label,
        category: analysis.category,
        timestamp: analysis.timestamp,
        text: request.diary_entry,
        position,
    }))
}

#[track_caller]
fn validation(message: &str) -> ApiError {
    ApiError::Validation {
        message: message.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}
