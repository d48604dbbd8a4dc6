//! Record listing REST API handler

use crate::{ApiError, ApiResult, AppState, RecordDto, RecordListResponse, RecordsQuery};

use ed_sheets::{RecordStore, UserDirectory};

use std::panic::Location;

use axum::{
    Json,
    extract::{Query, State},
};
use error_location::ErrorLocation;
use log::debug;

/// GET /get_all_records?user_email=...
///
/// All persisted records for one user, oldest first. A freshly registered
/// user with no entries gets an empty list, not an error.
pub async fn get_all_records(
    State(state): State<AppState>,
    Query(query): Query<RecordsQuery>,
) -> ApiResult<Json<RecordListResponse>> {
    let email = query.user_email.unwrap_or_default();
    if email.trim().is_empty() {
        return Err(ApiError::Validation {
            message: "user_email query parameter is required".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let directory = UserDirectory::new(state.sheets.clone());
    let user_id = directory
        .find_user_id(&email)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: "User not found".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let records = RecordStore::new(state.sheets.clone()).list(&user_id).await?;
    debug!("returning {} record(s) for '{}'", records.len(), email);

    Ok(Json(RecordListResponse {
        status: "success",
        records: records.into_iter().map(RecordDto::from).collect(),
    }))
}
