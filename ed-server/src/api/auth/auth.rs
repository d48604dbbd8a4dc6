//! Account REST API handlers
//!
//! Registration and login against the users sheet.

use crate::{ApiError, ApiResult, AppState, LoginRequest, RegisterRequest, StatusResponse};

use ed_sheets::{LoginOutcome, UserDirectory};

use std::panic::Location;

use axum::{Json, extract::State, http::StatusCode};
use error_location::ErrorLocation;
use log::debug;

// =============================================================================
// Handlers
// =============================================================================

/// POST /login
///
/// Verify credentials against the users sheet. The first row matching the
/// email decides.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<StatusResponse>> {
    require_credentials(&request.email, &request.password)?;

    let directory = UserDirectory::new(state.sheets.clone());
    match directory
        .verify_credentials(&request.email, &request.password)
        .await?
    {
        LoginOutcome::Success { user_id } => {
            debug!("login succeeded for user {}", user_id);
            Ok(Json(StatusResponse::success("Login successful!")))
        }
        LoginOutcome::UnknownEmail => Err(ApiError::Unauthorized {
            message: "Login failed: no account with that email".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }),
        LoginOutcome::WrongPassword => Err(ApiError::Unauthorized {
            message: "Login failed: incorrect password".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}

/// POST /register
///
/// Create an account and provision the user's record sheet.
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<StatusResponse>)> {
    require_credentials(&request.email, &request.password)?;

    let directory = UserDirectory::new(state.sheets.clone());
    let user_id = directory
        .create_user(&request.email, &request.password)
        .await?;
    debug!("registered '{}' as user {}", request.email, user_id);

    Ok((
        StatusCode::CREATED,
        Json(StatusResponse::success("Registration successful!")),
    ))
}

#[track_caller]
fn require_credentials(email: &str, password: &str) -> ApiResult<()> {
    if email.trim().is_empty() || password.trim().is_empty() {
        return Err(ApiError::Validation {
            message: "Email and password are both required".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(())
}
