use crate::ApiError;

use ed_nlp::NlpError;
use ed_sheets::SheetsError;

use std::panic::Location;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use error_location::ErrorLocation;

fn location() -> ErrorLocation {
    ErrorLocation::from(Location::caller())
}

#[test]
fn test_status_codes_per_variant() {
    let cases = [
        (
            ApiError::Validation {
                message: "m".into(),
                location: location(),
            },
            StatusCode::BAD_REQUEST,
        ),
        (
            ApiError::Unauthorized {
                message: "m".into(),
                location: location(),
            },
            StatusCode::UNAUTHORIZED,
        ),
        (
            ApiError::NotFound {
                message: "m".into(),
                location: location(),
            },
            StatusCode::NOT_FOUND,
        ),
        (
            ApiError::UpstreamUnavailable {
                message: "m".into(),
                location: location(),
            },
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
        (
            ApiError::Upstream {
                message: "m".into(),
                location: location(),
            },
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
        (
            ApiError::Analysis {
                message: "m".into(),
                location: location(),
            },
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
        (
            ApiError::Internal {
                message: "m".into(),
                location: location(),
            },
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    ];

    for (error, expected) in cases {
        assert_eq!(error.into_response().status(), expected);
    }
}

#[test]
fn test_store_unavailable_maps_to_upstream_unavailable() {
    let source = SheetsError::Unavailable {
        message: "no route".into(),
        location: location(),
    };

    let error: ApiError = source.into();
    assert!(matches!(error, ApiError::UpstreamUnavailable { .. }));
}

#[test]
fn test_store_api_failure_maps_to_upstream() {
    let source = SheetsError::Api {
        status: 403,
        message: "forbidden".into(),
        location: location(),
    };

    let error: ApiError = source.into();
    assert!(matches!(error, ApiError::Upstream { .. }));
}

#[test]
fn test_inference_failure_maps_to_analysis() {
    let source = NlpError::EmptyPrediction {
        model: "emotion".into(),
        location: location(),
    };

    let error: ApiError = source.into();
    assert!(matches!(error, ApiError::Analysis { .. }));
}
