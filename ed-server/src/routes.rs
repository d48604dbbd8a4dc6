use crate::{analyze_diary, get_all_records, login, pages, register};

use crate::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Page endpoints
        .route("/", get(pages::index))
        .route("/login", get(pages::login_page).post(login))
        .route("/register", get(pages::register_page).post(register))
        // Diary endpoints
        .route("/get_all_records", get(get_all_records))
        .route("/analyze_diary", post(analyze_diary))
        // Add shared state
        .with_state(state)
        // CORS middleware (the web client may be served from elsewhere)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
