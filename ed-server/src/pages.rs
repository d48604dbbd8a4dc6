//! Static page handlers.
//!
//! The interactive diary client is a separate frontend; these pages are the
//! minimal shells it boots from, embedded at compile time.

use axum::response::Html;

/// GET / - main diary page
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../templates/index.html"))
}

/// GET /login - login page
pub async fn login_page() -> Html<&'static str> {
    Html(include_str!("../templates/login.html"))
}

/// GET /register - registration page
pub async fn register_page() -> Html<&'static str> {
    Html(include_str!("../templates/register.html"))
}
