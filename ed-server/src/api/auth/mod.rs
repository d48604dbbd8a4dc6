pub mod auth;
pub mod login_request;
pub mod register_request;
pub mod status_response;
