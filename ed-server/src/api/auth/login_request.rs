use serde::Deserialize;

/// Request body for POST /login. Absent fields behave like empty ones and
/// fail validation in the handler.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}
