use serde::Serialize;

/// Success body for login and register
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub message: String,
}

impl StatusResponse {
    pub fn success<S: Into<String>>(message: S) -> Self {
        Self {
            status: "success",
            message: message.into(),
        }
    }
}
