use serde::Deserialize;

/// Query parameters for GET /get_all_records
#[derive(Debug, Deserialize)]
pub struct RecordsQuery {
    #[serde(default)]
    pub user_email: Option<String>,
}
