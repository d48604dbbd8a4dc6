use crate::RecordDto;

use serde::Serialize;

/// List of records response
#[derive(Debug, Serialize)]
pub struct RecordListResponse {
    pub status: &'static str,
    pub records: Vec<RecordDto>,
}
