//! Per-user diary record storage.
//!
//! Each user owns one sheet, titled with their user id. Rows follow the
//! layout in [`ed_core::models::record`]; the first row is the fixed header.

use crate::{Result as SheetsResult, SheetsApi, SheetsError};

use ed_core::{RECORD_COLUMNS, RECORD_HEADER, Record};

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use log::debug;

pub struct RecordStore {
    sheets: Arc<dyn SheetsApi>,
}

impl RecordStore {
    pub fn new(sheets: Arc<dyn SheetsApi>) -> Self {
        Self { sheets }
    }

    fn record_range(user_id: &str) -> String {
        format!("{}!A:G", user_id)
    }

    /// Create a user's record sheet and write the header row.
    pub async fn provision(&self, user_id: &str) -> SheetsResult<()> {
        self.sheets.add_sheet(user_id).await?;

        let header = RECORD_HEADER.iter().map(|cell| cell.to_string()).collect();
        self.sheets
            .append_values(&format!("{}!A1", user_id), vec![header])
            .await?;

        debug!("provisioned record sheet '{}'", user_id);
        Ok(())
    }

    /// Append one record to the user's sheet.
    pub async fn append(&self, user_id: &str, record: &Record) -> SheetsResult<()> {
        self.sheets
            .append_values(&Self::record_range(user_id), vec![record.to_row()])
            .await
    }

    /// All records for a user, oldest first.
    ///
    /// A missing sheet means a freshly registered user with no entries:
    /// empty result, not an error. The header row and under-filled rows are
    /// skipped; a row with an unparseable position is malformed data.
    pub async fn list(&self, user_id: &str) -> SheetsResult<Vec<Record>> {
        let rows = match self.sheets.get_values(&Self::record_range(user_id)).await {
            Ok(rows) => rows,
            Err(SheetsError::MissingSheet { .. }) => {
                debug!("no record sheet for '{}' yet", user_id);
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

        let mut records = Vec::new();
        for (index, row) in rows.iter().enumerate() {
            if index == 0 && Record::is_header_row(row) {
                continue;
            }
            if row.len() < RECORD_COLUMNS {
                continue;
            }

            let record = Record::from_row(row).map_err(|e| SheetsError::Malformed {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;
            records.push(record);
        }

        debug!("loaded {} record(s) for '{}'", records.len(), user_id);
        Ok(records)
    }
}
