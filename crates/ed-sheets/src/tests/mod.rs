
use crate::{Result as SheetsResult, SheetsApi, SheetsError};

use std::collections::BTreeMap;
use std::panic::Location;
use std::sync::Mutex;

use async_trait::async_trait;
use error_location::ErrorLocation;

/// In-memory stand-in for the spreadsheet service.
///
/// Sheets are keyed by title; ranges are honored only for their title part,
/// which is all the store code addresses.
pub(crate) struct InMemorySheets {
    sheets: Mutex<BTreeMap<String, Vec<Vec<String>>>>,
}

impl InMemorySheets {
    pub(crate) fn new() -> Self {
        Self {
            sheets: Mutex::new(BTreeMap::new()),
        }
    }

    /// Fresh store with an empty users sheet, like a newly set up workbook.
    pub(crate) fn with_users_sheet() -> Self {
        let store = Self::new();
        store
            .sheets
            .lock()
            .unwrap()
            .insert(crate::USERS_SHEET.to_string(), Vec::new());
        store
    }

    pub(crate) fn rows(&self, title: &str) -> Option<Vec<Vec<String>>> {
        self.sheets.lock().unwrap().get(title).cloned()
    }

    pub(crate) fn insert_sheet(&self, title: &str, rows: Vec<Vec<String>>) {
        self.sheets.lock().unwrap().insert(title.to_string(), rows);
    }
}

fn title_of(range: &str) -> String {
    range.split('!').next().unwrap_or(range).to_string()
}

#[track_caller]
fn missing(title: &str) -> SheetsError {
    SheetsError::MissingSheet {
        title: title.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}

#[async_trait]
impl SheetsApi for InMemorySheets {
    async fn get_values(&self, range: &str) -> SheetsResult<Vec<Vec<String>>> {
        let title = title_of(range);
        self.sheets
            .lock()
            .unwrap()
            .get(&title)
            .cloned()
            .ok_or_else(|| missing(&title))
    }

    async fn append_values(&self, range: &str, rows: Vec<Vec<String>>) -> SheetsResult<()> {
        let title = title_of(range);
        let mut sheets = self.sheets.lock().unwrap();
        let sheet = sheets.get_mut(&title).ok_or_else(|| missing(&title))?;
        sheet.extend(rows);
        Ok(())
    }

    async fn add_sheet(&self, title: &str) -> SheetsResult<()> {
        let mut sheets = self.sheets.lock().unwrap();
        if sheets.contains_key(title) {
            return Err(SheetsError::Api {
                status: 400,
                message: format!("A sheet named '{}' already exists", title),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        sheets.insert(title.to_string(), Vec::new());
        Ok(())
    }
}
