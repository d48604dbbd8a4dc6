use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_CREDENTIALS_FILE, DEFAULT_HTTP_TIMEOUT_SECS,
    DEFAULT_SHEETS_BASE_URL,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SheetsConfig {
    /// Workbook holding the users sheet and one record sheet per user.
    pub spreadsheet_id: String,
    /// Service account key file, relative to the config dir.
    pub credentials_file: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            spreadsheet_id: String::new(),
            credentials_file: String::from(DEFAULT_CREDENTIALS_FILE),
            base_url: String::from(DEFAULT_SHEETS_BASE_URL),
            timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

impl SheetsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.spreadsheet_id.trim().is_empty() {
            return Err(ConfigError::sheets(
                "sheets.spreadsheet_id must be set (the workbook backing the store)",
            ));
        }

        // Keep the key file inside the config dir
        let credentials = std::path::Path::new(&self.credentials_file);
        if credentials.is_absolute() || self.credentials_file.contains("..") {
            return Err(ConfigError::sheets(
                "sheets.credentials_file must be relative and cannot contain '..'",
            ));
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::sheets("sheets.timeout_secs must be >= 1"));
        }

        Ok(())
    }
}
