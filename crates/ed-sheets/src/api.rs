//! Narrow seam over the spreadsheet values API.
//!
//! Three operations cover everything this backend does with the store. The
//! HTTP implementation lives in [`crate::http_client`]; tests swap in an
//! in-memory one.

use crate::Result as SheetsResult;

use async_trait::async_trait;

#[async_trait]
pub trait SheetsApi: Send + Sync {
    /// Read all rows in an A1-notation range, e.g. `users!A:C`.
    ///
    /// Ranges addressing a sheet that does not exist fail with
    /// [`crate::SheetsError::MissingSheet`].
    async fn get_values(&self, range: &str) -> SheetsResult<Vec<Vec<String>>>;

    /// Append rows after the last data row of the range's sheet.
    async fn append_values(&self, range: &str, rows: Vec<Vec<String>>) -> SheetsResult<()>;

    /// Create a new, empty sheet with the given title.
    async fn add_sheet(&self, title: &str) -> SheetsResult<()>;
}
