pub mod api;
pub mod error;
pub mod http_client;
pub mod record_store;
pub mod user_directory;

pub use api::SheetsApi;
pub use error::{Result, SheetsError};
pub use http_client::HttpSheetsClient;
pub use record_store::RecordStore;
pub use user_directory::{LoginOutcome, USERS_SHEET, UserDirectory};

#[cfg(test)]
mod tests;
