pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::analysis_result::AnalysisResult;
pub use models::position::Position;
pub use models::record::{RECORD_COLUMNS, RECORD_HEADER, Record};
pub use models::user_account::UserAccount;

#[cfg(test)]
mod tests;
