pub mod analysis_result;
pub mod position;
pub mod record;
pub mod user_account;
