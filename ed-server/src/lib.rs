pub mod api;
pub mod app_state;
pub mod error;
pub mod logger;
pub mod pages;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    analyze::{
        analyze::analyze_diary, analyze_request::AnalyzeRequest,
        analyze_response::AnalyzeResponse,
    },
    auth::{
        auth::{login, register},
        login_request::LoginRequest,
        register_request::RegisterRequest,
        status_response::StatusResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
    records::{
        record_dto::RecordDto, record_list_response::RecordListResponse, records::get_all_records,
        records_query::RecordsQuery,
    },
};

pub use crate::app_state::AppState;
pub use crate::routes::build_router;
