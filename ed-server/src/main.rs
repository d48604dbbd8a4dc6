pub mod api;
pub mod app_state;
pub mod error;
pub mod logger;
pub mod pages;
pub mod routes;

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

use ed_auth::{AccessTokenProvider, ServiceAccountKey};
use ed_nlp::{HfInferenceClient, ModelRegistry};
use ed_sheets::{HttpSheetsClient, SheetsApi};

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = ed_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = ed_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting ed-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Spreadsheet store: service account key -> token provider -> client
    let credentials_path = config.credentials_path()?;
    info!(
        "Loading service account key: {}",
        credentials_path.display()
    );
    let key = ServiceAccountKey::from_file(&credentials_path)?;
    let tokens = Arc::new(AccessTokenProvider::new(key)?);

    let sheets: Arc<dyn SheetsApi> = Arc::new(HttpSheetsClient::new(
        &config.sheets.base_url,
        &config.sheets.spreadsheet_id,
        tokens,
        Duration::from_secs(config.sheets.timeout_secs),
    )?);
    info!("Spreadsheet store ready");

    // Inference models: loaded once, shared by all requests. A setup failure
    // leaves the server running with analysis disabled.
    let models = Arc::new(load_models(&config.nlp));
    if !models.ready() {
        warn!("Inference models not loaded; /analyze_diary requests will be refused");
    }

    // Build application state and router
    let app_state = AppState { sheets, models };
    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown on SIGINT
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Shutdown complete");
    Ok(())
}

/// Build the inference clients from config.
///
/// Mirrors the store's load-once lifecycle, but degrades instead of failing:
/// the diary still opens and lists records without its models.
fn load_models(config: &ed_config::NlpConfig) -> ModelRegistry {
    if !config.enabled {
        info!("Inference disabled by config");
        return ModelRegistry::disabled();
    }

    let timeout = Duration::from_secs(config.timeout_secs);
    let emotion = HfInferenceClient::new(
        &config.base_url,
        &config.emotion_model,
        config.api_token.clone(),
        timeout,
    );
    let summarizer = HfInferenceClient::new(
        &config.base_url,
        &config.summarizer_model,
        config.api_token.clone(),
        timeout,
    );

    match (emotion, summarizer) {
        (Ok(emotion), Ok(summarizer)) => {
            info!(
                "Inference clients ready: emotion={}, summarizer={}",
                emotion.model(),
                summarizer.model()
            );
            ModelRegistry::new(Some(Arc::new(emotion)), Some(Arc::new(summarizer)))
        }
        (Err(e), _) | (_, Err(e)) => {
            warn!("Failed to set up inference clients: {}", e);
            ModelRegistry::disabled()
        }
    }
}
