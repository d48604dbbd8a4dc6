mod config;
mod error;
mod log_level;
mod logging_config;
mod nlp_config;
mod server_config;
mod sheets_config;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use nlp_config::NlpConfig;
pub use server_config::ServerConfig;
pub use sheets_config::SheetsConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_CREDENTIALS_FILE: &str = "credentials.json";
const DEFAULT_SHEETS_BASE_URL: &str = "https://sheets.googleapis.com";
const DEFAULT_NLP_BASE_URL: &str = "https://api-inference.huggingface.co";
const DEFAULT_EMOTION_MODEL: &str = "Jinuuuu/KoELECTRA_fine_tunning_emotion";
const DEFAULT_SUMMARIZER_MODEL: &str = "gogamza/kobart-summarization";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

#[cfg(test)]
mod tests;
