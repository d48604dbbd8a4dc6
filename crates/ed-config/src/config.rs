use crate::{
    ConfigError, ConfigErrorResult, LoggingConfig, NlpConfig, ServerConfig, SheetsConfig,
};

use std::path::PathBuf;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub sheets: SheetsConfig,
    pub nlp: NlpConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for ED_CONFIG_DIR env var, else use ./.ed/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply ED_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: ED_CONFIG_DIR env var > ./.ed/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("ED_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".ed"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.sheets.validate()?;
        self.nlp.validate()?;

        Ok(())
    }

    /// Absolute path to the service account key file.
    pub fn credentials_path(&self) -> Result<PathBuf, ConfigError> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.sheets.credentials_file))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
        info!(
            "  sheets: workbook {}…, credentials {}, timeout {}s",
            self.sheets.spreadsheet_id.chars().take(8).collect::<String>(),
            self.sheets.credentials_file,
            self.sheets.timeout_secs
        );
        info!(
            "  nlp: {} (emotion: {}, summarizer: {}, token: {})",
            if self.nlp.enabled { "enabled" } else { "disabled" },
            self.nlp.emotion_model,
            self.nlp.summarizer_model,
            if self.nlp.api_token.is_some() {
                "set"
            } else {
                "none"
            }
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("ED_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("ED_SERVER_PORT", &mut self.server.port);

        // Logging
        Self::apply_env_parse("ED_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("ED_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("ED_LOG_FILE", &mut self.logging.file);

        // Sheets
        Self::apply_env_string(
            "ED_SHEETS_SPREADSHEET_ID",
            &mut self.sheets.spreadsheet_id,
        );
        Self::apply_env_string(
            "ED_SHEETS_CREDENTIALS_FILE",
            &mut self.sheets.credentials_file,
        );
        Self::apply_env_string("ED_SHEETS_BASE_URL", &mut self.sheets.base_url);
        Self::apply_env_parse("ED_SHEETS_TIMEOUT_SECS", &mut self.sheets.timeout_secs);

        // Nlp
        Self::apply_env_bool("ED_NLP_ENABLED", &mut self.nlp.enabled);
        Self::apply_env_string("ED_NLP_BASE_URL", &mut self.nlp.base_url);
        Self::apply_env_string("ED_NLP_EMOTION_MODEL", &mut self.nlp.emotion_model);
        Self::apply_env_string("ED_NLP_SUMMARIZER_MODEL", &mut self.nlp.summarizer_model);
        Self::apply_env_option_string("ED_NLP_API_TOKEN", &mut self.nlp.api_token);
        Self::apply_env_parse("ED_NLP_TIMEOUT_SECS", &mut self.nlp.timeout_secs);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
