use std::net::SocketAddr;

use thiserror::Error;

/// Application-level constants
pub const APP_NAME: &str = "Labsight";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default model the insight prompt is sent to.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default API root for the generative-language endpoint.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Default listen address for the HTTP server.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Default upstream request timeout. Full reports take the model a while.
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Default `RUST_LOG`-style filter when none is set in the environment.
pub fn default_log_filter() -> String {
    "labsight=info,tower_http=info".to_string()
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY not found, set it in the environment")]
    MissingApiKey,

    #[error("invalid bind address {0:?}")]
    InvalidBindAddr(String),

    #[error("invalid timeout {0:?}, expected seconds as an integer")]
    InvalidTimeout(String),
}

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
    pub bind_addr: SocketAddr,
    pub timeout_secs: u64,
}

impl Config {
    /// Read configuration from the environment. `GEMINI_API_KEY` is
    /// required; everything else falls back to the defaults above.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let model =
            std::env::var("LABSIGHT_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let api_base =
            std::env::var("LABSIGHT_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());

        let bind_raw =
            std::env::var("LABSIGHT_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr(bind_raw))?;

        let timeout_secs = match std::env::var("LABSIGHT_TIMEOUT_SECS") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidTimeout(raw))?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_key,
            model,
            api_base,
            bind_addr,
            timeout_secs,
        })
    }
}
