pub mod api;
pub mod config;
pub mod panel;
pub mod report;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::report::{GeminiClient, ReportGenerator};

/// Initialize logging, read configuration, and run the HTTP server until
/// shutdown. The generator (and its blocking HTTP client) is built before
/// the runtime starts; request handlers only ever clone the `Arc`.
pub fn run() -> Result<(), String> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let cfg = config::Config::from_env().map_err(|e| e.to_string())?;
    let llm = GeminiClient::new(&cfg.api_base, &cfg.api_key, cfg.timeout_secs)
        .map_err(|e| e.to_string())?;
    let generator = Arc::new(ReportGenerator::new(Box::new(llm), &cfg.model));
    let ctx = api::ApiContext::new(generator);

    tracing::info!(model = %cfg.model, addr = %cfg.bind_addr, "configuration loaded");

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| format!("Failed to start async runtime: {e}"))?;
    runtime.block_on(api::server::serve(ctx, cfg.bind_addr))
}
