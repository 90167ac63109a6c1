//! TMS - Teacher Management System
//!
//! Desktop dashboard for school administrators.
//!
//! This is the main entry point for the Dioxus Desktop application.

use tms_ui::AppConfig;
use tracing_subscriber::EnvFilter;

fn main() {
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if let Some(e) = load_error {
        tracing::warn!("Using default configuration: {:#}", e);
    }

    tms_ui::config::install(config);
    tms_ui::launch();
}
