//! SimRate Overlay - Main Entry Point

use simrate_overlay::app::application::run_app;
use simrate_overlay::constants::LOG_DIR_NAME;
use simrate_overlay::logging::init_logging;
use simrate_overlay::utils::config_store::app_data_dir;

fn main() {
    let log_dir = app_data_dir().ok().map(|dir| dir.join(LOG_DIR_NAME));
    let _log_guard = init_logging(log_dir.as_deref());

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting SimRate Overlay...");

    run_app();
}
