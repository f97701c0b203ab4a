use std::process::ExitCode;

use soul_vectors_sync::application::push_soul_vectors::push_from_config;
use soul_vectors_sync::config::app_config::AppConfig;
use soul_vectors_sync::telemetry;
use tracing::{error, info, instrument};

#[tokio::main]
#[instrument]
async fn main() -> ExitCode {
    let config = AppConfig::load();

    let logging = config
        .as_ref()
        .map(|config| config.logging.clone())
        .unwrap_or_default();
    if let Err(e) = telemetry::setup_tracing(&logging) {
        eprintln!("Failed to set up logging ({e}), falling back to stderr only");
        let _ = tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .try_init();
    }
    telemetry::setup_panic_hook();

    info!("Starting soul vectors sync");

    let result = match config {
        Ok(config) => push_from_config(&config).await,
        Err(report) => Err(report),
    };

    let exit_code = match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(report) => {
            error!("🚨 Error updating soul vectors: {:?}", report);
            ExitCode::FAILURE
        }
    };

    telemetry::shutdown();
    exit_code
}
