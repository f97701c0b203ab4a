use std::sync::Mutex;

use opentelemetry::KeyValue;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::trace as sdktrace;
use opentelemetry_sdk::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Registry};

use crate::config::logging_config::{LogFileFormat, LoggingConfig};
use crate::prettyprint::prettyprint::PrettyFormatter;

/// Console on stderr, plus the optional log file and OTLP exporter.
pub fn setup_tracing(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let console_layer = tracing_subscriber::fmt::layer()
        .event_format(PrettyFormatter::new(true))
        .with_writer(std::io::stderr);

    let log_file = match &config.file {
        Some(path) => Some(std::fs::File::create(path)?),
        None => None,
    };
    let (pretty_file_layer, json_file_layer) = match (log_file, config.file_format) {
        (Some(file), LogFileFormat::Pretty) => (
            Some(
                tracing_subscriber::fmt::layer()
                    .event_format(PrettyFormatter::new(false))
                    .with_writer(Mutex::new(file))
                    .with_ansi(false),
            ),
            None,
        ),
        (Some(file), LogFileFormat::Json) => (
            None,
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(Mutex::new(file)),
            ),
        ),
        (None, _) => (None, None),
    };

    let otel_layer = match &config.otlp_endpoint {
        Some(endpoint) => {
            let exporter = opentelemetry_otlp::new_exporter()
                .tonic()
                .with_endpoint(endpoint.clone());

            let tracer = opentelemetry_otlp::new_pipeline()
                .tracing()
                .with_exporter(exporter)
                .with_trace_config(sdktrace::config().with_resource(Resource::new(vec![
                    KeyValue::new("service.name", "soul_vectors_sync"),
                ])))
                .install_batch(opentelemetry_sdk::runtime::Tokio)?;

            Some(OpenTelemetryLayer::new(tracer))
        }
        None => None,
    };

    Registry::default()
        .with(
            tracing_subscriber::filter::Targets::new()
                .with_target("soul_vectors_sync", config.level_filter()),
        )
        .with(otel_layer)
        .with(pretty_file_layer)
        .with(json_file_layer)
        .with(console_layer)
        .try_init()?;

    Ok(())
}

pub fn setup_panic_hook() {
    tracing::trace!("Setting panic hook");
    std::panic::set_hook(Box::new(|info| {
        tracing::error!("panic: {info}");
        opentelemetry::global::shutdown_tracer_provider();
    }));
}

pub fn shutdown() {
    opentelemetry::global::shutdown_tracer_provider();
}
