//! Subscriber setup connecting `tracing` macros to the file exporter.

use super::file_writer::FileWriter;
use super::{tracer, SERVICE_NAME, TRACE_FILE_NAME};
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber when `config.trace_level` is set.
///
/// Spans at or above the configured level are exported to
/// `<data dir>/bookshelf-otlp.json`. Does nothing when no level is
/// configured, when the data directory cannot be created, or when a global
/// subscriber is already installed.
///
/// ```rust
/// use bookshelf::observability::init_tracing;
/// use bookshelf::Config;
///
/// // No trace level: tracing stays off and nothing touches the filesystem.
/// init_tracing(&Config::default());
/// ```
pub fn init_tracing(config: &Config) {
    let Some(level) = config.trace_level.as_deref() else {
        return;
    };

    let data_dir = crate::infrastructure::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let writer = FileWriter::new(data_dir.join(TRACE_FILE_NAME));
    let provider = tracer::create_tracer_provider(writer, resource, SERVICE_NAME);

    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}
