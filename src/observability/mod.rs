//! Optional OpenTelemetry tracing with file export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK provider → FileSpanExporter → bookshelf-otlp.json
//! ```
//!
//! Each exported batch becomes one OTLP/JSON line. The file lives under
//! `~/.local/share/zellij/bookshelf/` on the host and rotates at 10 MB,
//! keeping three numbered backups.
//!
//! Tracing is off unless the plugin configuration sets `trace_level`, which
//! takes any `EnvFilter` directive (`debug`, `bookshelf=trace`, ...).
//!
//! - [`init`]: subscriber setup
//! - [`tracer`]: provider and file exporter
//! - [`span_formatter`]: OTLP JSON encoding
//! - [`file_writer`]: rotating line writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::init_tracing;

/// Value of the `service.name` resource attribute and the tracer scope name.
pub const SERVICE_NAME: &str = "Bookshelf";

/// File name of the live trace file inside the data directory.
pub const TRACE_FILE_NAME: &str = "bookshelf-otlp.json";
