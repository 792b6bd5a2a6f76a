//! Tracing initialization for the binary: a console layer plus an
//! optional non-blocking log file layer.

use std::path::Path;

use miette::{Context, IntoDiagnostic, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};


/// Initializes the global tracing subscriber.
///
/// When `log_file_output_directory` is provided, log records are also
/// written to `{directory}/{log_file_name}` through a non-blocking
/// writer. The returned guard must be kept alive until the end of the
/// program, otherwise buffered log records may be lost.
pub fn initialize_tracing(
    console_output_level_filter: EnvFilter,
    log_file_output_level_filter: EnvFilter,
    log_file_output_directory: Option<&Path>,
    log_file_name: &str,
) -> Result<Option<WorkerGuard>> {
    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(console_output_level_filter);

    match log_file_output_directory {
        Some(directory) => {
            let file_appender = tracing_appender::rolling::never(directory, log_file_name);
            let (non_blocking_writer, worker_guard) = tracing_appender::non_blocking(file_appender);

            let file_layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking_writer)
                .with_filter(log_file_output_level_filter);

            tracing_subscriber::registry()
                .with(console_layer)
                .with(file_layer)
                .try_init()
                .into_diagnostic()
                .wrap_err("Failed to initialize the tracing subscriber.")?;

            Ok(Some(worker_guard))
        }
        None => {
            tracing_subscriber::registry()
                .with(console_layer)
                .try_init()
                .into_diagnostic()
                .wrap_err("Failed to initialize the tracing subscriber.")?;

            Ok(None)
        }
    }
}
