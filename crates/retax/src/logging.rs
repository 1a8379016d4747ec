//! File logging setup
//!
//! The terminal is owned by ratatui while the app runs, so nothing may write
//! to stdout/stderr. All diagnostics go to `{data_dir}/retax.log` through a
//! non-blocking background writer.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging to `{data_dir}/retax.log`.
///
/// Returns a guard that must stay alive for the duration of the program;
/// dropping it stops the writer and loses buffered lines. The log level comes
/// from the `level` parameter, or `RUST_LOG` when set.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<WorkerGuard> {
    std::fs::create_dir_all(data_dir)?;

    let appender = tracing_appender::rolling::never(data_dir, "retax.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let default_filter = format!("retax={level},retax_core=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    tracing::info!("retax logging initialized (dir={})", data_dir.display());
    Ok(guard)
}
