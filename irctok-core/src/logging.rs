use crate::error::TokenizeError;
use std::path::Path;
use tracing::Level;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::Targets;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Target for events that belong in the progress log.
pub const PROGRESS_TARGET: &str = "irctok::progress";

/// Opens `path` for appending, creating it if needed.
pub fn open_progress_log(path: &Path) -> Result<RollingFileAppender, TokenizeError> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| crate::conf::DEFAULT_PROGRESS_LOG.to_string());

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)
        .map_err(|source| TokenizeError::ProgressLog {
            path: path.to_path_buf(),
            source,
        })
}

/// Initialize logging for a batch run.
///
/// This function sets up two outputs:
/// - Human-readable diagnostics on stderr, filtered by `RUST_LOG` (defaults to "warn")
/// - The progress log: JSON lines appended to `progress_log`, carrying only
///   events sent to [`PROGRESS_TARGET`]
///
/// Stdout is left alone since it may carry tokenised output.
pub fn init_logging(progress_log: &Path) -> Result<(), TokenizeError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let progress = open_progress_log(progress_log)?;

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter);

    let progress_layer = fmt::layer()
        .json()
        .flatten_event(true)
        .with_ansi(false)
        .with_writer(progress)
        .with_filter(Targets::new().with_target(PROGRESS_TARGET, Level::INFO));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(progress_layer)
        .try_init()?;

    Ok(())
}
