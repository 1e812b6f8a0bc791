use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenizeError {
    // Startup
    #[error("failed to read config file {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse HCL in {path}: {source}")]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: hcl::Error,
    },

    #[error("failed to read vocabulary file {path}: {source}")]
    ReadVocab {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to open progress log {path}: {source}")]
    ProgressLog {
        path: PathBuf,
        #[source]
        source: tracing_appender::rolling::InitError,
    },

    #[error("failed to install tracing subscriber: {0}")]
    LoggingInit(#[from] tracing_subscriber::util::TryInitError),

    // Per-file
    #[error("failed to open input log {path}: {source}")]
    OpenInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read input log {path}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create output file {path}: {source}")]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write tokens for {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TokenizeError {
    pub fn read_config(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadConfig {
            path: path.into(),
            source,
        }
    }

    pub fn parse_config(path: impl Into<PathBuf>, source: hcl::Error) -> Self {
        Self::ParseConfig {
            path: path.into(),
            source,
        }
    }

    pub fn read_vocab(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadVocab {
            path: path.into(),
            source,
        }
    }

    pub fn open_input(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OpenInput {
            path: path.into(),
            source,
        }
    }

    pub fn read_input(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadInput {
            path: path.into(),
            source,
        }
    }

    pub fn create_output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CreateOutput {
            path: path.into(),
            source,
        }
    }

    pub fn write_output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteOutput {
            path: path.into(),
            source,
        }
    }

    /// True for errors that only affect the file being processed.
    pub fn is_per_file(&self) -> bool {
        matches!(
            self,
            Self::OpenInput { .. }
                | Self::ReadInput { .. }
                | Self::CreateOutput { .. }
                | Self::WriteOutput { .. }
        )
    }
}
