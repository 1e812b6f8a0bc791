use crate::conf::{DEFAULT_PROGRESS_LOG, FileConfig, RunConfig, TokenizeOptions};
use crate::error::TokenizeError;
use clap::Args;
use std::path::PathBuf;

/// Command-line surface of the tokeniser. Flag spellings follow the
/// historical underscore style; kebab-case aliases are accepted too.
#[derive(Args, Debug, Clone, Default)]
pub struct TokenizeArgs {
    /// Remove the timestamp.
    #[arg(long = "cut_timestamp", alias = "cut-timestamp")]
    pub cut_timestamp: bool,

    /// Remove the username of the author.
    #[arg(long = "cut_username", alias = "cut-username")]
    pub cut_username: bool,

    /// Replace usernames in messages with a placeholder.
    #[arg(long = "replace_usernames", alias = "replace-usernames")]
    pub replace_usernames: bool,

    /// Add tokens to indicate the start and end of a line.
    #[arg(long = "add_line_boundaries", alias = "add-line-boundaries")]
    pub add_line_boundaries: bool,

    /// Keep non-message content as is.
    #[arg(long = "edit_messages_only", alias = "edit-messages-only")]
    pub edit_messages_only: bool,

    /// Use a vocab file to limit what is generated.
    #[arg(long = "use_vocab", alias = "use-vocab", value_name = "PATH")]
    pub use_vocab: Option<PathBuf>,

    /// Save to files with the suffix added.
    #[arg(long = "output_suffix", alias = "output-suffix", value_name = "SUFFIX")]
    pub output_suffix: Option<String>,

    /// No need to convert to ascii.
    #[arg(long = "is_ascii", alias = "is-ascii")]
    pub is_ascii: bool,

    /// Make the user name list with future users too.
    #[arg(long = "users_from_future", alias = "users-from-future")]
    pub users_from_future: bool,

    /// HCL file with default settings.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Append-only progress log.
    #[arg(long = "progress_log", alias = "progress-log", value_name = "PATH")]
    pub progress_log: Option<PathBuf>,

    /// Files containing the raw logs.
    #[arg(required = true, value_name = "RAW_DATA")]
    pub raw_data: Vec<PathBuf>,
}

impl TokenizeArgs {
    fn options(&self) -> TokenizeOptions {
        TokenizeOptions {
            cut_timestamp: self.cut_timestamp,
            cut_username: self.cut_username,
            replace_usernames: self.replace_usernames,
            add_line_boundaries: self.add_line_boundaries,
            edit_messages_only: self.edit_messages_only,
            is_ascii: self.is_ascii,
            users_from_future: self.users_from_future,
        }
    }

    /// Merges the command line over the config file, if one was given.
    pub fn resolve(self) -> Result<RunConfig, TokenizeError> {
        let file = match &self.config {
            Some(path) => FileConfig::from_file(path)?,
            None => FileConfig::default(),
        };

        Ok(RunConfig {
            options: file.options.union(self.options()),
            vocab: self.use_vocab.or(file.use_vocab),
            output_suffix: self.output_suffix.or(file.output_suffix),
            progress_log: self
                .progress_log
                .or(file.progress_log)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PROGRESS_LOG)),
            inputs: self.raw_data,
        })
    }
}
