use crate::conf::TokenizeOptions;
use std::path::PathBuf;

pub const DEFAULT_PROGRESS_LOG: &str = "progress.txt";

/// Everything a batch run needs, after merging the command line with any
/// config file.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub options: TokenizeOptions,

    /// Vocabulary file enabling unk substitution.
    pub vocab: Option<PathBuf>,

    /// When set, output for `x.log` goes to `x.log<suffix>` instead of stdout.
    pub output_suffix: Option<String>,

    pub progress_log: PathBuf,

    pub inputs: Vec<PathBuf>,
}

impl RunConfig {
    pub fn new(inputs: Vec<PathBuf>) -> Self {
        Self {
            options: TokenizeOptions::default(),
            vocab: None,
            output_suffix: None,
            progress_log: PathBuf::from(DEFAULT_PROGRESS_LOG),
            inputs,
        }
    }

    /// Output path for `input`, or `None` when writing to stdout.
    pub fn output_path(&self, input: &std::path::Path) -> Option<PathBuf> {
        self.output_suffix.as_ref().map(|suffix| {
            let mut name = input.as_os_str().to_os_string();
            name.push(suffix);
            PathBuf::from(name)
        })
    }
}
