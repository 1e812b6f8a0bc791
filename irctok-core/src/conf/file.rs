use crate::conf::TokenizeOptions;
use crate::error::TokenizeError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Optional HCL settings file, e.g.
///
/// ```hcl
/// use_vocab     = "vocab.txt"
/// output_suffix = ".tok"
///
/// options {
///   cut_timestamp     = true
///   users_from_future = true
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub options: TokenizeOptions,
    pub use_vocab: Option<PathBuf>,
    pub output_suffix: Option<String>,
    pub progress_log: Option<PathBuf>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self, TokenizeError> {
        let s = fs::read_to_string(path).map_err(|e| TokenizeError::read_config(path, e))?;
        hcl::from_str(&s).map_err(|e| TokenizeError::parse_config(path, e))
    }
}
