use irctok_core::conf::RunConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const OUTPUT_SUFFIX: &str = ".tok";

/// Scratch directory holding raw logs for one test.
pub struct LogDir {
    dir: TempDir,
}

impl LogDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `contents` to `name` and returns its path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("failed to write log");
        path
    }

    /// Copies a file from `fixtures/` into the directory.
    pub fn copy_fixture(&self, name: &str) -> PathBuf {
        let src = fixture_path(name);
        let dst = self.dir.path().join(name);
        fs::copy(&src, &dst).unwrap_or_else(|e| panic!("failed to copy {}: {e}", src.display()));
        dst
    }

    /// A run over `inputs` writing `<input>.tok` files beside them, with the
    /// progress log kept inside the directory.
    pub fn run_config(&self, inputs: Vec<PathBuf>) -> RunConfig {
        let mut config = RunConfig::new(inputs);
        config.output_suffix = Some(OUTPUT_SUFFIX.to_string());
        config.progress_log = self.dir.path().join("progress.txt");
        config
    }

    /// Tokenised output written for `input`.
    pub fn output_for(&self, input: &Path) -> String {
        let mut name = input.as_os_str().to_os_string();
        name.push(OUTPUT_SUFFIX);
        fs::read_to_string(PathBuf::from(name)).expect("missing tokenised output")
    }
}

impl Default for LogDir {
    fn default() -> Self {
        Self::new()
    }
}

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}
