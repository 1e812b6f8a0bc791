use crate::conf::RunConfig;
use crate::error::TokenizeError;
use crate::logging::PROGRESS_TARGET;
use crate::tokenize::{LogTokenizer, StreamError};
use crate::users::{UserRegistry, UserScan};
use crate::vocab::Vocabulary;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{error, info};

/// Outcome of a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Files tokenised to completion.
    pub processed: usize,
    /// Files abandoned after an error.
    pub failed: usize,
    /// Lines written across all completed files.
    pub lines: usize,
}

/// Tokenises every input in `config`.
///
/// Only a missing or unreadable vocabulary aborts the run. A file that fails
/// is logged and skipped, and the run carries on with the next one.
pub fn run(config: &RunConfig) -> Result<RunSummary, TokenizeError> {
    let vocab = match &config.vocab {
        Some(path) => Vocabulary::load(path)?,
        None => Vocabulary::default(),
    };

    info!(
        target: PROGRESS_TARGET,
        files = config.inputs.len(),
        vocab = vocab.len(),
        options = ?config.options,
        "running"
    );

    let tokenizer = LogTokenizer::new(&config.options, &vocab);
    let mut summary = RunSummary::default();

    for input in &config.inputs {
        info!(target: PROGRESS_TARGET, file = %input.display(), "processing");

        match process_file(&tokenizer, config, input) {
            Ok(lines) => {
                summary.processed += 1;
                summary.lines += lines;
            }
            Err(err) if !err.is_per_file() => return Err(err),
            Err(err) => {
                summary.failed += 1;
                error!(
                    target: PROGRESS_TARGET,
                    file = %input.display(),
                    error = %err,
                    details = ?err,
                    "failed"
                );
            }
        }
    }

    info!(
        target: PROGRESS_TARGET,
        processed = summary.processed,
        failed = summary.failed,
        lines = summary.lines,
        "finished"
    );
    Ok(summary)
}

/// Tokenises one file to its own output. The output writer is dropped, and
/// so closed, before this returns, whatever the outcome.
pub fn process_file(
    tokenizer: &LogTokenizer<'_>,
    config: &RunConfig,
    input: &Path,
) -> Result<usize, TokenizeError> {
    let open = || {
        File::open(input)
            .map(BufReader::new)
            .map_err(|e| TokenizeError::open_input(input, e))
    };

    let users = match tokenizer.scan() {
        UserScan::Prepass => {
            UserRegistry::scan(open()?).map_err(|e| TokenizeError::read_input(input, e))?
        }
        UserScan::Streaming => UserRegistry::new(),
    };
    let reader = open()?;

    let lines = match config.output_path(input) {
        Some(path) => {
            let file = File::create(&path).map_err(|e| TokenizeError::create_output(&path, e))?;
            let mut out = BufWriter::new(file);
            tokenize_into(tokenizer, reader, users, &mut out, input, &path)?
        }
        None => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            tokenize_into(tokenizer, reader, users, &mut out, input, Path::new("<stdout>"))?
        }
    };

    Ok(lines)
}

fn tokenize_into<W: Write>(
    tokenizer: &LogTokenizer<'_>,
    reader: BufReader<File>,
    users: UserRegistry,
    out: &mut W,
    input: &Path,
    output: &Path,
) -> Result<usize, TokenizeError> {
    tokenizer.run(reader, users, out).map_err(|err| match err {
        StreamError::Read(e) => TokenizeError::read_input(input, e),
        StreamError::Write(e) => TokenizeError::write_output(output, e),
    })
}
