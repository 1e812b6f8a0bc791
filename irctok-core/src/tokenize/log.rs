use crate::conf::TokenizeOptions;
use crate::tokenize::LineTokenizer;
use crate::users::{UserRegistry, UserScan};
use crate::vocab::Vocabulary;
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::debug;

/// Output is flushed every this many lines.
pub const FLUSH_EVERY: usize = 1000;

#[derive(Debug, Error)]
pub enum StreamError {
    #[error("read failed: {0}")]
    Read(#[source] io::Error),

    #[error("write failed: {0}")]
    Write(#[source] io::Error),
}

/// Tokenises a whole log, one output line per input line.
#[derive(Debug, Clone, Copy)]
pub struct LogTokenizer<'a> {
    line: LineTokenizer<'a>,
    scan: UserScan,
}

impl<'a> LogTokenizer<'a> {
    pub fn new(options: &'a TokenizeOptions, vocab: &'a Vocabulary) -> Self {
        Self {
            line: LineTokenizer::new(options, vocab),
            scan: options.user_scan(),
        }
    }

    pub fn scan(&self) -> UserScan {
        self.scan
    }

    /// Tokenises every line of `reader` into `out` and returns the number of
    /// lines written.
    ///
    /// `users` should already hold the whole log under [`UserScan::Prepass`];
    /// under [`UserScan::Streaming`] each line is observed just before it is
    /// tokenised.
    pub fn run<R: BufRead, W: Write>(
        &self,
        mut reader: R,
        mut users: UserRegistry,
        out: &mut W,
    ) -> Result<usize, StreamError> {
        let mut buf = Vec::new();
        let mut line_no = 0;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf).map_err(StreamError::Read)? == 0 {
                break;
            }
            line_no += 1;

            let raw = String::from_utf8_lossy(&buf);
            let line = raw.trim();
            if self.scan == UserScan::Streaming {
                users.observe(line, line_no);
            }

            let tokens = self.line.tokenize(line, &users, line_no);
            writeln!(out, "{}", tokens.join(" ")).map_err(StreamError::Write)?;

            if line_no % FLUSH_EVERY == 0 {
                out.flush().map_err(StreamError::Write)?;
            }
        }

        out.flush().map_err(StreamError::Write)?;
        debug!(lines = line_no, users = users.len(), "log tokenised");
        Ok(line_no)
    }
}
