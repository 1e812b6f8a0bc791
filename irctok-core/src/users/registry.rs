use crate::users::reserved::{is_channel_keyword, is_reserved};
use ahash::AHashMap;
use std::io::{self, BufRead};
use tracing::trace;

/// How far outside a user's active range a mention is still resolved.
pub const MENTION_WINDOW: usize = 1000;

const RENAME_CLAUSE: &str = "is now known as";

/// Inclusive range of (1-based) line numbers a user was seen on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeenRange {
    pub first: usize,
    pub last: usize,
}

impl SeenRange {
    fn at(line_no: usize) -> Self {
        Self {
            first: line_no,
            last: line_no,
        }
    }

    fn widen(&mut self, line_no: usize) {
        self.first = self.first.min(line_no);
        self.last = self.last.max(line_no);
    }

    /// True when `line_no` lies within [`MENTION_WINDOW`] lines of the range.
    pub fn is_near(&self, line_no: usize) -> bool {
        self.first.saturating_sub(MENTION_WINDOW) <= line_no
            && line_no <= self.last.saturating_add(MENTION_WINDOW)
    }
}

/// When the registry is populated relative to tokenisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserScan {
    /// Observe each line immediately before tokenising it.
    #[default]
    Streaming,
    /// Observe the whole log before tokenising anything, so later speakers
    /// are already known.
    Prepass,
}

/// Usernames seen in one log, keyed by their lower-cased form.
#[derive(Debug, Clone, Default)]
pub struct UserRegistry {
    users: AHashMap<String, SeenRange>,
}

impl UserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a complete registry from every line of `reader`.
    pub fn scan<R: BufRead>(mut reader: R) -> io::Result<Self> {
        let mut registry = Self::new();
        let mut buf = Vec::new();
        let mut line_no = 0;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_no += 1;
            let line = String::from_utf8_lossy(&buf);
            registry.observe(line.trim(), line_no);
        }

        Ok(registry)
    }

    /// Records `name` as active on `line_no`.
    ///
    /// Empty names, all-digit names and reserved words are ignored.
    pub fn register(&mut self, name: &str, line_no: usize) {
        if name.is_empty() || name.chars().all(|c| c.is_ascii_digit()) || is_reserved(name) {
            return;
        }

        match self.users.get_mut(name) {
            Some(range) => range.widen(line_no),
            None => {
                trace!(user = name, line_no, "registered user");
                self.users.insert(name.to_string(), SeenRange::at(line_no));
            }
        }
    }

    /// Extracts the speaker (or new nick) from a raw log line and registers
    /// it, along with its punctuation-trimmed core.
    pub fn observe(&mut self, line: &str, line_no: usize) {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 2 {
            return;
        }

        let mut candidate = fields[1];
        if is_channel_keyword(candidate) {
            return;
        }

        if fields[0].ends_with("===") {
            // Server notice, e.g. "=== alice is now known as bob"
            let parts: Vec<&str> = line.split(RENAME_CLAUSE).collect();
            let last = fields[fields.len() - 1];
            if parts.len() == 2 && parts[1].trim() == last {
                candidate = last;
            }
        } else if fields[0].ends_with(']') {
            candidate = candidate.strip_prefix('<').unwrap_or(candidate);
            candidate = candidate.strip_suffix('>').unwrap_or(candidate);
        }

        let name = candidate.to_lowercase();
        self.register(&name, line_no);

        // A nick like "|blah|" is usually addressed as "blah".
        let core = name.trim_matches(|c: char| c.is_ascii_punctuation());
        self.register(core, line_no);
    }

    pub fn get(&self, name: &str) -> Option<SeenRange> {
        self.users.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.users.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
