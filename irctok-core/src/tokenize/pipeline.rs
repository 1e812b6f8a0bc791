use crate::conf::TokenizeOptions;
use crate::users::UserRegistry;
use regex::Regex;
use std::collections::VecDeque;
use tracing::trace;

/// A field waiting to be tokenised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Pending {
    /// Raw text; normalised and run through every rule when dequeued.
    Field(String),
    /// Already a final token (e.g. a transliteration marker).
    Token(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RuleResult {
    /// Try the next rule with whatever is left of the field.
    Continue,
    /// The field has been fully turned into tokens.
    Consumed,
}

/// One named step of the message-body rule table.
pub(crate) struct Rule {
    pub name: &'static str,
    pub apply: fn(&mut FieldPass<'_>) -> RuleResult,
}

impl Rule {
    pub const fn new(name: &'static str, apply: fn(&mut FieldPass<'_>) -> RuleResult) -> Self {
        Self { name, apply }
    }
}

/// The state of one field while it moves through the rule table.
pub(crate) struct FieldPass<'a> {
    pub current: String,
    pub options: &'a TokenizeOptions,
    pub users: &'a UserRegistry,
    pub line_no: usize,
    tokens: &'a mut Vec<String>,
    pending: &'a mut VecDeque<Pending>,
}

impl<'a> FieldPass<'a> {
    pub fn new(
        current: String,
        options: &'a TokenizeOptions,
        users: &'a UserRegistry,
        line_no: usize,
        tokens: &'a mut Vec<String>,
        pending: &'a mut VecDeque<Pending>,
    ) -> Self {
        Self {
            current,
            options,
            users,
            line_no,
            tokens,
            pending,
        }
    }

    pub fn emit(&mut self, token: impl Into<String>) {
        self.tokens.push(token.into());
    }

    /// Marks the field as fully handled.
    pub fn consume(&mut self) -> RuleResult {
        self.current.clear();
        RuleResult::Consumed
    }

    /// Splits the current text around every match of `pattern`, keeping the
    /// matches. The first non-empty piece stays current and the rest go back
    /// to the front of the queue, in order, to be tokenised from scratch.
    pub fn split_requeue(&mut self, pattern: &Regex) {
        if self.current.is_empty() {
            return;
        }

        let mut pieces = Vec::new();
        let mut last = 0;
        for m in pattern.find_iter(&self.current) {
            pieces.push(&self.current[last..m.start()]);
            pieces.push(m.as_str());
            last = m.end();
        }
        pieces.push(&self.current[last..]);

        let mut pieces: Vec<String> = pieces
            .into_iter()
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();
        if pieces.len() < 2 {
            return;
        }

        let rest = pieces.split_off(1);
        for piece in rest.into_iter().rev() {
            self.pending.push_front(Pending::Field(piece));
        }
        self.current = pieces.swap_remove(0);
    }

    /// Emits whatever survived every rule.
    pub fn finish(mut self) {
        if !self.current.is_empty() {
            let rest = std::mem::take(&mut self.current);
            self.emit(rest);
        }
    }
}

pub(crate) struct RulePipeline;

impl RulePipeline {
    /// Runs `rules` in order until one consumes the field.
    pub fn run(rules: &[Rule], pass: &mut FieldPass<'_>) -> RuleResult {
        for rule in rules {
            match (rule.apply)(pass) {
                RuleResult::Continue => continue,
                r => {
                    trace!(rule = rule.name, line_no = pass.line_no, "field consumed");
                    return r;
                }
            }
        }
        RuleResult::Continue
    }
}
