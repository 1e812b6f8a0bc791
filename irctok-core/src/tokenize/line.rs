use crate::conf::TokenizeOptions;
use crate::tokenize::header::{Header, take_header};
use crate::tokenize::normalize::{UNCONVERTABLE, convert_word};
use crate::tokenize::pipeline::{FieldPass, Pending, RulePipeline, RuleResult};
use crate::tokenize::rules::RULES;
use crate::tokenize::unk::make_unk;
use crate::users::UserRegistry;
use crate::vocab::Vocabulary;
use std::collections::VecDeque;

pub const LINE_START: &str = "<s>";
pub const LINE_END: &str = "</s>";

/// Turns one raw log line into output tokens.
#[derive(Debug, Clone, Copy)]
pub struct LineTokenizer<'a> {
    options: &'a TokenizeOptions,
    vocab: &'a Vocabulary,
}

impl<'a> LineTokenizer<'a> {
    pub fn new(options: &'a TokenizeOptions, vocab: &'a Vocabulary) -> Self {
        Self { options, vocab }
    }

    /// Tokenises `line`, resolving mentions against `users` as of `line_no`.
    pub fn tokenize(&self, line: &str, users: &UserRegistry, line_no: usize) -> Vec<String> {
        let mut fields: VecDeque<String> = line.split_whitespace().map(str::to_string).collect();

        let mut tokens = match take_header(&mut fields, self.options) {
            Header::Passthrough => return line.split_whitespace().map(str::to_string).collect(),
            Header::Tokens(tokens) => tokens,
        };
        let header_len = tokens.len();

        let mut pending: VecDeque<Pending> = fields.into_iter().map(Pending::Field).collect();
        while let Some(next) = pending.pop_front() {
            let field = match next {
                Pending::Token(token) => {
                    tokens.push(token);
                    continue;
                }
                Pending::Field(field) => field,
            };

            let Some(current) = self.normalize(&field, &mut tokens, &mut pending) else {
                continue;
            };

            let mut pass =
                FieldPass::new(current, self.options, users, line_no, &mut tokens, &mut pending);
            if RulePipeline::run(RULES, &mut pass) == RuleResult::Continue {
                pass.finish();
            }
        }

        if !self.vocab.is_empty() {
            self.replace_unknown(&mut tokens[header_len..], users);
        }

        if self.options.add_line_boundaries {
            tokens.insert(0, LINE_START.to_string());
            tokens.push(LINE_END.to_string());
        }

        tokens
    }

    /// Lower-cases (or transliterates) a field. The transliteration marker is
    /// kept whole: a leading marker is emitted now, a trailing one is queued
    /// behind the word, and a bare marker is emitted with nothing to tokenise.
    fn normalize(
        &self,
        field: &str,
        tokens: &mut Vec<String>,
        pending: &mut VecDeque<Pending>,
    ) -> Option<String> {
        if self.options.is_ascii {
            return Some(field.to_lowercase());
        }

        let converted = convert_word(field);
        if converted == UNCONVERTABLE {
            tokens.push(converted);
            return None;
        }
        // Normalised text has no whitespace, so a space only ever separates
        // the marker from the word.
        if let Some((UNCONVERTABLE, word)) = converted.split_once(' ') {
            tokens.push(UNCONVERTABLE.to_string());
            return Some(word.to_string());
        }
        if let Some((word, UNCONVERTABLE)) = converted.split_once(' ') {
            pending.push_front(Pending::Token(UNCONVERTABLE.to_string()));
            return Some(word.to_string());
        }
        Some(converted)
    }

    fn replace_unknown(&self, tokens: &mut [String], users: &UserRegistry) {
        for token in tokens.iter_mut() {
            if users.contains(&token.to_lowercase()) || self.vocab.contains(token) {
                continue;
            }
            *token = make_unk(token);
        }
    }
}
