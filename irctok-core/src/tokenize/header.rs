use crate::conf::TokenizeOptions;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::VecDeque;

static TIMESTAMP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^.*\[[0-9]{2}:[0-9]{2}\]$").expect("timestamp pattern must compile"));

/// True if a field ends in a bracketed `[HH:MM]` timestamp.
pub fn is_timestamp(field: &str) -> bool {
    TIMESTAMP.is_match(field)
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Header {
    /// Headerless line in `edit_messages_only` mode: skip the rule pipeline.
    Passthrough,
    /// Header tokens to emit (possibly none); the message body remains queued.
    Tokens(Vec<String>),
}

/// Pops the timestamp and speaker off the front of `fields`.
///
/// A speaker field that does not close with `>` absorbs following fields
/// until one does, so `<some nick>` and status text stay in one token.
pub(crate) fn take_header(fields: &mut VecDeque<String>, options: &TokenizeOptions) -> Header {
    let Some(first) = fields.front() else {
        return Header::Tokens(Vec::new());
    };

    if !is_timestamp(first) {
        if options.edit_messages_only {
            return Header::Passthrough;
        }
        let mut tokens = Vec::new();
        if let Some(timestamp) = fields.pop_front() {
            if !options.cut_timestamp {
                tokens.push(timestamp);
            }
        }
        return Header::Tokens(tokens);
    }

    let timestamp = fields.pop_front();
    let speaker = fields.pop_front().map(|mut speaker| {
        while !speaker.ends_with('>') {
            let Some(next) = fields.pop_front() else {
                break;
            };
            speaker.push(' ');
            speaker.push_str(&next);
        }
        speaker
    });

    let mut tokens = Vec::new();
    if !options.cut_timestamp {
        tokens.extend(timestamp);
    }
    if !options.cut_username {
        tokens.extend(speaker);
    }
    Header::Tokens(tokens)
}
