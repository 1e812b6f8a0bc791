use crate::conf::TokenizeOptions;
use crate::tokenize::LineTokenizer;
use crate::users::UserRegistry;
use crate::vocab::Vocabulary;

/// Tokenises one line with the given options and registry at `line_no`.
pub fn tokenize_at(
    options: TokenizeOptions,
    vocab: &Vocabulary,
    users: &UserRegistry,
    line: &str,
    line_no: usize,
) -> Vec<String> {
    LineTokenizer::new(&options, vocab).tokenize(line, users, line_no)
}

/// Tokenises one line with default options, no vocabulary and no users.
pub fn tokenize(line: &str) -> Vec<String> {
    tokenize_at(
        TokenizeOptions::default(),
        &Vocabulary::default(),
        &UserRegistry::new(),
        line,
        1,
    )
}

/// Tokens produced for a message body, ignoring the header.
pub fn body(message: &str) -> Vec<String> {
    let options = TokenizeOptions {
        cut_timestamp: true,
        cut_username: true,
        ..TokenizeOptions::default()
    };
    tokenize_at(
        options,
        &Vocabulary::default(),
        &UserRegistry::new(),
        &format!("[00:00] <someone> {message}"),
        1,
    )
}
