//! Message-body rules, in priority order.
//!
//! A rule either consumes the field (emitting its tokens) or returns
//! [`RuleResult::Continue`], possibly after rewriting the field or splitting
//! pieces off onto the work queue.

use crate::tokenize::pipeline::{FieldPass, Rule, RuleResult};
use crate::users::{UserRegistry, is_common_short_name};
use once_cell::sync::Lazy;
use regex::Regex;

/// Replaces a resolved mention when `replace_usernames` is on.
pub const USER_PLACEHOLDER: &str = "<user>";

fn pattern(re: &str) -> Regex {
    Regex::new(re).expect("rule pattern must compile")
}

static URL: Lazy<Regex> = Lazy::new(|| pattern(r"^(http|sftp|telnet).*/"));
static TRAILING_PUNCT: Lazy<Regex> = Lazy::new(|| pattern(r#"[":;?!.,)}\]]+$"#));
static LEADING_PUNCT: Lazy<Regex> = Lazy::new(|| pattern(r#"^["!({\[]+"#));
static CONTRACTIONS: Lazy<[Regex; 5]> = Lazy::new(|| {
    [
        pattern(r#"['"]s$"#),
        pattern(r#"n['"]t$"#),
        pattern(r#"['"]ll$"#),
        pattern(r#"['"]m$"#),
        pattern(r#"['"]ve$"#),
    ]
});
static ELLIPSIS: Lazy<Regex> = Lazy::new(|| pattern(r"\.\.+"));
static ARROW: Lazy<Regex> = Lazy::new(|| pattern(r"-?>"));
static SUBSTITUTION: Lazy<Regex> = Lazy::new(|| pattern(r"^s/.*/"));

pub(crate) const RULES: &[Rule] = &[
    Rule::new("mention", mention),
    Rule::new("address", address),
    Rule::new("permissions", permissions),
    Rule::new("url", url),
    Rule::new("www", www),
    Rule::new("trailing_punct", trailing_punct),
    Rule::new("leading_punct", leading_punct),
    Rule::new("contraction", contraction),
    Rule::new("ellipsis", ellipsis),
    Rule::new("arrow", arrow),
    Rule::new("substitution", substitution),
    Rule::new("directory", directory),
];

//-----------------------------------------------------------------------------
// Consuming rules
//-----------------------------------------------------------------------------

fn is_mention_candidate(users: &UserRegistry, name: &str) -> bool {
    users.contains(name) && (name.chars().count() > 2 || is_common_short_name(name))
}

/// Finds the username a field refers to, peeling punctuation off the end and
/// then off the front one character at a time.
pub(crate) fn find_mention(users: &UserRegistry, field: &str) -> Option<String> {
    if field.chars().count() > 2 && users.contains(field) {
        return Some(field.to_string());
    }

    let mut core = field;
    while let Some(rest) = core.strip_suffix(|c: char| c.is_ascii_punctuation()) {
        core = rest;
        if is_mention_candidate(users, core) {
            return Some(core.to_string());
        }
    }
    while let Some(rest) = core.strip_prefix(|c: char| c.is_ascii_punctuation()) {
        core = rest;
        if is_mention_candidate(users, core) {
            return Some(core.to_string());
        }
    }
    None
}

fn mention(pass: &mut FieldPass<'_>) -> RuleResult {
    let Some(user) = find_mention(pass.users, &pass.current) else {
        return RuleResult::Continue;
    };
    let near = pass
        .users
        .get(&user)
        .is_some_and(|range| range.is_near(pass.line_no));
    if !near {
        return RuleResult::Continue;
    }

    let prefix = pass.current.split(user.as_str()).next().unwrap_or_default().to_string();
    let suffix = pass.current.rsplit(user.as_str()).next().unwrap_or_default().to_string();

    if !prefix.is_empty() {
        pass.emit(prefix);
    }
    if pass.options.replace_usernames {
        pass.emit(USER_PLACEHOLDER);
    } else {
        pass.emit(user);
    }
    if !suffix.is_empty() {
        pass.emit(suffix);
    }
    pass.consume()
}

/// `user@host` or a shell prompt like `user@host:~$`.
fn address(pass: &mut FieldPass<'_>) -> RuleResult {
    let current = &pass.current;
    if !current.contains('@') || current.starts_with('@') || current.ends_with('@') {
        return RuleResult::Continue;
    }

    let Some((local, domain)) = current.split_once('@') else {
        return RuleResult::Continue;
    };
    if domain.contains('@') {
        return RuleResult::Continue;
    }

    let (local, domain) = (format!("ADDRESS_{local}"), format!("ADDRESS_@{domain}"));
    pass.emit(local);
    pass.emit(domain);
    pass.consume()
}

/// `ls -l` style mode strings, e.g. `-rwxr-xr-x`.
fn permissions(pass: &mut FieldPass<'_>) -> RuleResult {
    let current = &pass.current;
    if current.len() != 10 || !current.bytes().all(|b| b"-rwxd".contains(&b)) {
        return RuleResult::Continue;
    }

    let groups: Vec<String> = [&current[..1], &current[1..4], &current[4..7], &current[7..]]
        .iter()
        .map(|g| format!("PERMISSIONS_{g}"))
        .collect();
    for group in groups {
        pass.emit(group);
    }
    pass.consume()
}

fn url(pass: &mut FieldPass<'_>) -> RuleResult {
    if !URL.is_match(&pass.current) {
        return RuleResult::Continue;
    }

    let chunks: Vec<String> = pass
        .current
        .split('/')
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect();

    // scheme, host, then the rest of the path as one token
    let mut tokens = chunks.iter().take(2).map(|c| format!("URL/{c}/")).collect::<Vec<_>>();
    if chunks.len() > 2 {
        tokens.push(format!("URL/{}/", chunks[2..].join("/")));
    }
    for token in tokens {
        pass.emit(token);
    }
    pass.consume()
}

/// `s/old/new/` edits.
fn substitution(pass: &mut FieldPass<'_>) -> RuleResult {
    if !SUBSTITUTION.is_match(&pass.current) {
        return RuleResult::Continue;
    }
    emit_segments(pass, "SUB")
}

fn directory(pass: &mut FieldPass<'_>) -> RuleResult {
    if !pass.current.starts_with(['/', '~']) {
        return RuleResult::Continue;
    }
    emit_segments(pass, "DIR")
}

fn emit_segments(pass: &mut FieldPass<'_>, label: &str) -> RuleResult {
    let segments: Vec<String> = pass
        .current
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|s| format!("{label}/{s}/"))
        .collect();
    for segment in segments {
        pass.emit(segment);
    }
    pass.consume()
}

//-----------------------------------------------------------------------------
// Rewriting / splitting rules
//-----------------------------------------------------------------------------

fn www(pass: &mut FieldPass<'_>) -> RuleResult {
    if pass.current.starts_with("www.") {
        pass.current = format!("URL/{}", pass.current);
    }
    RuleResult::Continue
}

fn trailing_punct(pass: &mut FieldPass<'_>) -> RuleResult {
    pass.split_requeue(&TRAILING_PUNCT);
    RuleResult::Continue
}

fn leading_punct(pass: &mut FieldPass<'_>) -> RuleResult {
    pass.split_requeue(&LEADING_PUNCT);
    RuleResult::Continue
}

/// `'s`, `n't`, `'ll`, `'m`, `'ve`; a double quote also counts as the mark.
fn contraction(pass: &mut FieldPass<'_>) -> RuleResult {
    for suffix in CONTRACTIONS.iter() {
        pass.split_requeue(suffix);
    }
    RuleResult::Continue
}

/// Mid-word ellipses, e.g. `know...but`.
fn ellipsis(pass: &mut FieldPass<'_>) -> RuleResult {
    pass.split_requeue(&ELLIPSIS);
    RuleResult::Continue
}

/// Menu paths such as `System->Admin->Shared`.
fn arrow(pass: &mut FieldPass<'_>) -> RuleResult {
    pass.split_requeue(&ARROW);
    RuleResult::Continue
}
