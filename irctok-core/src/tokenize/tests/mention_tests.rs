use super::helpers::tokenize_at;
use crate::conf::TokenizeOptions;
use crate::users::UserRegistry;
use crate::vocab::Vocabulary;
use pretty_assertions::assert_eq;

fn registry(names: &[(&str, usize)]) -> UserRegistry {
    let mut users = UserRegistry::new();
    for (name, line_no) in names {
        users.register(name, *line_no);
    }
    users
}

fn mention_body(users: &UserRegistry, message: &str, line_no: usize) -> Vec<String> {
    let options = TokenizeOptions {
        cut_timestamp: true,
        cut_username: true,
        replace_usernames: true,
        ..TokenizeOptions::default()
    };
    tokenize_at(
        options,
        &Vocabulary::default(),
        users,
        &format!("[00:00] <x> {message}"),
        line_no,
    )
}

#[test]
fn exact_mention_is_replaced() {
    let users = registry(&[("alice", 5)]);

    assert_eq!(mention_body(&users, "Alice thanks", 10), ["<user>", "thanks"]);
}

#[test]
fn trailing_punctuation_is_kept_as_suffix() {
    let users = registry(&[("alice", 5)]);

    assert_eq!(mention_body(&users, "alice: try this", 10), ["<user>", ":", "try", "this"]);
}

#[test]
fn leading_punctuation_is_kept_as_prefix() {
    let users = registry(&[("alice", 5)]);

    assert_eq!(mention_body(&users, "@alice", 10), ["@", "<user>"]);
}

#[test]
fn punctuation_on_both_sides_is_kept() {
    let users = registry(&[("alice", 1)]);

    assert_eq!(mention_body(&users, "(alice)", 10), ["(", "<user>", ")"]);
}

#[test]
fn short_whitelisted_name_resolves_behind_punctuation() {
    let users = registry(&[("nn", 1)]);

    assert_eq!(mention_body(&users, "@nn", 2), ["@", "<user>"]);
    assert_eq!(mention_body(&users, "nn:", 2), ["<user>", ":"]);
}

#[test]
fn name_is_emitted_when_not_replacing() {
    let users = registry(&[("alice", 5)]);
    let options = TokenizeOptions {
        cut_timestamp: true,
        cut_username: true,
        ..TokenizeOptions::default()
    };

    let tokens = tokenize_at(
        options,
        &Vocabulary::default(),
        &users,
        "[00:00] <x> ALICE,",
        10,
    );

    assert_eq!(tokens, ["alice", ","]);
}

#[test]
fn mention_far_from_activity_is_not_resolved() {
    let users = registry(&[("alice", 5)]);

    assert_eq!(mention_body(&users, "alice:", 1006), ["alice", ":"]);
    assert_eq!(mention_body(&users, "alice:", 1005), ["<user>", ":"]);
}

#[test]
fn short_names_need_the_whitelist() {
    let users = registry(&[("nn", 1), ("zq", 1)]);

    assert_eq!(mention_body(&users, "nn,", 2), ["<user>", ","]);
    assert_eq!(mention_body(&users, "zq,", 2), ["zq", ","]);
}

#[test]
fn bare_short_name_is_not_resolved() {
    let users = registry(&[("nn", 1)]);

    assert_eq!(mention_body(&users, "nn", 2), ["nn"]);
}

#[test]
fn decorated_nick_resolves_through_core() {
    let mut users = UserRegistry::new();
    users.observe("[10:00] <|blah|> hi", 1);

    assert_eq!(mention_body(&users, "blah:", 2), ["<user>", ":"]);
    assert_eq!(mention_body(&users, "|blah|", 2), ["<user>"]);
}

#[test]
fn mention_takes_priority_over_other_rules() {
    let users = registry(&[("bob@home", 1)]);

    assert_eq!(mention_body(&users, "bob@home", 2), ["<user>"]);
}
