use crate::users::UserScan;
use serde::{Deserialize, Serialize};

/// Per-line tokenisation switches. Every switch defaults to off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct TokenizeOptions {
    /// Omit the timestamp token.
    pub cut_timestamp: bool,

    /// Omit the speaker token.
    pub cut_username: bool,

    /// Emit `<user>` instead of the name for mentions inside a message.
    pub replace_usernames: bool,

    /// Wrap each line in `<s>` ... `</s>`.
    pub add_line_boundaries: bool,

    /// Pass lines without a timestamp header through as a plain split.
    pub edit_messages_only: bool,

    /// Input is already ASCII; lower-case instead of transliterating.
    pub is_ascii: bool,

    /// Scan the whole log for usernames before tokenising it.
    pub users_from_future: bool,
}

impl TokenizeOptions {
    pub fn user_scan(&self) -> UserScan {
        if self.users_from_future {
            UserScan::Prepass
        } else {
            UserScan::Streaming
        }
    }

    /// A switch is on if it is on in either set.
    pub fn union(self, other: Self) -> Self {
        Self {
            cut_timestamp: self.cut_timestamp || other.cut_timestamp,
            cut_username: self.cut_username || other.cut_username,
            replace_usernames: self.replace_usernames || other.replace_usernames,
            add_line_boundaries: self.add_line_boundaries || other.add_line_boundaries,
            edit_messages_only: self.edit_messages_only || other.edit_messages_only,
            is_ascii: self.is_ascii || other.is_ascii,
            users_from_future: self.users_from_future || other.users_from_future,
        }
    }
}
