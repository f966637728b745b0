//! Raw commit type as decoded from the git log wire format.

use serde::{Deserialize, Serialize};

use crate::Author;

/// A commit as decoded from one git log record, before classification.
///
/// All fields are plain text taken from the log output. The date is
/// carried through as an opaque string, never parsed or validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCommit {
    /// The abbreviated commit hash.
    ///
    /// Empty when the record had fewer fields than expected; callers that
    /// care about malformed input should check for that.
    pub short_hash: String,

    /// The commit subject (first line of the commit message).
    pub message: String,

    /// The primary commit author.
    pub author: Author,

    /// The author date, verbatim from the log output.
    pub date: String,

    /// The commit body, possibly empty.
    pub body: String,
}

impl RawCommit {
    /// Creates a new raw commit.
    #[must_use]
    pub fn new(
        short_hash: impl Into<String>,
        message: impl Into<String>,
        author: Author,
        date: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            short_hash: short_hash.into(),
            message: message.into(),
            author,
            date: date.into(),
            body: body.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_commit(message: &str, body: &str) -> RawCommit {
        RawCommit::new(
            "9cfa09f",
            message,
            Author::new("Test User", "test@example.com"),
            "Thu Jan 23 17:42:15 2025 +0800",
            body,
        )
    }

    #[test]
    fn test_new() {
        let commit = make_commit("feat: add feature", "");
        assert_eq!(commit.short_hash, "9cfa09f");
        assert_eq!(commit.message, "feat: add feature");
        assert_eq!(commit.author.name, "Test User");
        assert_eq!(commit.author.email, "test@example.com");
        assert_eq!(commit.date, "Thu Jan 23 17:42:15 2025 +0800");
        assert_eq!(commit.body, "");
    }

    #[test]
    fn test_new_with_into() {
        let commit = RawCommit::new(
            String::from("hash"),
            String::from("message"),
            Author::new("author", "email"),
            String::from("date"),
            String::from("body"),
        );

        assert_eq!(commit.short_hash, "hash");
        assert_eq!(commit.message, "message");
    }

    #[test]
    fn test_eq() {
        let a = make_commit("msg", "body");
        let b = make_commit("msg", "body");
        assert_eq!(a, b);
    }

    #[test]
    fn test_serialize_deserialize() {
        let commit = make_commit("feat: add feature", "some body");
        let json = serde_json::to_string(&commit).unwrap();
        let deserialized: RawCommit = serde_json::from_str(&json).unwrap();
        assert_eq!(commit, deserialized);
    }
}
