//! Raw record decoding.

use relog_commit::{Author, RawCommit};

use crate::wire::FIELD_DELIMITER;

/// Decodes one delimited log record into a [`RawCommit`].
///
/// The record carries five leading fields (short hash, subject, author
/// name, author email, date) followed by the body. Everything past the
/// fifth delimiter belongs to the body: fragments are filtered of empties
/// and rejoined with newlines, so a body that itself contains the
/// delimiter loses no text.
///
/// Decoding is total. A record with fewer than five fields yields empty
/// strings for the missing fields; callers that care can treat an empty
/// `short_hash` as a malformed record.
#[must_use]
pub fn decode(record: &str) -> RawCommit {
    let mut fields = record.split(FIELD_DELIMITER);
    let short_hash = fields.next().unwrap_or_default();
    let message = fields.next().unwrap_or_default();
    let author_name = fields.next().unwrap_or_default();
    let author_email = fields.next().unwrap_or_default();
    let date = fields.next().unwrap_or_default();
    let body = fields
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    RawCommit::new(
        short_hash,
        message,
        Author::new(author_name, author_email),
        date,
        body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_record() {
        let raw = decode(
            "9cfa09f|feat(scope): commit message|author1|author1@example.com|Thu Jan 23 17:42:15 2025 +0800|",
        );

        assert_eq!(raw.short_hash, "9cfa09f");
        assert_eq!(raw.message, "feat(scope): commit message");
        assert_eq!(raw.author, Author::new("author1", "author1@example.com"));
        assert_eq!(raw.date, "Thu Jan 23 17:42:15 2025 +0800");
        assert_eq!(raw.body, "");
    }

    #[test]
    fn test_decode_body_kept() {
        let raw = decode("9cfa09f|feat: a|author1|author1@example.com|date|some body text");
        assert_eq!(raw.body, "some body text");
    }

    #[test]
    fn test_decode_body_with_delimiter_rejoined() {
        let raw = decode("9cfa09f|feat: a|author1|author1@example.com|date|first|second");
        assert_eq!(raw.body, "first\nsecond");
    }

    #[test]
    fn test_decode_body_empty_fragments_dropped() {
        let raw = decode("9cfa09f|feat: a|author1|author1@example.com|date||fragment||");
        assert_eq!(raw.body, "fragment");
    }

    #[test]
    fn test_decode_body_with_embedded_newlines() {
        let raw = decode("9cfa09f|feat: a|author1|author1@example.com|date|line one\nline two");
        assert_eq!(raw.body, "line one\nline two");
    }

    #[test]
    fn test_decode_short_record_defaults_to_empty() {
        let raw = decode("9cfa09f|only a subject");
        assert_eq!(raw.short_hash, "9cfa09f");
        assert_eq!(raw.message, "only a subject");
        assert_eq!(raw.author, Author::new("", ""));
        assert_eq!(raw.date, "");
        assert_eq!(raw.body, "");
    }

    #[test]
    fn test_decode_empty_record() {
        let raw = decode("");
        assert_eq!(raw.short_hash, "");
        assert_eq!(raw.message, "");
        assert_eq!(raw.body, "");
    }
}
