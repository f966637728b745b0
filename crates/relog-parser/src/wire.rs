//! Wire format shared with the log-retrieval layer.

/// Separates the leading fields of a log record.
///
/// The format string guarantees it never appears in the first five fields;
/// the body may contain it freely since the body is the last field.
pub const FIELD_DELIMITER: char = '|';

/// Terminates one commit record in the raw log output.
pub const COMMIT_END_MARKER: &str = "[GIT_LOG_COMMIT_END]";

/// `git log --pretty` format producing one record per commit.
///
/// Field order is short hash, subject, author name, author email, author
/// date, body. The body must stay last: it may contain both the field
/// delimiter and embedded newlines, and only the last position keeps that
/// from corrupting the other fields.
pub const GIT_LOG_FORMAT: &str = "%h|%s|%an|%ae|%ad|%b[GIT_LOG_COMMIT_END]";

/// Splits a raw log blob into per-commit records.
///
/// Records are separated by the end marker followed by a newline; empty
/// fragments (e.g. after the final marker) are discarded.
#[must_use]
pub fn split_log(blob: &str) -> Vec<&str> {
    let terminator = format!("{COMMIT_END_MARKER}\n");
    blob.split(terminator.as_str())
        .filter(|record| !record.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_log_two_records() {
        let blob = "9cfa09f|feat: a|author1|author1@example.com|date|[GIT_LOG_COMMIT_END]\n\
                    62ef7ed|fix: b|author2|author2@example.com|date|[GIT_LOG_COMMIT_END]\n";
        let records = split_log(blob);
        assert_eq!(records.len(), 2);
        assert!(records[0].starts_with("9cfa09f|"));
        assert!(records[1].starts_with("62ef7ed|"));
    }

    #[test]
    fn test_split_log_empty_blob() {
        assert!(split_log("").is_empty());
    }

    #[test]
    fn test_split_log_body_with_newlines() {
        let blob =
            "9cfa09f|feat: a|author1|author1@example.com|date|line one\nline two\n[GIT_LOG_COMMIT_END]\n";
        let records = split_log(blob);
        assert_eq!(records.len(), 1);
        assert!(records[0].ends_with("line one\nline two\n"));
    }
}
