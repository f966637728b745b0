//! Conventional-commit parsing core for Relog.
//!
//! Two stages, consumed in sequence by the log-retrieval layer:
//! - [`decode`]: splits one delimited log record into a
//!   [`RawCommit`](relog_commit::RawCommit)
//! - [`parse`]: classifies a raw commit against the Conventional Commits
//!   grammar, producing a [`ParsedCommit`](relog_commit::ParsedCommit)
//!
//! Both stages are total: malformed input degrades to empty fields rather
//! than an error, so callers cannot distinguish a malformed record from a
//! legitimately empty field without inspecting the raw values. Both are
//! pure functions with no shared state, safe to call from any number of
//! threads.

mod decode;
mod parse;
mod wire;

pub use decode::decode;
pub use parse::parse;
pub use wire::{COMMIT_END_MARKER, FIELD_DELIMITER, GIT_LOG_FORMAT, split_log};
