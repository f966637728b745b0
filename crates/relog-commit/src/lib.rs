//! Commit types for Relog.
//!
//! This crate provides the core commit types used throughout Relog:
//! - [`RawCommit`]: A commit as decoded from the git log wire format
//! - [`ParsedCommit`]: A commit after conventional-commit classification
//! - [`Author`]: A primary author or co-author
//! - [`Reference`]: An issue or pull-request marker found in a commit

mod author;
mod parsed;
mod raw;
mod reference;

pub use author::Author;
pub use parsed::ParsedCommit;
pub use raw::RawCommit;
pub use reference::{Reference, ReferenceKind};
