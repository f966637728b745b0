//! Git log retrieval for Relog.
//!
//! This crate provides the log-retrieval side of the pipeline:
//! - Repository handling via the system `git` binary
//! - Tag lookup for release ranges
//! - Commit retrieval piped through the parsing core

mod error;
mod repository;

pub use error::{GitError, GitResult};
pub use repository::Repository;
