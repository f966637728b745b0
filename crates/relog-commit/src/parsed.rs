//! Parsed commit type after conventional-commit classification.

use serde::{Deserialize, Serialize};

use crate::{Author, Reference};

/// A commit after classification against the Conventional Commits grammar.
///
/// Classification is total: a commit that does not match the grammar still
/// produces a value, with `is_conventional` false, empty `type` and `scope`,
/// and the full subject as `description`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCommit {
    /// The abbreviated commit hash.
    pub short_hash: String,

    /// The original commit subject, unmodified.
    pub message: String,

    /// The commit body, unmodified.
    pub body: String,

    /// The author date, verbatim from the log output.
    pub date: String,

    /// Whether the subject matched the conventional-commit grammar.
    pub is_conventional: bool,

    /// The commit type (feat, fix, docs, etc.), or empty when
    /// non-conventional.
    pub r#type: String,

    /// The scope, or empty when absent.
    pub scope: String,

    /// The subject with type/scope prefix and pull-request markers
    /// stripped.
    pub description: String,

    /// Whether this is a breaking change, signaled either by the `!`
    /// grammar marker or by a breaking-change announcement in the body.
    pub is_breaking: bool,

    /// Issue and pull-request references found in the description,
    /// pull-requests first.
    pub references: Vec<Reference>,

    /// The primary author followed by co-authors credited in the body.
    /// Never empty.
    pub authors: Vec<Author>,
}

impl ParsedCommit {
    /// Returns the primary author.
    #[must_use]
    pub fn primary_author(&self) -> Option<&Author> {
        self.authors.first()
    }

    /// Returns true if this commit represents a feature.
    #[must_use]
    pub fn is_feature(&self) -> bool {
        self.r#type == "feat"
    }

    /// Returns true if this commit represents a bug fix.
    #[must_use]
    pub fn is_fix(&self) -> bool {
        self.r#type == "fix"
    }

    /// Returns true if this commit should trigger a major version bump.
    #[must_use]
    pub fn is_major(&self) -> bool {
        self.is_breaking
    }

    /// Returns true if this commit should trigger a minor version bump.
    #[must_use]
    pub fn is_minor(&self) -> bool {
        !self.is_breaking && self.is_feature()
    }

    /// Returns true if this commit should trigger a patch version bump.
    #[must_use]
    pub fn is_patch(&self) -> bool {
        !self.is_breaking && self.is_fix()
    }
}
