//! Issue and pull-request references.

use serde::{Deserialize, Serialize};

/// The tracker entry kind a reference points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReferenceKind {
    /// A bare `#123` marker.
    Issue,
    /// A parenthesized `(#123)` marker.
    PullRequest,
}

/// An inline marker linking a commit to an issue or pull-request.
///
/// The value is the literal captured marker text including the `#` prefix,
/// never normalized to a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// The marker kind.
    #[serde(rename = "type")]
    pub kind: ReferenceKind,

    /// The literal marker text, e.g. `#42`.
    pub value: String,
}

impl Reference {
    /// Creates an issue reference.
    #[must_use]
    pub fn issue(value: impl Into<String>) -> Self {
        Self {
            kind: ReferenceKind::Issue,
            value: value.into(),
        }
    }

    /// Creates a pull-request reference.
    #[must_use]
    pub fn pull_request(value: impl Into<String>) -> Self {
        Self {
            kind: ReferenceKind::PullRequest,
            value: value.into(),
        }
    }
}
