//! Commit author identity.

use serde::{Deserialize, Serialize};

/// A commit author, either the primary author or a co-author credited in
/// the commit body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// The author display name.
    pub name: String,

    /// The author email address.
    pub email: String,
}

impl Author {
    /// Creates a new author.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}
