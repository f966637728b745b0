//! Git repository wrapper driving the system `git` binary.

use std::path::{Path, PathBuf};
use std::process::Command;

use relog_commit::ParsedCommit;
use relog_parser::{GIT_LOG_FORMAT, decode, parse, split_log};
use tracing::debug;

use crate::{GitError, GitResult};

/// A repository handle for tag lookup and commit retrieval.
pub struct Repository {
    root: PathBuf,
}

impl Repository {
    /// Opens the repository at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not inside a git repository.
    pub fn open(path: impl AsRef<Path>) -> GitResult<Self> {
        let repo = Self {
            root: path.as_ref().to_path_buf(),
        };
        match repo.git(&["rev-parse", "--git-dir"]) {
            Ok(_) => Ok(repo),
            Err(_) => Err(GitError::NotARepo(repo.root)),
        }
    }

    /// Discovers the repository enclosing the current directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory is not inside a git
    /// repository.
    pub fn discover() -> GitResult<Self> {
        let probe = Self {
            root: PathBuf::from("."),
        };
        let top = probe
            .git(&["rev-parse", "--show-toplevel"])
            .map_err(|_| GitError::NotARepo(PathBuf::from(".")))?;
        Ok(Self {
            root: PathBuf::from(top.trim()),
        })
    }

    /// Returns the repository root path as given at construction.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Returns the most recent tag reachable from `HEAD`.
    ///
    /// Any failure (no tags yet, no commits yet) surfaces as `None` so
    /// callers can fall back to the full history.
    #[must_use]
    pub fn last_tag(&self) -> Option<String> {
        match self.git(&["describe", "--tags", "--abbrev=0"]) {
            Ok(out) => out
                .lines()
                .next()
                .filter(|tag| !tag.is_empty())
                .map(String::from),
            Err(err) => {
                debug!(%err, "no previous tag found");
                None
            }
        }
    }

    /// Returns the tag(s) pointing at `HEAD`, or `None` when untagged.
    #[must_use]
    pub fn current_tag(&self) -> Option<String> {
        let out = self.git(&["tag", "--points-at", "HEAD"]).ok()?;
        let out = out.trim();
        if out.is_empty() {
            None
        } else {
            Some(out.to_string())
        }
    }

    /// Returns raw per-commit records for the `from...to` range, newest
    /// first.
    ///
    /// With no `from`, the walk covers the full history of `to`.
    ///
    /// # Errors
    ///
    /// Returns an error if git cannot be run or rejects the range.
    pub fn log(&self, from: Option<&str>, to: &str) -> GitResult<Vec<String>> {
        let range = match from {
            Some(from) => format!("{from}...{to}"),
            None => to.to_string(),
        };
        let pretty = format!("--pretty={GIT_LOG_FORMAT}");

        debug!(%range, "reading git log");
        let out = self.git(&["--no-pager", "log", &range, &pretty])?;

        Ok(split_log(&out).into_iter().map(String::from).collect())
    }

    /// Returns classified commits for the `from...to` range, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the log cannot be read. Parsing itself never
    /// fails; malformed records come back with empty fields.
    pub fn commits(&self, from: Option<&str>, to: &str) -> GitResult<Vec<ParsedCommit>> {
        let commits = self
            .log(from, to)?
            .iter()
            .map(|record| parse(&decode(record)))
            .collect();
        Ok(commits)
    }

    /// Returns classified commits since the last tag, or the full history
    /// when no tag exists yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the log cannot be read.
    pub fn commits_since_last_tag(&self) -> GitResult<Vec<ParsedCommit>> {
        let from = self.last_tag();
        self.commits(from.as_deref(), "HEAD")
    }

    fn git(&self, args: &[&str]) -> GitResult<String> {
        let output = Command::new("git")
            .current_dir(&self.root)
            .args(args)
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(GitError::CommandFailed {
                command: args.join(" "),
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
