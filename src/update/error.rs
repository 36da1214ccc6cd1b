//! Update check error types

use crate::github::GitHubError;
use crate::version::InvalidVersionError;
use thiserror::Error;

/// Error types for update checks
#[derive(Debug, Error)]
pub enum UpdateError {
    /// Listing releases/tags from the release source failed
    #[error("failed to get {what} for {owner}/{repo}: {source}")]
    Fetch {
        what: &'static str,
        owner: String,
        repo: String,
        #[source]
        source: GitHubError,
    },

    /// A remote tag that must be a version is not semver compliant
    #[error("tag '{tag}' of {owner}/{repo} is not semver compliant")]
    NotSemver {
        owner: String,
        repo: String,
        tag: String,
    },

    /// Unrecognized version source, unreadable or incomplete configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// The application version is not usable as a baseline
    #[error(transparent)]
    InvalidVersion(#[from] InvalidVersionError),
}

/// Convenience result alias for update checks
pub type UpdateResult<T> = Result<T, UpdateError>;
