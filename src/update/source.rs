//! Release source abstraction
//!
//! The checker only needs raw tag names; where they come from (GitHub, a
//! mirror, a fixture) is up to the implementation.

use crate::github::GitHubResult;
use crate::runtime::AsyncTask;
use serde::{Deserialize, Serialize};

/// A published release, identified by its tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseTag {
    pub tag_name: String,
}

impl ReleaseTag {
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
        }
    }
}

/// A git tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoTag {
    pub name: String,
}

impl RepoTag {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Source of candidate versions for a repository.
///
/// Implementations perform no filtering: every release or tag is returned as
/// is, valid semver or not.
pub trait ReleaseSource: Send + Sync {
    /// All releases of `owner/repo`
    fn list_releases(&self, owner: &str, repo: &str) -> AsyncTask<GitHubResult<Vec<ReleaseTag>>>;

    /// All tags of `owner/repo`
    fn list_tags(&self, owner: &str, repo: &str) -> AsyncTask<GitHubResult<Vec<RepoTag>>>;

    /// The release the host marks as latest
    fn get_latest_release(&self, owner: &str, repo: &str) -> AsyncTask<GitHubResult<ReleaseTag>>;
}

impl<S: ReleaseSource + ?Sized> ReleaseSource for &S {
    fn list_releases(&self, owner: &str, repo: &str) -> AsyncTask<GitHubResult<Vec<ReleaseTag>>> {
        (**self).list_releases(owner, repo)
    }

    fn list_tags(&self, owner: &str, repo: &str) -> AsyncTask<GitHubResult<Vec<RepoTag>>> {
        (**self).list_tags(owner, repo)
    }

    fn get_latest_release(&self, owner: &str, repo: &str) -> AsyncTask<GitHubResult<ReleaseTag>> {
        (**self).get_latest_release(owner, repo)
    }
}

impl<S: ReleaseSource + ?Sized> ReleaseSource for std::sync::Arc<S> {
    fn list_releases(&self, owner: &str, repo: &str) -> AsyncTask<GitHubResult<Vec<ReleaseTag>>> {
        (**self).list_releases(owner, repo)
    }

    fn list_tags(&self, owner: &str, repo: &str) -> AsyncTask<GitHubResult<Vec<RepoTag>>> {
        (**self).list_tags(owner, repo)
    }

    fn get_latest_release(&self, owner: &str, repo: &str) -> AsyncTask<GitHubResult<ReleaseTag>> {
        (**self).get_latest_release(owner, repo)
    }
}
