//! Releases and tags API methods

use super::GitHubClient;
use crate::github::error::GitHubError;
use crate::runtime::AsyncTask;
use crate::update::{ReleaseSource, ReleaseTag, RepoTag};

impl GitHubClient {
    /// List release tag names
    pub fn list_releases(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> AsyncTask<Result<Vec<ReleaseTag>, GitHubError>> {
        crate::github::list_releases::list_releases(self.inner.clone(), owner, repo)
    }

    /// List tag names
    pub fn list_tags(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> AsyncTask<Result<Vec<RepoTag>, GitHubError>> {
        crate::github::list_tags::list_tags(self.inner.clone(), owner, repo)
    }

    /// Get the latest release tag
    pub fn get_latest_release(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> AsyncTask<Result<ReleaseTag, GitHubError>> {
        crate::github::get_latest_release::get_latest_release(self.inner.clone(), owner, repo)
    }
}

impl ReleaseSource for GitHubClient {
    fn list_releases(
        &self,
        owner: &str,
        repo: &str,
    ) -> AsyncTask<Result<Vec<ReleaseTag>, GitHubError>> {
        GitHubClient::list_releases(self, owner, repo)
    }

    fn list_tags(&self, owner: &str, repo: &str) -> AsyncTask<Result<Vec<RepoTag>, GitHubError>> {
        GitHubClient::list_tags(self, owner, repo)
    }

    fn get_latest_release(
        &self,
        owner: &str,
        repo: &str,
    ) -> AsyncTask<Result<ReleaseTag, GitHubError>> {
        GitHubClient::get_latest_release(self, owner, repo)
    }
}
