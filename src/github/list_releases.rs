//! GitHub repository releases listing operation.

use crate::github::util::{MAX_PAGE_SIZE, spawn_task};
use crate::github::error::GitHubError;
use crate::runtime::AsyncTask;
use crate::update::ReleaseTag;
use octocrab::Octocrab;
use std::sync::Arc;

/// List release tag names of a repository (first page, newest first).
pub(crate) fn list_releases(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
) -> AsyncTask<Result<Vec<ReleaseTag>, GitHubError>> {
    let owner = owner.into();
    let repo = repo.into();

    spawn_task(async move {
        let releases = inner
            .repos(&owner, &repo)
            .releases()
            .list()
            .per_page(MAX_PAGE_SIZE)
            .send()
            .await
            .map_err(GitHubError::from)?
            .items;

        Ok(releases
            .into_iter()
            .map(|r| ReleaseTag::new(r.tag_name))
            .collect())
    })
}
