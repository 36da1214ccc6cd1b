//! GitHub repository tags listing operation.

use crate::github::util::{MAX_PAGE_SIZE, spawn_task};
use crate::github::error::GitHubError;
use crate::runtime::AsyncTask;
use crate::update::RepoTag;
use octocrab::Octocrab;
use std::sync::Arc;

/// List tag names of a repository (first page).
pub(crate) fn list_tags(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
) -> AsyncTask<Result<Vec<RepoTag>, GitHubError>> {
    let owner = owner.into();
    let repo = repo.into();

    spawn_task(async move {
        let tags = inner
            .repos(&owner, &repo)
            .list_tags()
            .per_page(MAX_PAGE_SIZE)
            .send()
            .await
            .map_err(GitHubError::from)?
            .items;

        Ok(tags.into_iter().map(|t| RepoTag::new(t.name)).collect())
    })
}
