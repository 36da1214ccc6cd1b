//! GitHub latest release retrieval operation.

use crate::github::{error::GitHubError, util::spawn_task};
use crate::runtime::AsyncTask;
use crate::update::ReleaseTag;
use octocrab::Octocrab;
use std::sync::Arc;

/// Get the tag of the latest published, non-prerelease release.
///
/// GitHub decides what "latest" means here; the tag is not checked for
/// semver compliance at this layer.
pub(crate) fn get_latest_release(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
) -> AsyncTask<Result<ReleaseTag, GitHubError>> {
    let owner = owner.into();
    let repo = repo.into();

    spawn_task(async move {
        let release = inner
            .repos(&owner, &repo)
            .releases()
            .get_latest()
            .await
            .map_err(GitHubError::from)?;
        Ok(ReleaseTag::new(release.tag_name))
    })
}
