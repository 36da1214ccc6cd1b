//! Update availability checks against a release source

use super::config::{ChannelFlags, UpdateConfig, VersionSource};
use super::error::{UpdateError, UpdateResult};
use super::source::ReleaseSource;
use crate::github::{GitHubError, GitHubResult};
use crate::runtime::AsyncTask;
use crate::version::{CurrentVersion, semver};
use log::{debug, info, warn};
use std::fmt;

/// Outcome of a full update check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateStatus {
    /// Canonical form of the running version
    pub current: String,
    /// Highest eligible version above `current`, if any
    pub latest: Option<String>,
}

impl UpdateStatus {
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.latest.is_some()
    }
}

impl fmt::Display for UpdateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.latest {
            Some(latest) => write!(f, "update available: {} -> {latest}", self.current),
            None => write!(f, "{} is up to date", self.current),
        }
    }
}

/// Decides whether a newer eligible version of the application exists.
///
/// Holds no state besides its inputs; every check fetches fresh data from
/// the release source.
pub struct UpdateChecker<S> {
    source: S,
    config: UpdateConfig,
    current: CurrentVersion,
}

impl<S: ReleaseSource> UpdateChecker<S> {
    pub fn new(source: S, config: UpdateConfig, current: CurrentVersion) -> Self {
        Self {
            source,
            config,
            current,
        }
    }

    #[must_use]
    pub fn config(&self) -> &UpdateConfig {
        &self.config
    }

    #[must_use]
    pub fn current(&self) -> &CurrentVersion {
        &self.current
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Semver compliant versions of the configured repository, unsorted
    pub async fn collect_versions(&self) -> UpdateResult<Vec<String>> {
        self.collect_repo_versions(&self.config.owner, &self.config.repo, self.config.source)
            .await
    }

    /// Semver compliant versions of `owner/repo` read from `mode`, unsorted.
    ///
    /// `VersionSource::None` returns an empty list without touching the
    /// release source. Entries that are not valid semver are dropped.
    pub async fn collect_repo_versions(
        &self,
        owner: &str,
        repo: &str,
        mode: VersionSource,
    ) -> UpdateResult<Vec<String>> {
        let names: Vec<String> = match mode {
            VersionSource::None => {
                debug!("version source disabled for {owner}/{repo}");
                return Ok(Vec::new());
            }
            VersionSource::Releases => {
                fetch(self.source.list_releases(owner, repo), "release list", owner, repo)
                    .await?
                    .into_iter()
                    .map(|r| r.tag_name)
                    .collect()
            }
            VersionSource::Tags => {
                fetch(self.source.list_tags(owner, repo), "tag list", owner, repo)
                    .await?
                    .into_iter()
                    .map(|t| t.name)
                    .collect()
            }
        };

        let total = names.len();
        let versions: Vec<String> = names
            .into_iter()
            .filter(|name| {
                let valid = semver::is_valid(name);
                if !valid {
                    debug!("skipping non-semver {mode} entry '{name}' of {owner}/{repo}");
                }
                valid
            })
            .collect();

        debug!(
            "collected {} of {total} {mode} entries from {owner}/{repo}",
            versions.len()
        );
        Ok(versions)
    }

    /// Highest version above the current one that the configured channels
    /// permit. Sorts `versions` in place, highest first.
    pub fn latest_eligible(&self, versions: &mut [String]) -> Option<String> {
        latest_eligible(versions, &self.current, self.config.channels)
    }

    /// True if `latest` is valid semver with higher precedence than the
    /// running version. Malformed input is `false`, never an error.
    #[must_use]
    pub fn update(&self, latest: &str) -> bool {
        self.current.update(latest)
    }

    /// Collect versions and pick the eligible update, if any
    pub async fn check(&self) -> UpdateResult<UpdateStatus> {
        let mut versions = self.collect_versions().await?;
        let latest = self.latest_eligible(&mut versions);

        let status = UpdateStatus {
            current: self.current.version(),
            latest,
        };
        info!("{}/{}: {status}", self.config.owner, self.config.repo);
        Ok(status)
    }

    /// Tag of the release the host marks as latest.
    ///
    /// Fails with [`UpdateError::NotSemver`] if that tag is not a version.
    pub async fn latest_release(&self) -> UpdateResult<String> {
        let (owner, repo) = (self.config.owner.as_str(), self.config.repo.as_str());
        let release = fetch(
            self.source.get_latest_release(owner, repo),
            "latest release",
            owner,
            repo,
        )
        .await?;

        if !semver::is_valid(&release.tag_name) {
            return Err(UpdateError::NotSemver {
                owner: owner.to_string(),
                repo: repo.to_string(),
                tag: release.tag_name,
            });
        }
        Ok(release.tag_name)
    }
}

async fn fetch<T>(
    task: AsyncTask<GitHubResult<T>>,
    what: &'static str,
    owner: &str,
    repo: &str,
) -> UpdateResult<T> {
    let result = match task.await {
        Ok(result) => result,
        Err(cancelled) => Err(GitHubError::from(cancelled)),
    };
    result.map_err(|source| {
        warn!("failed to get {what} for {owner}/{repo}: {source}");
        UpdateError::Fetch {
            what,
            owner: owner.to_string(),
            repo: repo.to_string(),
            source,
        }
    })
}

/// Highest version in `versions` that is newer than `current` and whose
/// prerelease label `channels` permits.
///
/// `versions` is sorted in place, highest first. Invalid entries never
/// qualify. Returns `None` for an empty list or when nothing qualifies.
pub fn latest_eligible(
    versions: &mut [String],
    current: &CurrentVersion,
    channels: ChannelFlags,
) -> Option<String> {
    semver::sort_descending(versions);
    versions
        .iter()
        .filter(|v| channels.permits(&semver::prerelease(v)))
        .find(|v| current.update(v))
        .cloned()
}

/// Highest valid, non-prerelease version in `versions`, regardless of the
/// running version. Sorts `versions` in place, highest first.
pub fn latest_stable(versions: &mut [String]) -> Option<String> {
    semver::sort_descending(versions);
    versions
        .iter()
        .find(|v| semver::is_valid(v) && semver::prerelease(v).is_empty())
        .cloned()
}
