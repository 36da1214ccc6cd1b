//! Configuration for update checks

use super::error::{UpdateError, UpdateResult};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

const CANDIDATE_MARKER: &str = "rc";
const BETA_MARKER: &str = "beta";
const ALPHA_MARKER: &str = "alpha";

/// Where candidate versions are read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum VersionSource {
    /// Tag names of published releases
    Releases,
    /// Plain git tags
    #[default]
    Tags,
    /// Update checks disabled
    None,
}

impl VersionSource {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            VersionSource::Releases => "releases",
            VersionSource::Tags => "tags",
            VersionSource::None => "none",
        }
    }
}

impl FromStr for VersionSource {
    type Err = UpdateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "release" | "releases" => Ok(VersionSource::Releases),
            "tag" | "tags" => Ok(VersionSource::Tags),
            "none" => Ok(VersionSource::None),
            other => Err(UpdateError::Config(format!(
                "version source '{other}' is not supported"
            ))),
        }
    }
}

impl TryFrom<String> for VersionSource {
    type Error = UpdateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for VersionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Prerelease channels a user opted into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct ChannelFlags {
    pub allow_candidate: bool,
    pub allow_beta: bool,
    pub allow_alpha: bool,
}

impl ChannelFlags {
    /// Every prerelease channel enabled
    #[must_use]
    pub fn all() -> Self {
        Self {
            allow_candidate: true,
            allow_beta: true,
            allow_alpha: true,
        }
    }

    /// Whether a version with this prerelease label may be offered.
    ///
    /// The label is split into its dot and hyphen separated identifiers and
    /// an identifier carries a channel when it starts with that channel's
    /// marker, ignoring ASCII case (`rc1`, `RC.2`, `beta-3`). Markers inside
    /// a word do not count, so `search.1` is not a candidate. A label that
    /// carries no channel marker (e.g. `dev.3`) is always permitted.
    #[must_use]
    pub fn permits(&self, prerelease: &str) -> bool {
        if prerelease.is_empty() {
            return true;
        }
        let label = prerelease.to_ascii_lowercase();
        let marked = |marker: &str| {
            label
                .split(['.', '-'])
                .any(|ident| ident.starts_with(marker))
        };
        !((!self.allow_candidate && marked(CANDIDATE_MARKER))
            || (!self.allow_beta && marked(BETA_MARKER))
            || (!self.allow_alpha && marked(ALPHA_MARKER)))
    }
}

/// Configuration for an [`UpdateChecker`](super::UpdateChecker)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateConfig {
    /// Repository owner (user or organization)
    #[serde(default)]
    pub owner: String,
    /// Repository name
    #[serde(default)]
    pub repo: String,
    #[serde(default)]
    pub source: VersionSource,
    #[serde(default)]
    pub channels: ChannelFlags,
}

impl UpdateConfig {
    /// Configuration for `owner/repo` reading tags, stable releases only
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            source: VersionSource::default(),
            channels: ChannelFlags::default(),
        }
    }

    #[must_use]
    pub fn source(mut self, source: VersionSource) -> Self {
        self.source = source;
        self
    }

    #[must_use]
    pub fn channels(mut self, channels: ChannelFlags) -> Self {
        self.channels = channels;
        self
    }

    #[must_use]
    pub fn allow_candidate(mut self, allow: bool) -> Self {
        self.channels.allow_candidate = allow;
        self
    }

    #[must_use]
    pub fn allow_beta(mut self, allow: bool) -> Self {
        self.channels.allow_beta = allow;
        self
    }

    #[must_use]
    pub fn allow_alpha(mut self, allow: bool) -> Self {
        self.channels.allow_alpha = allow;
        self
    }

    /// Parse configuration from TOML
    pub fn from_toml_str(s: &str) -> UpdateResult<Self> {
        let config: Self =
            toml::from_str(s).map_err(|e| UpdateError::Config(format!("invalid TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> UpdateResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            UpdateError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&contents)
    }

    /// Owner and repository are required unless checks are disabled
    pub fn validate(&self) -> UpdateResult<()> {
        if self.source == VersionSource::None {
            return Ok(());
        }
        if self.owner.trim().is_empty() || self.repo.trim().is_empty() {
            return Err(UpdateError::Config(format!(
                "repository owner and name are required for version source '{}'",
                self.source
            )));
        }
        Ok(())
    }
}
