//! Build provenance supplied by the packaging step

use serde::{Deserialize, Serialize};

const TOOLCHAIN_MARKER: &str = "rustc";
const VCS_REVISION_KEY: &str = "vcs.revision";

/// A dependency compiled into the binary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub name: String,
    pub version: String,
}

/// A key/value setting recorded at build time (e.g. `vcs.revision`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildSetting {
    pub key: String,
    pub value: String,
}

/// Build provenance of the running binary.
///
/// This is an injected value: the host embeds it (typically as JSON produced
/// by its build script) rather than the library discovering it at runtime.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildInfo {
    #[serde(default)]
    pub toolchain: String,
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
    #[serde(default)]
    pub settings: Vec<BuildSetting>,
}

impl BuildInfo {
    /// Create build info for the given toolchain version string
    pub fn new(toolchain: impl Into<String>) -> Self {
        Self {
            toolchain: toolchain.into(),
            ..Self::default()
        }
    }

    /// Record a dependency
    #[must_use]
    pub fn dependency(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.dependencies.push(Dependency {
            name: name.into(),
            version: version.into(),
        });
        self
    }

    /// Record a build setting
    #[must_use]
    pub fn setting(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.settings.push(BuildSetting {
            key: key.into(),
            value: value.into(),
        });
        self
    }

    /// Record the VCS revision the binary was built from
    #[must_use]
    pub fn vcs_revision_setting(self, revision: impl Into<String>) -> Self {
        self.setting(VCS_REVISION_KEY, revision)
    }

    /// Parse build info from its JSON representation
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Toolchain version with the `rustc`/`v` marker stripped.
    ///
    /// Not guaranteed to be a semantic version.
    #[must_use]
    pub fn toolchain_version(&self) -> &str {
        let trimmed = self.toolchain.trim();
        let rest = trimmed
            .strip_prefix(TOOLCHAIN_MARKER)
            .map_or(trimmed, str::trim_start);
        rest.strip_prefix('v').unwrap_or(rest)
    }

    /// Version of the named dependency, matched ASCII case-insensitively.
    ///
    /// Returns an empty string if the dependency was not compiled in.
    #[must_use]
    pub fn dep_version(&self, name: &str) -> &str {
        self.dependencies
            .iter()
            .find(|d| d.name.eq_ignore_ascii_case(name))
            .map_or("", |d| d.version.as_str())
    }

    /// VCS revision the binary was built from, empty if unknown.
    ///
    /// The setting key is matched ASCII case-insensitively.
    #[must_use]
    pub fn vcs_revision(&self) -> &str {
        self.settings
            .iter()
            .find(|s| s.key.eq_ignore_ascii_case(VCS_REVISION_KEY))
            .map_or("", |s| s.value.as_str())
    }
}
