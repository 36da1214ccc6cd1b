//! The running application's version

use super::build_info::BuildInfo;
use super::error::InvalidVersionError;
use super::semver;
use std::cmp::Ordering;

/// Placeholder used by development builds that were never stamped with a
/// release version.
pub const UNVERSIONED: &str = "v0.0.0+unversioned";

/// Validated version of the running application plus its build provenance.
///
/// Construction fails on an invalid version string, so every accessor can
/// assume a valid baseline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentVersion {
    raw: String,
    build_info: BuildInfo,
}

impl CurrentVersion {
    /// Validate `version` and build a `CurrentVersion` without build info
    pub fn new(version: impl Into<String>) -> Result<Self, InvalidVersionError> {
        Self::with_build_info(version, BuildInfo::default())
    }

    /// Validate `version` and attach the given build provenance
    pub fn with_build_info(
        version: impl Into<String>,
        build_info: BuildInfo,
    ) -> Result<Self, InvalidVersionError> {
        let raw = version.into();
        if !semver::is_valid(&raw) {
            return Err(InvalidVersionError::NotSemver { version: raw });
        }
        Ok(Self { raw, build_info })
    }

    /// The default development version, `v0.0.0+unversioned`
    #[must_use]
    pub fn unversioned() -> Self {
        Self {
            raw: UNVERSIONED.to_string(),
            build_info: BuildInfo::default(),
        }
    }

    /// True if this is the default development version
    #[must_use]
    pub fn is_unversioned(&self) -> bool {
        self.raw == UNVERSIONED
    }

    /// The version string as it was supplied
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Canonical `vMAJOR.MINOR.PATCH[-PRERELEASE]` form
    #[must_use]
    pub fn version(&self) -> String {
        semver::canonical(&self.raw)
    }

    /// Prerelease label without the `-` separator
    #[must_use]
    pub fn prerelease(&self) -> String {
        semver::prerelease(&self.raw)
    }

    /// Build metadata without the `+` separator
    #[must_use]
    pub fn build(&self) -> String {
        semver::build(&self.raw)
    }

    #[must_use]
    pub fn build_info(&self) -> &BuildInfo {
        &self.build_info
    }

    /// Precedence of this version relative to `other`.
    ///
    /// An invalid `other` always compares lower.
    #[must_use]
    pub fn compare(&self, other: &str) -> Ordering {
        semver::compare(&self.raw, other)
    }

    #[must_use]
    pub fn greater_than(&self, other: &str) -> bool {
        self.compare(other) == Ordering::Greater
    }

    #[must_use]
    pub fn greater_than_equal(&self, other: &str) -> bool {
        self.compare(other) != Ordering::Less
    }

    #[must_use]
    pub fn less_than(&self, other: &str) -> bool {
        self.compare(other) == Ordering::Less
    }

    #[must_use]
    pub fn less_than_equal(&self, other: &str) -> bool {
        self.compare(other) != Ordering::Greater
    }

    #[must_use]
    pub fn equal(&self, other: &str) -> bool {
        self.compare(other) == Ordering::Equal
    }

    /// True if `latest` is a valid version with higher precedence than this
    /// one. Malformed input yields `false`, never an error.
    #[must_use]
    pub fn update(&self, latest: &str) -> bool {
        semver::is_valid(latest) && self.less_than(latest)
    }
}

impl Default for CurrentVersion {
    fn default() -> Self {
        Self::unversioned()
    }
}

impl std::fmt::Display for CurrentVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.version())
    }
}
