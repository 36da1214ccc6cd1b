//! Application version model
//!
//! [`CurrentVersion`] holds the validated version of the running binary along
//! with its injected [`BuildInfo`]. Hosts that want a single process-wide
//! version call [`init`] once at startup and read it back with [`current`].

pub mod build_info;
pub mod current;
pub mod error;
pub mod semver;

pub use build_info::{BuildInfo, BuildSetting, Dependency};
pub use current::{CurrentVersion, UNVERSIONED};
pub use error::InvalidVersionError;

use log::debug;
use std::sync::OnceLock;

static CURRENT: OnceLock<CurrentVersion> = OnceLock::new();

/// Validate and install the process-wide application version.
///
/// Fails if `version` is not semver compliant or if a version was already
/// installed. The host decides whether a failure is fatal.
pub fn init(
    version: impl Into<String>,
    build_info: BuildInfo,
) -> Result<&'static CurrentVersion, InvalidVersionError> {
    let candidate = CurrentVersion::with_build_info(version, build_info)?;

    let mut installed = false;
    let current = CURRENT.get_or_init(|| {
        installed = true;
        candidate
    });
    if !installed {
        return Err(InvalidVersionError::AlreadyInitialized {
            existing: current.raw().to_string(),
        });
    }

    debug!("application version initialized as {}", current.raw());
    Ok(current)
}

/// The process-wide application version, if [`init`] succeeded
#[must_use]
pub fn current() -> Option<&'static CurrentVersion> {
    CURRENT.get()
}
