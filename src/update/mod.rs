//! Update checks
//!
//! An [`UpdateChecker`] pulls release or tag names from a [`ReleaseSource`],
//! keeps the semver compliant ones and compares them against the running
//! [`CurrentVersion`](crate::version::CurrentVersion).

pub mod checker;
pub mod config;
pub mod error;
pub mod source;

pub use checker::{UpdateChecker, UpdateStatus, latest_eligible, latest_stable};
pub use config::{ChannelFlags, UpdateConfig, VersionSource};
pub use error::{UpdateError, UpdateResult};
pub use source::{ReleaseSource, ReleaseTag, RepoTag};
