//! `kodegen_tools_version` - application version introspection and update checks
//!
//! This library parses and compares the running application's semantic
//! version (prerelease label, build metadata, build provenance) and checks a
//! GitHub repository's releases or tags for a newer version. Release data is
//! fetched through the [`ReleaseSource`] abstraction; [`GitHubClient`] is the
//! octocrab-backed implementation.

// Module declarations
pub mod github;
pub mod runtime;
pub mod update;
pub mod version;

// Re-export runtime types
pub use runtime::{AsyncTask, TaskCancelled};

// Re-export GitHub client types
pub use github::{GitHubClient, GitHubClientBuilder, GitHubError, GitHubResult};

// Re-export version model
pub use version::{BuildInfo, CurrentVersion, InvalidVersionError, UNVERSIONED};

// Re-export update checking
pub use update::{
    ChannelFlags, ReleaseSource, ReleaseTag, RepoTag, UpdateChecker, UpdateConfig, UpdateError,
    UpdateResult, UpdateStatus, VersionSource, latest_eligible, latest_stable,
};
