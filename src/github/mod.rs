//! GitHub API operations module
//!
//! Release and tag listings via the octocrab library.

pub mod client;
pub mod error;
pub mod util;

pub use client::{GitHubClient, GitHubClientBuilder};
pub use error::{GitHubError, GitHubResult};
pub use util::spawn_task;

pub(crate) mod get_latest_release;
pub(crate) mod list_releases;
pub(crate) mod list_tags;
