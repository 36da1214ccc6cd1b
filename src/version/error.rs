//! Version initialization errors

use thiserror::Error;

/// The application version could not be established
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidVersionError {
    /// Version string is not semver compliant
    #[error("application version '{version}' is not semver compliant")]
    NotSemver { version: String },

    /// The process-wide version was already set
    #[error("application version already initialized as '{existing}'")]
    AlreadyInitialized { existing: String },
}
