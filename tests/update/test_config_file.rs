//! Tests for loading update configuration from TOML.

use kodegen_tools_version::{ChannelFlags, UpdateConfig, UpdateError, VersionSource};
use std::io::Write;

#[test]
fn test_full_config() {
    let config = UpdateConfig::from_toml_str(
        r#"
        owner = "cyrup-ai"
        repo = "kodegen"
        source = "releases"

        [channels]
        allow_candidate = true
        allow_alpha = true
        "#,
    )
    .unwrap();

    assert_eq!(config.owner, "cyrup-ai");
    assert_eq!(config.repo, "kodegen");
    assert_eq!(config.source, VersionSource::Releases);
    assert_eq!(
        config.channels,
        ChannelFlags {
            allow_candidate: true,
            allow_beta: false,
            allow_alpha: true,
        }
    );
}

#[test]
fn test_defaults_applied() {
    let config = UpdateConfig::from_toml_str("owner = \"o\"\nrepo = \"r\"\n").unwrap();
    assert_eq!(config, UpdateConfig::new("o", "r"));
}

#[test]
fn test_unknown_source_is_config_error() {
    let err = UpdateConfig::from_toml_str(
        "owner = \"o\"\nrepo = \"r\"\nsource = \"nightly\"\n",
    )
    .unwrap_err();
    assert!(matches!(err, UpdateError::Config(_)));
    assert!(err.to_string().contains("nightly"));
}

#[test]
fn test_missing_repository_is_config_error() {
    let err = UpdateConfig::from_toml_str("owner = \"o\"\n").unwrap_err();
    assert!(matches!(err, UpdateError::Config(_)));
}

#[test]
fn test_disabled_source_needs_no_repository() {
    let config = UpdateConfig::from_toml_str("source = \"none\"\n").unwrap();
    assert_eq!(config.source, VersionSource::None);
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "owner = \"rust-lang\"\nrepo = \"rust\"\nsource = \"tags\"").unwrap();

    let config = UpdateConfig::from_file(file.path()).unwrap();
    assert_eq!(config.owner, "rust-lang");
    assert_eq!(config.source, VersionSource::Tags);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = UpdateConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, UpdateError::Config(msg) if msg.starts_with("failed to read")));
}
