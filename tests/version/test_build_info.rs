//! Tests for injected build provenance.

use kodegen_tools_version::{BuildInfo, CurrentVersion};

#[test]
fn test_toolchain_version_strips_marker() {
    let info = BuildInfo::new("rustc 1.85.0 (4d91de4e4 2025-02-17)");
    assert_eq!(info.toolchain_version(), "1.85.0 (4d91de4e4 2025-02-17)");
    assert_eq!(BuildInfo::new("v1.85.0").toolchain_version(), "1.85.0");
    assert_eq!(BuildInfo::new("1.85.0").toolchain_version(), "1.85.0");
    assert_eq!(BuildInfo::default().toolchain_version(), "");
}

#[test]
fn test_dep_version_case_insensitive() {
    let info = BuildInfo::new("1.85.0")
        .dependency("octocrab", "0.47.1")
        .dependency("Semver", "1.0.26");

    assert_eq!(info.dep_version("OctoCrab"), "0.47.1");
    assert_eq!(info.dep_version("semver"), "1.0.26");
    assert_eq!(info.dep_version("serde"), "");
}

#[test]
fn test_dep_version_folds_ascii_only() {
    let info = BuildInfo::new("1.85.0").dependency("ärger-rs", "0.3.0");

    assert_eq!(info.dep_version("äRGER-RS"), "0.3.0");
    assert_eq!(info.dep_version("ÄRGER-RS"), "");
}

#[test]
fn test_vcs_revision() {
    let info = BuildInfo::new("1.85.0")
        .setting("vcs.modified", "false")
        .vcs_revision_setting("0f1e2d3c");
    assert_eq!(info.vcs_revision(), "0f1e2d3c");

    let shouting = BuildInfo::default().setting("VCS.Revision", "abc123");
    assert_eq!(shouting.vcs_revision(), "abc123");

    assert_eq!(BuildInfo::default().vcs_revision(), "");
}

#[test]
fn test_from_json() {
    let info = BuildInfo::from_json(
        r#"{
            "toolchain": "rustc 1.85.0",
            "dependencies": [{ "name": "tokio", "version": "1.43.0" }],
            "settings": [{ "key": "vcs.revision", "value": "deadbeef" }]
        }"#,
    )
    .unwrap();

    assert_eq!(info.toolchain_version(), "1.85.0");
    assert_eq!(info.dep_version("tokio"), "1.43.0");
    assert_eq!(info.vcs_revision(), "deadbeef");

    let sparse = BuildInfo::from_json(r#"{ "toolchain": "1.80.1" }"#).unwrap();
    assert!(sparse.dependencies.is_empty());
    assert!(BuildInfo::from_json("not json").is_err());
}

#[test]
fn test_attached_to_current_version() {
    let info = BuildInfo::new("1.85.0").vcs_revision_setting("cafe");
    let current = CurrentVersion::with_build_info("v2.0.0", info.clone()).unwrap();
    assert_eq!(current.build_info(), &info);
    assert_eq!(current.build_info().vcs_revision(), "cafe");
}

#[test]
fn test_compiled_toolchain_is_injected() {
    let toolchain = env!("KODEGEN_RUSTC_VERSION");
    assert!(toolchain.starts_with("rustc "));

    let info = BuildInfo::new(toolchain);
    assert!(info.toolchain_version().starts_with(|c: char| c.is_ascii_digit()));
    assert!(CurrentVersion::new(concat!("v", env!("CARGO_PKG_VERSION"))).is_ok());
}
