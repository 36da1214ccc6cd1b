// Update check CLI
//
// Reads an update configuration (TOML) from the first argument or
// KODEGEN_VERSION_CONFIG and reports whether a newer release of the
// configured repository exists.

use anyhow::{Context, Result};
use kodegen_tools_version::{BuildInfo, GitHubClient, UpdateChecker, UpdateConfig, version};
use log::info;

const CONFIG_ENV: &str = "KODEGEN_VERSION_CONFIG";

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(CONFIG_ENV).ok())
        .with_context(|| format!("usage: kodegen-version <CONFIG.toml> (or set {CONFIG_ENV})"))?;
    let config = UpdateConfig::from_file(&config_path)
        .with_context(|| format!("Failed to load update config from {config_path}"))?;

    let mut build_info = BuildInfo::new(option_env!("KODEGEN_RUSTC_VERSION").unwrap_or_default());
    if let Some(revision) = option_env!("KODEGEN_VCS_REVISION") {
        build_info = build_info.vcs_revision_setting(revision);
    }
    let current = version::init(concat!("v", env!("CARGO_PKG_VERSION")), build_info)
        .context("Application version is not semver compliant")?;
    info!(
        "running {} (revision '{}')",
        current.version(),
        current.build_info().vcs_revision()
    );

    let client = GitHubClient::new().context("Failed to build GitHub client")?;
    let checker = UpdateChecker::new(client, config, current.clone());

    let status = checker.check().await.context("Update check failed")?;
    println!("{status}");

    Ok(())
}
