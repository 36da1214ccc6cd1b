//! Build script for kodegen-version.
//!
//! Sets build-time environment variables read by the binary:
//! - KODEGEN_RUSTC_VERSION: `rustc --version` of the compiling toolchain
//! - KODEGEN_VCS_REVISION: full git commit hash, unset outside a checkout

use std::env;
use std::process::Command;

fn command_output(program: &str, args: &[&str]) -> Option<String> {
    Command::new(program)
        .args(args)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn main() {
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    if let Some(toolchain) = command_output(&rustc, &["--version"]) {
        println!("cargo:rustc-env=KODEGEN_RUSTC_VERSION={toolchain}");
    }

    if let Some(revision) = command_output("git", &["rev-parse", "HEAD"]) {
        println!("cargo:rustc-env=KODEGEN_VCS_REVISION={revision}");
    }

    println!("cargo:rerun-if-env-changed=RUSTC");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/heads/");
}
