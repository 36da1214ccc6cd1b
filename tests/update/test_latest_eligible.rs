//! Tests for picking the eligible update out of a version list.

use kodegen_tools_version::{ChannelFlags, CurrentVersion, latest_eligible, latest_stable};

fn versions(list: &[&str]) -> Vec<String> {
    list.iter().map(|v| v.to_string()).collect()
}

fn current(v: &str) -> CurrentVersion {
    CurrentVersion::new(v).unwrap()
}

#[test]
fn test_stable_channel_picks_highest_release() {
    let mut list = versions(&["v1.0.0", "v1.2.0", "v1.1.0-beta"]);
    let latest = latest_eligible(&mut list, &current("v1.0.0"), ChannelFlags::default());
    assert_eq!(latest.as_deref(), Some("v1.2.0"));
    // Sorted in place, highest first.
    assert_eq!(list, ["v1.2.0", "v1.1.0-beta", "v1.0.0"]);
}

#[test]
fn test_prerelease_skipped_without_opt_in() {
    let mut list = versions(&["v1.0.0", "v2.0.0-rc.1", "v1.5.0-beta.2", "v1.1.0"]);
    let latest = latest_eligible(&mut list, &current("v1.0.0"), ChannelFlags::default());
    assert_eq!(latest.as_deref(), Some("v1.1.0"));
}

#[test]
fn test_candidate_channel_opt_in() {
    let mut list = versions(&["v1.0.0", "v2.0.0-rc.1", "v2.0.0-beta.3", "v1.1.0"]);
    let channels = ChannelFlags {
        allow_candidate: true,
        ..ChannelFlags::default()
    };
    let latest = latest_eligible(&mut list, &current("v1.0.0"), channels);
    assert_eq!(latest.as_deref(), Some("v2.0.0-rc.1"));
}

#[test]
fn test_beta_and_alpha_channels() {
    let list = versions(&["v3.0.0-alpha.1", "v2.1.0-beta", "v2.0.0"]);

    let beta = ChannelFlags {
        allow_beta: true,
        ..ChannelFlags::default()
    };
    let latest = latest_eligible(&mut list.clone(), &current("v2.0.0"), beta);
    assert_eq!(latest.as_deref(), Some("v2.1.0-beta"));

    let latest = latest_eligible(&mut list.clone(), &current("v2.0.0"), ChannelFlags::all());
    assert_eq!(latest.as_deref(), Some("v3.0.0-alpha.1"));
}

#[test]
fn test_unmarked_prerelease_is_eligible() {
    let mut list = versions(&["v1.1.0-dev.4", "v1.0.0"]);
    let latest = latest_eligible(&mut list, &current("v1.0.0"), ChannelFlags::default());
    assert_eq!(latest.as_deref(), Some("v1.1.0-dev.4"));
}

#[test]
fn test_no_update_when_current_is_newest() {
    let mut list = versions(&["v1.0.0", "v0.9.0", "v1.0.0+rebuild"]);
    assert_eq!(
        latest_eligible(&mut list, &current("v1.0.0"), ChannelFlags::all()),
        None
    );
}

#[test]
fn test_prerelease_current_sees_its_release() {
    let mut list = versions(&["v1.9.0", "v1.9.0-alpha"]);
    let latest = latest_eligible(&mut list, &current("v1.9.0-alpha+meta"), ChannelFlags::default());
    assert_eq!(latest.as_deref(), Some("v1.9.0"));
}

#[test]
fn test_empty_and_invalid_lists() {
    let mut empty: Vec<String> = Vec::new();
    assert_eq!(
        latest_eligible(&mut empty, &current("v1.0.0"), ChannelFlags::all()),
        None
    );

    let mut junk = versions(&["latest", "1.2-alpha", "v9.9.9.9"]);
    assert_eq!(
        latest_eligible(&mut junk, &current("v0.0.1"), ChannelFlags::all()),
        None
    );
}

#[test]
fn test_latest_stable_ignores_current() {
    let mut list = versions(&["v0.1.0", "v0.3.0-rc.1", "junk", "v0.2.0"]);
    assert_eq!(latest_stable(&mut list).as_deref(), Some("v0.2.0"));

    let mut prereleases = versions(&["v1.0.0-alpha", "v1.0.0-beta"]);
    assert_eq!(latest_stable(&mut prereleases), None);
}

#[test]
fn test_marker_inside_word_is_not_a_channel() {
    let mut list = versions(&["v1.1.0-search.1", "v1.0.0"]);
    let latest = latest_eligible(&mut list, &current("v1.0.0"), ChannelFlags::default());
    assert_eq!(latest.as_deref(), Some("v1.1.0-search.1"));
}
