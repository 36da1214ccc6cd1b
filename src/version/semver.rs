//! Semantic version validation, canonicalization and precedence
//!
//! Accepts the `v`-prefixed shapes used for Git tags: `v1`, `v1.2` and
//! `v1.2.3-rc.1+build.5`. The leading `v` is mandatory. Shorthand versions
//! are expanded with zeros but may not carry a prerelease or build suffix.
//! Numeric components are unbounded digit strings; prerelease and build
//! identifier rules are delegated to the `semver` crate.

use semver::{BuildMetadata, Prerelease};
use std::cmp::Ordering;

/// Leading marker every version string must carry.
pub const VERSION_MARKER: char = 'v';

const PRERELEASE_SEPARATOR: char = '-';
const BUILD_SEPARATOR: char = '+';

/// A validated version, borrowing its numeric components from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Parsed<'a> {
    pub major: &'a str,
    pub minor: &'a str,
    pub patch: &'a str,
    pub pre: Prerelease,
    pub build: BuildMetadata,
}

impl Parsed<'_> {
    fn canonical(&self) -> String {
        let mut out = format!(
            "{VERSION_MARKER}{}.{}.{}",
            self.major, self.minor, self.patch
        );
        if !self.pre.is_empty() {
            out.push(PRERELEASE_SEPARATOR);
            out.push_str(self.pre.as_str());
        }
        out
    }
}

/// Parse a version string.
///
/// Returns `None` when the string is not a valid semantic version under the
/// tag rules described in the module docs.
pub(crate) fn parse(s: &str) -> Option<Parsed<'_>> {
    let rest = s.strip_prefix(VERSION_MARKER)?;

    let (rest, build) = match rest.split_once(BUILD_SEPARATOR) {
        Some((head, build)) => (head, Some(build)),
        None => (rest, None),
    };
    let (core, prerelease) = match rest.split_once(PRERELEASE_SEPARATOR) {
        Some((core, pre)) => (core, Some(pre)),
        None => (rest, None),
    };

    let components: Vec<&str> = core.split('.').collect();
    if components.len() > 3 || !components.iter().all(|c| is_numeric_component(c)) {
        return None;
    }
    if components.len() < 3 && (prerelease.is_some() || build.is_some()) {
        return None;
    }

    let pre = match prerelease {
        Some("") => return None,
        Some(pre) => Prerelease::new(pre).ok()?,
        None => Prerelease::EMPTY,
    };
    let build = match build {
        Some("") => return None,
        Some(build) => BuildMetadata::new(build).ok()?,
        None => BuildMetadata::EMPTY,
    };

    Some(Parsed {
        major: components[0],
        minor: components.get(1).copied().unwrap_or("0"),
        patch: components.get(2).copied().unwrap_or("0"),
        pre,
        build,
    })
}

fn is_numeric_component(c: &str) -> bool {
    !c.is_empty()
        && c.bytes().all(|b| b.is_ascii_digit())
        && (c == "0" || !c.starts_with('0'))
}

/// Numeric order of two digit strings without leading zeros.
fn compare_numeric(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Precedence order: build metadata never participates.
pub(crate) fn precedence(a: &Parsed<'_>, b: &Parsed<'_>) -> Ordering {
    compare_numeric(a.major, b.major)
        .then_with(|| compare_numeric(a.minor, b.minor))
        .then_with(|| compare_numeric(a.patch, b.patch))
        .then_with(|| a.pre.cmp(&b.pre))
}

/// Returns true if `s` is a valid semantic version.
#[must_use]
pub fn is_valid(s: &str) -> bool {
    parse(s).is_some()
}

/// Canonical form of `s`: `vMAJOR.MINOR.PATCH[-PRERELEASE]`.
///
/// Build metadata is dropped. Returns an empty string for invalid input.
#[must_use]
pub fn canonical(s: &str) -> String {
    parse(s).map(|v| v.canonical()).unwrap_or_default()
}

/// Major version prefix, e.g. `v2` for `v2.1.0`. Empty for invalid input.
#[must_use]
pub fn major(s: &str) -> String {
    parse(s)
        .map(|v| format!("{VERSION_MARKER}{}", v.major))
        .unwrap_or_default()
}

/// Major.minor prefix, e.g. `v2.1` for `v2.1.0`. Empty for invalid input.
#[must_use]
pub fn major_minor(s: &str) -> String {
    parse(s)
        .map(|v| format!("{VERSION_MARKER}{}.{}", v.major, v.minor))
        .unwrap_or_default()
}

/// Prerelease label without its `-` separator. Empty if none or invalid.
#[must_use]
pub fn prerelease(s: &str) -> String {
    parse(s).map(|v| v.pre.to_string()).unwrap_or_default()
}

/// Build metadata without its `+` separator. Empty if none or invalid.
#[must_use]
pub fn build(s: &str) -> String {
    parse(s).map(|v| v.build.to_string()).unwrap_or_default()
}

/// Compare two version strings by precedence.
///
/// An invalid version is considered less than any valid one, and two invalid
/// versions compare equal.
#[must_use]
pub fn compare(a: &str, b: &str) -> Ordering {
    match (parse(a), parse(b)) {
        (Some(a), Some(b)) => precedence(&a, &b),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

/// Sort ascending by precedence. Equal-precedence entries fall back to a
/// plain string comparison so the result is deterministic.
pub fn sort<S: AsRef<str>>(list: &mut [S]) {
    list.sort_by(|a, b| {
        let (a, b) = (a.as_ref(), b.as_ref());
        compare(a, b).then_with(|| a.cmp(b))
    });
}

/// Sort descending by precedence, highest version first.
pub fn sort_descending<S: AsRef<str>>(list: &mut [S]) {
    list.sort_by(|a, b| {
        let (a, b) = (a.as_ref(), b.as_ref());
        compare(b, a).then_with(|| b.cmp(a))
    });
}
