//! Parsing of the live catalog queries.

use super::tables::{LATEST_LABEL, LATEST_MARKER, LTS_MARKER};
use crate::ProbeError;
use semver::Version;
use serde::Deserialize;

/// Name prefix a live `appium <kind> list` entry must carry to be offered.
pub const LIVE_NAME_PREFIX: &str = "appium-";

/// How many of the most recent published versions are considered.
const RECENT_WINDOW: usize = 10;

/// How many of those are shown after the `latest` and LTS entries.
const SHOWN_VERSIONS: usize = 8;

/// Extract extension names from `appium <kind> list --installed=false` output.
///
/// Takes the first whitespace-delimited token of every line containing an
/// `@` version marker and keeps those starting with [`LIVE_NAME_PREFIX`].
/// The token keeps its `@version` suffix, which npm accepts as a package spec.
///
/// ```rust
/// use appium_setup::parse_extension_list;
///
/// let out = "appium-flutter-driver@2.9.0 [not installed]\n- xcuitest@7.1.0\n";
/// assert_eq!(parse_extension_list(out), vec!["appium-flutter-driver@2.9.0"]);
/// ```
pub fn parse_extension_list(output: &str) -> Vec<String> {
    output
        .lines()
        .filter(|line| line.contains('@'))
        .filter_map(|line| line.split_whitespace().next())
        .filter(|token| token.starts_with(LIVE_NAME_PREFIX))
        .map(str::to_string)
        .collect()
}

/// `npm view <pkg> versions --json` prints an array, or a bare string when
/// only one version exists.
#[derive(Deserialize)]
#[serde(untagged)]
enum NpmVersions {
    Many(Vec<String>),
    One(String),
}

/// Parse `npm view appium versions --json` into the recent versions,
/// newest first.
///
/// Entries that are not valid semver are skipped. At most the last
/// ten published versions are returned.
pub fn parse_npm_versions(json: &str) -> Result<Vec<String>, ProbeError> {
    let parsed: NpmVersions =
        serde_json::from_str(json.trim()).map_err(|_| ProbeError::InvalidOutput)?;
    let all = match parsed {
        NpmVersions::Many(v) => v,
        NpmVersions::One(v) => vec![v],
    };
    let valid: Vec<String> = all
        .into_iter()
        .filter(|v| Version::parse(v).is_ok())
        .collect();
    let start = valid.len().saturating_sub(RECENT_WINDOW);
    Ok(valid[start..].iter().rev().cloned().collect())
}

/// Label used for the LTS entry of the version menu.
pub fn lts_label(lts: &str) -> String {
    format!("{} {}", lts, LTS_MARKER)
}

/// Build the version menu from recent versions (newest first).
pub fn version_menu<S: AsRef<str>>(recent: &[S], lts: &str) -> Vec<String> {
    let mut menu = vec![LATEST_LABEL.to_string(), lts_label(lts)];
    menu.extend(
        recent
            .iter()
            .take(SHOWN_VERSIONS)
            .map(|v| v.as_ref().to_string()),
    );
    menu
}

/// Resolve a version-menu choice to the string passed to npm.
///
/// ```rust
/// use appium_setup::resolve_version_choice;
///
/// assert_eq!(resolve_version_choice("latest (most recent)", "3.0.0"), "latest");
/// assert_eq!(resolve_version_choice("3.0.0 (LTS)", "3.0.0"), "3.0.0");
/// assert_eq!(resolve_version_choice("2.11.2", "3.0.0"), "2.11.2");
/// ```
pub fn resolve_version_choice(choice: &str, lts: &str) -> String {
    if choice.contains(LATEST_MARKER) {
        "latest".to_string()
    } else if choice.contains(LTS_MARKER) {
        lts.to_string()
    } else {
        choice.trim().to_string()
    }
}
