//! Version output parsing with regex extraction.

use crate::ProbeError;
use regex::Regex;
use semver::Version;
use std::sync::OnceLock;

fn version_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+)\.(\d+)\.(\d+)").expect("Invalid regex pattern"))
}

/// Parse a semantic version from CLI output.
///
/// Handles the shapes the probed tools print:
///
/// - `v18.17.0` (node) -> 18.17.0
/// - `git version 2.43.0` -> 2.43.0
/// - `openjdk version "17.0.9" 2023-10-17` -> 17.0.9
/// - `2.11.3` (appium) -> 2.11.3
pub(crate) fn parse_version(output: &str) -> Result<Version, ProbeError> {
    let caps = version_regex()
        .captures(output)
        .ok_or(ProbeError::InvalidOutput)?;
    let matched = caps.get(0).ok_or(ProbeError::InvalidOutput)?;
    Version::parse(matched.as_str()).map_err(|_| ProbeError::InvalidOutput)
}

/// First non-empty line of `output`, trimmed.
pub(crate) fn first_line(output: &str) -> Option<&str> {
    output.lines().map(str::trim).find(|line| !line.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_node_version() {
        assert_eq!(parse_version("v18.17.0\n").unwrap(), Version::new(18, 17, 0));
    }

    #[test]
    fn test_parse_git_version() {
        assert_eq!(
            parse_version("git version 2.43.0").unwrap(),
            Version::new(2, 43, 0)
        );
    }

    #[test]
    fn test_parse_java_version() {
        let output = "openjdk version \"17.0.9\" 2023-10-17\nOpenJDK Runtime Environment";
        assert_eq!(parse_version(output).unwrap(), Version::new(17, 0, 9));
    }

    #[test]
    fn test_parse_version_no_match() {
        assert!(matches!(
            parse_version("no version here"),
            Err(ProbeError::InvalidOutput)
        ));
    }

    #[test]
    fn test_parse_version_incomplete() {
        assert!(matches!(
            parse_version("Xcode 15.2"),
            Err(ProbeError::InvalidOutput)
        ));
    }

    #[test]
    fn test_first_line_skips_blank_lines() {
        assert_eq!(first_line("\n\n  Xcode 15.2\nBuild version 15C500b"), Some("Xcode 15.2"));
        assert_eq!(first_line("   \n"), None);
        assert_eq!(first_line(""), None);
    }
}
