//! Wizard configuration.
//!
//! This module provides the [`WizardOptions`] struct: which programs to
//! invoke, which Appium release counts as LTS, and how long best-effort
//! probes may run.

use std::time::Duration;

/// Configuration options for a wizard run.
///
/// # Default Behavior
///
/// Programs are looked up by their plain names (`appium`, `npm`). Version
/// probes are bounded by 10 seconds and catalog queries by 60 seconds,
/// since `appium driver list` may need to reach the npm registry.
///
/// # Example
///
/// ```rust
/// use appium_setup::WizardOptions;
/// use std::time::Duration;
///
/// let opts = WizardOptions {
///     probe_timeout: Duration::from_secs(3),
///     offline: true,
///     ..Default::default()
/// };
/// assert_eq!(opts.lts_version, "3.0.0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardOptions {
    /// Program used for `appium ...` commands.
    ///
    /// Default: `"appium"`
    pub appium_program: String,

    /// Program used for `npm ...` commands.
    ///
    /// Default: `"npm"`
    pub npm_program: String,

    /// Version pinned by the `(LTS)` entry of the version menu.
    ///
    /// Default: `"3.0.0"`
    pub lts_version: String,

    /// Lowest Node.js major version accepted without a confirmation prompt.
    ///
    /// Default: `16`
    pub minimum_node_major: u64,

    /// Timeout for version probes and verification queries.
    ///
    /// Default: 10 seconds
    pub probe_timeout: Duration,

    /// Timeout for the live driver, plugin and version catalog queries.
    ///
    /// Default: 60 seconds
    pub catalog_timeout: Duration,

    /// Skip live catalog queries and use the built-in lists.
    ///
    /// Default: `false`
    pub offline: bool,
}

impl Default for WizardOptions {
    fn default() -> Self {
        Self {
            appium_program: "appium".to_string(),
            npm_program: "npm".to_string(),
            lts_version: "3.0.0".to_string(),
            minimum_node_major: 16,
            probe_timeout: Duration::from_secs(10),
            catalog_timeout: Duration::from_secs(60),
            offline: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = WizardOptions::default();
        assert_eq!(opts.appium_program, "appium");
        assert_eq!(opts.npm_program, "npm");
        assert_eq!(opts.lts_version, "3.0.0");
        assert_eq!(opts.minimum_node_major, 16);
        assert_eq!(opts.probe_timeout, Duration::from_secs(10));
        assert_eq!(opts.catalog_timeout, Duration::from_secs(60));
        assert!(!opts.offline);
    }

    #[test]
    fn test_struct_update() {
        let opts = WizardOptions {
            lts_version: "2.19.0".to_string(),
            ..Default::default()
        };
        assert_eq!(opts.lts_version, "2.19.0");
        assert_eq!(opts.minimum_node_major, 16);
    }
}
