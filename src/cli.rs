//! Command-line arguments for the `appium-setup` binary.

use crate::options::WizardOptions;
use clap::Parser;
use std::time::Duration;

/// Appium Setup - interactive installer for Appium, its drivers and plugins
///
/// Walks through installing the Appium server, drivers and plugins, then
/// checks the Android and iOS automation environment.
#[derive(Parser, Debug)]
#[command(name = "appium-setup")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase diagnostic output on stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Use the built-in version, driver and plugin lists without querying
    #[arg(long, env = "APPIUM_SETUP_OFFLINE")]
    pub offline: bool,

    /// Program used for appium commands
    #[arg(long, env = "APPIUM_SETUP_APPIUM", default_value = "appium")]
    pub appium: String,

    /// Program used for npm commands
    #[arg(long, env = "APPIUM_SETUP_NPM", default_value = "npm")]
    pub npm: String,

    /// Appium version installed by the "(LTS)" menu entry
    #[arg(long, env = "APPIUM_SETUP_LTS", default_value = "3.0.0")]
    pub lts_version: String,

    /// Seconds to wait for each version probe
    #[arg(long, env = "APPIUM_SETUP_PROBE_TIMEOUT", default_value_t = 10)]
    pub probe_timeout: u64,

    /// Seconds to wait for each catalog query
    #[arg(long, env = "APPIUM_SETUP_CATALOG_TIMEOUT", default_value_t = 60)]
    pub catalog_timeout: u64,
}

impl Cli {
    /// Wizard options selected by these arguments.
    pub fn options(&self) -> WizardOptions {
        WizardOptions {
            appium_program: self.appium.clone(),
            npm_program: self.npm.clone(),
            lts_version: self.lts_version.clone(),
            probe_timeout: Duration::from_secs(self.probe_timeout),
            catalog_timeout: Duration::from_secs(self.catalog_timeout),
            offline: self.offline,
            ..WizardOptions::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_map_to_options() {
        let cli = Cli::try_parse_from([
            "appium-setup",
            "-vv",
            "--offline",
            "--npm",
            "pnpm",
            "--lts-version",
            "2.19.0",
            "--probe-timeout",
            "3",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let opts = cli.options();
        assert!(opts.offline);
        assert_eq!(opts.npm_program, "pnpm");
        assert_eq!(opts.lts_version, "2.19.0");
        assert_eq!(opts.probe_timeout, Duration::from_secs(3));
        assert_eq!(opts.minimum_node_major, 16);
    }
}
