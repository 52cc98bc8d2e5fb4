//! # appium-setup
//!
//! Interactive installer for the Appium mobile automation toolchain.
//!
//! The wizard detects the host platform, checks Node.js and npm, installs
//! the Appium server at a chosen version, then installs the drivers and
//! plugins the user selects from numbered menus. Failed items are
//! collected and reported at the end with manual install hints, followed
//! by Android and iOS environment checks.
//!
//! ## Features
//!
//! - [`Prompter`] numbered-menu engine over any `BufRead`/`Write` pair
//! - [`classify`] ordered category rules for driver and plugin names
//! - [`plan_install`] one install command per category
//! - [`CommandRunner`] seam between the wizard and subprocesses
//! - [`Wizard`] the whole run, from main menu to next steps
//!
//! ## Example
//!
//! ```rust,no_run
//! use appium_setup::{SystemRunner, Wizard, WizardOptions};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let stdin = std::io::stdin();
//!     let mut wizard = Wizard::new(
//!         stdin.lock(),
//!         std::io::stdout(),
//!         SystemRunner::new(),
//!         WizardOptions::default(),
//!     );
//!     match wizard.run().await {
//!         Ok(outcome) => println!("{:?}", outcome),
//!         Err(e) => println!("\n❌ Error: {}", e),
//!     }
//! }
//! ```

mod catalog;
mod classify;
mod detect;
mod detection;
mod docs;
mod environment;
mod error;
mod install;
mod menu;
mod options;
mod platform;
mod report;
mod requirements;
mod session;
mod status;
mod system_info;
mod tool;
mod wizard;

pub mod cli;
pub mod logging;
pub mod terminal;

#[cfg(test)]
mod testing;

pub use catalog::{
    canonical_name, fetch_extensions, fetch_versions, lts_label, parse_extension_list,
    parse_npm_versions, resolve_version_choice, version_menu, Catalog, CatalogSource,
    ExtensionKind, FallbackReason, DEFAULT_DRIVERS, DEFAULT_PLUGINS, FALLBACK_VERSIONS,
    LATEST_LABEL, LATEST_MARKER, LIVE_NAME_PREFIX, LTS_MARKER,
};
pub use classify::{
    classify, classify_driver, classify_plugin, Category, DriverCategory, PluginCategory,
    DRIVER_RULES, PLUGIN_RULES,
};
pub use detect::{detect_command, detect_tool};
pub use docs::DocSection;
pub use environment::Environment;
pub use error::WizardError;
pub use install::{
    check_node, check_npm, execute_plan, plan_install, probe_node, toolchain_command,
    CommandRunner, InstallAction, InstallError, InstallPlan, NodeRuntime, StructuredCommand,
    SystemRunner,
};
pub use menu::{parse_choice, parse_choices, Prompter};
pub use options::WizardOptions;
pub use platform::Platform;
pub use report::{print_failure_summary, remediation_hint, verify};
pub use requirements::{
    check_android, check_ios, has_connected_device, has_ios_simulator, show_next_steps,
    AndroidRequirements, IosRequirements,
};
pub use session::{InstallAttempt, Session};
pub use status::{ProbeError, ToolStatus};
pub use system_info::{host_addresses, network_lines, show_system_information, InterfaceAddress};
pub use tool::Tool;
pub use wizard::{AbortReason, MainMenuChoice, RunOutcome, Stage, Wizard};
