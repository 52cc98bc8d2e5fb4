//! Installing the toolchain, drivers and plugins.
//!
//! Each selected item is classified, turned into an [`InstallPlan`] and
//! executed through a [`CommandRunner`]. Failures come back as
//! [`InstallError`] values for the caller to record; nothing here retries
//! or rolls back.
//!
//! # Example
//!
//! ```rust
//! use appium_setup::{classify, plan_install, ExtensionKind, WizardOptions};
//!
//! let name = "uiautomator2";
//! let plan = plan_install(name, classify(name, ExtensionKind::Driver), &WizardOptions::default());
//! assert_eq!(
//!     plan.command().map(|c| c.to_string()).as_deref(),
//!     Some("appium driver install uiautomator2")
//! );
//! ```

mod errors;
mod executor;
mod plan;
mod prereq;
mod types;

pub use errors::InstallError;
pub use executor::{execute_plan, CommandRunner, SystemRunner};
pub use plan::{plan_install, toolchain_command};
pub use prereq::{check_node, check_npm, probe_node, NodeRuntime, NODE_INSTALL_URL};
pub use types::{InstallAction, InstallPlan, StructuredCommand};
