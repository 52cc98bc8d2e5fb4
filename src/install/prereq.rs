//! Prerequisite checks before anything is installed.
//!
//! Node.js and npm must both answer their version queries. A Node.js
//! older than the configured minimum is reported as a version mismatch;
//! the wizard lets the user decide whether to continue.

use crate::detect::detect_command;
use crate::install::{CommandRunner, InstallError};
use crate::options::WizardOptions;
use crate::Tool;
use regex::Regex;
use std::sync::OnceLock;

/// Where Node.js (and npm with it) can be downloaded.
pub const NODE_INSTALL_URL: &str = "https://nodejs.org";

/// A Node.js runtime that answered `node --version`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRuntime {
    /// Version string as printed (e.g. `v20.11.1`).
    pub raw: String,
    /// Major version number.
    pub major: u64,
}

fn major_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"v?(\d+)\.(\d+)").expect("Invalid version regex"))
}

/// Extract the major version from `node --version` output.
pub(crate) fn node_major(raw: &str) -> Option<u64> {
    major_regex()
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

fn node_missing() -> InstallError {
    InstallError::PrerequisiteMissing {
        name: Tool::Node.display_name().to_string(),
        install_url: Some(NODE_INSTALL_URL.to_string()),
        fix: format!("Install Node.js LTS from {}", NODE_INSTALL_URL),
    }
}

/// Probe the Node.js runtime without judging its version.
pub async fn probe_node<C: CommandRunner>(
    runner: &C,
    options: &WizardOptions,
) -> Result<NodeRuntime, InstallError> {
    let status = detect_command(
        runner,
        Tool::Node.executable_name(),
        Tool::Node.version_args(),
        options.probe_timeout,
    )
    .await;
    let raw = status.summary().ok_or_else(node_missing)?.to_string();
    // Unparseable output is treated as missing.
    let major = node_major(&raw).ok_or_else(node_missing)?;
    Ok(NodeRuntime { raw, major })
}

/// Check that Node.js is installed and at least the configured minimum major.
///
/// On a version below the minimum this returns
/// [`InstallError::PrerequisiteVersionMismatch`] with the found version.
pub async fn check_node<C: CommandRunner>(
    runner: &C,
    options: &WizardOptions,
) -> Result<NodeRuntime, InstallError> {
    let node = probe_node(runner, options).await?;
    if node.major < options.minimum_node_major {
        return Err(InstallError::PrerequisiteVersionMismatch {
            name: Tool::Node.display_name().to_string(),
            required: format!("{}+", options.minimum_node_major),
            found: node.raw,
            fix: format!(
                "Upgrade Node.js to version {}+ from {}",
                options.minimum_node_major, NODE_INSTALL_URL
            ),
        });
    }
    Ok(node)
}

/// Check that npm answers its version query; returns the printed version.
pub async fn check_npm<C: CommandRunner>(
    runner: &C,
    options: &WizardOptions,
) -> Result<String, InstallError> {
    let status = detect_command(
        runner,
        &options.npm_program,
        Tool::Npm.version_args(),
        options.probe_timeout,
    )
    .await;
    status
        .summary()
        .map(str::to_string)
        .ok_or_else(|| InstallError::PrerequisiteMissing {
            name: Tool::Npm.display_name().to_string(),
            install_url: Some(NODE_INSTALL_URL.to_string()),
            fix: "npm ships with Node.js; reinstall Node.js LTS".to_string(),
        })
}
