//! Per-run session state.

use crate::install::InstallError;
use crate::Platform;

/// The outcome of one install attempt.
#[derive(Debug)]
pub struct InstallAttempt {
    /// Canonical item name, or `Appium <version>` for the toolchain.
    pub label: String,
    /// What happened.
    pub result: Result<(), InstallError>,
}

/// Everything the wizard learns during one run. Lives in memory only.
#[derive(Debug)]
pub struct Session {
    /// Platform chosen by the user.
    pub platform: Platform,
    /// Resolved Appium version (`latest`, the LTS pin, or a release).
    pub toolchain_version: Option<String>,
    /// Canonical names of the selected drivers, in selection order.
    pub selected_drivers: Vec<String>,
    /// Canonical names of the selected plugin-menu items, in selection order.
    pub selected_plugins: Vec<String>,
    attempts: Vec<InstallAttempt>,
}

impl Session {
    /// Start a session for a platform.
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            toolchain_version: None,
            selected_drivers: Vec::new(),
            selected_plugins: Vec::new(),
            attempts: Vec::new(),
        }
    }

    /// Append an attempt. The log is never reordered or deduplicated.
    pub fn record(&mut self, label: impl Into<String>, result: Result<(), InstallError>) {
        let label = label.into();
        if let Err(error) = &result {
            tracing::debug!(item = %label, %error, "install failed");
        }
        self.attempts.push(InstallAttempt { label, result });
    }

    /// All attempts in the order they were made.
    pub fn attempts(&self) -> &[InstallAttempt] {
        &self.attempts
    }

    /// Labels of the failed attempts, in attempt order.
    pub fn failures(&self) -> Vec<&str> {
        self.attempts
            .iter()
            .filter(|a| a.result.is_err())
            .map(|a| a.label.as_str())
            .collect()
    }
}
