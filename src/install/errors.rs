//! Why an install step or a prerequisite check failed.
//!
//! None of these abort the wizard on their own: install failures are
//! recorded in the session, prerequisite failures decide whether the
//! requirements check passes.

use thiserror::Error;

/// Failure of one install command or prerequisite check.
///
/// Every variant carries a `fix` line suitable for printing next to the
/// failure.
///
/// # Example
///
/// ```rust
/// use appium_setup::InstallError;
///
/// fn report(error: &InstallError) -> String {
///     format!("{} ({})", error, error.fix_suggestion())
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InstallError {
    /// `node` or `npm` is absent.
    #[error("Missing prerequisite: {name}")]
    PrerequisiteMissing {
        /// Display name, e.g. "Node.js" or "NPM".
        name: String,
        /// Download page, when there is one.
        install_url: Option<String>,
        /// How to resolve it.
        fix: String,
    },

    /// Node.js answered but its major version is below the minimum.
    #[error("Prerequisite version mismatch: {name} requires {required}, found {found}")]
    PrerequisiteVersionMismatch {
        /// Display name.
        name: String,
        /// Minimum, rendered like "16+".
        required: String,
        /// Raw `--version` output.
        found: String,
        /// How to resolve it.
        fix: String,
    },

    /// The install program (npm, appium, brew) is not on PATH.
    #[error("Command not found: {program}")]
    CommandNotFound {
        /// Program name as configured.
        program: String,
        /// How to resolve it.
        fix: String,
    },

    /// The OS refused to spawn the install program.
    #[error("Permission denied: {message}")]
    PermissionDenied {
        /// OS error text.
        message: String,
        /// How to resolve it.
        fix: String,
    },

    /// The install command ran and exited non-zero.
    #[error("Installation failed: {message}")]
    InstallerFailed {
        /// Rendered command line and exit status.
        message: String,
        /// `None` when killed by a signal.
        exit_code: Option<i32>,
        /// How to resolve it.
        fix: String,
    },
}

impl InstallError {
    /// The `fix` line of any variant.
    pub fn fix_suggestion(&self) -> &str {
        match self {
            Self::PrerequisiteMissing { fix, .. }
            | Self::PrerequisiteVersionMismatch { fix, .. }
            | Self::CommandNotFound { fix, .. }
            | Self::PermissionDenied { fix, .. }
            | Self::InstallerFailed { fix, .. } => fix,
        }
    }

    pub(crate) fn command_not_found(program: &str) -> Self {
        let fix = match program {
            "npm" | "node" => "Install Node.js LTS from https://nodejs.org".to_string(),
            "appium" => "Install Appium first: npm install -g appium".to_string(),
            "brew" => "Install Homebrew from https://brew.sh".to_string(),
            other => format!("Install {} and make sure it is on your PATH", other),
        };
        Self::CommandNotFound {
            program: program.to_string(),
            fix,
        }
    }
}
