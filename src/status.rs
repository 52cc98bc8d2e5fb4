//! Probe results for external tools.

use semver::Version;

/// Typed failure reasons for a best-effort probe.
///
/// Probes never abort the wizard. Callers turn these into a fallback value
/// or a "not found" line.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProbeError {
    /// The command did not finish within the probe timeout.
    Timeout,

    /// The executable could not be located.
    NotFound,

    /// Permission denied running the executable.
    PermissionDenied,

    /// The command ran but exited unsuccessfully.
    NonZeroExit {
        /// Exit code, if the process was not killed by a signal.
        code: Option<i32>,
    },

    /// Any other I/O failure while spawning or waiting.
    IoError,

    /// Output was not valid UTF-8 or not in the expected shape.
    InvalidOutput,
}

impl ProbeError {
    /// Human-readable description of the error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use appium_setup::ProbeError;
    ///
    /// assert_eq!(ProbeError::Timeout.description(), "Probe timed out");
    /// ```
    pub fn description(&self) -> &'static str {
        match self {
            Self::Timeout => "Probe timed out",
            Self::NotFound => "Command not found",
            Self::PermissionDenied => "Permission denied",
            Self::NonZeroExit { .. } => "Command exited with an error",
            Self::IoError => "I/O error during probe",
            Self::InvalidOutput => "Unexpected command output",
        }
    }
}

impl std::fmt::Display for ProbeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonZeroExit { code: Some(code) } => {
                write!(f, "{} (exit code {})", self.description(), code)
            }
            _ => f.write_str(self.description()),
        }
    }
}

impl std::error::Error for ProbeError {}

/// Result of probing one tool.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum ToolStatus {
    /// The tool answered its version query.
    Found {
        /// First non-empty line of the version output, trimmed.
        summary: String,
        /// Semantic version extracted from the output, when one is present.
        version: Option<Version>,
    },

    /// The tool is not installed (or did not answer in time).
    NotFound,

    /// The tool exists but the probe failed.
    Unknown {
        /// Typed error for programmatic handling.
        error: ProbeError,
    },
}

impl ToolStatus {
    /// `true` only for [`ToolStatus::Found`].
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    /// The summary line if the tool was found.
    pub fn summary(&self) -> Option<&str> {
        match self {
            Self::Found { summary, .. } => Some(summary),
            _ => None,
        }
    }

    /// The parsed version if the tool was found and printed one.
    pub fn version(&self) -> Option<&Version> {
        match self {
            Self::Found { version, .. } => version.as_ref(),
            _ => None,
        }
    }
}
