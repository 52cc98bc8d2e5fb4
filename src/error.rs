//! Crate-level error type.

use thiserror::Error;

/// Errors that end a wizard run.
///
/// Install and probe failures never surface here; they are recorded or
/// replaced with fallbacks. Only the terminal itself can fail a run.
#[derive(Debug, Error)]
pub enum WizardError {
    /// Reading from or writing to the terminal failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Standard input closed while a prompt was waiting for an answer.
    #[error("input closed before a selection was made")]
    InputClosed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            WizardError::InputClosed.to_string(),
            "input closed before a selection was made"
        );
        let io = WizardError::from(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe"));
        assert_eq!(io.to_string(), "terminal I/O failed: pipe");
    }
}
