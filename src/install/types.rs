//! Type definitions for install commands and plans.
//!
//! A [`StructuredCommand`] is what the runner executes; an [`InstallPlan`]
//! is what the planner decides to do for one selected item.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A structured command for programmatic execution.
///
/// # Example
///
/// ```rust
/// use appium_setup::StructuredCommand;
///
/// let cmd = StructuredCommand::new("appium", ["driver", "install", "xcuitest"]);
/// assert_eq!(cmd.to_string(), "appium driver install xcuitest");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredCommand {
    /// The program to execute (e.g., "npm", "appium", "brew").
    pub program: String,

    /// Arguments to pass to the program.
    pub args: Vec<String>,

    /// Environment variables to set before execution (key, value pairs).
    pub env_vars: Vec<(String, String)>,
}

impl StructuredCommand {
    /// Build a command with no extra environment.
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            env_vars: vec![],
        }
    }
}

/// Renders the command the way a user would type it.
impl fmt::Display for StructuredCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// What installing one item amounts to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstallAction {
    /// Run a single command, printing `notice` first when present.
    Run {
        /// Warning shown before the command runs (legacy drivers).
        notice: Option<String>,
        /// The command to execute.
        command: StructuredCommand,
    },

    /// Print informational lines only. No subprocess is spawned and the
    /// item always counts as installed.
    Inform {
        /// Lines to print.
        lines: Vec<String>,
    },
}

/// The install decision for one canonical item name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallPlan {
    /// Canonical name of the item being installed.
    pub name: String,

    /// What to do.
    pub action: InstallAction,
}

impl InstallPlan {
    /// The command this plan would run, if any.
    pub fn command(&self) -> Option<&StructuredCommand> {
        match &self.action {
            InstallAction::Run { command, .. } => Some(command),
            InstallAction::Inform { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_display() {
        let cmd = StructuredCommand::new("npm", ["install", "-g", "appium@latest"]);
        assert_eq!(cmd.to_string(), "npm install -g appium@latest");
        assert!(cmd.env_vars.is_empty());
    }

    #[test]
    fn test_command_display_without_args() {
        let cmd = StructuredCommand::new("appium", Vec::<String>::new());
        assert_eq!(cmd.to_string(), "appium");
    }

    #[test]
    fn test_plan_command_accessor() {
        let run = InstallPlan {
            name: "images".to_string(),
            action: InstallAction::Run {
                notice: None,
                command: StructuredCommand::new("appium", ["plugin", "install", "images"]),
            },
        };
        assert_eq!(
            run.command().map(ToString::to_string).as_deref(),
            Some("appium plugin install images")
        );

        let inform = InstallPlan {
            name: "appium-doctor".to_string(),
            action: InstallAction::Inform { lines: vec![] },
        };
        assert!(inform.command().is_none());
    }

    #[test]
    fn test_plan_serializes() {
        let plan = InstallPlan {
            name: "gecko".to_string(),
            action: InstallAction::Run {
                notice: None,
                command: StructuredCommand::new("appium", ["driver", "install", "gecko"]),
            },
        };
        let json = serde_json::to_string(&plan).unwrap();
        let back: InstallPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(back, plan);
    }
}
