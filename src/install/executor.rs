//! Subprocess execution.
//!
//! [`CommandRunner`] is the seam between the wizard and the operating
//! system. [`SystemRunner`] spawns real processes; tests substitute a
//! scripted runner.

use crate::detection::find_executable;
use crate::install::{InstallAction, InstallError, InstallPlan, StructuredCommand};
use crate::ProbeError;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

/// Runs external commands on behalf of the wizard.
///
/// Both methods complete before returning; the wizard awaits each call
/// before starting the next step.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a command with the terminal's stdin, stdout and stderr inherited.
    ///
    /// No timeout applies: installs run until the subprocess exits.
    async fn run(&self, command: &StructuredCommand) -> Result<(), InstallError>;

    /// Run a command and capture its output.
    ///
    /// Returns stdout, or stderr when stdout is empty (some tools, such as
    /// `java -version`, print to stderr). A non-zero exit is an error.
    async fn capture(
        &self,
        command: &StructuredCommand,
        limit: Duration,
    ) -> Result<String, ProbeError>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    async fn run(&self, command: &StructuredCommand) -> Result<(), InstallError> {
        (**self).run(command).await
    }

    async fn capture(
        &self,
        command: &StructuredCommand,
        limit: Duration,
    ) -> Result<String, ProbeError> {
        (**self).capture(command, limit).await
    }
}

/// [`CommandRunner`] backed by real subprocesses.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    /// Create a runner.
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    async fn run(&self, command: &StructuredCommand) -> Result<(), InstallError> {
        let path = find_executable(&command.program)
            .ok_or_else(|| InstallError::command_not_found(&command.program))?;
        tracing::debug!(command = %command, path = %path.display(), "running with inherited stdio");

        let status = Command::new(&path)
            .args(&command.args)
            .envs(command.env_vars.iter().cloned())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => InstallError::command_not_found(&command.program),
                std::io::ErrorKind::PermissionDenied => InstallError::PermissionDenied {
                    message: e.to_string(),
                    fix: "Re-run with sudo (Linux/macOS) or as Administrator (Windows)"
                        .to_string(),
                },
                _ => InstallError::InstallerFailed {
                    message: e.to_string(),
                    exit_code: None,
                    fix: "Check the command and try again".to_string(),
                },
            })?;

        if !status.success() {
            tracing::debug!(command = %command, code = ?status.code(), "command failed");
            return Err(InstallError::InstallerFailed {
                message: format!("`{}` exited with code {:?}", command, status.code()),
                exit_code: status.code(),
                fix: "See installer output above for details".to_string(),
            });
        }
        Ok(())
    }

    async fn capture(
        &self,
        command: &StructuredCommand,
        limit: Duration,
    ) -> Result<String, ProbeError> {
        let path = find_executable(&command.program).ok_or(ProbeError::NotFound)?;
        tracing::debug!(command = %command, "capturing output");

        let mut cmd = Command::new(&path);
        cmd.args(&command.args)
            .envs(command.env_vars.iter().cloned())
            .stdin(Stdio::null())
            .kill_on_drop(true);

        let output = timeout(limit, cmd.output())
            .await
            .map_err(|_| ProbeError::Timeout)?
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => ProbeError::NotFound,
                std::io::ErrorKind::PermissionDenied => ProbeError::PermissionDenied,
                _ => ProbeError::IoError,
            })?;

        if !output.status.success() {
            return Err(ProbeError::NonZeroExit {
                code: output.status.code(),
            });
        }

        let out = if !output.stdout.is_empty() {
            output.stdout
        } else {
            output.stderr
        };
        String::from_utf8(out).map_err(|_| ProbeError::InvalidOutput)
    }
}

/// Execute one install plan.
///
/// [`InstallAction::Inform`] plans spawn nothing and always succeed. The
/// caller is responsible for printing any notice or informational lines.
pub async fn execute_plan<C: CommandRunner>(
    runner: &C,
    plan: &InstallPlan,
) -> Result<(), InstallError> {
    match &plan.action {
        InstallAction::Run { command, .. } => runner.run(command).await,
        InstallAction::Inform { .. } => {
            tracing::debug!(item = %plan.name, "informational item, nothing to run");
            Ok(())
        }
    }
}
