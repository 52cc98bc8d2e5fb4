//! Tool detection functions.

use crate::detection::{first_line, parse_version};
use crate::install::{CommandRunner, StructuredCommand};
use crate::{ProbeError, Tool, ToolStatus};
use std::time::Duration;

/// Detect a tool by running its version query.
///
/// # Detection Process
///
/// 1. Run `{executable} {version args}` with the given timeout
/// 2. Keep the first non-empty output line as the summary
/// 3. Extract a semantic version from the output when one is present
///
/// A missing executable or a timed-out query reports
/// [`ToolStatus::NotFound`]; any other failure reports
/// [`ToolStatus::Unknown`].
pub async fn detect_tool<C: CommandRunner>(runner: &C, tool: Tool, limit: Duration) -> ToolStatus {
    detect_command(runner, tool.executable_name(), tool.version_args(), limit).await
}

/// Like [`detect_tool`] for an arbitrary program, used when the program
/// name is configurable (e.g. a non-default `appium` binary).
pub async fn detect_command<C: CommandRunner>(
    runner: &C,
    program: &str,
    args: &[&str],
    limit: Duration,
) -> ToolStatus {
    let command = StructuredCommand::new(program, args.iter().copied());
    match runner.capture(&command, limit).await {
        Ok(output) => ToolStatus::Found {
            summary: first_line(&output).unwrap_or_default().to_string(),
            version: parse_version(&output).ok(),
        },
        Err(ProbeError::NotFound) | Err(ProbeError::Timeout) => {
            tracing::debug!(program, "tool not available");
            ToolStatus::NotFound
        }
        Err(error) => {
            tracing::warn!(program, %error, "tool probe failed");
            ToolStatus::Unknown { error }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedRunner;
    use semver::Version;

    const LIMIT: Duration = Duration::from_secs(1);

    #[tokio::test]
    async fn test_detect_found_with_version() {
        let runner = ScriptedRunner::new().with_output("node --version", "v20.11.1\n");
        let status = detect_tool(&runner, Tool::Node, LIMIT).await;
        assert_eq!(status.summary(), Some("v20.11.1"));
        assert_eq!(status.version(), Some(&Version::new(20, 11, 1)));
    }

    #[tokio::test]
    async fn test_detect_found_without_semver() {
        let runner =
            ScriptedRunner::new().with_output("xcodebuild -version", "Xcode 15.2\nBuild version 15C500b\n");
        let status = detect_tool(&runner, Tool::Xcode, LIMIT).await;
        assert_eq!(status.summary(), Some("Xcode 15.2"));
        assert!(status.version().is_none());
    }

    #[tokio::test]
    async fn test_detect_not_found_and_timeout() {
        let runner = ScriptedRunner::new().fail_capture("adb version", ProbeError::Timeout);
        assert!(matches!(
            detect_tool(&runner, Tool::Adb, LIMIT).await,
            ToolStatus::NotFound
        ));
        assert!(matches!(
            detect_tool(&runner, Tool::Git, LIMIT).await,
            ToolStatus::NotFound
        ));
    }

    #[tokio::test]
    async fn test_detect_unknown_on_failure() {
        let runner = ScriptedRunner::new()
            .fail_capture("java -version", ProbeError::NonZeroExit { code: Some(1) });
        match detect_tool(&runner, Tool::Java, LIMIT).await {
            ToolStatus::Unknown { error } => {
                assert_eq!(error, ProbeError::NonZeroExit { code: Some(1) })
            }
            other => panic!("unexpected status: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_detect_command_uses_custom_program() {
        let runner = ScriptedRunner::new().with_output("/opt/appium/bin/appium --version", "2.11.3");
        let status =
            detect_command(&runner, "/opt/appium/bin/appium", &["--version"], LIMIT).await;
        assert!(status.is_found());
        assert_eq!(runner.commands(), vec!["/opt/appium/bin/appium --version"]);
    }
}
