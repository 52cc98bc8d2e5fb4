//! End-to-end wizard runs with scripted answers and a fake command runner.

use appium_setup::{
    AbortReason, CommandRunner, Environment, InstallError, Platform, ProbeError, RunOutcome,
    Session, StructuredCommand, Wizard, WizardOptions,
};
use std::collections::{HashMap, HashSet};
use std::io::Cursor;
use std::sync::Mutex;
use std::time::Duration;

/// Answers captures from a table and fails the listed runs.
#[derive(Default)]
struct FakeRunner {
    outputs: HashMap<String, String>,
    failing: HashSet<String>,
    runs: Mutex<Vec<String>>,
}

impl FakeRunner {
    fn healthy() -> Self {
        Self::default()
            .output("node --version", "v20.11.1\n")
            .output("npm --version", "10.2.4\n")
    }

    fn output(mut self, command: &str, text: &str) -> Self {
        self.outputs.insert(command.to_string(), text.to_string());
        self
    }

    fn failing(mut self, command: &str) -> Self {
        self.failing.insert(command.to_string());
        self
    }

    fn runs(&self) -> Vec<String> {
        self.runs.lock().unwrap().clone()
    }
}

impl CommandRunner for FakeRunner {
    async fn run(&self, command: &StructuredCommand) -> Result<(), InstallError> {
        let line = command.to_string();
        self.runs.lock().unwrap().push(line.clone());
        if self.failing.contains(&line) {
            return Err(InstallError::InstallerFailed {
                message: format!("`{}` failed", line),
                exit_code: Some(1),
                fix: String::new(),
            });
        }
        Ok(())
    }

    async fn capture(
        &self,
        command: &StructuredCommand,
        _limit: Duration,
    ) -> Result<String, ProbeError> {
        self.outputs
            .get(&command.to_string())
            .cloned()
            .ok_or(ProbeError::NotFound)
    }
}

struct Run {
    outcome: RunOutcome,
    output: String,
    session: Option<Session>,
}

async fn run_wizard(input: &str, runner: &FakeRunner, offline: bool) -> Run {
    let options = WizardOptions {
        offline,
        ..WizardOptions::default()
    };
    let mut wizard = Wizard::new(
        Cursor::new(input.as_bytes().to_vec()),
        Vec::new(),
        runner,
        options,
    )
    .with_env(Environment::fixed(Vec::<(String, String)>::new()))
    .with_detected_platform(Platform::Linux);

    let outcome = wizard.run().await.unwrap();
    let (_, output, session) = wizard.into_parts();
    Run {
        outcome,
        output: String::from_utf8(output).unwrap(),
        session,
    }
}

#[tokio::test]
async fn test_exit_runs_nothing() {
    let runner = FakeRunner::healthy();
    let run = run_wizard("3\n", &runner, true).await;
    assert_eq!(run.outcome, RunOutcome::Exited);
    assert!(run.session.is_none());
    assert!(runner.runs().is_empty());
}

#[tokio::test]
async fn test_fallback_driver_menu_lists_sixteen_defaults() {
    // Not offline: the missing appium binary forces the fallback lists.
    let runner = FakeRunner::healthy();
    let run = run_wizard("1\n3\n1\n\n\n", &runner, false).await;
    assert_eq!(run.outcome, RunOutcome::Completed);

    let out = &run.output;
    assert!(out.contains("⚠️  Could not fetch versions, using default list..."));
    assert!(out.contains("⚠️  Could not fetch driver list, using default list..."));

    let start = out.find("Which Appium drivers would you like to install?").unwrap();
    let end = out.find("Which Appium plugins would you like to install?").unwrap();
    let driver_menu = &out[start..end];
    assert!(driver_menu.contains("1. chromium (Chromium - Chrome, Edge)"));
    assert!(driver_menu
        .contains("16. appium-youiengine-driver (You.i Engine - Legacy, Appium 1 only)"));
    assert!(!driver_menu.contains("\n17. "));
    assert_eq!(runner.runs(), vec!["npm install -g appium@latest"]);
}

#[tokio::test]
async fn test_version_labels_resolve() {
    let runner = FakeRunner::healthy();
    let run = run_wizard("1\n3\n1\n\n\n", &runner, true).await;
    assert_eq!(
        run.session.unwrap().toolchain_version.as_deref(),
        Some("latest")
    );

    let runner = FakeRunner::healthy();
    let run = run_wizard("1\n3\n2\n\n\n", &runner, true).await;
    assert!(run.output.contains("✅ Selected Appium version: 3.0.0"));
    assert_eq!(runner.runs(), vec!["npm install -g appium@3.0.0"]);
}

#[tokio::test]
async fn test_live_versions_follow_npm() {
    let runner = FakeRunner::healthy().output(
        "npm view appium versions --json",
        r#"["2.18.0", "2.19.0", "3.0.0", "3.0.1"]"#,
    );
    let run = run_wizard("1\n3\n3\n\n\n", &runner, false).await;
    assert_eq!(run.outcome, RunOutcome::Completed);
    assert!(!run.output.contains("Could not fetch versions"));
    assert_eq!(runner.runs()[0], "npm install -g appium@3.0.1");
}

#[tokio::test]
async fn test_failures_reported_in_attempt_order() {
    let runner = FakeRunner::healthy()
        .failing("appium driver install uiautomator2")
        .failing("npm install appium-tizen-driver")
        .failing("appium plugin install --source=npm appium-wait-plugin");
    // Linux, latest, drivers uiautomator2 + tizen legacy, plugins wait + images.
    let run = run_wizard("1\n3\n1\n6,15\n13,2\n", &runner, true).await;
    assert_eq!(run.outcome, RunOutcome::Completed);

    let session = run.session.unwrap();
    assert_eq!(
        session.failures(),
        vec!["uiautomator2", "appium-tizen-driver", "appium-wait-plugin"]
    );

    let out = &run.output;
    assert!(out.contains("⚠️  appium-tizen-driver is a legacy driver and only compatible with Appium 1!"));
    let first = out.find("❌ uiautomator2\n").unwrap();
    let second = out.find("❌ appium-tizen-driver\n").unwrap();
    let third = out.find("❌ appium-wait-plugin\n").unwrap();
    assert!(first < second && second < third);
    assert!(out.contains("- appium-tizen-driver: appium driver install appium-tizen-driver"));
    assert!(out.contains("- appium-wait-plugin: npm install -g appium-wait-plugin"));
}

#[tokio::test]
async fn test_extension_tool_never_spawns() {
    let runner = FakeRunner::healthy();
    // Plugin 25 is appium-doctor.
    let run = run_wizard("1\n3\n1\n\n25\n", &runner, true).await;
    assert_eq!(run.outcome, RunOutcome::Completed);
    assert!(run.output.contains("ℹ️  appium-doctor is integrated with Appium CLI"));
    assert!(run.output.contains("✅ appium-doctor installed successfully"));
    assert_eq!(runner.runs(), vec!["npm install -g appium@latest"]);
}

#[tokio::test]
async fn test_missing_npm_aborts() {
    let runner = FakeRunner::default().output("node --version", "v18.19.0");
    let run = run_wizard("1\n3\n", &runner, true).await;
    assert_eq!(
        run.outcome,
        RunOutcome::Aborted(AbortReason::RequirementsNotMet)
    );
    assert!(run.output.contains("❌ NPM not found"));
    assert!(runner.runs().is_empty());
}

#[tokio::test]
async fn test_closed_input_is_an_error() {
    let runner = FakeRunner::healthy();
    let mut wizard = Wizard::new(
        Cursor::new(Vec::new()),
        Vec::new(),
        &runner,
        WizardOptions::default(),
    )
    .with_env(Environment::fixed(Vec::<(String, String)>::new()));
    assert!(wizard.run().await.is_err());
}
