//! The interactive installation run.
//!
//! [`Wizard::run`] loops over the main menu. Starting an installation
//! walks the stages in [`Stage`] order; only the requirements check and
//! the Node.js install can end the run early. Per-item install failures
//! are recorded in the [`Session`] and reported at the end.

use crate::catalog::{
    canonical_name, fetch_extensions, fetch_versions, resolve_version_choice, ExtensionKind,
};
use crate::classify::classify;
use crate::docs;
use crate::environment::Environment;
use crate::install::{
    check_node, check_npm, execute_plan, plan_install, probe_node, toolchain_command,
    CommandRunner, InstallAction, InstallError, StructuredCommand, NODE_INSTALL_URL,
};
use crate::menu::Prompter;
use crate::options::WizardOptions;
use crate::report::{print_failure_summary, verify};
use crate::requirements::show_next_steps;
use crate::session::Session;
use crate::terminal;
use crate::{Platform, WizardError};
use std::io::{BufRead, Write};
use strum::IntoEnumIterator;

const BANNER: &str = "🚀 Appium Installation Application v3.0";

const ABOUT: &[&str] = &[
    "\n📚 About Appium 3.0:",
    "• Appium 3.0 is the latest version",
    "• WebDriver BiDi protocol support",
    "• Advanced plugin system",
    "• Better performance and security",
    "• Detailed info: https://appium.io/docs/en/3.0/",
];

const FAREWELL: &str = "\n👋 Thank you for using Appium Installation Application!";

/// Entries of the main menu, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter, strum::AsRefStr)]
pub enum MainMenuChoice {
    /// Walk the installation stages.
    #[strum(serialize = "Start Installation Process")]
    StartInstallation,
    /// Open the documentation menu.
    #[strum(serialize = "View Detailed Installation Documentation")]
    ViewDocumentation,
    /// Leave without installing.
    #[strum(serialize = "Exit")]
    Exit,
}

/// Installation stages, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Confirm the host platform.
    PlatformSelect,
    /// Node.js and npm version checks; may abort.
    RequirementsCheck,
    /// Install Node.js if it is missing; may abort.
    RuntimeInstall,
    /// Pick the Appium version.
    VersionSelect,
    /// `npm install -g appium@<version>`.
    ToolchainInstall,
    /// Pick drivers.
    DriverSelect,
    /// Install each selected driver.
    DriverInstall,
    /// Pick plugins, clients and tools.
    PluginSelect,
    /// Install each selected plugin-menu item.
    PluginInstall,
    /// Query the installed Appium version and drivers.
    Verify,
    /// Print the failure summary.
    Report,
    /// Next steps and Android/iOS environment checks.
    NextSteps,
}

/// Why an installation stopped before installing anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbortReason {
    /// Node.js or npm was missing, or the user declined an old Node.js.
    RequirementsNotMet,
    /// Node.js was still missing after the install step.
    NodeInstallFailed,
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The installation ran to the end (individual items may have failed).
    Completed,
    /// The installation stopped at a prerequisite check.
    Aborted(AbortReason),
    /// The user chose Exit from the main menu.
    Exited,
}

/// The interactive installer.
///
/// # Example
///
/// ```rust
/// use appium_setup::{RunOutcome, SystemRunner, Wizard, WizardOptions};
/// use std::io::Cursor;
///
/// let input = Cursor::new(b"3\n".to_vec());
/// let mut wizard = Wizard::new(input, Vec::new(), SystemRunner::new(), WizardOptions::default());
/// let rt = tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap();
/// assert_eq!(rt.block_on(wizard.run()).unwrap(), RunOutcome::Exited);
/// ```
#[derive(Debug)]
pub struct Wizard<R, W, C> {
    prompter: Prompter<R, W>,
    runner: C,
    options: WizardOptions,
    env: Environment,
    detected: Platform,
    session: Option<Session>,
}

impl<R: BufRead, W: Write, C: CommandRunner> Wizard<R, W, C> {
    /// Create a wizard reading answers from `input` and writing to `output`.
    pub fn new(input: R, output: W, runner: C, options: WizardOptions) -> Self {
        Self {
            prompter: Prompter::new(input, output),
            runner,
            options,
            env: Environment::system(),
            detected: Platform::detect(),
            session: None,
        }
    }

    /// Replace the environment variable lookup.
    pub fn with_env(mut self, env: Environment) -> Self {
        self.env = env;
        self
    }

    /// Override the platform reported as detected.
    pub fn with_detected_platform(mut self, platform: Platform) -> Self {
        self.detected = platform;
        self
    }

    /// The session of the last installation, if one was started.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Give back the streams and the last session.
    pub fn into_parts(self) -> (R, W, Option<Session>) {
        let (input, output) = self.prompter.into_inner();
        (input, output, self.session)
    }

    /// Show the main menu until the user starts an installation or exits.
    pub async fn run(&mut self) -> Result<RunOutcome, WizardError> {
        let choices: Vec<MainMenuChoice> = MainMenuChoice::iter().collect();
        loop {
            self.prompter.println(terminal::title(BANNER))?;
            self.prompter.println("======================================")?;
            self.prompter.print_lines(ABOUT)?;
            self.prompter.println("\n📋 Main Menu:")?;

            let choice = self
                .prompter
                .select_one(&choices, &terminal::prompt("What would you like to do?"))?;
            tracing::debug!(choice = choice.as_ref(), "main menu");

            match choice {
                MainMenuChoice::StartInstallation => {
                    let outcome = self.install().await?;
                    tracing::info!(?outcome, "installation finished");
                    return Ok(outcome);
                }
                MainMenuChoice::ViewDocumentation => {
                    docs::browse(&mut self.prompter, &self.runner, &self.env, &self.options).await?;
                }
                MainMenuChoice::Exit => {
                    self.prompter.println(FAREWELL)?;
                    return Ok(RunOutcome::Exited);
                }
            }
        }
    }

    fn enter(&self, stage: Stage) {
        tracing::debug!(?stage, "entering stage");
    }

    async fn install(&mut self) -> Result<RunOutcome, WizardError> {
        self.enter(Stage::PlatformSelect);
        let platform = self.select_platform()?;
        let mut session = Session::new(platform);
        let outcome = self.run_stages(&mut session).await;
        self.session = Some(session);
        outcome
    }

    async fn run_stages(&mut self, session: &mut Session) -> Result<RunOutcome, WizardError> {
        self.enter(Stage::RequirementsCheck);
        if !self.check_requirements().await? {
            self.prompter.println("❌ System requirements not met.")?;
            return Ok(RunOutcome::Aborted(AbortReason::RequirementsNotMet));
        }

        self.enter(Stage::RuntimeInstall);
        if !self.ensure_node(session.platform).await? {
            self.prompter
                .println("❌ Node.js installation failed. Please install manually.")?;
            return Ok(RunOutcome::Aborted(AbortReason::NodeInstallFailed));
        }

        self.enter(Stage::VersionSelect);
        let version = self.select_version().await?;
        session.toolchain_version = Some(version.clone());

        self.enter(Stage::ToolchainInstall);
        self.install_toolchain(session, &version).await?;

        self.enter(Stage::DriverSelect);
        session.selected_drivers = self.select_extensions(ExtensionKind::Driver).await?;
        self.enter(Stage::DriverInstall);
        let drivers = session.selected_drivers.clone();
        self.install_extensions(session, ExtensionKind::Driver, &drivers)
            .await?;

        self.enter(Stage::PluginSelect);
        session.selected_plugins = self.select_extensions(ExtensionKind::Plugin).await?;
        self.enter(Stage::PluginInstall);
        let plugins = session.selected_plugins.clone();
        self.install_extensions(session, ExtensionKind::Plugin, &plugins)
            .await?;

        self.enter(Stage::Verify);
        verify(&mut self.prompter, &self.runner, &self.options).await?;

        self.enter(Stage::Report);
        print_failure_summary(&mut self.prompter, session)?;

        self.enter(Stage::NextSteps);
        show_next_steps(
            &mut self.prompter,
            &self.runner,
            &self.env,
            session.platform,
            self.options.probe_timeout,
        )
        .await?;

        Ok(RunOutcome::Completed)
    }

    fn select_platform(&mut self) -> Result<Platform, WizardError> {
        self.prompter
            .println(format!("\n🔍 Detected platform: {}", self.detected))?;
        let platforms: Vec<&str> = Platform::selectable().map(|p| p.display_name()).collect();
        let name = self
            .prompter
            .select_one(&platforms, "Which platform are you using?")?;
        let platform = Platform::from_display_name(name).unwrap_or(self.detected);
        self.prompter
            .println(format!("✅ Selected platform: {}", platform))?;
        Ok(platform)
    }

    async fn check_requirements(&mut self) -> Result<bool, WizardError> {
        self.prompter.println("\n🔍 Checking system requirements...")?;

        match check_node(&self.runner, &self.options).await {
            Ok(node) => self
                .prompter
                .println(format!("✅ Node.js version suitable: {}", node.raw))?,
            Err(InstallError::PrerequisiteVersionMismatch { required, found, .. }) => {
                self.prompter.println(format!(
                    "⚠️  Node.js {} recommended. Current version: {}",
                    required, found
                ))?;
                if !self.prompter.confirm("Do you want to continue? (y/n): ")? {
                    return Ok(false);
                }
            }
            Err(error) => {
                tracing::warn!(%error, fix = error.fix_suggestion(), "node check failed");
                self.prompter.println("❌ Node.js not found")?;
                return Ok(false);
            }
        }

        match check_npm(&self.runner, &self.options).await {
            Ok(version) => self
                .prompter
                .println(format!("✅ NPM version: {}", version))?,
            Err(error) => {
                tracing::warn!(%error, fix = error.fix_suggestion(), "npm check failed");
                self.prompter.println("❌ NPM not found")?;
                return Ok(false);
            }
        }
        Ok(true)
    }

    async fn node_installed(&mut self) -> Result<bool, WizardError> {
        match probe_node(&self.runner, &self.options).await {
            Ok(node) => {
                self.prompter
                    .println(format!("✅ Node.js already installed: {}", node.raw))?;
                Ok(true)
            }
            Err(_) => {
                self.prompter.println("❌ Node.js not installed")?;
                Ok(false)
            }
        }
    }

    async fn ensure_node(&mut self, platform: Platform) -> Result<bool, WizardError> {
        if self.node_installed().await? {
            return Ok(true);
        }
        self.install_node(platform).await?;
        self.node_installed().await
    }

    async fn install_node(&mut self, platform: Platform) -> Result<(), WizardError> {
        const DONE: &str = "Press Enter after installation is complete...";
        self.prompter
            .println("\n📦 Starting Node.js LTS installation...")?;

        match platform {
            Platform::Windows => {
                self.prompter.print_lines([
                    "Node.js installation for Windows:".to_string(),
                    format!("1. Download LTS version from {}", NODE_INSTALL_URL),
                    "2. Run the downloaded .msi file".to_string(),
                    "3. Restart terminal after installation".to_string(),
                ])?;
                self.prompter.ask(DONE)?;
            }
            Platform::MacOs => {
                self.prompter.println("Installing Node.js with Homebrew...")?;
                let brew = StructuredCommand::new("brew", ["install", "node"]);
                if let Err(error) = self.runner.run(&brew).await {
                    tracing::warn!(%error, "brew install node failed");
                    self.prompter
                        .println("Homebrew not found. Manual installation required:")?;
                    self.prompter
                        .println(format!("Download LTS version from {}", NODE_INSTALL_URL))?;
                    self.prompter.ask(DONE)?;
                }
            }
            Platform::Linux | Platform::Unknown => {
                self.prompter.print_lines([
                    "Node.js installation for Linux:",
                    "Ubuntu/Debian: sudo apt update && sudo apt install nodejs npm",
                    "CentOS/RHEL: sudo yum install nodejs npm",
                ])?;
                self.prompter.ask(DONE)?;
            }
        }
        Ok(())
    }

    async fn select_version(&mut self) -> Result<String, WizardError> {
        self.prompter.println("📡 Fetching Appium versions...")?;
        let catalog = fetch_versions(
            &self.runner,
            &self.options.npm_program,
            &self.options.lts_version,
            self.options.catalog_timeout,
            self.options.offline,
        )
        .await;
        if catalog.query_failed() {
            self.prompter
                .println("⚠️  Could not fetch versions, using default list...")?;
        }

        let choice = self.prompter.select_one(
            &catalog.entries,
            "Which Appium version would you like to install?",
        )?;
        let version = resolve_version_choice(&choice, &self.options.lts_version);
        self.prompter
            .println(format!("✅ Selected Appium version: {}", version))?;
        Ok(version)
    }

    async fn install_toolchain(
        &mut self,
        session: &mut Session,
        version: &str,
    ) -> Result<(), WizardError> {
        self.prompter.println("\n🚀 Starting Appium installation...")?;
        let command = toolchain_command(version, &self.options);
        self.prompter
            .println(format!("Running command: {}", command))?;

        let result = self.runner.run(&command).await;
        match &result {
            Ok(()) => self.prompter.println("✅ Appium installed successfully")?,
            Err(_) => self.prompter.println("❌ Appium installation failed")?,
        }
        session.record(format!("Appium {}", version), result);
        Ok(())
    }

    async fn select_extensions(&mut self, kind: ExtensionKind) -> Result<Vec<String>, WizardError> {
        self.prompter
            .println(format!("📡 Fetching available {}...", kind.plural()))?;
        let catalog = fetch_extensions(
            &self.runner,
            &self.options.appium_program,
            kind,
            self.options.catalog_timeout,
            self.options.offline,
        )
        .await;
        if catalog.query_failed() {
            self.prompter.println(format!(
                "⚠️  Could not fetch {} list, using default list...",
                kind.cli_noun()
            ))?;
        }

        let prompt = format!("Which Appium {} would you like to install?", kind.plural());
        let selected: Vec<String> = self
            .prompter
            .select_many(&catalog.entries, &prompt)?
            .iter()
            .map(|entry| canonical_name(entry).to_string())
            .collect();
        self.prompter.println(format!(
            "✅ Selected {}: {}",
            kind.plural(),
            selected.join(", ")
        ))?;
        Ok(selected)
    }

    async fn install_extensions(
        &mut self,
        session: &mut Session,
        kind: ExtensionKind,
        names: &[String],
    ) -> Result<(), WizardError> {
        let header = match kind {
            ExtensionKind::Driver => "\n🔧 Installing Appium drivers...",
            ExtensionKind::Plugin => "\n🔌 Installing Appium plugins...",
        };
        self.prompter.println(header)?;

        for name in names {
            self.prompter
                .println(format!("\n📦 Installing {}...", name))?;
            let category = classify(name, kind);
            let plan = plan_install(name, category, &self.options);
            tracing::debug!(item = %name, ?category, command = ?plan.command().map(|c| c.to_string()), "planned");

            match &plan.action {
                InstallAction::Run {
                    notice: Some(notice),
                    ..
                } => self.prompter.println(notice)?,
                InstallAction::Inform { lines } => self.prompter.print_lines(lines)?,
                InstallAction::Run { notice: None, .. } => {}
            }

            let result = execute_plan(&self.runner, &plan).await;
            match &result {
                Ok(()) => self
                    .prompter
                    .println(format!("✅ {} installed successfully", name))?,
                Err(_) => self
                    .prompter
                    .println(format!("❌ {} installation failed", name))?,
            }
            session.record(name.as_str(), result);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedRunner;
    use crate::ProbeError;
    use std::io::Cursor;

    type TestWizard<'a> = Wizard<Cursor<Vec<u8>>, Vec<u8>, &'a ScriptedRunner>;

    fn wizard<'a>(input: &str, runner: &'a ScriptedRunner) -> TestWizard<'a> {
        let options = WizardOptions {
            offline: true,
            ..Default::default()
        };
        Wizard::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), runner, options)
            .with_env(Environment::fixed(Vec::<(String, String)>::new()))
            .with_detected_platform(Platform::Linux)
    }

    fn healthy_runner() -> ScriptedRunner {
        ScriptedRunner::new()
            .with_output("node --version", "v20.11.1\n")
            .with_output("npm --version", "10.2.4\n")
    }

    #[tokio::test]
    async fn test_exit_from_main_menu() {
        let runner = ScriptedRunner::new();
        let mut w = wizard("3\n", &runner);
        assert_eq!(w.run().await.unwrap(), RunOutcome::Exited);
        let (_, out, session) = w.into_parts();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("🚀 Appium Installation Application v3.0"));
        assert!(out.ends_with("👋 Thank you for using Appium Installation Application!\n"));
        assert!(session.is_none());
        assert!(runner.commands().is_empty());
    }

    #[tokio::test]
    async fn test_docs_return_to_main_menu() {
        let runner = ScriptedRunner::new();
        let mut w = wizard("2\n11\n2\n11\n3\n", &runner);
        assert_eq!(w.run().await.unwrap(), RunOutcome::Exited);
        let (_, out, _) = w.into_parts();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.matches("🚀 Appium Installation Application v3.0").count(), 3);
    }

    #[tokio::test]
    async fn test_missing_node_aborts_before_installing() {
        let runner = ScriptedRunner::new();
        let mut w = wizard("1\n3\n", &runner);
        assert_eq!(
            w.run().await.unwrap(),
            RunOutcome::Aborted(AbortReason::RequirementsNotMet)
        );
        assert!(runner.runs().is_empty());
        let (_, out, _) = w.into_parts();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("❌ Node.js not found"));
        assert!(out.contains("❌ System requirements not met."));
    }

    #[tokio::test]
    async fn test_old_node_declined_aborts() {
        let runner = ScriptedRunner::new().with_output("node --version", "v14.21.3");
        let mut w = wizard("1\n3\nn\n", &runner);
        assert_eq!(
            w.run().await.unwrap(),
            RunOutcome::Aborted(AbortReason::RequirementsNotMet)
        );
        let (_, out, _) = w.into_parts();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("⚠️  Node.js 16+ recommended. Current version: v14.21.3"));
    }

    /// Node.js answers the requirements check, then vanishes.
    fn node_lost_runner() -> ScriptedRunner {
        ScriptedRunner::new()
            .with_output("node --version", "v20.11.1\n")
            .fail_capture("node --version", ProbeError::NotFound)
            .with_output("npm --version", "10.2.4\n")
    }

    fn output_of(w: TestWizard<'_>) -> String {
        String::from_utf8(w.into_parts().1).unwrap()
    }

    #[tokio::test]
    async fn test_macos_node_install_uses_brew_then_aborts() {
        let runner = node_lost_runner();
        let mut w = wizard("1\n2\n", &runner);
        assert_eq!(
            w.run().await.unwrap(),
            RunOutcome::Aborted(AbortReason::NodeInstallFailed)
        );
        assert_eq!(runner.runs(), vec!["brew install node"]);
        let out = output_of(w);
        assert!(out.contains("❌ Node.js not installed"));
        assert!(out.contains("Installing Node.js with Homebrew..."));
        assert!(!out.contains("Homebrew not found"));
        assert!(out.contains("❌ Node.js installation failed. Please install manually."));
    }

    #[tokio::test]
    async fn test_macos_brew_failure_falls_back_to_manual() {
        let runner = node_lost_runner().fail_run("brew install node");
        let mut w = wizard("1\n2\n\n", &runner);
        assert_eq!(
            w.run().await.unwrap(),
            RunOutcome::Aborted(AbortReason::NodeInstallFailed)
        );
        let out = output_of(w);
        assert!(out.contains("Homebrew not found. Manual installation required:"));
        assert!(out.contains("Download LTS version from https://nodejs.org"));
        assert!(out.contains("Press Enter after installation is complete..."));
    }

    #[tokio::test]
    async fn test_windows_node_install_prints_instructions_and_waits() {
        let runner = node_lost_runner();
        let mut w = wizard("1\n1\n\n", &runner);
        assert_eq!(
            w.run().await.unwrap(),
            RunOutcome::Aborted(AbortReason::NodeInstallFailed)
        );
        assert!(runner.runs().is_empty());
        let out = output_of(w);
        assert!(out.contains("1. Download LTS version from https://nodejs.org"));
        assert!(out.contains("2. Run the downloaded .msi file"));
        assert!(out.contains("Press Enter after installation is complete..."));
    }

    #[tokio::test]
    async fn test_linux_node_install_prints_package_commands_and_waits() {
        let runner = node_lost_runner();
        let mut w = wizard("1\n3\n\n", &runner);
        assert_eq!(
            w.run().await.unwrap(),
            RunOutcome::Aborted(AbortReason::NodeInstallFailed)
        );
        assert!(runner.runs().is_empty());
        let out = output_of(w);
        assert!(out.contains("Ubuntu/Debian: sudo apt update && sudo apt install nodejs npm"));
        assert!(out.contains("CentOS/RHEL: sudo yum install nodejs npm"));
    }

    #[tokio::test]
    async fn test_node_found_after_manual_install_continues() {
        let runner = node_lost_runner().with_output("node --version", "v20.11.1\n");
        // Linux, wait for install, latest, no drivers, no plugins.
        let mut w = wizard("1\n3\n\n1\n\n\n", &runner);
        assert_eq!(w.run().await.unwrap(), RunOutcome::Completed);
        assert_eq!(runner.runs(), vec!["npm install -g appium@latest"]);
    }

    #[tokio::test]
    async fn test_full_run_records_failures_in_order() {
        let runner = healthy_runner()
            .fail_run("npm install -g appium@latest")
            .fail_run("appium driver install --source=npm appium-flutter-driver");
        // Linux, latest, drivers xcuitest + flutter, plugin doctor + images.
        let input = "1\n3\n1\n8,9\n25,2\n";
        let mut w = wizard(input, &runner);
        assert_eq!(w.run().await.unwrap(), RunOutcome::Completed);

        let session = w.session().unwrap();
        assert_eq!(session.platform, Platform::Linux);
        assert_eq!(session.toolchain_version.as_deref(), Some("latest"));
        assert_eq!(session.selected_drivers, vec!["xcuitest", "appium-flutter-driver"]);
        assert_eq!(session.selected_plugins, vec!["appium-doctor", "images"]);
        assert_eq!(session.failures(), vec!["Appium latest", "appium-flutter-driver"]);

        assert_eq!(
            runner.runs(),
            vec![
                "npm install -g appium@latest",
                "appium driver install xcuitest",
                "appium driver install --source=npm appium-flutter-driver",
                "appium plugin install images",
            ]
        );
    }

    #[tokio::test]
    async fn test_lts_choice_resolves_to_pin() {
        let runner = healthy_runner();
        let mut w = wizard("1\n2\n2\n\n\n", &runner);
        assert_eq!(w.run().await.unwrap(), RunOutcome::Completed);
        assert_eq!(
            w.session().unwrap().toolchain_version.as_deref(),
            Some("3.0.0")
        );
        assert_eq!(runner.runs(), vec!["npm install -g appium@3.0.0"]);
    }
}
