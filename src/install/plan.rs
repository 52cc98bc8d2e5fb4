//! Install command construction per category.

use crate::classify::{Category, DriverCategory, PluginCategory};
use crate::install::{InstallAction, InstallPlan, StructuredCommand};
use crate::options::WizardOptions;

/// Build the install plan for one canonical name of a known category.
///
/// Exactly one command (or none, for tools built into the Appium CLI) is
/// produced per item.
///
/// ```rust
/// use appium_setup::{plan_install, Category, DriverCategory, WizardOptions};
///
/// let plan = plan_install(
///     "appium-flutter-driver",
///     Category::Driver(DriverCategory::ThirdParty),
///     &WizardOptions::default(),
/// );
/// assert_eq!(
///     plan.command().unwrap().to_string(),
///     "appium driver install --source=npm appium-flutter-driver"
/// );
/// ```
pub fn plan_install(name: &str, category: Category, options: &WizardOptions) -> InstallPlan {
    let appium = |noun: &str, third_party: bool| {
        let mut args = vec![noun, "install"];
        if third_party {
            args.push("--source=npm");
        }
        args.push(name);
        run(StructuredCommand::new(&options.appium_program, args))
    };
    let npm_global = || {
        run(StructuredCommand::new(
            &options.npm_program,
            ["install", "-g", name],
        ))
    };

    let action = match category {
        Category::Driver(DriverCategory::Official) => appium("driver", false),
        Category::Driver(DriverCategory::ThirdParty) => appium("driver", true),
        Category::Driver(DriverCategory::Legacy) => InstallAction::Run {
            notice: Some(format!(
                "⚠️  {} is a legacy driver and only compatible with Appium 1!",
                name
            )),
            command: StructuredCommand::new(&options.npm_program, ["install", name]),
        },
        Category::Driver(DriverCategory::Unlisted) => npm_global(),
        Category::Plugin(PluginCategory::OfficialPlugin) => appium("plugin", false),
        Category::Plugin(PluginCategory::ThirdPartyPlugin) => appium("plugin", true),
        Category::Plugin(PluginCategory::ExtensionTool) => InstallAction::Inform {
            lines: vec![
                format!("ℹ️  {} is integrated with Appium CLI", name),
                "   Usage: appium doctor [driver|plugin] <extension-name>".to_string(),
            ],
        },
        Category::Plugin(
            PluginCategory::OfficialTool | PluginCategory::OtherTool | PluginCategory::ClientLibrary,
        ) => npm_global(),
    };

    InstallPlan {
        name: name.to_string(),
        action,
    }
}

fn run(command: StructuredCommand) -> InstallAction {
    InstallAction::Run {
        notice: None,
        command,
    }
}

/// Command that installs the Appium server itself at `version`.
pub fn toolchain_command(version: &str, options: &WizardOptions) -> StructuredCommand {
    StructuredCommand::new(
        &options.npm_program,
        ["install".to_string(), "-g".to_string(), format!("appium@{}", version)],
    )
}
