//! Android and iOS automation environment checks, shown after installing.

use crate::detect::detect_tool;
use crate::environment::Environment;
use crate::install::{CommandRunner, StructuredCommand};
use crate::menu::Prompter;
use crate::{Platform, Tool, ToolStatus, WizardError};
use std::io::{BufRead, Write};
use std::time::Duration;

/// Variables naming the Android SDK, in lookup order.
pub const ANDROID_SDK_VARS: &[&str] = &["ANDROID_HOME", "ANDROID_SDK_ROOT"];

/// Variable naming the JDK.
pub const JAVA_HOME_VAR: &str = "JAVA_HOME";

const NEXT_STEPS: &[&str] = &[
    "\n🎯 Next Steps:",
    "1. Start Appium server: appium server",
    "2. Start writing tests: https://appium.io/docs/en/3.0/quickstart/",
    "3. Use Appium Inspector: appium inspector",
    "4. Documentation: https://appium.io/docs/en/3.0/",
];

/// Android setup instructions.
pub const ANDROID_SETUP: &[&str] = &[
    "\n📱 Android Automation Setup Instructions:",
    "==========================================",
    "\n🔧 Android SDK Installation:",
    "1. Download Android Studio: https://developer.android.com/studio",
    "2. Open Android Studio and go to SDK Manager",
    "3. Settings -> Languages & Frameworks -> Android SDK",
    "4. Download Android SDK Platform (API level 30+)",
    "5. Download Android SDK Platform-Tools",
    "6. Set ANDROID_HOME environment variable",
    "\n☕ Java JDK Installation:",
    "1. Download Java JDK 8+: https://adoptium.net/",
    "2. Set JAVA_HOME environment variable",
    "\n📱 Device Preparation:",
    "1. Android Emulator: Create with Android Studio AVD Manager",
    "2. Real Device: Enable USB Debugging",
    "3. Test device connection: adb devices",
    "\n🔍 Installation Verification:",
    "1. appium driver doctor uiautomator2",
    "2. appium server (check that driver is listed)",
];

/// iOS setup instructions.
pub const IOS_SETUP: &[&str] = &[
    "\n🍎 iOS Automation Setup Instructions:",
    "=====================================",
    "\n🔧 Xcode Installation:",
    "1. Download Xcode from Mac App Store",
    "2. Install Xcode Command Line Tools: xcode-select --install",
    "3. Open Xcode and accept license",
    "4. Open Xcode at least once and accept Developer Tools",
    "\n📱 iOS Simulator Setup:",
    "1. Xcode -> Window -> Devices and Simulators",
    "2. Click + button in Simulators tab",
    "3. Create iPhone/iPad simulator",
    "4. Start simulator and test",
    "\n🔧 Carthage Installation (for WebDriverAgent):",
    "1. Install with Homebrew: brew install carthage",
    "2. Alternative: https://github.com/Carthage/Carthage/releases",
    "3. Verify installation: carthage version",
    "\n🤖 WebDriverAgent Installation:",
    "1. Install XCUITest driver: appium driver install xcuitest",
    "2. WebDriverAgent will be installed automatically",
    "3. WebDriverAgent will be compiled on first run",
    "4. This process may take several minutes",
    "\n🔍 Installation Verification:",
    "1. appium driver doctor xcuitest",
    "2. appium server (check that driver is listed)",
    "3. Check WebDriverAgentRunner.app file existence",
    "\n📚 Detailed Information:",
    "- XCUITest Driver: https://appium.github.io/appium-xcuitest-driver/",
    "- WebDriverAgent: https://github.com/appium/WebDriverAgent",
];

/// Results of the Android checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AndroidRequirements {
    /// `ANDROID_HOME` or `ANDROID_SDK_ROOT` is set.
    pub android_sdk: bool,
    /// `JAVA_HOME` is set.
    pub java_jdk: bool,
    /// `adb devices` lists an attached device.
    pub adb_devices: bool,
}

impl AndroidRequirements {
    /// Every check passed.
    pub fn is_ready(&self) -> bool {
        self.android_sdk && self.java_jdk && self.adb_devices
    }
}

/// Results of the iOS checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IosRequirements {
    /// `xcodebuild -version` answered.
    pub xcode: bool,
    /// `xcrun simctl list` answered.
    pub xcrun: bool,
    /// An iPhone or iPad simulator exists.
    pub simulators: bool,
    /// `WebDriverAgentRunner.app` was found under Xcode.
    pub webdriveragent: bool,
    /// `carthage version` answered.
    pub carthage: bool,
}

impl IosRequirements {
    /// Every check passed.
    pub fn is_ready(&self) -> bool {
        self.xcode && self.xcrun && self.simulators && self.webdriveragent && self.carthage
    }
}

/// True when `adb devices` output lists at least one attached device.
///
/// Device lines follow the `List of devices attached` header and have the
/// form `<serial>\tdevice`. Offline and unauthorized entries do not count.
///
/// ```rust
/// use appium_setup::has_connected_device;
///
/// assert!(has_connected_device("List of devices attached\nemulator-5554\tdevice\n\n"));
/// assert!(!has_connected_device("List of devices attached\n\n"));
/// assert!(!has_connected_device("List of devices attached\nR58M\tunauthorized\n"));
/// ```
pub fn has_connected_device(output: &str) -> bool {
    output
        .lines()
        .skip_while(|line| !line.starts_with("List of devices attached"))
        .skip(1)
        .any(|line| line.split_whitespace().nth(1) == Some("device"))
}

/// True when `xcrun simctl list devices` output mentions an iPhone or iPad.
pub fn has_ios_simulator(output: &str) -> bool {
    output.contains("iPhone") || output.contains("iPad")
}

/// Check the Android SDK, the JDK and connected devices.
pub async fn check_android<R, W, C>(
    prompter: &mut Prompter<R, W>,
    runner: &C,
    env: &Environment,
    limit: Duration,
) -> Result<AndroidRequirements, WizardError>
where
    R: BufRead,
    W: Write,
    C: CommandRunner,
{
    prompter.println("\n🤖 Checking Android automation requirements...")?;
    let mut reqs = AndroidRequirements::default();

    match env.first_of(ANDROID_SDK_VARS) {
        Some(home) => {
            prompter.println(format!("✅ ANDROID_HOME: {}", home))?;
            reqs.android_sdk = true;
        }
        None => prompter.println("❌ ANDROID_HOME environment variable not set")?,
    }

    match env.get(JAVA_HOME_VAR) {
        Some(home) => {
            prompter.println(format!("✅ JAVA_HOME: {}", home))?;
            reqs.java_jdk = true;
        }
        None => prompter.println("❌ JAVA_HOME environment variable not set")?,
    }

    let adb = StructuredCommand::new(Tool::Adb.executable_name(), ["devices"]);
    match runner.capture(&adb, limit).await {
        Ok(out) if has_connected_device(&out) => {
            prompter.println("✅ ADB devices found")?;
            reqs.adb_devices = true;
        }
        Ok(_) => prompter.println("⚠️  No ADB devices found (emulator or real device required)")?,
        Err(error) => {
            tracing::debug!(%error, "adb devices failed");
            prompter.println("❌ ADB command could not be executed")?
        }
    }

    Ok(reqs)
}

/// Check Xcode, simctl, simulators, WebDriverAgent and Carthage.
pub async fn check_ios<R, W, C>(
    prompter: &mut Prompter<R, W>,
    runner: &C,
    limit: Duration,
) -> Result<IosRequirements, WizardError>
where
    R: BufRead,
    W: Write,
    C: CommandRunner,
{
    prompter.println("\n🍎 Checking iOS automation requirements...")?;
    let mut reqs = IosRequirements::default();

    match detect_tool(runner, Tool::Xcode, limit).await {
        ToolStatus::Found { summary, .. } => {
            prompter.println(format!("✅ Xcode: {}", summary))?;
            reqs.xcode = true;
        }
        _ => prompter.println("❌ Xcode not found (required only on macOS)")?,
    }

    let simctl = StructuredCommand::new("xcrun", ["simctl", "list"]);
    match runner.capture(&simctl, limit).await {
        Ok(_) => {
            prompter.println("✅ xcrun simctl available")?;
            reqs.xcrun = true;
        }
        Err(_) => prompter.println("❌ xcrun simctl not found")?,
    }

    let devices = StructuredCommand::new("xcrun", ["simctl", "list", "devices"]);
    match runner.capture(&devices, limit).await {
        Ok(out) if has_ios_simulator(&out) => {
            prompter.println("✅ iOS Simulators found")?;
            reqs.simulators = true;
        }
        Ok(_) => prompter.println("⚠️  No iOS Simulator found")?,
        Err(_) => prompter.println("❌ iOS Simulator could not be checked")?,
    }

    let wda = StructuredCommand::new(
        "find",
        ["/Applications/Xcode.app", "-name", "WebDriverAgentRunner.app"],
    );
    match runner.capture(&wda, limit).await {
        Ok(out) if !out.trim().is_empty() => {
            prompter.println("✅ WebDriverAgent found")?;
            reqs.webdriveragent = true;
        }
        Ok(_) => {
            prompter.println("⚠️  WebDriverAgent not found (required for XCUITest driver)")?
        }
        Err(_) => prompter.println("❌ WebDriverAgent could not be checked")?,
    }

    match detect_tool(runner, Tool::Carthage, limit).await {
        ToolStatus::Found { summary, .. } => {
            prompter.println(format!("✅ Carthage: {}", summary))?;
            reqs.carthage = true;
        }
        _ => prompter.println("❌ Carthage not found (required for WebDriverAgent)")?,
    }

    Ok(reqs)
}

fn report_group<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    name: &str,
    ready: bool,
    setup: &[&str],
) -> Result<(), WizardError> {
    if ready {
        prompter.println(format!("\n🎉 {} automation environment ready!", name))
    } else {
        prompter.println(format!("\n⚠️  Additional setup required for {} automation", name))?;
        prompter.print_lines(setup)
    }
}

/// Print the next steps, then check the automation environment.
///
/// macOS gets the iOS checks followed by the Android checks; every other
/// platform gets the Android checks only.
pub async fn show_next_steps<R, W, C>(
    prompter: &mut Prompter<R, W>,
    runner: &C,
    env: &Environment,
    platform: Platform,
    limit: Duration,
) -> Result<(), WizardError>
where
    R: BufRead,
    W: Write,
    C: CommandRunner,
{
    prompter.print_lines(NEXT_STEPS)?;

    if platform == Platform::MacOs {
        let ios = check_ios(prompter, runner, limit).await?;
        let android = check_android(prompter, runner, env, limit).await?;
        report_group(prompter, "iOS", ios.is_ready(), IOS_SETUP)?;
        report_group(prompter, "Android", android.is_ready(), ANDROID_SETUP)?;
    } else {
        let android = check_android(prompter, runner, env, limit).await?;
        report_group(prompter, "Android", android.is_ready(), ANDROID_SETUP)?;
    }
    Ok(())
}
