//! Built-in installation documentation.

use crate::environment::Environment;
use crate::install::CommandRunner;
use crate::menu::Prompter;
use crate::options::WizardOptions;
use crate::system_info::show_system_information;
use crate::WizardError;
use std::io::{BufRead, Write};
use strum::IntoEnumIterator;

/// An entry of the documentation menu, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter, strum::AsRefStr, strum::IntoStaticStr)]
pub enum DocSection {
    /// Features and supported platforms.
    #[strum(serialize = "Appium 3.0 Overview")]
    Overview,
    /// Host and mobile prerequisites.
    #[strum(serialize = "System Requirements")]
    SystemRequirements,
    /// Installing Node.js per platform.
    #[strum(serialize = "Node.js Installation")]
    NodeInstallation,
    /// Installing and starting the Appium server.
    #[strum(serialize = "Appium Installation")]
    AppiumInstallation,
    /// Official, third-party and legacy drivers.
    #[strum(serialize = "Driver Installation")]
    DriverInstallation,
    /// Plugins and their usage.
    #[strum(serialize = "Plugin Installation")]
    PluginInstallation,
    /// Android, iOS, Windows and macOS setup.
    #[strum(serialize = "Platform-Specific Setup")]
    PlatformSetup,
    /// Config files and server flags.
    #[strum(serialize = "Configuration Management")]
    Configuration,
    /// Gathered live rather than printed from text.
    #[strum(serialize = "System Information")]
    SystemInformation,
    /// Common failures and fixes.
    #[strum(serialize = "Troubleshooting")]
    Troubleshooting,
    /// Leaves the documentation menu.
    #[strum(serialize = "Back to Main Menu")]
    Back,
}

impl DocSection {
    /// Menu title.
    pub fn title(&self) -> &'static str {
        (*self).into()
    }

    /// Heading lines printed before the section body.
    pub fn heading(&self) -> [String; 2] {
        let title = self.title();
        [format!("\n📖 {}", title), "=".repeat(title.len() + 4)]
    }

    /// Static text of the section, `None` for the dynamic and navigation entries.
    pub fn body(&self) -> Option<&'static str> {
        match self {
            Self::Overview => Some(OVERVIEW),
            Self::SystemRequirements => Some(SYSTEM_REQUIREMENTS),
            Self::NodeInstallation => Some(NODE_INSTALLATION),
            Self::AppiumInstallation => Some(APPIUM_INSTALLATION),
            Self::DriverInstallation => Some(DRIVER_INSTALLATION),
            Self::PluginInstallation => Some(PLUGIN_INSTALLATION),
            Self::PlatformSetup => Some(PLATFORM_SETUP),
            Self::Configuration => Some(CONFIGURATION),
            Self::Troubleshooting => Some(TROUBLESHOOTING),
            Self::SystemInformation | Self::Back => None,
        }
    }

    /// All sections in menu order.
    pub fn all() -> Vec<Self> {
        Self::iter().collect()
    }
}

/// Run the documentation menu until the user picks "Back to Main Menu".
pub async fn browse<R, W, C>(
    prompter: &mut Prompter<R, W>,
    runner: &C,
    env: &Environment,
    options: &WizardOptions,
) -> Result<(), WizardError>
where
    R: BufRead,
    W: Write,
    C: CommandRunner,
{
    prompter.println("\n📚 Detailed Installation Documentation")?;
    prompter.println("=====================================")?;

    let sections = DocSection::all();
    loop {
        let section = prompter.select_one(&sections, "Select documentation section:")?;
        if section == DocSection::Back {
            return Ok(());
        }
        tracing::debug!(section = section.title(), "showing documentation");

        prompter.print_lines(section.heading())?;
        match section.body() {
            Some(body) => prompter.println(body)?,
            None => show_system_information(prompter, runner, env, options).await?,
        }
        prompter.pause()?;
    }
}

const OVERVIEW: &str = "
🚀 Appium 3.0 Overview
=====================

Appium 3.0 is the latest version of the open-source mobile automation framework.

Key Features:
• WebDriver BiDi protocol support
• Advanced plugin system
• Better performance and security
• Cross-platform support (iOS, Android, Windows, macOS)
• Multiple programming language support

Supported Platforms:
• Mobile: iOS, Android, Tizen
• Desktop: Windows, macOS, Linux
• Web: Chrome, Firefox, Safari
• TV: Roku, Android TV, Samsung TV

Documentation: https://appium.io/docs/en/3.0/
";

const SYSTEM_REQUIREMENTS: &str = "
🔧 System Requirements
=====================

Minimum Requirements:
• Node.js 16.0.0 or higher
• npm (comes with Node.js)
• Internet connection
• Platform-specific tools

Platform-Specific Requirements:

Windows:
• PowerShell or CMD
• Administrator privileges (for some installations)
• Windows 10 or higher

macOS:
• Xcode (for iOS automation)
• Homebrew (recommended)
• macOS 10.15 or higher

Linux:
• sudo privileges
• Ubuntu 18.04+ or CentOS 7+
• Development tools

Mobile Automation Requirements:

Android:
• Android SDK
• Java JDK 8+
• Android device or emulator
• ANDROID_HOME environment variable

iOS (macOS only):
• Xcode
• iOS Simulator or device
• Carthage (for WebDriverAgent)
• Apple Developer account (for real devices)
";

const NODE_INSTALLATION: &str = r#"
📦 Node.js Installation Guide
============================

Method 1: Official Website (Recommended)
1. Visit https://nodejs.org
2. Download LTS version (Long Term Support)
3. Run the installer
4. Follow installation wizard
5. Restart terminal/command prompt
6. Verify: node --version

Method 2: Package Managers

Windows (Chocolatey):
1. Install Chocolatey: https://chocolatey.org/install
2. Run: choco install nodejs

macOS (Homebrew):
1. Install Homebrew: /bin/bash -c "$(curl -fsSL https://raw.githubusercontent.com/Homebrew/install/HEAD/install.sh)"
2. Run: brew install node

Linux (Ubuntu/Debian):
1. Update package list: sudo apt update
2. Install Node.js: sudo apt install nodejs npm

Linux (CentOS/RHEL):
1. Install Node.js: sudo yum install nodejs npm

Verification:
• node --version (should show v16+)
• npm --version (should show 8+)
"#;

const APPIUM_INSTALLATION: &str = "
🚀 Appium Installation Guide
===========================

Step 1: Install Appium
npm install -g appium@latest

Step 2: Verify Installation
appium --version

Step 3: Install Drivers
appium driver install uiautomator2  # Android
appium driver install xcuitest     # iOS (macOS only)

Step 4: Verify Drivers
appium driver list

Step 5: Start Appium Server
appium server

Alternative Installation Methods:

Using npm in project:
npm init -y
npm install appium
npx appium driver install uiautomator2

Using yarn:
yarn global add appium
yarn global add appium-uiautomator2-driver

Troubleshooting:
• Permission errors: Use sudo (Linux/macOS) or run as Administrator (Windows)
• Network issues: Check firewall and proxy settings
• Version conflicts: Use nvm to manage Node.js versions
";

const DRIVER_INSTALLATION: &str = "
🔧 Driver Installation Guide
============================

Official Drivers:
• chromium: appium driver install chromium
• espresso: appium driver install espresso
• gecko: appium driver install gecko
• mac2: appium driver install mac2
• safari: appium driver install safari
• uiautomator2: appium driver install uiautomator2
• windows: appium driver install windows
• xcuitest: appium driver install xcuitest

Third-party Drivers:
• appium-flutter-driver: appium driver install --source=npm appium-flutter-driver
• appium-lg-webos-driver: appium driver install --source=npm appium-lg-webos-driver
• appium-novawindows-driver: appium driver install --source=npm appium-novawindows-driver

Legacy Drivers (Appium 1 only):
• appium-tizen-driver: npm install appium-tizen-driver
• appium-youiengine-driver: npm install appium-youiengine-driver

Driver Selection Guide:

For Android:
• uiautomator2: Modern Android apps
• espresso: Android native apps
• flutter: Flutter apps

For iOS:
• xcuitest: iOS native apps
• flutter: Flutter apps

For Web:
• chromium: Chrome, Edge
• gecko: Firefox
• safari: Safari

For Desktop:
• windows: Windows apps
• mac2: macOS apps

Verification:
appium driver list
appium driver doctor [driver-name]
";

const PLUGIN_INSTALLATION: &str = "
🔌 Plugin Installation Guide
===========================

Official Plugins:
• execute-driver: appium plugin install execute-driver
• images: appium plugin install images
• inspector: appium plugin install inspector
• relaxed-caps: appium plugin install relaxed-caps
• storage: appium plugin install storage
• universal-xml: appium plugin install universal-xml

Third-party Plugins:
• appium-altunity-plugin: appium plugin install --source=npm appium-altunity-plugin
• appium-device-farm: appium plugin install --source=npm appium-device-farm
• appium-gestures-plugin: appium plugin install --source=npm appium-gestures-plugin

Client Libraries:
• appium-python-client: pip install Appium-Python-Client
• appium-java-client: Add to Maven/Gradle dependencies
• appium-javascript-client: npm install appium-javascript-client
• appium-dotnet-client: dotnet add package Appium.WebDriver

Tools:
• appium-inspector: npm install -g appium-inspector
• appium-doctor: Integrated with Appium CLI

Plugin Management:
• List plugins: appium plugin list
• Uninstall plugin: appium plugin uninstall [plugin-name]
• Update plugin: appium plugin update [plugin-name]
";

const PLATFORM_SETUP: &str = "
🤖 Platform-Specific Setup
==========================

Android Setup:

1. Install Android Studio:
   • Download from https://developer.android.com/studio
   • Install with default settings
   • Open SDK Manager

2. Install Android SDK:
   • Android SDK Platform (API 30+)
   • Android SDK Platform-Tools
   • Android SDK Build-Tools

3. Set Environment Variables:
   • ANDROID_HOME: Path to Android SDK
   • Add to PATH: $ANDROID_HOME/platform-tools

4. Install Java JDK:
   • Download from https://adoptium.net/
   • Set JAVA_HOME environment variable

5. Setup Device/Emulator:
   • Create AVD in Android Studio
   • Or connect real device with USB Debugging

iOS Setup (macOS only):

1. Install Xcode:
   • Download from Mac App Store
   • Open Xcode and accept license
   • Install Command Line Tools: xcode-select --install

2. Install Carthage:
   • brew install carthage
   • Or download from GitHub releases

3. Setup Simulator:
   • Xcode → Window → Devices and Simulators
   • Create iPhone/iPad simulator
   • Test simulator functionality

4. WebDriverAgent:
   • Automatically installed with XCUITest driver
   • First run will compile (takes several minutes)

Verification Commands:
• Android: adb devices
• iOS: xcrun simctl list devices
• Appium: appium driver doctor [driver-name]
";

const CONFIGURATION: &str = r#"
⚙️ Configuration Management
===========================

1. Appium Configuration File (.appiumrc.json):

Basic Configuration:
{
  "server": {
    "port": 4723,
    "host": "0.0.0.0",
    "log-level": "info"
  },
  "plugins": {
    "images": {
      "enabled": true
    },
    "relaxed-caps": {
      "enabled": true
    }
  }
}

Advanced Configuration:
{
  "server": {
    "port": 4723,
    "host": "0.0.0.0",
    "log-level": "debug",
    "session-override": true,
    "relaxed-security": true,
    "allow-cors": true,
    "allow-insecure": ["chromedriver_autodownload"]
  },
  "plugins": {
    "images": {
      "enabled": true,
      "threshold": 0.4
    },
    "relaxed-caps": {
      "enabled": true
    },
    "execute-driver": {
      "enabled": true
    }
  }
}

2. Capability Templates:

Android (UiAutomator2):
{
  "platformName": "Android",
  "automationName": "UiAutomator2",
  "deviceName": "Android Emulator",
  "app": "/path/to/app.apk",
  "appPackage": "com.example.app",
  "appActivity": ".MainActivity",
  "noReset": true,
  "fullReset": false
}

iOS (XCUITest):
{
  "platformName": "iOS",
  "automationName": "XCUITest",
  "deviceName": "iPhone 14",
  "app": "/path/to/app.app",
  "bundleId": "com.example.app",
  "noReset": true,
  "fullReset": false
}

Web (Chrome):
{
  "platformName": "Android",
  "automationName": "UiAutomator2",
  "deviceName": "Android Emulator",
  "browserName": "Chrome",
  "chromedriverExecutable": "/path/to/chromedriver"
}

3. Server Settings:

Start Appium Server:
appium server --port 4723 --host 0.0.0.0

With Configuration File:
appium server --config .appiumrc.json

With Custom Settings:
appium server --port 4724 --log-level debug --relaxed-security

4. Environment Variables:

APPIUM_HOME=/usr/local/lib/node_modules/appium
ANDROID_HOME=/Users/username/Library/Android/sdk
JAVA_HOME=/Library/Java/JavaVirtualMachines/jdk-11.jdk/Contents/Home

5. Driver Configuration:

UiAutomator2 Driver:
{
  "server": {
    "port": 4723
  },
  "uiautomator2": {
    "skipServerInstallation": false,
    "enforceXPath1": true
  }
}

XCUITest Driver:
{
  "server": {
    "port": 4723
  },
  "xcuitest": {
    "skipServerInstallation": false,
    "useNewWDA": false,
    "wdaStartupRetries": 3
  }
}

6. Plugin Configuration:

Images Plugin:
{
  "images": {
    "enabled": true,
    "threshold": 0.4,
    "matchTemplate": true
  }
}

Relaxed Caps Plugin:
{
  "relaxed-caps": {
    "enabled": true,
    "allowInsecure": ["chromedriver_autodownload"]
  }
}

7. Logging Configuration:

Log Levels:
• error: Only error messages
• warn: Warning and error messages
• info: General information (default)
• debug: Detailed debugging information
• verbose: Very detailed information

Log Output:
appium server --log-level debug --log-timestamp

8. Security Settings:

Relaxed Security:
appium server --relaxed-security

Allow CORS:
appium server --allow-cors

Allow Insecure:
appium server --allow-insecure chromedriver_autodownload

9. Performance Optimization:

Session Override:
appium server --session-override

Keep Alive:
appium server --keep-alive-timeout 600

10. Configuration Examples:

Development Environment:
{
  "server": {
    "port": 4723,
    "log-level": "debug",
    "relaxed-security": true
  }
}

Production Environment:
{
  "server": {
    "port": 4723,
    "log-level": "info",
    "session-override": false
  }
}

CI/CD Environment:
{
  "server": {
    "port": 4723,
    "log-level": "warn",
    "keep-alive-timeout": 300
  }
}
"#;

const TROUBLESHOOTING: &str = "
🔧 Troubleshooting Guide
=======================

Common Issues:

1. Node.js Issues:
   • Permission denied: Use sudo (Linux/macOS) or run as Administrator (Windows)
   • Version conflicts: Use nvm to manage versions
   • PATH issues: Restart terminal after installation

2. Appium Installation Issues:
   • Network errors: Check internet connection and proxy settings
   • Permission errors: Use --unsafe-perm flag
   • Version conflicts: Clear npm cache: npm cache clean --force

3. Driver Issues:
   • Driver not found: Check driver installation with appium driver list
   • Permission errors: Run with appropriate privileges
   • Version mismatches: Update drivers to latest versions

4. Platform-Specific Issues:

Android:
• ADB not found: Check ANDROID_HOME and PATH
• Device not detected: Enable USB Debugging
• Emulator issues: Check AVD configuration

iOS:
• Xcode issues: Update Xcode and Command Line Tools
• Simulator issues: Reset simulator or create new one
• WebDriverAgent issues: Check Carthage installation

5. Network Issues:
• Firewall: Allow Node.js and Appium through firewall
• Proxy: Configure npm proxy settings
• Corporate networks: Contact IT for assistance

Debug Commands:
• appium --version
• appium driver list
• appium plugin list
• appium driver doctor [driver-name]
• node --version
• npm --version

Getting Help:
• Appium Documentation: https://appium.io/docs/
• GitHub Issues: https://github.com/appium/appium/issues
• Community Forum: https://discuss.appium.io/
";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedRunner;
    use std::io::Cursor;

    #[test]
    fn test_menu_order() {
        let titles: Vec<_> = DocSection::all().iter().map(|s| s.title()).collect();
        assert_eq!(
            titles,
            vec![
                "Appium 3.0 Overview",
                "System Requirements",
                "Node.js Installation",
                "Appium Installation",
                "Driver Installation",
                "Plugin Installation",
                "Platform-Specific Setup",
                "Configuration Management",
                "System Information",
                "Troubleshooting",
                "Back to Main Menu",
            ]
        );
    }

    #[test]
    fn test_heading_underline_length() {
        let [title, underline] = DocSection::Troubleshooting.heading();
        assert_eq!(title, "\n📖 Troubleshooting");
        assert_eq!(underline, "=".repeat("Troubleshooting".len() + 4));
    }

    #[test]
    fn test_every_text_section_has_body() {
        for section in DocSection::all() {
            let dynamic = matches!(section, DocSection::SystemInformation | DocSection::Back);
            assert_eq!(section.body().is_none(), dynamic, "{:?}", section);
        }
    }

    #[tokio::test]
    async fn test_browse_shows_section_then_returns() {
        let input = "1\n\n11\n";
        let mut prompter = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let runner = ScriptedRunner::new();
        let env = Environment::fixed(Vec::<(String, String)>::new());
        browse(&mut prompter, &runner, &env, &WizardOptions::default())
            .await
            .unwrap();
        let out = String::from_utf8(prompter.into_inner().1).unwrap();
        assert!(out.contains("📖 Appium 3.0 Overview"));
        assert!(out.contains("WebDriver BiDi protocol support"));
        assert!(out.contains("Press Enter to continue..."));
        assert!(runner.commands().is_empty());
    }
}
