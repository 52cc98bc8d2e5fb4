//! External tools the wizard probes.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// A command-line tool whose presence and version the wizard reports.
///
/// # Example
///
/// ```rust
/// use appium_setup::Tool;
///
/// for tool in Tool::all() {
///     println!("{}: {} {:?}", tool.display_name(), tool.executable_name(), tool.version_args());
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
#[non_exhaustive]
pub enum Tool {
    /// Node.js runtime
    Node,
    /// npm package manager
    Npm,
    /// Appium server CLI
    Appium,
    /// Java runtime (Android tooling)
    Java,
    /// Python interpreter
    Python,
    /// Git
    Git,
    /// Xcode build tools (macOS only)
    Xcode,
    /// Homebrew (macOS only)
    Homebrew,
    /// Android Debug Bridge
    Adb,
    /// Carthage (WebDriverAgent dependency manager)
    Carthage,
}

impl Tool {
    /// The executable name to search for in PATH.
    ///
    /// ```rust
    /// use appium_setup::Tool;
    ///
    /// assert_eq!(Tool::Xcode.executable_name(), "xcodebuild");
    /// ```
    pub fn executable_name(&self) -> &'static str {
        match self {
            Self::Node => "node",
            Self::Npm => "npm",
            Self::Appium => "appium",
            Self::Java => "java",
            Self::Python => "python",
            Self::Git => "git",
            Self::Xcode => "xcodebuild",
            Self::Homebrew => "brew",
            Self::Adb => "adb",
            Self::Carthage => "carthage",
        }
    }

    /// Arguments that make the tool print its version.
    pub fn version_args(&self) -> &'static [&'static str] {
        match self {
            Self::Java | Self::Xcode => &["-version"],
            Self::Adb | Self::Carthage => &["version"],
            _ => &["--version"],
        }
    }

    /// Label used in reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Node => "Node.js",
            Self::Npm => "NPM",
            Self::Appium => "Appium",
            Self::Java => "Java",
            Self::Python => "Python",
            Self::Git => "Git",
            Self::Xcode => "Xcode",
            Self::Homebrew => "Homebrew",
            Self::Adb => "ADB",
            Self::Carthage => "Carthage",
        }
    }

    /// Whether the tool only exists on macOS hosts.
    pub fn is_macos_only(&self) -> bool {
        matches!(self, Self::Xcode | Self::Homebrew | Self::Carthage)
    }

    /// Iterator over all known tools.
    pub fn all() -> impl Iterator<Item = Self> {
        <Self as IntoEnumIterator>::iter()
    }
}
