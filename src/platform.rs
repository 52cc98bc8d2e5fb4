//! Host platform identification.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// The operating system family the wizard is preparing.
///
/// [`Platform::detect`] only produces a suggestion; the wizard always asks
/// the user to pick one of the [`Platform::selectable`] values explicitly.
///
/// # Example
///
/// ```rust
/// use appium_setup::Platform;
///
/// assert_eq!(Platform::from_os("macos"), Platform::MacOs);
/// assert_eq!(Platform::from_os("freebsd"), Platform::Unknown);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Platform {
    /// Microsoft Windows
    Windows,
    /// Apple macOS
    MacOs,
    /// Any Linux distribution
    Linux,
    /// Anything else the probe does not recognise
    Unknown,
}

impl Platform {
    /// Map a raw OS identifier (as found in `std::env::consts::OS`) to a platform.
    pub fn from_os(os: &str) -> Self {
        match os {
            "windows" => Self::Windows,
            "macos" => Self::MacOs,
            "linux" => Self::Linux,
            _ => Self::Unknown,
        }
    }

    /// Probe the platform this binary is running on.
    pub fn detect() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Human-readable name, also used as the menu label.
    ///
    /// ```rust
    /// use appium_setup::Platform;
    ///
    /// assert_eq!(Platform::MacOs.display_name(), "macOS");
    /// ```
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Windows => "Windows",
            Self::MacOs => "macOS",
            Self::Linux => "Linux",
            Self::Unknown => "Unknown",
        }
    }

    /// Inverse of [`Platform::display_name`] for the selectable platforms.
    pub fn from_display_name(name: &str) -> Option<Self> {
        Self::selectable().find(|p| p.display_name() == name)
    }

    /// Platforms offered in the selection menu, in menu order.
    pub fn selectable() -> impl Iterator<Item = Self> {
        <Self as IntoEnumIterator>::iter().filter(|p| *p != Self::Unknown)
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
