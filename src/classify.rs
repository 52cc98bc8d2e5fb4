//! Category classification for drivers and plugins.
//!
//! Matching is substring containment of a category keyword within the
//! canonical name, so a name can satisfy several keyword lists. The rule
//! tables below are checked in order and the first hit wins; a name that
//! matches nothing lands in the kind's fallback category.

use crate::catalog::ExtensionKind;
use serde::{Deserialize, Serialize};

/// Install category of a driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum DriverCategory {
    /// Appium 1-only drivers installed as plain npm packages.
    Legacy,
    /// Community drivers installed through `--source=npm`.
    ThirdParty,
    /// Drivers maintained by the Appium project.
    Official,
    /// Anything else, installed as a global npm package.
    Unlisted,
}

/// Install category of a plugin-menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum PluginCategory {
    /// Plugins maintained by the Appium project.
    OfficialPlugin,
    /// Community plugins installed through `--source=npm`.
    ThirdPartyPlugin,
    /// Official standalone tools published on npm.
    OfficialTool,
    /// Tools built into the Appium CLI; nothing to install.
    ExtensionTool,
    /// Other helper tools published on npm.
    OtherTool,
    /// Client libraries and anything unrecognised.
    ClientLibrary,
}

/// Category of any catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// A driver category.
    Driver(DriverCategory),
    /// A plugin-menu category.
    Plugin(PluginCategory),
}

const OFFICIAL_DRIVERS: &[&str] = &[
    "chromium",
    "espresso",
    "gecko",
    "mac2",
    "safari",
    "uiautomator2",
    "windows",
    "xcuitest",
];

const THIRD_PARTY_DRIVERS: &[&str] = &[
    "appium-flutter-driver",
    "appium-flutter-integration-driver",
    "appium-lg-webos-driver",
    "appium-novawindows-driver",
    "@headspinio/appium-roku-driver",
    "appium-tizen-tv-driver",
];

const LEGACY_DRIVERS: &[&str] = &["appium-tizen-driver", "appium-youiengine-driver"];

const OFFICIAL_PLUGINS: &[&str] = &[
    "execute-driver",
    "images",
    "inspector",
    "relaxed-caps",
    "storage",
    "universal-xml",
];

const THIRD_PARTY_PLUGINS: &[&str] = &[
    "appium-altunity-plugin",
    "appium-device-farm",
    "appium-gestures-plugin",
    "appium-interceptor",
    "appium-ocr-plugin",
    "appium-reporter-plugin",
    "appium-wait-plugin",
];

const OFFICIAL_TOOLS: &[&str] = &["appium-inspector"];

const EXTENSION_TOOLS: &[&str] = &["appium-doctor"];

const OTHER_TOOLS: &[&str] = &["appium-installer"];

/// Driver rules in priority order.
///
/// Third-party precedes official because `appium-novawindows-driver`
/// contains the official keyword `windows`.
pub const DRIVER_RULES: &[(DriverCategory, &[&str])] = &[
    (DriverCategory::Legacy, LEGACY_DRIVERS),
    (DriverCategory::ThirdParty, THIRD_PARTY_DRIVERS),
    (DriverCategory::Official, OFFICIAL_DRIVERS),
];

/// Plugin rules in priority order.
///
/// Official plugins come first, so `appium-inspector` (which contains the
/// plugin keyword `inspector`) resolves to [`PluginCategory::OfficialPlugin`]
/// before the official-tool rule is consulted.
pub const PLUGIN_RULES: &[(PluginCategory, &[&str])] = &[
    (PluginCategory::OfficialPlugin, OFFICIAL_PLUGINS),
    (PluginCategory::ThirdPartyPlugin, THIRD_PARTY_PLUGINS),
    (PluginCategory::OfficialTool, OFFICIAL_TOOLS),
    (PluginCategory::ExtensionTool, EXTENSION_TOOLS),
    (PluginCategory::OtherTool, OTHER_TOOLS),
];

fn first_match<C: Copy>(name: &str, rules: &[(C, &[&str])], fallback: C) -> C {
    rules
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| name.contains(keyword)))
        .map(|(category, _)| *category)
        .unwrap_or(fallback)
}

/// Classify a canonical driver name.
///
/// ```rust
/// use appium_setup::{classify_driver, DriverCategory};
///
/// assert_eq!(classify_driver("xcuitest"), DriverCategory::Official);
/// assert_eq!(classify_driver("appium-tizen-driver"), DriverCategory::Legacy);
/// assert_eq!(classify_driver("my-custom-driver"), DriverCategory::Unlisted);
/// ```
pub fn classify_driver(name: &str) -> DriverCategory {
    first_match(name, DRIVER_RULES, DriverCategory::Unlisted)
}

/// Classify a canonical plugin-menu name.
///
/// ```rust
/// use appium_setup::{classify_plugin, PluginCategory};
///
/// assert_eq!(classify_plugin("images"), PluginCategory::OfficialPlugin);
/// assert_eq!(classify_plugin("appium-doctor"), PluginCategory::ExtensionTool);
/// assert_eq!(classify_plugin("appium-ruby-client"), PluginCategory::ClientLibrary);
/// ```
pub fn classify_plugin(name: &str) -> PluginCategory {
    first_match(name, PLUGIN_RULES, PluginCategory::ClientLibrary)
}

/// Classify a canonical name of the given kind. Total: every name gets a category.
pub fn classify(name: &str, kind: ExtensionKind) -> Category {
    match kind {
        ExtensionKind::Driver => Category::Driver(classify_driver(name)),
        ExtensionKind::Plugin => Category::Plugin(classify_plugin(name)),
    }
}
