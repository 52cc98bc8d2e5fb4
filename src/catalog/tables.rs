//! Static catalogs used when the live queries are unavailable.
//!
//! Entries are display strings: the canonical name, optionally followed by
//! a parenthesised description. Grouping is for readers only; categories
//! are re-derived by the classifier.

/// Drivers offered when `appium driver list` cannot be queried.
pub const DEFAULT_DRIVERS: &[&str] = &[
    // Official
    "chromium (Chromium - Chrome, Edge)",
    "espresso (Espresso - Android Native)",
    "gecko (Gecko - Firefox)",
    "mac2 (Mac2 - macOS Native)",
    "safari (Safari - Safari Browser)",
    "uiautomator2 (UiAutomator2 - Android, TV, Wear)",
    "windows (Windows - Windows Native)",
    "xcuitest (XCUITest - iOS, iPadOS, tvOS)",
    // Third-party
    "appium-flutter-driver (Flutter - iOS/Android)",
    "appium-flutter-integration-driver (Flutter Integration)",
    "appium-lg-webos-driver (LG WebOS - LG TV)",
    "appium-novawindows-driver (NovaWindows - Windows)",
    "@headspinio/appium-roku-driver (Roku - Roku Channels)",
    "appium-tizen-tv-driver (TizenTV - Tizen TV)",
    // Legacy, Appium 1 only
    "appium-tizen-driver (Tizen - Legacy, Appium 1 only)",
    "appium-youiengine-driver (You.i Engine - Legacy, Appium 1 only)",
];

/// Plugins, client libraries and tools offered when `appium plugin list`
/// cannot be queried.
pub const DEFAULT_PLUGINS: &[&str] = &[
    // Official plugins
    "execute-driver (Execute Driver - Official)",
    "images (Images - Official)",
    "inspector (Inspector - Official)",
    "relaxed-caps (Relaxed Caps - Official)",
    "storage (Storage - Official)",
    "universal-xml (Universal XML - Official)",
    // Third-party plugins
    "appium-altunity-plugin (AltUnity - Unity Games)",
    "appium-device-farm (Device Farm - Device Management)",
    "appium-gestures-plugin (Gestures - W3C Actions)",
    "appium-interceptor (Interceptor - API Mocking)",
    "appium-ocr-plugin (OCR - Text Recognition)",
    "appium-reporter-plugin (Reporter - HTML Reports)",
    "appium-wait-plugin (Wait - Timeout Management)",
    // Client libraries
    "appium-dotnet-client (.NET)",
    "appium-python-client (Python)",
    "appium-java-client (Java)",
    "appium-javascript-client (JavaScript)",
    "appium-ruby-client (Ruby)",
    "appium-php-client (PHP)",
    "appium-csharp-client (C#)",
    "appium-go-client (Go)",
    // Tools
    "appium-selenium-ide (Selenium IDE)",
    "appium-inspector (Appium Inspector)",
    "appium-inspector (Appium Inspector - Official)",
    "appium-doctor (Appium Doctor - Environment Validation)",
    "appium-installer (Appium Installer - Setup Tool)",
];

/// Version entries after the `latest` and LTS options when npm cannot be queried.
pub const FALLBACK_VERSIONS: &[&str] = &["2.0.0", "1.22.3", "1.22.2", "1.22.1", "1.22.0"];

/// Menu label that resolves to the `latest` dist-tag.
pub const LATEST_LABEL: &str = "latest (most recent)";

/// Marker appended to the LTS pin in the version menu.
pub const LTS_MARKER: &str = "(LTS)";

/// Marker identifying the `latest` entry in the version menu.
pub const LATEST_MARKER: &str = "(most recent)";
