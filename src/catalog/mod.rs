//! Driver, plugin and version catalogs.
//!
//! Each catalog is queried live first and falls back to the static tables
//! when the query fails, returns nothing, or the wizard runs offline.

mod parser;
mod tables;

pub use parser::{
    lts_label, parse_extension_list, parse_npm_versions, resolve_version_choice, version_menu,
    LIVE_NAME_PREFIX,
};
pub use tables::{
    DEFAULT_DRIVERS, DEFAULT_PLUGINS, FALLBACK_VERSIONS, LATEST_LABEL, LATEST_MARKER, LTS_MARKER,
};

use crate::install::{CommandRunner, StructuredCommand};
use crate::ProbeError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The two kinds of Appium extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum ExtensionKind {
    /// A platform driver.
    Driver,
    /// A plugin (the plugin menu also carries clients and tools).
    Plugin,
}

impl ExtensionKind {
    /// Noun used on the Appium command line (`appium driver ...`).
    pub fn cli_noun(&self) -> &'static str {
        match self {
            Self::Driver => "driver",
            Self::Plugin => "plugin",
        }
    }

    /// Static catalog for this kind.
    pub fn defaults(&self) -> &'static [&'static str] {
        match self {
            Self::Driver => DEFAULT_DRIVERS,
            Self::Plugin => DEFAULT_PLUGINS,
        }
    }

    /// Plural used in user-facing messages.
    pub fn plural(&self) -> &'static str {
        match self {
            Self::Driver => "drivers",
            Self::Plugin => "plugins",
        }
    }
}

/// Strip the parenthesised description from a catalog entry.
///
/// ```rust
/// use appium_setup::canonical_name;
///
/// assert_eq!(canonical_name("xcuitest (XCUITest - iOS, iPadOS, tvOS)"), "xcuitest");
/// assert_eq!(canonical_name("  appium-wait-plugin@3.0.2 "), "appium-wait-plugin@3.0.2");
/// ```
pub fn canonical_name(entry: &str) -> &str {
    entry.split('(').next().unwrap_or(entry).trim()
}

/// Why a static catalog was used instead of a live one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    /// The live query failed.
    QueryFailed(ProbeError),
    /// The live query succeeded but yielded no usable entries.
    NoEntries,
    /// Live queries were disabled.
    Offline,
}

/// Where a catalog's entries came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Parsed from a live query.
    Live,
    /// Taken from the static tables.
    Fallback(FallbackReason),
}

/// A list of menu entries together with its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    /// Menu entries in display order.
    pub entries: Vec<String>,
    /// Where the entries came from.
    pub source: CatalogSource,
}

impl Catalog {
    fn fallback(entries: Vec<String>, reason: FallbackReason) -> Self {
        Self {
            entries,
            source: CatalogSource::Fallback(reason),
        }
    }

    /// True when the live query failed outright (not offline, not empty).
    ///
    /// The wizard only warns the user in this case.
    pub fn query_failed(&self) -> bool {
        matches!(
            self.source,
            CatalogSource::Fallback(FallbackReason::QueryFailed(_))
        )
    }
}

/// Fetch the drivers or plugins that are available but not installed.
///
/// Runs `appium <kind> list --installed=false`.
pub async fn fetch_extensions<C: CommandRunner>(
    runner: &C,
    appium_program: &str,
    kind: ExtensionKind,
    limit: Duration,
    offline: bool,
) -> Catalog {
    let defaults = || kind.defaults().iter().map(|s| s.to_string()).collect();
    if offline {
        return Catalog::fallback(defaults(), FallbackReason::Offline);
    }

    let command = StructuredCommand::new(
        appium_program,
        [kind.cli_noun(), "list", "--installed=false"],
    );
    match runner.capture(&command, limit).await {
        Ok(output) => {
            let entries = parse_extension_list(&output);
            if entries.is_empty() {
                tracing::debug!(kind = kind.cli_noun(), "live list empty, using defaults");
                Catalog::fallback(defaults(), FallbackReason::NoEntries)
            } else {
                Catalog {
                    entries,
                    source: CatalogSource::Live,
                }
            }
        }
        Err(error) => {
            tracing::warn!(kind = kind.cli_noun(), %error, "catalog query failed, using defaults");
            Catalog::fallback(defaults(), FallbackReason::QueryFailed(error))
        }
    }
}

/// Fetch the Appium version menu.
///
/// Runs `npm view appium versions --json`. Entries are always headed by
/// the `latest` and LTS options.
pub async fn fetch_versions<C: CommandRunner>(
    runner: &C,
    npm_program: &str,
    lts: &str,
    limit: Duration,
    offline: bool,
) -> Catalog {
    let defaults = || version_menu(FALLBACK_VERSIONS, lts);
    if offline {
        return Catalog::fallback(defaults(), FallbackReason::Offline);
    }

    let command = StructuredCommand::new(npm_program, ["view", "appium", "versions", "--json"]);
    let recent = match runner.capture(&command, limit).await {
        Ok(output) => parse_npm_versions(&output),
        Err(error) => Err(error),
    };
    match recent {
        Ok(recent) if recent.is_empty() => {
            Catalog::fallback(defaults(), FallbackReason::NoEntries)
        }
        Ok(recent) => Catalog {
            entries: version_menu(&recent, lts),
            source: CatalogSource::Live,
        },
        Err(error) => {
            tracing::warn!(%error, "version query failed, using defaults");
            Catalog::fallback(defaults(), FallbackReason::QueryFailed(error))
        }
    }
}
