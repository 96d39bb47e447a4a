//! Display mode preference.
//!
//! The storefront offers light, dark, and "follow the system" modes. The chosen
//! mode persists under the `theme` storage key as a bare word, and reads fail
//! soft to the configured default.

use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::store::Storage;

/// Storage key holding the display mode.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    Light,
    Dark,
    #[default]
    System,
}

/// The concrete look after resolving [`DisplayMode::System`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    Light,
    Dark,
}

impl DisplayMode {
    pub fn as_str(self) -> &'static str {
        match self {
            DisplayMode::Light => "light",
            DisplayMode::Dark => "dark",
            DisplayMode::System => "system",
        }
    }

    pub fn resolve(self, system_prefers_dark: bool) -> Appearance {
        match self {
            DisplayMode::Light => Appearance::Light,
            DisplayMode::Dark => Appearance::Dark,
            DisplayMode::System if system_prefers_dark => Appearance::Dark,
            DisplayMode::System => Appearance::Light,
        }
    }

    /// Next mode for the header toggle: light → dark → system → light.
    pub fn next(self) -> Self {
        match self {
            DisplayMode::Light => DisplayMode::Dark,
            DisplayMode::Dark => DisplayMode::System,
            DisplayMode::System => DisplayMode::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DisplayMode::Light => "Açık",
            DisplayMode::Dark => "Koyu",
            DisplayMode::System => "Sistem",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(DisplayMode::Light),
            "dark" => Ok(DisplayMode::Dark),
            "system" => Ok(DisplayMode::System),
            other => Err(format!("unknown display mode '{other}'")),
        }
    }
}

impl Appearance {
    /// Class applied to the root element.
    pub fn class(self) -> &'static str {
        match self {
            Appearance::Light => "light",
            Appearance::Dark => "dark",
        }
    }
}

/// Stored display mode, or `default` if nothing valid is stored.
pub fn load_display_mode(storage: &dyn Storage, default: DisplayMode) -> DisplayMode {
    match storage.get_item(THEME_KEY) {
        Ok(Some(raw)) => raw.parse().unwrap_or_else(|e: String| {
            warn!(error = %e, "Ignoring stored display mode");
            default
        }),
        Ok(None) => default,
        Err(e) => {
            warn!(error = %e, "Could not read display mode");
            default
        }
    }
}

pub fn save_display_mode(storage: &dyn Storage, mode: DisplayMode) {
    if let Err(e) = storage.set_item(THEME_KEY, mode.as_str()) {
        warn!(error = %e, mode = %mode, "Could not persist display mode");
    }
}
