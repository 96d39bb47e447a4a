//! `novella.toml` configuration loading.
//!
//! Every key is optional; anything missing keeps its default. A file that fails
//! to parse is ignored with a warning, and unknown keys get a typo suggestion.

use std::path::Path;
use std::time::Duration;

use tracing::{debug, warn};

use crate::catalog::{Catalog, TrendingItem};
use crate::error::ConfigError;
use crate::theme::DisplayMode;

/// Config file name looked up in the storefront root.
pub const CONFIG_FILE_NAME: &str = "novella.toml";

/// Delay between a search submission and navigation, leaving room for the
/// overlay's exit animation.
pub const DEFAULT_NAVIGATION_DELAY: Duration = Duration::from_millis(300);

pub const DEFAULT_LOCALE: &str = "tr";

/// Known keys in `novella.toml` for config validation.
const KNOWN_CONFIG_KEYS: &[&str] = &[
    "locale",
    "navigation_delay_ms",
    "default_display_mode",
    "popular_searches",
    "trending_items",
];

#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontConfig {
    /// Locale segment used in every generated path.
    pub locale: String,
    pub navigation_delay: Duration,
    /// Display mode used until the visitor picks one.
    pub default_display_mode: DisplayMode,
    pub catalog: Catalog,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            navigation_delay: DEFAULT_NAVIGATION_DELAY,
            default_display_mode: DisplayMode::default(),
            catalog: Catalog::default(),
        }
    }
}

/// Simple Levenshtein edit distance for typo suggestions.
fn edit_distance(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

fn warn_unknown_key(key: &str) {
    let suggestion = KNOWN_CONFIG_KEYS.iter().min_by_key(|k| edit_distance(key, k));
    match suggestion {
        Some(suggestion) if edit_distance(key, suggestion) <= 3 => {
            warn!(
                key,
                suggestion = *suggestion,
                "Unknown key in {CONFIG_FILE_NAME} — did you mean '{suggestion}'?"
            );
        }
        _ => {
            warn!(
                key,
                "Unknown key in {CONFIG_FILE_NAME} (known keys: {})",
                KNOWN_CONFIG_KEYS.join(", ")
            );
        }
    }
}

/// Parse `novella.toml` content on top of the defaults.
pub fn parse_storefront_config(content: &str) -> Result<StorefrontConfig, ConfigError> {
    let table = content.parse::<toml::Table>()?;
    let mut config = StorefrontConfig::default();

    for key in table.keys() {
        if !KNOWN_CONFIG_KEYS.contains(&key.as_str()) {
            warn_unknown_key(key);
        }
    }

    if let Some(locale) = table.get("locale").and_then(|v| v.as_str()) {
        let locale = locale.trim().trim_matches('/');
        if locale.is_empty() || locale.contains('/') {
            return Err(ConfigError::InvalidValue {
                key: "locale",
                message: format!("'{locale}' is not a path segment"),
            });
        }
        config.locale = locale.to_string();
    }

    if let Some(ms) = table.get("navigation_delay_ms").and_then(|v| v.as_integer()) {
        let ms = u64::try_from(ms).map_err(|_| ConfigError::InvalidValue {
            key: "navigation_delay_ms",
            message: format!("{ms} is negative"),
        })?;
        config.navigation_delay = Duration::from_millis(ms);
    }

    if let Some(mode) = table.get("default_display_mode").and_then(|v| v.as_str()) {
        config.default_display_mode = mode
            .parse()
            .map_err(|message| ConfigError::InvalidValue { key: "default_display_mode", message })?;
    }

    if let Some(searches) = table.get("popular_searches").and_then(|v| v.as_array()) {
        config.catalog.popular_searches = searches
            .iter()
            .filter_map(|v| v.as_str())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .collect();
    }

    if let Some(items) = table.get("trending_items") {
        config.catalog.trending_items = items.clone().try_into::<Vec<TrendingItem>>()?;
    }

    Ok(config)
}

/// Load the storefront configuration from `novella.toml` in `root`.
///
/// Returns defaults when the file doesn't exist, or with a warning when it
/// can't be read or parsed.
pub fn load_storefront_config(root: &Path) -> StorefrontConfig {
    let config_path = root.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        return StorefrontConfig::default();
    }

    debug!(path = %config_path.display(), "Loading {CONFIG_FILE_NAME}");
    let parsed = std::fs::read_to_string(&config_path)
        .map_err(ConfigError::from)
        .and_then(|content| parse_storefront_config(&content));

    match parsed {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "Failed to load {CONFIG_FILE_NAME}, using defaults");
            StorefrontConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config = parse_storefront_config("").unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.locale, "tr");
        assert_eq!(config.navigation_delay, Duration::from_millis(300));
    }

    #[test]
    fn overrides_are_applied() {
        let config = parse_storefront_config(
            r#"
            locale = "en"
            navigation_delay_ms = 0
            default_display_mode = "dark"
            popular_searches = ["Gold ring", "  ", "Pearl"]

            [[trending_items]]
            id = 9
            name = "Pearl Drop"
            price = 450
            image = "/img/pearl.jpg"
            "#,
        )
        .unwrap();
        assert_eq!(config.locale, "en");
        assert_eq!(config.navigation_delay, Duration::ZERO);
        assert_eq!(config.default_display_mode, DisplayMode::Dark);
        assert_eq!(config.catalog.popular_searches, vec!["Gold ring", "Pearl"]);
        assert_eq!(config.catalog.trending_items.len(), 1);
        assert_eq!(config.catalog.trending_items[0].price_label(), "450 TL");
    }

    #[test]
    fn unknown_keys_are_tolerated() {
        let config = parse_storefront_config("locle = \"en\"").unwrap();
        assert_eq!(config.locale, "tr");
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(matches!(
            parse_storefront_config("navigation_delay_ms = -5"),
            Err(ConfigError::InvalidValue { key: "navigation_delay_ms", .. })
        ));
        assert!(matches!(
            parse_storefront_config("locale = \"en/us\""),
            Err(ConfigError::InvalidValue { key: "locale", .. })
        ));
        assert!(parse_storefront_config("default_display_mode = \"sepia\"").is_err());
        assert!(parse_storefront_config("[[trending_items]]\nid = \"x\"").is_err());
        assert!(matches!(parse_storefront_config("locale = "), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn shipped_config_matches_defaults() {
        let shipped = include_str!("../../../novella.toml");
        assert_eq!(parse_storefront_config(shipped).unwrap(), StorefrontConfig::default());
    }

    #[test]
    fn edit_distance_suggests_near_keys() {
        assert_eq!(edit_distance("locle", "locale"), 1);
        assert_eq!(edit_distance("", "abc"), 3);
    }

    #[test]
    fn load_from_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        assert_eq!(load_storefront_config(dir.path()), StorefrontConfig::default());

        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "locale = \"de\"").unwrap();
        assert_eq!(load_storefront_config(dir.path()).locale, "de");

        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "locale = [").unwrap();
        assert_eq!(load_storefront_config(dir.path()), StorefrontConfig::default());
    }
}
