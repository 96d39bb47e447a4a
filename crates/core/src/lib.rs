//! NOVELLA storefront core — everything behind the storefront UI that carries
//! state or talks to a collaborator.
//!
//! # Modules
//!
//! - [`recent`] — Most-recent-first list of distinct recent searches
//! - [`store`] — Key-value storage adapters and the recent-search store
//! - [`navigation`] — Navigation destinations and the [`Navigator`] seam
//! - [`schedule`] — Deferred callbacks for animation-timed navigation
//! - [`overlay`] — Search overlay state machine
//! - [`catalog`] — Static popular searches and trending items
//! - [`config`] — `novella.toml` loading
//! - [`theme`] — Display mode preference and appearance resolution
//! - [`brand`] — Brand name, page titles, logo sizes
//! - [`error`] — Storage and configuration errors

pub mod brand;
pub mod catalog;
pub mod config;
pub mod error;
pub mod navigation;
pub mod overlay;
pub mod recent;
pub mod schedule;
pub mod store;
pub mod theme;

pub use catalog::{Catalog, TrendingItem};
pub use config::{load_storefront_config, StorefrontConfig};
pub use error::{ConfigError, StoreError};
pub use navigation::{Destination, Navigator};
pub use overlay::{OverlayKey, OverlayServices, SearchOverlay};
pub use recent::{RecentSearches, MAX_RECENT_SEARCHES};
pub use schedule::Scheduler;
pub use store::{RecentSearchStore, Storage, StoredRecentSearches};
pub use theme::{Appearance, DisplayMode};
