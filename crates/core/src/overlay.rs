//! Search overlay state machine.
//!
//! The overlay collects a query, keeps the recent-search history in step with
//! local storage, and hands destinations to the [`Navigator`]. Visibility is
//! owned by the parent: the overlay is told when it opens via
//! [`SearchOverlay::set_open`] and asks to be closed through `on_close`.
//!
//! Nothing here returns an error. Storage failures are logged and the history
//! degrades to whatever is in memory (empty, if the initial load failed).

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::catalog::{Catalog, TrendingItem};
use crate::config::StorefrontConfig;
use crate::navigation::{Destination, Navigator};
use crate::recent::RecentSearches;
use crate::schedule::Scheduler;
use crate::store::RecentSearchStore;

/// Keys the overlay reacts to while the query field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKey {
    Enter,
    Escape,
    Other,
}

impl OverlayKey {
    /// Map a DOM `KeyboardEvent.key` name.
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "Enter" => OverlayKey::Enter,
            "Escape" | "Esc" => OverlayKey::Escape,
            _ => OverlayKey::Other,
        }
    }
}

/// Collaborators and settings the overlay is built with.
pub struct OverlayServices {
    pub store: Rc<dyn RecentSearchStore>,
    pub navigator: Rc<dyn Navigator>,
    pub scheduler: Rc<dyn Scheduler>,
    pub catalog: Rc<Catalog>,
    pub locale: String,
    pub navigation_delay: Duration,
}

impl OverlayServices {
    /// Services using the locale, delay and catalog from `config`.
    pub fn from_config(
        config: &StorefrontConfig,
        store: Rc<dyn RecentSearchStore>,
        navigator: Rc<dyn Navigator>,
        scheduler: Rc<dyn Scheduler>,
    ) -> Self {
        Self {
            store,
            navigator,
            scheduler,
            catalog: Rc::new(config.catalog.clone()),
            locale: config.locale.clone(),
            navigation_delay: config.navigation_delay,
        }
    }
}

/// Sections shown below the query field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlaySections<'a> {
    /// `None` when there is no history to show.
    pub recent: Option<&'a [String]>,
    pub popular: &'a [String],
    pub trending: &'a [TrendingItem],
}

pub struct SearchOverlay {
    services: OverlayServices,
    on_close: Rc<dyn Fn()>,
    is_open: bool,
    query: String,
    recent: RecentSearches,
    /// Shared with the pending navigation task, which clears it once it fires.
    is_searching: Rc<Cell<bool>>,
}

impl SearchOverlay {
    /// Build an overlay. When `is_open` is true the recent-search history is
    /// loaded immediately, as on any open transition.
    pub fn new(is_open: bool, on_close: impl Fn() + 'static, services: OverlayServices) -> Self {
        let mut overlay = Self {
            services,
            on_close: Rc::new(on_close),
            is_open: false,
            query: String::new(),
            recent: RecentSearches::new(),
            is_searching: Rc::new(Cell::new(false)),
        };
        overlay.set_open(is_open);
        overlay
    }

    /// Follow the parent's visibility flag. Opening reloads the history from
    /// the store; closing keeps the query text.
    pub fn set_open(&mut self, is_open: bool) {
        if is_open && !self.is_open {
            self.is_searching.set(false);
            self.reload_recent();
        }
        self.is_open = is_open;
    }

    fn reload_recent(&mut self) {
        self.recent = match self.services.store.load() {
            Ok(stored) => RecentSearches::from_stored(stored),
            Err(e) => {
                warn!(error = %e, "Could not load recent searches, starting empty");
                RecentSearches::new()
            }
        };
        debug!(count = self.recent.len(), "Search overlay opened");
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn recent_searches(&self) -> &RecentSearches {
        &self.recent
    }

    /// True between a submission and its deferred navigation.
    pub fn is_searching(&self) -> bool {
        self.is_searching.get()
    }

    pub fn locale(&self) -> &str {
        &self.services.locale
    }

    pub fn sections(&self) -> OverlaySections<'_> {
        OverlaySections {
            recent: (!self.recent.is_empty()).then(|| self.recent.as_slice()),
            popular: &self.services.catalog.popular_searches,
            trending: &self.services.catalog.trending_items,
        }
    }

    /// Record `text` in the history and navigate to its collection listing
    /// after the configured delay. Blank text is ignored.
    ///
    /// The overlay stays open; hiding it is up to the parent once navigation
    /// happens. The pending navigation is not cancelled if the overlay closes
    /// first.
    pub fn submit(&mut self, text: &str) {
        let query = text.trim();
        if query.is_empty() {
            return;
        }

        self.recent.record(query);
        if let Err(e) = self.services.store.save(self.recent.as_slice()) {
            warn!(error = %e, "Could not persist recent searches");
        }

        self.is_searching.set(true);
        let destination = Destination::search(&self.services.locale, query);
        info!(path = %destination, "Search submitted");

        let navigator = Rc::clone(&self.services.navigator);
        let is_searching = Rc::clone(&self.is_searching);
        self.services.scheduler.schedule(
            self.services.navigation_delay,
            Box::new(move || {
                navigator.navigate(&destination);
                is_searching.set(false);
            }),
        );
    }

    /// A popular or recent chip was picked. Same path as [`submit`](Self::submit).
    pub fn select_suggestion(&mut self, text: &str) {
        self.submit(text)
    }

    /// A trending product was picked: close, then go straight to its page.
    /// The history is left alone.
    pub fn select_trending(&self, item: &TrendingItem) {
        (self.on_close)();
        let destination = Destination::product(&self.services.locale, item.id);
        info!(path = %destination, product = %item.name, "Trending item selected");
        self.services.navigator.navigate(&destination);
    }

    /// Forget the history in memory and in the store.
    pub fn clear_recent(&mut self) {
        self.recent.clear();
        if let Err(e) = self.services.store.clear() {
            warn!(error = %e, "Could not clear stored recent searches");
        }
    }

    pub fn handle_key(&mut self, key: OverlayKey) {
        match key {
            OverlayKey::Enter => {
                let query = self.query.clone();
                self.submit(&query);
            }
            OverlayKey::Escape => (self.on_close)(),
            OverlayKey::Other => {}
        }
    }

    /// Close button or backdrop click.
    pub fn close(&self) {
        (self.on_close)()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::RecordingNavigator;
    use crate::schedule::{Immediate, ManualScheduler};
    use crate::store::{MemoryStorage, StoredRecentSearches};

    fn overlay_with(scheduler: Rc<dyn Scheduler>) -> (SearchOverlay, RecordingNavigator) {
        let navigator = RecordingNavigator::new();
        let services = OverlayServices::from_config(
            &StorefrontConfig::default(),
            Rc::new(StoredRecentSearches::new(MemoryStorage::new())),
            Rc::new(navigator.clone()),
            scheduler,
        );
        (SearchOverlay::new(true, || {}, services), navigator)
    }

    #[test]
    fn key_names_map_to_overlay_keys() {
        assert_eq!(OverlayKey::from_key_name("Enter"), OverlayKey::Enter);
        assert_eq!(OverlayKey::from_key_name("Escape"), OverlayKey::Escape);
        assert_eq!(OverlayKey::from_key_name("Esc"), OverlayKey::Escape);
        assert_eq!(OverlayKey::from_key_name("a"), OverlayKey::Other);
    }

    #[test]
    fn submit_trims_query() {
        let (mut overlay, navigator) = overlay_with(Rc::new(Immediate));
        overlay.submit("  Elmas küpe ");
        assert_eq!(overlay.recent_searches().as_slice(), ["Elmas küpe"]);
        assert_eq!(
            navigator.last_path().as_deref(),
            Some("/tr/collections?search=Elmas%20k%C3%BCpe")
        );
    }

    #[test]
    fn searching_flag_spans_the_delay() {
        let scheduler = ManualScheduler::new();
        let (mut overlay, navigator) = overlay_with(Rc::new(scheduler.clone()));
        assert!(!overlay.is_searching());
        overlay.submit("kolye");
        assert!(overlay.is_searching());
        assert!(navigator.visited().is_empty());
        scheduler.run_pending();
        assert!(!overlay.is_searching());
        assert_eq!(navigator.visited().len(), 1);
    }

    #[test]
    fn sections_hide_empty_history() {
        let (mut overlay, _) = overlay_with(Rc::new(Immediate));
        let sections = overlay.sections();
        assert!(sections.recent.is_none());
        assert_eq!(sections.popular.len(), 6);
        assert_eq!(sections.trending.len(), 4);

        overlay.submit("yüzük");
        assert_eq!(overlay.sections().recent, Some(&["yüzük".to_string()][..]));
    }

    #[test]
    fn query_survives_close_and_reopen() {
        let (mut overlay, _) = overlay_with(Rc::new(Immediate));
        overlay.set_query("bilezik");
        overlay.set_open(false);
        overlay.set_open(true);
        assert_eq!(overlay.query(), "bilezik");
    }
}
