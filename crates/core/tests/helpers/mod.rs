//! Test harness for search overlay integration tests.
//!
//! Wires a `SearchOverlay` to in-memory storage, a recording navigator and a
//! manual scheduler, and logs collaborator calls in order.

use std::cell::RefCell;
use std::rc::Rc;

use novella_core::navigation::{Destination, Navigator};
use novella_core::overlay::{OverlayServices, SearchOverlay};
use novella_core::schedule::ManualScheduler;
use novella_core::store::{
    MemoryStorage, RecentSearchStore, StoredRecentSearches, RECENT_SEARCHES_KEY,
};
use novella_core::StorefrontConfig;

/// Ordered record of close requests and navigations.
pub type EventLog = Rc<RefCell<Vec<String>>>;

struct LoggingNavigator {
    log: EventLog,
}

impl Navigator for LoggingNavigator {
    fn navigate(&self, destination: &Destination) {
        self.log.borrow_mut().push(format!("navigate {destination}"));
    }
}

pub struct TestHarness {
    pub overlay: SearchOverlay,
    pub storage: MemoryStorage,
    pub scheduler: ManualScheduler,
    pub log: EventLog,
}

impl TestHarness {
    /// Open overlay over empty storage.
    pub fn new() -> Self {
        Self::with_storage(MemoryStorage::new())
    }

    /// Open overlay whose storage already holds `entries`.
    pub fn with_stored(entries: &[&str]) -> Self {
        let raw = serde_json::to_string(entries).expect("serialize entries");
        Self::with_storage(MemoryStorage::with_item(RECENT_SEARCHES_KEY, &raw))
    }

    /// Open overlay whose storage holds a raw (possibly corrupt) value.
    pub fn with_raw(raw: &str) -> Self {
        Self::with_storage(MemoryStorage::with_item(RECENT_SEARCHES_KEY, raw))
    }

    pub fn with_storage(storage: MemoryStorage) -> Self {
        Self::build(storage, true)
    }

    /// Open overlay over empty storage, wired from `config` instead of the defaults.
    pub fn with_config(config: StorefrontConfig) -> Self {
        Self::build_with(&config, MemoryStorage::new(), true)
    }

    pub fn build(storage: MemoryStorage, is_open: bool) -> Self {
        Self::build_with(&StorefrontConfig::default(), storage, is_open)
    }

    fn build_with(config: &StorefrontConfig, storage: MemoryStorage, is_open: bool) -> Self {
        let scheduler = ManualScheduler::new();
        let log: EventLog = Rc::default();

        let close_log = log.clone();
        let services = OverlayServices::from_config(
            config,
            Rc::new(StoredRecentSearches::new(storage.clone())),
            Rc::new(LoggingNavigator { log: log.clone() }),
            Rc::new(scheduler.clone()),
        );
        let overlay = SearchOverlay::new(
            is_open,
            move || close_log.borrow_mut().push("close".to_string()),
            services,
        );

        Self {
            overlay,
            storage,
            scheduler,
            log,
        }
    }

    /// Recent searches as the store currently holds them.
    pub fn stored(&self) -> Vec<String> {
        StoredRecentSearches::new(self.storage.clone())
            .load()
            .expect("stored value should be readable")
    }

    pub fn raw_stored(&self) -> Option<String> {
        self.storage.raw(RECENT_SEARCHES_KEY)
    }

    pub fn recent(&self) -> Vec<String> {
        self.overlay.recent_searches().as_slice().to_vec()
    }

    pub fn events(&self) -> Vec<String> {
        self.log.borrow().clone()
    }

    /// Fire deferred navigations.
    pub fn flush(&self) -> usize {
        self.scheduler.run_pending()
    }
}
