//! Global storefront state using Dioxus signals.

use dioxus::prelude::*;
use novella_core::{load_storefront_config, DisplayMode, StorefrontConfig};

use crate::INITIAL_STATE;

/// Settings resolved before launch.
pub struct AppState {
    pub config: StorefrontConfig,
}

impl AppState {
    /// Read `novella.toml` from the working directory. Builds without a
    /// filesystem (the browser) get the defaults.
    pub fn load() -> Self {
        let config = match std::env::current_dir() {
            Ok(cwd) => load_storefront_config(&cwd),
            Err(_) => StorefrontConfig::default(),
        };
        AppState { config }
    }

    /// Take the state prepared by `main`, loading it now if it is missing.
    pub fn take_initial() -> Self {
        INITIAL_STATE
            .lock()
            .ok()
            .and_then(|mut slot| slot.take())
            .unwrap_or_else(AppState::load)
    }
}

// ---------------------------------------------------------------------------
// Global signals
// ---------------------------------------------------------------------------

/// Storefront configuration — `None` until the first effect runs
pub static CONFIG: GlobalSignal<Option<StorefrontConfig>> = Signal::global(|| None);

/// Whether the search overlay is visible
pub static SEARCH_OPEN: GlobalSignal<bool> = Signal::global(|| false);

/// Visitor's display mode preference
pub static DISPLAY_MODE: GlobalSignal<DisplayMode> = Signal::global(DisplayMode::default);

/// Whether the OS asks for a dark look
pub static SYSTEM_PREFERS_DARK: GlobalSignal<bool> = Signal::global(|| false);

/// Path of the page being shown when navigation stays in-app (desktop)
pub static CURRENT_PATH: GlobalSignal<String> = Signal::global(String::new);
