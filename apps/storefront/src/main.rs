//! NOVELLA storefront — Dioxus front-end for the jewelry shop.

use std::sync::Mutex;

use dioxus::prelude::*;

mod app;
mod brand;
mod layout;
mod platform;
mod search;
mod state;

use app::App;
use state::AppState;

/// Pre-runtime storage — loaded before Dioxus launches, consumed on first render.
pub static INITIAL_STATE: Mutex<Option<AppState>> = Mutex::new(None);

fn main() {
    #[cfg(not(feature = "web"))]
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("novella=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    // Browser console. Fails only when a subscriber is already set.
    #[cfg(feature = "web")]
    let _ = dioxus::logger::init(tracing::Level::INFO);

    let initial_state = AppState::load();
    if let Ok(mut slot) = INITIAL_STATE.lock() {
        *slot = Some(initial_state);
    }

    #[cfg(all(feature = "desktop", not(feature = "web")))]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        LaunchBuilder::new()
            .with_cfg(
                Config::default()
                    .with_menu(None)
                    .with_background_color((250, 247, 242, 255))
                    .with_window(
                        WindowBuilder::new()
                            .with_title(novella_core::brand::page_title(None))
                            .with_inner_size(LogicalSize::new(1280.0, 860.0))
                            .with_min_inner_size(LogicalSize::new(420.0, 600.0))
                            .with_resizable(true)
                            .with_decorations(true),
                    ),
            )
            .launch(App);
    }

    #[cfg(any(feature = "web", not(feature = "desktop")))]
    {
        dioxus::launch(App);
    }
}
