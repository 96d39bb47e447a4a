//! Search overlay — query field, recent/popular/trending suggestions, footer hints.
//!
//! All state lives in a [`SearchOverlay`] held in a signal; these components
//! only render it and forward user input.

mod search_input;
mod suggestions;

use std::rc::Rc;

use dioxus::prelude::*;
use novella_core::overlay::{OverlayServices, SearchOverlay};
use novella_core::store::StoredRecentSearches;

use crate::platform;
use crate::state::*;
use search_input::SearchInput;
use suggestions::{PopularSearches, RecentSearchChips, TrendingItems};

/// Modal search surface. Visibility belongs to the parent; the overlay asks
/// for closure through `on_close`.
#[component]
pub fn SearchModal(is_open: bool, on_close: EventHandler<()>) -> Element {
    let mut overlay = use_signal(move || {
        let config = (*CONFIG.peek()).clone().unwrap_or_default();
        let services = OverlayServices::from_config(
            &config,
            Rc::new(StoredRecentSearches::new(platform::storage())),
            platform::navigator(),
            platform::scheduler(),
        );
        SearchOverlay::new(is_open, move || on_close.call(()), services)
    });

    use_effect(use_reactive((&is_open,), move |(is_open,)| {
        if overlay.peek().is_open() != is_open {
            overlay.write().set_open(is_open);
        }
    }));

    if !is_open {
        return rsx! {};
    }

    let has_recent = overlay.read().sections().recent.is_some();

    rsx! {
        // Backdrop
        div {
            class: "search-backdrop",
            onclick: move |_| overlay.read().close(),
        }

        div {
            class: "search-modal",
            div {
                class: "search-card",

                SearchInput { overlay }

                div {
                    class: "search-content",
                    if has_recent {
                        RecentSearchChips { overlay }
                    }
                    PopularSearches { overlay }
                    TrendingItems { overlay }
                }

                SearchFooter {}
            }
        }
    }
}

/// Keyboard hints along the bottom of the card.
#[component]
fn SearchFooter() -> Element {
    rsx! {
        div {
            class: "search-footer",
            div {
                class: "search-footer-hint",
                kbd { "Enter" }
                span { "Ara" }
            }
            div {
                class: "search-footer-hint",
                kbd { "Esc" }
                span { "Kapat" }
            }
        }
    }
}
