//! Suggestion sections: recent searches, popular searches, trending items.

use dioxus::prelude::*;
use novella_core::overlay::SearchOverlay;
use novella_core::Destination;

#[component]
pub fn RecentSearchChips(overlay: Signal<SearchOverlay>) -> Element {
    let mut overlay = overlay;
    let state = overlay.read();
    let recent: Vec<String> = state.recent_searches().iter().cloned().collect();

    rsx! {
        div {
            class: "search-section",
            div {
                class: "search-section-header",
                h3 { class: "search-section-title", "\u{23F1} Son Aramalar" }
                button {
                    class: "search-clear-recent",
                    onclick: move |_| overlay.write().clear_recent(),
                    "Temizle"
                }
            }
            div {
                class: "chip-row",
                for (i, search) in recent.into_iter().enumerate() {
                    button {
                        key: "{i}",
                        class: "chip chip-recent",
                        onclick: {
                            let search = search.clone();
                            move |_| overlay.write().select_suggestion(&search)
                        },
                        "{search}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn PopularSearches(overlay: Signal<SearchOverlay>) -> Element {
    let mut overlay = overlay;
    let state = overlay.read();
    let popular: Vec<String> = state.sections().popular.to_vec();

    rsx! {
        div {
            class: "search-section",
            h3 { class: "search-section-title", "\u{2197} En Çok Arananlar" }
            div {
                class: "popular-grid",
                for (i, search) in popular.into_iter().enumerate() {
                    button {
                        key: "{i}",
                        class: "chip chip-popular",
                        onclick: {
                            let search = search.clone();
                            move |_| overlay.write().select_suggestion(&search)
                        },
                        span { class: "chip-label", "{search}" }
                        span { class: "chip-arrow", "\u{2192}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn TrendingItems(overlay: Signal<SearchOverlay>) -> Element {
    let state = overlay.read();
    let locale = state.locale().to_string();
    let items: Vec<_> = state
        .sections()
        .trending
        .iter()
        .map(|item| (Destination::product(&locale, item.id).path(), item.clone()))
        .collect();

    rsx! {
        div {
            class: "search-section",
            h3 { class: "search-section-title", "\u{2606} Öne Çıkan Ürünler" }
            div {
                class: "trending-grid",
                for (path, item) in items {
                    a {
                        key: "{item.id}",
                        class: "trending-item",
                        href: "{path}",
                        onclick: {
                            let item = item.clone();
                            move |e: MouseEvent| {
                                e.prevent_default();
                                overlay.read().select_trending(&item);
                            }
                        },
                        div {
                            class: "trending-thumb",
                            img { src: "{item.image}", alt: "{item.name}" }
                        }
                        div {
                            class: "trending-info",
                            p { class: "trending-name", "{item.name}" }
                            p { class: "trending-price", "{item.price_label()}" }
                        }
                        span { class: "trending-arrow", "\u{2192}" }
                    }
                }
            }
        }
    }
}
