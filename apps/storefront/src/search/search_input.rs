//! Query field with Enter/Escape handling and the close control.

use dioxus::prelude::*;
use novella_core::overlay::{OverlayKey, SearchOverlay};

#[component]
pub fn SearchInput(overlay: Signal<SearchOverlay>) -> Element {
    let mut overlay = overlay;
    let state = overlay.read();
    let query = state.query().to_string();
    let searching = state.is_searching();

    rsx! {
        div {
            class: "search-header",

            div {
                class: "search-input-row",

                // Search icon
                div {
                    class: if searching { "search-badge searching" } else { "search-badge" },
                    svg {
                        width: "24",
                        height: "24",
                        view_box: "0 0 24 24",
                        fill: "none",
                        stroke: "currentColor",
                        stroke_width: "2",
                        circle { cx: "11", cy: "11", r: "8" }
                        line { x1: "21", y1: "21", x2: "16.65", y2: "16.65" }
                    }
                }

                input {
                    class: "search-input",
                    r#type: "text",
                    placeholder: "Ürün, kategori veya marka ara...",
                    value: "{query}",
                    autofocus: true,
                    oninput: move |e: Event<FormData>| {
                        overlay.write().set_query(e.value());
                    },
                    onkeydown: move |e: KeyboardEvent| {
                        let key = OverlayKey::from_key_name(&e.key().to_string());
                        if key != OverlayKey::Other {
                            overlay.write().handle_key(key);
                        }
                    },
                }

                // Close control
                button {
                    class: "search-close",
                    title: "Kapat",
                    onclick: move |_| overlay.read().close(),
                    "\u{00D7}"
                }
            }

            div {
                class: "search-hint",
                span { class: "search-hint-icon", "\u{2728}" }
                span { "Enter tuşuna basın veya aşağıdan seçin" }
            }
        }
    }
}
