//! Root application component — header, page content, footer, search overlay.

use dioxus::prelude::*;
use novella_core::brand::{page_title, BRAND_NAME, DESCRIPTION, SLOGAN};
use novella_core::theme::load_display_mode;

use crate::brand::LoadingLogo;
use crate::layout::Header;
use crate::platform;
use crate::search::SearchModal;
use crate::state::*;

static VARIABLES_CSS: Asset = asset!("/assets/styles/variables.css");
static APP_CSS: Asset = asset!("/assets/styles/app.css");

#[component]
pub fn App() -> Element {
    platform::use_system_theme();

    // Resolve config and display mode once, after the loading frame is up.
    use_effect(|| {
        let state = AppState::take_initial();
        let storage = platform::storage();
        *DISPLAY_MODE.write() = load_display_mode(&*storage, state.config.default_display_mode);
        *CURRENT_PATH.write() = format!("/{}", state.config.locale);
        *CONFIG.write() = Some(state.config);
    });

    // Navigation hides the overlay.
    use_effect(|| {
        let _path = CURRENT_PATH.read();
        *SEARCH_OPEN.write() = false;
    });

    let config = CONFIG.read();
    let Some(config) = config.as_ref() else {
        return rsx! {
            document::Stylesheet { href: VARIABLES_CSS }
            document::Stylesheet { href: APP_CSS }
            LoadingLogo {}
        };
    };

    let appearance = DISPLAY_MODE.read().resolve(*SYSTEM_PREFERS_DARK.read());
    let locale = config.locale.clone();
    let title = page_title(None);

    rsx! {
        document::Title { "{title}" }
        document::Stylesheet { href: VARIABLES_CSS }
        document::Stylesheet { href: APP_CSS }

        div {
            class: "app-shell {appearance.class()}",
            lang: "{locale}",

            Header { locale: locale.clone() }

            main {
                class: "content-area",
                PageContent {}
            }

            Footer {}

            SearchModal {
                is_open: *SEARCH_OPEN.read(),
                on_close: move |_| { *SEARCH_OPEN.write() = false; },
            }
        }
    }
}

/// Landing hero, plus the in-app location after a search on desktop.
#[component]
fn PageContent() -> Element {
    let path = CURRENT_PATH.read();

    rsx! {
        section {
            class: "hero",
            h1 { class: "hero-title", "{SLOGAN}" }
            p { class: "hero-subtitle", "{DESCRIPTION}" }
            button {
                class: "hero-cta",
                onclick: move |_| { *SEARCH_OPEN.write() = true; },
                "Koleksiyonu keşfet"
            }
            div {
                class: "hero-location",
                span { class: "hero-location-label", "Sayfa" }
                code { class: "hero-location-path", "{path}" }
            }
        }
    }
}

#[component]
fn Footer() -> Element {
    rsx! {
        footer {
            class: "site-footer",
            span { class: "footer-brand", "{BRAND_NAME}" }
            span { class: "footer-sep", "\u{00B7}" }
            span { class: "footer-slogan", "{SLOGAN}" }
        }
    }
}
