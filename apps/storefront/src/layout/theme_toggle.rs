//! Display mode toggle — cycles light, dark, system and remembers the choice.

use dioxus::prelude::*;
use novella_core::theme::{save_display_mode, DisplayMode};

use crate::platform;
use crate::state::*;

#[component]
pub fn ThemeToggle() -> Element {
    let mode = *DISPLAY_MODE.read();
    let icon = match mode {
        DisplayMode::Light => "\u{2600}",
        DisplayMode::Dark => "\u{263E}",
        DisplayMode::System => "\u{25D0}",
    };

    rsx! {
        button {
            class: "header-btn theme-toggle",
            title: "Tema: {mode.label()}",
            onclick: move |_| {
                let next = DISPLAY_MODE.read().next();
                *DISPLAY_MODE.write() = next;
                save_display_mode(&*platform::storage(), next);
            },
            span { class: "theme-icon", "{icon}" }
            span { class: "theme-label", "{mode.label()}" }
        }
    }
}
