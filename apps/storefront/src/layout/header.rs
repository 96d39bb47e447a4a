//! Site header — logo, search trigger, display mode toggle.

use dioxus::prelude::*;
use novella_core::brand::LogoSize;
use novella_core::Destination;

use super::theme_toggle::ThemeToggle;
use crate::brand::Logo;
use crate::state::*;

#[component]
pub fn Header(locale: String) -> Element {
    rsx! {
        header {
            class: "site-header",

            Logo { size: LogoSize::Md, href: Destination::home(&locale) }

            nav {
                class: "header-actions",

                // Search trigger
                button {
                    class: "header-btn",
                    title: "Ara",
                    onclick: move |_| { *SEARCH_OPEN.write() = true; },
                    svg {
                        width: "20",
                        height: "20",
                        view_box: "0 0 24 24",
                        fill: "none",
                        stroke: "currentColor",
                        stroke_width: "2",
                        circle { cx: "11", cy: "11", r: "8" }
                        line { x1: "21", y1: "21", x2: "16.65", y2: "16.65" }
                    }
                }

                ThemeToggle {}
            }
        }
    }
}
