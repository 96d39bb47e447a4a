//! Brand logo — mark plus optional word mark, optionally a link.

use dioxus::prelude::*;
use novella_core::brand::{LogoSize, BRAND_NAME};
use novella_core::Destination;

use crate::platform;

// Same mark in every appearance; CSS recolors it.
static LOGO_SVG: Asset = asset!("/assets/Logo.svg");

#[component]
pub fn Logo(
    #[props(default)] size: LogoSize,
    href: Option<Destination>,
    #[props(default = true)] show_text: bool,
    #[props(default)] class_name: String,
) -> Element {
    let (width, height) = size.dimensions();
    let text_class = size.text_class();

    let content = rsx! {
        div {
            class: "logo {class_name}",
            div {
                class: "logo-mark",
                img {
                    src: LOGO_SVG,
                    alt: BRAND_NAME,
                    width: "{width}",
                    height: "{height}",
                }
                div { class: "logo-glow" }
            }
            if show_text {
                span { class: "logo-text {text_class}", "{BRAND_NAME}" }
            }
        }
    };

    match href {
        Some(destination) => {
            let path = destination.path();
            rsx! {
                a {
                    class: "logo-link",
                    href: "{path}",
                    onclick: move |e: MouseEvent| {
                        e.prevent_default();
                        platform::go(&destination);
                    },
                    {content}
                }
            }
        }
        None => content,
    }
}
