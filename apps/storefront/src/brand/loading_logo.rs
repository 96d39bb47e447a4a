//! Full-screen pulsing logo shown until the storefront state is ready.

use dioxus::prelude::*;
use novella_core::brand::BRAND_NAME;

static LOGO_LIGHT_SVG: Asset = asset!("/assets/logo-light.svg");

#[component]
pub fn LoadingLogo() -> Element {
    rsx! {
        div {
            class: "loading-screen",
            div {
                class: "loading-logo",
                img {
                    src: LOGO_LIGHT_SVG,
                    alt: BRAND_NAME,
                    width: "80",
                    height: "80",
                }
                div { class: "loading-glow" }
            }
        }
    }
}
