//! Platform adapters behind the core seams.
//!
//! The web build talks to `window.localStorage`, `window.location` and
//! `setTimeout`. The desktop build keeps storage in the user's data directory,
//! navigates in-app by updating [`CURRENT_PATH`], and sleeps on tokio. Both
//! builds report the OS color scheme and follow changes to it.
//!
//! [`CURRENT_PATH`]: crate::state::CURRENT_PATH

use std::rc::Rc;

use dioxus::prelude::*;
use novella_core::navigation::{Destination, Navigator};
use novella_core::schedule::Scheduler;
use novella_core::store::Storage;

use crate::state::SYSTEM_PREFERS_DARK;

#[cfg(not(feature = "web"))]
pub use desktop::{RouteNavigator, TokioScheduler};
#[cfg(feature = "web")]
pub use web::{LocalStorage, TimeoutScheduler, WindowNavigator};

/// Storage for recent searches and the display mode.
pub fn storage() -> Rc<dyn Storage> {
    #[cfg(feature = "web")]
    {
        Rc::new(LocalStorage)
    }
    #[cfg(not(feature = "web"))]
    {
        use novella_core::store::{FileStorage, MemoryStorage};

        match FileStorage::default_location() {
            Some(storage) => Rc::new(storage),
            None => {
                tracing::warn!("No data directory, recent searches will not persist");
                Rc::new(MemoryStorage::new())
            }
        }
    }
}

pub fn navigator() -> Rc<dyn Navigator> {
    #[cfg(feature = "web")]
    {
        Rc::new(WindowNavigator)
    }
    #[cfg(not(feature = "web"))]
    {
        Rc::new(RouteNavigator)
    }
}

pub fn scheduler() -> Rc<dyn Scheduler> {
    #[cfg(feature = "web")]
    {
        Rc::new(TimeoutScheduler)
    }
    #[cfg(not(feature = "web"))]
    {
        Rc::new(TokioScheduler)
    }
}

/// Navigate to `destination` with the platform navigator.
pub fn go(destination: &Destination) {
    navigator().navigate(destination)
}

/// Whether the OS currently asks for a dark color scheme.
pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "web")]
    {
        web::dark_query().is_some_and(|query| query.matches())
    }
    #[cfg(all(feature = "desktop", not(feature = "web")))]
    {
        desktop::is_dark(&dioxus::desktop::window().theme())
    }
    #[cfg(not(any(feature = "web", feature = "desktop")))]
    {
        false
    }
}

/// Keeps [`SYSTEM_PREFERS_DARK`] in step with the OS color scheme for the
/// lifetime of the calling component.
pub fn use_system_theme() {
    let mut prefers_dark = use_signal(system_prefers_dark);

    #[cfg(feature = "web")]
    use_hook(move || web::watch_color_scheme(move |dark| prefers_dark.set(dark)));
    #[cfg(all(feature = "desktop", not(feature = "web")))]
    desktop::use_theme_events(move |dark| prefers_dark.set(dark));

    use_effect(move || {
        *SYSTEM_PREFERS_DARK.write() = prefers_dark();
    });
}

#[cfg(not(feature = "web"))]
mod desktop {
    use std::time::Duration;

    use dioxus::prelude::*;
    use novella_core::navigation::{Destination, Navigator};
    use novella_core::schedule::{Scheduler, Task};
    use tracing::info;

    use crate::state::CURRENT_PATH;

    /// Shows destinations inside the app window instead of loading a page.
    pub struct RouteNavigator;

    impl Navigator for RouteNavigator {
        fn navigate(&self, destination: &Destination) {
            let path = destination.path();
            info!(path = %path, "Navigating");
            *CURRENT_PATH.write() = path;
        }
    }

    /// Sleeps on tokio inside the Dioxus runtime. Tasks outlive the component
    /// that scheduled them.
    pub struct TokioScheduler;

    impl Scheduler for TokioScheduler {
        fn schedule(&self, delay: Duration, task: Task) {
            spawn_forever(async move {
                tokio::time::sleep(delay).await;
                task();
            });
        }
    }

    #[cfg(feature = "desktop")]
    pub use window_theme::{is_dark, use_theme_events};

    #[cfg(feature = "desktop")]
    mod window_theme {
        use dioxus::desktop::tao::event::{Event, WindowEvent};
        use dioxus::desktop::tao::window::Theme;
        use dioxus::desktop::use_wry_event_handler;
        use tracing::debug;

        pub fn is_dark(theme: &Theme) -> bool {
            *theme == Theme::Dark
        }

        /// Calls `on_change` whenever the window reports a new OS theme.
        pub fn use_theme_events(mut on_change: impl FnMut(bool) + 'static) {
            use_wry_event_handler(move |event, _| {
                if let Event::WindowEvent {
                    event: WindowEvent::ThemeChanged(theme),
                    ..
                } = event
                {
                    debug!(?theme, "System theme changed");
                    on_change(is_dark(theme));
                }
            });
        }

        #[cfg(test)]
        mod tests {
            use super::*;

            #[test]
            fn only_the_dark_window_theme_counts_as_dark() {
                assert!(is_dark(&Theme::Dark));
                assert!(!is_dark(&Theme::Light));
            }
        }
    }
}

#[cfg(feature = "web")]
mod web {
    use std::time::Duration;

    use novella_core::navigation::{Destination, Navigator};
    use novella_core::schedule::{Scheduler, Task};
    use novella_core::store::Storage;
    use novella_core::StoreError;
    use tracing::{info, warn};
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};

    const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

    pub(super) fn dark_query() -> Option<web_sys::MediaQueryList> {
        web_sys::window()?.match_media(DARK_QUERY).ok().flatten()
    }

    /// Registers a `change` listener on the dark color-scheme media query. The
    /// listener lives as long as the page.
    pub(super) fn watch_color_scheme(mut on_change: impl FnMut(bool) + 'static) {
        let Some(query) = dark_query() else {
            warn!("matchMedia unavailable, system theme changes are not followed");
            return;
        };
        let listener = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(
            move |event: web_sys::MediaQueryListEvent| on_change(event.matches()),
        );
        if let Err(e) =
            query.add_event_listener_with_callback("change", listener.as_ref().unchecked_ref())
        {
            warn!(error = ?e, "Could not watch the system color scheme");
            return;
        }
        listener.forget();
    }

    fn js_error(e: JsValue) -> StoreError {
        StoreError::Unavailable(format!("{e:?}"))
    }

    /// `window.localStorage`.
    pub struct LocalStorage;

    impl LocalStorage {
        fn handle() -> Result<web_sys::Storage, StoreError> {
            let window =
                web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".into()))?;
            window
                .local_storage()
                .map_err(js_error)?
                .ok_or_else(|| StoreError::Unavailable("localStorage disabled".into()))
        }
    }

    impl Storage for LocalStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
            Self::handle()?.get_item(key).map_err(js_error)
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
            Self::handle()?.set_item(key, value).map_err(js_error)
        }

        fn remove_item(&self, key: &str) -> Result<(), StoreError> {
            Self::handle()?.remove_item(key).map_err(js_error)
        }
    }

    /// Full page load via `window.location.href`.
    pub struct WindowNavigator;

    impl Navigator for WindowNavigator {
        fn navigate(&self, destination: &Destination) {
            let path = destination.path();
            info!(path = %path, "Navigating");
            let Some(window) = web_sys::window() else {
                warn!("No window to navigate");
                return;
            };
            if let Err(e) = window.location().set_href(&path) {
                warn!(error = ?e, path = %path, "Navigation failed");
            }
        }
    }

    /// `window.setTimeout`.
    pub struct TimeoutScheduler;

    impl Scheduler for TimeoutScheduler {
        fn schedule(&self, delay: Duration, task: Task) {
            let Some(window) = web_sys::window() else {
                task();
                return;
            };
            let callback = Closure::once_into_js(move || task());
            let ms = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
            if let Err(e) = window
                .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), ms)
            {
                warn!(error = ?e, "setTimeout failed");
            }
        }
    }
}
