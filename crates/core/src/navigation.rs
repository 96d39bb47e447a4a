//! Navigation destinations and the navigator seam.
//!
//! The overlay never performs a page transition itself; it hands a
//! [`Destination`] to whatever [`Navigator`] the host supplies.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Where a search interaction leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Storefront landing page.
    Home { locale: String },
    /// Collection listing filtered by a search query.
    Collections { locale: String, query: String },
    /// A single product detail page.
    Product { locale: String, id: u64 },
}

impl Destination {
    pub fn home(locale: &str) -> Self {
        Destination::Home {
            locale: locale.to_string(),
        }
    }

    pub fn search(locale: &str, query: &str) -> Self {
        Destination::Collections {
            locale: locale.to_string(),
            query: query.to_string(),
        }
    }

    pub fn product(locale: &str, id: u64) -> Self {
        Destination::Product {
            locale: locale.to_string(),
            id,
        }
    }

    /// Site-relative path, e.g. `/tr/collections?search=Alt%C4%B1n%20kolye`.
    pub fn path(&self) -> String {
        match self {
            Destination::Home { locale } => format!("/{locale}"),
            Destination::Collections { locale, query } => {
                format!("/{locale}/collections?search={}", encode_uri_component(query))
            }
            Destination::Product { locale, id } => format!("/{locale}/products/{id}"),
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Percent-encode a query value the way JavaScript's `encodeURIComponent`
/// does, so links match the ones the web storefront generates.
pub fn encode_uri_component(value: &str) -> String {
    // urlencoding leaves only `A-Za-z0-9-_.~` unescaped; encodeURIComponent
    // additionally keeps `!'()*`.
    urlencoding::encode(value)
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*")
}

/// Performs page transitions. Fire-and-forget: failures belong to the
/// implementation.
pub trait Navigator {
    fn navigate(&self, destination: &Destination);
}

impl<N: Navigator + ?Sized> Navigator for Rc<N> {
    fn navigate(&self, destination: &Destination) {
        (**self).navigate(destination)
    }
}

/// Navigator that only records where it was sent.
#[derive(Clone, Default)]
pub struct RecordingNavigator {
    visited: Rc<RefCell<Vec<Destination>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> Vec<Destination> {
        self.visited.borrow().clone()
    }

    pub fn last_path(&self) -> Option<String> {
        self.visited.borrow().last().map(Destination::path)
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, destination: &Destination) {
        self.visited.borrow_mut().push(destination.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_path_escapes_query() {
        let dest = Destination::search("tr", "Altın kolye");
        assert_eq!(dest.path(), "/tr/collections?search=Alt%C4%B1n%20kolye");
    }

    #[test]
    fn search_path_escapes_reserved_characters() {
        let dest = Destination::search("en", "rings & things?/=#");
        assert_eq!(
            dest.path(),
            "/en/collections?search=rings%20%26%20things%3F%2F%3D%23"
        );
    }

    #[test]
    fn encode_keeps_js_unreserved_marks() {
        assert_eq!(encode_uri_component("a-b_c.d~e!f'g(h)i*"), "a-b_c.d~e!f'g(h)i*");
    }

    #[test]
    fn home_path() {
        assert_eq!(Destination::home("tr").path(), "/tr");
    }

    #[test]
    fn product_path() {
        assert_eq!(Destination::product("tr", 3).path(), "/tr/products/3");
        assert_eq!(Destination::product("en", 42).to_string(), "/en/products/42");
    }

    #[test]
    fn recording_navigator_keeps_history() {
        let nav = RecordingNavigator::new();
        let shared: Rc<dyn Navigator> = Rc::new(nav.clone());
        shared.navigate(&Destination::product("tr", 1));
        shared.navigate(&Destination::search("tr", "yüzük"));
        assert_eq!(nav.visited().len(), 2);
        assert_eq!(nav.last_path().as_deref(), Some("/tr/collections?search=y%C3%BCz%C3%BCk"));
    }
}
