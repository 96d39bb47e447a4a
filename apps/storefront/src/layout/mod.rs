//! Page chrome — header bar and display mode toggle.

mod header;
mod theme_toggle;

pub use header::Header;
