//! Brand components — logo and loading screen.

mod loading_logo;
mod logo;

pub use loading_logo::LoadingLogo;
pub use logo::Logo;
