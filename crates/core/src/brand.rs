//! Brand identity: name, slogan, page titles, logo dimensions.

pub const BRAND_NAME: &str = "NOVELLA";
pub const SLOGAN: &str = "Her Parça Bir Hikaye";
pub const DESCRIPTION: &str =
    "Özel tasarım takılar ile hikayenizi anlatın. Kaliteli, uygun fiyatlı ve özgün takı koleksiyonları.";

/// Title for a page, or the default storefront title when `page` is `None`.
pub fn page_title(page: Option<&str>) -> String {
    match page {
        Some(page) if !page.trim().is_empty() => format!("{page} | {BRAND_NAME}"),
        _ => format!("{BRAND_NAME} - {SLOGAN}"),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogoSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl LogoSize {
    /// Mark width and height in CSS pixels.
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            LogoSize::Sm => (32, 32),
            LogoSize::Md => (40, 40),
            LogoSize::Lg => (48, 48),
        }
    }

    /// Text size class for the word mark.
    pub fn text_class(self) -> &'static str {
        match self {
            LogoSize::Sm => "text-lg",
            LogoSize::Md => "text-xl",
            LogoSize::Lg => "text-2xl",
        }
    }
}
