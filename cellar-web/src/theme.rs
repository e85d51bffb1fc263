//! Site palette, read from the Tailwind `@theme` block

use cellar_common::{Palette, ThemeColor};
use tracing::warn;

const THEME_CSS: &str = include_str!("../tailwind.css");

/// Palette shipped in `tailwind.css`, or the built-in one if it fails to parse.
pub fn site_palette() -> Palette {
    Palette::from_theme_css(THEME_CSS).unwrap_or_else(|e| {
        warn!("Using default palette: {e}");
        Palette::default()
    })
}

/// Browser UI color (`<meta name="theme-color">`), matching the page background
pub fn browser_theme_color(palette: &Palette) -> String {
    palette.get(ThemeColor::WineBlack).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tailwind_theme_matches_palette() {
        assert_eq!(Palette::from_theme_css(THEME_CSS), Ok(Palette::default()));
    }

    #[test]
    fn test_browser_theme_color_from_shipped_palette() {
        assert_eq!(browser_theme_color(&site_palette()), "#0a0a0a");
    }
}
