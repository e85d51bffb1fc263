//! Site color palette
//!
//! The palette lives in the web crate's `tailwind.css` `@theme` block, where
//! Tailwind turns `--color-wine-gold` into `bg-wine-gold`, `border-wine-gold`
//! and friends. This module mirrors it so Rust code can name the colors and
//! tests can catch the two drifting apart.

use crate::ThemeError;

/// Named theme colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeColor {
    WineBlack,
    WineGold,
    WineLightGold,
    WineGreen,
    WineGray,
}

impl ThemeColor {
    pub const ALL: [ThemeColor; 5] = [
        ThemeColor::WineBlack,
        ThemeColor::WineGold,
        ThemeColor::WineLightGold,
        ThemeColor::WineGreen,
        ThemeColor::WineGray,
    ];

    /// Tailwind color name, as used in `bg-{token}`
    pub fn token(self) -> &'static str {
        match self {
            ThemeColor::WineBlack => "wine-black",
            ThemeColor::WineGold => "wine-gold",
            ThemeColor::WineLightGold => "wine-light-gold",
            ThemeColor::WineGreen => "wine-green",
            ThemeColor::WineGray => "wine-gray",
        }
    }

    pub fn default_hex(self) -> &'static str {
        match self {
            ThemeColor::WineBlack => "#0a0a0a",
            ThemeColor::WineGold => "#d4af37",
            ThemeColor::WineLightGold => "#f2d785",
            ThemeColor::WineGreen => "#1a3a2e",
            ThemeColor::WineGray => "#333333",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

/// Hex value for each [`ThemeColor`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [String; 5],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: ThemeColor::ALL.map(|c| c.default_hex().to_string()),
        }
    }
}

impl Palette {
    pub fn get(&self, color: ThemeColor) -> &str {
        &self.colors[color.slot()]
    }

    /// Parse the `@theme { --color-*: #hex; }` block of a Tailwind v4 stylesheet.
    ///
    /// Every [`ThemeColor`] must be present. Unrelated variables are ignored.
    pub fn from_theme_css(css: &str) -> Result<Self, ThemeError> {
        let start = css.find("@theme").ok_or(ThemeError::MissingThemeBlock)?;
        let rest = &css[start..];
        let open = rest.find('{').ok_or(ThemeError::MissingThemeBlock)?;
        let close = rest[open..]
            .find('}')
            .ok_or(ThemeError::MissingThemeBlock)?;
        let body = &rest[open + 1..open + close];

        let mut found: [Option<String>; 5] = Default::default();
        for decl in body.split(';') {
            let Some((name, value)) = decl.split_once(':') else {
                continue;
            };
            let Some(token) = name.trim().strip_prefix("--color-") else {
                continue;
            };
            let Some(color) = ThemeColor::ALL.into_iter().find(|c| c.token() == token) else {
                continue;
            };
            let value = value.trim();
            if !is_hex_color(value) {
                return Err(ThemeError::InvalidHex {
                    token: color.token(),
                    value: value.to_string(),
                });
            }
            found[color.slot()] = Some(value.to_ascii_lowercase());
        }

        let mut colors: [String; 5] = Default::default();
        for color in ThemeColor::ALL {
            colors[color.slot()] = found[color.slot()]
                .take()
                .ok_or(ThemeError::MissingColor(color.token()))?;
        }
        Ok(Self { colors })
    }
}

fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(digits) => {
            matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THEME: &str = r#"
@import "tailwindcss";

@theme {
  --color-wine-black: #0a0a0a;
  --color-wine-gold: #D4AF37;
  --color-wine-light-gold: #f2d785;
  --color-wine-green: #1a3a2e;
  --color-wine-gray: #333;
  --font-display: "Cormorant", serif;
}
"#;

    #[test]
    fn test_default_palette() {
        let palette = Palette::default();
        assert_eq!(palette.get(ThemeColor::WineGold), "#d4af37");
        assert_eq!(palette.get(ThemeColor::WineGray), "#333333");
    }

    #[test]
    fn test_parse_theme_block() {
        let palette = Palette::from_theme_css(THEME).unwrap();
        assert_eq!(palette.get(ThemeColor::WineGold), "#d4af37");
        assert_eq!(palette.get(ThemeColor::WineGray), "#333");
        assert_eq!(palette.get(ThemeColor::WineGreen), "#1a3a2e");
    }

    #[test]
    fn test_missing_block() {
        assert_eq!(
            Palette::from_theme_css("body { color: red; }"),
            Err(ThemeError::MissingThemeBlock)
        );
    }

    #[test]
    fn test_missing_color() {
        let css = "@theme { --color-wine-black: #000; --color-wine-gold: #fff; }";
        assert_eq!(
            Palette::from_theme_css(css),
            Err(ThemeError::MissingColor("wine-light-gold"))
        );
    }

    #[test]
    fn test_invalid_hex() {
        let css = THEME.replace("#1a3a2e", "green");
        assert_eq!(
            Palette::from_theme_css(&css),
            Err(ThemeError::InvalidHex {
                token: "wine-green",
                value: "green".to_string()
            })
        );
    }

    #[test]
    fn test_tokens_unique() {
        let mut tokens: Vec<_> = ThemeColor::ALL.iter().map(|c| c.token()).collect();
        tokens.sort();
        tokens.dedup();
        assert_eq!(tokens.len(), 5);
    }
}
