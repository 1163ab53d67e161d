// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, bail};

use crate::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb` (the leading `#` is optional).
    pub fn parse_hex(raw: &str) -> Result<Self> {
        let hex = raw.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
            bail!("invalid color {raw:?}; use #rrggbb (for example #38bdf8)");
        }
        let channel = |offset: usize| u8::from_str_radix(&hex[offset..offset + 2], 16);
        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Category colors, built once at startup and handed to the renderer by
/// reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPalette {
    colors: [Rgb; Category::ALL.len()],
}

impl Default for CategoryPalette {
    fn default() -> Self {
        Self {
            colors: [
                Rgb::new(0xf4, 0x72, 0xb6),
                Rgb::new(0xfb, 0x92, 0x3c),
                Rgb::new(0xfa, 0xcc, 0x15),
                Rgb::new(0xfd, 0xe0, 0x47),
                Rgb::new(0x84, 0xcc, 0x16),
                Rgb::new(0x10, 0xb9, 0x81),
                Rgb::new(0x38, 0xbd, 0xf8),
                Rgb::new(0x0e, 0xa5, 0xe9),
                Rgb::new(0xd9, 0x46, 0xef),
                Rgb::new(0xa8, 0x55, 0xf7),
                Rgb::new(0xa3, 0xa3, 0xa3),
            ],
        }
    }
}

impl CategoryPalette {
    pub fn with_overrides<I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (Category, Rgb)>,
    {
        let mut palette = Self::default();
        for (category, color) in overrides {
            palette.colors[category.index()] = color;
        }
        palette
    }

    pub fn color(&self, category: Category) -> Rgb {
        self.colors[category.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::{CategoryPalette, Rgb};
    use crate::Category;
    use anyhow::Result;

    #[test]
    fn parse_hex_accepts_with_and_without_hash() -> Result<()> {
        assert_eq!(Rgb::parse_hex("#38bdf8")?, Rgb::new(0x38, 0xbd, 0xf8));
        assert_eq!(Rgb::parse_hex("A3A3A3")?, Rgb::new(0xa3, 0xa3, 0xa3));
        Ok(())
    }

    #[test]
    fn parse_hex_rejects_short_and_non_hex_values() {
        for raw in ["#fff", "#12345g", "", "red"] {
            let error = Rgb::parse_hex(raw).expect_err("invalid color should fail");
            assert!(error.to_string().contains("#rrggbb"), "raw={raw:?}");
        }
    }

    #[test]
    fn to_hex_is_lowercase_six_digits() {
        assert_eq!(Rgb::new(1, 0xab, 0xff).to_hex(), "#01abff");
    }

    #[test]
    fn default_palette_matches_legend_colors() {
        let palette = CategoryPalette::default();
        assert_eq!(palette.color(Category::NobleGas).to_hex(), "#38bdf8");
        assert_eq!(palette.color(Category::Unknown).to_hex(), "#a3a3a3");
    }

    #[test]
    fn overrides_replace_only_named_categories() {
        let palette =
            CategoryPalette::with_overrides([(Category::Halogen, Rgb::new(0, 0, 0))]);
        assert_eq!(palette.color(Category::Halogen), Rgb::new(0, 0, 0));
        assert_eq!(
            palette.color(Category::Metalloid),
            CategoryPalette::default().color(Category::Metalloid)
        );
    }
}
