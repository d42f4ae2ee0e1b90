//! Slide color themes.
use crate::common::RGBColor;
use crate::diagrams::deck_art::DeckArtPalette;
use crate::diagrams::palette::{
    BLUE, CARD_BG, DARK_BG, DARK_GRAY, GREEN, LIGHT_GRAY, MED_GRAY, ORANGE, PURPLE, RED, TEAL, WHITE,
};

/// Colors used by every slide of a deck, plus the palette of its raster art.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: RGBColor,
    /// Titles and emphasized body text
    pub text: RGBColor,
    pub secondary: RGBColor,
    pub tertiary: RGBColor,
    /// Flow connectors between shapes
    pub connector: RGBColor,
    pub card: RGBColor,
    /// Middle "Dimension" column header of the comparison table
    pub header_fill: RGBColor,
    pub header_text: RGBColor,
    /// Text on accent-filled shapes
    pub on_accent: RGBColor,
    pub blue: RGBColor,
    pub green: RGBColor,
    pub orange: RGBColor,
    pub red: RGBColor,
    pub purple: RGBColor,
    pub teal: RGBColor,
    pub art: DeckArtPalette,
}

impl Theme {
    pub const fn dark() -> Self {
        Self {
            background: DARK_BG,
            text: WHITE,
            secondary: LIGHT_GRAY,
            tertiary: MED_GRAY,
            connector: MED_GRAY,
            card: CARD_BG,
            header_fill: DARK_GRAY,
            header_text: WHITE,
            on_accent: WHITE,
            blue: BLUE,
            green: GREEN,
            orange: ORANGE,
            red: RED,
            purple: PURPLE,
            teal: TEAL,
            art: DeckArtPalette::dark(),
        }
    }

    pub const fn light() -> Self {
        const DARK_TEXT: RGBColor = RGBColor::new(0x24, 0x24, 0x24);
        const BORDER_GRAY: RGBColor = RGBColor::new(0xCC, 0xCC, 0xCC);
        Self {
            background: WHITE,
            text: DARK_TEXT,
            secondary: RGBColor::new(0x44, 0x44, 0x44),
            tertiary: RGBColor::new(0x66, 0x66, 0x66),
            connector: BORDER_GRAY,
            card: RGBColor::new(0xF0, 0xF0, 0xF0),
            header_fill: BORDER_GRAY,
            header_text: DARK_TEXT,
            art: DeckArtPalette::light(),
            ..Self::dark()
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_keeps_accents() {
        let dark = Theme::dark();
        let light = Theme::light();
        assert_eq!(light.blue, dark.blue);
        assert_eq!(light.purple, dark.purple);
        assert_eq!(light.on_accent, WHITE);
        assert_eq!(light.background.to_hex(), "FFFFFF");
        assert_eq!(light.text.to_hex(), "242424");
        assert_eq!(light.header_fill, light.connector);
        assert_eq!(light.art.prefix, "light-");
        assert_eq!(dark.art.prefix, "");
    }
}
