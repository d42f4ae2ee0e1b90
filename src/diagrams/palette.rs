//! Fixed colors of the dark diagram style.
use crate::common::RGBColor;

pub const DARK_BG: RGBColor = RGBColor::new(0x1B, 0x1B, 0x1B);
pub const BLUE: RGBColor = RGBColor::new(0x00, 0x78, 0xD4);
pub const GREEN: RGBColor = RGBColor::new(0x10, 0x7C, 0x10);
pub const ORANGE: RGBColor = RGBColor::new(0xFF, 0x8C, 0x00);
pub const RED: RGBColor = RGBColor::new(0xD1, 0x34, 0x38);
pub const PURPLE: RGBColor = RGBColor::new(0x88, 0x64, 0xD8);
pub const TEAL: RGBColor = RGBColor::new(0x03, 0x8E, 0x8E);
pub const WHITE: RGBColor = RGBColor::new(0xFF, 0xFF, 0xFF);
pub const LIGHT_GRAY: RGBColor = RGBColor::new(0xE0, 0xE0, 0xE0);
pub const MED_GRAY: RGBColor = RGBColor::new(0x90, 0x90, 0x90);
pub const DARK_GRAY: RGBColor = RGBColor::new(0x40, 0x40, 0x40);
pub const CARD_BG: RGBColor = RGBColor::new(0x2D, 0x2D, 0x2D);

/// Zone tints behind the comparison columns.
pub const RED_TINT: RGBColor = RGBColor::new(0x2D, 0x1A, 0x1A);
pub const GREEN_TINT: RGBColor = RGBColor::new(0x1A, 0x2D, 0x1A);

/// Named accent with its arrowhead marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Green,
    Orange,
    Red,
    Purple,
    Teal,
    White,
    MedGray,
}

impl Accent {
    /// Accents that get a marker in every diagram header.
    pub const BASE: [Accent; 7] = [
        Accent::Blue,
        Accent::Green,
        Accent::Orange,
        Accent::Red,
        Accent::Purple,
        Accent::Teal,
        Accent::White,
    ];

    /// Stroke color of lines drawn in this accent.
    pub fn color(self) -> RGBColor {
        match self {
            Accent::Blue => BLUE,
            Accent::Green => GREEN,
            Accent::Orange => ORANGE,
            Accent::Red => RED,
            Accent::Purple => PURPLE,
            Accent::Teal => TEAL,
            Accent::White => WHITE,
            Accent::MedGray => MED_GRAY,
        }
    }

    /// Arrowhead fill. The white marker is drawn light gray.
    pub fn marker_fill(self) -> RGBColor {
        match self {
            Accent::White => LIGHT_GRAY,
            other => other.color(),
        }
    }

    pub fn marker_id(self) -> &'static str {
        match self {
            Accent::Blue => "ah-blue",
            Accent::Green => "ah-green",
            Accent::Orange => "ah-orange",
            Accent::Red => "ah-red",
            Accent::Purple => "ah-purple",
            Accent::Teal => "ah-teal",
            Accent::White => "ah-white",
            Accent::MedGray => "ah-med-gray",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_colors() {
        assert_eq!(Accent::White.marker_fill(), LIGHT_GRAY);
        assert_eq!(Accent::Purple.marker_fill().to_string(), "#8864D8");
        assert_eq!(Accent::MedGray.marker_id(), "ah-med-gray");
    }
}
