use std::fmt;

/// RGB color representation.
///
/// Represents a color using red, green, and blue components, each in the range 0-255.
/// The `Display` form (`#RRGGBB`) is what SVG attributes expect, while
/// [`RGBColor::to_hex`] produces the bare form used by DrawingML `srgbClr`.
///
/// # Examples
///
/// ```rust
/// use hve_assets::common::RGBColor;
///
/// let blue = RGBColor::from_hex("#0078D4").unwrap();
/// assert_eq!(blue.to_string(), "#0078D4");
/// assert_eq!(blue.to_hex(), "0078D4");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RGBColor {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl RGBColor {
    /// Create a new RGB color.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hve_assets::common::RGBColor;
    ///
    /// let color = RGBColor::new(255, 140, 0); // Orange
    /// ```
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an RGB color from a hex string.
    ///
    /// Accepts `RRGGBB` with or without a leading `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::new(r, g, b))
    }

    /// Convert to hex string (without # prefix).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hve_assets::common::RGBColor;
    ///
    /// let color = RGBColor::new(255, 0, 0);
    /// assert_eq!(color.to_hex(), "FF0000");
    /// ```
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for RGBColor {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(RGBColor::from_hex("1B1B1B"), Some(RGBColor::new(27, 27, 27)));
        assert_eq!(RGBColor::from_hex("#D13438"), Some(RGBColor::new(0xD1, 0x34, 0x38)));
        assert_eq!(RGBColor::from_hex("#FFF"), None);
        assert_eq!(RGBColor::from_hex("zzzzzz"), None);
    }

    #[test]
    fn test_display_and_hex() {
        let purple = RGBColor::new(136, 100, 216);
        assert_eq!(purple.to_hex(), "8864D8");
        assert_eq!(purple.to_string(), "#8864D8");
    }
}
