use std::fmt;

use crate::common::unit::{EMUS_PER_INCH, EMUS_PER_PT};

/// Length measurement in EMUs (English Metric Units).
///
/// Slide geometry is authored in inches and line widths in points; both are
/// stored as EMUs, the native unit of Office Open XML.
///
/// # Examples
///
/// ```rust
/// use hve_assets::common::Length;
///
/// let width = Length::from_inches(13.333);
/// assert_eq!(Length::from_inches(1.0).emus(), 914_400);
/// assert_eq!(Length::from_pt(2.0).emus(), 25_400);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Length {
    /// Value in EMUs
    /// 1 inch = 914,400 EMUs
    /// 1 pt = 12,700 EMUs
    emus: i64,
}

impl Length {
    /// Create a length from EMUs.
    #[inline]
    pub const fn from_emus(emus: i64) -> Self {
        Self { emus }
    }

    /// Create a length from inches.
    ///
    /// Fractional EMUs are truncated toward zero.
    #[inline]
    pub fn from_inches(inches: f64) -> Self {
        Self {
            emus: (inches * EMUS_PER_INCH as f64) as i64,
        }
    }

    /// Create a length from points (1/72 inch).
    #[inline]
    pub fn from_pt(pt: f64) -> Self {
        Self {
            emus: (pt * EMUS_PER_PT as f64) as i64,
        }
    }

    /// Get the value in EMUs.
    #[inline]
    pub const fn emus(&self) -> i64 {
        self.emus
    }

    /// Convert to inches.
    #[inline]
    pub fn inches(&self) -> f64 {
        self.emus as f64 / EMUS_PER_INCH as f64
    }

    /// Convert to points (1/72 inch).
    #[inline]
    pub fn points(&self) -> f64 {
        self.emus as f64 / EMUS_PER_PT as f64
    }
}

impl std::ops::Add for Length {
    type Output = Length;

    #[inline]
    fn add(self, rhs: Length) -> Length {
        Length::from_emus(self.emus + rhs.emus)
    }
}

impl std::ops::Sub for Length {
    type Output = Length;

    #[inline]
    fn sub(self, rhs: Length) -> Length {
        Length::from_emus(self.emus - rhs.emus)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}\"", self.inches())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_dimensions() {
        assert_eq!(Length::from_inches(13.333).emus(), 12_191_695);
        assert_eq!(Length::from_inches(7.5).emus(), 6_858_000);
    }

    #[test]
    fn test_points_round_trip() {
        let four = Length::from_pt(4.0);
        assert_eq!(four.emus(), 50_800);
        assert!((four.points() - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_arithmetic() {
        let a = Length::from_inches(1.0);
        let b = Length::from_inches(0.5);
        assert_eq!((a + b).emus(), 1_371_600);
        assert_eq!((a - b).emus(), 457_200);
    }
}
