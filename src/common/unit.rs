//! Unit conversion constants and helpers.

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_PT: i64 = 12_700;

/// Hundredths of a point, the unit of DrawingML `sz` and `spcPts` attributes.
pub const CENTIPOINTS_PER_PT: u32 = 100;

#[inline]
pub fn pt_to_centipoints(pt: f64) -> u32 {
    (pt * CENTIPOINTS_PER_PT as f64).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centipoints() {
        assert_eq!(pt_to_centipoints(14.0), 1400);
        assert_eq!(pt_to_centipoints(10.5), 1050);
    }
}
