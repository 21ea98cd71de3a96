//! Unit conversion between layout canvas inches and DrawingML units.

pub const EMUS_PER_INCH: i64 = 914_400;

/// Canvas inches to EMU, rounded to the nearest unit.
#[inline]
pub fn inch_to_emu(inches: f64) -> i64 {
    (inches * EMUS_PER_INCH as f64).round() as i64
}

/// Point size to the hundredths-of-a-point value used by `a:rPr/@sz`.
#[inline]
pub fn pt_to_centipoints(pt: f64) -> u32 {
    (pt * 100.0).round().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widescreen_canvas() {
        assert_eq!(inch_to_emu(10.0), 9_144_000);
        assert_eq!(inch_to_emu(5.625), 5_143_500);
        assert_eq!(inch_to_emu(0.0001), 91);
    }

    #[test]
    fn test_point_sizes() {
        assert_eq!(pt_to_centipoints(13.0), 1300);
        assert_eq!(pt_to_centipoints(10.5), 1050);
        assert_eq!(pt_to_centipoints(-1.0), 0);
    }
}
