use crate::constants::{BAROMETRIC_CEILING, BAROMETRIC_COEFFICIENT, BAROMETRIC_EXPONENT};

/// Single-formula barometric atmosphere.
pub struct Atmosphere;

impl Atmosphere {
    /// Ratio of local to sea-level pressure. Exactly zero at and above the ceiling;
    /// altitudes below the launch point are treated as sea level.
    pub fn pressure_fraction(altitude: f64) -> f64 {
        if altitude >= BAROMETRIC_CEILING {
            return 0.0;
        }
        let altitude = altitude.max(0.0);
        (1.0 - BAROMETRIC_COEFFICIENT * altitude).powf(BAROMETRIC_EXPONENT)
    }

    pub fn is_in_atmosphere(altitude: f64) -> bool {
        altitude < BAROMETRIC_CEILING
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn test_sea_level() {
        assert_eq!(Atmosphere::pressure_fraction(0.0), 1.0);
    }

    #[test]
    fn test_tropopause() {
        // ~11 km is roughly 22.6 kPa, or 0.223 atm
        let fraction = Atmosphere::pressure_fraction(11_000.0);
        assert_abs_diff_eq!(fraction, 0.2234, epsilon = 1e-3);
    }

    #[test]
    fn test_zero_at_and_above_ceiling() {
        assert_eq!(Atmosphere::pressure_fraction(44_330.0), 0.0);
        assert_eq!(Atmosphere::pressure_fraction(44_330.5), 0.0);
        assert_eq!(Atmosphere::pressure_fraction(200_000.0), 0.0);
        assert!(!Atmosphere::is_in_atmosphere(44_330.0));
    }

    #[test]
    fn test_just_below_ceiling_is_positive() {
        let fraction = Atmosphere::pressure_fraction(44_329.0);
        assert!(fraction > 0.0);
        assert!(fraction.is_finite());
        assert!(Atmosphere::is_in_atmosphere(44_329.0));
    }

    #[test]
    fn test_negative_altitude_is_sea_level() {
        assert_eq!(Atmosphere::pressure_fraction(-25.0), 1.0);
    }

    #[test]
    fn test_range_below_ceiling() {
        let mut rng = StdRng::seed_from_u64(44_330);
        for _ in 0..1000 {
            let altitude = rng.gen_range(0.0..44_330.0);
            let fraction = Atmosphere::pressure_fraction(altitude);
            assert!(
                fraction > 0.0 && fraction <= 1.0,
                "fraction {} out of range at {} m",
                fraction,
                altitude
            );
        }
    }

    #[test]
    fn test_decreases_with_altitude() {
        let mut previous = Atmosphere::pressure_fraction(0.0);
        for step in 1..=44 {
            let fraction = Atmosphere::pressure_fraction(step as f64 * 1_000.0);
            assert!(fraction < previous);
            previous = fraction;
        }
    }
}
