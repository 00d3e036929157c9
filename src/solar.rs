//! # Solar Position
//!
//! Sun's geocentric ecliptic longitude from the 1980-epoch elements, and the
//! ecliptic → equatorial projection shared by the Sun and the Moon.
//!
//! The Sun's mean anomaly is carried forward from the epoch at one revolution per
//! tropical year, Kepler's equation gives the eccentric anomaly, and the true anomaly
//! plus the longitude of perigee gives the ecliptic longitude. Accuracy is roughly
//! 0.01°, far below anything the phase classifiers can see.

use crate::constants::{fix_angle, ELEMENTS};
use crate::kepler::solve_eccentric_anomaly;

/// Sun's position on the ecliptic at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Mean anomaly referred to the epoch perigee (deg, `[0, 360)`)
    pub mean_anomaly: f64,
    /// Geocentric ecliptic longitude (deg, `[0, 360)`)
    pub ecliptic_longitude: f64,
}

impl SolarPosition {
    /// Compute the Sun's position for a Julian Day.
    pub fn at(julian_day: f64) -> Self {
        let e = ELEMENTS.earth_eccentricity;
        let days = julian_day - ELEMENTS.epoch;

        let n = fix_angle((360.0 / ELEMENTS.tropical_year) * days);
        let mean_anomaly =
            fix_angle(n + ELEMENTS.sun_longitude_at_epoch - ELEMENTS.sun_perigee_longitude);

        let eccentric = solve_eccentric_anomaly(mean_anomaly, e);
        let true_anomaly = 2.0 * (((1.0 + e) / (1.0 - e)).sqrt() * (eccentric / 2.0).tan()).atan();

        SolarPosition {
            mean_anomaly,
            ecliptic_longitude: fix_angle(
                true_anomaly.to_degrees() + ELEMENTS.sun_perigee_longitude,
            ),
        }
    }

    /// Equatorial coordinates; the Sun sits on the ecliptic.
    pub fn equatorial(&self) -> EquatorialCoordinates {
        EquatorialCoordinates::from_ecliptic(self.ecliptic_longitude.to_radians(), 0.0)
    }
}

/// Sun's geocentric ecliptic longitude in degrees.
pub fn sun_ecliptic_longitude(julian_day: f64) -> f64 {
    SolarPosition::at(julian_day).ecliptic_longitude
}

/// Declination and right ascension, both in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialCoordinates {
    pub declination: f64,
    pub right_ascension: f64,
}

impl EquatorialCoordinates {
    /// Project ecliptic longitude/latitude (radians) onto the equator.
    pub fn from_ecliptic(longitude: f64, latitude: f64) -> Self {
        EquatorialCoordinates {
            declination: declination(longitude, latitude),
            right_ascension: right_ascension(longitude, latitude),
        }
    }
}

fn obliquity() -> f64 {
    ELEMENTS.obliquity.to_radians()
}

/// `asin(sin(β)cos(ε) + cos(β)sin(ε)sin(λ))`, all in radians.
pub fn declination(longitude: f64, latitude: f64) -> f64 {
    let e = obliquity();
    (latitude.sin() * e.cos() + latitude.cos() * e.sin() * longitude.sin()).asin()
}

/// `atan2(sin(λ)cos(ε) - tan(β)sin(ε), cos(λ))`, all in radians.
pub fn right_ascension(longitude: f64, latitude: f64) -> f64 {
    let e = obliquity();
    (longitude.sin() * e.cos() - latitude.tan() * e.sin()).atan2(longitude.cos())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::julian_day;
    use approx::assert_abs_diff_eq;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_declination_reference_values() {
        // aa.quae.nl worked example: λ = 168.737°, β = 1.208°
        let dec = declination(168.737_f64.to_radians(), 1.208_f64.to_radians());
        assert_abs_diff_eq!(dec, 5.567_f64.to_radians(), epsilon = 1e-5);
        assert_abs_diff_eq!(dec, 0.097_170_154_723_462_71, epsilon = 1e-9);
    }

    #[test]
    fn test_right_ascension_reference_values() {
        let ra = right_ascension(168.737_f64.to_radians(), 1.208_f64.to_radians());
        assert_abs_diff_eq!(ra, 170.20_f64.to_radians(), epsilon = 0.0015);
        assert_abs_diff_eq!(ra, 2.969_160_475_404_514, epsilon = 1e-9);
    }

    #[test]
    fn test_equinox_and_solstice_longitudes() {
        // March equinox 2024-03-20 03:06 UT, June solstice 2024-06-20 20:51 UT
        let equinox = Utc.with_ymd_and_hms(2024, 3, 20, 3, 6, 0).unwrap();
        let lon = sun_ecliptic_longitude(julian_day(&equinox));
        let lon = if lon > 180.0 { lon - 360.0 } else { lon };
        assert_abs_diff_eq!(lon, 0.0, epsilon = 0.05);

        let solstice = Utc.with_ymd_and_hms(2024, 6, 20, 20, 51, 0).unwrap();
        assert_abs_diff_eq!(
            sun_ecliptic_longitude(julian_day(&solstice)),
            90.0,
            epsilon = 0.05
        );
    }

    #[test]
    fn test_sun_on_equator_at_equinox() {
        let sun = SolarPosition {
            mean_anomaly: 0.0,
            ecliptic_longitude: 0.0,
        };
        let eq = sun.equatorial();
        assert_abs_diff_eq!(eq.declination, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(eq.right_ascension, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_solstice_declination_equals_obliquity() {
        let dec = declination(90_f64.to_radians(), 0.0);
        assert_abs_diff_eq!(dec.to_degrees(), 23.4397, epsilon = 1e-9);
    }
}
