//! Moon position & low-precision lunar ephemeris (Moontool 1980-epoch series)
//!
//! Starting from mean elements, the series applies the principal periodic terms:
//! evection, the annual equation, two empirical corrections ("A3" on the anomaly,
//! "A4" on the longitude), the equation of the centre and the variation. The node
//! correction then tilts the result off the ecliptic.
//!
//! Accuracy: a few arc-minutes in longitude, which puts the major phases within
//! minutes of their true times; ~0.5 % in distance.

use crate::constants::{fix_angle, ELEMENTS};
use crate::solar::{EquatorialCoordinates, SolarPosition};

/// Everything the series computes for one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarPosition {
    /// True longitude in the orbit, before projection onto the ecliptic (deg).
    /// Its difference from the Sun's longitude is the Moon's age in degrees.
    pub true_longitude: f64,
    /// Geocentric ecliptic longitude (deg, `[0, 360)`)
    pub ecliptic_longitude: f64,
    /// Geocentric ecliptic latitude (deg)
    pub ecliptic_latitude: f64,
    /// Distance from the centre of the Earth (km)
    pub distance_km: f64,
}

impl LunarPosition {
    /// Compute the Moon's position for a Julian Day, given the Sun at the same instant.
    pub fn at(julian_day: f64, sun: &SolarPosition) -> Self {
        let days = julian_day - ELEMENTS.epoch;
        let sin_deg = |deg: f64| deg.to_radians().sin();

        let mean_longitude =
            fix_angle(ELEMENTS.moon_mean_motion * days + ELEMENTS.moon_mean_longitude_at_epoch);
        let mean_anomaly = fix_angle(
            mean_longitude
                - ELEMENTS.moon_perigee_motion * days
                - ELEMENTS.moon_perigee_longitude_at_epoch,
        );
        let mean_node =
            fix_angle(ELEMENTS.moon_node_longitude_at_epoch - ELEMENTS.moon_node_motion * days);

        // ---- periodic corrections -------------------------------------------
        let evection =
            1.2739 * sin_deg(2.0 * (mean_longitude - sun.ecliptic_longitude) - mean_anomaly);
        let annual_equation = 0.1858 * sin_deg(sun.mean_anomaly);
        let a3 = 0.37 * sin_deg(sun.mean_anomaly);

        let corrected_anomaly = mean_anomaly + evection - annual_equation - a3;
        let equation_of_centre = 6.2886 * sin_deg(corrected_anomaly);
        let a4 = 0.214 * sin_deg(2.0 * corrected_anomaly);

        let corrected_longitude =
            mean_longitude + evection + equation_of_centre - annual_equation + a4;
        let variation = 0.6583 * sin_deg(2.0 * (corrected_longitude - sun.ecliptic_longitude));
        let true_longitude = corrected_longitude + variation;

        // ---- projection off the orbital plane --------------------------------
        let node = mean_node - 0.16 * sin_deg(sun.mean_anomaly);
        let inclination = ELEMENTS.moon_inclination.to_radians();
        let from_node = (true_longitude - node).to_radians();
        let ecliptic_longitude = fix_angle(
            (from_node.sin() * inclination.cos())
                .atan2(from_node.cos())
                .to_degrees()
                + node,
        );
        let ecliptic_latitude = (from_node.sin() * inclination.sin()).asin().to_degrees();

        // ---- distance from the true anomaly ---------------------------------
        let e = ELEMENTS.moon_eccentricity;
        let true_anomaly = (corrected_anomaly + equation_of_centre).to_radians();
        let distance_km =
            ELEMENTS.moon_semi_major_axis * (1.0 - e * e) / (1.0 + e * true_anomaly.cos());

        LunarPosition {
            true_longitude,
            ecliptic_longitude,
            ecliptic_latitude,
            distance_km,
        }
    }

    /// Equatorial coordinates of the Moon.
    pub fn equatorial(&self) -> EquatorialCoordinates {
        EquatorialCoordinates::from_ecliptic(
            self.ecliptic_longitude.to_radians(),
            self.ecliptic_latitude.to_radians(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::julian_day;
    use chrono::{Duration, TimeZone, Utc};

    fn moon_at(jd: f64) -> LunarPosition {
        LunarPosition::at(jd, &SolarPosition::at(jd))
    }

    #[test]
    fn test_distance_stays_between_perigee_and_apogee() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        for step in 0..(365 * 4) {
            let t = start + Duration::hours(6 * step);
            let moon = moon_at(julian_day(&t));
            assert!(
                (354_000.0..=408_000.0).contains(&moon.distance_km),
                "distance {} km out of range at {t}",
                moon.distance_km
            );
        }
    }

    #[test]
    fn test_latitude_bounded_by_inclination() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut max_lat: f64 = 0.0;
        for step in 0..(365 * 4) {
            let t = start + Duration::hours(6 * step);
            let moon = moon_at(julian_day(&t));
            assert!(moon.ecliptic_latitude.abs() <= ELEMENTS.moon_inclination + 1e-9);
            assert!((0.0..360.0).contains(&moon.ecliptic_longitude));
            max_lat = max_lat.max(moon.ecliptic_latitude.abs());
        }
        // the Moon reaches close to its full inclination every month
        assert!(max_lat > 5.0, "max latitude {max_lat}");
    }

    #[test]
    fn test_opposite_the_sun_at_full_moon() {
        // Full moon 2024-01-25 17:54 UT
        let t = Utc.with_ymd_and_hms(2024, 1, 25, 17, 54, 0).unwrap();
        let jd = julian_day(&t);
        let sun = SolarPosition::at(jd);
        let moon = LunarPosition::at(jd, &sun);
        let elongation = fix_angle(moon.true_longitude - sun.ecliptic_longitude);
        assert!((elongation - 180.0).abs() < 0.5, "elongation {elongation}");
    }

    #[test]
    fn test_moon_advances_about_thirteen_degrees_per_day() {
        let t = Utc.with_ymd_and_hms(2024, 8, 1, 0, 0, 0).unwrap();
        let jd = julian_day(&t);
        let today = moon_at(jd);
        let tomorrow = moon_at(jd + 1.0);
        let motion = fix_angle(tomorrow.ecliptic_longitude - today.ecliptic_longitude);
        assert!((11.0..16.0).contains(&motion), "daily motion {motion}");
    }
}
