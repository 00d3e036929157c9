//! # Phase Calculator
//!
//! Combines the solar and lunar series into a [`MoonDetail`] for one Julian Day.
//!
//! ## Phase fraction
//! The position in the synodic cycle comes straight from the Moon's age in degrees,
//! `normalize(λ☾ − λ☉) / 360`. It increases monotonically through each day, which the
//! calendar resolver relies on: a major phase lies between two instants exactly when its
//! nominal fraction lies between their phase fractions.
//!
//! ## Illuminated fraction
//! Uses the full geometry rather than the age alone, so the Moon's latitude is
//! accounted for:
//!
//! 1. project Sun and Moon to declination/right ascension
//! 2. geocentric elongation `φ = acos(sinδ☉·sinδ☾ + cosδ☉·cosδ☾·cos(α☉ − α☾))`
//! 3. phase angle `i = atan2(D·sinφ, Δ − D·cosφ)` with `D` = 1 AU and `Δ` the Moon's distance
//! 4. illuminated fraction `(1 + cos i) / 2`

use crate::constants::{fix_angle, ELEMENTS};
use crate::lunar::LunarPosition;
use crate::solar::SolarPosition;
use crate::{MoonAge, MoonDetail};

/// Sun–Moon geometry behind the illuminated fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Illumination {
    /// Geocentric angular separation of Sun and Moon (radians, `[0, π]`)
    pub elongation: f64,
    /// Sun–Moon–Earth angle (radians, `[0, π]`); 0 at full, π at new
    pub phase_angle: f64,
    /// Position angle of the bright limb (radians); negative while waxing
    pub bright_limb_angle: f64,
    /// Fraction of the disk lit, `[0, 1]`
    pub fraction: f64,
}

impl Illumination {
    fn between(sun: &SolarPosition, moon: &LunarPosition) -> Self {
        let s = sun.equatorial();
        let m = moon.equatorial();
        let d_ra = s.right_ascension - m.right_ascension;

        let cos_elongation = s.declination.sin() * m.declination.sin()
            + s.declination.cos() * m.declination.cos() * d_ra.cos();
        // rounding can push the cosine a hair past ±1 at conjunction
        let elongation = cos_elongation.clamp(-1.0, 1.0).acos();

        let d = ELEMENTS.sun_distance;
        let phase_angle =
            (d * elongation.sin()).atan2(moon.distance_km - d * elongation.cos());

        let bright_limb_angle = (s.declination.cos() * d_ra.sin()).atan2(
            s.declination.sin() * m.declination.cos()
                - s.declination.cos() * m.declination.sin() * d_ra.cos(),
        );

        Illumination {
            elongation,
            phase_angle,
            bright_limb_angle,
            fraction: (1.0 + phase_angle.cos()) / 2.0,
        }
    }
}

/// Sun/Moon geometry at a Julian Day.
pub fn illumination(julian_day: f64) -> Illumination {
    let sun = SolarPosition::at(julian_day);
    let moon = LunarPosition::at(julian_day, &sun);
    Illumination::between(&sun, &moon)
}

/// Reduce a value to `[0, 1)`.
pub(crate) fn normalize_fraction(value: f64) -> f64 {
    let f = value.rem_euclid(1.0);
    if f >= 1.0 {
        0.0
    } else {
        f
    }
}

/// Phase fraction alone, for callers that only need the position in the cycle.
pub fn phase_fraction(julian_day: f64) -> f64 {
    let sun = SolarPosition::at(julian_day);
    let moon = LunarPosition::at(julian_day, &sun);
    phase_fraction_of(&sun, &moon)
}

fn phase_fraction_of(sun: &SolarPosition, moon: &LunarPosition) -> f64 {
    normalize_fraction(fix_angle(moon.true_longitude - sun.ecliptic_longitude) / 360.0)
}

/// Full Moon detail for a Julian Day.
pub fn moon_detail(julian_day: f64) -> MoonDetail {
    let sun = SolarPosition::at(julian_day);
    let moon = LunarPosition::at(julian_day, &sun);

    let phase_fraction = phase_fraction_of(&sun, &moon);
    let days_elapsed_in_cycle = phase_fraction * ELEMENTS.synodic_month;

    MoonDetail {
        julian_day,
        days_elapsed_in_cycle,
        age_of_moon: MoonAge::from_days(days_elapsed_in_cycle),
        illuminated_fraction: Illumination::between(&sun, &moon).fraction,
        distance_from_center_of_earth: moon.distance_km,
        phase_fraction,
    }
}
