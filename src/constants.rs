//! # Orbital Elements
//!
//! One immutable constant set drives every formula in the crate. The values are the
//! 1980-epoch elements used by the classic "Moontool" series (epoch 1980 January 0.0):
//! a Kepler-solved solar orbit plus a handful of periodic lunar corrections.
//!
//! The set is chosen at build time through [`ELEMENTS`]. Mixing these values with the
//! J2000 mean-anomaly family produces numerically wrong phases, so nothing else in the
//! crate carries its own copy of a constant.

/// Orbital constants for one low-precision solar/lunar formulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    /// Julian Day of the epoch (1980 January 0.0 UT)
    pub epoch: f64,
    /// Eccentricity of Earth's orbit
    pub earth_eccentricity: f64,
    /// Ecliptic longitude of the Sun at epoch (deg)
    pub sun_longitude_at_epoch: f64,
    /// Ecliptic longitude of the Sun at perigee (deg)
    pub sun_perigee_longitude: f64,
    /// Length of the tropical year (days)
    pub tropical_year: f64,

    /// Moon's mean longitude at epoch (deg)
    pub moon_mean_longitude_at_epoch: f64,
    /// Mean longitude of the Moon's perigee at epoch (deg)
    pub moon_perigee_longitude_at_epoch: f64,
    /// Mean longitude of the Moon's ascending node at epoch (deg)
    pub moon_node_longitude_at_epoch: f64,
    /// Daily motion of the Moon's mean longitude (deg/day)
    pub moon_mean_motion: f64,
    /// Daily motion of the Moon's perigee (deg/day)
    pub moon_perigee_motion: f64,
    /// Daily regression of the Moon's node (deg/day)
    pub moon_node_motion: f64,
    /// Inclination of the Moon's orbit to the ecliptic (deg)
    pub moon_inclination: f64,
    /// Semi-major axis of the Moon's orbit (km)
    pub moon_semi_major_axis: f64,
    /// Eccentricity of the Moon's orbit
    pub moon_eccentricity: f64,

    /// Mean synodic month, new Moon to new Moon (days)
    pub synodic_month: f64,
    /// Obliquity of the ecliptic (deg)
    pub obliquity: f64,
    /// Sun distance used for the phase angle (km, 1 AU)
    pub sun_distance: f64,
}

impl OrbitalElements {
    /// Moontool's 1980-epoch element set.
    pub const EPOCH_1980: OrbitalElements = OrbitalElements {
        epoch: 2_444_238.5,
        earth_eccentricity: 0.016_718,
        sun_longitude_at_epoch: 278.833_540,
        sun_perigee_longitude: 282.596_403,
        tropical_year: 365.2422,

        moon_mean_longitude_at_epoch: 64.975_464,
        moon_perigee_longitude_at_epoch: 349.383_063,
        moon_node_longitude_at_epoch: 151.950_429,
        moon_mean_motion: 13.176_396_6,
        moon_perigee_motion: 0.111_404_1,
        moon_node_motion: 0.052_953_9,
        moon_inclination: 5.145_396,
        moon_semi_major_axis: 384_401.0,
        moon_eccentricity: 0.054_900,

        synodic_month: 29.530_588_61,
        obliquity: 23.4397,
        sun_distance: 149_598_000.0,
    };
}

/// The formulation every calculation in the crate uses.
pub const ELEMENTS: OrbitalElements = OrbitalElements::EPOCH_1980;

/// Reduce an angle in degrees to `[0, 360)`.
pub(crate) fn fix_angle(degrees: f64) -> f64 {
    let a = degrees - 360.0 * (degrees / 360.0).floor();
    // a tiny negative input can round up to exactly 360
    if a >= 360.0 {
        0.0
    } else {
        a
    }
}
