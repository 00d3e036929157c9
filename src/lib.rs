//! # Moon Tracker Core Library
//!
//! This library computes the Moon's phase and related quantities (illuminated fraction,
//! Earth–Moon distance, age within the synodic cycle) for any instant, and names the phase
//! two ways:
//!
//! - **Exact**: the phase at that instant, with narrow bands standing in for the four
//!   momentary major phases ([`ExactMoon`])
//! - **Calendar**: the phase of the civil day in a given time zone, reporting a major
//!   phase if it happens at any moment of that day ([`CalendarMoon`])
//!
//! ## Design Philosophy
//!
//! ### One Formulation
//! Every number comes from a single low-precision series (the 1980-epoch "Moontool"
//! elements, see [`constants`]). Sun longitude goes through a Kepler solve; the Moon gets
//! its principal periodic corrections. Major phases land within minutes of their true
//! times, which is all a day-level classifier needs.
//!
//! ### Stateless
//! Every call is pure arithmetic over its inputs. Nothing is cached or shared, so any
//! number of queries may run concurrently without synchronization.
//!
//! ### Pipeline
//! 1. **Julian Day**: instant → continuous day count ([`julian`])
//! 2. **Positions**: Sun ([`solar`]) and Moon ([`lunar`]) ecliptic coordinates
//! 3. **Phase**: phase fraction, illumination, distance → [`MoonDetail`] ([`phase`])
//! 4. **Naming**: exact bands ([`moon_phase`]) or calendar-day resolution ([`day_phase`])
//!
//! ## Core Types
//!
//! - [`MoonDetail`]: the numeric record every classification is built on
//! - [`MoonPhase`]: the eight named phases
//! - [`CalendarMoon`] / [`ExactMoon`]: a detail plus its resolved phase

use serde::{Deserialize, Serialize};

// Module declarations
pub mod config;
pub mod constants;
pub mod day_phase;
pub mod error;
pub mod julian;
pub mod kepler;
pub mod lunar;
pub mod moon;
pub mod moon_phase;
pub mod phase;
pub mod solar;

#[cfg(test)]
mod tests;

pub use error::MoonError;
pub use moon::{calculate_exact_moon_phase, calculate_moon_phase, CalendarMoon, ExactMoon};
pub use moon_phase::MoonPhase;
pub use phase::moon_detail;

/// Age of the Moon since the last new moon, truncated to whole minutes.
///
/// # Example
/// ```
/// use moon_phase_lib::MoonAge;
///
/// let age = MoonAge::from_days(13.879);
/// assert_eq!((age.days, age.hours, age.minutes), (13, 21, 5));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoonAge {
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
}

impl MoonAge {
    /// Split fractional days into days, hours and minutes, truncating each part.
    pub fn from_days(elapsed: f64) -> Self {
        let elapsed = elapsed.max(0.0);
        let days = elapsed.trunc();
        let hours = (elapsed - days) * 24.0;
        let minutes = (hours - hours.trunc()) * 60.0;

        MoonAge {
            days: days as u32,
            hours: hours.trunc() as u32,
            minutes: minutes.trunc() as u32,
        }
    }
}

/// Numeric state of the Moon at one Julian Day.
///
/// All fields are derived from the same solar/lunar evaluation; two details compare equal
/// only if every value matches.
///
/// # Example
/// ```
/// use moon_phase_lib::moon_detail;
///
/// // 2024-01-25 18:00 UT, a few minutes after full moon
/// let detail = moon_detail(2_460_335.25);
/// assert!((detail.phase_fraction - 0.5).abs() < 0.01);
/// assert!(detail.illuminated_fraction > 0.99);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoonDetail {
    /// Julian Day the detail was computed for
    pub julian_day: f64,
    /// Days since the last new moon, `[0, synodic month)`
    pub days_elapsed_in_cycle: f64,
    /// `days_elapsed_in_cycle` as whole days, hours, minutes
    pub age_of_moon: MoonAge,
    /// Lit fraction of the visible disk, `[0, 1]`
    pub illuminated_fraction: f64,
    /// Distance between the centres of Earth and Moon, in kilometres
    pub distance_from_center_of_earth: f64,
    /// Position in the synodic cycle, `[0, 1)`: 0 new, 0.25 first quarter,
    /// 0.5 full, 0.75 last quarter
    pub phase_fraction: f64,
}
