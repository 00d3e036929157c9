//! # Named Moon Phases
//!
//! The eight-phase cycle and the instantaneous ("exact") classifier.
//!
//! Major phases (new, first quarter, full, last quarter) are instants, not intervals.
//! The exact classifier approximates them with narrow bands around their nominal
//! fractions so that a query a few hours either side still reads as the major phase:
//!
//! ```text
//! 0.00 ─ new ─ 0.02 ─ waxing crescent ─ 0.23 ─ first quarter ─ 0.27 ─ waxing gibbous ─ 0.48
//! 0.48 ─ full ─ 0.52 ─ waning gibbous ─ 0.73 ─ last quarter ─ 0.77 ─ waning crescent ─ 0.98 ─ new
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the eight named phases, in cyclic order starting at new moon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MoonPhase {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhase {
    /// All phases in cycle order.
    pub const ALL: [MoonPhase; 8] = [
        MoonPhase::NewMoon,
        MoonPhase::WaxingCrescent,
        MoonPhase::FirstQuarter,
        MoonPhase::WaxingGibbous,
        MoonPhase::FullMoon,
        MoonPhase::WaningGibbous,
        MoonPhase::LastQuarter,
        MoonPhase::WaningCrescent,
    ];

    /// Major phases in the priority order the calendar resolver checks them.
    pub const MAJOR: [MoonPhase; 4] = [
        MoonPhase::NewMoon,
        MoonPhase::FirstQuarter,
        MoonPhase::FullMoon,
        MoonPhase::LastQuarter,
    ];

    /// True for new moon, first quarter, full moon and last quarter.
    pub fn is_major(self) -> bool {
        self.fraction().is_some()
    }

    /// Nominal phase fraction of a major phase; `None` for the four intermediate phases.
    pub fn fraction(self) -> Option<f64> {
        match self {
            MoonPhase::NewMoon => Some(0.0),
            MoonPhase::FirstQuarter => Some(0.25),
            MoonPhase::FullMoon => Some(0.5),
            MoonPhase::LastQuarter => Some(0.75),
            _ => None,
        }
    }

    /// The phase that follows this one in the cycle.
    pub fn next(self) -> MoonPhase {
        let i = MoonPhase::ALL.iter().position(|&p| p == self).unwrap_or(0);
        MoonPhase::ALL[(i + 1) % MoonPhase::ALL.len()]
    }

    /// Human-readable name, e.g. "Waxing Gibbous".
    pub fn name(self) -> &'static str {
        match self {
            MoonPhase::NewMoon => "New Moon",
            MoonPhase::WaxingCrescent => "Waxing Crescent",
            MoonPhase::FirstQuarter => "First Quarter",
            MoonPhase::WaxingGibbous => "Waxing Gibbous",
            MoonPhase::FullMoon => "Full Moon",
            MoonPhase::WaningGibbous => "Waning Gibbous",
            MoonPhase::LastQuarter => "Last Quarter",
            MoonPhase::WaningCrescent => "Waning Crescent",
        }
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify a phase fraction in `[0, 1)` at a single instant.
pub fn classify_exact(phase_fraction: f64) -> MoonPhase {
    match phase_fraction {
        p if p < 0.02 => MoonPhase::NewMoon,
        p if p < 0.23 => MoonPhase::WaxingCrescent,
        p if p < 0.27 => MoonPhase::FirstQuarter,
        p if p < 0.48 => MoonPhase::WaxingGibbous,
        p if p < 0.52 => MoonPhase::FullMoon,
        p if p < 0.73 => MoonPhase::WaningGibbous,
        p if p < 0.77 => MoonPhase::LastQuarter,
        p if p < 0.98 => MoonPhase::WaningCrescent,
        _ => MoonPhase::NewMoon,
    }
}
