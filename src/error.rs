//! # Error Types
//!
//! Every fallible operation in the library returns [`MoonError`]. The astronomy itself
//! cannot fail: errors only arise from caller contract violations (bad calendar fields,
//! impossible offsets, unsupported search targets) or from the bounded major-phase search
//! running past its cap, which indicates a defect upstream and is not retryable.

use crate::MoonPhase;
use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur while resolving a moon phase.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MoonError {
    /// A civil date/time field was out of range (e.g. month 13, hour 25)
    #[error("invalid calendar field {field}: {value}")]
    InvalidCalendarField { field: &'static str, value: i64 },

    /// A fixed UTC offset outside ±24h
    #[error("invalid UTC offset: {0} seconds")]
    InvalidUtcOffset(i32),

    /// The civil day has no representable local midnight in the time zone
    #[error("no local midnight exists on {0}")]
    NonexistentLocalMidnight(NaiveDate),

    /// Only new and full moons can be searched for
    #[error("cannot search for {0}, only new and full moons")]
    UnsupportedTarget(MoonPhase),

    /// The day-stepping search exceeded its cap without finding the target
    #[error("no {target} found within {cap} days of {from}")]
    SearchExhausted {
        target: MoonPhase,
        from: NaiveDate,
        cap: u32,
    },
}
