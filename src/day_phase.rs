//! # Calendar-Day Phase Resolution
//!
//! A civil day "has" a major phase if the exact instant of that phase falls anywhere
//! between local midnight and the following local midnight. Such days report the major
//! phase regardless of the hour queried; every other day reports one of the four
//! intermediate phases.
//!
//! Day boundaries are exact: the span runs from the Julian Day of local midnight to the
//! Julian Day of the next local midnight in the caller's time zone, so a DST transition
//! day is 23 or 25 hours long.
//!
//! ## Cyclic wrap
//! Phase fractions increase through the day, so an end fraction smaller than the start
//! fraction means the span crossed 1.0 → 0.0, i.e. contained a new moon.

use crate::error::MoonError;
use crate::julian::julian_day;
use crate::moon_phase::MoonPhase;
use crate::phase::phase_fraction;
use chrono::{DateTime, Days, LocalResult, NaiveDate, NaiveTime, TimeZone};
use log::debug;

/// Upper bound on days stepped by [`days_until`]; one synodic month is under 30.
pub const SEARCH_CAP: u32 = 40;

/// Julian Days of local midnight at the start and end of a civil day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DaySpan {
    pub start: f64,
    pub end: f64,
}

/// First instant of `date` in `tz`.
///
/// An ambiguous midnight resolves to the earlier instant; a skipped midnight moves to the
/// first whole hour of the day that exists (01:00 or 02:00).
pub fn local_midnight<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> Result<DateTime<Tz>, MoonError> {
    for hour in 0..3 {
        let local = date.and_time(NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN));
        match tz.from_local_datetime(&local) {
            LocalResult::Single(t) => return Ok(t),
            LocalResult::Ambiguous(earliest, _) => return Ok(earliest),
            LocalResult::None => continue,
        }
    }
    Err(MoonError::NonexistentLocalMidnight(date))
}

/// Julian Day span of the civil day `date` in `tz`.
pub fn day_span<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> Result<DaySpan, MoonError> {
    let next = date
        .checked_add_days(Days::new(1))
        .ok_or(MoonError::NonexistentLocalMidnight(date))?;

    let span = DaySpan {
        start: julian_day(&local_midnight(date, tz)?),
        end: julian_day(&local_midnight(next, tz)?),
    };
    debug!("day span for {date}: JD {} .. {}", span.start, span.end);
    Ok(span)
}

/// First major phase whose nominal fraction lies within `[start, end]`.
///
/// Thresholds are checked in the order new, first quarter, full, last quarter. A
/// wrapping range (`start > end`) always contains the new moon.
pub fn major_phase_in_range(start: f64, end: f64) -> Option<MoonPhase> {
    let wraps = start > end;
    MoonPhase::MAJOR.into_iter().find(|&phase| match phase {
        MoonPhase::NewMoon => wraps || (start <= 0.0 && end >= 0.0),
        _ => phase
            .fraction()
            .is_some_and(|threshold| start <= threshold && threshold <= end),
    })
}

/// Intermediate phase for a day without a major phase.
///
/// No major bands here: a major threshold not caught by [`major_phase_in_range`] is,
/// by definition, not on this day.
pub fn minor_phase(phase_fraction: f64) -> MoonPhase {
    match phase_fraction {
        p if p < 0.25 => MoonPhase::WaxingCrescent,
        p if p < 0.50 => MoonPhase::WaxingGibbous,
        p if p < 0.75 => MoonPhase::WaningGibbous,
        _ => MoonPhase::WaningCrescent,
    }
}

/// Phase of a day whose midnights have phase fractions `start` and `end`.
pub fn span_phase(start: f64, end: f64) -> MoonPhase {
    major_phase_in_range(start, end).unwrap_or_else(|| minor_phase(start))
}

/// Phase of the civil day `date` in `tz`, preferring any major phase within the day.
pub fn resolve_calendar_phase<Tz: TimeZone>(
    date: NaiveDate,
    tz: &Tz,
) -> Result<MoonPhase, MoonError> {
    let span = day_span(date, tz)?;
    Ok(span_phase(phase_fraction(span.start), phase_fraction(span.end)))
}

/// Steps through civil days starting at `from`, passing each day's offset and calendar
/// phase to `visit` until it returns `true`.
///
/// Each midnight is evaluated once; a day's end is the next day's start. The walk also
/// ends after [`SEARCH_CAP`] days or when the calendar runs out.
fn walk_days<Tz, F>(from: NaiveDate, tz: &Tz, mut visit: F) -> Result<(), MoonError>
where
    Tz: TimeZone,
    F: FnMut(u32, MoonPhase) -> bool,
{
    let mut day = from;
    let mut start = phase_fraction(julian_day(&local_midnight(day, tz)?));
    for offset in 0..=SEARCH_CAP {
        let Some(next) = day.checked_add_days(Days::new(1)) else {
            break;
        };
        let end = phase_fraction(julian_day(&local_midnight(next, tz)?));
        if visit(offset, span_phase(start, end)) {
            break;
        }
        day = next;
        start = end;
    }
    Ok(())
}

/// Civil days from `from` until the first day (possibly `from` itself) whose calendar
/// phase is `target`.
///
/// Only [`MoonPhase::NewMoon`] and [`MoonPhase::FullMoon`] are accepted. Returns `0`
/// exactly when `from` is itself a `target` day.
///
/// Every synodic month is shorter than [`SEARCH_CAP`] days, so
/// [`MoonError::SearchExhausted`] only surfaces when the walk runs off the end of the
/// representable calendar.
pub fn days_until<Tz: TimeZone>(
    target: MoonPhase,
    from: NaiveDate,
    tz: &Tz,
) -> Result<u32, MoonError> {
    if !matches!(target, MoonPhase::NewMoon | MoonPhase::FullMoon) {
        return Err(MoonError::UnsupportedTarget(target));
    }

    let mut found = None;
    walk_days(from, tz, |offset, phase| {
        if phase == target {
            found = Some(offset);
        }
        found.is_some()
    })?;

    match found {
        Some(offset) => {
            debug!("{target} {offset} days from {from}");
            Ok(offset)
        }
        None => Err(MoonError::SearchExhausted {
            target,
            from,
            cap: SEARCH_CAP,
        }),
    }
}

/// A civil day's calendar phase with both countdowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayOutlook {
    pub phase: MoonPhase,
    pub days_till_full_moon: u32,
    pub days_till_new_moon: u32,
}

/// Calendar phase of `from` plus the [`days_until`] counts for full and new moon, from a
/// single walk forward.
pub fn day_outlook<Tz: TimeZone>(from: NaiveDate, tz: &Tz) -> Result<DayOutlook, MoonError> {
    let mut phase = None;
    let mut full = None;
    let mut new = None;

    walk_days(from, tz, |offset, today| {
        phase.get_or_insert(today);
        match today {
            MoonPhase::FullMoon => {
                full.get_or_insert(offset);
            }
            MoonPhase::NewMoon => {
                new.get_or_insert(offset);
            }
            _ => {}
        }
        full.is_some() && new.is_some()
    })?;

    match (phase, full, new) {
        (Some(phase), Some(days_till_full_moon), Some(days_till_new_moon)) => {
            debug!("{from}: {phase}, full in {days_till_full_moon}, new in {days_till_new_moon}");
            Ok(DayOutlook {
                phase,
                days_till_full_moon,
                days_till_new_moon,
            })
        }
        _ => Err(MoonError::SearchExhausted {
            target: if full.is_none() {
                MoonPhase::FullMoon
            } else {
                MoonPhase::NewMoon
            },
            from,
            cap: SEARCH_CAP,
        }),
    }
}
