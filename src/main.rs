//! # Moon Tracker Application Entry Point
//!
//! Prints the Moon's phase for today (or a given date) in the configured time zone.
//!
//! ```text
//! moon-tracker [YYYY-MM-DD] [--json] [--exact] [--config PATH]
//! ```
//!
//! A given date is evaluated at local noon. Set `RUST_LOG=debug` to trace the day-span
//! and search steps.

use anyhow::Context;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc};
use log::debug;
use moon_phase_lib::{
    calculate_exact_moon_phase, calculate_moon_phase, config::Config, CalendarMoon, ExactMoon,
};
use std::env;

/// Command line options layered over the configuration file
struct Options {
    date: Option<NaiveDate>,
    json: bool,
    exact: bool,
    config_path: Option<String>,
}

fn parse_args() -> anyhow::Result<Options> {
    let mut options = Options {
        date: None,
        json: false,
        exact: false,
        config_path: None,
    };

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => options.json = true,
            "--exact" => options.exact = true,
            "--config" => {
                options.config_path = Some(args.next().context("--config needs a path")?);
            }
            other => {
                let date = NaiveDate::parse_from_str(other, "%Y-%m-%d")
                    .with_context(|| format!("expected a YYYY-MM-DD date, got {other:?}"))?;
                options.date = Some(date);
            }
        }
    }

    Ok(options)
}

/// Instant to evaluate: local noon on the requested date, or now.
fn query_instant(date: Option<NaiveDate>, tz: &FixedOffset) -> anyhow::Result<DateTime<Utc>> {
    match date {
        Some(date) => {
            let noon = date.and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap_or(NaiveTime::MIN));
            let local = tz
                .from_local_datetime(&noon)
                .single()
                .context("local noon does not exist")?;
            Ok(local.with_timezone(&Utc))
        }
        None => Ok(Utc::now()),
    }
}

fn print_calendar(moon: &CalendarMoon, place: &str) {
    let detail = &moon.detail;
    println!("{} ({})", moon.date, place);
    println!("  Phase:         {}", moon.moon_phase);
    println!(
        "  Illuminated:   {:.1}%",
        detail.illuminated_fraction * 100.0
    );
    println!(
        "  Age:           {}d {}h {}m",
        detail.age_of_moon.days, detail.age_of_moon.hours, detail.age_of_moon.minutes
    );
    println!(
        "  Distance:      {:.0} km",
        detail.distance_from_center_of_earth
    );
    println!("  Full moon in:  {} days", moon.days_till_full_moon);
    println!("  New moon in:   {} days", moon.days_till_new_moon);
}

fn print_exact(moon: &ExactMoon) {
    let detail = &moon.detail;
    println!("{}", moon.instant.to_rfc3339());
    println!("  Phase:         {}", moon.exact_moon_phase);
    println!("  Phase fraction {:.4}", detail.phase_fraction);
    println!(
        "  Illuminated:   {:.1}%",
        detail.illuminated_fraction * 100.0
    );
}

/// Main application entry point.
fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let options = parse_args()?;
    let config = match &options.config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    };
    let tz = config.time_zone()?;
    let json = options.json || config.output.json;
    let exact = options.exact || config.output.exact;

    let instant = query_instant(options.date, &tz)?;
    debug!("querying {instant} for observer at UTC{tz}");

    if exact {
        let moon = calculate_exact_moon_phase(instant);
        if json {
            println!("{}", serde_json::to_string_pretty(&moon)?);
        } else {
            print_exact(&moon);
        }
    } else {
        let moon = calculate_moon_phase(instant, &tz)?;
        if json {
            println!("{}", serde_json::to_string_pretty(&moon)?);
        } else {
            print_calendar(&moon, &config.observer.name);
        }
    }

    Ok(())
}
