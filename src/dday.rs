//! D-Day calculator: signed day distance between today and a target date.
use chrono::{Datelike, Days, NaiveDate};

use crate::error::DdayError;

/// Calendar span split into years, months and days.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Breakdown {
    pub years: i32,
    pub months: u32,
    pub days: u32,
}

/// Result of comparing a target date with today.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DdayResult {
    pub today: NaiveDate,
    pub target: NaiveDate,
    /// `target - today` in days; negative once the target has passed.
    pub days: i64,
    pub label: String,
    pub breakdown: Breakdown,
    pub weeks: i64,
    pub remaining_days: i64,
    pub hours: i64,
}

pub fn calculate(today: NaiveDate, target: NaiveDate) -> DdayResult {
    let days = target.signed_duration_since(today).num_days();
    let total = days.abs();
    DdayResult {
        today,
        target,
        days,
        label: label(days),
        breakdown: breakdown(today, target),
        weeks: total / 7,
        remaining_days: total % 7,
        hours: total * 24,
    }
}

/// `D-n` before the target, `D-Day` on it, `D+n` after it.
pub fn label(days: i64) -> String {
    match days {
        0 => "D-Day".to_string(),
        d if d > 0 => format!("D-{d}"),
        d => format!("D+{}", d.unsigned_abs()),
    }
}

/// Years, months and days between two dates, in either order.
///
/// Day borrowing uses the length of the month before the later date. When
/// the earlier date's day does not exist in that month (Jan 31 against a
/// 29-day February) it is clamped to the month's last day.
pub fn breakdown(a: NaiveDate, b: NaiveDate) -> Breakdown {
    let (start, end) = if a <= b { (a, b) } else { (b, a) };

    let mut years = end.year() - start.year();
    let mut months = end.month() as i32 - start.month() as i32;
    if months < 0 {
        years -= 1;
        months += 12;
    }

    let mut days = end.day() as i32 - start.day() as i32;
    if days < 0 {
        months -= 1;
        if months < 0 {
            years -= 1;
            months += 12;
        }
        let previous_month_len = days_in_previous_month(end) as i32;
        days = end.day() as i32 + previous_month_len - (start.day() as i32).min(previous_month_len);
    }

    Breakdown {
        years,
        months: months as u32,
        days: days as u32,
    }
}

fn days_in_previous_month(date: NaiveDate) -> u32 {
    date.with_day(1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

/// `today` moved forward by `days`.
pub fn preset_offset(today: NaiveDate, days: u64) -> Result<NaiveDate, DdayError> {
    today
        .checked_add_days(Days::new(days))
        .ok_or(DdayError::OutOfRange(days))
}

/// The next February 15th, today included.
pub fn next_graduation(today: NaiveDate) -> NaiveDate {
    let this_year = NaiveDate::from_ymd_opt(today.year(), 2, 15).unwrap_or(today);
    if today > this_year {
        NaiveDate::from_ymd_opt(today.year() + 1, 2, 15).unwrap_or(this_year)
    } else {
        this_year
    }
}

/// January 1st of next year.
pub fn next_new_year(today: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(today.year() + 1, 1, 1).unwrap_or(today)
}

pub fn parse_date(s: &str) -> Result<NaiveDate, DdayError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| DdayError::InvalidDate(s.to_string()))
}

/// `YYYY-MM-DD (Weekday)`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d (%a)").to_string()
}

pub fn format_breakdown(breakdown: &Breakdown) -> String {
    let mut parts = Vec::new();
    if breakdown.years > 0 {
        parts.push(format!("{}y", breakdown.years));
    }
    if breakdown.months > 0 {
        parts.push(format!("{}m", breakdown.months));
    }
    parts.push(format!("{}d", breakdown.days));
    parts.join(" ")
}
