//! Fiscal-period selectors and date-range math.
//!
//! The dashboard filters everything by a year selector token: `cal-2024` is
//! the 2024 calendar year, `fy-2024-25` is the fiscal year running July 1,
//! 2024 through June 30, 2025, and `all` means no range at all (handled by
//! the caller before the token reaches this module).

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult, ValidationError};

/// First fiscal year offered in the selector dropdown (2023-24).
const FISCAL_FLOOR_YEAR: i32 = 2023;

/// First calendar year offered in the selector dropdown.
const CALENDAR_FLOOR_YEAR: i32 = 2024;

/// Year convention a selector token refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YearKind {
    Calendar,
    Fiscal,
}

/// A year selector token split into its convention and year component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedYearToken {
    #[serde(rename = "type")]
    pub kind: YearKind,
    pub year: String,
}

/// Inclusive UTC date range, day-boundary aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Splits a year selector token such as `cal-2024` or `fy-2024-25`.
///
/// Unprefixed tokens fall back to the calendar-year interpretation; older
/// clients sent bare year strings and those must keep working.
pub fn parse_year_token(token: &str) -> ParsedYearToken {
    if let Some(year) = token.strip_prefix("fy-") {
        return ParsedYearToken {
            kind: YearKind::Fiscal,
            year: year.to_string(),
        };
    }
    if let Some(year) = token.strip_prefix("cal-") {
        return ParsedYearToken {
            kind: YearKind::Calendar,
            year: year.to_string(),
        };
    }
    ParsedYearToken {
        kind: YearKind::Calendar,
        year: token.to_string(),
    }
}

/// Resolves a year string into an absolute date range.
///
/// Calendar years span `Jan 1 00:00:00.000` to `Dec 31 23:59:59.999`. Fiscal
/// years are keyed on the start year alone: for `"2024-25"` only the `2024`
/// drives the range (`Jul 1, 2024` to `Jun 30, 2025`); the end-year suffix is
/// cosmetic and never checked against start + 1.
///
/// A year component that does not parse as a number is rejected with a
/// validation error.
pub fn year_date_range(year: &str, is_fiscal: bool) -> DomainResult<DateRange> {
    if is_fiscal {
        // Fiscal year format: "2024-25"
        let start_year = parse_year_component(year.split('-').next().unwrap_or(year))?;
        let end_year = start_year + 1;

        return Ok(DateRange {
            start: utc_instant(start_year, 7, 1, 0, 0, 0, 0)?,
            end: utc_instant(end_year, 6, 30, 23, 59, 59, 999)?,
        });
    }

    // Calendar year format: "2024"
    let cal_year = parse_year_component(year)?;
    Ok(DateRange {
        start: utc_instant(cal_year, 1, 1, 0, 0, 0, 0)?,
        end: utc_instant(cal_year, 12, 31, 23, 59, 59, 999)?,
    })
}

fn parse_year_component(part: &str) -> DomainResult<i32> {
    part.trim().parse::<i32>().map_err(|_| {
        warn!("malformed year component {:?} in selector token", part);
        DomainError::Validation(ValidationError::format(
            "year",
            "must be a numeric year, e.g. 2024 or 2024-25",
        ))
    })
}

fn utc_instant(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    min: u32,
    sec: u32,
    millis: i64,
) -> DomainResult<DateTime<Utc>> {
    let instant = Utc
        .with_ymd_and_hms(year, month, day, hour, min, sec)
        .single()
        .ok_or_else(|| DomainError::Internal(format!("year {} out of range", year)))?;
    Ok(instant + Duration::milliseconds(millis))
}

/// Fiscal year containing the given day, formatted `"YYYY-YY"`.
///
/// Fiscal years begin July 1: July or later starts the fiscal year in the
/// same calendar year, earlier months belong to the one started the year
/// before.
pub fn current_fiscal_year_on(today: NaiveDate) -> String {
    let fiscal_start_year = if today.month() >= 7 {
        today.year()
    } else {
        today.year() - 1
    };
    format_fiscal_year(fiscal_start_year)
}

/// Fiscal year containing today.
pub fn current_fiscal_year() -> String {
    current_fiscal_year_on(Utc::now().date_naive())
}

fn format_fiscal_year(start_year: i32) -> String {
    format!("{}-{:02}", start_year, (start_year + 1).rem_euclid(100))
}

/// Fiscal year dropdown options, newest first, from one year past the
/// current fiscal year down to 2023-24.
pub fn fiscal_year_options_on(today: NaiveDate) -> Vec<String> {
    let current = current_fiscal_year_on(today);
    let current_start = current
        .split('-')
        .next()
        .and_then(|y| y.parse::<i32>().ok())
        .unwrap_or(FISCAL_FLOOR_YEAR);

    (FISCAL_FLOOR_YEAR..=current_start + 1)
        .rev()
        .map(format_fiscal_year)
        .collect()
}

pub fn fiscal_year_options() -> Vec<String> {
    fiscal_year_options_on(Utc::now().date_naive())
}

/// Calendar year dropdown options, newest first, from next year down to 2024.
pub fn calendar_year_options_on(today: NaiveDate) -> Vec<String> {
    (CALENDAR_FLOOR_YEAR..=today.year() + 1)
        .rev()
        .map(|year| year.to_string())
        .collect()
}

pub fn calendar_year_options() -> Vec<String> {
    calendar_year_options_on(Utc::now().date_naive())
}

/// Default selector token: the current calendar year.
pub fn default_year_token_on(today: NaiveDate) -> String {
    format!("cal-{}", today.year())
}

pub fn default_year_token() -> String {
    default_year_token_on(Utc::now().date_naive())
}

/// Month labels in fiscal order, July through June.
pub fn fiscal_year_months() -> [&'static str; 12] {
    [
        "Jul", "Aug", "Sep", "Oct", "Nov", "Dec", "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    ]
}

/// Month labels in calendar order.
pub fn calendar_year_months() -> [&'static str; 12] {
    [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ]
}

/// Position of a date's month within the fiscal year: July is 0, June is 11.
pub fn fiscal_month_index<D: Datelike>(date: &D) -> usize {
    ((date.month0() + 6) % 12) as usize
}
