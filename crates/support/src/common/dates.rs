//! Date parsing and formatting helpers.
//!
//! Input dates arrive in whatever form the search front end sends them:
//! `dd.mm.yyyy`, ISO `yyyy-mm-dd`, either with an optional time, RFC 3339, or
//! the compact `ddmmyy`/`ddmmyyyy` forms used in CRS requests. Output formats
//! use chrono's `strftime` syntax.
//!
//! Helpers returning `String` yield an empty string when the input cannot be
//! parsed or the format string is invalid.

use std::fmt::Write;

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};

const DATE_TIME_FORMATS: &[&str] = &[
    "%d.%m.%Y %H:%M:%S",
    "%d.%m.%Y %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

const DATE_FORMATS: &[&str] = &["%d.%m.%Y", "%Y-%m-%d", "%Y/%m/%d"];

/// Parses a date or date-time string.
///
/// Date-only input resolves to midnight. RFC 3339 input is converted to UTC.
pub fn parse_date_time(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Some(dt) = DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
    {
        return Some(dt);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.naive_utc());
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(input, fmt).ok())
        .map(|date| date.and_time(NaiveTime::MIN))
}

/// Expands the compact `ddmmyy` and `ddmmyyyy` forms to `dd.mm.yyyy`.
///
/// Two-digit years above 64 belong to the 1900s.
fn expand_compact(input: &str) -> Option<String> {
    let input = input.trim();
    if !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match input.len() {
        6 => {
            let yy: u32 = input[4..6].parse().ok()?;
            let year = if yy > 64 { 1900 + yy } else { 2000 + yy };
            Some(format!("{}.{}.{year}", &input[0..2], &input[2..4]))
        }
        8 => Some(format!("{}.{}.{}", &input[0..2], &input[2..4], &input[4..8])),
        _ => None,
    }
}

fn parse_date_input(input: &str) -> Option<NaiveDateTime> {
    match expand_compact(input) {
        Some(expanded) => parse_date_time(&expanded),
        None => parse_date_time(input),
    }
}

fn format_with(dt: &NaiveDateTime, format: &str) -> String {
    let mut out = String::new();
    match write!(out, "{}", dt.format(format)) {
        Ok(()) => out,
        Err(_) => String::new(),
    }
}

/// Formats a date, accepting the compact `ddmmyy` and `ddmmyyyy` forms.
///
/// ```
/// use ors_support::common::date;
///
/// assert_eq!(date("050324", "%d.%m.%Y"), "05.03.2024");
/// assert_eq!(date("050370", "%Y-%m-%d"), "1970-03-05");
/// assert_eq!(date("not a date", "%d.%m.%Y"), "");
/// ```
pub fn date(input: &str, format: &str) -> String {
    parse_date_input(input)
        .map(|dt| format_with(&dt, format))
        .unwrap_or_default()
}

/// Formats a date-time.
pub fn date_time(input: &str, format: &str) -> String {
    parse_date_time(input)
        .map(|dt| format_with(&dt, format))
        .unwrap_or_default()
}

/// Returns the age in whole years of someone born on `birth` as of `today`.
pub fn age_on(birth: &str, today: NaiveDate) -> Option<u32> {
    let birth = parse_date_input(birth)?.date();
    today.years_since(birth)
}

/// Returns the age in whole years of someone born on `birth` as of today
/// (local time).
pub fn date_to_age(birth: &str) -> Option<u32> {
    age_on(birth, Local::now().date_naive())
}

/// Inserts colons into compact `HHMM` and `HHMMSS` times. Other input is
/// returned unchanged.
pub fn to_time(time: &str) -> String {
    let digits = time.bytes().all(|b| b.is_ascii_digit());
    match time.len() {
        4 if digits => format!("{}:{}", &time[0..2], &time[2..4]),
        6 if digits => format!("{}:{}:{}", &time[0..2], &time[2..4], &time[4..6]),
        _ => time.to_string(),
    }
}

/// Formats a date-time as a UTC timestamp (`2024-03-05T12:00:00Z`).
///
/// Input without an offset is taken to be UTC already.
pub fn gmt_date_time(input: &str) -> String {
    parse_date_time(input)
        .map(|dt| format_with(&dt, "%Y-%m-%dT%H:%M:%SZ"))
        .unwrap_or_default()
}

/// Whole days from `from` to `to`, negative when `to` is earlier.
pub fn days_between(from: &str, to: &str) -> Option<i64> {
    Some((parse_date_input(to)? - parse_date_input(from)?).num_days())
}

/// Whole hours from `from` to `to`, negative when `to` is earlier.
pub fn hours_between(from: &str, to: &str) -> Option<i64> {
    Some((parse_date_input(to)? - parse_date_input(from)?).num_hours())
}

/// What [`is_old_date`] compares a date against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OldDateMode {
    /// Calendar dates only; today is not old.
    #[default]
    Date,
    /// Date and time against the current instant.
    DateTime,
    /// Date and time against today's 00:00:00.
    MidnightEarly,
    /// Date and time against today's 23:59:59.
    MidnightLate,
}

/// Returns `true` if `input` lies in the past (local time).
pub fn is_old_date(input: &str, mode: OldDateMode) -> bool {
    is_old_date_at(input, mode, Local::now().naive_local())
}

/// Returns `true` if `input` lies before `now` according to `mode`.
///
/// Unparsable input counts as old.
pub fn is_old_date_at(input: &str, mode: OldDateMode, now: NaiveDateTime) -> bool {
    let Some(dt) = parse_date_input(input) else {
        return true;
    };
    match mode {
        OldDateMode::Date => dt.date() < now.date(),
        OldDateMode::DateTime => dt < now,
        OldDateMode::MidnightEarly => dt < now.date().and_time(NaiveTime::MIN),
        OldDateMode::MidnightLate => dt < end_of_day(now.date()),
    }
}

fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN))
}

/// Shifts a date by days, months and years, then formats it.
///
/// Overflowing fields roll over into the next unit, so 31.01. plus one month
/// lands in March. The resulting time is 23:59:59.
///
/// ```
/// use ors_support::common::inc_date;
///
/// assert_eq!(inc_date("28.02.2023", 1, 0, 0, "%d.%m.%Y"), "01.03.2023");
/// assert_eq!(inc_date("31.01.2023", 0, 1, 0, "%d.%m.%Y"), "03.03.2023");
/// ```
pub fn inc_date(input: &str, days: i32, months: i32, years: i32, format: &str) -> String {
    let Some(base) = parse_date_input(input).map(|dt| dt.date()) else {
        return String::new();
    };

    let total_months = (i64::from(base.year()) + i64::from(years)) * 12
        + i64::from(base.month0())
        + i64::from(months);
    let year = total_months.div_euclid(12);
    let month = total_months.rem_euclid(12) + 1;
    let day_offset = i64::from(base.day()) - 1 + i64::from(days);

    let shifted = i32::try_from(year)
        .ok()
        .and_then(|year| NaiveDate::from_ymd_opt(year, month as u32, 1))
        .and_then(|first| first.checked_add_signed(TimeDelta::try_days(day_offset)?));

    match shifted {
        Some(date) => format_with(&end_of_day(date), format),
        None => String::new(),
    }
}

/// Unit names used by [`time_elapsed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElapsedLabels {
    /// Singular year.
    pub year: String,
    /// Plural years.
    pub years: String,
    /// Singular month.
    pub month: String,
    /// Plural months.
    pub months: String,
    /// Singular day.
    pub day: String,
    /// Plural days.
    pub days: String,
    /// Singular hour.
    pub hour: String,
    /// Plural hours.
    pub hours: String,
    /// Singular minute.
    pub minute: String,
    /// Plural minutes.
    pub minutes: String,
    /// Singular second.
    pub second: String,
    /// Plural seconds.
    pub seconds: String,
}

impl Default for ElapsedLabels {
    fn default() -> Self {
        Self {
            year: "year".to_string(),
            years: "years".to_string(),
            month: "month".to_string(),
            months: "months".to_string(),
            day: "day".to_string(),
            days: "days".to_string(),
            hour: "hour".to_string(),
            hours: "hours".to_string(),
            minute: "minute".to_string(),
            minutes: "minutes".to_string(),
            second: "second".to_string(),
            seconds: "seconds".to_string(),
        }
    }
}

/// Describes how long ago `then` was, in its largest whole unit
/// (`"3 days"`, `"1 hour"`). Months are 30 days, years 365.
pub fn time_elapsed(then: DateTime<Utc>, now: DateTime<Utc>, labels: &ElapsedLabels) -> String {
    let elapsed = (now - then).num_seconds();
    if elapsed < 1 {
        return format!("0 {}", labels.seconds);
    }

    let units: [(i64, &str, &str); 6] = [
        (365 * 24 * 60 * 60, labels.year.as_str(), labels.years.as_str()),
        (30 * 24 * 60 * 60, labels.month.as_str(), labels.months.as_str()),
        (24 * 60 * 60, labels.day.as_str(), labels.days.as_str()),
        (60 * 60, labels.hour.as_str(), labels.hours.as_str()),
        (60, labels.minute.as_str(), labels.minutes.as_str()),
        (1, labels.second.as_str(), labels.seconds.as_str()),
    ];

    for (secs, singular, plural) in units {
        let amount = elapsed as f64 / secs as f64;
        if amount >= 1.0 {
            let rounded = amount.round() as i64;
            let label = if rounded > 1 { plural } else { singular };
            return format!("{rounded} {label}");
        }
    }

    format!("0 {}", labels.seconds)
}
