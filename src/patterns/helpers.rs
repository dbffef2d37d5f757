//! Capture extraction and calendar arithmetic shared by the pattern rows.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use regex::Captures;

/// Hour every date-only shape resolves to.
pub const DEFAULT_HOUR: u32 = 9;

/// Integer value of capture group `idx`.
pub fn group_int(caps: &Captures<'_>, idx: usize) -> Option<i64> {
    caps.get(idx)?.as_str().parse().ok()
}

/// Text of capture group `idx`, if it participated in the match. Input is
/// normalized before matching, so the text is already lowercase.
pub fn group_str<'t>(caps: &Captures<'t>, idx: usize) -> Option<&'t str> {
    Some(caps.get(idx)?.as_str())
}

/// 12-hour to 24-hour conversion. Without a meridiem the hour is taken
/// as written; `None` when the result cannot denote an hour of day.
pub fn hour_in_24(hour: i64, meridiem: Option<&str>) -> Option<u32> {
    let hour_24 = match meridiem {
        Some("pm") => match hour {
            12 => 12,
            0..=11 => hour + 12,
            _ => return None,
        },
        Some("am") => match hour {
            12 => 0,
            0..=23 => hour,
            _ => return None,
        },
        _ => match hour {
            0..=23 => hour,
            _ => return None,
        },
    };
    Some(hour_24 as u32)
}

/// `date` at `hour:minute`.
pub fn at_time(date: NaiveDate, hour: u32, minute: u32) -> Option<NaiveDateTime> {
    Some(date.and_time(NaiveTime::from_hms_opt(hour, minute, 0)?))
}

/// Next calendar date strictly after `now` falling on `weekday`. A reference
/// already on the requested weekday steps a full week, never zero days.
pub fn next_weekday(now: NaiveDateTime, weekday: Weekday) -> NaiveDate {
    let today = now.weekday().num_days_from_monday() as i64;
    let target = weekday.num_days_from_monday() as i64;
    let mut days_until = target - today;
    if days_until <= 0 {
        days_until += 7;
    }
    now.date() + Duration::days(days_until)
}

/// Rollover: a candidate at or before `now` moves forward one day.
pub fn roll_to_next_day(candidate: NaiveDateTime, now: NaiveDateTime) -> Option<NaiveDateTime> {
    if candidate <= now { candidate.checked_add_signed(Duration::days(1)) } else { Some(candidate) }
}

/// Weekday for a (possibly abbreviated) weekday name.
pub fn weekday_from_name(name: &str) -> Option<Weekday> {
    match name {
        "monday" | "mon" => Some(Weekday::Mon),
        "tuesday" | "tue" | "tues" => Some(Weekday::Tue),
        "wednesday" | "wed" => Some(Weekday::Wed),
        "thursday" | "thu" | "thurs" => Some(Weekday::Thu),
        "friday" | "fri" => Some(Weekday::Fri),
        "saturday" | "sat" => Some(Weekday::Sat),
        "sunday" | "sun" => Some(Weekday::Sun),
        _ => None,
    }
}

/// `dt` shifted by whole calendar months, day-of-month clamped to the
/// target month's length (Jan 31 + 1 month = Feb 29 in a leap year).
pub fn months_after(dt: NaiveDateTime, months: i32) -> NaiveDateTime {
    let zero_based = dt.date().month() as i32 - 1 + months;
    let year = dt.date().year() + zero_based.div_euclid(12);
    let month = (zero_based.rem_euclid(12) + 1) as u32;
    let day = dt.date().day().min(days_in_month(year, month));
    let date = NaiveDate::from_ymd_opt(year, month, day).unwrap_or_else(|| dt.date());
    NaiveDateTime::new(date, dt.time())
}

/// Number of days in `month` of `year`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 1).unwrap());
    (first_next - Duration::days(1)).day()
}
