//! Day-name shapes: "tomorrow", "monday at 3pm", bare weekday names.
//!
//! Bare weekday alternations are word-bounded so that "mon" cannot fire
//! inside "month"; everything else keeps plain substring matching.

use chrono::Weekday;

use crate::patterns::helpers::{
    DEFAULT_HOUR, at_time, group_int, group_str, hour_in_24, next_weekday, weekday_from_name,
};
use crate::{Category, Pattern};

/// "tomorrow", "tmrw": tomorrow at 09:00. Matches before any row that could
/// use a trailing clock time, so "tomorrow at 3pm" also lands at 09:00.
pub fn tomorrow() -> Pattern {
    pattern! {
        name: "tomorrow",
        category: Category::Tomorrow,
        matcher: r"(tomorrow|tmrw)",
        eval: |_caps, now| at_time(now.date().succ_opt()?, DEFAULT_HOUR, 0),
    }
}

/// "monday at 3pm", "friday at 17:00": next occurrence of the weekday at the
/// given time. Minutes optional; phrases with minutes are usually taken by
/// the earlier clock row instead.
pub fn weekday_at_time() -> Pattern {
    pattern! {
        name: "<weekday> at <time>",
        category: Category::Weekday,
        matcher: r"(monday|tuesday|wednesday|thursday|friday|saturday|sunday)\s+at\s+(\d{1,2})(?::(\d{2}))?\s*(am|pm)?",
        eval: |caps, now| {
            let weekday = weekday_from_name(group_str(caps, 1)?)?;
            let hour = hour_in_24(group_int(caps, 2)?, group_str(caps, 4))?;
            let minute = match group_int(caps, 3) {
                Some(minute) if minute > 59 => return None,
                Some(minute) => minute as u32,
                None => 0,
            };
            at_time(next_weekday(now, weekday), hour, minute)
        },
    }
}

/// "monday", "mon": next Monday at 09:00.
pub fn monday() -> Pattern {
    pattern! {
        name: "monday",
        category: Category::Weekday,
        matcher: r"\b(monday|mon)\b",
        eval: |_caps, now| at_time(next_weekday(now, Weekday::Mon), DEFAULT_HOUR, 0),
    }
}

/// "tuesday", "tue", "tues"
pub fn tuesday() -> Pattern {
    pattern! {
        name: "tuesday",
        category: Category::Weekday,
        matcher: r"\b(tuesday|tue|tues)\b",
        eval: |_caps, now| at_time(next_weekday(now, Weekday::Tue), DEFAULT_HOUR, 0),
    }
}

/// "wednesday", "wed"
pub fn wednesday() -> Pattern {
    pattern! {
        name: "wednesday",
        category: Category::Weekday,
        matcher: r"\b(wednesday|wed)\b",
        eval: |_caps, now| at_time(next_weekday(now, Weekday::Wed), DEFAULT_HOUR, 0),
    }
}

/// "thursday", "thu", "thurs"
pub fn thursday() -> Pattern {
    pattern! {
        name: "thursday",
        category: Category::Weekday,
        matcher: r"\b(thursday|thu|thurs)\b",
        eval: |_caps, now| at_time(next_weekday(now, Weekday::Thu), DEFAULT_HOUR, 0),
    }
}

/// "friday", "fri"
pub fn friday() -> Pattern {
    pattern! {
        name: "friday",
        category: Category::Weekday,
        matcher: r"\b(friday|fri)\b",
        eval: |_caps, now| at_time(next_weekday(now, Weekday::Fri), DEFAULT_HOUR, 0),
    }
}

/// "saturday", "sat"
pub fn saturday() -> Pattern {
    pattern! {
        name: "saturday",
        category: Category::Weekday,
        matcher: r"\b(saturday|sat)\b",
        eval: |_caps, now| at_time(next_weekday(now, Weekday::Sat), DEFAULT_HOUR, 0),
    }
}

/// "sunday", "sun"
pub fn sunday() -> Pattern {
    pattern! {
        name: "sunday",
        category: Category::Weekday,
        matcher: r"\b(sunday|sun)\b",
        eval: |_caps, now| at_time(next_weekday(now, Weekday::Sun), DEFAULT_HOUR, 0),
    }
}
