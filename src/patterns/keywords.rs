//! Keyword shapes: "now", parts of day, "next week", "next month".

use chrono::{Datelike, Duration, NaiveDate};

use crate::patterns::helpers::{DEFAULT_HOUR, at_time, roll_to_next_day};
use crate::{Category, Pattern};

/// "now", "immediately", "asap": the reference instant itself. Note the
/// validator rejects it, since a schedule must be strictly future.
pub fn immediate() -> Pattern {
    pattern! {
        name: "now",
        category: Category::Immediate,
        matcher: r"(now|immediately|asap)",
        eval: |_caps, now| Some(now),
    }
}

/// "this evening", "tonight": 19:00 today, or tomorrow once it has passed.
pub fn evening() -> Pattern {
    pattern! {
        name: "this evening",
        category: Category::Evening,
        matcher: r"(this evening|tonight)",
        eval: |_caps, now| roll_to_next_day(at_time(now.date(), 19, 0)?, now),
    }
}

/// "this morning": always tomorrow 08:00, never today. The phrase books
/// the next morning slot regardless of the hour it is uttered.
pub fn morning() -> Pattern {
    pattern! {
        name: "this morning",
        category: Category::Morning,
        matcher: r"(this morning)",
        eval: |_caps, now| at_time(now.date().succ_opt()?, 8, 0),
    }
}

/// "this afternoon": 14:00 today, or tomorrow once it has passed.
pub fn afternoon() -> Pattern {
    pattern! {
        name: "this afternoon",
        category: Category::Afternoon,
        matcher: r"(this afternoon)",
        eval: |_caps, now| roll_to_next_day(at_time(now.date(), 14, 0)?, now),
    }
}

/// "next week": seven days out at 09:00.
pub fn next_week() -> Pattern {
    pattern! {
        name: "next week",
        category: Category::NextWeek,
        matcher: r"(next week)",
        eval: |_caps, now| at_time(now.date().checked_add_signed(Duration::days(7))?, DEFAULT_HOUR, 0),
    }
}

/// "next month": first day of the following month at 09:00.
pub fn next_month() -> Pattern {
    pattern! {
        name: "next month",
        category: Category::NextMonth,
        matcher: r"(next month)",
        eval: |_caps, now| {
            let (year, month) = match now.date().month() {
                12 => (now.date().year() + 1, 1),
                month => (now.date().year(), month + 1),
            };
            at_time(NaiveDate::from_ymd_opt(year, month, 1)?, DEFAULT_HOUR, 0)
        },
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};

    use super::*;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(10, 0, 0).unwrap()
    }

    fn eval(pattern: &Pattern, input: &str, reference: NaiveDateTime) -> Option<NaiveDateTime> {
        let caps = pattern.matcher.captures(input)?;
        (pattern.evaluate)(&caps, reference)
    }

    fn jan(d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap().and_hms_opt(h, mi, 0).unwrap()
    }

    #[test]
    fn immediate_returns_the_reference() {
        for input in ["now", "immediately", "asap"] {
            assert_eq!(eval(&immediate(), input, now()), Some(now()), "{input}");
        }
    }

    #[test]
    fn evening_rolls_once_nineteen_hundred_has_passed() {
        assert_eq!(eval(&evening(), "this evening", now()), Some(jan(15, 19, 0)));
        assert_eq!(eval(&evening(), "tonight", now()), Some(jan(15, 19, 0)));
        let late = jan(15, 21, 30);
        assert_eq!(eval(&evening(), "tonight", late), Some(jan(16, 19, 0)));
    }

    #[test]
    fn morning_is_always_tomorrow() {
        // Even at 06:00, "this morning" schedules the next day.
        let early = jan(15, 6, 0);
        assert_eq!(eval(&morning(), "this morning", early), Some(jan(16, 8, 0)));
        assert_eq!(eval(&morning(), "this morning", now()), Some(jan(16, 8, 0)));
    }

    #[test]
    fn afternoon_rolls_once_fourteen_hundred_has_passed() {
        assert_eq!(eval(&afternoon(), "this afternoon", now()), Some(jan(15, 14, 0)));
        let late = jan(15, 16, 0);
        assert_eq!(eval(&afternoon(), "this afternoon", late), Some(jan(16, 14, 0)));
    }

    #[test]
    fn next_week_is_seven_days_at_nine() {
        assert_eq!(eval(&next_week(), "next week", now()), Some(jan(22, 9, 0)));
    }

    #[test]
    fn next_month_is_first_of_following_month() {
        assert_eq!(
            eval(&next_month(), "next month", now()),
            Some(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap().and_hms_opt(9, 0, 0).unwrap())
        );
        // January 31 may not overflow into March.
        let month_end = jan(31, 10, 0);
        assert_eq!(
            eval(&next_month(), "next month", month_end),
            Some(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap().and_hms_opt(9, 0, 0).unwrap())
        );
        // December wraps into January of the next year.
        let december = NaiveDate::from_ymd_opt(2024, 12, 10).unwrap().and_hms_opt(10, 0, 0).unwrap();
        assert_eq!(
            eval(&next_month(), "next month", december),
            Some(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap().and_hms_opt(9, 0, 0).unwrap())
        );
    }
}
