//! The ordered pattern table.
//!
//! Rows are scanned top to bottom and the first textual hit that evaluates
//! to a real instant wins, so the order below is part of the observable
//! behavior, not an implementation detail:
//!
//! ```text
//!  1-4   relative offsets      "in 30 minutes" / hours / days / weeks
//!  5     clock time            "at 3:30pm" (minutes required)
//!  6     tomorrow              "tomorrow", "tmrw"
//!  7     weekday compound      "monday at 3pm" (minutes optional)
//!  8-14  bare weekdays         "monday" .. "sunday", word-bounded
//!  15    slash date            "1/15/2024"
//!  16    ISO date              "2024-12-25"
//!  17    immediate             "now", "immediately", "asap"
//!  18    evening               "this evening", "tonight"
//!  19    morning               "this morning"
//!  20    afternoon             "this afternoon"
//!  21    next week
//!  22    next month
//! ```
//!
//! Specific shapes sit above broad ones so that a broad row cannot swallow
//! input carrying a more specific sub-phrase. Two swallows run the other
//! way and are kept deliberately: "tomorrow" (6) fires inside
//! "tomorrow at 3pm" and discards the minuteless time tail, and the clock
//! row (5) fires inside "monday at 9:30am", so the weekday prefix only
//! matters when the time carries no minutes. The scan itself lives in
//! `crate::matcher`.

#[path = "patterns/helpers.rs"]
pub(crate) mod helpers;

#[path = "patterns/clock.rs"]
mod clock;
#[path = "patterns/dates.rs"]
mod dates;
#[path = "patterns/days.rs"]
mod days;
#[path = "patterns/keywords.rs"]
mod keywords;
#[path = "patterns/relative.rs"]
mod relative;

use once_cell::sync::Lazy;

use crate::Pattern;

static TABLE: Lazy<Vec<Pattern>> = Lazy::new(get);

/// All patterns, in scan order.
pub(crate) fn table() -> &'static [Pattern] {
    &TABLE
}

fn get() -> Vec<Pattern> {
    vec![
        relative::offset_minutes(),
        relative::offset_hours(),
        relative::offset_days(),
        relative::offset_weeks(),
        clock::clock_time(),
        days::tomorrow(),
        days::weekday_at_time(),
        days::monday(),
        days::tuesday(),
        days::wednesday(),
        days::thursday(),
        days::friday(),
        days::saturday(),
        days::sunday(),
        dates::slash_date(),
        dates::iso_date(),
        keywords::immediate(),
        keywords::evening(),
        keywords::morning(),
        keywords::afternoon(),
        keywords::next_week(),
        keywords::next_month(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_order_is_fixed() {
        let names: Vec<&str> = table().iter().map(|p| p.name).collect();
        assert_eq!(names, vec![
            "in <n> minutes",
            "in <n> hours",
            "in <n> days",
            "in <n> weeks",
            "at <hh:mm>",
            "tomorrow",
            "<weekday> at <time>",
            "monday",
            "tuesday",
            "wednesday",
            "thursday",
            "friday",
            "saturday",
            "sunday",
            "<m>/<d>/<yyyy>",
            "<yyyy>-<mm>-<dd>",
            "now",
            "this evening",
            "this morning",
            "this afternoon",
            "next week",
            "next month",
        ]);
    }

    #[test]
    fn every_row_matches_its_own_example() {
        let examples = vec![
            "in 30 minutes",
            "in 2 hours",
            "in 3 days",
            "in 1 week",
            "at 3:30pm",
            "tomorrow",
            "monday at 3pm",
            "monday",
            "tuesday",
            "wednesday",
            "thursday",
            "friday",
            "saturday",
            "sunday",
            "1/15/2024",
            "2024-12-25",
            "now",
            "tonight",
            "this morning",
            "this afternoon",
            "next week",
            "next month",
        ];
        for (pattern, example) in table().iter().zip(examples) {
            assert!(pattern.matcher.is_match(example), "{} vs {example:?}", pattern.name);
        }
    }
}
