//! Explicit calendar dates: "1/15/2024", "2024-12-25". Both resolve at
//! 09:00 and never roll; past dates parse fine and are left to validation.

use chrono::NaiveDate;

use crate::patterns::helpers::{DEFAULT_HOUR, at_time, group_int};
use crate::{Category, Pattern};

/// "1/15/2024" (month/day/year)
pub fn slash_date() -> Pattern {
    pattern! {
        name: "<m>/<d>/<yyyy>",
        category: Category::SlashDate,
        matcher: r"(\d{1,2})/(\d{1,2})/(\d{4})",
        eval: |caps, _now| {
            let month = group_int(caps, 1)? as u32;
            let day = group_int(caps, 2)? as u32;
            let year = group_int(caps, 3)? as i32;
            at_time(NaiveDate::from_ymd_opt(year, month, day)?, DEFAULT_HOUR, 0)
        },
    }
}

/// "2024-12-25"
pub fn iso_date() -> Pattern {
    pattern! {
        name: "<yyyy>-<mm>-<dd>",
        category: Category::IsoDate,
        matcher: r"(\d{4})-(\d{2})-(\d{2})",
        eval: |caps, _now| {
            let year = group_int(caps, 1)? as i32;
            let month = group_int(caps, 2)? as u32;
            let day = group_int(caps, 3)? as u32;
            at_time(NaiveDate::from_ymd_opt(year, month, day)?, DEFAULT_HOUR, 0)
        },
    }
}
