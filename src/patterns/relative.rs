//! Relative offsets from the reference instant: "in 20 minutes", "in 2 hours".

use chrono::Duration;

use crate::patterns::helpers::group_int;
use crate::{Category, Pattern};

/// "in 30 minutes", "in 5 min"
pub fn offset_minutes() -> Pattern {
    pattern! {
        name: "in <n> minutes",
        category: Category::RelativeOffset,
        matcher: r"in (\d+) (minute|minutes|min|mins)",
        eval: |caps, now| now.checked_add_signed(Duration::try_minutes(group_int(caps, 1)?)?),
    }
}

/// "in 2 hours", "in 1 hr"
pub fn offset_hours() -> Pattern {
    pattern! {
        name: "in <n> hours",
        category: Category::RelativeOffset,
        matcher: r"in (\d+) (hour|hours|hr|hrs)",
        eval: |caps, now| now.checked_add_signed(Duration::try_hours(group_int(caps, 1)?)?),
    }
}

/// "in 3 days"
pub fn offset_days() -> Pattern {
    pattern! {
        name: "in <n> days",
        category: Category::RelativeOffset,
        matcher: r"in (\d+) (day|days)",
        eval: |caps, now| now.checked_add_signed(Duration::try_days(group_int(caps, 1)?)?),
    }
}

/// "in 2 weeks"
pub fn offset_weeks() -> Pattern {
    pattern! {
        name: "in <n> weeks",
        category: Category::RelativeOffset,
        matcher: r"in (\d+) (week|weeks)",
        eval: |caps, now| now.checked_add_signed(Duration::try_weeks(group_int(caps, 1)?)?),
    }
}
