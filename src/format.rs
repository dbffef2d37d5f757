//! Human-readable restatement of a resolved instant.

use chrono::NaiveDateTime;

/// Render `instant` relative to `now`, coarsest sufficient unit first:
/// minutes under an hour, hours under a day, "Tomorrow at" for the
/// 24-48h band, and a dated long form beyond that.
pub(crate) fn describe(instant: NaiveDateTime, now: NaiveDateTime) -> String {
    let diff = instant - now;
    let clock = instant.format("%-I:%M %p");
    if diff.num_minutes() < 60 {
        format!("In {} minutes ({})", diff.num_minutes(), clock)
    } else if diff.num_hours() < 24 {
        format!("In {} hours ({})", diff.num_hours(), clock)
    } else if diff.num_days() == 1 {
        format!("Tomorrow at {}", clock)
    } else {
        format!("{} at {}", instant.format("%A, %b %-d"), clock)
    }
}
