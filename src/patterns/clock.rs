//! Explicit clock times: "at 3:30pm", "at 17:45".

use crate::patterns::helpers::{at_time, group_int, group_str, hour_in_24, roll_to_next_day};
use crate::{Category, Pattern};

/// "at 3:30pm", "at 9:00", "at 17:45". Today at that time, or tomorrow once
/// it has passed. Minutes are required; minuteless times like "at 3pm" are
/// left for the weekday compound and keyword rows.
pub fn clock_time() -> Pattern {
    pattern! {
        name: "at <hh:mm>",
        category: Category::ClockTime,
        matcher: r"at (\d{1,2}):(\d{2})\s*(am|pm)?",
        eval: |caps, now| {
            let hour = hour_in_24(group_int(caps, 1)?, group_str(caps, 3))?;
            let minute = group_int(caps, 2)?;
            if minute > 59 {
                return None;
            }
            roll_to_next_day(at_time(now.date(), hour, minute as u32)?, now)
        },
    }
}
