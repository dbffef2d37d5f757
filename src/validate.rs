//! Scheduling window check, independent of parsing.

use chrono::NaiveDateTime;

use crate::patterns::helpers::months_after;

/// Whether an instant is an admissible schedule target. Never stored;
/// always recomputed from the instant and the caller's "now".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validity {
    pub valid: bool,
    /// Set iff `!valid`; the exact text the scheduling UI shows.
    pub reason: Option<String>,
}

impl Validity {
    fn ok() -> Self {
        Validity { valid: true, reason: None }
    }

    fn rejected(reason: &str) -> Self {
        Validity { valid: false, reason: Some(reason.to_string()) }
    }
}

/// Check `instant` against the window `(now, now + 1 year]`. The upper bound
/// is a calendar year (month arithmetic with day clamping), and the bound
/// itself is still admissible.
///
/// Parsing and validation are separate on purpose: an explicit past date
/// parses successfully and fails here.
pub fn validate(instant: NaiveDateTime, now: NaiveDateTime) -> Validity {
    if instant <= now {
        tracing::debug!(%instant, "schedule rejected, not in the future");
        return Validity::rejected("Schedule time must be in the future");
    }
    if instant > months_after(now, 12) {
        tracing::debug!(%instant, "schedule rejected, more than a year out");
        return Validity::rejected("Schedule time cannot be more than 1 year in the future");
    }
    Validity::ok()
}
