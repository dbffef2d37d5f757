//! First-match scan over the pattern table.
//!
//! Matching is deliberately naive: rows are tried strictly in table order
//! against the normalized input, substrings count, and the first row whose
//! match also evaluates to a real calendar instant wins. Order in
//! `patterns::get` is therefore load-bearing; see the test there.

use chrono::NaiveDateTime;

use crate::patterns;
use crate::Category;

/// A pattern hit evaluated to a concrete instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Resolution {
    pub datetime: NaiveDateTime,
    pub category: Category,
    /// Name of the winning pattern, for diagnostics.
    pub pattern: &'static str,
}

/// Lower-cased, trimmed input; what every matcher row sees.
pub(crate) fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Scan the table in order and evaluate the first textual hit. A row whose
/// evaluation comes up empty (February 31, hour 25) is skipped and the scan
/// continues; inputs missing the table entirely get one shot at the literal
/// datetime fallback.
pub(crate) fn resolve(input: &str, now: NaiveDateTime) -> Option<Resolution> {
    for pattern in patterns::table() {
        let Some(caps) = pattern.matcher.captures(input) else {
            continue;
        };
        match (pattern.evaluate)(&caps, now) {
            Some(datetime) => {
                return Some(Resolution { datetime, category: pattern.category, pattern: pattern.name });
            }
            None => {
                tracing::debug!(pattern = pattern.name, "match discarded, no calendar instant");
            }
        }
    }
    datetime_literal(input, now)
}

/// Literal "YYYY-M-D H:MM" fallback, accepted only when strictly future.
///
/// Zero-padded literals never reach this point: the ISO date row matches
/// their date prefix first (and pins the time to 09:00), so the fallback
/// fires only for unpadded dates like "2024-3-5 09:30".
fn datetime_literal(input: &str, now: NaiveDateTime) -> Option<Resolution> {
    let datetime = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M").ok()?;
    if datetime <= now {
        tracing::debug!(%datetime, "datetime literal rejected, not in the future");
        return None;
    }
    Some(Resolution { datetime, category: Category::DateTimeLiteral, pattern: "datetime literal" })
}
