use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::ParseError;
use crate::{format, matcher};

/// Parsing context.
///
/// Holds the reference instant ("now") that relative phrases and rollover
/// decisions are computed against. Nothing in the crate reads a clock; all
/// time enters through here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Context {
    /// Reference instant used to resolve relative expressions.
    pub reference_time: NaiveDateTime,
}

impl Default for Context {
    fn default() -> Self {
        if cfg!(test) {
            let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
            let time = NaiveTime::from_hms_opt(10, 0, 0).unwrap();
            Self { reference_time: NaiveDateTime::new(date, time) }
        } else {
            Self { reference_time: Local::now().naive_local() }
        }
    }
}

/// Result from [`parse`] and [`parse_with`].
///
/// Exactly one of two shapes holds: success with a datetime and no error, or
/// failure with an error, no datetime, and confidence `0.0`. The constructors
/// below are the only construction sites.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult {
    /// Whether a schedulable instant was produced.
    pub success: bool,
    /// The resolved instant; present iff `success`.
    pub datetime: Option<NaiveDateTime>,
    /// Fixed per-category confidence in `[0.0, 1.0]`; `0.0` iff `!success`.
    pub confidence: f64,
    /// Human-readable restatement of the resolved instant.
    pub interpretation: String,
    /// Failure text; present iff `!success`.
    pub error: Option<String>,
}

impl ParseResult {
    pub(crate) fn resolved(datetime: NaiveDateTime, confidence: f64, interpretation: String) -> Self {
        ParseResult { success: true, datetime: Some(datetime), confidence, interpretation, error: None }
    }

    pub(crate) fn failure(error: ParseError) -> Self {
        ParseResult {
            success: false,
            datetime: None,
            confidence: 0.0,
            interpretation: "Unable to parse".to_string(),
            error: Some(error.to_string()),
        }
    }
}

/// Interpret `input` against a default [`Context`].
///
/// # Example
/// ```
/// use saywhen::parse;
///
/// let out = parse("in 2 hours");
/// assert!(out.success);
/// assert_eq!(out.confidence, 0.85);
/// ```
pub fn parse(input: &str) -> ParseResult {
    parse_with(input, &Context::default())
}

/// Interpret `input` against the provided `context`.
///
/// Use this to supply the reference instant explicitly; identical
/// `(input, reference_time)` pairs always produce identical results.
pub fn parse_with(input: &str, context: &Context) -> ParseResult {
    let normalized = matcher::normalize(input);
    let now = context.reference_time;
    match matcher::resolve(&normalized, now) {
        Some(hit) => {
            tracing::debug!(
                input = %normalized,
                pattern = hit.pattern,
                datetime = %hit.datetime,
                "schedule parsed"
            );
            let interpretation = format::describe(hit.datetime, now);
            ParseResult::resolved(hit.datetime, hit.category.confidence(), interpretation)
        }
        None => {
            tracing::debug!(input = %normalized, "no pattern matched");
            ParseResult::failure(ParseError::Unrecognized)
        }
    }
}
