//! Serialization types and assembly for the HTTP boundary.
//!
//! The crate does not serve HTTP itself; the surrounding service does. These
//! are the shapes it exchanges, and [`respond`] folds parse and validation
//! outcomes into the single response shape the endpoint returns. Internally
//! `ParseResult` and `Validity` stay distinct; only the boundary unifies
//! them.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::{Context, Example, examples, parse_with, suggestions, validate};

/// Body of a parse request.
#[derive(Debug, Clone, Deserialize)]
pub struct ParseRequest {
    pub input: String,
}

/// Unified response: success fields or failure fields, never both.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseResponse {
    pub success: bool,
    /// ISO-8601 UTC instant, present on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datetime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpretation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Retry hints, present on parse and validation failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
}

impl ParseResponse {
    fn failure(error: String, with_suggestions: bool) -> Self {
        ParseResponse {
            success: false,
            datetime: None,
            interpretation: None,
            confidence: None,
            error: Some(error),
            suggestions: with_suggestions
                .then(|| suggestions().iter().map(|s| s.to_string()).collect()),
        }
    }
}

/// The read-only companion payload: suggestions plus described examples.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<&'static str>,
    pub examples: Vec<Example>,
}

/// Assemble the response for one request against `context`.
///
/// A parsed instant is still checked against the scheduling window, and a
/// validation failure surfaces through the same failure shape as a parse
/// failure, with the validity reason as the error.
pub fn respond(request: &ParseRequest, context: &Context) -> ParseResponse {
    if request.input.trim().is_empty() {
        return ParseResponse::failure(ParseError::EmptyInput.to_string(), false);
    }
    let result = parse_with(&request.input, context);
    let Some(datetime) = result.datetime else {
        let error = result.error.unwrap_or_else(|| ParseError::Unrecognized.to_string());
        return ParseResponse::failure(error, true);
    };
    let validity = validate(datetime, context.reference_time);
    if let Some(reason) = validity.reason {
        return ParseResponse::failure(reason, true);
    }
    ParseResponse {
        success: true,
        datetime: Some(format_utc(datetime)),
        interpretation: Some(result.interpretation),
        confidence: Some(result.confidence),
        error: None,
        suggestions: None,
    }
}

/// Build the read-only payload.
pub fn suggestions_payload() -> SuggestionsResponse {
    SuggestionsResponse { suggestions: suggestions().to_vec(), examples: examples().to_vec() }
}

/// "2024-01-15T12:00:00Z" rendering of a naive instant.
fn format_utc(datetime: NaiveDateTime) -> String {
    datetime.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
