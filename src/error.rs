use thiserror::Error;

/// Failures surfaced to callers. The display strings are the exact texts the
/// scheduling UI shows, so they are part of the interface.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// No pattern matched the normalized input and the literal fallback
    /// produced nothing usable.
    #[error(
        "Could not parse the schedule time. Try formats like \"tomorrow at 3pm\", \"in 2 hours\", or \"monday at 9:30am\""
    )]
    Unrecognized,
    /// The request carried no input text.
    #[error("Input text is required")]
    EmptyInput,
}
