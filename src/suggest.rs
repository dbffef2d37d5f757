//! Static suggestion phrases and example pairs for UX hinting. Pure data.

use serde::Serialize;

/// An example phrase with its plain-English description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Example {
    pub input: &'static str,
    pub description: &'static str,
}

const SUGGESTIONS: [&str; 8] = [
    "in 30 minutes",
    "in 2 hours",
    "tomorrow at 9am",
    "monday at 3pm",
    "this evening",
    "next week",
    "friday at 5:30pm",
    "2024-12-25 10:00",
];

const EXAMPLES: [Example; 5] = [
    Example { input: "tomorrow at 3pm", description: "Schedule for tomorrow at 3 PM" },
    Example { input: "in 2 hours", description: "Schedule for 2 hours from now" },
    Example { input: "monday at 9:30am", description: "Schedule for next Monday at 9:30 AM" },
    Example { input: "this evening", description: "Schedule for this evening (7 PM)" },
    Example { input: "next week", description: "Schedule for next week (Monday 9 AM)" },
];

/// Phrases offered to users after a failed parse.
pub fn suggestions() -> &'static [&'static str] {
    &SUGGESTIONS
}

/// Phrase/description pairs for the read-only examples payload.
pub fn examples() -> &'static [Example] {
    &EXAMPLES
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Context, parse_with};

    #[test]
    fn every_suggestion_parses() {
        let ctx = Context::default();
        for suggestion in suggestions() {
            assert!(parse_with(suggestion, &ctx).success, "{suggestion}");
        }
    }

    #[test]
    fn every_example_parses() {
        let ctx = Context::default();
        for example in examples() {
            assert!(parse_with(example.input, &ctx).success, "{}", example.input);
        }
    }
}
