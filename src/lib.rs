extern crate self as saywhen;

use chrono::NaiveDateTime;
use regex::Regex;

#[macro_use]
mod macros;
mod api;
mod error;
mod format;
mod matcher;
mod patterns;
mod suggest;
mod validate;
pub mod wire;

pub use api::{Context, ParseResult, parse, parse_with};
pub use error::ParseError;
pub use suggest::{Example, examples, suggestions};
pub use validate::{Validity, validate};

// --- Core types -------------------------------------------------------------

/// Pattern categories. The category alone fixes the confidence score of a
/// successful parse; match quality plays no part (see `Category::confidence`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Category {
    RelativeOffset,
    ClockTime,
    Tomorrow,
    Weekday,
    SlashDate,
    IsoDate,
    Immediate,
    Evening,
    Morning,
    Afternoon,
    NextWeek,
    NextMonth,
    DateTimeLiteral,
}

impl Category {
    /// Fixed confidence for instants resolved through this category.
    pub fn confidence(self) -> f64 {
        match self {
            Category::IsoDate => 0.95,
            Category::ClockTime => 0.90,
            Category::RelativeOffset => 0.85,
            Category::Weekday => 0.80,
            Category::Tomorrow | Category::Evening => 0.75,
            Category::DateTimeLiteral => 0.70,
            Category::SlashDate
            | Category::Immediate
            | Category::Morning
            | Category::Afternoon
            | Category::NextWeek
            | Category::NextMonth => 0.60,
        }
    }
}

pub(crate) type Eval = fn(&regex::Captures<'_>, NaiveDateTime) -> Option<NaiveDateTime>;

/// One recognized temporal expression shape: a diagnostic `name`, the
/// `category` it scores under, an unanchored `matcher` regex (stored as a
/// static reference created via the `regex!` macro in `src/macros.rs`), and a
/// pure `evaluate` function turning the textual match plus the reference time
/// into a candidate instant.
///
/// `evaluate` returns `None` when the matched text does not denote a real
/// calendar instant (hour 25, February 31); the scan then moves on to the
/// next pattern in the table.
pub(crate) struct Pattern {
    pub name: &'static str,
    pub category: Category,
    pub matcher: &'static Regex,
    pub evaluate: Eval,
}

impl std::fmt::Debug for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pattern")
            .field("name", &self.name)
            .field("category", &self.category)
            .field("matcher", &self.matcher.as_str())
            .field("evaluate", &"<function>")
            .finish()
    }
}
