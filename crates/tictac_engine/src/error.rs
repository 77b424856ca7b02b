//! Parse errors for textual engine inputs.

use derive_more::{Display, Error};

/// Failed to parse a value of the named kind from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid {}: {:?}", kind, input)]
pub struct ParseError {
    /// What was being parsed (e.g. "position", "difficulty").
    pub kind: &'static str,
    /// The rejected input.
    pub input: String,
}

impl ParseError {
    /// Creates a new parse error.
    pub fn new(kind: &'static str, input: impl Into<String>) -> Self {
        Self {
            kind,
            input: input.into(),
        }
    }
}
