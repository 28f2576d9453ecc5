//! Utterance value object.

use std::fmt;

/// A user utterance, normalized for substring matching.
///
/// Normalization trims surrounding whitespace and lower-cases the text.
/// The raw text is kept because the conversational responder receives
/// the message exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    raw: String,
    normalized: String,
}

impl Utterance {
    /// Creates an utterance from raw user input.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let normalized = normalize(&raw);
        Self { raw, normalized }
    }

    /// Returns the text as the user typed it.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Returns the trimmed, lower-cased text.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Returns true if the normalized text contains `phrase`.
    pub fn contains(&self, phrase: &str) -> bool {
        self.normalized.contains(phrase)
    }
}

impl fmt::Display for Utterance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Trims and lower-cases free text.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}
