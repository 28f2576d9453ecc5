//! Conversational responder adapters.

mod pattern;
mod rules;

pub use pattern::PatternResponder;
pub use rules::{normalize_words, Category, RuleSet, STAR_PLACEHOLDER};
