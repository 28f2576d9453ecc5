//! Rule file format and pattern matching for the pattern responder.
//!
//! A rule file is YAML:
//!
//! ```yaml
//! categories:
//!   - pattern: "TAKE OFF"
//!     template: "Taking off!"
//!     set:
//!       direction: take off
//!   - pattern: "FLY *"
//!     template: "Flying {star}."
//!     set:
//!       direction: "{star}"
//! ```
//!
//! Patterns are upper-case words; `*` and `_` each match one or more input
//! words. Input is normalized to upper-case words with punctuation removed.
//! Categories are tried in file order.

use serde::Deserialize;
use std::collections::HashMap;

/// Placeholder replaced by the first wildcard capture.
pub const STAR_PLACEHOLDER: &str = "{star}";

/// Top-level rule file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuleSet {
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// One pattern/template pair.
#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub pattern: String,
    #[serde(default)]
    pub template: String,
    /// Predicates assigned when the category fires.
    #[serde(default)]
    pub set: HashMap<String, String>,
}

impl Category {
    /// Matches normalized input words, returning wildcard captures on success.
    pub fn matches(&self, input: &[String]) -> Option<Vec<String>> {
        let pattern: Vec<String> = normalize_words(&self.pattern);
        let mut stars = Vec::new();
        if match_words(&pattern, input, &mut stars) {
            Some(stars)
        } else {
            None
        }
    }

    /// Expands the template with the captured wildcards.
    pub fn render(&self, stars: &[String]) -> String {
        expand(&self.template, stars)
    }

    /// Predicate assignments with wildcards expanded.
    pub fn assignments<'a>(&'a self, stars: &'a [String]) -> impl Iterator<Item = (&'a str, String)> + 'a {
        self.set
            .iter()
            .map(move |(name, value)| (name.as_str(), expand(value, stars)))
    }
}

/// Upper-cases and splits text into words, dropping punctuation other than
/// wildcards and apostrophes.
pub fn normalize_words(text: &str) -> Vec<String> {
    text.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '*' || c == '_' || c == '\'' {
                c
            } else {
                ' '
            }
        })
        .collect::<String>()
        .to_uppercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

fn expand(text: &str, stars: &[String]) -> String {
    let star = stars.first().map(String::as_str).unwrap_or_default();
    text.replace(STAR_PLACEHOLDER, star).trim().to_string()
}

fn is_wildcard(word: &str) -> bool {
    word == "*" || word == "_"
}

fn match_words(pattern: &[String], input: &[String], stars: &mut Vec<String>) -> bool {
    let mut dead_ends = vec![false; (pattern.len() + 1) * (input.len() + 1)];
    match_from(pattern, input, 0, 0, stars, &mut dead_ends)
}

/// Matches `pattern[p..]` against `input[i..]`, remembering positions that
/// cannot match so each pair is explored once.
fn match_from(
    pattern: &[String],
    input: &[String],
    p: usize,
    i: usize,
    stars: &mut Vec<String>,
    dead_ends: &mut [bool],
) -> bool {
    let key = p * (input.len() + 1) + i;
    if dead_ends[key] {
        return false;
    }

    let matched = match pattern.get(p) {
        None => i == input.len(),
        Some(head) if is_wildcard(head) => {
            // Shortest capture first; a wildcard consumes at least one word.
            let mut found = false;
            for end in i + 1..=input.len() {
                let mark = stars.len();
                stars.push(input[i..end].join(" ").to_lowercase());
                if match_from(pattern, input, p + 1, end, stars, dead_ends) {
                    found = true;
                    break;
                }
                stars.truncate(mark);
            }
            found
        }
        Some(head) => {
            input.get(i).is_some_and(|word| word == head)
                && match_from(pattern, input, p + 1, i + 1, stars, dead_ends)
        }
    };

    if !matched {
        dead_ends[key] = true;
    }
    matched
}
