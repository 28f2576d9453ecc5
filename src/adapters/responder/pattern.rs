//! Pattern-matching conversational responder.
//!
//! Implements both the responder and the predicate side channel, the way
//! an AIML kernel does: a matching category produces the reply and may set
//! predicates such as `direction`, which the conversation engine reads back.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use tokio::sync::RwLock;

use super::rules::{normalize_words, RuleSet};
use crate::ports::{ConversationalResponder, PredicateStore, ResponderError};

/// Rule-file driven responder.
#[derive(Debug, Default)]
pub struct PatternResponder {
    rules: RuleSet,
    predicates: RwLock<HashMap<String, String>>,
}

impl PatternResponder {
    /// Creates a responder over an already parsed rule set.
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules,
            predicates: RwLock::new(HashMap::new()),
        }
    }

    /// A responder with no categories; it never replies.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses a YAML rule document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ResponderError> {
        let rules: RuleSet =
            serde_yaml::from_str(yaml).map_err(|e| ResponderError::Rules(e.to_string()))?;
        Ok(Self::new(rules))
    }

    /// Loads a YAML rule file from disk.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, ResponderError> {
        let path = path.as_ref();
        let yaml = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ResponderError::Rules(format!("{}: {}", path.display(), e)))?;
        let responder = Self::from_yaml_str(&yaml)?;
        tracing::info!(
            path = %path.display(),
            categories = responder.category_count(),
            "loaded responder rules"
        );
        Ok(responder)
    }

    /// Number of loaded categories.
    pub fn category_count(&self) -> usize {
        self.rules.categories.len()
    }
}

#[async_trait]
impl ConversationalResponder for PatternResponder {
    async fn respond(&self, utterance: &str) -> Result<Option<String>, ResponderError> {
        let input = normalize_words(utterance);
        if input.is_empty() {
            return Ok(None);
        }

        for category in &self.rules.categories {
            if let Some(stars) = category.matches(&input) {
                if !category.set.is_empty() {
                    let mut predicates = self.predicates.write().await;
                    for (name, value) in category.assignments(&stars) {
                        predicates.insert(name.to_string(), value);
                    }
                }
                let reply = category.render(&stars);
                return Ok(if reply.is_empty() { None } else { Some(reply) });
            }
        }

        Ok(None)
    }
}

#[async_trait]
impl PredicateStore for PatternResponder {
    async fn predicate(&self, name: &str) -> Option<String> {
        self.predicates.read().await.get(name).cloned()
    }

    async fn set_predicate(&self, name: &str, value: &str) {
        self.predicates
            .write()
            .await
            .insert(name.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::DIRECTION_PREDICATE;
    use std::io::Write;

    const RULES: &str = r#"
categories:
  - pattern: "HELLO"
    template: "Hi there!"
  - pattern: "TAKE OFF"
    template: "Taking off!"
    set:
      direction: take off
  - pattern: "SILENT *"
    template: ""
    set:
      direction: land
"#;

    #[tokio::test]
    async fn replies_from_matching_category() {
        let responder = PatternResponder::from_yaml_str(RULES).unwrap();
        let reply = responder.respond("Hello!").await.unwrap();
        assert_eq!(reply.as_deref(), Some("Hi there!"));
        assert_eq!(responder.predicate(DIRECTION_PREDICATE).await, None);
    }

    #[tokio::test]
    async fn matching_category_sets_direction() {
        let responder = PatternResponder::from_yaml_str(RULES).unwrap();
        let reply = responder.respond("take off").await.unwrap();
        assert_eq!(reply.as_deref(), Some("Taking off!"));
        assert_eq!(
            responder.predicate(DIRECTION_PREDICATE).await.as_deref(),
            Some("take off")
        );
    }

    #[tokio::test]
    async fn empty_template_is_no_reply_but_still_sets_predicates() {
        let responder = PatternResponder::from_yaml_str(RULES).unwrap();
        assert_eq!(responder.respond("silent please").await.unwrap(), None);
        assert_eq!(
            responder.predicate(DIRECTION_PREDICATE).await.as_deref(),
            Some("land")
        );
    }

    #[tokio::test]
    async fn unmatched_input_has_no_reply() {
        let responder = PatternResponder::from_yaml_str(RULES).unwrap();
        assert_eq!(responder.respond("asdkjf").await.unwrap(), None);
        assert_eq!(responder.respond("   ").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_predicate_overwrites() {
        let responder = PatternResponder::empty();
        responder.set_predicate(DIRECTION_PREDICATE, "flip").await;
        responder.set_predicate(DIRECTION_PREDICATE, "none").await;
        assert_eq!(
            responder.predicate(DIRECTION_PREDICATE).await.as_deref(),
            Some("none")
        );
    }

    #[tokio::test]
    async fn loads_rules_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(RULES.as_bytes()).unwrap();

        let responder = PatternResponder::from_path(file.path()).await.unwrap();
        assert_eq!(responder.category_count(), 3);
    }

    #[tokio::test]
    async fn invalid_yaml_is_a_rules_error() {
        let result = PatternResponder::from_yaml_str("categories: [ {pattern: ");
        assert!(matches!(result, Err(ResponderError::Rules(_))));
    }

    #[tokio::test]
    async fn missing_file_is_a_rules_error() {
        let result = PatternResponder::from_path("/nonexistent/eaglewings-rules.yaml").await;
        assert!(matches!(result, Err(ResponderError::Rules(_))));
    }
}
