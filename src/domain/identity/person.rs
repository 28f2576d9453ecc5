//! People as the vision and user subsystems report them.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

/// Name the recognizer reports for a face it could not match.
pub const UNKNOWN_PERSON: &str = "unknown";

/// Face embedding produced by the recognizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FaceDescriptor(Vec<f32>);

impl FaceDescriptor {
    pub fn new(values: Vec<f32>) -> Self {
        Self(values)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Most recent face-recognition output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectedPerson {
    pub name: Option<String>,
    pub face: Option<FaceDescriptor>,
}

impl DetectedPerson {
    /// A recognized person with a face descriptor.
    pub fn recognized(name: impl Into<String>, face: FaceDescriptor) -> Self {
        Self {
            name: Some(name.into()),
            face: Some(face),
        }
    }

    /// A sighting carrying only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            face: None,
        }
    }

    /// The usable identity, if any.
    ///
    /// Blank names and the recognizer's "unknown" sentinel (any case) yield `None`.
    pub fn best_match(&self) -> Option<&str> {
        let name = self.name.as_deref()?.trim();
        if name.is_empty() || name.eq_ignore_ascii_case(UNKNOWN_PERSON) {
            None
        } else {
            Some(name)
        }
    }

    /// Returns true if a usable face descriptor was captured.
    pub fn has_face(&self) -> bool {
        self.face.as_ref().is_some_and(|f| !f.is_empty())
    }
}

/// A registered user.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub created_at: Option<Timestamp>,
}

impl UserRecord {
    /// Creates a record with name and email set.
    pub fn new(full_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            full_name: Some(full_name.into()),
            email: Some(email.into()),
            created_at: None,
        }
    }

    pub fn with_created_at(mut self, created_at: Timestamp) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Non-blank full name.
    pub fn display_name(&self) -> Option<&str> {
        self.full_name.as_deref().map(str::trim).filter(|n| !n.is_empty())
    }

    /// Returns true if the full name equals `name`, ignoring case.
    pub fn is_named(&self, name: &str) -> bool {
        self.display_name()
            .is_some_and(|full| full.to_lowercase() == name.trim().to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_sentinel_is_not_a_match() {
        assert_eq!(DetectedPerson::named("unknown").best_match(), None);
        assert_eq!(DetectedPerson::named("Unknown").best_match(), None);
        assert_eq!(DetectedPerson::named("  ").best_match(), None);
        assert_eq!(DetectedPerson::default().best_match(), None);
        assert_eq!(DetectedPerson::named("Alice").best_match(), Some("Alice"));
    }

    #[test]
    fn face_presence() {
        assert!(!DetectedPerson::named("Alice").has_face());
        assert!(!DetectedPerson::recognized("Alice", FaceDescriptor::new(vec![])).has_face());
        assert!(DetectedPerson::recognized("Alice", FaceDescriptor::new(vec![0.1, 0.2])).has_face());
    }

    #[test]
    fn name_comparison_ignores_case() {
        let user = UserRecord::new("Alice Smith", "alice@example.com");
        assert!(user.is_named("alice smith"));
        assert!(user.is_named("ALICE SMITH "));
        assert!(!user.is_named("alice"));

        let accented = UserRecord::new("ÉLODIE", "elodie@example.com");
        assert!(accented.is_named("élodie"));
    }

    #[test]
    fn blank_full_name_has_no_display_name() {
        let mut user = UserRecord::new("", "x@example.com");
        assert_eq!(user.display_name(), None);
        user.full_name = None;
        assert!(!user.is_named(""));
    }
}
