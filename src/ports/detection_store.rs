//! Detection store port.
//!
//! Read access to what the face-recognition subsystem last produced.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::identity::DetectedPerson;

/// Port for reading face-recognition output.
#[async_trait]
pub trait DetectionStore: Send + Sync {
    /// Returns the most recent detection, if any was recorded.
    async fn last_detected_person(&self) -> Result<Option<DetectedPerson>, DomainError>;

    /// Returns the textual outcome of the last detection run.
    async fn last_person_detection_result(&self) -> Result<Option<String>, DomainError>;
}
