//! Intent enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What the user is asking for.
///
/// Every intent except `Fallback` is answered by the core itself;
/// `Fallback` is handed to the conversational responder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Is the drone link up?
    DroneStatus,
    /// Try to establish the drone link.
    DroneConnect,
    /// Who is in front of the camera, or who am I?
    PersonIdentity,
    /// More details about the person last seen.
    PersonFollowup,
    /// Report the most recent face-recognition result.
    PersonDetect,
    /// Launch the attack routine against the detected person.
    PersonAttack,
    /// Report the stored detection outcome.
    DetectionResult,
    /// Report the stored attack outcome.
    AttackResult,
    /// Nothing built-in matched.
    Fallback,
}

impl Intent {
    /// Returns the snake_case name of the intent.
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::DroneStatus => "drone_status",
            Intent::DroneConnect => "drone_connect",
            Intent::PersonIdentity => "person_identity",
            Intent::PersonFollowup => "person_followup",
            Intent::PersonDetect => "person_detect",
            Intent::PersonAttack => "person_attack",
            Intent::DetectionResult => "detection_result",
            Intent::AttackResult => "attack_result",
            Intent::Fallback => "fallback",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
