//! Conversation turn handling.

mod respond;

pub use respond::{
    ConversationEngine, ConversationPorts, TurnOutcome,
    // Reply strings
    ATTACK_ACKNOWLEDGED, ATTACK_NO_TARGET, ATTACK_STARTED, ATTACK_STARTING, CONNECT_FAILED,
    CONNECT_SUCCEEDED, DRONE_CONNECTED, DRONE_NOT_CONNECTED, NOT_UNDERSTOOD, NO_ATTACK_RESULT,
    NO_DETECTION_RESULT, NO_PERSON_DETECTED,
};
