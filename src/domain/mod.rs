//! Domain layer containing the command core's vocabulary and rules.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (timestamps, errors)
//! - `conversation` - Utterances, intents and the intent classifier
//! - `identity` - Detected people, user records and identity answers
//! - `drone` - Drone actions and directive rules

pub mod conversation;
pub mod drone;
pub mod foundation;
pub mod identity;
