//! Identity domain module.
//!
//! Records supplied by the vision subsystem and the user store, and the
//! answers the core composes from them.

mod answer;
mod person;

pub use answer::{FollowupAnswer, IdentityKey, PersonAnswer};
pub use person::{DetectedPerson, FaceDescriptor, UserRecord, UNKNOWN_PERSON};
