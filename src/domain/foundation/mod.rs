//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary
//! of the EagleWings command core.

mod errors;
mod timestamp;

pub use errors::{DomainError, ErrorCode};
pub use timestamp::Timestamp;
