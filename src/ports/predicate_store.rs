//! Predicate side channel port.

use async_trait::async_trait;

/// Predicate carrying a pending drone directive.
pub const DIRECTION_PREDICATE: &str = "direction";

/// Port for named values a responder sets while answering.
#[async_trait]
pub trait PredicateStore: Send + Sync {
    /// Reads a predicate; `None` when never set.
    async fn predicate(&self, name: &str) -> Option<String>;

    /// Overwrites a predicate.
    async fn set_predicate(&self, name: &str, value: &str);
}
