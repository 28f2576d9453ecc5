//! Attack result slot port.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;

/// Port for the single "last attack result" slot.
///
/// Last write wins; readers only ever see the most recent value.
#[async_trait]
pub trait AttackResultStore: Send + Sync {
    async fn last_attack_result(&self) -> Result<Option<String>, DomainError>;

    async fn set_last_attack_result(&self, result: &str) -> Result<(), DomainError>;
}
