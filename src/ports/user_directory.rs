//! User directory port.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::identity::{IdentityKey, UserRecord};

/// Port for looking up registered users.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Finds a user by email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, DomainError>;

    /// Finds a user by full name.
    async fn find_by_full_name(&self, full_name: &str) -> Result<Option<UserRecord>, DomainError>;

    /// Dispatches to the lookup matching the key.
    async fn find(&self, key: &IdentityKey) -> Result<Option<UserRecord>, DomainError> {
        match key {
            IdentityKey::Email(email) => self.find_by_email(email).await,
            IdentityKey::FullName(name) => self.find_by_full_name(name).await,
        }
    }
}
