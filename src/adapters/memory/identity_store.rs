//! In-memory identity store for tests and demos.
//!
//! Implements the detection, user and attack-result ports over shared
//! in-process state. Failure injection lets tests exercise the degraded
//! answers the core gives when the store is down.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::identity::{DetectedPerson, UserRecord};
use crate::ports::{AttackResultStore, DetectionStore, UserDirectory};

#[derive(Debug, Default)]
struct StoreState {
    users: Vec<UserRecord>,
    detected: Option<DetectedPerson>,
    detection_result: Option<String>,
    attack_result: Option<String>,
}

/// In-memory implementation of the store ports.
#[derive(Debug, Clone, Default)]
pub struct InMemoryIdentityStore {
    state: Arc<RwLock<StoreState>>,
    failing: Arc<AtomicBool>,
}

impl InMemoryIdentityStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a user.
    pub async fn add_user(&self, user: UserRecord) {
        self.state.write().await.users.push(user);
    }

    /// Replaces the last detected person.
    pub async fn set_detected_person(&self, person: Option<DetectedPerson>) {
        self.state.write().await.detected = person;
    }

    /// Replaces the stored detection outcome.
    pub async fn set_detection_result(&self, result: Option<String>) {
        self.state.write().await.detection_result = result;
    }

    /// Makes every port call fail until switched off again.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(DomainError::new(ErrorCode::StoreUnavailable, "store unavailable"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl DetectionStore for InMemoryIdentityStore {
    async fn last_detected_person(&self) -> Result<Option<DetectedPerson>, DomainError> {
        self.check()?;
        Ok(self.state.read().await.detected.clone())
    }

    async fn last_person_detection_result(&self) -> Result<Option<String>, DomainError> {
        self.check()?;
        Ok(self.state.read().await.detection_result.clone())
    }
}

#[async_trait]
impl UserDirectory for InMemoryIdentityStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, DomainError> {
        self.check()?;
        let state = self.state.read().await;
        Ok(state
            .users
            .iter()
            .find(|u| u.email.as_deref().is_some_and(|e| e.eq_ignore_ascii_case(email.trim())))
            .cloned())
    }

    async fn find_by_full_name(&self, full_name: &str) -> Result<Option<UserRecord>, DomainError> {
        self.check()?;
        let state = self.state.read().await;
        Ok(state.users.iter().find(|u| u.is_named(full_name)).cloned())
    }
}

#[async_trait]
impl AttackResultStore for InMemoryIdentityStore {
    async fn last_attack_result(&self) -> Result<Option<String>, DomainError> {
        self.check()?;
        Ok(self.state.read().await.attack_result.clone())
    }

    async fn set_last_attack_result(&self, result: &str) -> Result<(), DomainError> {
        self.check()?;
        self.state.write().await.attack_result = Some(result.to_string());
        Ok(())
    }
}
