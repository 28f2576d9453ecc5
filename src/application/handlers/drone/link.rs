//! The drone link: an owned, locked hardware resource.
//!
//! The connection flag and the driver handle live behind one mutex. Connect
//! and dispatch both take it, so a connect in progress never races a
//! manoeuvre and two manoeuvres never interleave.

use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

use crate::domain::drone::DroneAction;
use crate::ports::{DroneDriver, DroneError};

struct LinkState {
    connected: bool,
}

/// How one action was carried out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PerformOutcome {
    /// Forwarded to the hardware and acknowledged.
    Executed,
    /// The link is down; the dummy driver logged it instead.
    Simulated,
    /// The hardware refused or failed; logged as a dummy call.
    Degraded(String),
}

/// Shared drone link.
pub struct DroneLink {
    driver: Arc<dyn DroneDriver>,
    dummy: Arc<dyn DroneDriver>,
    state: Mutex<LinkState>,
}

impl DroneLink {
    /// Creates a disconnected link over `driver`, logging through `dummy`
    /// whenever the hardware cannot be used.
    pub fn new(driver: Arc<dyn DroneDriver>, dummy: Arc<dyn DroneDriver>) -> Self {
        Self {
            driver,
            dummy,
            state: Mutex::new(LinkState { connected: false }),
        }
    }

    /// Name of the configured hardware driver.
    pub fn driver_name(&self) -> &'static str {
        self.driver.name()
    }

    /// Returns the connection flag.
    pub async fn is_connected(&self) -> bool {
        self.state.lock().await.connected
    }

    /// Attempts to establish the link; returns the new connection flag.
    pub async fn connect(&self) -> bool {
        let mut state = self.state.lock().await;
        match self.driver.connect().await {
            Ok(()) => {
                state.connected = true;
                tracing::info!(driver = self.driver.name(), "drone connected");
                true
            }
            Err(e) => {
                state.connected = false;
                tracing::warn!(driver = self.driver.name(), error = %e, "drone connection failed");
                false
            }
        }
    }

    /// Takes exclusive use of the link until the guard drops.
    pub async fn acquire(&self) -> LinkGuard<'_> {
        LinkGuard {
            state: self.state.lock().await,
            driver: &self.driver,
            dummy: &self.dummy,
        }
    }
}

/// Exclusive access to the link.
pub struct LinkGuard<'a> {
    state: MutexGuard<'a, LinkState>,
    driver: &'a Arc<dyn DroneDriver>,
    dummy: &'a Arc<dyn DroneDriver>,
}

impl LinkGuard<'_> {
    pub fn is_connected(&self) -> bool {
        self.state.connected
    }

    /// Performs one action, degrading to the dummy driver instead of failing.
    pub async fn perform(&self, action: DroneAction) -> PerformOutcome {
        if !self.state.connected {
            self.simulate(action).await;
            return PerformOutcome::Simulated;
        }

        match self.driver.perform(action).await {
            Ok(()) => PerformOutcome::Executed,
            Err(e) => {
                tracing::warn!(%action, error = %e, "drone call failed; continuing in dummy mode");
                self.simulate(action).await;
                PerformOutcome::Degraded(e.to_string())
            }
        }
    }

    async fn simulate(&self, action: DroneAction) {
        if let Err(e) = self.dummy.perform(action).await {
            log_dummy_failure(action, e);
        }
    }
}

fn log_dummy_failure(action: DroneAction, error: DroneError) {
    tracing::debug!(%action, error = %error, "dummy driver refused action");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::drone::SimulatedDrone;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    #[derive(Default)]
    struct ScriptedDrone {
        connectable: AtomicBool,
        fail_actions: AtomicBool,
        actions: AtomicUsize,
    }

    impl ScriptedDrone {
        fn result(&self) -> Result<(), DroneError> {
            self.actions.fetch_add(1, Ordering::SeqCst);
            if self.fail_actions.load(Ordering::SeqCst) {
                Err(DroneError::Rejected {
                    command: "x".to_string(),
                    reply: "error".to_string(),
                })
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl DroneDriver for ScriptedDrone {
        fn name(&self) -> &'static str {
            "scripted"
        }
        async fn connect(&self) -> Result<(), DroneError> {
            if self.connectable.load(Ordering::SeqCst) {
                Ok(())
            } else {
                Err(DroneError::Unavailable("offline".to_string()))
            }
        }
        async fn takeoff(&self) -> Result<(), DroneError> { self.result() }
        async fn land(&self) -> Result<(), DroneError> { self.result() }
        async fn move_forward(&self, _: u32) -> Result<(), DroneError> { self.result() }
        async fn move_back(&self, _: u32) -> Result<(), DroneError> { self.result() }
        async fn move_left(&self, _: u32) -> Result<(), DroneError> { self.result() }
        async fn move_right(&self, _: u32) -> Result<(), DroneError> { self.result() }
        async fn move_up(&self, _: u32) -> Result<(), DroneError> { self.result() }
        async fn move_down(&self, _: u32) -> Result<(), DroneError> { self.result() }
        async fn flip_back(&self) -> Result<(), DroneError> { self.result() }
        async fn rotate_ccw(&self, _: u32) -> Result<(), DroneError> { self.result() }
        async fn rotate_cw(&self, _: u32) -> Result<(), DroneError> { self.result() }
    }

    fn link(driver: Arc<ScriptedDrone>, dummy: &SimulatedDrone) -> DroneLink {
        DroneLink::new(driver, Arc::new(dummy.clone()))
    }

    #[tokio::test]
    async fn starts_disconnected_and_simulates() {
        let driver = Arc::new(ScriptedDrone::default());
        let dummy = SimulatedDrone::new();
        let link = link(driver.clone(), &dummy);

        assert!(!link.is_connected().await);
        let outcome = link.acquire().await.perform(DroneAction::Takeoff).await;

        assert_eq!(outcome, PerformOutcome::Simulated);
        assert_eq!(driver.actions.load(Ordering::SeqCst), 0);
        assert_eq!(dummy.calls(), vec![DroneAction::Takeoff]);
    }

    #[tokio::test]
    async fn connected_link_forwards_to_driver() {
        let driver = Arc::new(ScriptedDrone::default());
        driver.connectable.store(true, Ordering::SeqCst);
        let dummy = SimulatedDrone::new();
        let link = link(driver.clone(), &dummy);

        assert!(link.connect().await);
        let outcome = link.acquire().await.perform(DroneAction::Land).await;

        assert_eq!(outcome, PerformOutcome::Executed);
        assert_eq!(driver.actions.load(Ordering::SeqCst), 1);
        assert_eq!(dummy.call_count(), 0);
    }

    #[tokio::test]
    async fn failed_connect_clears_flag() {
        let driver = Arc::new(ScriptedDrone::default());
        driver.connectable.store(true, Ordering::SeqCst);
        let dummy = SimulatedDrone::new();
        let link = link(driver.clone(), &dummy);

        assert!(link.connect().await);
        driver.connectable.store(false, Ordering::SeqCst);
        assert!(!link.connect().await);
        assert!(!link.is_connected().await);
    }

    #[tokio::test]
    async fn driver_failure_degrades_without_error() {
        let driver = Arc::new(ScriptedDrone::default());
        driver.connectable.store(true, Ordering::SeqCst);
        driver.fail_actions.store(true, Ordering::SeqCst);
        let dummy = SimulatedDrone::new();
        let link = link(driver.clone(), &dummy);
        link.connect().await;

        let outcome = link.acquire().await.perform(DroneAction::FlipBack).await;

        assert!(matches!(outcome, PerformOutcome::Degraded(_)));
        assert_eq!(dummy.calls(), vec![DroneAction::FlipBack]);
    }
}
