//! Fire-and-forget background work with a result sink.
//!
//! A unit of work runs on its own task; whatever outcome string it produces
//! is written to a sink for later polling. Nothing is pushed back to the
//! caller, who only keeps the join handle if it cares to.

use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;
use tokio::task::{JoinError, JoinHandle};
use tracing::Instrument;

use crate::ports::AttackResultStore;

/// Destination for a background task's outcome.
#[async_trait]
pub trait ResultSink: Send + Sync {
    async fn record(&self, outcome: &str);

    /// Outcome recorded when the work aborts without producing one.
    fn aborted(&self, reason: &str) -> String {
        format!("Task error: {}", reason)
    }
}

/// Sink writing into the last-attack-result slot.
pub struct AttackResultSink {
    store: Arc<dyn AttackResultStore>,
}

impl AttackResultSink {
    pub fn new(store: Arc<dyn AttackResultStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ResultSink for AttackResultSink {
    async fn record(&self, outcome: &str) {
        if let Err(e) = self.store.set_last_attack_result(outcome).await {
            tracing::warn!(error = %e, "failed to record attack result");
        }
    }

    fn aborted(&self, reason: &str) -> String {
        format!("Attack error: {}", reason)
    }
}

/// Spawns `work` and records its outcome in `sink`.
///
/// The returned handle resolves to the recorded outcome; dropping it does
/// not cancel the task. If `work` panics, the sink's `aborted` outcome is
/// recorded instead.
pub fn spawn_with_sink<F>(task: &'static str, work: F, sink: Arc<dyn ResultSink>) -> JoinHandle<String>
where
    F: Future<Output = String> + Send + 'static,
{
    let span = tracing::info_span!("background", task, id = %uuid::Uuid::new_v4());
    tokio::spawn(
        async move {
            let outcome = match tokio::spawn(work.in_current_span()).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    let reason = abort_reason(e);
                    tracing::error!(reason = %reason, "background task aborted");
                    sink.aborted(&reason)
                }
            };
            tracing::info!(outcome = %outcome, "background task finished");
            sink.record(&outcome).await;
            outcome
        }
        .instrument(span),
    )
}

fn abort_reason(error: JoinError) -> String {
    if !error.is_panic() {
        return "task was cancelled".to_string();
    }
    let payload = error.into_panic();
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "task panicked".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::Mutex;

    #[derive(Default)]
    struct VecSink(Mutex<Vec<String>>);

    #[async_trait]
    impl ResultSink for VecSink {
        async fn record(&self, outcome: &str) {
            self.0.lock().await.push(outcome.to_string());
        }
    }

    #[tokio::test]
    async fn outcome_reaches_sink_and_handle() {
        let sink = Arc::new(VecSink::default());
        let handle = spawn_with_sink("test", async { "done".to_string() }, sink.clone());

        assert_eq!(handle.await.unwrap(), "done");
        assert_eq!(*sink.0.lock().await, vec!["done".to_string()]);
    }

    #[tokio::test]
    async fn dropped_handle_still_records() {
        let sink = Arc::new(VecSink::default());
        drop(spawn_with_sink("test", async { "later".to_string() }, sink.clone()));

        for _ in 0..50 {
            if !sink.0.lock().await.is_empty() {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }
        assert_eq!(*sink.0.lock().await, vec!["later".to_string()]);
    }

    async fn explode() -> String {
        panic!("camera unplugged")
    }

    #[tokio::test]
    async fn panicking_work_records_aborted_outcome() {
        let sink = Arc::new(VecSink::default());
        let handle = spawn_with_sink("test", explode(), sink.clone());

        assert_eq!(handle.await.unwrap(), "Task error: camera unplugged");
        assert_eq!(
            *sink.0.lock().await,
            vec!["Task error: camera unplugged".to_string()]
        );
    }
}
