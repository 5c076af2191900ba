//! Ordered, fire-and-forget favorite writes.
//!
//! Toggling a favorite commits locally right away; the matching backend write
//! goes through a single background worker so writes reach the backend in
//! toggle order without the caller ever waiting on them. A failed write is
//! logged and flagged on [`SyncHealth`] for a later reconciliation pass; it
//! never rolls back local state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::domain::{FavoriteWrite, FoodId, MenuItem};
use crate::error::BackendError;
use crate::port::outbound::{FavoriteRecord, FoodBackend};

/// Whether local favorite state may have drifted from the backend.
#[derive(Debug, Default)]
pub struct SyncHealth {
    needs_reconcile: AtomicBool,
    last_error: Mutex<Option<BackendError>>,
}

impl SyncHealth {
    #[must_use]
    pub fn needs_reconcile(&self) -> bool {
        self.needs_reconcile.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn last_error(&self) -> Option<BackendError> {
        self.last_error.lock().clone()
    }

    fn record_failure(&self, error: BackendError) {
        self.needs_reconcile.store(true, Ordering::SeqCst);
        *self.last_error.lock() = Some(error);
    }

    fn clear(&self) {
        self.needs_reconcile.store(false, Ordering::SeqCst);
        *self.last_error.lock() = None;
    }
}

enum Job {
    Add(FavoriteRecord),
    Remove(FoodId),
    Flush(oneshot::Sender<()>),
}

/// Background writer for one session's favorite toggles.
pub struct FavoriteSync {
    tx: mpsc::UnboundedSender<Job>,
    health: Arc<SyncHealth>,
    worker: JoinHandle<()>,
}

impl FavoriteSync {
    /// Start the writer. Must be called from within a Tokio runtime.
    #[must_use]
    pub fn spawn(backend: Arc<dyn FoodBackend>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let health = Arc::new(SyncHealth::default());
        let worker = tokio::spawn(run_worker(backend, rx, Arc::clone(&health)));

        Self { tx, health, worker }
    }

    /// Queue the backend write for a toggle and return immediately.
    ///
    /// The add body is a fresh snapshot of `item` without extras.
    pub fn dispatch(&self, write: FavoriteWrite, item: &MenuItem) {
        let job = match write {
            FavoriteWrite::Add(_) => Job::Add(FavoriteRecord::from(item)),
            FavoriteWrite::Remove(id) => Job::Remove(id),
        };
        if self.tx.send(job).is_err() {
            warn!(food_id = %write.food_id(), "Favorite writer stopped; write dropped");
            self.health.record_failure(BackendError::Transport {
                path: "favorites".into(),
                reason: "favorite writer stopped".into(),
            });
        }
    }

    /// Wait until every write queued so far has been attempted.
    pub async fn flush(&self) {
        let (done_tx, done_rx) = oneshot::channel();
        if self.tx.send(Job::Flush(done_tx)).is_ok() {
            let _ = done_rx.await;
        }
    }

    #[must_use]
    pub fn health(&self) -> &SyncHealth {
        &self.health
    }

    /// Clear the drift flag after the caller has re-read the backend.
    pub(crate) fn mark_reconciled(&self) {
        self.health.clear();
    }

    /// Drain queued writes and stop the worker.
    pub async fn close(self) {
        drop(self.tx);
        if let Err(e) = self.worker.await {
            warn!(error = %e, "Favorite writer ended abnormally");
        }
    }
}

async fn run_worker(
    backend: Arc<dyn FoodBackend>,
    mut rx: mpsc::UnboundedReceiver<Job>,
    health: Arc<SyncHealth>,
) {
    while let Some(job) = rx.recv().await {
        let (food_id, result) = match job {
            Job::Add(record) => (record.id, backend.add_favorite(&record).await),
            Job::Remove(id) => (id, backend.remove_favorite(id).await),
            Job::Flush(done) => {
                let _ = done.send(());
                continue;
            }
        };

        match result {
            Ok(()) => debug!(%food_id, "Favorite write applied"),
            Err(error) => {
                warn!(%food_id, error = %error, "Favorite write failed; local state kept");
                health.record_failure(error);
            }
        }
    }
    debug!("Favorite writer stopped");
}
