// src/store/store.rs

use std::fmt;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::db::ProgressBackend;
use crate::graph::RoadmapNode;
use crate::types::NodeStatus;

use super::core::{ProgressCore, ProgressStats};
use super::{PersistOutcome, PersistRequest};

/// Capacity of the persistence request channel.
///
/// Writes are tiny and the worker drains quickly; if the channel ever fills
/// up, `update_node_status` awaits until there is room again.
const PERSIST_QUEUE_CAPACITY: usize = 64;

/// Async shell around [`ProgressCore`].
///
/// Owns the pure core and a background worker that holds the
/// [`ProgressBackend`]. All reads are answered from the core directly, so
/// an update is visible to readers before its persistence request has even
/// been picked up by the worker.
///
/// Backend failures never surface as errors here: the worker logs them and
/// reports them as [`PersistOutcome::Failed`] on the outcome channel.
pub struct ProgressStore {
    core: ProgressCore,
    persist_tx: mpsc::Sender<PersistRequest>,
    worker: JoinHandle<()>,
}

impl fmt::Debug for ProgressStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressStore")
            .field("core", &self.core)
            .finish_non_exhaustive()
    }
}

impl ProgressStore {
    /// Build a store over `nodes`, restore statuses from `backend`, and
    /// spawn the persistence worker.
    ///
    /// The initial load degrades to a no-op when the backend is unavailable:
    /// every node keeps its default pending status and the failure is only
    /// logged.
    pub fn initialize(
        nodes: Vec<RoadmapNode>,
        backend: Box<dyn ProgressBackend>,
        outcome_tx: mpsc::UnboundedSender<PersistOutcome>,
    ) -> Self {
        let mut core = ProgressCore::new(nodes);

        match backend.get_all() {
            Ok(records) => {
                debug!(count = records.len(), "loaded progress records");
                core.absorb_records(&records);
            }
            Err(err) => {
                warn!(error = %err, "could not load progress records; starting from defaults");
            }
        }

        let (persist_tx, persist_rx) = mpsc::channel(PERSIST_QUEUE_CAPACITY);
        let worker = tokio::spawn(persist_worker(backend, persist_rx, outcome_tx));

        Self {
            core,
            persist_tx,
            worker,
        }
    }

    /// Update one node's status.
    ///
    /// The in-memory change is applied (and visible) before the persistence
    /// request is queued. Unknown ids and phase nodes are silent no-ops.
    pub async fn update_node_status(&mut self, id: &str, status: NodeStatus) {
        if let Some(request) = self.core.set_status(id, status) {
            self.send(request).await;
        }
    }

    /// Set every required/optional node back to pending, persisting each
    /// node individually.
    ///
    /// Not atomic: a crash mid-way leaves a subset of nodes reset, which the
    /// next reset simply finishes.
    pub async fn reset_all_nodes(&mut self) {
        for request in self.core.reset_all() {
            self.send(request).await;
        }
    }

    /// Reset locally and delete every stored record in one sweep.
    pub async fn clear_all(&mut self) {
        let request = self.core.clear();
        self.send(request).await;
    }

    /// Look up one node by id.
    pub fn get_node_by_id(&self, id: &str) -> Option<&RoadmapNode> {
        self.core.node(id)
    }

    /// All nodes, in roadmap order.
    pub fn nodes(&self) -> &[RoadmapNode] {
        self.core.nodes()
    }

    /// Aggregate statistics over the tracked nodes.
    pub fn stats(&self) -> ProgressStats {
        self.core.stats()
    }

    /// Close the request channel and wait for the worker to drain it.
    ///
    /// Call this before process exit so queued writes are attempted; a
    /// long-running caller that never shuts down simply keeps the worker
    /// alive for the lifetime of the store.
    pub async fn shutdown(self) {
        drop(self.persist_tx);
        if let Err(err) = self.worker.await {
            warn!(error = %err, "persistence worker panicked");
        }
    }

    async fn send(&self, request: PersistRequest) {
        // The worker only stops once the channel closes, so a send error
        // means shutdown already happened; at that point dropping the
        // request matches the fire-and-forget contract.
        if self.persist_tx.send(request).await.is_err() {
            warn!("persistence worker gone; dropping write");
        }
    }
}

/// Background worker that owns the backend and performs all writes.
///
/// Runs until the request channel closes. Every attempt is reported on
/// `outcome_tx`; a dropped outcome receiver is tolerated.
async fn persist_worker(
    mut backend: Box<dyn ProgressBackend>,
    mut persist_rx: mpsc::Receiver<PersistRequest>,
    outcome_tx: mpsc::UnboundedSender<PersistOutcome>,
) {
    while let Some(request) = persist_rx.recv().await {
        let outcome = match &request {
            PersistRequest::Upsert { id, status } => match backend.upsert(id, *status) {
                Ok(()) => PersistOutcome::Persisted {
                    id: id.clone(),
                    status: *status,
                },
                Err(err) => {
                    warn!(node = %id, error = %err, "failed to persist status");
                    PersistOutcome::Failed {
                        request: request.clone(),
                        error: err.to_string(),
                    }
                }
            },
            PersistRequest::DeleteAll => match backend.delete_all() {
                Ok(()) => PersistOutcome::Cleared,
                Err(err) => {
                    warn!(error = %err, "failed to clear progress records");
                    PersistOutcome::Failed {
                        request: request.clone(),
                        error: err.to_string(),
                    }
                }
            },
        };

        // Diagnostics only; the UI is free to ignore these. Unbounded so
        // that a slow (or absent) consumer can never stall the worker.
        let _ = outcome_tx.send(outcome);
    }

    info!("persistence worker exiting");
}
