// src/store/mod.rs

//! Progress store: keeps in-memory node status synchronized with durable
//! progress records and computes aggregate statistics.
//!
//! The pure state logic lives in [`core`]; the async shell that owns the
//! persistence worker is implemented in [`store`].
//!
//! Updates are optimistic: the in-memory status changes first and is
//! immediately visible to readers; persistence happens afterwards on a
//! background worker and is never rolled back. Every persistence attempt is
//! reported on an outcome channel so callers can observe failures without
//! the store ever propagating a hard error.

use crate::graph::NodeId;
use crate::types::StoredStatus;

pub mod core;
pub mod store;

pub use core::{ProgressCore, ProgressStats};
pub use store::ProgressStore;

/// A write the core wants the persistence worker to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistRequest {
    /// Overwrite the record for one node.
    Upsert { id: NodeId, status: StoredStatus },
    /// Drop every stored record in one sweep.
    DeleteAll,
}

/// Result of one persistence attempt, reported on the outcome channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistOutcome {
    /// The record for `id` was written.
    Persisted { id: NodeId, status: StoredStatus },
    /// All records were deleted.
    Cleared,
    /// The backend refused the request; in-memory state is unaffected.
    Failed {
        request: PersistRequest,
        error: String,
    },
}
