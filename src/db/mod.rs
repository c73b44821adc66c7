// src/db/mod.rs

//! Durable storage for per-node progress records.
//!
//! The store talks to a [`ProgressBackend`] instead of a concrete database.
//! This keeps the store testable (tests inject recording or failing
//! backends) and lets `--memory` run without touching disk.
//!
//! - `SqliteBackend` is the production implementation.
//! - `MemoryBackend` keeps records in a `HashMap` only.

use anyhow::Result;
use chrono::{DateTime, Utc};

use crate::graph::NodeId;
use crate::types::StoredStatus;

pub mod memory;
pub mod sqlite;

pub use memory::MemoryBackend;
pub use sqlite::SqliteBackend;

/// One persisted status entry, keyed by node id.
///
/// Absence of a record for a node means the node is pending. `updated_at`
/// is set on every write and is informational only; it is never consulted
/// for ordering or conflict resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressRecord {
    pub id: NodeId,
    pub status: StoredStatus,
    pub updated_at: DateTime<Utc>,
}

/// Abstract storage for progress records.
///
/// Contract: all four operations are idempotent; `upsert` overwrites by
/// `id` and stamps `updated_at` with the current time. Single process,
/// single writer; no transactions or isolation beyond that.
pub trait ProgressBackend: Send {
    /// Fetch the record for one node, if any.
    fn get_one(&self, id: &str) -> Result<Option<ProgressRecord>>;

    /// Fetch every stored record.
    fn get_all(&self) -> Result<Vec<ProgressRecord>>;

    /// Insert or overwrite the record for `id`.
    fn upsert(&mut self, id: &str, status: StoredStatus) -> Result<()>;

    /// Remove every stored record.
    fn delete_all(&mut self) -> Result<()>;
}
