// src/store/core.rs

//! Pure in-memory progress state.
//!
//! This module contains a synchronous, deterministic core that applies
//! status changes to the node list and produces [`PersistRequest`]s
//! describing what the IO shell should write next.
//!
//! The async shell (`store::ProgressStore`) is responsible for:
//! - loading records from the backend at startup
//! - shipping persist requests to the background worker
//!
//! The core is intended to be extensively unit tested without any Tokio,
//! channels, or database.

use std::collections::HashMap;

use tracing::debug;

use crate::db::ProgressRecord;
use crate::graph::RoadmapNode;
use crate::types::{NodeKind, NodeStatus};

use super::PersistRequest;

/// Aggregate progress statistics over the tracked (required/optional) nodes.
///
/// A pure projection of the current in-memory node list; nothing here is
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProgressStats {
    pub completed: usize,
    pub in_progress: usize,
    pub pending: usize,
    pub skipped: usize,
    pub total: usize,
    pub required_total: usize,
    pub optional_total: usize,
    pub required_completed: usize,
    pub optional_completed: usize,
    /// `completed / total * 100`; defined as `0.0` when `total == 0`.
    pub progress_percentage: f64,
}

/// Pure in-memory node state.
///
/// Owns the working node list. Only `status` fields mutate after
/// construction; all mutations go through [`set_status`](Self::set_status)
/// or [`reset_all`](Self::reset_all), which also say what needs persisting.
#[derive(Debug)]
pub struct ProgressCore {
    nodes: Vec<RoadmapNode>,
}

impl ProgressCore {
    pub fn new(nodes: Vec<RoadmapNode>) -> Self {
        Self { nodes }
    }

    /// Apply persisted records to the node list.
    ///
    /// Every node with a matching record gets the record's status (converted
    /// to the in-memory vocabulary); nodes without a record keep their
    /// current (default pending) status. Records that match no node are
    /// ignored.
    pub fn absorb_records(&mut self, records: &[ProgressRecord]) {
        let by_id: HashMap<&str, &ProgressRecord> =
            records.iter().map(|r| (r.id.as_str(), r)).collect();

        for node in self.nodes.iter_mut() {
            if let Some(record) = by_id.get(node.id.as_str()) {
                node.status = NodeStatus::from(record.status);
                debug!(node = %node.id, status = %node.status, "restored status from record");
            }
        }
    }

    /// Update one node's status in place.
    ///
    /// Returns the upsert request the shell should persist, or `None` when
    /// the operation is a no-op: unknown id, or a phase node (phase nodes
    /// never carry status).
    pub fn set_status(&mut self, id: &str, status: NodeStatus) -> Option<PersistRequest> {
        let node = match self.nodes.iter_mut().find(|n| n.id == id) {
            Some(n) => n,
            None => {
                debug!(node = %id, "status update for unknown node ignored");
                return None;
            }
        };

        if !node.kind.is_tracked() {
            debug!(node = %id, "status update for phase node ignored");
            return None;
        }

        node.status = status;
        Some(PersistRequest::Upsert {
            id: node.id.clone(),
            status: status.into(),
        })
    }

    /// Set every required/optional node back to pending.
    ///
    /// Returns one upsert request per affected node. This is deliberately a
    /// per-node operation rather than a bulk delete, matching the durable
    /// contract that reset writes explicit pending records.
    pub fn reset_all(&mut self) -> Vec<PersistRequest> {
        let mut requests = Vec::new();
        for node in self.nodes.iter_mut() {
            if node.kind.is_tracked() {
                node.status = NodeStatus::Pending;
                requests.push(PersistRequest::Upsert {
                    id: node.id.clone(),
                    status: NodeStatus::Pending.into(),
                });
            }
        }
        requests
    }

    /// Reset every node locally and ask the backend to drop all records.
    pub fn clear(&mut self) -> PersistRequest {
        for node in self.nodes.iter_mut() {
            if node.kind.is_tracked() {
                node.status = NodeStatus::Pending;
            }
        }
        PersistRequest::DeleteAll
    }

    /// Look up one node by id.
    pub fn node(&self, id: &str) -> Option<&RoadmapNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// All nodes, in roadmap order.
    pub fn nodes(&self) -> &[RoadmapNode] {
        &self.nodes
    }

    /// Compute aggregate statistics over the tracked nodes.
    pub fn stats(&self) -> ProgressStats {
        let tracked: Vec<&RoadmapNode> =
            self.nodes.iter().filter(|n| n.kind.is_tracked()).collect();

        let count = |status: NodeStatus| tracked.iter().filter(|n| n.status == status).count();

        let completed = count(NodeStatus::Completed);
        let total = tracked.len();

        let required: Vec<&&RoadmapNode> = tracked
            .iter()
            .filter(|n| n.kind == NodeKind::Required)
            .collect();
        let optional: Vec<&&RoadmapNode> = tracked
            .iter()
            .filter(|n| n.kind == NodeKind::Optional)
            .collect();

        ProgressStats {
            completed,
            in_progress: count(NodeStatus::InProgress),
            pending: count(NodeStatus::Pending),
            skipped: count(NodeStatus::Skipped),
            total,
            required_total: required.len(),
            optional_total: optional.len(),
            required_completed: required
                .iter()
                .filter(|n| n.status == NodeStatus::Completed)
                .count(),
            optional_completed: optional
                .iter()
                .filter(|n| n.status == NodeStatus::Completed)
                .count(),
            // Guard against division by zero for all-phase roadmaps.
            progress_percentage: if total > 0 {
                completed as f64 / total as f64 * 100.0
            } else {
                0.0
            },
        }
    }
}
