// src/graph/node.rs

//! In-memory node type: immutable metadata plus the mutable learner status.

use crate::config::model::{NodeConfig, Resources, RoadmapFile};
use crate::types::{NodeKind, NodeStatus};

/// Canonical node id type used throughout the crate.
pub type NodeId = String;

/// A roadmap topic as held in memory by the progress store.
///
/// Everything except `status` is fixed at graph construction time; `status`
/// is the only field that mutates afterwards, via the store's update
/// operation.
#[derive(Debug, Clone)]
pub struct RoadmapNode {
    pub id: NodeId,
    pub label: String,
    pub kind: NodeKind,
    pub description: Option<String>,
    pub difficulty: Option<u8>,
    pub estimated_time: Option<String>,
    pub technologies: Vec<String>,
    pub links: Vec<String>,
    pub resources: Option<Resources>,
    /// Direct dependencies (ids in `after = [...]`).
    pub deps: Vec<NodeId>,

    /// Current learner status. Defaults to `Pending` until a persisted
    /// record (or an explicit update) says otherwise.
    pub status: NodeStatus,
}

impl RoadmapNode {
    pub fn from_config(id: NodeId, cfg: &NodeConfig) -> Self {
        Self {
            id,
            label: cfg.label.clone(),
            kind: cfg.kind,
            description: cfg.description.clone(),
            difficulty: cfg.difficulty,
            estimated_time: cfg.estimated_time.clone(),
            technologies: cfg.technologies.clone(),
            links: cfg.links.clone(),
            resources: cfg.resources.clone(),
            deps: cfg.after.clone(),
            status: NodeStatus::default(),
        }
    }

    /// Build the full node list from a validated roadmap, in file order.
    pub fn list_from_roadmap(roadmap: &RoadmapFile) -> Vec<RoadmapNode> {
        roadmap
            .node
            .iter()
            .map(|(id, cfg)| RoadmapNode::from_config(id.clone(), cfg))
            .collect()
    }
}
