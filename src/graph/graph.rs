// src/graph/graph.rs

use std::collections::HashMap;

use crate::config::model::RoadmapFile;

/// Internal node structure: stores immediate deps and dependents.
#[derive(Debug, Clone)]
struct GraphNode {
    /// Direct dependencies: topics that come before this one.
    deps: Vec<String>,
    /// Direct dependents: topics that list this one in their `after`.
    dependents: Vec<String>,
}

/// Simple in-memory DAG representation keyed by node id.
///
/// This is intentionally lightweight; acyclicity is already validated in
/// `config::validate`, so here we just keep adjacency information for
/// display and diagnostics.
#[derive(Debug, Clone)]
pub struct RoadmapGraph {
    nodes: HashMap<String, GraphNode>,
}

impl RoadmapGraph {
    /// Build a graph from a validated [`RoadmapFile`].
    ///
    /// Assumes that:
    /// - all `after` references are valid
    /// - there are no cycles
    pub fn from_roadmap(roadmap: &RoadmapFile) -> Self {
        let mut nodes: HashMap<String, GraphNode> = HashMap::new();

        // First pass: create nodes with their dependency lists.
        for (id, node) in roadmap.node.iter() {
            nodes.insert(
                id.clone(),
                GraphNode {
                    deps: node.after.clone(),
                    dependents: Vec::new(),
                },
            );
        }

        // Second pass: populate dependents based on deps.
        let ids: Vec<String> = nodes.keys().cloned().collect();
        for id in ids {
            // clone to avoid borrowing issues while mutating
            let deps = nodes.get(&id).map(|n| n.deps.clone()).unwrap_or_default();

            for dep in deps {
                if let Some(dep_node) = nodes.get_mut(&dep) {
                    dep_node.dependents.push(id.clone());
                }
            }
        }

        Self { nodes }
    }

    /// Return all node ids.
    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(|s| s.as_str())
    }

    /// Immediate dependencies of a node (the topics listed in its `after`).
    pub fn dependencies_of(&self, id: &str) -> &[String] {
        self.nodes.get(id).map(|n| n.deps.as_slice()).unwrap_or(&[])
    }

    /// Immediate dependents of a node (topics that list this one in their `after`).
    pub fn dependents_of(&self, id: &str) -> &[String] {
        self.nodes
            .get(id)
            .map(|n| n.dependents.as_slice())
            .unwrap_or(&[])
    }

    /// Nodes with no dependencies (roadmap entry points).
    pub fn roots(&self) -> Vec<String> {
        let mut roots: Vec<String> = self
            .nodes
            .iter()
            .filter(|(_, n)| n.deps.is_empty())
            .map(|(id, _)| id.clone())
            .collect();
        roots.sort();
        roots
    }
}
