// src/config/validate.rs

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;

use crate::config::model::RawRoadmapFile;
use crate::errors::{Result, TrailmapError};

/// Run basic semantic validation against a loaded roadmap.
///
/// This checks:
/// - there is at least one node
/// - all `after` dependencies refer to existing nodes
/// - no node depends on itself
/// - the dependency graph has no cycles
/// - `difficulty`, when present, is within 1..=5
pub fn validate_roadmap(raw: &RawRoadmapFile) -> Result<()> {
    ensure_has_nodes(raw)?;
    validate_node_fields(raw)?;
    validate_dependencies(raw)?;
    validate_acyclic(raw)?;
    Ok(())
}

fn ensure_has_nodes(raw: &RawRoadmapFile) -> Result<()> {
    if raw.node.is_empty() {
        return Err(TrailmapError::RoadmapError(
            "roadmap must contain at least one [node.<id>] section".to_string(),
        ));
    }
    Ok(())
}

fn validate_node_fields(raw: &RawRoadmapFile) -> Result<()> {
    for (id, node) in raw.node.iter() {
        if node.label.trim().is_empty() {
            return Err(TrailmapError::RoadmapError(format!(
                "node '{id}' has an empty label"
            )));
        }
        if let Some(difficulty) = node.difficulty {
            if !(1..=5).contains(&difficulty) {
                return Err(TrailmapError::RoadmapError(format!(
                    "node '{id}' has difficulty {difficulty} (expected 1..=5)"
                )));
            }
        }
    }
    Ok(())
}

fn validate_dependencies(raw: &RawRoadmapFile) -> Result<()> {
    for (id, node) in raw.node.iter() {
        for dep in node.after.iter() {
            if !raw.node.contains_key(dep) {
                return Err(TrailmapError::RoadmapError(format!(
                    "node '{id}' has unknown dependency '{dep}' in `after`"
                )));
            }
            if dep == id {
                return Err(TrailmapError::RoadmapError(format!(
                    "node '{id}' cannot depend on itself in `after`"
                )));
            }
        }
    }
    Ok(())
}

fn validate_acyclic(raw: &RawRoadmapFile) -> Result<()> {
    // Build a petgraph graph from the nodes and their dependencies.
    //
    // Edge direction: dep -> node
    // For:
    //   [node.css]
    //   after = ["html"]
    // we add edge html -> css.
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

    for id in raw.node.keys() {
        graph.add_node(id.as_str());
    }

    for (id, node) in raw.node.iter() {
        for dep in node.after.iter() {
            graph.add_edge(dep.as_str(), id.as_str(), ());
        }
    }

    // A topological sort will fail if there is a cycle.
    match toposort(&graph, None) {
        Ok(_order) => Ok(()),
        Err(cycle) => {
            let node = cycle.node_id();
            Err(TrailmapError::GraphCycle(format!(
                "cycle detected in roadmap involving node '{node}'"
            )))
        }
    }
}
