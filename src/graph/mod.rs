// src/graph/mod.rs

//! Roadmap graph representation.
//!
//! - [`graph`] holds the directed acyclic graph of topics.
//! - [`node`] provides the in-memory node type carrying metadata and the
//!   mutable learner status.

pub mod graph;
pub mod node;

pub use graph::RoadmapGraph;
pub use node::{NodeId, RoadmapNode};
