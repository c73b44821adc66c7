// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::errors::{Result, TrailmapError};
use crate::types::NodeKind;

/// Top-level roadmap file as read from TOML, before validation.
///
/// ```toml
/// [meta]
/// title = "Frontend roadmap"
///
/// [node.html]
/// label = "HTML"
/// kind = "required"
///
/// [node.css]
/// label = "CSS"
/// kind = "required"
/// after = ["html"]
/// ```
///
/// Node ids are the TOML table keys, so uniqueness is structural.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRoadmapFile {
    /// Roadmap-level metadata from `[meta]`.
    #[serde(default)]
    pub meta: MetaSection,

    /// All nodes from `[node.<id>]`, keyed by node id.
    #[serde(default)]
    pub node: BTreeMap<String, NodeConfig>,
}

/// A roadmap file that has passed semantic validation.
///
/// Constructed via `TryFrom<RawRoadmapFile>`; holding one of these is proof
/// that all `after` references resolve and the graph is acyclic.
#[derive(Debug, Clone)]
pub struct RoadmapFile {
    pub meta: MetaSection,
    pub node: BTreeMap<String, NodeConfig>,
}

impl TryFrom<RawRoadmapFile> for RoadmapFile {
    type Error = TrailmapError;

    fn try_from(raw: RawRoadmapFile) -> Result<Self> {
        crate::config::validate::validate_roadmap(&raw)?;
        Ok(Self {
            meta: raw.meta,
            node: raw.node,
        })
    }
}

/// `[meta]` section.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct MetaSection {
    /// Human-readable roadmap title.
    #[serde(default)]
    pub title: Option<String>,

    /// Short description shown by `trailmap show`.
    #[serde(default)]
    pub description: Option<String>,
}

/// `[node.<id>]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeConfig {
    /// Display label for the topic.
    pub label: String,

    /// Node role: `"required"`, `"optional"` or `"phase"`.
    pub kind: NodeKind,

    /// Topics that should be learned before this one.
    ///
    /// This is the TOML `after = ["html", "css"]` field; it defines the
    /// roadmap edges.
    #[serde(default)]
    pub after: Vec<String>,

    /// Longer free-form description of the topic.
    #[serde(default)]
    pub description: Option<String>,

    /// Subjective difficulty, 1 (easy) to 5 (hard).
    #[serde(default)]
    pub difficulty: Option<u8>,

    /// Rough time estimate, free-form (e.g. `"2 weeks"`).
    #[serde(default)]
    pub estimated_time: Option<String>,

    /// Related technologies/keywords.
    #[serde(default)]
    pub technologies: Vec<String>,

    /// External links for further reading.
    #[serde(default)]
    pub links: Vec<String>,

    /// Curated learning resources.
    #[serde(default)]
    pub resources: Option<Resources>,
}

/// `[node.<id>.resources]` table.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Resources {
    #[serde(default)]
    pub documentation: Option<String>,

    #[serde(default)]
    pub video: Option<String>,

    #[serde(default)]
    pub additional: Option<String>,
}
