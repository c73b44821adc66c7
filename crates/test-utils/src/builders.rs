#![allow(dead_code)]

use std::collections::BTreeMap;

use trailmap::config::{MetaSection, NodeConfig, RawRoadmapFile, RoadmapFile};
use trailmap::graph::RoadmapNode;
use trailmap::types::NodeKind;

/// Builder for `RoadmapFile` to simplify test setup.
pub struct RoadmapFileBuilder {
    raw: RawRoadmapFile,
}

impl RoadmapFileBuilder {
    pub fn new() -> Self {
        Self {
            raw: RawRoadmapFile {
                meta: MetaSection::default(),
                node: BTreeMap::new(),
            },
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.raw.meta.title = Some(title.to_string());
        self
    }

    pub fn with_node(mut self, id: &str, node: NodeConfig) -> Self {
        self.raw.node.insert(id.to_string(), node);
        self
    }

    pub fn build(self) -> RoadmapFile {
        RoadmapFile::try_from(self.raw).expect("Failed to build valid roadmap from builder")
    }

    /// Shortcut: build and convert straight to the in-memory node list.
    pub fn build_nodes(self) -> Vec<RoadmapNode> {
        RoadmapNode::list_from_roadmap(&self.build())
    }
}

impl Default for RoadmapFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `NodeConfig`.
pub struct NodeConfigBuilder {
    node: NodeConfig,
}

impl NodeConfigBuilder {
    pub fn new(label: &str, kind: NodeKind) -> Self {
        Self {
            node: NodeConfig {
                label: label.to_string(),
                kind,
                after: vec![],
                description: None,
                difficulty: None,
                estimated_time: None,
                technologies: vec![],
                links: vec![],
                resources: None,
            },
        }
    }

    pub fn required(label: &str) -> Self {
        Self::new(label, NodeKind::Required)
    }

    pub fn optional(label: &str) -> Self {
        Self::new(label, NodeKind::Optional)
    }

    pub fn phase(label: &str) -> Self {
        Self::new(label, NodeKind::Phase)
    }

    pub fn after(mut self, dep: &str) -> Self {
        self.node.after.push(dep.to_string());
        self
    }

    pub fn description(mut self, text: &str) -> Self {
        self.node.description = Some(text.to_string());
        self
    }

    pub fn difficulty(mut self, value: u8) -> Self {
        self.node.difficulty = Some(value);
        self
    }

    pub fn estimated_time(mut self, value: &str) -> Self {
        self.node.estimated_time = Some(value.to_string());
        self
    }

    pub fn technology(mut self, value: &str) -> Self {
        self.node.technologies.push(value.to_string());
        self
    }

    pub fn build(self) -> NodeConfig {
        self.node
    }
}
