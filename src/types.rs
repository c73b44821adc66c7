// src/types.rs

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::Deserialize;

/// What role a node plays in the roadmap.
///
/// - `Required`: a topic the learner is expected to complete.
/// - `Optional`: a topic that can be skipped without blocking progress.
/// - `Phase`: a structural/grouping node. Phase nodes never carry a
///   learner status and are excluded from progress statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Required,
    Optional,
    Phase,
}

impl NodeKind {
    /// Whether this node participates in progress tracking and statistics.
    pub fn is_tracked(self) -> bool {
        matches!(self, NodeKind::Required | NodeKind::Optional)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NodeKind::Required => "required",
            NodeKind::Optional => "optional",
            NodeKind::Phase => "phase",
        };
        f.write_str(s)
    }
}

impl FromStr for NodeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "required" => Ok(NodeKind::Required),
            "optional" => Ok(NodeKind::Optional),
            "phase" => Ok(NodeKind::Phase),
            other => Err(format!(
                "invalid node kind: {other} (expected \"required\", \"optional\" or \"phase\")"
            )),
        }
    }
}

/// In-memory learner status of a node.
///
/// This is the vocabulary the store and the CLI speak. The durable store
/// uses a parallel vocabulary ([`StoredStatus`]); the two are a fixed
/// bijection and never mix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum NodeStatus {
    Pending,
    InProgress,
    Completed,
    Skipped,
}

impl Default for NodeStatus {
    fn default() -> Self {
        NodeStatus::Pending
    }
}

impl fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NodeStatus::Pending => "pending",
            NodeStatus::InProgress => "in-progress",
            NodeStatus::Completed => "completed",
            NodeStatus::Skipped => "skipped",
        };
        f.write_str(s)
    }
}

impl FromStr for NodeStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(NodeStatus::Pending),
            "in-progress" => Ok(NodeStatus::InProgress),
            "completed" => Ok(NodeStatus::Completed),
            "skipped" => Ok(NodeStatus::Skipped),
            other => Err(format!(
                "invalid status: {other} (expected \"pending\", \"in-progress\", \
                 \"completed\" or \"skipped\")"
            )),
        }
    }
}

/// Durable status vocabulary, as written to the progress database.
///
/// Inherited from the first release of the tracker, which stored Spanish
/// status strings. Existing databases contain these values, so the wire
/// vocabulary is frozen even though the in-memory one is English.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoredStatus {
    Pendiente,
    EnProgreso,
    Completado,
    Omitida,
}

impl StoredStatus {
    /// The exact string stored in the `status` column.
    pub fn as_str(self) -> &'static str {
        match self {
            StoredStatus::Pendiente => "pendiente",
            StoredStatus::EnProgreso => "en-progreso",
            StoredStatus::Completado => "completado",
            StoredStatus::Omitida => "omitida",
        }
    }
}

impl fmt::Display for StoredStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StoredStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "pendiente" => Ok(StoredStatus::Pendiente),
            "en-progreso" => Ok(StoredStatus::EnProgreso),
            "completado" => Ok(StoredStatus::Completado),
            "omitida" => Ok(StoredStatus::Omitida),
            other => Err(format!("unrecognized stored status: {other}")),
        }
    }
}

impl From<NodeStatus> for StoredStatus {
    fn from(status: NodeStatus) -> Self {
        match status {
            NodeStatus::Pending => StoredStatus::Pendiente,
            NodeStatus::InProgress => StoredStatus::EnProgreso,
            NodeStatus::Completed => StoredStatus::Completado,
            NodeStatus::Skipped => StoredStatus::Omitida,
        }
    }
}

impl From<StoredStatus> for NodeStatus {
    fn from(status: StoredStatus) -> Self {
        match status {
            StoredStatus::Pendiente => NodeStatus::Pending,
            StoredStatus::EnProgreso => NodeStatus::InProgress,
            StoredStatus::Completado => NodeStatus::Completed,
            StoredStatus::Omitida => NodeStatus::Skipped,
        }
    }
}
