//! Domain types for pipeline graphs.
//!
//! These mirror the JSON documents a pipeline editor submits: a list of nodes
//! and a list of directed edges between them. Only node identifiers and edge
//! endpoints carry meaning for analysis; everything else is passed through.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Identifier of a node, unique within one submitted pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    /// Create a new node ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Canvas position of a node.
///
/// Editors send `x` and `y`; any other numeric keys are kept as-is.
pub type Position = BTreeMap<String, f64>;

/// A node in a submitted pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Node {
    /// Unique identifier
    pub id: NodeId,

    /// Node type tag (e.g. "customInput", "llm")
    #[serde(rename = "type")]
    pub kind: String,

    /// Position on the editor canvas
    pub position: Position,

    /// Free-form node payload
    pub data: serde_json::Map<String, serde_json::Value>,
}

impl Node {
    /// Create a node with an empty payload at the origin.
    pub fn new(id: impl Into<NodeId>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            position: BTreeMap::from([("x".to_string(), 0.0), ("y".to_string(), 0.0)]),
            data: serde_json::Map::new(),
        }
    }
}

/// A directed edge from `source` to `target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    /// Edge identifier
    pub id: String,

    /// Node the edge leaves
    pub source: NodeId,

    /// Node the edge enters
    pub target: NodeId,

    /// Connection point on the source node
    #[serde(default)]
    pub source_handle: Option<String>,

    /// Connection point on the target node
    #[serde(default)]
    pub target_handle: Option<String>,
}

impl Edge {
    /// Create an edge without handles.
    pub fn new(
        id: impl Into<String>,
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            source_handle: None,
            target_handle: None,
        }
    }
}

/// A complete pipeline submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Pipeline {
    /// All nodes, in submission order
    pub nodes: Vec<Node>,

    /// All edges, in submission order
    pub edges: Vec<Edge>,
}

/// Structural facts about a pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PipelineSummary {
    /// Number of submitted nodes
    pub num_nodes: usize,

    /// Number of submitted edges
    pub num_edges: usize,

    /// Whether the pipeline is a directed acyclic graph
    pub is_dag: bool,
}
