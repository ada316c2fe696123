//! Graph data types: nodes, edges, details, and the aggregate mindmap.
//!
//! These types are the crate's output surface. They serialize with
//! `camelCase` keys so the JSON matches what diagram front-ends expect
//! (`parentId`, `rootId`). Coordinates are `0.0` until the layout stage
//! writes them; everything else is fixed at parse time.

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};

/// One outline entry: a labelled node at a nesting depth, positioned on
/// the plane once layout has run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MindmapNode {
    /// Synthetic identifier (`node_<n>`), assigned in parse order.
    pub id: String,
    /// Display text extracted from the outline line.
    pub label: String,
    /// X coordinate; `0.0` until layout runs.
    pub x: f64,
    /// Y coordinate; `0.0` until layout runs.
    pub y: f64,
    /// Nesting depth derived from indentation (root is 0).
    pub level: usize,
    /// Owning node's id. Absent for the root and for orphaned nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Child node ids in source order.
    pub children: Vec<String>,
    /// Descriptive record for presentation; derived from the label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<NodeDetails>,
}

/// Descriptive sidebar content attached to a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDetails {
    /// Heading; always equal to the node's label.
    pub title: String,
    /// Free-text description of the labelled topic.
    pub description: String,
    /// Short bullet list elaborating on the topic.
    pub content: Vec<String>,
    /// Open-ended extra fields. Normally absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

/// A directed parent→child edge; one per non-root, non-orphan node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MindmapEdge {
    /// Deterministic identifier: `edge_<source>_<target>`.
    pub id: String,
    /// Parent node id.
    pub source: String,
    /// Child node id.
    pub target: String,
}

/// The parsed, positioned mindmap graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MindmapData {
    /// All nodes in parse order.
    pub nodes: Vec<MindmapNode>,
    /// All edges in parse order.
    pub edges: Vec<MindmapEdge>,
    /// Id of the root node; empty string when the outline had no
    /// level-0 line.
    pub root_id: String,
}

impl MindmapData {
    /// The root node, if `root_id` resolves.
    #[must_use]
    pub fn root(&self) -> Option<&MindmapNode> {
        self.node(&self.root_id)
    }

    /// Look up a node by id.
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&MindmapNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Resolve a selection the way the details sidebar does: match on
    /// id first, falling back to the first node with a matching label.
    #[must_use]
    pub fn find(&self, selector: &str) -> Option<&MindmapNode> {
        self.nodes
            .iter()
            .find(|n| n.id == selector || n.label == selector)
    }

    /// A node's children in source order, skipping any dangling ids.
    #[must_use]
    pub fn children_of(&self, id: &str) -> Vec<&MindmapNode> {
        let Some(node) = self.node(id) else {
            return Vec::new();
        };
        node.children
            .iter()
            .filter_map(|child_id| self.node(child_id))
            .collect()
    }
}
