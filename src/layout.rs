//! Radial layout: assigns node coordinates on concentric rings.
//!
//! Depth maps to distance from the root; siblings fan out over an arc
//! centred on their parent's own incoming angle. A single child gets a
//! narrow arc so chains extend nearly straight outward; larger sibling
//! groups spread across three quarters of the circle to stay readable.

#[cfg(test)]
#[path = "layout_test.rs"]
mod tests;

use std::collections::HashSet;
use std::f64::consts::PI;

use crate::graph::MindmapNode;

/// Distance between consecutive rings, per level of the parent.
const RING_SPACING: f64 = 250.0;
/// Arc for a single child, keeping chains close to straight.
const SINGLE_CHILD_ARC: f64 = PI / 4.0;
/// Arc across which two or more siblings are distributed.
const FAN_ARC: f64 = PI * 1.5;

/// Assign radial coordinates to every node reachable from `root_id`,
/// mutating `x`/`y` in place.
///
/// No-op when `root_id` does not resolve to a node in the slice. Nodes
/// not reachable from the root keep their prior coordinates. A visited
/// set guards against revisiting ids, so a malformed parent graph cannot
/// recurse forever.
pub fn layout(nodes: &mut [MindmapNode], root_id: &str) {
    let Some(root_idx) = nodes.iter().position(|n| n.id == root_id) else {
        return;
    };

    nodes[root_idx].x = 0.0;
    nodes[root_idx].y = 0.0;

    let mut visited = HashSet::new();
    visited.insert(root_id.to_owned());
    place_children(nodes, root_idx, &mut visited, 0.0);
}

/// Position the direct children of `nodes[parent_idx]` on the next ring,
/// then recurse into each child with its own angle as the incoming angle.
fn place_children(
    nodes: &mut [MindmapNode],
    parent_idx: usize,
    visited: &mut HashSet<String>,
    incoming: f64,
) {
    let parent_id = nodes[parent_idx].id.clone();
    let (px, py, parent_level) = {
        let p = &nodes[parent_idx];
        (p.x, p.y, p.level)
    };

    let child_indices: Vec<usize> = nodes
        .iter()
        .enumerate()
        .filter(|(_, n)| n.parent_id.as_deref() == Some(parent_id.as_str()))
        .map(|(i, _)| i)
        .collect();
    if child_indices.is_empty() {
        return;
    }

    #[allow(clippy::cast_precision_loss)]
    let radius = (parent_level + 1) as f64 * RING_SPACING;
    let arc = if child_indices.len() == 1 {
        SINGLE_CHILD_ARC
    } else {
        FAN_ARC
    };
    #[allow(clippy::cast_precision_loss)]
    let step = if child_indices.len() > 1 {
        arc / (child_indices.len() - 1) as f64
    } else {
        0.0
    };
    let start = incoming - arc / 2.0;

    for (i, &child_idx) in child_indices.iter().enumerate() {
        if visited.contains(&nodes[child_idx].id) {
            continue;
        }
        visited.insert(nodes[child_idx].id.clone());

        #[allow(clippy::cast_precision_loss)]
        let angle = start + step * i as f64;
        nodes[child_idx].x = px + angle.cos() * radius;
        nodes[child_idx].y = py + angle.sin() * radius;
        tracing::trace!(
            id = %nodes[child_idx].id,
            x = nodes[child_idx].x,
            y = nodes[child_idx].y,
            angle,
            "placed node"
        );

        place_children(nodes, child_idx, visited, angle);
    }
}
