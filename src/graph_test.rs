//! Tests for the graph types and lookup helpers.

use serde_json::json;

use super::*;
use crate::parse;

// =============================================================================
// Serde shape
// =============================================================================

#[test]
fn serializes_with_camel_case_keys() {
    let data = parse("root((X))\n  A");
    let value = serde_json::to_value(&data).unwrap();

    assert_eq!(value["rootId"], "node_0");
    assert_eq!(value["nodes"][1]["parentId"], "node_0");
    assert_eq!(value["edges"][0]["source"], "node_0");
    assert_eq!(value["edges"][0]["target"], "node_1");
}

#[test]
fn absent_optionals_are_omitted() {
    let data = parse("root((X))");
    let value = serde_json::to_value(&data).unwrap();

    let root = &value["nodes"][0];
    assert!(root.get("parentId").is_none());
    assert!(root["details"].get("metadata").is_none());
}

#[test]
fn data_roundtrips_through_json() {
    let data = parse("root((X))\n  A\n    B");
    let text = serde_json::to_string(&data).unwrap();
    let back: MindmapData = serde_json::from_str(&text).unwrap();

    assert_eq!(back.root_id, data.root_id);
    assert_eq!(back.nodes.len(), data.nodes.len());
    assert_eq!(back.edges, data.edges);
    assert_eq!(back.nodes[2].parent_id, data.nodes[2].parent_id);
}

#[test]
fn edge_deserializes_from_wire_shape() {
    let edge: MindmapEdge = serde_json::from_value(json!({
        "id": "edge_node_0_node_1",
        "source": "node_0",
        "target": "node_1",
    }))
    .unwrap();
    assert_eq!(edge.source, "node_0");
}

// =============================================================================
// Lookup helpers
// =============================================================================

#[test]
fn root_resolves_root_id() {
    let data = parse("root((Hub))\n  A");
    assert_eq!(data.root().map(|n| n.label.as_str()), Some("Hub"));
}

#[test]
fn root_is_none_without_level_zero_line() {
    let data = parse("mindmap");
    assert!(data.root().is_none());
}

#[test]
fn find_matches_id_then_label() {
    let data = parse("root((Hub))\n  Spoke");

    assert_eq!(data.find("node_1").map(|n| n.label.as_str()), Some("Spoke"));
    assert_eq!(data.find("Spoke").map(|n| n.id.as_str()), Some("node_1"));
    assert!(data.find("missing").is_none());
}

#[test]
fn find_takes_first_match_in_parse_order() {
    // A later node labelled like an earlier node's id resolves to the
    // earlier node: matching walks the list once, id-or-label per node.
    let data = parse("root((Hub))\n  node_0");
    assert_eq!(data.find("node_0").map(|n| n.label.as_str()), Some("Hub"));
}

#[test]
fn children_of_preserves_order_and_skips_dangling() {
    let mut data = parse("root((Hub))\n  A\n  B\n  C");
    data.nodes[0].children.push("node_99".to_owned());

    let labels: Vec<&str> = data
        .children_of("node_0")
        .iter()
        .map(|n| n.label.as_str())
        .collect();
    assert_eq!(labels, ["A", "B", "C"]);
}

#[test]
fn children_of_unknown_node_is_empty() {
    let data = parse("root((Hub))");
    assert!(data.children_of("node_42").is_empty());
}
