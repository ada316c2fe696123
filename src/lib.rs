//! Mindmap outline parser and radial layout engine.
//!
//! This crate turns an indentation-based mindmap outline (the Mermaid
//! `mindmap` dialect) into a graph of nodes and parent→child edges, then
//! assigns every node a 2-D position on concentric rings around the root.
//! The resulting [`graph::MindmapData`] is a plain serializable structure;
//! rendering, hit-testing, and selection UI are the host application's
//! concern.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`graph`] | Graph data types and lookup helpers |
//! | [`parse`] | Outline text → graph parser |
//! | [`layout`] | Radial coordinate assignment |
//! | [`details`] | Per-node descriptive details derived from labels |
//! | [`sample`] | Built-in demo outline |
//!
//! ## Usage
//!
//! ```
//! let data = mindgraph::parse("mindmap\n  root((Hub))\n    Spoke");
//! assert_eq!(data.nodes.len(), 2);
//! assert_eq!(data.root().map(|n| n.label.as_str()), Some("Hub"));
//! ```

pub mod details;
pub mod graph;
pub mod layout;
pub mod parse;
pub mod sample;

pub use layout::layout;
pub use parse::parse;
