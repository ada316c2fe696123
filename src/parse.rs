//! Outline parser: indented mindmap text → graph.
//!
//! The accepted dialect is the Mermaid `mindmap` subset: an optional
//! `mindmap` header line, then one node per line with two spaces of
//! indentation per nesting level. A line's content is either plain text,
//! `(text)`, or `((text))` (the root marker); `::icon(...)` lines are
//! annotations and produce no node.

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;

use crate::details;
use crate::graph::{MindmapData, MindmapEdge, MindmapNode};
use crate::layout;

/// Parse mindmap outline text into a positioned graph.
///
/// Never fails: malformed or empty input degrades to a partial graph,
/// possibly with an empty `root_id` when no level-0 line exists. Depth is
/// measured relative to the shallowest accepted line, so an outline whose
/// root sits indented under the `mindmap` header still parses with the
/// root at level 0. When the outline contains several level-0 lines, the
/// last one becomes the root and earlier ones remain in the node list
/// without a parent (this mirrors the reference behavior the dialect's
/// existing documents rely on). Node ids restart at `node_0` on every
/// call.
#[must_use]
pub fn parse(text: &str) -> MindmapData {
    // Accepted lines with their raw indent level. Header, blank, and
    // `::icon` annotation lines never reach this list, so they cannot
    // disturb the ancestor stack below.
    let entries: Vec<(usize, &str)> = text
        .lines()
        .filter(|line| !line.is_empty() && !line.trim().starts_with("mindmap"))
        .filter_map(|line| {
            let content = line.trim();
            if content.is_empty() || content.starts_with("::icon") {
                None
            } else {
                Some((indent_level(line), content))
            }
        })
        .collect();
    tracing::debug!(lines = entries.len(), "parsing outline");

    // Shallowest line defines level 0.
    let base = entries.iter().map(|&(indent, _)| indent).min().unwrap_or(0);

    let mut nodes: Vec<MindmapNode> = Vec::new();
    let mut edges: Vec<MindmapEdge> = Vec::new();
    let mut root_id = String::new();
    let mut counter = 0usize;

    // Ancestor chain: (index into `nodes`, indent level), innermost last.
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for (raw_indent, content) in entries {
        let indent = raw_indent - base;
        let id = format!("node_{counter}");
        counter += 1;
        let label = extract_label(content);
        tracing::trace!(%id, %label, indent, "accepted line");

        let mut node = MindmapNode {
            id: id.clone(),
            label,
            x: 0.0,
            y: 0.0,
            level: indent,
            parent_id: None,
            children: Vec::new(),
            details: None,
        };

        if indent == 0 {
            // Root line. Last one wins; the stack is deliberately left
            // intact (see the doc comment on `parse`).
            root_id.clone_from(&id);
        } else {
            while stack.last().is_some_and(|&(_, d)| d >= indent) {
                stack.pop();
            }

            if let Some(&(parent_idx, _)) = stack.last() {
                let parent_id = nodes[parent_idx].id.clone();
                node.parent_id = Some(parent_id.clone());
                nodes[parent_idx].children.push(id.clone());
                edges.push(MindmapEdge {
                    id: format!("edge_{parent_id}_{id}"),
                    source: parent_id,
                    target: id,
                });
            }
            // Empty stack with indent > 0: orphaned node, no edge.
        }

        nodes.push(node);
        stack.push((nodes.len() - 1, indent));
    }

    for node in &mut nodes {
        node.details = Some(details::for_label(&node.label));
    }

    layout::layout(&mut nodes, &root_id);

    MindmapData { nodes, edges, root_id }
}

/// Indent level of a raw line: leading whitespace characters divided by
/// two, rounding down.
fn indent_level(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count() / 2
}

/// Extract the display label from trimmed line content.
///
/// The first `((...))` span wins (root marker), then the first `(...)`
/// span, then the content verbatim.
fn extract_label(content: &str) -> String {
    if let Some(inner) = span_between(content, "((", "))") {
        return inner;
    }
    if let Some(inner) = span_between(content, "(", ")") {
        return inner;
    }
    content.to_owned()
}

/// Non-empty text between the first `open` and the next `close` after it.
fn span_between(content: &str, open: &str, close: &str) -> Option<String> {
    let start = content.find(open)? + open.len();
    let rest = &content[start..];
    let inner = &rest[..rest.find(close)?];
    if inner.is_empty() {
        None
    } else {
        Some(inner.to_owned())
    }
}
