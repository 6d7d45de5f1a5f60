//! Per-node class generation for a whole document.
//!
//! Composes the flex, size and border classifiers for every node below the
//! page. Each node is classified independently from read-only data, so
//! results do not depend on traversal order.

use crate::border::{border_radius, border_width};
use crate::config::ConvertConfig;
use crate::id::NodeId;
use crate::layout::flex_container;
use crate::lint::has_warnings;
use crate::model::{Document, NodeKind, NodeRef};
use crate::size::container_size;
use petgraph::graph::NodeIndex;
use serde::Serialize;

/// The classes produced for one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeClasses {
    pub id: NodeId,
    /// Space-separated tokens, each followed by one space. May be empty.
    pub classes: String,
}

/// Classes for a single node.
///
/// Nodes with Warning-level lint findings get no classes.
#[must_use]
pub fn classes_for(node: NodeRef<'_>, config: &ConvertConfig) -> String {
    if node.is_page() {
        return String::new();
    }
    if has_warnings(&node) {
        log::warn!("skipping {}: invalid geometry", node.id);
        return String::new();
    }

    let mut classes = String::new();
    if node.kind.auto_layout().is_some() {
        classes.push_str(&flex_container(node, config));
    }
    // Text boxes are sized by the typography generator.
    if !matches!(node.kind, NodeKind::Text { .. }) {
        classes.push_str(&container_size(node));
    }
    classes.push_str(&border_width(&node));
    classes.push_str(&border_radius(&node));

    log::trace!("{} -> {classes:?}", node.id);
    classes
}

/// Classes for every node under the page, in pre-order.
#[must_use]
pub fn generate_classes(doc: &Document, config: &ConvertConfig) -> Vec<NodeClasses> {
    let mut out = Vec::with_capacity(doc.node_count().saturating_sub(1));
    for child in doc.children(doc.root) {
        visit(doc, child, config, &mut out);
    }
    out
}

fn visit(doc: &Document, idx: NodeIndex, config: &ConvertConfig, out: &mut Vec<NodeClasses>) {
    let node = doc.node(idx);
    out.push(NodeClasses {
        id: node.id,
        classes: classes_for(node, config),
    });
    for child in doc.children(idx) {
        visit(doc, child, config, out);
    }
}
