//! Lint diagnostics for design documents.
//!
//! Reports input the classifiers cannot meaningfully size, without modifying
//! the document. Warnings make the generator skip the affected node.

use crate::id::NodeId;
use crate::model::{CornerRadius, Document, SceneNode};

// ─── Diagnostic types ────────────────────────────────────────────────────

/// Severity of a lint finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintSeverity {
    /// The node is skipped by the generator.
    Warning,
    /// Informational: output is produced but may surprise.
    Info,
}

/// A single lint diagnostic for a design node.
#[derive(Debug, Clone)]
pub struct LintDiagnostic {
    /// The node this diagnostic refers to.
    pub node_id: NodeId,
    /// Human-readable message.
    pub message: String,
    /// Severity level.
    pub severity: LintSeverity,
    /// Short rule identifier (e.g. "negative-size", "orphan-stroke-weight").
    pub rule: &'static str,
}

// ─── Public API ───────────────────────────────────────────────────────────

/// Run all lint rules over the document and return diagnostics.
#[must_use]
pub fn lint_document(doc: &Document) -> Vec<LintDiagnostic> {
    let mut diags = Vec::new();
    for idx in doc.graph.node_indices() {
        let node = &doc.graph[idx];
        if node.is_page() {
            continue;
        }
        lint_node(node, &mut diags);
    }
    diags
}

/// Lint a single node.
pub fn lint_node(node: &SceneNode, diags: &mut Vec<LintDiagnostic>) {
    lint_non_finite(node, diags);
    lint_negative_size(node, diags);
    lint_orphan_stroke_weight(node, diags);
    lint_empty_corners(node, diags);
}

/// Whether any Warning-level rule fires for `node`.
pub fn has_warnings(node: &SceneNode) -> bool {
    let mut diags = Vec::new();
    lint_node(node, &mut diags);
    diags.iter().any(|d| d.severity == LintSeverity::Warning)
}

// ─── Rules ────────────────────────────────────────────────────────────────

fn lint_non_finite(node: &SceneNode, diags: &mut Vec<LintDiagnostic>) {
    let spacing = node.kind.auto_layout().map_or(0.0, |l| l.item_spacing);
    let radius_ok = match node.corner_radius {
        CornerRadius::Unset => true,
        CornerRadius::Uniform(r) => r.is_finite(),
        CornerRadius::PerCorner(c) => c
            .labelled()
            .into_iter()
            .all(|(_, r)| r.is_none_or(f32::is_finite)),
    };

    if !node.geometry.is_finite()
        || !node.stroke.weight.is_finite()
        || !spacing.is_finite()
        || !radius_ok
    {
        diags.push(LintDiagnostic {
            node_id: node.id,
            message: format!("Node `{}` has a NaN or infinite measurement.", node.id),
            severity: LintSeverity::Warning,
            rule: "non-finite",
        });
    }
}

fn lint_negative_size(node: &SceneNode, diags: &mut Vec<LintDiagnostic>) {
    if node.width() < 0.0 || node.height() < 0.0 {
        diags.push(LintDiagnostic {
            node_id: node.id,
            message: format!(
                "Node `{}` has a negative size ({} × {}).",
                node.id,
                node.width(),
                node.height()
            ),
            severity: LintSeverity::Warning,
            rule: "negative-size",
        });
    }
}

/// Stroke weight with no paints: the border is invisible and ignored.
fn lint_orphan_stroke_weight(node: &SceneNode, diags: &mut Vec<LintDiagnostic>) {
    if node.stroke.weight > 0.0 && !node.stroke.has_paints() {
        diags.push(LintDiagnostic {
            node_id: node.id,
            message: format!(
                "Node `{}` has stroke weight {} but no stroke paints; no border is emitted.",
                node.id, node.stroke.weight
            ),
            severity: LintSeverity::Info,
            rule: "orphan-stroke-weight",
        });
    }
}

fn lint_empty_corners(node: &SceneNode, diags: &mut Vec<LintDiagnostic>) {
    if let CornerRadius::PerCorner(corners) = node.corner_radius
        && corners.is_unset()
        && !node.is_ellipse()
    {
        diags.push(LintDiagnostic {
            node_id: node.id,
            message: format!("Node `{}` has mixed corner radii but no corner values.", node.id),
            severity: LintSeverity::Info,
            rule: "empty-corners",
        });
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────
