//! JSON → `Document` loader.
//!
//! Reads a page exported from the design tool as a nested JSON tree with
//! plugin-API field names (`strokeWeight`, `layoutMode`, `topLeftRadius`, ...).
//! Missing fields take neutral defaults so partial exports still load.

use crate::id::NodeId;
use crate::model::*;
use petgraph::graph::NodeIndex;
use serde::Deserialize;
use smallvec::SmallVec;
use std::collections::{HashMap, HashSet};

/// Errors raised while loading a document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("document root must be a PAGE node, found {0}")]
    RootNotPage(String),

    #[error("duplicate node id `{0}`")]
    DuplicateId(String),
}

// ─── Wire format ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
enum RawKind {
    Page,
    Frame,
    Component,
    ComponentSet,
    Instance,
    Group,
    Rectangle,
    Ellipse,
    Text,
    Vector,
    Line,
    Star,
    Polygon,
    BooleanOperation,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Deserialize)]
enum MixedMarker {
    #[serde(rename = "mixed")]
    Mixed,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
enum RawRadius {
    Value(f32),
    Mixed(MixedMarker),
}

#[derive(Debug, Clone, Deserialize)]
struct RawPaint {
    #[serde(default)]
    color: Option<Color>,
    #[serde(default)]
    opacity: Option<f32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawNode {
    #[serde(rename = "type")]
    kind: RawKind,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    x: f32,
    #[serde(default)]
    y: f32,
    #[serde(default)]
    width: f32,
    #[serde(default)]
    height: f32,
    #[serde(default)]
    strokes: Vec<RawPaint>,
    #[serde(default)]
    stroke_weight: f32,
    #[serde(default)]
    stroke_align: StrokeAlign,
    #[serde(default)]
    corner_radius: Option<RawRadius>,
    #[serde(default)]
    top_left_radius: Option<f32>,
    #[serde(default)]
    top_right_radius: Option<f32>,
    #[serde(default)]
    bottom_left_radius: Option<f32>,
    #[serde(default)]
    bottom_right_radius: Option<f32>,
    #[serde(default)]
    layout_mode: LayoutMode,
    #[serde(default)]
    item_spacing: f32,
    #[serde(default)]
    layout_align: LayoutAlign,
    #[serde(default)]
    counter_axis_sizing_mode: CounterAxisSizing,
    #[serde(default)]
    characters: String,
    #[serde(default)]
    children: Vec<RawNode>,
}

// ─── Public API ───────────────────────────────────────────────────────────

/// Parse a JSON page into a `Document`.
///
/// # Errors
/// Returns `LoadError` if the JSON is malformed, the root is not a page,
/// or two nodes share an id.
pub fn load_document(json: &str) -> Result<Document, LoadError> {
    let raw: RawNode = serde_json::from_str(json)?;
    if raw.kind != RawKind::Page {
        return Err(LoadError::RootNotPage(format!("{:?}", raw.kind)));
    }

    let mut ids = IdAllocator::new(&raw);
    let page_id = ids.id_for(&raw);
    let mut doc = Document::new(page_id);
    let root = doc.root;
    add_children(&mut doc, &mut ids, root, raw.children)?;

    log::debug!("loaded page {page_id} with {} nodes", doc.node_count() - 1);
    Ok(doc)
}

fn add_children(
    doc: &mut Document,
    ids: &mut IdAllocator,
    parent: NodeIndex,
    children: Vec<RawNode>,
) -> Result<(), LoadError> {
    for mut raw in children {
        let grandchildren = std::mem::take(&mut raw.children);
        let id = ids.id_for(&raw);
        if doc.id_index.contains_key(&id) {
            return Err(LoadError::DuplicateId(id.to_string()));
        }
        let idx = doc.add_node(parent, convert_node(id, raw));
        add_children(doc, ids, idx, grandchildren)?;
    }
    Ok(())
}

/// Names unnamed nodes `_{kind}_{n}`, counting per kind within one document.
///
/// Every explicit id in the tree is reserved before the first name is
/// handed out, so a generated id never collides with one the page uses.
struct IdAllocator {
    taken: HashSet<String>,
    next: HashMap<RawKind, u32>,
}

impl IdAllocator {
    fn new(root: &RawNode) -> Self {
        let mut taken = HashSet::new();
        reserve_ids(root, &mut taken);
        Self {
            taken,
            next: HashMap::new(),
        }
    }

    fn id_for(&mut self, raw: &RawNode) -> NodeId {
        if let Some(id) = &raw.id {
            return NodeId::intern(id);
        }
        let prefix = format!("{:?}", raw.kind).to_lowercase();
        let counter = self.next.entry(raw.kind).or_insert(0);
        loop {
            let candidate = format!("_{prefix}_{counter}");
            *counter += 1;
            if self.taken.insert(candidate.clone()) {
                return NodeId::intern(&candidate);
            }
        }
    }
}

fn reserve_ids(raw: &RawNode, taken: &mut HashSet<String>) {
    if let Some(id) = &raw.id {
        taken.insert(id.clone());
    }
    for child in &raw.children {
        reserve_ids(child, taken);
    }
}

fn convert_node(id: NodeId, raw: RawNode) -> SceneNode {
    let kind = match raw.kind {
        RawKind::Page => {
            log::warn!("nested PAGE node {id} treated as a group");
            NodeKind::Group
        }
        RawKind::Frame | RawKind::Component | RawKind::ComponentSet | RawKind::Instance => {
            NodeKind::Frame {
                layout: AutoLayout::new(
                    raw.layout_mode,
                    raw.item_spacing,
                    raw.counter_axis_sizing_mode,
                ),
            }
        }
        RawKind::Group | RawKind::BooleanOperation => NodeKind::Group,
        RawKind::Rectangle => NodeKind::Rectangle,
        RawKind::Ellipse => NodeKind::Ellipse,
        RawKind::Text => NodeKind::Text {
            characters: raw.characters,
        },
        RawKind::Vector | RawKind::Line | RawKind::Star | RawKind::Polygon => NodeKind::Vector,
        RawKind::Unknown => {
            log::debug!("unknown node type on {id}, treating as vector");
            NodeKind::Vector
        }
    };

    let paints: SmallVec<[Paint; 1]> = raw
        .strokes
        .iter()
        .map(|p| Paint {
            color: p.color.unwrap_or(Color::rgba(0.0, 0.0, 0.0, 1.0)),
            opacity: p.opacity.unwrap_or(1.0),
        })
        .collect();

    let corners = Corners {
        top_left: raw.top_left_radius,
        top_right: raw.top_right_radius,
        bottom_left: raw.bottom_left_radius,
        bottom_right: raw.bottom_right_radius,
    };
    let corner_radius = match raw.corner_radius {
        Some(RawRadius::Value(radius)) => CornerRadius::Uniform(radius),
        Some(RawRadius::Mixed(MixedMarker::Mixed)) => CornerRadius::PerCorner(corners),
        None if corners.is_unset() => CornerRadius::Unset,
        None => CornerRadius::PerCorner(corners),
    };

    SceneNode {
        id,
        kind,
        geometry: Geometry::new(raw.x, raw.y, raw.width, raw.height),
        stroke: Stroke {
            paints,
            weight: raw.stroke_weight,
            align: raw.stroke_align,
        },
        corner_radius,
        layout_align: raw.layout_align,
    }
}
