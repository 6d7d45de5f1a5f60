//! Design document model consumed by the classifiers.
//!
//! The document is a tree stored in a `StableDiGraph`: nodes are visual
//! elements (frames, shapes, groups, text) and edges go parent → child.
//! Classifiers only ever read it, through `NodeRef` views that carry the
//! document alongside the node index so parents and children can be looked up.

use crate::id::NodeId;
use petgraph::graph::NodeIndex;
use petgraph::stable_graph::StableDiGraph;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::HashMap;
use std::ops::Deref;

// ─── Geometry ────────────────────────────────────────────────────────────

/// Absolute position and size of a node, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Geometry {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
    }
}

// ─── Stroke ──────────────────────────────────────────────────────────────

/// RGBA color. Stored as 4 × f32 [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "opaque")]
    pub a: f32,
}

fn opaque() -> f32 {
    1.0
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// A stroke paint. Only the number of paints affects classification;
/// the color is kept for the color generator that runs alongside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    pub color: Color,
    #[serde(default = "opaque")]
    pub opacity: f32,
}

impl Paint {
    pub const fn solid(color: Color) -> Self {
        Self {
            color,
            opacity: 1.0,
        }
    }
}

/// Where the stroke sits relative to the node's boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StrokeAlign {
    #[default]
    Inside,
    Outside,
    Center,
}

/// A node's outline.
///
/// `weight` can be non-zero while `paints` is empty; callers must check
/// `has_paints()` before trusting it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub paints: SmallVec<[Paint; 1]>,
    pub weight: f32,
    pub align: StrokeAlign,
}

impl Stroke {
    pub fn new(paint: Paint, weight: f32, align: StrokeAlign) -> Self {
        let mut paints = SmallVec::new();
        paints.push(paint);
        Self {
            paints,
            weight,
            align,
        }
    }

    pub fn has_paints(&self) -> bool {
        !self.paints.is_empty()
    }

    /// How much the stroke grows the bounding box on each axis.
    /// Only OUTSIDE and CENTER strokes extend past the boundary.
    pub fn growth(&self) -> f32 {
        if !self.has_paints() {
            return 0.0;
        }
        match self.align {
            StrokeAlign::Inside => 0.0,
            StrokeAlign::Outside => self.weight * 2.0,
            StrokeAlign::Center => self.weight * 1.5,
        }
    }
}

// ─── Corner radius ───────────────────────────────────────────────────────

/// Independent per-corner radii. `None` means the corner is not set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Corners {
    pub top_left: Option<f32>,
    pub top_right: Option<f32>,
    pub bottom_left: Option<f32>,
    pub bottom_right: Option<f32>,
}

impl Corners {
    pub const fn new(top_left: f32, top_right: f32, bottom_left: f32, bottom_right: f32) -> Self {
        Self {
            top_left: Some(top_left),
            top_right: Some(top_right),
            bottom_left: Some(bottom_left),
            bottom_right: Some(bottom_right),
        }
    }

    pub fn is_unset(&self) -> bool {
        self.top_left.is_none()
            && self.top_right.is_none()
            && self.bottom_left.is_none()
            && self.bottom_right.is_none()
    }

    /// Corners paired with their class abbreviation, in emission order.
    pub fn labelled(&self) -> [(&'static str, Option<f32>); 4] {
        [
            ("tl", self.top_left),
            ("tr", self.top_right),
            ("bl", self.bottom_left),
            ("br", self.bottom_right),
        ]
    }
}

/// Corner radius: one value for every corner, or four independent ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum CornerRadius {
    #[default]
    Unset,
    Uniform(f32),
    PerCorner(Corners),
}

// ─── Auto layout ─────────────────────────────────────────────────────────

/// Direction a container arranges its children in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutMode {
    #[default]
    None,
    Horizontal,
    Vertical,
}

/// How a child is aligned on its parent's counter axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutAlign {
    #[default]
    Inherit,
    Stretch,
    Min,
    Center,
    Max,
}

/// Whether a container's counter-axis size is fixed or hugs its content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CounterAxisSizing {
    Fixed,
    #[default]
    Auto,
}

/// Auto-layout settings of a container node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AutoLayout {
    pub mode: LayoutMode,
    pub item_spacing: f32,
    pub counter_axis_sizing: CounterAxisSizing,
}

impl AutoLayout {
    pub const fn new(
        mode: LayoutMode,
        item_spacing: f32,
        counter_axis_sizing: CounterAxisSizing,
    ) -> Self {
        Self {
            mode,
            item_spacing,
            counter_axis_sizing,
        }
    }
}

// ─── Nodes ───────────────────────────────────────────────────────────────

/// The node kinds of a design document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeKind {
    /// Page-level root. Its children are top-level frames.
    Page,

    /// Frame, component or instance: the only kind carrying auto layout.
    Frame { layout: AutoLayout },

    /// Plain grouping of children, sized to their union.
    Group,

    Rectangle,

    /// Always classified as fully rounded.
    Ellipse,

    /// Vectors, lines, stars and polygons.
    Vector,

    Text { characters: String },
}

impl NodeKind {
    /// Auto-layout fields, for the kinds that expose them.
    pub fn auto_layout(&self) -> Option<&AutoLayout> {
        match self {
            NodeKind::Frame { layout } => Some(layout),
            _ => None,
        }
    }

    /// Layout direction, for the kinds that expose one.
    pub fn layout_mode(&self) -> Option<LayoutMode> {
        self.auto_layout().map(|l| l.mode)
    }
}

/// A single visual node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneNode {
    pub id: NodeId,
    pub kind: NodeKind,
    pub geometry: Geometry,
    pub stroke: Stroke,
    pub corner_radius: CornerRadius,

    /// Alignment inside an auto-layout parent.
    pub layout_align: LayoutAlign,
}

impl SceneNode {
    pub fn new(id: NodeId, kind: NodeKind) -> Self {
        Self {
            id,
            kind,
            geometry: Geometry::default(),
            stroke: Stroke::default(),
            corner_radius: CornerRadius::Unset,
            layout_align: LayoutAlign::Inherit,
        }
    }

    pub fn is_ellipse(&self) -> bool {
        matches!(self.kind, NodeKind::Ellipse)
    }

    pub fn is_page(&self) -> bool {
        matches!(self.kind, NodeKind::Page)
    }

    pub fn width(&self) -> f32 {
        self.geometry.width
    }

    pub fn height(&self) -> f32 {
        self.geometry.height
    }
}

// ─── Document ────────────────────────────────────────────────────────────

/// A design document: a tree of `SceneNode`s rooted at a page.
#[derive(Debug, Clone)]
pub struct Document {
    /// The underlying directed graph.
    pub graph: StableDiGraph<SceneNode, ()>,

    /// The page node.
    pub root: NodeIndex,

    /// Index from NodeId → NodeIndex for fast lookup.
    pub id_index: HashMap<NodeId, NodeIndex>,
}

impl Document {
    /// Create a document holding only a page node.
    #[must_use]
    pub fn new(page_id: NodeId) -> Self {
        let mut graph = StableDiGraph::new();
        let root = graph.add_node(SceneNode::new(page_id, NodeKind::Page));

        let mut id_index = HashMap::new();
        id_index.insert(page_id, root);

        Self {
            graph,
            root,
            id_index,
        }
    }

    /// Add a node as the last child of `parent`. Returns the new node's index.
    pub fn add_node(&mut self, parent: NodeIndex, node: SceneNode) -> NodeIndex {
        let id = node.id;
        let idx = self.graph.add_node(node);
        self.graph.add_edge(parent, idx, ());
        self.id_index.insert(id, idx);
        idx
    }

    /// Look up a node by its id.
    pub fn get_by_id(&self, id: NodeId) -> Option<&SceneNode> {
        self.id_index.get(&id).map(|idx| &self.graph[*idx])
    }

    /// Get the index for a NodeId.
    pub fn index_of(&self, id: NodeId) -> Option<NodeIndex> {
        self.id_index.get(&id).copied()
    }

    /// Get the parent index of a node.
    pub fn parent(&self, idx: NodeIndex) -> Option<NodeIndex> {
        self.graph
            .neighbors_directed(idx, petgraph::Direction::Incoming)
            .next()
    }

    /// Get children of a node in insertion order.
    ///
    /// Sorted by `NodeIndex` so the order does not depend on how `petgraph`
    /// walks its adjacency list. Indices only grow, so this is insertion order.
    pub fn children(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut children: Vec<NodeIndex> = self
            .graph
            .neighbors_directed(idx, petgraph::Direction::Outgoing)
            .collect();
        children.sort();
        children
    }

    /// Read-only view of a node with access to its relatives.
    pub fn node(&self, idx: NodeIndex) -> NodeRef<'_> {
        NodeRef { doc: self, idx }
    }

    /// Number of nodes, page included.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }
}

// ─── Node views ──────────────────────────────────────────────────────────

/// A borrowed node plus the document it lives in.
///
/// The parent link is a lookup, not ownership: nothing here can mutate
/// the document.
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    doc: &'a Document,
    idx: NodeIndex,
}

impl<'a> NodeRef<'a> {
    pub fn node(&self) -> &'a SceneNode {
        &self.doc.graph[self.idx]
    }

    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.doc.parent(self.idx).map(|idx| self.doc.node(idx))
    }

    pub fn children(&self) -> Vec<NodeRef<'a>> {
        self.doc
            .children(self.idx)
            .into_iter()
            .map(|idx| self.doc.node(idx))
            .collect()
    }

    /// Geometry of the parent, when there is one that exposes geometry.
    /// Pages do not.
    pub fn parent_geometry(&self) -> Option<Geometry> {
        self.parent()
            .filter(|p| !p.is_page())
            .map(|p| p.geometry)
    }

    /// Layout direction of the parent, when the parent exposes one.
    pub fn parent_layout_mode(&self) -> Option<LayoutMode> {
        self.parent().and_then(|p| p.kind.layout_mode())
    }

    pub fn parent_is_page(&self) -> bool {
        self.parent().is_some_and(|p| p.is_page())
    }
}

impl Deref for NodeRef<'_> {
    type Target = SceneNode;

    fn deref(&self) -> &SceneNode {
        self.node()
    }
}
