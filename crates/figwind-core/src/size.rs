//! Width and height classes.
//!
//! Sizes are inferred from the node's own geometry, its parent's geometry
//! and its children's strokes. Rules run in precedence order; the first
//! three short-circuit to no size at all, the rest refine a `w-*`/`h-*`
//! pair until the final auto-layout filter decides which axes survive.

use crate::model::{CounterAxisSizing, LayoutAlign, LayoutMode, NodeRef, StrokeAlign};
use crate::scale::px_to_size;
use std::fmt;

/// Above this width a page-level node is left unsized.
pub const PAGE_FREE_WIDTH: f32 = 400.0;

/// Largest px value the size scale can express (`w-64`).
pub const SCALE_MAX: f32 = 256.0;

/// Two sizes closer than this are treated as equal.
pub const NEAR_EQUAL: f32 = 2.0;

/// Allowed deviation of `parent / node` from 2 for `w-1/2`.
pub const HALF_TOLERANCE: f32 = 0.01;

/// Distance from the parent's edge that still counts as "at the edge".
pub const MAGIC_MARGIN: f32 = 32.0;

/// Share of the parent a node must cover to be stretched to full.
pub const COVERAGE: f32 = 0.8;

/// A width or height decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SizeClass {
    /// A bucket from the size scale: `w-16`.
    Fixed(&'static str),
    /// `w-full`.
    Full,
    /// `w-1/2`.
    Half,
    /// Let the browser decide: no class.
    Auto,
}

/// A `SizeClass` bound to its axis prefix (`w` or `h`), ready to print.
struct Axis(char, SizeClass);

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Axis(prefix, class) = self;
        match class {
            SizeClass::Fixed(bucket) => write!(f, "{prefix}-{bucket} "),
            SizeClass::Full => write!(f, "{prefix}-full "),
            SizeClass::Half => write!(f, "{prefix}-1/2 "),
            SizeClass::Auto => Ok(()),
        }
    }
}

/// Node size grown to fit OUTSIDE/CENTER strokes, its own and its children's.
///
/// Tailwind borders are always drawn inside, so strokes that extend past
/// the boundary are folded into the size instead. Growth per child is
/// applied once per axis and never revisited.
pub fn size_with_strokes(node: NodeRef<'_>) -> (f32, f32) {
    let own = node.stroke.growth();
    let mut width = node.width() + own;
    let mut height = node.height() + own;

    for child in node.children() {
        let stroke = &child.stroke;
        if !stroke.has_paints() || stroke.align == StrokeAlign::Inside {
            continue;
        }
        let growth = stroke.growth();
        if width < child.width() + growth {
            width += growth;
        }
        if height < child.height() + growth {
            height += growth;
        }
    }

    (width, height)
}

/// Width and height classes for a node.
#[must_use]
pub fn container_size(node: NodeRef<'_>) -> String {
    let own_mode = node.kind.layout_mode();
    let parent_mode = node.parent_layout_mode();

    // Page-level content wider than the scale is left to flow.
    if node.parent_is_page() && node.width() > PAGE_FREE_WIDTH {
        return String::new();
    }

    // Stretched inside a same-direction flex parent: size comes from the parent.
    if node.layout_align == LayoutAlign::Stretch
        && own_mode.is_some()
        && parent_mode.is_some()
        && own_mode == parent_mode
    {
        return String::new();
    }

    // Same-axis nesting: the parent's direction already sizes this axis.
    if let (Some(own), Some(parent)) = (own_mode, parent_mode)
        && own != LayoutMode::None
        && own == parent
    {
        return String::new();
    }

    let (node_width, node_height) = size_with_strokes(node);
    let mut width = SizeClass::Fixed(px_to_size(node_width));
    let mut height = SizeClass::Fixed(px_to_size(node_height));

    let children = node.children();

    // Both node and content are past the end of the scale.
    if node.width() > SCALE_MAX && children.iter().any(|c| c.width() > SCALE_MAX) {
        width = SizeClass::Full;
    }

    let parent = node.parent_geometry();
    if let Some(parent) = parent {
        if parent.width - node.width() <= NEAR_EQUAL {
            width = SizeClass::Full;
        }

        // h-full misbehaves in small layouts; prefer auto height at large sizes.
        if parent.height - node.height() <= NEAR_EQUAL && node.height() > SCALE_MAX {
            height = SizeClass::Auto;
        }

        if (parent.width / node.width() - 2.0).abs() < HALF_TOLERANCE {
            width = SizeClass::Half;
        }
    }

    // A single child filling the node already sizes it.
    if let [only] = children.as_slice()
        && width != SizeClass::Half
        && only.width() == node.width()
        && only.height() == node.height()
    {
        return String::new();
    }

    if let Some(parent) = parent {
        if reaches_edges(node.geometry.x, parent.x, node_width, parent.width) {
            width = SizeClass::Full;
        }
        if reaches_edges(node.geometry.y, parent.y, node_height, parent.height) {
            height = SizeClass::Full;
        }
    }

    let (width, height) = match node.kind.auto_layout() {
        None => (width, height),
        Some(layout) => match (layout.counter_axis_sizing, layout.mode) {
            // Auto layout sizes the primary axis itself.
            (CounterAxisSizing::Fixed, LayoutMode::Horizontal) => (SizeClass::Auto, height),
            (CounterAxisSizing::Fixed, LayoutMode::Vertical) => (width, SizeClass::Auto),
            (CounterAxisSizing::Fixed, LayoutMode::None) => (width, height),
            // An explicit fraction is never safe to drop.
            (CounterAxisSizing::Auto, _) if width == SizeClass::Half => (width, SizeClass::Auto),
            (CounterAxisSizing::Auto, _) => (SizeClass::Auto, SizeClass::Auto),
        },
    };

    format!("{}{}", Axis('w', width), Axis('h', height))
}

/// Whether a node starting near its parent's origin on one axis covers
/// nearly all of it, leaving exactly room for a margin on both sides.
///
/// The last two checks only hold together when the gap is exactly two
/// margins.
fn reaches_edges(start: f32, parent_start: f32, extent: f32, parent_extent: f32) -> bool {
    start - parent_start <= MAGIC_MARGIN
        && extent / parent_extent >= COVERAGE
        && extent + 2.0 * MAGIC_MARGIN >= parent_extent
        && parent_extent - extent >= 2.0 * MAGIC_MARGIN
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::NodeId;
    use crate::model::*;
    use petgraph::graph::NodeIndex;
    use pretty_assertions::assert_eq;

    fn shape(name: &str, geometry: Geometry) -> SceneNode {
        let mut node = SceneNode::new(NodeId::intern(name), NodeKind::Rectangle);
        node.geometry = geometry;
        node
    }

    fn auto_frame(name: &str, geometry: Geometry, layout: AutoLayout) -> SceneNode {
        let mut node = SceneNode::new(NodeId::intern(name), NodeKind::Frame { layout });
        node.geometry = geometry;
        node
    }

    fn stroke(weight: f32, align: StrokeAlign) -> Stroke {
        Stroke::new(Paint::solid(Color::rgba(0.0, 0.0, 0.0, 1.0)), weight, align)
    }

    /// Page → group `parent` of the given geometry.
    fn with_parent(parent: Geometry) -> (Document, NodeIndex) {
        let mut doc = Document::new(NodeId::intern("page"));
        let idx = doc.add_node(doc.root, shape("parent", parent));
        doc.graph[idx].kind = NodeKind::Group;
        (doc, idx)
    }

    #[test]
    fn plain_shape_gets_both_axes() {
        let (mut doc, parent) = with_parent(Geometry::new(0.0, 0.0, 600.0, 600.0));
        let idx = doc.add_node(parent, shape("box", Geometry::new(100.0, 100.0, 64.0, 32.0)));
        assert_eq!(container_size(doc.node(idx)), "w-16 h-8 ");
    }

    #[test]
    fn wide_page_level_node_is_unsized() {
        let mut doc = Document::new(NodeId::intern("page"));
        let wide = doc.add_node(doc.root, shape("wide", Geometry::new(0.0, 0.0, 401.0, 100.0)));
        let narrow = doc.add_node(doc.root, shape("narrow", Geometry::new(0.0, 0.0, 400.0, 100.0)));
        assert_eq!(container_size(doc.node(wide)), "");
        assert_eq!(container_size(doc.node(narrow)), "w-64 h-24 ");
    }

    #[test]
    fn stretched_in_same_direction_parent_is_unsized() {
        let mut doc = Document::new(NodeId::intern("page"));
        let layout = AutoLayout::new(LayoutMode::None, 0.0, CounterAxisSizing::Fixed);
        let outer = auto_frame("outer", Geometry::new(0.0, 0.0, 300.0, 300.0), layout);
        let outer = doc.add_node(doc.root, outer);
        let mut inner = auto_frame("inner", Geometry::new(0.0, 0.0, 100.0, 100.0), layout);
        inner.layout_align = LayoutAlign::Stretch;
        let inner = doc.add_node(outer, inner);
        assert_eq!(container_size(doc.node(inner)), "");
    }

    #[test]
    fn same_axis_nesting_is_unsized() {
        let mut doc = Document::new(NodeId::intern("page"));
        let row = AutoLayout::new(LayoutMode::Horizontal, 0.0, CounterAxisSizing::Fixed);
        let outer = auto_frame("outer", Geometry::new(0.0, 0.0, 300.0, 100.0), row);
        let outer = doc.add_node(doc.root, outer);
        let inner = auto_frame("inner", Geometry::new(0.0, 0.0, 100.0, 50.0), row);
        let inner = doc.add_node(outer, inner);
        assert_eq!(container_size(doc.node(inner)), "");
    }

    #[test]
    fn outside_and_center_strokes_grow_the_node() {
        let (mut doc, parent) = with_parent(Geometry::new(0.0, 0.0, 600.0, 600.0));
        let mut outside = shape("outside", Geometry::new(100.0, 100.0, 60.0, 60.0));
        outside.stroke = stroke(2.0, StrokeAlign::Outside);
        let outside = doc.add_node(parent, outside);
        assert_eq!(size_with_strokes(doc.node(outside)), (64.0, 64.0));
        assert_eq!(container_size(doc.node(outside)), "w-16 h-16 ");

        let mut center = shape("center", Geometry::new(100.0, 100.0, 60.0, 60.0));
        center.stroke = stroke(4.0, StrokeAlign::Center);
        let center = doc.add_node(parent, center);
        assert_eq!(size_with_strokes(doc.node(center)), (66.0, 66.0));

        let mut inside = shape("inside", Geometry::new(100.0, 100.0, 60.0, 60.0));
        inside.stroke = stroke(4.0, StrokeAlign::Inside);
        let inside = doc.add_node(parent, inside);
        assert_eq!(size_with_strokes(doc.node(inside)), (60.0, 60.0));
    }

    #[test]
    fn child_strokes_past_the_boundary_grow_the_parent() {
        let (mut doc, parent) = with_parent(Geometry::new(0.0, 0.0, 600.0, 600.0));
        let mut group = shape("group", Geometry::new(100.0, 100.0, 40.0, 40.0));
        group.kind = NodeKind::Group;
        let group = doc.add_node(parent, group);

        let mut big = shape("big", Geometry::new(100.0, 100.0, 40.0, 20.0));
        big.stroke = stroke(2.0, StrokeAlign::Outside);
        doc.add_node(group, big);

        // Only the width overflows: 40 < 40 + 4, but 40 >= 20 + 4.
        assert_eq!(size_with_strokes(doc.node(group)), (44.0, 40.0));
    }

    #[test]
    fn child_growth_is_not_revisited() {
        let (mut doc, parent) = with_parent(Geometry::new(0.0, 0.0, 600.0, 600.0));
        let mut group = shape("group", Geometry::new(100.0, 100.0, 40.0, 40.0));
        group.kind = NodeKind::Group;
        let group = doc.add_node(parent, group);

        for name in ["first", "second"] {
            let mut child = shape(name, Geometry::new(100.0, 100.0, 40.0, 40.0));
            child.stroke = stroke(2.0, StrokeAlign::Center);
            doc.add_node(group, child);
        }

        // First child: 40 < 43 grows to 43. Second: 43 < 43 fails.
        assert_eq!(size_with_strokes(doc.node(group)), (43.0, 43.0));
    }

    #[test]
    fn child_without_paints_does_not_grow_parent() {
        let (mut doc, parent) = with_parent(Geometry::new(0.0, 0.0, 600.0, 600.0));
        let mut group = shape("group", Geometry::new(100.0, 100.0, 40.0, 40.0));
        group.kind = NodeKind::Group;
        let group = doc.add_node(parent, group);

        let mut ghost = shape("ghost", Geometry::new(100.0, 100.0, 40.0, 40.0));
        ghost.stroke.weight = 10.0;
        ghost.stroke.align = StrokeAlign::Outside;
        doc.add_node(group, ghost);

        assert_eq!(size_with_strokes(doc.node(group)), (40.0, 40.0));
    }

    #[test]
    fn oversized_node_with_oversized_child_is_full_width() {
        let (mut doc, parent) = with_parent(Geometry::new(0.0, 0.0, 1000.0, 1000.0));
        let mut group = shape("group", Geometry::new(500.0, 500.0, 300.0, 100.0));
        group.kind = NodeKind::Group;
        let group = doc.add_node(parent, group);
        doc.add_node(group, shape("wide", Geometry::new(500.0, 500.0, 280.0, 40.0)));
        doc.add_node(group, shape("small", Geometry::new(500.0, 540.0, 20.0, 40.0)));

        assert_eq!(container_size(doc.node(group)), "w-full h-24 ");
    }

    #[test]
    fn near_parent_width_is_full() {
        let (mut doc, parent) = with_parent(Geometry::new(0.0, 0.0, 802.0, 1000.0));
        let idx = doc.add_node(parent, shape("banner", Geometry::new(500.0, 500.0, 800.0, 40.0)));
        assert_eq!(container_size(doc.node(idx)), "w-full h-10 ");
    }

    #[test]
    fn near_parent_height_drops_large_height() {
        let (mut doc, parent) = with_parent(Geometry::new(0.0, 0.0, 1000.0, 601.0));
        let tall = doc.add_node(parent, shape("tall", Geometry::new(500.0, 100.0, 100.0, 600.0)));
        assert_eq!(container_size(doc.node(tall)), "w-24 ");

        let (mut doc, parent) = with_parent(Geometry::new(0.0, 0.0, 1000.0, 201.0));
        let short = doc.add_node(parent, shape("short", Geometry::new(500.0, 100.0, 100.0, 200.0)));
        assert_eq!(container_size(doc.node(short)), "w-24 h-48 ");
    }

    #[test]
    fn half_parent_width_is_half() {
        let (mut doc, parent) = with_parent(Geometry::new(0.0, 0.0, 801.0, 1000.0));
        let idx = doc.add_node(parent, shape("column", Geometry::new(400.0, 500.0, 400.0, 40.0)));
        assert_eq!(container_size(doc.node(idx)), "w-1/2 h-10 ");
    }

    #[test]
    fn half_overrides_near_equal_full() {
        // parent - node <= 2 and parent / node == 2 both hold for a 2px node.
        let (mut doc, parent) = with_parent(Geometry::new(0.0, 0.0, 4.0, 100.0));
        let idx = doc.add_node(parent, shape("sliver", Geometry::new(1.0, 50.0, 2.0, 8.0)));
        assert_eq!(container_size(doc.node(idx)), "w-1/2 h-2 ");
    }

    #[test]
    fn single_child_filling_node_is_unsized() {
        let (mut doc, parent) = with_parent(Geometry::new(0.0, 0.0, 1000.0, 1000.0));
        let mut wrapper = shape("wrapper", Geometry::new(500.0, 500.0, 120.0, 48.0));
        wrapper.kind = NodeKind::Group;
        let wrapper = doc.add_node(parent, wrapper);
        doc.add_node(wrapper, shape("fill", Geometry::new(500.0, 500.0, 120.0, 48.0)));
        assert_eq!(container_size(doc.node(wrapper)), "");
    }

    #[test]
    fn single_child_filling_half_width_node_keeps_half() {
        let (mut doc, parent) = with_parent(Geometry::new(0.0, 0.0, 240.0, 1000.0));
        let mut wrapper = shape("wrapper", Geometry::new(120.0, 500.0, 120.0, 48.0));
        wrapper.kind = NodeKind::Group;
        let wrapper = doc.add_node(parent, wrapper);
        doc.add_node(wrapper, shape("fill", Geometry::new(120.0, 500.0, 120.0, 48.0)));
        assert_eq!(container_size(doc.node(wrapper)), "w-1/2 h-12 ");
    }

    #[test]
    fn node_near_corner_covering_parent_is_full() {
        let (mut doc, parent) = with_parent(Geometry::new(0.0, 0.0, 500.0, 500.0));
        let idx = doc.add_node(parent, shape("panel", Geometry::new(20.0, 20.0, 436.0, 436.0)));
        assert_eq!(container_size(doc.node(idx)), "w-full h-full ");
    }

    #[test]
    fn near_corner_rule_is_per_axis() {
        let (mut doc, parent) = with_parent(Geometry::new(0.0, 0.0, 500.0, 500.0));
        // Close to the left edge, far from the top.
        let idx = doc.add_node(parent, shape("strip", Geometry::new(20.0, 100.0, 436.0, 436.0)));
        assert_eq!(container_size(doc.node(idx)), "w-full h-64 ");
    }

    #[test]
    fn near_corner_needs_room_for_margins() {
        let (mut doc, parent) = with_parent(Geometry::new(0.0, 0.0, 500.0, 500.0));
        // Covers 90% but leaves only 50px: less than two margins.
        let idx = doc.add_node(parent, shape("snug", Geometry::new(10.0, 300.0, 450.0, 40.0)));
        assert_eq!(container_size(doc.node(idx)), "w-64 h-10 ");
    }

    #[test]
    fn fixed_horizontal_frame_emits_height_only() {
        let (mut doc, parent) = with_parent(Geometry::new(0.0, 0.0, 1000.0, 1000.0));
        let layout = AutoLayout::new(LayoutMode::Horizontal, 8.0, CounterAxisSizing::Fixed);
        let bar = auto_frame("bar", Geometry::new(500.0, 500.0, 200.0, 48.0), layout);
        let idx = doc.add_node(parent, bar);
        assert_eq!(container_size(doc.node(idx)), "h-12 ");
    }

    #[test]
    fn fixed_vertical_frame_emits_width_only() {
        let (mut doc, parent) = with_parent(Geometry::new(0.0, 0.0, 1000.0, 1000.0));
        let layout = AutoLayout::new(LayoutMode::Vertical, 8.0, CounterAxisSizing::Fixed);
        let list = auto_frame("list", Geometry::new(500.0, 500.0, 200.0, 48.0), layout);
        let idx = doc.add_node(parent, list);
        assert_eq!(container_size(doc.node(idx)), "w-48 ");
    }

    #[test]
    fn fixed_frame_without_direction_emits_both() {
        let (mut doc, parent) = with_parent(Geometry::new(0.0, 0.0, 1000.0, 1000.0));
        let layout = AutoLayout::new(LayoutMode::None, 0.0, CounterAxisSizing::Fixed);
        let card = auto_frame("card", Geometry::new(500.0, 500.0, 200.0, 48.0), layout);
        let idx = doc.add_node(parent, card);
        assert_eq!(container_size(doc.node(idx)), "w-48 h-12 ");
    }

    #[test]
    fn auto_sized_frame_emits_only_half_width() {
        let (mut doc, parent) = with_parent(Geometry::new(0.0, 0.0, 1000.0, 1000.0));
        let layout = AutoLayout::new(LayoutMode::Vertical, 8.0, CounterAxisSizing::Auto);
        let hug = auto_frame("hug", Geometry::new(500.0, 500.0, 200.0, 48.0), layout);
        let hug = doc.add_node(parent, hug);
        assert_eq!(container_size(doc.node(hug)), "");

        let half = auto_frame("half", Geometry::new(500.0, 500.0, 500.0, 48.0), layout);
        let half = doc.add_node(parent, half);
        assert_eq!(container_size(doc.node(half)), "w-1/2 ");
    }

    #[test]
    fn zero_width_node_does_not_panic() {
        let (mut doc, parent) = with_parent(Geometry::new(0.0, 0.0, 1000.0, 1000.0));
        let idx = doc.add_node(parent, shape("line", Geometry::new(500.0, 500.0, 0.0, 40.0)));
        assert_eq!(container_size(doc.node(idx)), "w-0 h-10 ");
    }
}
