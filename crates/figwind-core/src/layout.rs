//! Flex container classes for auto-layout frames.
//!
//! Maps an auto-layout frame onto `flex`/`inline-flex`, direction,
//! `space-*` and `items-center`.

use crate::config::ConvertConfig;
use crate::model::{LayoutAlign, LayoutMode, NodeRef};
use crate::scale::px_to_size;

/// Flex classes for an auto-layout container.
///
/// Returns an empty string for nodes without auto layout or with mode
/// `NONE`, and for containers whose single child already carries the
/// layout (a nested auto-layout frame, or a stretched child).
#[must_use]
pub fn flex_container(node: NodeRef<'_>, config: &ConvertConfig) -> String {
    let Some(layout) = node.kind.auto_layout() else {
        return String::new();
    };
    let (direction, axis) = match layout.mode {
        LayoutMode::None => return String::new(),
        LayoutMode::Horizontal => (if config.optimize { "" } else { "flex-row " }, 'x'),
        LayoutMode::Vertical => ("flex-col ", 'y'),
    };

    let children = node.children();
    if let [only] = children.as_slice() {
        let nested = only
            .kind
            .layout_mode()
            .is_some_and(|mode| mode != LayoutMode::None);
        if nested || only.layout_align == LayoutAlign::Stretch {
            log::trace!("flex suppressed on {}: single child carries layout", node.id);
            return String::new();
        }
    }

    let display = if node.parent_layout_mode() == Some(layout.mode) {
        "flex "
    } else {
        "inline-flex "
    };

    // Space between items is invisible with fewer than two children.
    let space = if config.optimize && children.len() < 2 {
        String::new()
    } else {
        format!("space-{axis}-{} ", px_to_size(layout.item_spacing))
    };

    // With every child stretched in a column, cross-axis alignment is moot.
    let align = if layout.mode == LayoutMode::Vertical
        && children.iter().all(|c| c.layout_align == LayoutAlign::Stretch)
    {
        ""
    } else {
        "items-center "
    };

    format!("{display}{direction}{space}{align}")
}
