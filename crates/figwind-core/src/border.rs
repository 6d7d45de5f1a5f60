//! Border width and border radius classes.
//!
//! <https://tailwindcss.com/docs/border-width>
//! <https://tailwindcss.com/docs/border-radius>

use crate::model::{CornerRadius, SceneNode};
use crate::scale::{BORDER_WIDTHS, nearest_value, px_to_radius};
use std::fmt::Write;

/// `border` / `border-N` for a node with a visible stroke.
///
/// Gated on the paint list: `weight` alone can be non-zero on a node
/// without strokes.
#[must_use]
pub fn border_width(node: &SceneNode) -> String {
    let stroke = &node.stroke;
    if !stroke.has_paints() || stroke.weight <= 0.0 {
        return String::new();
    }

    let nearest = nearest_value(stroke.weight, &BORDER_WIDTHS);
    if nearest == 1.0 {
        "border ".to_string()
    } else {
        format!("border-{nearest} ")
    }
}

/// `rounded*` classes for a node's corner radius.
///
/// Per-corner radii are snapped independently, so the output is coarser
/// than the design.
#[must_use]
pub fn border_radius(node: &SceneNode) -> String {
    if node.is_ellipse() {
        return "rounded-full ".to_string();
    }

    match node.corner_radius {
        CornerRadius::Unset => String::new(),
        CornerRadius::Uniform(radius) if radius == 0.0 => String::new(),
        CornerRadius::Uniform(radius) => format!("rounded{} ", px_to_radius(radius)),
        CornerRadius::PerCorner(corners) => {
            let mut out = String::new();
            for (label, radius) in corners.labelled() {
                if let Some(radius) = radius.filter(|r| *r != 0.0) {
                    let _ = write!(out, "rounded-{label}{} ", px_to_radius(radius));
                }
            }
            out
        }
    }
}
