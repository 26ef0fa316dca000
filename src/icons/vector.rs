//! Inline vector-shape icons.
//!
//! Each role maps to a shape builder through a dispatch table, so adding a
//! role is a table edit rather than new branching logic. Shapes are built
//! around the origin; the dancer's group transform positions and orients
//! them. A facing direction of 0 points the icon's top edge away from the
//! viewer, which is the convention the shape art assumes.

use crate::types::{Node, Paint, Role};

use super::{IconConfig, IconFactory};

type Builder = fn(&IconConfig) -> Node;

const BUILDERS: &[(Role, Builder)] = &[
    (Role::Lead, lead),
    (Role::Trail, trail),
    (Role::Neutral, neutral),
];

/// Builds icons as inline vector geometry.
#[derive(Debug, Clone, Copy, Default)]
pub struct VectorIcons;

impl IconFactory for VectorIcons {
    fn icon(&self, role: Role, cfg: &IconConfig) -> Node {
        let builder = BUILDERS
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, b)| *b)
            .unwrap_or(neutral);
        builder(cfg)
    }
}

/// Square centered on the origin.
fn lead(cfg: &IconConfig) -> Node {
    Node::Rect {
        x: -cfg.size / 2.0,
        y: -cfg.size / 2.0,
        width: cfg.size,
        height: cfg.size,
        paint: Paint::default(),
    }
}

/// Circle centered on the origin.
fn trail(cfg: &IconConfig) -> Node {
    Node::Circle {
        cx: 0.0,
        cy: 0.0,
        r: cfg.size / 2.0,
        paint: Paint::default(),
    }
}

/// Square with rounded corners: four edges joined by quarter arcs, the
/// corner radius taken as a fraction of the icon size.
fn neutral(cfg: &IconConfig) -> Node {
    let r = cfg.corner_fraction * cfg.size;
    let right = cfg.size / 2.0;
    let bottom = cfg.size / 2.0;
    let left = -cfg.size / 2.0;
    let top = -cfg.size / 2.0;

    let d = [
        // top left corner
        format!("M {} {}", left, top + r),
        format!("A {r} {r} 0 0 1 {} {}", left + r, top),
        // top edge
        format!("H {}", right - r),
        // top right corner
        format!("A {r} {r} 0 0 1 {} {}", right, top + r),
        // right edge
        format!("V {}", bottom - r),
        // bottom right corner
        format!("A {r} {r} 0 0 1 {} {}", right - r, bottom),
        // bottom edge
        format!("H {}", left + r),
        // bottom left corner
        format!("A {r} {r} 0 0 1 {} {}", left, bottom - r),
        // closing the path supplies the left edge
        "Z".to_string(),
    ]
    .join(" ");

    Node::Path {
        d,
        paint: Paint::default(),
    }
}
