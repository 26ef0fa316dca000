//! Shared boundary types for the dance floor renderer.
//!
//! This module defines the drawable contract between the geometry core and
//! whatever finally draws it:
//! - `Node` — an unattached drawable tree (groups, shapes, text)
//! - `Transform` — the affine operations a group node can carry
//! - `Role` — which icon shape represents a dancer

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Dancer roles
// ---------------------------------------------------------------------------

/// The role a dancer icon represents. Determines the icon shape only;
/// position and facing live on the dancer itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Lead,
    Trail,
    #[default]
    Neutral,
}

// ---------------------------------------------------------------------------
// Transforms
// ---------------------------------------------------------------------------

/// One affine operation applied to a group node. A group carries an ordered
/// list of these; they compose left to right, outermost first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Transform {
    Translate { dx: f64, dy: f64 },
    Rotate { degrees: f64 },
}

// ---------------------------------------------------------------------------
// Drawable node tree
// ---------------------------------------------------------------------------

/// An unattached, unpositioned drawable node. The geometry core builds these;
/// a surface accepts them as children; `svg` serializes them to markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    Group {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        transform: Vec<Transform>,
        children: Vec<Node>,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        #[serde(default)]
        paint: Paint,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        #[serde(default)]
        paint: Paint,
    },
    /// A closed outline given as SVG path data.
    Path {
        d: String,
        #[serde(default)]
        paint: Paint,
    },
    /// A symbol template referenced by name from an external resource.
    Use { href: String },
    /// Text centered on the current origin.
    Text { text: String },
}

/// Fill and stroke for a shape node. `None` means "not painted", matching
/// how icon builders leave fill to the dancer's color.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
}

impl Paint {
    pub fn new(fill: impl Into<String>, stroke: impl Into<String>) -> Self {
        Paint {
            fill: Some(fill.into()),
            stroke: Some(stroke.into()),
        }
    }

    /// Fill only, no stroke.
    pub fn filled(fill: impl Into<String>) -> Self {
        Paint {
            fill: Some(fill.into()),
            stroke: None,
        }
    }
}

impl Node {
    /// Apply fill and stroke to a shape node. Groups, symbol references and
    /// text carry no paint of their own and are returned unchanged.
    pub fn with_paint(mut self, new: Paint) -> Node {
        match &mut self {
            Node::Rect { paint, .. } | Node::Circle { paint, .. } | Node::Path { paint, .. } => {
                *paint = new;
            }
            Node::Group { .. } | Node::Use { .. } | Node::Text { .. } => {}
        }
        self
    }
}
