//! A single dancer: position, facing, and drawable geometry.
//!
//! Grid coordinates are small numbers (typically 1–8) describing where a
//! dancer stands; the floor scales them by its icon spacing when drawing.
//! The floor's Y axis ascends down the page, opposite the cartesian plane,
//! which is why `revolve` flips the sign of the Y delta.

use std::f64::consts::PI;

use crate::error::FloorError;
use crate::types::{Node, Paint, Role, Transform};

use super::Floor;

/// One positioned, directed, labeled entity on a floor.
///
/// `direction` counts quarter turns ("walls"): 0 faces away from the viewer,
/// each increment turns one wall in promenade direction. It is kept in
/// `[0, 4)` but is not necessarily an integer — revolving by a fractional
/// angle leaves a fractional facing, and the drawing math accepts it.
#[derive(Debug, Clone, PartialEq)]
pub struct Dancer {
    pub x: f64,
    pub y: f64,
    pub direction: f64,
    pub label: String,
    pub role: Role,
    pub color: String,
    pub(super) placement: Option<u32>,
}

impl Dancer {
    pub fn new(x: f64, y: f64, direction: f64) -> Self {
        Dancer {
            x,
            y,
            direction,
            label: String::new(),
            role: Role::Neutral,
            color: "white".to_string(),
            placement: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// The per-floor index assigned when this dancer was placed, or `None`
    /// for a dancer that has never been on a floor.
    pub fn placement(&self) -> Option<u32> {
        self.placement
    }

    /// Revolve this dancer around `(center_x, center_y)` by `angle` walls in
    /// promenade direction. Position and facing both change; a dancer
    /// revolving about its own position only turns in place.
    pub fn revolve(&mut self, center_x: f64, center_y: f64, angle: f64) {
        let delta_x = self.x - center_x;
        let delta_y = self.y - center_y;
        let radians = 2.0 * PI * angle / 4.0;
        let (sin, cos) = radians.sin_cos();
        // Dancer coordinates are the opposite handedness from the cartesian
        // plane (Y ascends down the page), so the Y delta changes sign.
        let revolved_x = delta_x * cos + delta_y * sin;
        let revolved_y = -delta_x * sin + delta_y * cos;
        self.x = center_x + revolved_x;
        self.y = center_y + revolved_y;
        self.direction = (self.direction + angle).rem_euclid(4.0);
    }

    /// The globally unique render-node id for this dancer:
    /// `"{surface_id}:{placement}"`. Requires the dancer to be placed,
    /// `floor` to be the floor holding it (call this on the dancer borrowed
    /// from `floor.dancers()`, not on a detached copy), and the floor to
    /// have been rendered at least once.
    pub fn identifier(&self, floor: &Floor) -> Result<String, FloorError> {
        let placement = self.placement.ok_or(FloorError::NotPlaced)?;
        let on_this_floor = floor
            .dancers()
            .get(placement as usize)
            .is_some_and(|d| std::ptr::eq(d, self));
        if !on_this_floor {
            return Err(FloorError::InvalidArgument(format!(
                "dancer {:?} is not on this floor",
                self.label
            )));
        }
        let surface_id = floor.surface_id().ok_or(FloorError::NotRendered)?;
        Ok(format!("{surface_id}:{placement}"))
    }

    /// Build this dancer's drawable group: icon shape, facing marker, and
    /// centered label, positioned by grid coordinates and oriented by
    /// facing direction. The caller attaches the result to a parent node.
    pub fn drawable(&self, floor: &Floor) -> Result<Node, FloorError> {
        let id = self.identifier(floor)?;
        let spacing = floor.config().spacing();
        let icon_cfg = floor.icon_config();

        let shape = floor
            .icons()
            .icon(self.role, &icon_cfg)
            .with_paint(Paint::new(self.color.clone(), "black"));

        // Facing marker at the icon's leading edge.
        let nose = Node::Circle {
            cx: 0.0,
            cy: -icon_cfg.size / 2.0,
            r: icon_cfg.nose_radius,
            paint: Paint::filled("black"),
        };

        let label = Node::Text {
            text: self.label.clone(),
        };

        Ok(Node::Group {
            id: Some(id),
            transform: vec![
                Transform::Translate {
                    dx: self.x * spacing,
                    dy: self.y * spacing,
                },
                // 180° offset orients direction 0 to face away from the
                // viewer, matching the icon art.
                Transform::Rotate {
                    degrees: 180.0 - self.direction * 90.0,
                },
            ],
            children: vec![shape, nose, label],
        })
    }
}
