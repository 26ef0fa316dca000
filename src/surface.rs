//! Render surface collaborator.
//!
//! A surface is where a floor's drawable tree ends up: something with a
//! width, a height, and an append slot for child nodes. Surfaces are looked
//! up through a registry by an opaque string id, so several floors can
//! target several surfaces without sharing any state.

use std::collections::HashMap;

use crate::types::Node;

/// The drawing-surface contract the floor renders against. Width and height
/// are read-only from the core's perspective; the caller sizes the surface.
pub trait Surface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    /// Attach a finished drawable node as a child of this surface.
    fn append(&mut self, node: Node);
}

/// An in-memory surface: fixed dimensions, children kept in append order.
#[derive(Debug, Clone, PartialEq)]
pub struct BasicSurface {
    width: f64,
    height: f64,
    children: Vec<Node>,
}

impl BasicSurface {
    pub fn new(width: f64, height: f64) -> Self {
        BasicSurface {
            width,
            height,
            children: Vec::new(),
        }
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }
}

impl Surface for BasicSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn append(&mut self, node: Node) {
        self.children.push(node);
    }
}

/// Surfaces addressable by id. Lookup failure is reported by the floor as
/// `FloorError::SurfaceNotFound`; the registry itself just answers `None`.
#[derive(Debug, Default)]
pub struct SurfaceRegistry {
    surfaces: HashMap<String, BasicSurface>,
}

impl SurfaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a surface under an id, replacing any previous holder.
    pub fn insert(&mut self, id: impl Into<String>, surface: BasicSurface) {
        self.surfaces.insert(id.into(), surface);
    }

    pub fn get(&self, id: &str) -> Option<&BasicSurface> {
        self.surfaces.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut BasicSurface> {
        self.surfaces.get_mut(id)
    }
}
