//! Icon factories — how a role becomes a shape.
//!
//! The geometry core is agnostic to what a dancer actually looks like; it
//! asks a factory for an unattached, unpositioned shape and composes it into
//! the dancer's group. Two strategies exist: inline vector shapes
//! (`VectorIcons`) and references to pre-defined symbol templates
//! (`SymbolIcons`).

mod symbol;
mod vector;

pub use symbol::SymbolIcons;
pub use vector::VectorIcons;

use crate::types::{Node, Role};

/// Shape parameters shared by every icon builder. Derived from the floor's
/// drawing configuration at render time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconConfig {
    /// Icon edge length / diameter, in surface units.
    pub size: f64,
    /// Radius of the facing marker drawn at the icon's leading edge.
    pub nose_radius: f64,
    /// How much of the outline is rounded for the neutral icon, as a
    /// fraction of `size`.
    pub corner_fraction: f64,
}

/// Produces an unattached, unpositioned drawable shape for a role.
pub trait IconFactory {
    fn icon(&self, role: Role, cfg: &IconConfig) -> Node;
}
