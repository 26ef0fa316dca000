//! Dance floor renderer.
//!
//! Renders labeled dancer icons on a 2D floor and rotates groups of them
//! around a common pivot — a visualization helper for square and round
//! dance formations. Given abstract grid coordinates and facing directions
//! it computes render-space transforms and produces drawable icon geometry.
//!
//! The pipeline is flat: construct [`floor::Dancer`]s, place them on a
//! [`floor::Floor`], register a [`surface::BasicSurface`] under an id, and
//! render. [`svg::document`] turns the resulting node tree into markup.

pub mod error;
pub mod floor;
pub mod icons;
pub mod surface;
pub mod svg;
pub mod types;
