//! Formation source files — the human-authored description of a floor.
//!
//! A formation file names the target surface, optional drawing-parameter
//! overrides, and the dancers with their grid positions. `build` turns one
//! into a ready-to-render floor plus a registry holding its surface.

use serde::{Deserialize, Serialize};

use crate::error::FloorError;
use crate::icons::SymbolIcons;
use crate::surface::{BasicSurface, SurfaceRegistry};
use crate::types::Role;

use super::{Dancer, Floor, FloorConfig};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormationSource {
    pub surface: SurfaceSpec,
    #[serde(default)]
    pub config: FloorConfig,
    /// When set, dancers are drawn as references into this symbol resource
    /// instead of inline vector shapes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_resource: Option<String>,
    pub dancers: Vec<DancerSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfaceSpec {
    pub id: String,
    pub width: f64,
    pub height: f64,
}

fn default_color() -> String {
    "white".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DancerSpec {
    pub x: f64,
    pub y: f64,
    /// Facing in quarter turns, 0 = away from the viewer.
    #[serde(default)]
    pub direction: f64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub label: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default = "default_color")]
    pub color: String,
}

impl DancerSpec {
    fn to_dancer(&self) -> Dancer {
        Dancer::new(self.x, self.y, self.direction)
            .label(self.label.clone())
            .role(self.role)
            .color(self.color.clone())
    }
}

impl FormationSource {
    /// Build the floor and a registry containing its surface.
    pub fn build(&self) -> Result<(Floor, SurfaceRegistry), FloorError> {
        let dancers: Vec<Dancer> = self.dancers.iter().map(DancerSpec::to_dancer).collect();
        let floor = match &self.icon_resource {
            Some(resource) => Floor::with_icons(
                dancers,
                self.config.clone(),
                Box::new(SymbolIcons::new(resource.clone())),
            ),
            None => Floor::new(dancers, self.config.clone()),
        }?;

        let mut registry = SurfaceRegistry::new();
        registry.insert(
            self.surface.id.as_str(),
            BasicSurface::new(self.surface.width, self.surface.height),
        );
        Ok((floor, registry))
    }
}
