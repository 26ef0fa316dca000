//! The floor — shared coordinate space and rendering context for a fixed
//! group of dancers.
//!
//! A floor is built once from its dancers (placement is a one-time,
//! irreversible binding), renders them onto a registered surface, and can
//! rotate any subset of them rigidly around the subset's centroid.

pub mod dancer;
pub mod formation;

pub use dancer::Dancer;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::FloorError;
use crate::icons::{IconConfig, IconFactory, VectorIcons};
use crate::surface::{Surface, SurfaceRegistry};
use crate::types::{Node, Transform};

// ---------------------------------------------------------------------------
// Drawing configuration
// ---------------------------------------------------------------------------

fn default_icon_size() -> f64 {
    20.0
}

fn default_nose_radius() -> f64 {
    3.0
}

fn default_corner_fraction() -> f64 {
    0.3
}

/// Drawing parameters shared by every dancer on a floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorConfig {
    /// Icon edge length / diameter, in surface units.
    #[serde(default = "default_icon_size")]
    pub icon_size: f64,
    /// Distance between dancer centers. Defaults to `icon_size * 1.3`
    /// when not set explicitly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_spacing: Option<f64>,
    /// Radius of the facing marker.
    #[serde(default = "default_nose_radius")]
    pub nose_radius: f64,
    /// How much of the neutral icon's outline is rounded, as a fraction of
    /// the icon size.
    #[serde(default = "default_corner_fraction")]
    pub corner_fraction: f64,
}

impl Default for FloorConfig {
    fn default() -> Self {
        FloorConfig {
            icon_size: default_icon_size(),
            icon_spacing: None,
            nose_radius: default_nose_radius(),
            corner_fraction: default_corner_fraction(),
        }
    }
}

impl FloorConfig {
    /// Spacing between dancer centers (not perimeters).
    pub fn spacing(&self) -> f64 {
        self.icon_spacing.unwrap_or(self.icon_size * 1.3)
    }

    fn validate(&self) -> Result<(), FloorError> {
        if !(self.icon_size > 0.0) {
            return Err(FloorError::InvalidArgument(format!(
                "icon_size must be positive, got {}",
                self.icon_size
            )));
        }
        if !(self.spacing() > 0.0) {
            return Err(FloorError::InvalidArgument(format!(
                "icon_spacing must be positive, got {}",
                self.spacing()
            )));
        }
        if !(self.nose_radius > 0.0) {
            return Err(FloorError::InvalidArgument(format!(
                "nose_radius must be positive, got {}",
                self.nose_radius
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Dancer selection
// ---------------------------------------------------------------------------

/// Names one dancer on a floor: either directly by placement index or by
/// label. Labels resolve to the first-inserted match; duplicate labels are
/// an accepted ambiguity, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DancerRef {
    Index(usize),
    Label(String),
}

impl DancerRef {
    fn describe(&self) -> String {
        match self {
            DancerRef::Index(i) => format!("#{i}"),
            DancerRef::Label(l) => l.clone(),
        }
    }
}

impl From<usize> for DancerRef {
    fn from(i: usize) -> Self {
        DancerRef::Index(i)
    }
}

impl From<&str> for DancerRef {
    fn from(label: &str) -> Self {
        DancerRef::Label(label.to_string())
    }
}

impl From<String> for DancerRef {
    fn from(label: String) -> Self {
        DancerRef::Label(label)
    }
}

// ---------------------------------------------------------------------------
// Floor
// ---------------------------------------------------------------------------

/// A fixed group of dancers sharing one coordinate space and one set of
/// drawing parameters.
pub struct Floor {
    dancers: Vec<Dancer>,
    config: FloorConfig,
    icons: Box<dyn IconFactory>,
    surface_id: Option<String>,
}

impl std::fmt::Debug for Floor {
    // Manual because the icon factory is a trait object.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Floor")
            .field("dancers", &self.dancers)
            .field("config", &self.config)
            .field("surface_id", &self.surface_id)
            .finish_non_exhaustive()
    }
}

impl Floor {
    /// Place `dancers` on a new floor drawing inline vector icons.
    ///
    /// Placement assigns each dancer its per-floor identifier in insertion
    /// order and is irreversible: a dancer already placed on some floor is
    /// rejected. An empty floor is rejected too, since its extent is
    /// undefined.
    pub fn new(dancers: Vec<Dancer>, config: FloorConfig) -> Result<Self, FloorError> {
        Self::with_icons(dancers, config, Box::new(VectorIcons))
    }

    /// Like [`Floor::new`] with an explicit icon strategy.
    pub fn with_icons(
        mut dancers: Vec<Dancer>,
        config: FloorConfig,
        icons: Box<dyn IconFactory>,
    ) -> Result<Self, FloorError> {
        if dancers.is_empty() {
            return Err(FloorError::InvalidArgument(
                "a floor needs at least one dancer".to_string(),
            ));
        }
        config.validate()?;
        for (i, d) in dancers.iter_mut().enumerate() {
            if d.placement.is_some() {
                return Err(FloorError::InvalidArgument(format!(
                    "dancer {:?} is already placed on a floor",
                    d.label
                )));
            }
            d.placement = Some(i as u32);
        }
        Ok(Floor {
            dancers,
            config,
            icons,
            surface_id: None,
        })
    }

    pub fn dancers(&self) -> &[Dancer] {
        &self.dancers
    }

    pub fn config(&self) -> &FloorConfig {
        &self.config
    }

    pub fn icons(&self) -> &dyn IconFactory {
        self.icons.as_ref()
    }

    /// The surface this floor is bound to, once the first render has
    /// happened.
    pub fn surface_id(&self) -> Option<&str> {
        self.surface_id.as_deref()
    }

    /// Icon shape parameters derived from the floor configuration.
    pub fn icon_config(&self) -> IconConfig {
        IconConfig {
            size: self.config.icon_size,
            nose_radius: self.config.nose_radius,
            corner_fraction: self.config.corner_fraction,
        }
    }

    /// Resolve a selector to a dancer. Index selectors pass through
    /// (bounds-checked); label selectors do a first-match linear search.
    pub fn get_dancer(&self, selector: &DancerRef) -> Option<&Dancer> {
        self.resolve(selector).map(|i| &self.dancers[i])
    }

    fn resolve(&self, selector: &DancerRef) -> Option<usize> {
        match selector {
            DancerRef::Index(i) => (*i < self.dancers.len()).then_some(*i),
            DancerRef::Label(label) => self.dancers.iter().position(|d| d.label == *label),
        }
    }

    /// Rotate the selected dancers rigidly around their common center by
    /// `angle` walls in promenade direction.
    ///
    /// The pivot is the arithmetic mean of the selected dancers' positions,
    /// computed before any of them moves. Every selector is resolved up
    /// front; an unresolved entry fails the whole call with nothing mutated.
    /// A selector listed twice revolves its dancer twice.
    pub fn rotate(
        &mut self,
        angle: f64,
        selection: &[DancerRef],
    ) -> Result<&mut Self, FloorError> {
        if selection.is_empty() {
            return Err(FloorError::InvalidArgument(
                "rotation needs at least one dancer".to_string(),
            ));
        }
        let mut indices = Vec::with_capacity(selection.len());
        for selector in selection {
            let i = self
                .resolve(selector)
                .ok_or_else(|| FloorError::UnknownDancer(selector.describe()))?;
            indices.push(i);
        }

        let n = indices.len() as f64;
        let center_x = indices.iter().map(|&i| self.dancers[i].x).sum::<f64>() / n;
        let center_y = indices.iter().map(|&i| self.dancers[i].y).sum::<f64>() / n;

        for &i in &indices {
            self.dancers[i].revolve(center_x, center_y, angle);
        }
        Ok(self)
    }

    /// Render every dancer onto the surface registered under `surface_id`.
    ///
    /// The first successful render binds the floor to that surface id;
    /// later renders must target the same id (each one recomputes extents
    /// and rebuilds the drawable group from current positions). On any
    /// failure no floor or dancer state changes and nothing is attached.
    pub fn render(
        &mut self,
        registry: &mut SurfaceRegistry,
        surface_id: &str,
    ) -> Result<&mut Self, FloorError> {
        if let Some(bound) = &self.surface_id {
            if bound != surface_id {
                return Err(FloorError::InvalidArgument(format!(
                    "floor is bound to surface {bound:?}, cannot render to {surface_id:?}"
                )));
            }
        }
        let surface = registry
            .get_mut(surface_id)
            .ok_or_else(|| FloorError::SurfaceNotFound(surface_id.to_string()))?;
        self.surface_id = Some(surface_id.to_string());

        let mut min_x = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for d in &self.dancers {
            min_x = min_x.min(d.x);
            max_x = max_x.max(d.x);
            min_y = min_y.min(d.y);
            max_y = max_y.max(d.y);
        }

        // One extra dancer of extent leaves half an icon of space at each
        // border.
        let dancers_wide = 1.0 + max_x - min_x;
        let dancers_high = 1.0 + max_y - min_y;

        let width = surface.width();
        let height = surface.height();
        debug!(
            "floor {surface_id}: ideal aspect ratio (width/height) is {}",
            dancers_wide / dancers_high
        );
        debug!("surface size: {width} x {height}");
        // Diagnostic only: the drawn icon size stays at the configured
        // value regardless of how much room the surface offers.
        let available = (width / dancers_wide).min(height / dancers_high);
        debug!("space available for a dancer: {available}");

        let spacing = self.config.spacing();
        // Centers the bounding box assuming its minimum corner is near the
        // grid origin; formations far from (0, 0) come out off-center.
        // Known limitation, kept as-is.
        let translate = Transform::Translate {
            dx: width / 2.0 - dancers_wide * spacing / 2.0,
            dy: height / 2.0 - dancers_high * spacing / 2.0,
        };

        let this: &Floor = self;
        let mut children = Vec::with_capacity(this.dancers.len());
        for d in &this.dancers {
            children.push(d.drawable(this)?);
        }

        surface.append(Node::Group {
            id: None,
            transform: vec![translate],
            children,
        });
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::BasicSurface;
    use crate::types::Role;

    const EPS: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn pair() -> Vec<Dancer> {
        vec![
            Dancer::new(1.0, 1.0, 0.0).label("A").role(Role::Lead),
            Dancer::new(2.0, 1.0, 0.0).label("B").role(Role::Trail),
        ]
    }

    #[test]
    fn construction_assigns_placements_in_order() {
        let floor = Floor::new(pair(), FloorConfig::default()).unwrap();
        assert_eq!(floor.dancers()[0].placement(), Some(0));
        assert_eq!(floor.dancers()[1].placement(), Some(1));
    }

    #[test]
    fn empty_floor_is_rejected() {
        let err = Floor::new(Vec::new(), FloorConfig::default()).unwrap_err();
        assert!(matches!(err, FloorError::InvalidArgument(_)));
    }

    #[test]
    fn non_positive_icon_size_is_rejected() {
        let config = FloorConfig {
            icon_size: 0.0,
            ..FloorConfig::default()
        };
        let err = Floor::new(pair(), config).unwrap_err();
        assert!(matches!(err, FloorError::InvalidArgument(_)));
    }

    #[test]
    fn spacing_defaults_to_1_3_times_icon_size() {
        let config = FloorConfig::default();
        assert_close(config.spacing(), 26.0);
        let overridden = FloorConfig {
            icon_spacing: Some(40.0),
            ..FloorConfig::default()
        };
        assert_close(overridden.spacing(), 40.0);
    }

    #[test]
    fn get_dancer_finds_first_match_among_duplicate_labels() {
        let dancers = vec![
            Dancer::new(1.0, 1.0, 0.0).label("dup").color("red"),
            Dancer::new(2.0, 2.0, 0.0).label("dup").color("blue"),
        ];
        let floor = Floor::new(dancers, FloorConfig::default()).unwrap();
        let found = floor.get_dancer(&"dup".into()).unwrap();
        assert_eq!(found.color, "red");
        assert_eq!(found.placement(), Some(0));
    }

    #[test]
    fn get_dancer_by_index_passes_through() {
        let floor = Floor::new(pair(), FloorConfig::default()).unwrap();
        assert_eq!(floor.get_dancer(&1.into()).unwrap().label, "B");
        assert!(floor.get_dancer(&5.into()).is_none());
    }

    #[test]
    fn rotate_half_turn_swaps_a_facing_pair() {
        let mut floor = Floor::new(pair(), FloorConfig::default()).unwrap();
        floor.rotate(2.0, &["A".into(), "B".into()]).unwrap();

        let a = floor.get_dancer(&"A".into()).unwrap();
        assert_close(a.x, 2.0);
        assert_close(a.y, 1.0);
        assert_close(a.direction, 2.0);

        let b = floor.get_dancer(&"B".into()).unwrap();
        assert_close(b.x, 1.0);
        assert_close(b.y, 1.0);
        assert_close(b.direction, 2.0);
    }

    #[test]
    fn rotate_leaves_unselected_dancers_alone() {
        let mut floor = Floor::new(pair(), FloorConfig::default()).unwrap();
        floor.rotate(1.0, &["A".into()]).unwrap();
        let b = floor.get_dancer(&"B".into()).unwrap();
        assert_close(b.x, 2.0);
        assert_close(b.y, 1.0);
        assert_close(b.direction, 0.0);
    }

    #[test]
    fn four_quarter_turns_round_trip() {
        let dancers = vec![
            Dancer::new(1.0, 1.0, 0.0).label("A"),
            Dancer::new(2.0, 1.0, 1.0).label("B"),
            Dancer::new(2.0, 2.0, 2.0).label("C"),
            Dancer::new(1.0, 2.0, 3.0).label("D"),
        ];
        let originals = dancers.clone();
        let mut floor = Floor::new(dancers, FloorConfig::default()).unwrap();
        let all: Vec<DancerRef> = (0..4).map(DancerRef::Index).collect();
        for _ in 0..4 {
            floor.rotate(1.0, &all).unwrap();
        }
        for (d, orig) in floor.dancers().iter().zip(&originals) {
            assert_close(d.x, orig.x);
            assert_close(d.y, orig.y);
            assert_close(d.direction, orig.direction);
        }
    }

    #[test]
    fn rotate_unknown_label_fails_without_mutating() {
        let mut floor = Floor::new(pair(), FloorConfig::default()).unwrap();
        let err = floor
            .rotate(1.0, &["A".into(), "nobody".into()])
            .unwrap_err();
        assert_eq!(err, FloorError::UnknownDancer("nobody".to_string()));
        let a = floor.get_dancer(&"A".into()).unwrap();
        assert_close(a.x, 1.0);
        assert_close(a.y, 1.0);
        assert_close(a.direction, 0.0);
    }

    #[test]
    fn render_to_missing_surface_fails_cleanly() {
        let mut floor = Floor::new(pair(), FloorConfig::default()).unwrap();
        let mut registry = SurfaceRegistry::new();
        let err = floor.render(&mut registry, "nowhere").unwrap_err();
        assert_eq!(err, FloorError::SurfaceNotFound("nowhere".to_string()));
        assert_eq!(floor.surface_id(), None);
    }

    #[test]
    fn render_attaches_one_group_with_all_dancers() {
        let mut floor = Floor::new(pair(), FloorConfig::default()).unwrap();
        let mut registry = SurfaceRegistry::new();
        registry.insert("stage", BasicSurface::new(520.0, 260.0));
        floor.render(&mut registry, "stage").unwrap();

        assert_eq!(floor.surface_id(), Some("stage"));
        let children = registry.get("stage").unwrap().children();
        assert_eq!(children.len(), 1);
        match &children[0] {
            Node::Group {
                transform,
                children,
                ..
            } => {
                // dancers_wide = 2, dancers_high = 1, spacing = 26
                assert_eq!(
                    transform,
                    &[Transform::Translate {
                        dx: 520.0 / 2.0 - 2.0 * 26.0 / 2.0,
                        dy: 260.0 / 2.0 - 1.0 * 26.0 / 2.0,
                    }]
                );
                assert_eq!(children.len(), 2);
            }
            other => panic!("expected a group, got {other:?}"),
        }
    }

    #[test]
    fn render_to_a_second_surface_id_is_rejected() {
        let mut floor = Floor::new(pair(), FloorConfig::default()).unwrap();
        let mut registry = SurfaceRegistry::new();
        registry.insert("stage", BasicSurface::new(100.0, 100.0));
        registry.insert("other", BasicSurface::new(100.0, 100.0));
        floor.render(&mut registry, "stage").unwrap();
        let err = floor.render(&mut registry, "other").unwrap_err();
        assert!(matches!(err, FloorError::InvalidArgument(_)));
    }

    #[test]
    fn identifier_requires_placement_then_render() {
        let floor = Floor::new(pair(), FloorConfig::default()).unwrap();

        let stray = Dancer::new(0.0, 0.0, 0.0);
        assert_eq!(stray.identifier(&floor), Err(FloorError::NotPlaced));
        assert_eq!(stray.drawable(&floor).unwrap_err(), FloorError::NotPlaced);

        let placed = &floor.dancers()[0];
        assert_eq!(placed.identifier(&floor), Err(FloorError::NotRendered));
    }

    #[test]
    fn identifier_rejects_a_floor_the_dancer_is_not_on() {
        let floor_a = Floor::new(pair(), FloorConfig::default()).unwrap();
        let mut floor_b = Floor::new(pair(), FloorConfig::default()).unwrap();
        let mut registry = SurfaceRegistry::new();
        registry.insert("other", BasicSurface::new(100.0, 100.0));
        floor_b.render(&mut registry, "other").unwrap();

        // Same placement index exists on both floors; only the owning
        // floor may mint the identifier.
        let foreign = &floor_a.dancers()[0];
        assert!(matches!(
            foreign.identifier(&floor_b),
            Err(FloorError::InvalidArgument(_))
        ));
        assert!(matches!(
            foreign.drawable(&floor_b),
            Err(FloorError::InvalidArgument(_))
        ));
    }

    #[test]
    fn floor_debug_output_skips_the_icon_factory() {
        let floor = Floor::new(pair(), FloorConfig::default()).unwrap();
        let dump = format!("{floor:?}");
        assert!(dump.starts_with("Floor"));
        assert!(dump.contains("surface_id"));
        assert!(dump.ends_with(".. }"));
    }

    #[test]
    fn identifier_combines_surface_and_placement() {
        let mut floor = Floor::new(pair(), FloorConfig::default()).unwrap();
        let mut registry = SurfaceRegistry::new();
        registry.insert("stage", BasicSurface::new(100.0, 100.0));
        floor.render(&mut registry, "stage").unwrap();
        assert_eq!(
            floor.dancers()[1].identifier(&floor).unwrap(),
            "stage:1".to_string()
        );
    }
}
