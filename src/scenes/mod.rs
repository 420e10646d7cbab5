//! Scene catalogue
//!
//! A scene is a named factory producing an initial body collection for a
//! given area. The engine never looks at scenes; callers pick one by index
//! or at random and hand the resulting bodies to the engine.

mod presets;

use crate::physics::body::Body;
use crate::physics::math::{Scalar, Vector};
use crate::resources::{SceneBounds, SharedRng};
use crate::utils::color::BodyColor;
use rand::Rng;

/// Drag distance to velocity conversion for hand-placed bodies
pub const DRAG_SPEED_FACTOR: Scalar = 0.05;

/// Per-axis velocity limit for hand-placed bodies
pub const DRAG_MAX_SPEED: Scalar = 10.0;

/// Mass range for hand-placed bodies
pub const DRAG_MASS_RANGE: std::ops::Range<Scalar> = 20.0..100.0;

pub type SceneFactory = fn(SceneBounds, &mut SharedRng) -> Vec<Body>;

#[derive(Clone, Copy)]
pub struct Scene {
    pub name: &'static str,
    pub description: &'static str,
    pub build: SceneFactory,
}

impl Scene {
    pub fn build(&self, bounds: SceneBounds, rng: &mut SharedRng) -> Vec<Body> {
        (self.build)(bounds, rng)
    }
}

impl std::fmt::Debug for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scene")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Ordered collection of scenes, addressed by index
#[derive(Debug, Clone, Default)]
pub struct SceneRegistry {
    scenes: Vec<Scene>,
}

impl SceneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the five built-in scenes in their canonical order
    pub fn with_standard_scenes(mut self) -> Self {
        self.register(Scene {
            name: "Solar System",
            description: "A central sun with planets on orbit",
            build: presets::solar_system,
        });
        self.register(Scene {
            name: "Binary Star",
            description: "Two stars circling their common center of mass",
            build: presets::binary_star,
        });
        self.register(Scene {
            name: "Chaos",
            description: "Many bodies of varied mass in chaotic motion",
            build: presets::chaos,
        });
        self.register(Scene {
            name: "Galaxy Collision",
            description: "Two clusters heading toward each other",
            build: presets::galaxy_collision,
        });
        self.register(Scene {
            name: "Planet Dance",
            description: "A system with several centers of attraction",
            build: presets::planet_dance,
        });
        self
    }

    /// Append a scene; returns its index
    pub fn register(&mut self, scene: Scene) -> usize {
        self.scenes.push(scene);
        self.scenes.len() - 1
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.scenes.iter().map(|scene| scene.name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Scene> {
        self.scenes.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Scene> {
        self.scenes.get(index)
    }

    /// Scene at `index`, or the first scene when the index is out of range.
    ///
    /// Returns `None` only for an empty registry.
    pub fn get_or_first(&self, index: usize) -> Option<(usize, &Scene)> {
        match self.scenes.get(index) {
            Some(scene) => Some((index, scene)),
            None => self.scenes.first().map(|scene| (0, scene)),
        }
    }

    /// Uniformly chosen scene with its index
    pub fn random(&self, rng: &mut SharedRng) -> Option<(usize, &Scene)> {
        if self.scenes.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.scenes.len());
        Some((index, &self.scenes[index]))
    }

    /// Build the scene at `index`, falling back to the first scene.
    pub fn build(&self, index: usize, bounds: SceneBounds, rng: &mut SharedRng) -> Vec<Body> {
        self.get_or_first(index)
            .map(|(_, scene)| scene.build(bounds, rng))
            .unwrap_or_default()
    }
}

/// Body placed by dragging from `start` to `end`.
///
/// The body sits at `start`; its velocity is the drag vector scaled by
/// [`DRAG_SPEED_FACTOR`] and clamped per axis to [`DRAG_MAX_SPEED`].
pub fn spawn_body_from_drag(start: Vector, end: Vector, rng: &mut SharedRng) -> Body {
    let velocity = ((end - start) * DRAG_SPEED_FACTOR).clamp(
        Vector::splat(-DRAG_MAX_SPEED),
        Vector::splat(DRAG_MAX_SPEED),
    );
    let mass = rng.random_range(DRAG_MASS_RANGE);
    let color = BodyColor::random_hue(&mut rng.0, 0.0..360.0, 70.0, 50.0);

    Body::new(start, velocity, mass, color)
}
