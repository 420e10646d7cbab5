//! The simulation engine
//!
//! One [`Engine::step`] runs the three phases of a tick in order:
//!
//! 1. force solver: pairwise gravity kicks every velocity
//! 2. integrator: positions drift, walls bounce
//! 3. collision resolver: deeply overlapping pairs merge (when enabled)
//!
//! The engine owns no bodies. Callers hand it the collection each tick and
//! may append or edit bodies freely between ticks.

use super::body::{Body, BodyId};
use super::collisions::{Merger, resolve_collisions};
use super::constants::{DEFAULT_GRAVITATIONAL_CONSTANT, DEFAULT_MIN_DISTANCE};
use super::effects::{MergeEffect, MergeEffects};
use super::gravity::apply_gravitation;
use super::integrator::integrate_motions;
use super::math::{Scalar, radius};
use crate::config::PhysicsConfig;
use bevy::log::debug;

/// What happened during one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepReport {
    pub mergers: Vec<Merger>,
}

#[derive(Debug, Clone)]
pub struct Engine {
    gravitational_constant: Scalar,
    min_distance: Scalar,
    collisions_enabled: bool,
    merge_effects: MergeEffects,
}

impl Engine {
    /// Create an engine with collisions enabled.
    ///
    /// Neither argument is validated; a negative `g` repels and a
    /// non-positive `min_distance` lets coincident bodies produce non-finite
    /// velocities. The engine will not panic either way.
    pub fn new(gravitational_constant: Scalar, min_distance: Scalar) -> Self {
        Self {
            gravitational_constant,
            min_distance,
            collisions_enabled: true,
            merge_effects: MergeEffects::default(),
        }
    }

    pub fn from_config(config: &PhysicsConfig) -> Self {
        let mut engine = Self::new(config.gravitational_constant, config.min_distance);
        engine.set_collisions_enabled(config.collisions_enabled);
        engine
    }

    /// Radius of a body of the given mass; identical to [`radius`]
    #[inline]
    pub fn radius(mass: Scalar) -> Scalar {
        radius(mass)
    }

    pub fn gravitational_constant(&self) -> Scalar {
        self.gravitational_constant
    }

    pub fn min_distance(&self) -> Scalar {
        self.min_distance
    }

    pub fn set_collisions_enabled(&mut self, enabled: bool) {
        self.collisions_enabled = enabled;
    }

    pub fn collisions_enabled(&self) -> bool {
        self.collisions_enabled
    }

    pub fn merge_effects(&self) -> &MergeEffects {
        &self.merge_effects
    }

    pub fn merge_effect(&self, id: BodyId) -> Option<&MergeEffect> {
        self.merge_effects.get(id)
    }

    /// Drop all merge effects, e.g. when a new scene replaces the bodies
    pub fn reset_effects(&mut self) {
        self.merge_effects.clear();
    }

    /// Advance the simulation by one tick.
    ///
    /// `time_scale` multiplies both the velocity kicks and the position
    /// drift. It is expected to lie roughly in `[0, 5]` but is not checked.
    pub fn step(
        &mut self,
        bodies: &mut Vec<Body>,
        width: Scalar,
        height: Scalar,
        time_scale: Scalar,
    ) -> StepReport {
        self.apply_gravitation(bodies, time_scale);
        self.integrate(bodies, width, height, time_scale);

        // Age existing flashes before new ones are triggered
        self.merge_effects.advance(time_scale);

        let mergers = if self.collisions_enabled {
            self.resolve_collisions(bodies)
        } else {
            Vec::new()
        };

        self.merge_effects.retain_bodies(bodies);

        StepReport { mergers }
    }

    /// Force solver phase on its own
    pub fn apply_gravitation(&self, bodies: &mut [Body], time_scale: Scalar) {
        apply_gravitation(
            bodies,
            self.gravitational_constant,
            self.min_distance,
            time_scale,
        );
    }

    /// Integrator and boundary phase on its own
    pub fn integrate(&self, bodies: &mut [Body], width: Scalar, height: Scalar, time_scale: Scalar) {
        integrate_motions(bodies, width, height, time_scale);
    }

    /// Collision phase on its own; runs regardless of the enabled flag
    pub fn resolve_collisions(&mut self, bodies: &mut Vec<Body>) -> Vec<Merger> {
        let mergers = resolve_collisions(bodies, &mut self.merge_effects);

        for merger in &mergers {
            debug!(
                "Body {} absorbed body {} (mass now {:.2})",
                merger.survivor, merger.absorbed, merger.mass
            );
        }

        mergers
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(DEFAULT_GRAVITATIONAL_CONSTANT, DEFAULT_MIN_DISTANCE)
    }
}
