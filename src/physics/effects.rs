//! Merge flash bookkeeping
//!
//! A body that absorbs another gets a short-lived effect the presentation layer
//! can draw as a flash. The countdown is presentation state only, so it lives
//! in this side-table keyed by [`BodyId`] instead of on [`Body`] itself.

use super::body::{Body, BodyId};
use super::constants::MERGE_EFFECT_DURATION;
use super::math::Scalar;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MergeEffect {
    pub remaining: Scalar,
    pub duration: Scalar,
}

impl MergeEffect {
    pub fn new(duration: Scalar) -> Self {
        Self {
            remaining: duration,
            duration,
        }
    }

    /// Fraction of the effect still to play, from 1.0 down to 0.0
    pub fn progress(&self) -> Scalar {
        if self.duration <= 0.0 {
            return 0.0;
        }
        (self.remaining / self.duration).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone)]
pub struct MergeEffects {
    effects: HashMap<BodyId, MergeEffect>,
    duration: Scalar,
}

impl MergeEffects {
    pub fn new(duration: Scalar) -> Self {
        Self {
            effects: HashMap::new(),
            duration,
        }
    }

    /// Start (or restart) the flash for `id` at full duration
    pub fn trigger(&mut self, id: BodyId) {
        self.effects.insert(id, MergeEffect::new(self.duration));
    }

    pub fn get(&self, id: BodyId) -> Option<&MergeEffect> {
        self.effects.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&BodyId, &MergeEffect)> {
        self.effects.iter()
    }

    /// Count every effect down by `time_scale`, dropping the ones that finish
    pub fn advance(&mut self, time_scale: Scalar) {
        self.effects.retain(|_, effect| {
            effect.remaining -= time_scale;
            effect.remaining > 0.0
        });
    }

    /// Forget effects whose body is no longer in `bodies`
    pub fn retain_bodies(&mut self, bodies: &[Body]) {
        if self.effects.is_empty() {
            return;
        }
        let alive: HashSet<BodyId> = bodies.iter().map(|body| body.id).collect();
        self.effects.retain(|id, _| alive.contains(id));
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn clear(&mut self) {
        self.effects.clear();
    }
}

impl Default for MergeEffects {
    fn default() -> Self {
        Self::new(MERGE_EFFECT_DURATION)
    }
}
