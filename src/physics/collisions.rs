//! Collision resolution through momentum-conserving mergers
//!
//! Two bodies merge only when their centers come within
//! [`MERGE_THRESHOLD_FACTOR`] of their summed radii, i.e. when they overlap
//! deeply. Merely touching discs stay separate.
//!
//! The merged body conserves:
//! - Total mass: `m = m_a + m_b`
//! - Momentum: `m * v = m_a * v_a + m_b * v_b`
//! - Center of mass: `m * x = m_a * x_a + m_b * x_b`

use super::body::{Body, BodyId};
use super::constants::MERGE_THRESHOLD_FACTOR;
use super::effects::MergeEffects;
use super::math::Scalar;

/// Record of one merger within a scan
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Merger {
    pub survivor: BodyId,
    pub absorbed: BodyId,
    pub mass: Scalar,
}

/// Whether two bodies overlap deeply enough to merge
#[inline]
pub fn overlaps(a: &Body, b: &Body) -> bool {
    let threshold = (a.radius() + b.radius()) * MERGE_THRESHOLD_FACTOR;
    a.position.distance(b.position) < threshold
}

/// Fold `absorbed` into `survivor` in place.
///
/// Velocity and position become mass-weighted averages and the colors are
/// blended by mass fraction. If the combined mass is not positive the
/// survivor keeps its own kinematics.
pub fn merge_into(survivor: &mut Body, absorbed: &Body) {
    let total_mass = survivor.mass + absorbed.mass;

    if total_mass > 0.0 {
        survivor.velocity = (survivor.velocity * survivor.mass
            + absorbed.velocity * absorbed.mass)
            / total_mass;
        survivor.position = (survivor.position * survivor.mass
            + absorbed.position * absorbed.mass)
            / total_mass;
    }

    survivor.color = survivor
        .color
        .blend(survivor.mass, &absorbed.color, absorbed.mass);
    survivor.mass = total_mass;
}

/// Scan all pairs once, merge overlapping ones and compact the collection.
///
/// Pairs are visited in index order and the lower index survives. Absorbed
/// bodies are only removed after the scan completes, in a single pass that
/// keeps the remaining bodies in their original relative order. A survivor
/// keeps scanning with its merged state and may absorb several bodies in one
/// scan; an absorbed body takes no further part. Each survivor gets a fresh
/// merge effect.
pub fn resolve_collisions(bodies: &mut Vec<Body>, effects: &mut MergeEffects) -> Vec<Merger> {
    let n = bodies.len();
    let mut absorbed_slots = vec![false; n];
    let mut mergers = Vec::new();

    for i in 0..n {
        if absorbed_slots[i] {
            continue;
        }

        for j in (i + 1)..n {
            if absorbed_slots[j] {
                continue;
            }

            let (head, tail) = bodies.split_at_mut(j);
            let survivor = &mut head[i];
            let absorbed = &tail[0];

            if !overlaps(survivor, absorbed) {
                continue;
            }

            merge_into(survivor, absorbed);
            effects.trigger(survivor.id);

            mergers.push(Merger {
                survivor: survivor.id,
                absorbed: absorbed.id,
                mass: survivor.mass,
            });

            absorbed_slots[j] = true;
        }
    }

    if !mergers.is_empty() {
        let mut slot = 0;
        bodies.retain(|_| {
            let keep = !absorbed_slots[slot];
            slot += 1;
            keep
        });
    }

    mergers
}
