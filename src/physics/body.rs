//! Simulated point masses

use super::math::{Scalar, Vector, radius};
use crate::utils::color::BodyColor;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_BODY_ID: AtomicU64 = AtomicU64::new(0);

/// Stable identity of a body.
///
/// Ids never take part in physics. They key presentation side-tables such
/// as merge effects, which must survive the collection being compacted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u64);

impl BodyId {
    /// Draw a fresh id from the process-wide counter
    pub fn next() -> Self {
        Self(NEXT_BODY_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A point mass with a color hint.
///
/// The radius is not stored; see [`Body::radius`].
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub id: BodyId,
    pub position: Vector,
    pub velocity: Vector,
    pub mass: Scalar,
    pub color: BodyColor,
}

impl Body {
    pub fn new(position: Vector, velocity: Vector, mass: Scalar, color: BodyColor) -> Self {
        Self {
            id: BodyId::next(),
            position,
            velocity,
            mass,
            color,
        }
    }

    /// Build a body from its plain boundary fields.
    pub fn from_parts(
        x: Scalar,
        y: Scalar,
        vx: Scalar,
        vy: Scalar,
        mass: Scalar,
        color: impl Into<BodyColor>,
    ) -> Self {
        Self::new(Vector::new(x, y), Vector::new(vx, vy), mass, color.into())
    }

    #[inline]
    pub fn radius(&self) -> Scalar {
        radius(self.mass)
    }

    #[inline]
    pub fn momentum(&self) -> Vector {
        self.velocity * self.mass
    }
}
