//! Physical constants and engine defaults

use super::math::Scalar;

/// Gravitational constant used when none is configured
pub const DEFAULT_GRAVITATIONAL_CONSTANT: Scalar = 0.5;

/// Separation below which a pair exerts no force at all
pub const DEFAULT_MIN_DISTANCE: Scalar = 20.0;

/// Radius of a massless body
pub const BASE_RADIUS: Scalar = 5.0;

/// Fraction of the normal velocity kept after a wall bounce
pub const RESTITUTION: Scalar = 0.8;

/// Fraction of the summed radii two centers must come within to merge
pub const MERGE_THRESHOLD_FACTOR: Scalar = 0.1;

/// Lifetime of a merge flash, in time-scale units
pub const MERGE_EFFECT_DURATION: Scalar = 30.0;
