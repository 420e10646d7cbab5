//! Position integration and wall handling
//!
//! Velocities have already been kicked by the force solver when this runs, so
//! drifting positions with the updated velocity completes a semi-implicit
//! (symplectic) Euler step: `v += a * dt`, then `x += v * dt`.

use super::body::Body;
use super::constants::RESTITUTION;
use super::math::{Scalar, Vector};

/// Advance a single position by `velocity * dt`.
#[inline]
pub fn drift(position: &mut Vector, velocity: Vector, dt: Scalar) {
    *position += velocity * dt;
}

/// Clamp one coordinate into `[radius, bound - radius]`.
///
/// On contact the coordinate is set exactly to the wall and the velocity
/// component is reversed and damped by [`RESTITUTION`]. Axes are handled
/// independently, so a corner produces two bounces in the same tick.
#[inline]
pub fn bounce_axis(coordinate: &mut Scalar, velocity: &mut Scalar, radius: Scalar, bound: Scalar) {
    if *coordinate < radius {
        *coordinate = radius;
        *velocity *= -RESTITUTION;
    } else if *coordinate > bound - radius {
        *coordinate = bound - radius;
        *velocity *= -RESTITUTION;
    }
}

/// Drift every body and keep it inside the `width` x `height` scene.
pub fn integrate_motions(bodies: &mut [Body], width: Scalar, height: Scalar, time_scale: Scalar) {
    for body in bodies.iter_mut() {
        drift(&mut body.position, body.velocity, time_scale);

        let radius = body.radius();
        bounce_axis(&mut body.position.x, &mut body.velocity.x, radius, width);
        bounce_axis(&mut body.position.y, &mut body.velocity.y, radius, height);
    }
}
