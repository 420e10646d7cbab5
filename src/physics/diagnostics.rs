//! Aggregate quantities over a body collection

use super::body::Body;
use super::math::{Scalar, Vector};

pub fn total_mass(bodies: &[Body]) -> Scalar {
    bodies.iter().map(|body| body.mass).sum()
}

pub fn total_momentum(bodies: &[Body]) -> Vector {
    bodies
        .iter()
        .fold(Vector::ZERO, |momentum, body| momentum + body.momentum())
}

/// Mass-weighted mean position, or `None` when the total mass vanishes
pub fn center_of_mass(bodies: &[Body]) -> Option<Vector> {
    let (weighted_positions, total_mass): (Vector, Scalar) = bodies
        .iter()
        .fold((Vector::ZERO, 0.0), |(pos_acc, mass_acc), body| {
            (pos_acc + body.position * body.mass, mass_acc + body.mass)
        });

    if total_mass.abs() <= Scalar::EPSILON {
        return None;
    }

    let center = weighted_positions / total_mass;
    center.is_finite().then_some(center)
}

pub fn kinetic_energy(bodies: &[Body]) -> Scalar {
    bodies
        .iter()
        .map(|body| 0.5 * body.mass * body.velocity.length_squared())
        .sum()
}
