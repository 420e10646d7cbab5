//! Pairwise Newtonian gravity with a hard softening floor

use super::body::Body;
use super::math::{Scalar, Vector};

/// Force exerted on body `i` by body `j`.
///
/// Returns `None` when the two centers are closer than `min_distance`: such
/// pairs are skipped entirely rather than softened, which keeps near-coincident
/// bodies from exchanging enormous impulses. At exactly `min_distance` the
/// force is applied.
#[inline]
pub fn pairwise_force(
    position_i: Vector,
    mass_i: Scalar,
    position_j: Vector,
    mass_j: Scalar,
    g: Scalar,
    min_distance: Scalar,
) -> Option<Vector> {
    let dx = position_j.x - position_i.x;
    let dy = position_j.y - position_i.y;
    let distance_squared = dx * dx + dy * dy;
    let distance = libm::sqrt(distance_squared);

    if distance < min_distance {
        return None;
    }

    let force = g * mass_i * mass_j / distance_squared;

    Some(Vector::new(force * dx / distance, force * dy / distance))
}

/// Apply one tick of mutual attraction to every body's velocity.
///
/// Each unordered pair is visited once (`i < j`). Body `i` is pulled toward
/// `j` and `j` toward `i` by the same force; the resulting velocity change is
/// `F / m * time_scale`. A body with non-positive mass receives no update, so
/// a zero-mass body never divides by zero, while its partner still feels it
/// (with zero force, as the product of masses vanishes).
///
/// Positions are not touched.
pub fn apply_gravitation(bodies: &mut [Body], g: Scalar, min_distance: Scalar, time_scale: Scalar) {
    let n = bodies.len();
    if n < 2 {
        return;
    }

    for i in 0..n {
        for j in (i + 1)..n {
            let (head, tail) = bodies.split_at_mut(j);
            let body_i = &mut head[i];
            let body_j = &mut tail[0];

            let Some(force) = pairwise_force(
                body_i.position,
                body_i.mass,
                body_j.position,
                body_j.mass,
                g,
                min_distance,
            ) else {
                continue;
            };

            if body_i.mass > 0.0 {
                body_i.velocity += force / body_i.mass * time_scale;
            }

            if body_j.mass > 0.0 {
                body_j.velocity -= force / body_j.mass * time_scale;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_rest(x: Scalar, y: Scalar, mass: Scalar) -> Body {
        Body::from_parts(x, y, 0.0, 0.0, mass, "hsl(0, 70%, 50%)")
    }

    #[test]
    fn test_pairwise_force_magnitude() {
        let force = pairwise_force(Vector::ZERO, 100.0, Vector::new(100.0, 0.0), 100.0, 1.0, 10.0)
            .expect("pair is beyond the softening floor");
        assert!((force.x - 1.0).abs() < 1e-12);
        assert_eq!(force.y, 0.0);
    }

    #[test]
    fn test_pairwise_force_points_toward_partner() {
        let force = pairwise_force(
            Vector::new(10.0, 10.0),
            1.0,
            Vector::new(10.0, -40.0),
            1.0,
            1.0,
            1.0,
        )
        .expect("pair is beyond the softening floor");
        assert!(force.y < 0.0);
        assert_eq!(force.x, 0.0);
    }

    #[test]
    fn test_pairwise_force_softening_floor() {
        let min_distance = 20.0;
        assert!(
            pairwise_force(Vector::ZERO, 1.0, Vector::new(20.0, 0.0), 1.0, 1.0, min_distance)
                .is_some()
        );
        assert!(
            pairwise_force(Vector::ZERO, 1.0, Vector::new(19.999, 0.0), 1.0, 1.0, min_distance)
                .is_none()
        );
    }

    #[test]
    fn test_two_body_reference_values() {
        let mut bodies = vec![at_rest(0.0, 0.0, 100.0), at_rest(100.0, 0.0, 100.0)];

        apply_gravitation(&mut bodies, 1.0, 10.0, 1.0);

        assert!((bodies[0].velocity.x - 0.01).abs() < 1e-12);
        assert!((bodies[1].velocity.x + 0.01).abs() < 1e-12);
        assert!(bodies[0].velocity.y.abs() < 1e-12);
        assert!(bodies[1].velocity.y.abs() < 1e-12);

        // Positions are left to the integrator
        assert_eq!(bodies[0].position, Vector::ZERO);
        assert_eq!(bodies[1].position, Vector::new(100.0, 0.0));
    }

    #[test]
    fn test_time_scale_scales_velocity_delta() {
        let mut slow = vec![at_rest(0.0, 0.0, 100.0), at_rest(100.0, 0.0, 100.0)];
        let mut fast = slow.clone();

        apply_gravitation(&mut slow, 1.0, 10.0, 1.0);
        apply_gravitation(&mut fast, 1.0, 10.0, 2.5);

        assert!((fast[0].velocity.x - 2.5 * slow[0].velocity.x).abs() < 1e-12);
        assert!((fast[1].velocity.x - 2.5 * slow[1].velocity.x).abs() < 1e-12);
    }

    #[test]
    fn test_zero_mass_body_is_not_updated() {
        let mut bodies = vec![at_rest(0.0, 0.0, 0.0), at_rest(100.0, 0.0, 100.0)];

        apply_gravitation(&mut bodies, 1.0, 10.0, 1.0);

        assert_eq!(bodies[0].velocity, Vector::ZERO);
        assert_eq!(bodies[1].velocity, Vector::ZERO);
        assert!(bodies.iter().all(|b| b.velocity.is_finite()));
    }

    #[test]
    fn test_three_bodies_accumulate() {
        // Middle body is pulled equally both ways
        let mut bodies = vec![
            at_rest(0.0, 0.0, 50.0),
            at_rest(100.0, 0.0, 50.0),
            at_rest(200.0, 0.0, 50.0),
        ];

        apply_gravitation(&mut bodies, 1.0, 10.0, 1.0);

        assert!(bodies[1].velocity.x.abs() < 1e-12);
        assert!(bodies[0].velocity.x > 0.0);
        assert!(bodies[2].velocity.x < 0.0);
        assert!((bodies[0].velocity.x + bodies[2].velocity.x).abs() < 1e-12);
    }

    #[test]
    fn test_empty_and_single_body() {
        let mut empty: Vec<Body> = Vec::new();
        apply_gravitation(&mut empty, 1.0, 10.0, 1.0);

        let mut single = vec![at_rest(5.0, 5.0, 10.0)];
        apply_gravitation(&mut single, 1.0, 10.0, 1.0);
        assert_eq!(single[0].velocity, Vector::ZERO);
    }
}
