//! Built-in scene factories
//!
//! Positions are laid out relative to the scene bounds so every scene is
//! centered whatever the area size.

use crate::physics::body::Body;
use crate::physics::math::{Scalar, Vector, orbital_velocity, random_angle, unit_vector};
use crate::resources::{SceneBounds, SharedRng};
use crate::utils::color::BodyColor;
use rand::Rng;

const SATURATION: f32 = 70.0;
const LIGHTNESS: f32 = 50.0;

fn random_hue_color(rng: &mut SharedRng, hue: std::ops::Range<f32>) -> BodyColor {
    BodyColor::random_hue(&mut rng.0, hue, SATURATION, LIGHTNESS)
}

/// Sun with five planets on near-circular orbits
pub fn solar_system(bounds: SceneBounds, rng: &mut SharedRng) -> Vec<Body> {
    const PLANET_COLORS: [&str; 5] = ["#3498db", "#2ecc71", "#e74c3c", "#9b59b6", "#f39c12"];
    const DISTANCES: [Scalar; 5] = [100.0, 150.0, 200.0, 250.0, 300.0];
    const SPEEDS: [Scalar; 5] = [3.0, 2.5, 2.0, 1.7, 1.5];

    let center = bounds.center();
    let mut bodies = Vec::with_capacity(1 + PLANET_COLORS.len());

    bodies.push(Body::new(center, Vector::ZERO, 2000.0, BodyColor::parse("#FFD700")));

    for ((color, distance), speed) in PLANET_COLORS.iter().zip(DISTANCES).zip(SPEEDS) {
        bodies.push(Body::new(
            center + Vector::new(distance, 0.0),
            Vector::new(0.0, speed),
            rng.random_range(10.0..30.0),
            BodyColor::parse(color),
        ));
    }

    bodies
}

/// Two heavy stars in mutual orbit with a few distant planets
pub fn binary_star(bounds: SceneBounds, rng: &mut SharedRng) -> Vec<Body> {
    let center = bounds.center();
    let mut bodies = Vec::with_capacity(5);

    bodies.push(Body::new(
        center - Vector::new(100.0, 0.0),
        Vector::new(0.0, -1.5),
        1000.0,
        BodyColor::parse("#FF5733"),
    ));
    bodies.push(Body::new(
        center + Vector::new(100.0, 0.0),
        Vector::new(0.0, 1.5),
        1000.0,
        BodyColor::parse("#33A8FF"),
    ));

    for _ in 0..3 {
        let angle = random_angle(&mut rng.0);
        let distance = rng.random_range(300.0..400.0);
        bodies.push(Body::new(
            center + unit_vector(angle) * distance,
            orbital_velocity(angle, 1.2),
            rng.random_range(5.0..20.0),
            random_hue_color(rng, 0.0..360.0),
        ));
    }

    bodies
}

/// Thirty bodies scattered over the whole area with random drift
pub fn chaos(bounds: SceneBounds, rng: &mut SharedRng) -> Vec<Body> {
    (0..30)
        .map(|_| {
            // Scaled unit draws tolerate a degenerate zero-sized area
            let position = Vector::new(
                rng.random::<Scalar>() * bounds.width,
                rng.random::<Scalar>() * bounds.height,
            );
            let velocity = Vector::new(
                rng.random_range(-1.5..1.5),
                rng.random_range(-1.5..1.5),
            );
            let mass = rng.random_range(10.0..50.0);
            Body::new(position, velocity, mass, random_hue_color(rng, 0.0..360.0))
        })
        .collect()
}

/// Two clusters on a head-on course
pub fn galaxy_collision(bounds: SceneBounds, rng: &mut SharedRng) -> Vec<Body> {
    let mut bodies = Vec::with_capacity(32);

    let clusters = [
        (
            Vector::new(bounds.width / 4.0, bounds.height / 2.0),
            1.0,
            "#FF5733",
            30.0..90.0,
        ),
        (
            Vector::new(bounds.width / 4.0 * 3.0, bounds.height / 2.0),
            -1.0,
            "#3498DB",
            200.0..260.0,
        ),
    ];

    for (core, drift, core_color, hues) in clusters {
        bodies.push(Body::new(
            core,
            Vector::new(drift, 0.0),
            1000.0,
            BodyColor::parse(core_color),
        ));

        for _ in 0..15 {
            let angle = random_angle(&mut rng.0);
            let distance = rng.random_range(50.0..150.0);
            let velocity = Vector::new(
                drift + libm::sin(angle) * 0.5,
                libm::cos(angle) * 0.5,
            );
            bodies.push(Body::new(
                core + unit_vector(angle) * distance,
                velocity,
                rng.random_range(5.0..15.0),
                random_hue_color(rng, hues.clone()),
            ));
        }
    }

    bodies
}

/// Three attractors on a triangle with a ring of light planets
pub fn planet_dance(bounds: SceneBounds, rng: &mut SharedRng) -> Vec<Body> {
    const CENTER_COLORS: [&str; 3] = ["#e74c3c", "#2ecc71", "#3498db"];
    const TRIANGLE_RADIUS: Scalar = 150.0;

    let center = bounds.center();
    let mut bodies = Vec::with_capacity(23);

    for (i, color) in CENTER_COLORS.iter().enumerate() {
        let angle = i as Scalar * std::f64::consts::TAU / 3.0;
        bodies.push(Body::new(
            center + unit_vector(angle) * TRIANGLE_RADIUS,
            orbital_velocity(angle, 1.0),
            500.0,
            BodyColor::parse(color),
        ));
    }

    for _ in 0..20 {
        let angle = random_angle(&mut rng.0);
        let distance = rng.random_range(250.0..400.0);
        // Each axis draws its own speed factor
        let velocity = Vector::new(
            libm::sin(angle) * rng.random_range(0.8..1.3),
            -libm::cos(angle) * rng.random_range(0.8..1.3),
        );
        bodies.push(Body::new(
            center + unit_vector(angle) * distance,
            velocity,
            rng.random_range(2.0..10.0),
            random_hue_color(rng, 0.0..360.0),
        ));
    }

    bodies
}
