//! Test utilities for engine and plugin testing

use crate::config::SimulationConfig;
use crate::physics::body::Body;
use crate::physics::math::Scalar;
use crate::utils::color::BodyColor;
use bevy::prelude::*;

/// Creates a minimal headless app with the core Bevy plugins needed for testing
pub fn create_test_app() -> App {
    let mut app = App::new();

    app.add_plugins((MinimalPlugins, bevy::state::app::StatesPlugin));

    app
}

/// Configuration with a fixed seed and the first scene, so runs repeat exactly
pub fn test_config() -> SimulationConfig {
    let mut config = SimulationConfig::default();
    config.physics.initial_seed = Some(42);
    config.scene.preset = Some(0);
    config
}

/// Run `frames` app updates
pub fn run_frames(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.update();
    }
}

/// Body at rest
pub fn body_at(x: Scalar, y: Scalar, mass: Scalar) -> Body {
    moving_body(x, y, 0.0, 0.0, mass)
}

pub fn moving_body(x: Scalar, y: Scalar, vx: Scalar, vy: Scalar, mass: Scalar) -> Body {
    Body::from_parts(x, y, vx, vy, mass, BodyColor::hsl(200.0, 70.0, 50.0))
}
