//! Gravitas library
//!
//! A planar gravitational N-body engine: a pairwise force solver, a
//! symplectic Euler integrator with damped wall bounces, and an optional
//! momentum-conserving collision resolver. The [`plugins::simulation`]
//! module wires the engine into a bevy app; [`scenes`] provides ready-made
//! initial conditions.

pub mod cli;
pub mod config;
pub mod events;
pub mod physics;
pub mod plugins;
pub mod prelude;
pub mod resources;
pub mod scenes;
pub mod states;
pub mod utils;

pub use physics::math::radius;

// Test utilities are public for integration tests
pub mod test_utils;
