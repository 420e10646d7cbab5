//! Planar N-body physics
//!
//! [`engine::Engine`] drives a tick through three phases, each in its own
//! module: [`gravity`] (force solver), [`integrator`] (drift and walls) and
//! [`collisions`] (mergers). Bodies live outside the engine in a plain
//! `Vec<Body>`.

pub mod body;
pub mod collisions;
pub mod constants;
pub mod diagnostics;
pub mod effects;
pub mod engine;
pub mod gravity;
pub mod integrator;
pub mod math;
