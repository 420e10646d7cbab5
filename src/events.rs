//! Centralized event definitions
//!
//! Everything that changes the running simulation from outside goes through
//! [`SimulationCommand`], so a frontend only needs an `EventWriter` to drive
//! the engine.

use crate::physics::math::{Scalar, Vector};
use bevy::prelude::*;

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum SimulationCommand {
    /// Rebuild the current scene from scratch
    Restart,
    TogglePause,
    ToggleCollisions,
    /// Change the time scale; clamped into the supported range
    SetTimeScale(Scalar),
    /// Load the scene at this index, or the first scene if out of range
    LoadScene(usize),
    RandomScene,
    /// Add a body placed by a drag gesture from `start` to `end`
    SpawnFromDrag { start: Vector, end: Vector },
}
