//! Gravitas prelude module
//!
//! Re-exports the types most code in this crate and its frontends reaches
//! for, to reduce import boilerplate.

// External crate re-exports
pub use bevy::prelude::*;
pub use rand::Rng;

// Internal re-exports - Math
pub use crate::physics::math::{Scalar, Vector, radius};

// Internal re-exports - Config
pub use crate::config::SimulationConfig;

// Internal re-exports - States
pub use crate::states::AppState;

// Internal re-exports - Events
pub use crate::events::SimulationCommand;

// Internal re-exports - Engine
pub use crate::physics::body::{Body, BodyId};
pub use crate::physics::engine::{Engine, StepReport};

// Internal re-exports - Resources
pub use crate::resources::{
    Bodies, CurrentScene, PhysicsEngine, SceneBounds, Scenes, SharedRng, TickCount, TimeScale,
};
