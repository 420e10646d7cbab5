use crate::physics::body::Body;
use crate::physics::engine::Engine;
use crate::prelude::*;
use crate::scenes::SceneRegistry;
use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};

#[derive(Resource, Deref, DerefMut, Debug, Clone, PartialEq)]
pub struct SharedRng(pub ChaCha8Rng);

impl SharedRng {
    pub fn from_seed(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::default(),
        }
    }
}

impl Default for SharedRng {
    fn default() -> Self {
        Self(ChaCha8Rng::from_rng(&mut rand::rng()))
    }
}

/// Width and height of the rectangular area bodies bounce inside
#[derive(Resource, Copy, Clone, PartialEq, Debug)]
pub struct SceneBounds {
    pub width: Scalar,
    pub height: Scalar,
}

impl SceneBounds {
    pub fn new(width: Scalar, height: Scalar) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vector {
        Vector::new(self.width / 2.0, self.height / 2.0)
    }
}

impl Default for SceneBounds {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

#[derive(Resource, Deref, DerefMut, Copy, Clone, PartialEq, Debug)]
pub struct TimeScale(pub Scalar);

impl Default for TimeScale {
    fn default() -> Self {
        Self(1.0)
    }
}

/// The live body collection, in stable index order
#[derive(Resource, Deref, DerefMut, Clone, Default, Debug)]
pub struct Bodies(pub Vec<Body>);

#[derive(Resource, Deref, DerefMut, Clone, Default, Debug)]
pub struct PhysicsEngine(pub Engine);

#[derive(Resource, Deref, DerefMut, Clone, Default, Debug)]
pub struct Scenes(pub SceneRegistry);

/// Index of the scene the current bodies were built from
#[derive(Resource, Deref, DerefMut, Copy, Clone, Default, PartialEq, Eq, Debug)]
pub struct CurrentScene(pub usize);

/// Engine steps taken since the current scene was loaded
#[derive(Resource, Deref, DerefMut, Copy, Clone, Default, PartialEq, Eq, Debug)]
pub struct TickCount(pub u64);
