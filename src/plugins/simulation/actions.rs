//! Action handlers for simulation commands

use crate::config::clamp_time_scale;
use crate::prelude::*;
use crate::scenes::spawn_body_from_drag;
use bevy::ecs::system::SystemParam;

/// Every resource a command may touch, borrowed together
#[derive(SystemParam)]
pub struct SimulationWorld<'w> {
    pub scenes: Res<'w, Scenes>,
    pub bounds: Res<'w, SceneBounds>,
    pub rng: ResMut<'w, SharedRng>,
    pub bodies: ResMut<'w, Bodies>,
    pub engine: ResMut<'w, PhysicsEngine>,
    pub current_scene: ResMut<'w, CurrentScene>,
    pub tick_count: ResMut<'w, TickCount>,
}

impl SimulationWorld<'_> {
    /// Replace all bodies with a fresh build of the scene at `index`.
    ///
    /// An out-of-range index loads the first scene.
    pub fn load_scene(&mut self, index: usize) {
        let Some((index, scene)) = self.scenes.get_or_first(index) else {
            warn!("No scenes registered, keeping current bodies");
            return;
        };

        let bodies = scene.build(*self.bounds, &mut self.rng);
        info!(
            "Loaded scene {} \"{}\" with {} bodies",
            index,
            scene.name,
            bodies.len()
        );

        self.bodies.0 = bodies;
        self.engine.reset_effects();
        self.current_scene.0 = index;
        self.tick_count.0 = 0;
    }

    pub fn load_random_scene(&mut self) {
        let Some((index, _)) = self.scenes.random(&mut self.rng) else {
            warn!("No scenes registered, keeping current bodies");
            return;
        };
        self.load_scene(index);
    }

    pub fn restart(&mut self) {
        let index = self.current_scene.0;
        self.load_scene(index);
    }
}

pub fn load_initial_scene(config: Res<SimulationConfig>, mut world: SimulationWorld) {
    match config.scene.preset {
        Some(index) => world.load_scene(index),
        None => world.load_random_scene(),
    }
}

/// Apply queued commands in the order they were sent
pub fn handle_simulation_commands(
    mut commands_reader: EventReader<SimulationCommand>,
    current_state: Res<State<AppState>>,
    mut next_state: ResMut<NextState<AppState>>,
    mut time_scale: ResMut<TimeScale>,
    mut world: SimulationWorld,
) {
    let mut state = *current_state.get();

    for command in commands_reader.read() {
        match *command {
            SimulationCommand::Restart => world.restart(),
            SimulationCommand::TogglePause => {
                state = state.toggled();
                info!("Simulation {:?}", state);
                next_state.set(state);
            }
            SimulationCommand::ToggleCollisions => {
                let enabled = !world.engine.collisions_enabled();
                world.engine.set_collisions_enabled(enabled);
                info!(
                    "Collisions {}",
                    if enabled { "enabled" } else { "disabled" }
                );
            }
            SimulationCommand::SetTimeScale(requested) => {
                time_scale.0 = clamp_time_scale(requested);
            }
            SimulationCommand::LoadScene(index) => world.load_scene(index),
            SimulationCommand::RandomScene => world.load_random_scene(),
            SimulationCommand::SpawnFromDrag { start, end } => {
                let body = spawn_body_from_drag(start, end, &mut world.rng);
                debug!("Spawned body {} with mass {:.2}", body.id, body.mass);
                world.bodies.push(body);
            }
        }
    }
}
