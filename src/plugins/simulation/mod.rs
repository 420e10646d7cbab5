//! Simulation plugin - Self-contained plugin pattern
//!
//! Owns the body collection, the engine and the scene catalogue as
//! resources, loads the initial scene, reacts to [`SimulationCommand`]
//! events and advances the engine one step per frame while running.
//! Nothing here renders; a frontend reads [`Bodies`] and the engine's merge
//! effects after [`SimulationSet::Physics`].

use crate::config::clamp_time_scale;
use crate::prelude::*;
use crate::scenes::SceneRegistry;

mod actions;
mod physics;

pub use actions::SimulationWorld;
use actions::{handle_simulation_commands, load_initial_scene};
use physics::{exit_after_max_ticks, step_simulation};

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    Input,
    Physics,
}

#[derive(Default)]
pub struct SimulationPlugin {
    config: Option<SimulationConfig>,
}

impl SimulationPlugin {
    /// Plugin that reads the user configuration when it is built
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SimulationConfig) -> Self {
        Self {
            config: Some(config),
        }
    }
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let config = self
            .config
            .clone()
            .unwrap_or_else(SimulationConfig::load_from_user_config);

        match toml::to_string_pretty(&config) {
            Ok(toml_string) => {
                debug!("=== Current Configuration (TOML) ===\n{}", toml_string);
                debug!("=== End Configuration ===");
            }
            Err(e) => {
                error!("Failed to serialize configuration to TOML: {}", e);
            }
        }

        app.insert_resource(SharedRng::from_optional_seed(config.physics.initial_seed));
        app.insert_resource(SceneBounds::new(config.scene.width, config.scene.height));
        app.insert_resource(TimeScale(clamp_time_scale(config.physics.time_scale)));
        app.insert_resource(PhysicsEngine(Engine::from_config(&config.physics)));
        app.insert_resource(Scenes(SceneRegistry::new().with_standard_scenes()));
        app.init_resource::<Bodies>();
        app.init_resource::<CurrentScene>();
        app.init_resource::<TickCount>();
        app.insert_resource(config);

        app.add_event::<SimulationCommand>();

        if !app.is_plugin_added::<bevy::state::app::StatesPlugin>() {
            app.add_plugins(bevy::state::app::StatesPlugin);
        }
        app.init_state::<AppState>();

        app.configure_sets(
            Update,
            (SimulationSet::Input, SimulationSet::Physics).chain(),
        );

        app.add_systems(Startup, load_initial_scene);
        app.add_systems(
            Update,
            (
                handle_simulation_commands.in_set(SimulationSet::Input),
                (
                    step_simulation.run_if(in_state(AppState::Running)),
                    exit_after_max_ticks,
                )
                    .chain()
                    .in_set(SimulationSet::Physics),
            ),
        );
    }
}
