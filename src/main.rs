use bevy::log::{Level, LogPlugin};
use bevy::state::app::StatesPlugin;
use clap::Parser;
use gravitas::cli::{Args, handle_list_presets, load_and_apply_config};
use gravitas::physics::diagnostics::{center_of_mass, kinetic_energy, total_mass, total_momentum};
use gravitas::plugins::simulation::SimulationPlugin;
use gravitas::prelude::*;

fn main() -> AppExit {
    let args = Args::parse();

    if args.list_presets {
        handle_list_presets();
        return AppExit::Success;
    }

    let config = match load_and_apply_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return AppExit::error();
        }
    };

    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let mut app = App::new();
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        LogPlugin {
            level,
            ..default()
        },
    ));
    app.add_plugins(SimulationPlugin::with_config(config));
    app.add_systems(Last, log_summary_on_exit);

    app.run()
}

fn log_summary_on_exit(
    mut exit_events: EventReader<AppExit>,
    bodies: Res<Bodies>,
    engine: Res<PhysicsEngine>,
    tick_count: Res<TickCount>,
    current_scene: Res<CurrentScene>,
    scenes: Res<Scenes>,
) {
    if exit_events.read().last().is_none() {
        return;
    }

    let scene_name = scenes.get(current_scene.0).map_or("unknown", |scene| scene.name);
    let momentum = total_momentum(&bodies);

    info!("=== Simulation summary ===");
    info!("Scene: {} ({} ticks)", scene_name, tick_count.0);
    info!("Bodies: {}", bodies.len());
    info!("Total mass: {:.3}", total_mass(&bodies));
    info!("Total momentum: ({:.4}, {:.4})", momentum.x, momentum.y);
    info!("Kinetic energy: {:.4}", kinetic_energy(&bodies));
    if let Some(center) = center_of_mass(&bodies) {
        info!("Center of mass: ({:.2}, {:.2})", center.x, center.y);
    }
    info!("Active merge effects: {}", engine.merge_effects().len());
}
