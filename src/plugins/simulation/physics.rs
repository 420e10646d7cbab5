use crate::prelude::*;

/// Advance the engine by one tick
pub fn step_simulation(
    mut bodies: ResMut<Bodies>,
    mut engine: ResMut<PhysicsEngine>,
    bounds: Res<SceneBounds>,
    time_scale: Res<TimeScale>,
    mut tick_count: ResMut<TickCount>,
) {
    let report = engine.step(&mut bodies.0, bounds.width, bounds.height, time_scale.0);
    tick_count.0 += 1;

    if !report.mergers.is_empty() {
        debug!(
            "Tick {}: {} merger(s), {} bodies remain",
            tick_count.0,
            report.mergers.len(),
            bodies.len()
        );
    }
}

pub fn exit_after_max_ticks(
    config: Res<SimulationConfig>,
    tick_count: Res<TickCount>,
    mut exit: EventWriter<AppExit>,
) {
    let Some(max_ticks) = config.scene.max_ticks else {
        return;
    };

    if tick_count.0 >= max_ticks {
        info!("Reached {} ticks, exiting", max_ticks);
        exit.write(AppExit::Success);
    }
}
