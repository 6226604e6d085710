//! Windowless runner
//!
//! Steps the simulation a fixed number of times inside a minimal Bevy app so
//! the usual log output is available, reports distances periodically, then
//! exits.

use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;

use crate::simulation::scenario::Simulation;

#[derive(Resource)]
struct HeadlessRun {
    remaining: u64,
    report_every: u64,
}

pub fn run_headless(sim: Simulation, steps: u64, report_every: u64) {
    App::new()
        .insert_resource(sim)
        .insert_resource(HeadlessRun {
            remaining: steps,
            report_every: report_every.max(1),
        })
        .add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::ZERO)))
        .add_plugins(LogPlugin::default())
        .add_systems(Update, headless_step_system)
        .run();
}

fn headless_step_system(
    mut sim: ResMut<Simulation>,
    mut run: ResMut<HeadlessRun>,
    mut exit: EventWriter<AppExit>,
) {
    if run.remaining == 0 {
        report(&sim);
        exit.send(AppExit::Success);
        return;
    }

    match sim.step() {
        Ok(()) => {
            run.remaining -= 1;
            if sim.steps() % run.report_every == 0 {
                report(&sim);
            }
        }
        Err(e) => {
            error!("step {} failed: {e}", sim.steps() + 1);
            exit.send(AppExit::error());
        }
    }
}

/// Log every body's distance to the primary at the current step
pub fn report(sim: &Simulation) {
    let primary = match sim.primary() {
        Some(p) => p.name.clone(),
        None => "nothing (no primary)".to_string(),
    };

    info!("day {:.0}, step {}", sim.elapsed() / 86_400.0, sim.steps());
    for b in sim.bodies().iter().filter(|b| !b.primary) {
        info!(
            "  {:<10} {:>14.1} km from {}, trail {} points",
            b.name,
            b.distance_to_primary / 1000.0,
            primary,
            b.trail.len()
        );
    }
}
