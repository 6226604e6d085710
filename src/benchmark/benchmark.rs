use std::time::Instant;

use crate::configuration::config::UpdateMode;
use crate::simulation::engine::Engine;
use crate::simulation::params::{Parameters, AU};
use crate::simulation::scenario::Simulation;
use crate::simulation::states::{Body, NVec2};

/// Helper to build `n` bodies on a deterministic spiral, no rand needed
fn make_bodies(n: usize) -> Vec<Body> {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        let r = (1.0 + 0.01 * i_f) * AU;
        let angle = i_f * 0.37;
        let x = NVec2::new(angle.cos() * r, angle.sin() * r);
        let v = NVec2::new(-angle.sin(), angle.cos()) * 20.0e3;

        if let Ok(b) = Body::new(x, v, 5.0e24) {
            bodies.push(b);
        }
    }

    bodies
}

/// Average seconds per `step()` over `steps` steps, after one warm-up step
fn time_steps(n: usize, engine: Engine, steps: usize) -> Option<f64> {
    let mut sim = Simulation::new(engine, Parameters::default(), make_bodies(n)).ok()?;

    // Warm up
    sim.step().ok()?;

    let t0 = Instant::now();
    for _ in 0..steps {
        sim.step().ok()?;
    }
    Some(t0.elapsed().as_secs_f64() / steps as f64)
}

/// Time one step for growing N in each update mode
/// Paste output directly into a spreadsheet to graph
pub fn bench_step() {
    let ns = [50, 100, 200, 400, 800, 1600];
    let steps = 5;

    println!("N,sequential_ms,simultaneous_ms,parallel_ms");

    for n in ns {
        let modes = [
            Engine { update: UpdateMode::Sequential, ..Default::default() },
            Engine { update: UpdateMode::Simultaneous, ..Default::default() },
            Engine { update: UpdateMode::Simultaneous, parallel: true, ..Default::default() },
        ];

        let ms: Vec<String> = modes
            .into_iter()
            .map(|engine| match time_steps(n, engine, steps) {
                Some(s) => format!("{:.6}", s * 1000.0),
                None => "failed".to_string(),
            })
            .collect();

        println!("{},{}", n, ms.join(","));
    }
}
