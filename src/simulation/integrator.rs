//! Fixed-step semi-implicit Euler integrator for the N-body system
//!
//! Each body gets `v += F/m * dt` followed by `x += v * dt` with the new
//! velocity. Two orderings are supported:
//!
//! - sequential:   bodies update in list order and body k already sees the
//!                 new positions of bodies 0..k
//! - simultaneous: every force of the step reads the positions from the
//!                 start of the step
//!
//! Both work on scratch buffers and only write back to the bodies once every
//! force evaluated cleanly, so a failed step leaves the system untouched.

use bevy::log::debug;
use rayon::prelude::*;

use super::engine::Engine;
use super::error::SimError;
use super::forces::{ForceSet, NetForce};
use super::params::Parameters;
use super::states::{NVec2, PointMass, System};
use crate::configuration::config::UpdateMode;

/// Advance the system by one step of `params.timestep`
///
/// Updates velocity, position, trail and distance-to-primary of every body,
/// then `sys.t` and `sys.steps`.
pub fn euler_step(
    sys: &mut System,
    forces: &ForceSet,
    params: &Parameters,
    engine: &Engine,
) -> Result<(), SimError> {
    let dt = params.timestep;
    let n = sys.bodies.len();

    // Scratch state: positions the force models read, velocities being advanced
    let mut points = sys.point_masses();
    let mut velocities: Vec<NVec2> = sys.bodies.iter().map(|b| b.v).collect();
    let mut distances: Vec<Option<f64>> = vec![None; n];

    match engine.update {
        UpdateMode::Sequential => {
            for i in 0..n {
                let net = forces.net_force(i, &points, sys.primary)?;
                distances[i] = net.distance_to_primary;

                // Kick then drift; later bodies see this new position
                velocities[i] += net.force * (dt / points[i].m);
                points[i].x += velocities[i] * dt;
            }
        }
        UpdateMode::Simultaneous => {
            let nets = snapshot_forces(&points, forces, sys.primary, engine.parallel)?;

            for (i, net) in nets.iter().enumerate() {
                distances[i] = net.distance_to_primary;
                velocities[i] += net.force * (dt / points[i].m);
                points[i].x += velocities[i] * dt;
            }
        }
    }

    // Every pair was fine, commit
    for (i, b) in sys.bodies.iter_mut().enumerate() {
        b.v = velocities[i];
        b.x = points[i].x;
        b.trail.push(b.x);
        b.distance_to_primary = distances[i].unwrap_or(0.0);
    }

    sys.t += dt;
    sys.steps += 1;

    debug!("step {} done, t = {:.0} s, {} bodies", sys.steps, sys.t, n);

    Ok(())
}

/// Net force on every body from one frozen set of positions
fn snapshot_forces(
    points: &[PointMass],
    forces: &ForceSet,
    primary: Option<usize>,
    parallel: bool,
) -> Result<Vec<NetForce>, SimError> {
    if parallel {
        // Read-only over the snapshot; write-back stays serial in the caller
        (0..points.len())
            .into_par_iter()
            .map(|i| forces.net_force(i, points, primary))
            .collect()
    } else {
        (0..points.len())
            .map(|i| forces.net_force(i, points, primary))
            .collect()
    }
}
