//! Build a fully-initialized simulation from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Simulation` containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - active force set (`ForceSet`)
//!
//! The simulation is inserted into Bevy as a `Resource` and stepped by the
//! viewer or the headless runner.

use bevy::log::{info, warn};
use bevy::prelude::Resource;

use crate::configuration::config::{BodyConfig, ScenarioConfig, UpdateMode};
use crate::simulation::engine::Engine;
use crate::simulation::error::SimError;
use crate::simulation::forces::{ForceSet, NewtonianGravity};
use crate::simulation::integrator::euler_step;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};

/// Bevy resource owning the bodies and everything needed to step them
#[derive(Resource)]
pub struct Simulation {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: ForceSet,
}

impl Simulation {
    /// Simulation with Newtonian gravity as the only force.
    /// See [`Simulation::with_forces`] for how the bodies are taken over.
    pub fn new(engine: Engine, parameters: Parameters, bodies: Vec<Body>) -> Result<Self, SimError> {
        let forces = ForceSet::new().with(NewtonianGravity { G: parameters.G });
        Self::with_forces(engine, parameters, bodies, forces)
    }

    /// Simulation driven by an arbitrary force set.
    ///
    /// Every body's trail is replaced by an empty one sized by
    /// `engine.trail_capacity`, whatever trail the body arrived with.
    pub fn with_forces(
        engine: Engine,
        parameters: Parameters,
        bodies: Vec<Body>,
        forces: ForceSet,
    ) -> Result<Self, SimError> {
        parameters.validate()?;

        // Trail length is an engine setting, applied uniformly
        let bodies = bodies
            .into_iter()
            .map(|b| b.with_trail_capacity(engine.trail_capacity))
            .collect();

        let system = System::new(bodies)?;

        if system.primary.is_none() && !system.bodies.is_empty() {
            warn!("no primary body, distance to primary stays 0");
        }
        if engine.parallel && engine.update == UpdateMode::Sequential {
            warn!("parallel force phase only applies to simultaneous update, running serially");
        }

        Ok(Self {
            engine,
            parameters,
            system,
            forces,
        })
    }

    pub fn build_simulation(cfg: ScenarioConfig) -> Result<Self, SimError> {
        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let bodies = cfg
            .bodies
            .iter()
            .enumerate()
            .map(|(i, bc)| body_from_config(i, bc))
            .collect::<Result<Vec<Body>, SimError>>()?;

        // Parameters (runtime) from ParametersConfig
        let parameters = Parameters {
            timestep: cfg.parameters.timestep,
            G: cfg.parameters.g,
        };

        // Engine (runtime) from EngineConfig
        let engine = Engine {
            update: cfg.engine.update,
            parallel: cfg.engine.parallel,
            trail_capacity: cfg.engine.trail_capacity,
        };

        let sim = Self::new(engine, parameters, bodies)?;
        info!(
            "built simulation: {} bodies, dt = {} s, {:?} update",
            sim.system.bodies.len(),
            sim.parameters.timestep,
            sim.engine.update
        );
        Ok(sim)
    }

    /// Advance every body by one time step
    ///
    /// On error nothing has changed and the step can be inspected or abandoned.
    pub fn step(&mut self) -> Result<(), SimError> {
        euler_step(&mut self.system, &self.forces, &self.parameters, &self.engine)
    }

    pub fn bodies(&self) -> &[Body] {
        &self.system.bodies
    }

    pub fn primary(&self) -> Option<&Body> {
        self.system.primary_body()
    }

    pub fn steps(&self) -> u64 {
        self.system.steps
    }

    /// Simulated seconds since the start
    pub fn elapsed(&self) -> f64 {
        self.system.t
    }
}

fn vector_from_config(body: usize, field: &'static str, values: &[f64]) -> Result<NVec2, SimError> {
    match values {
        [x, y] => Ok(NVec2::new(*x, *y)),
        _ => Err(SimError::InvalidVector { body, field, len: values.len() }),
    }
}

fn body_from_config(i: usize, bc: &BodyConfig) -> Result<Body, SimError> {
    let x = vector_from_config(i, "x", &bc.x)?;
    let v = vector_from_config(i, "v", &bc.v)?;

    let name = if bc.name.is_empty() {
        format!("body {i}")
    } else {
        bc.name.clone()
    };

    let mut body = Body::new(x, v, bc.m)?
        .with_name(name)
        .with_radius(bc.radius)
        .with_color(bc.color);
    if bc.primary {
        body = body.as_primary();
    }
    Ok(body)
}
