pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, PointMass, System, NVec2, Rgb};
pub use simulation::trail::Trail;
pub use simulation::error::SimError;
pub use simulation::forces::{ForceModel, ForceSet, NetForce, NewtonianGravity, circular_orbit_speed};
pub use simulation::integrator::euler_step;
pub use simulation::engine::Engine;
pub use simulation::params::{Parameters, AU, G, TIMESTEP};
pub use simulation::scenario::Simulation;

pub use configuration::config::{UpdateMode, EngineConfig, ParametersConfig, DisplayConfig, BodyConfig, ScenarioConfig};

pub use visualization::{vis2d::run_2d, headless::run_headless};

pub use benchmark::benchmark::bench_step;
