//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – update ordering, parallel force phase, trail length
//! - [`ParametersConfig`] – time step and gravitational constant
//! - [`DisplayConfig`]    – window and scale, read only by the viewer
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Every section except `bodies` may be omitted and falls back to its default.
//!
//! # YAML format
//! ```yaml
//! engine:
//!   update: "sequential"    # or "simultaneous"
//!   parallel: false         # rayon force phase, simultaneous only
//!   trail_capacity: 2000    # omit for an unbounded trail
//!
//! parameters:
//!   timestep: 86400.0       # seconds per step
//!   G: 6.6743e-11
//!
//! display:
//!   width: 800.0
//!   height: 800.0
//!   scale: 1.3369e-9        # pixels per meter
//!   fps: 60.0
//!
//! bodies:
//!   - name: "Sun"
//!     x: [0.0, 0.0]
//!     m: 1.98892e30
//!     radius: 30.0
//!     color: [255, 255, 0]
//!     primary: true
//!   - name: "Earth"
//!     x: [-1.496e11, 0.0]
//!     v: [0.0, 29783.0]
//!     m: 5.9742e24
//!     radius: 16.0
//!     color: [0, 0, 255]
//! ```

use serde::Deserialize;

use crate::simulation::error::SimError;
use crate::simulation::params::{AU, G, TIMESTEP};

/// How bodies are advanced within one step
/// `update: "sequential"` or `update: "simultaneous"`
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UpdateMode {
    #[default]
    #[serde(rename = "sequential")] // Bodies update in list order, later bodies see earlier bodies' new positions
    Sequential,

    #[serde(rename = "simultaneous")] // All forces of a step read the positions from the start of the step
    Simultaneous,
}

/// Engine configuration
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub update: UpdateMode,
    pub parallel: bool, // `true` - force phase runs on the rayon pool (simultaneous update only)
    pub trail_capacity: Option<usize>, // Keep only the most recent points, unbounded when absent
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub timestep: f64, // seconds per step
    #[serde(rename = "G")]
    pub g: f64, // gravitational constant
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            timestep: TIMESTEP,
            g: G,
        }
    }
}

/// Viewer settings, never read by the physics
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    pub width: f32,
    pub height: f32,
    pub scale: f64, // pixels per meter
    pub fps: f64, // physics ticks per second
    pub show_trails: bool,
    pub show_labels: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 800.0,
            scale: 200.0 / AU,
            fps: 60.0,
            show_trails: true,
            show_labels: true,
        }
    }
}

impl DisplayConfig {
    /// The viewer turns `fps` into a fixed tick period
    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.fps > 0.0 && self.fps.is_finite()) {
            return Err(SimError::InvalidFrameRate(self.fps));
        }
        Ok(())
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    #[serde(default)]
    pub name: String,
    pub x: Vec<f64>, // Initial position in meters
    #[serde(default = "zero_vector")]
    pub v: Vec<f64>, // Initial velocity in m/s
    pub m: f64, // Mass in kg
    #[serde(default = "default_radius")]
    pub radius: f64, // Display radius in pixels
    #[serde(default = "default_color")]
    pub color: [u8; 3],
    #[serde(default)]
    pub primary: bool, // Other bodies report their distance to this one
}

fn zero_vector() -> Vec<f64> {
    vec![0.0, 0.0]
}

fn default_radius() -> f64 {
    8.0
}

fn default_color() -> [u8; 3] {
    [255, 255, 255]
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    pub bodies: Vec<BodyConfig>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self::inner_solar_system()
    }
}

impl ScenarioConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Sun plus the four inner planets, starting on the x axis
    pub fn inner_solar_system() -> Self {
        let body = |name: &str, x: f64, vy: f64, m: f64, radius: f64, color: [u8; 3]| BodyConfig {
            name: name.to_string(),
            x: vec![x, 0.0],
            v: vec![0.0, vy],
            m,
            radius,
            color,
            primary: false,
        };

        let mut sun = body("Sun", 0.0, 0.0, 1.98892e30, 30.0, [255, 255, 0]);
        sun.primary = true;

        Self {
            engine: EngineConfig::default(),
            parameters: ParametersConfig::default(),
            display: DisplayConfig::default(),
            bodies: vec![
                sun,
                body("Earth", -1.0 * AU, 29.783e3, 5.9742e24, 16.0, [0, 0, 255]),
                body("Mars", -1.524 * AU, 24.077e3, 6.39e23, 12.0, [255, 0, 0]),
                body("Mercury", 0.387 * AU, -47.4e3, 0.33e23, 8.0, [80, 78, 81]),
                body("Venus", 0.723 * AU, -35.02e3, 4.8685e24, 14.0, [255, 255, 255]),
            ],
        }
    }
}
