//! Core state types for the N-body simulation.
//!
//! - `Body`      one point mass with its display attributes and trail
//! - `PointMass` the position/mass view the force models work on
//! - `System`    the list of bodies, the primary body and the simulation clock

use nalgebra::Vector2;

use super::error::SimError;
use super::trail::Trail;

pub type NVec2 = Vector2<f64>;

/// RGB color, only read by the renderer
pub type Rgb = [u8; 3];

#[derive(Debug, Clone)]
pub struct Body {
    pub name: String,
    pub x: NVec2, // position (m)
    pub v: NVec2, // velocity (m/s)
    pub m: f64, // mass (kg)
    pub radius: f64, // display radius (px)
    pub color: Rgb,
    pub primary: bool,
    pub distance_to_primary: f64, // refreshed every step, 0 for the primary itself
    pub trail: Trail,
}

impl Body {
    /// Body at `x` moving with `v`. Rejects a mass that is not strictly positive.
    pub fn new(x: NVec2, v: NVec2, m: f64) -> Result<Self, SimError> {
        // `!(m > 0.0)` also catches NaN
        if !(m > 0.0) {
            return Err(SimError::NonPositiveMass { mass: m });
        }
        Ok(Self {
            name: String::new(),
            x,
            v,
            m,
            radius: 1.0,
            color: [255, 255, 255],
            primary: false,
            distance_to_primary: 0.0,
            trail: Trail::unbounded(),
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    /// `Simulation` resizes every trail to the engine's `trail_capacity`
    pub(crate) fn with_trail_capacity(mut self, capacity: Option<usize>) -> Self {
        self.trail = Trail::with_capacity(capacity);
        self
    }

    pub fn as_primary(mut self) -> Self {
        self.primary = true;
        self
    }

    pub fn point_mass(&self, index: usize) -> PointMass {
        PointMass { index, x: self.x, m: self.m }
    }
}

/// What a force model needs to know about one side of a pair.
/// `index` is the body's position in the system and only identifies it in errors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointMass {
    pub index: usize,
    pub x: NVec2,
    pub m: f64,
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>,
    pub primary: Option<usize>, // index of the body others report distance to
    pub t: f64, // elapsed simulated time (s)
    pub steps: u64, // completed integration steps
}

impl System {
    /// Validate the initial bodies and locate the primary
    pub fn new(bodies: Vec<Body>) -> Result<Self, SimError> {
        let mut primary = None;

        for (i, b) in bodies.iter().enumerate() {
            if !(b.m > 0.0) {
                return Err(SimError::NonPositiveMass { mass: b.m });
            }
            if !(b.x.iter().all(|c| c.is_finite()) && b.v.iter().all(|c| c.is_finite())) {
                return Err(SimError::NonFiniteState { body: i });
            }
            if b.primary {
                if let Some(first) = primary {
                    return Err(SimError::MultiplePrimaries { first, second: i });
                }
                primary = Some(i);
            }
        }

        // Coincident bodies would divide by zero on the first step
        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                if bodies[i].x == bodies[j].x {
                    return Err(SimError::DegenerateDistance { body: i, other: j });
                }
            }
        }

        Ok(Self {
            bodies,
            primary,
            t: 0.0,
            steps: 0,
        })
    }

    pub fn primary_body(&self) -> Option<&Body> {
        self.primary.and_then(|i| self.bodies.get(i))
    }

    pub fn point_masses(&self) -> Vec<PointMass> {
        self.bodies
            .iter()
            .enumerate()
            .map(|(i, b)| b.point_mass(i))
            .collect()
    }
}
