//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds the runtime settings the integrator reads every step:
//! the fixed step size and the gravitational constant. The display scale is
//! not here, the physics never looks at it.

use super::error::SimError;

/// Newtonian gravitational constant (m^3 kg^-1 s^-2)
pub const G: f64 = 6.6743e-11;

/// Astronomical unit (m)
pub const AU: f64 = 149.6e6 * 1000.0;

/// One simulated day per step (s)
pub const TIMESTEP: f64 = 3600.0 * 24.0;

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub timestep: f64, // seconds advanced per step
    pub G: f64, // gravitational constant
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            timestep: TIMESTEP,
            G,
        }
    }
}

impl Parameters {
    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.timestep > 0.0 && self.timestep.is_finite()) {
            return Err(SimError::InvalidTimestep(self.timestep));
        }
        if !(self.G >= 0.0 && self.G.is_finite()) {
            return Err(SimError::InvalidGravitationalConstant(self.G));
        }
        Ok(())
    }
}
