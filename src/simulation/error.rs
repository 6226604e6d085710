//! Error type shared by the physics core
//!
//! Every failure the core can report is a `SimError`. Configuration
//! problems are caught while building a `Simulation`; only
//! `DegenerateDistance` can surface from `step()`.

use std::error::Error;
use std::fmt;

#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub enum SimError {
    /// Two bodies occupy the same position, or are so close the force overflows
    DegenerateDistance { body: usize, other: usize },
    /// A body was given a mass that is zero, negative or NaN
    NonPositiveMass { mass: f64 },
    /// More than one body carries the primary flag
    MultiplePrimaries { first: usize, second: usize },
    /// A configured vector does not have exactly two components
    InvalidVector { body: usize, field: &'static str, len: usize },
    /// Position or velocity contains NaN or infinity
    NonFiniteState { body: usize },
    InvalidTimestep(f64),
    InvalidGravitationalConstant(f64),
    /// Viewer tick rate that is zero, negative or not finite
    InvalidFrameRate(f64),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::DegenerateDistance { body, other } => write!(
                f,
                "bodies {body} and {other} coincide or are too close, gravitational force is undefined"
            ),
            SimError::NonPositiveMass { mass } => {
                write!(f, "body mass must be positive, got {mass}")
            }
            SimError::MultiplePrimaries { first, second } => write!(
                f,
                "bodies {first} and {second} are both marked primary, at most one is allowed"
            ),
            SimError::InvalidVector { body, field, len } => write!(
                f,
                "body {body}: `{field}` must have 2 components, got {len}"
            ),
            SimError::NonFiniteState { body } => {
                write!(f, "body {body} has a non-finite position or velocity")
            }
            SimError::InvalidTimestep(dt) => {
                write!(f, "timestep must be positive and finite, got {dt}")
            }
            SimError::InvalidGravitationalConstant(g) => write!(
                f,
                "gravitational constant must be non-negative and finite, got {g}"
            ),
            SimError::InvalidFrameRate(fps) => {
                write!(f, "display fps must be positive and finite, got {fps}")
            }
        }
    }
}

impl Error for SimError {}
