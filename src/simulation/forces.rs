//! Pairwise force contributors for the n-body engine
//!
//! A `ForceModel` gives the force one point mass feels from another.
//! `ForceSet` sums every registered model over all pairs for one body,
//! skipping the body itself by index.

use crate::simulation::error::SimError;
use crate::simulation::states::{NVec2, PointMass};

/// Collection of pairwise force terms (gravity, test forces, etc.)
/// Contributions of all terms are summed into one force per body
pub struct ForceSet {
    terms: Vec<Box<dyn ForceModel + Send + Sync>>,
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: ForceModel + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Force on `points[i]` from every other entry of `points` (n - 1 pairs)
    ///
    /// When `primary` names one of the other bodies, the separation measured
    /// for that pair is returned alongside the force.
    pub fn net_force(
        &self,
        i: usize,
        points: &[PointMass],
        primary: Option<usize>,
    ) -> Result<NetForce, SimError> {
        let body = &points[i];
        let mut net = NetForce {
            force: NVec2::zeros(),
            distance_to_primary: None,
        };

        for (j, other) in points.iter().enumerate() {
            if j == i {
                continue;
            }

            if primary == Some(j) {
                net.distance_to_primary = Some((other.x - body.x).norm());
            }

            for term in &self.terms {
                net.force += term.attraction(body, other)?;
            }
        }

        Ok(net)
    }
}

/// Summed force on one body plus the distance to the primary seen while summing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetForce {
    pub force: NVec2,
    pub distance_to_primary: Option<f64>,
}

/// Force exerted on `body` by `other`
/// Implementations must not be called with the same body on both sides
pub trait ForceModel {
    fn attraction(&self, body: &PointMass, other: &PointMass) -> Result<NVec2, SimError>;
}

/// 2D Newtonian gravity, no softening
/// Coincident bodies, or bodies so close that the force overflows, are an
/// error rather than an infinite force
#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
}

impl ForceModel for NewtonianGravity {
    fn attraction(&self, body: &PointMass, other: &PointMass) -> Result<NVec2, SimError> {
        // r points from body to other, so the pull on body is along +r
        let r = other.x - body.x;
        let distance = r.norm();

        if !(distance > 0.0 && distance.is_finite()) {
            return Err(SimError::DegenerateDistance {
                body: body.index,
                other: other.index,
            });
        }

        // F = G m1 m2 / d^2, split into components along the angle to other
        let force = self.G * body.m * other.m / (distance * distance);
        if !force.is_finite() {
            return Err(SimError::DegenerateDistance {
                body: body.index,
                other: other.index,
            });
        }
        let theta = r.y.atan2(r.x);

        Ok(NVec2::new(theta.cos() * force, theta.sin() * force))
    }
}

/// Speed of a circular orbit of radius `r` around a mass `m_central`
#[allow(non_snake_case)]
pub fn circular_orbit_speed(G: f64, m_central: f64, r: f64) -> f64 {
    (G * m_central / r).sqrt()
}
