//! High-level runtime engine settings
//!
//! Selects how bodies are updated within a step, whether the force phase
//! runs in parallel, and how much trail each body keeps.

use crate::configuration::config::UpdateMode;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Engine {
    pub update: UpdateMode, // sequential (in list order) or simultaneous (snapshot)
    pub parallel: bool, // rayon force phase, simultaneous update only
    pub trail_capacity: Option<usize>, // None = unbounded trail
}
