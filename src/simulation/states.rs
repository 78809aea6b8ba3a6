//! Core state types for the basin simulation.
//!
//! Defines the runtime structs shared by the force field, the integrators
//! and the map generator:
//! - `Attractor` — a fixed pole in the plane
//! - `Particle`  — the transient (position, velocity) pair being integrated
//! - `Outcome`   — how a trajectory ended

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// A fixed attracting pole of the potential V = -k/r.
#[derive(Debug, Clone)]
pub struct Attractor {
    pub k: f64, // strength (> 0)
    pub x: NVec2, // position, fixed for the whole run
    pub color: [f64; 3], // display color, channels in [0, 1]
}

/// Test particle state advanced by the integrators.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
}

impl Particle {
    /// Particle at rest, the starting state of every grid sample.
    pub fn stationary(x: NVec2) -> Self {
        Self {
            x,
            v: NVec2::zeros(),
        }
    }
}

/// Terminal classification of a trajectory.
///
/// There is no separate "ran out of steps" variant: a trajectory that
/// exhausts its step budget without resolving counts as `Escaped`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Captured(usize), // index into the attractor list
    Escaped,
}

impl Outcome {
    pub fn is_captured(&self) -> bool {
        matches!(self, Outcome::Captured(_))
    }
}
