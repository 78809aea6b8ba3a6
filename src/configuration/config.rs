//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! basin scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – integrator choice and sampling resolution
//! - [`ParametersConfig`] – numerical parameters of the integration
//! - [`AttractorConfig`]  – one entry per fixed attractor
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   integrator: "rk4"       # or "symplectic"
//!   grid_size: 500          # samples per image side
//!
//! parameters:
//!   dt: 0.004               # fixed step size
//!   n_steps: 5000           # step budget per trajectory
//!   capture_radius: 0.03    # capture distance to an attractor
//!   escape_radius: 2.0      # escape distance from the origin
//!   eps: 1.0e-9             # force singularity guard
//!
//! attractors:
//!   - k: 1.0
//!     x: [ -0.5, 0.0 ]
//!     color: [ 1.0, 0.0, 0.0 ]
//!   - k: 1.0
//!     x: [  0.5, 0.0 ]
//!     color: [ 0.0, 1.0, 0.0 ]
//! ```
//!
//! The engine then maps this configuration into its internal runtime
//! scenario representation.

use serde::Deserialize;

/// Which integrator advances the trajectories
/// integrator: "rk4" or integrator: "symplectic"
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum IntegratorConfig {
    #[serde(rename = "rk4")] // Classical 4th-order Runge–Kutta, higher local accuracy per step but not symplectic
    Rk4,

    #[serde(rename = "symplectic")] // Velocity-Verlet leapfrog. Symplectic, long-term energy behavior, fixed step size
    Symplectic,
}

impl IntegratorConfig {
    /// Map a selector name to its variant. Unknown names return `None`;
    /// callers treat that as a fatal configuration error, never a default
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "rk4" => Some(Self::Rk4),
            "symplectic" => Some(Self::Symplectic),
            _ => None,
        }
    }

    /// Selector name, also used to tag output files
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rk4 => "rk4",
            Self::Symplectic => "symplectic",
        }
    }
}

/// High-level engine configuration
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub integrator: IntegratorConfig, // integrator used for every trajectory
    pub grid_size: Option<usize>, // samples per image side, 500 when omitted
}

/// Global numerical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub dt: f64,             // step size
    pub n_steps: usize,      // step budget per trajectory
    pub capture_radius: f64, // capture distance to an attractor
    pub escape_radius: Option<f64>, // escape distance from the origin, 2.0 when omitted
    pub eps: Option<f64>,    // force singularity guard, 1e-9 when omitted
}

/// Configuration for a single attractor
#[derive(Deserialize, Debug)]
pub struct AttractorConfig {
    pub k: f64,          // strength of the pole, > 0
    pub x: Vec<f64>,     // position (x, y) in the plane
    pub color: Vec<f64>, // display color, three channels in [0, 1]
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // engine-level configuration (integrator, grid)
    pub parameters: ParametersConfig, // global numerical parameters
    pub attractors: Vec<AttractorConfig>, // fixed poles that define the scenario
}
