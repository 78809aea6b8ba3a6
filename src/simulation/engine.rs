//! High-level runtime engine settings
//!
//! Selects the integrator and the sampling resolution used when
//! rasterizing a `Scenario`

use crate::configuration::config::IntegratorConfig;

#[derive(Debug, Clone)]
pub struct Engine {
    pub integrator: IntegratorConfig, // rk4 or symplectic
    pub grid_size: usize, // samples per image side
}
