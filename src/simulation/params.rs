//! Numerical parameters for trajectory integration
//!
//! `Parameters` holds runtime settings:
//! - integration step size and step budget,
//! - capture and escape radii for the termination checks,
//! - singularity guard distance `eps` for the force evaluation

#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64, // step size
    pub n_steps: usize, // step budget per trajectory
    pub capture_radius: f64, // distance to an attractor that counts as captured
    pub escape_radius: f64, // distance from the origin that counts as escaped
    pub eps: f64, // skip an attractor closer than this when evaluating the force
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            dt: 0.004,
            n_steps: 5000,
            capture_radius: 0.03,
            escape_radius: 2.0,
            eps: 1e-9,
        }
    }
}
