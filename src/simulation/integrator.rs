//! Fixed-step trajectory integrators
//!
//! Provides the classic 4th-order Runge–Kutta scheme and a symplectic
//! velocity–Verlet scheme, both driven by an `AccelSet` and `Parameters`.
//! Each advances a single `Particle` until it is captured by an attractor,
//! leaves the escape radius, or runs out of steps

use crate::configuration::config::IntegratorConfig;
use crate::simulation::forces::AccelSet;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Attractor, NVec2, Outcome, Particle};

/// Evaluate the net acceleration at `pos`
fn accel(attractors: &[Attractor], forces: &AccelSet, pos: NVec2) -> NVec2 {
    let mut a = NVec2::zeros();
    forces.accumulate_accel(attractors, pos, &mut a);
    a
}

/// Post-step termination check, shared by both integrators
///
/// Capture is checked first, in attractor order, so the first attractor
/// within `capture_radius` wins ties. Escape is the particle leaving
/// `escape_radius` from the origin
fn check_termination(p: &Particle, attractors: &[Attractor], params: &Parameters) -> Option<Outcome> {
    for (i, att) in attractors.iter().enumerate() {
        if (p.x - att.x).norm() < params.capture_radius {
            return Some(Outcome::Captured(i));
        }
    }
    if p.x.norm() > params.escape_radius {
        return Some(Outcome::Escaped);
    }
    None
}

/// Advance `p` with classic RK4 until the trajectory resolves
///
/// Both state vectors are advanced simultaneously from the four stage
/// derivatives with weights (1, 2, 2, 1)/6. Exhausting the step budget
/// counts as escaped
pub fn rk4_integrator(
    mut p: Particle,
    attractors: &[Attractor],
    forces: &AccelSet,
    params: &Parameters,
) -> Outcome {
    let dt = params.dt;

    for _ in 0..params.n_steps {
        // Stage 1: derivatives at the current state
        let a1 = accel(attractors, forces, p.x);
        let k1v = dt * a1;
        let k1p = dt * p.v;

        // Stage 2: derivatives at the half-step state using k1
        let a2 = accel(attractors, forces, p.x + 0.5 * k1p);
        let k2v = dt * a2;
        let k2p = dt * (p.v + 0.5 * k1v);

        // Stage 3: derivatives at the half-step state using k2
        let a3 = accel(attractors, forces, p.x + 0.5 * k2p);
        let k3v = dt * a3;
        let k3p = dt * (p.v + 0.5 * k2v);

        // Stage 4: derivatives at the full-step state using k3
        let a4 = accel(attractors, forces, p.x + k3p);
        let k4v = dt * a4;
        let k4p = dt * (p.v + k3v);

        // Weighted combination, velocity and position together
        p.v += (k1v + 2.0 * k2v + 2.0 * k3v + k4v) / 6.0;
        p.x += (k1p + 2.0 * k2p + 2.0 * k3p + k4p) / 6.0;

        if let Some(outcome) = check_termination(&p, attractors, params) {
            return outcome;
        }
    }

    // Step budget exhausted without resolving
    Outcome::Escaped
}

/// Advance `p` with velocity–Verlet until the trajectory resolves
///
/// Kick–drift–kick splitting: half-step velocity update at the current
/// position, full-step position update, second half-step velocity update
/// at the new position. Lower order than RK4 but symplectic, which is what
/// makes its basin boundaries visibly differ from the RK4 ones
pub fn symplectic_integrator(
    mut p: Particle,
    attractors: &[Attractor],
    forces: &AccelSet,
    params: &Parameters,
) -> Outcome {
    let dt = params.dt;
    let half_dt = 0.5 * dt;

    for _ in 0..params.n_steps {
        // Kick: v_n+1/2 = v_n + (dt/2) a(x_n)
        p.v += half_dt * accel(attractors, forces, p.x);

        // Drift: x_n+1 = x_n + dt v_n+1/2
        p.x += dt * p.v;

        // Second kick: v_n+1 = v_n+1/2 + (dt/2) a(x_n+1)
        p.v += half_dt * accel(attractors, forces, p.x);

        if let Some(outcome) = check_termination(&p, attractors, params) {
            return outcome;
        }
    }

    Outcome::Escaped
}

/// Run the integrator selected by `kind`
pub fn integrate(
    kind: &IntegratorConfig,
    p: Particle,
    attractors: &[Attractor],
    forces: &AccelSet,
    params: &Parameters,
) -> Outcome {
    match kind {
        IntegratorConfig::Rk4 => rk4_integrator(p, attractors, forces, params),
        IntegratorConfig::Symplectic => symplectic_integrator(p, attractors, forces, params),
    }
}
