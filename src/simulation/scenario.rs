//! Build fully-initialized simulation scenarios
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! consumed by the map generator:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - the fixed attractor list
//! - active force set (`AccelSet`)
//!
//! Scenarios can also be generated randomly, matching the ranges the
//! random demo uses: 2 to [`MAX_ATTRACTORS`] poles with strengths in
//! [0.5, 2.0], positions in [-1, 1]^2 and colors in [0.2, 1.0]

use rand::Rng;

use crate::configuration::config::{AttractorConfig, IntegratorConfig, ScenarioConfig};
use crate::simulation::engine::Engine;
use crate::simulation::forces::{AccelSet, InverseSquareGravity};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Attractor, NVec2};

/// Upper bound on the attractor count produced by [`Scenario::random`].
/// The core itself accepts attractor lists of any length
pub const MAX_ATTRACTORS: usize = 10;

/// A fully-initialized simulation scenario
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]
/// or generated randomly: it contains the engine settings, parameters,
/// attractor list, and the set of active force laws (accelerations)
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub attractors: Vec<Attractor>,
    pub forces: AccelSet,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Attractors: map `AttractorConfig` -> runtime `Attractor` using nalgebra vectors
        let attractors: Vec<Attractor> = cfg
            .attractors
            .iter()
            .map(|ac: &AttractorConfig| Attractor {
                k: ac.k,
                x: NVec2::new(ac.x[0], ac.x[1]),
                color: [ac.color[0], ac.color[1], ac.color[2]],
            })
            .collect();

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            dt: p_cfg.dt,
            n_steps: p_cfg.n_steps,
            capture_radius: p_cfg.capture_radius,
            escape_radius: p_cfg.escape_radius.unwrap_or(2.0),
            eps: p_cfg.eps.unwrap_or(1e-9),
        };

        // Engine (runtime) from EngineConfig
        let e_cfg = cfg.engine;
        let engine = Engine {
            integrator: e_cfg.integrator,
            grid_size: e_cfg.grid_size.unwrap_or(500),
        };

        // Forces: construct an AccelSet and register inverse-square gravity
        let forces = AccelSet::new().with(InverseSquareGravity { eps: parameters.eps });

        Self {
            engine,
            parameters,
            attractors,
            forces,
        }
    }

    /// Random scenario with default parameters and a 500x500 grid
    ///
    /// Randomness lives entirely here: once the attractor list is
    /// materialized the rest of the pipeline is deterministic
    pub fn random(rng: &mut impl Rng) -> Self {
        let n = rng.random_range(2..=MAX_ATTRACTORS);

        let attractors: Vec<Attractor> = (0..n)
            .map(|_| Attractor {
                k: rng.random_range(0.5..=2.0),
                x: NVec2::new(
                    rng.random_range(-1.0..=1.0),
                    rng.random_range(-1.0..=1.0),
                ),
                color: [
                    rng.random_range(0.2..=1.0),
                    rng.random_range(0.2..=1.0),
                    rng.random_range(0.2..=1.0),
                ],
            })
            .collect();

        let parameters = Parameters::default();
        let engine = Engine {
            integrator: IntegratorConfig::Rk4,
            grid_size: 500,
        };
        let forces = AccelSet::new().with(InverseSquareGravity { eps: parameters.eps });

        Self {
            engine,
            parameters,
            attractors,
            forces,
        }
    }
}
