use std::time::Instant;

use crate::configuration::config::IntegratorConfig;
use crate::simulation::basin::generate_map;
use crate::simulation::engine::Engine;
use crate::simulation::forces::{AccelSet, InverseSquareGravity};
use crate::simulation::params::Parameters;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Attractor, NVec2};

/// Helper to build `n` deterministically placed attractors, no rand needed
fn make_attractors(n: usize) -> Vec<Attractor> {
    let mut attractors = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        attractors.push(Attractor {
            k: 1.0,
            x: NVec2::new((i_f * 0.37).sin() * 0.8, (i_f * 0.13).cos() * 0.8),
            color: [1.0, 0.5, 0.2],
        });
    }

    attractors
}

/// Helper for a benchmark scenario over `n` attractors at resolution `g`
fn make_scenario(n: usize, g: usize, n_steps: usize) -> Scenario {
    let parameters = Parameters {
        n_steps,
        ..Parameters::default()
    };
    let forces = AccelSet::new().with(InverseSquareGravity { eps: parameters.eps });

    Scenario {
        engine: Engine {
            integrator: IntegratorConfig::Rk4,
            grid_size: g,
        },
        parameters,
        attractors: make_attractors(n),
        forces,
    }
}

/// Time a single force evaluation sweep for a range of attractor counts
pub fn bench_force() {
    let ns = [2, 4, 8, 16, 32];
    let evals = 100_000;

    for n in ns {
        let attractors = make_attractors(n);
        let forces = AccelSet::new().with(InverseSquareGravity { eps: 1e-9 });
        let mut out = NVec2::zeros();

        // Warm up
        forces.accumulate_accel(&attractors, NVec2::new(0.1, 0.1), &mut out);

        let t0 = Instant::now();
        for i in 0..evals {
            let i_f = i as f64;
            // Sweep sample positions so the loop is not optimized away
            let pos = NVec2::new((i_f * 0.01).sin(), (i_f * 0.01).cos());
            forces.accumulate_accel(&attractors, pos, &mut out);
        }
        let per_eval = t0.elapsed().as_secs_f64() / evals as f64;

        println!("n = {n:3}, force eval = {:.3e} s", per_eval);
    }
}

/// Time full map generation for a range of grid sizes, both integrators
/// Paste output directly into a spreadsheet to graph
pub fn bench_map() {
    println!("grid,rk4_ms,symplectic_ms");

    for g in [50, 100, 200] {
        // Short step budget keeps the sweep in seconds rather than minutes
        let scenario = make_scenario(3, g, 500);

        let t0 = Instant::now();
        let _ = generate_map(&scenario, &IntegratorConfig::Rk4, false);
        let rk4_ms = t0.elapsed().as_secs_f64() * 1000.0;

        let t1 = Instant::now();
        let _ = generate_map(&scenario, &IntegratorConfig::Symplectic, false);
        let symp_ms = t1.elapsed().as_secs_f64() * 1000.0;

        println!("{},{:.3},{:.3}", g, rk4_ms, symp_ms);
    }
}
