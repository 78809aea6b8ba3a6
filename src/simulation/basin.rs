//! Basin-of-attraction map generation
//!
//! Drives the selected integrator over a uniform grid of zero-velocity
//! starting positions covering [-1, 1] x [-1, 1], classifies every sample,
//! and colors the result into a row-major RGB buffer: captured cells take
//! their attractor's color, escaped cells are white

use kdam::{tqdm, BarExt};

use crate::configuration::config::IntegratorConfig;
use crate::simulation::integrator::integrate;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{NVec2, Outcome, Particle};

/// Rasterized basin map: `grid_size` x `grid_size` cells, 3 bytes per cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasinMap {
    pub grid_size: usize,
    pub pixels: Vec<u8>, // row-major RGB
}

/// Classify every grid sample of the scenario with the given integrator
///
/// Row index i maps to y = -1 + 2i/(g-1), column index j to
/// x = -1 + 2j/(g-1). Each sample starts at rest and is fully independent
/// of every other sample. `show_progress` draws a kdam bar over the cells;
/// it has no effect on the returned outcomes
pub fn classify_grid(
    scenario: &Scenario,
    integrator: &IntegratorConfig,
    show_progress: bool,
) -> Vec<Outcome> {
    let g = scenario.engine.grid_size;
    // The index -> coordinate mapping divides by g - 1
    assert!(g >= 2, "grid size must be at least 2, got {g}");

    let denom = (g - 1) as f64;
    let mut outcomes = Vec::with_capacity(g * g);
    let mut pb = show_progress.then(|| tqdm!(total = g * g, desc = integrator.name(), unit = "px"));

    for i in 0..g {
        let y = -1.0 + 2.0 * i as f64 / denom;
        for j in 0..g {
            let x = -1.0 + 2.0 * j as f64 / denom;

            let p = Particle::stationary(NVec2::new(x, y));
            outcomes.push(integrate(
                integrator,
                p,
                &scenario.attractors,
                &scenario.forces,
                &scenario.parameters,
            ));

            if let Some(pb) = pb.as_mut() {
                let _ = pb.update(1);
            }
        }
    }

    outcomes
}

/// Generate the colored basin map for one integrator
///
/// Deterministic function of the scenario and integrator choice: repeated
/// calls produce byte-identical buffers
pub fn generate_map(
    scenario: &Scenario,
    integrator: &IntegratorConfig,
    show_progress: bool,
) -> BasinMap {
    let g = scenario.engine.grid_size;
    let outcomes = classify_grid(scenario, integrator, show_progress);

    let mut pixels = Vec::with_capacity(3 * g * g);
    for outcome in &outcomes {
        match outcome {
            Outcome::Captured(idx) => {
                for channel in scenario.attractors[*idx].color {
                    pixels.push((255.0 * channel) as u8);
                }
            }
            // Escaped trajectories render white
            Outcome::Escaped => pixels.extend_from_slice(&[255, 255, 255]),
        }
    }

    BasinMap {
        grid_size: g,
        pixels,
    }
}
