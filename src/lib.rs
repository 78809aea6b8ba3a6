pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Attractor, Particle, Outcome, NVec2};
pub use simulation::forces::{Acceleration, AccelSet, InverseSquareGravity};
pub use simulation::integrator::{integrate, rk4_integrator, symplectic_integrator};
pub use simulation::basin::{classify_grid, generate_map, BasinMap};
pub use simulation::scenario::{Scenario, MAX_ATTRACTORS};
pub use simulation::params::Parameters;
pub use simulation::engine::Engine;

pub use configuration::config::{IntegratorConfig, EngineConfig, ParametersConfig, AttractorConfig, ScenarioConfig};

pub use visualization::ppm::write_ppm;

pub use benchmark::benchmark::{bench_force, bench_map};
