use basinsim::configuration::config::{IntegratorConfig, ScenarioConfig};
use basinsim::simulation::basin::generate_map;
use basinsim::simulation::engine::Engine;
use basinsim::simulation::forces::{AccelSet, InverseSquareGravity};
use basinsim::simulation::integrator::{rk4_integrator, symplectic_integrator};
use basinsim::simulation::params::Parameters;
use basinsim::simulation::scenario::Scenario;
use basinsim::simulation::states::{Attractor, NVec2, Outcome, Particle};
use basinsim::visualization::ppm::write_ppm;

/// Build an attractor at (x, y)
pub fn attractor_at(x: f64, y: f64, k: f64, color: [f64; 3]) -> Attractor {
    Attractor {
        k,
        x: NVec2::new(x, y),
        color,
    }
}

/// Symmetric two-attractor configuration on the x-axis
pub fn twin_attractors() -> Vec<Attractor> {
    vec![
        attractor_at(-0.5, 0.0, 1.0, [1.0, 0.0, 0.0]),
        attractor_at(0.5, 0.0, 1.0, [0.0, 1.0, 0.0]),
    ]
}

/// Default numerical parameters for tests
pub fn test_params() -> Parameters {
    Parameters {
        dt: 0.004,
        n_steps: 5000,
        capture_radius: 0.03,
        escape_radius: 2.0,
        eps: 1e-9,
    }
}

/// Build the gravity term + AccelSet
pub fn gravity_set(p: &Parameters) -> AccelSet {
    AccelSet::new().with(InverseSquareGravity { eps: p.eps })
}

/// Assemble a scenario for map tests
pub fn scenario_with(
    attractors: Vec<Attractor>,
    parameters: Parameters,
    grid_size: usize,
    integrator: IntegratorConfig,
) -> Scenario {
    let forces = gravity_set(&parameters);
    Scenario {
        engine: Engine {
            integrator,
            grid_size,
        },
        parameters,
        attractors,
        forces,
    }
}

/// Net acceleration at `pos`
fn accel_at(attractors: &[Attractor], forces: &AccelSet, pos: NVec2) -> NVec2 {
    let mut a = NVec2::zeros();
    forces.accumulate_accel(attractors, pos, &mut a);
    a
}

// ==================================================================================
// Force tests
// ==================================================================================

#[test]
fn force_points_toward_attractor() {
    let attractors = vec![attractor_at(0.0, 0.0, 1.0, [1.0, 1.0, 1.0])];
    let p = test_params();
    let forces = gravity_set(&p);

    // k/r^2 = 1 at unit distance, directed toward the pole
    let a = accel_at(&attractors, &forces, NVec2::new(1.0, 0.0));

    assert!(
        (a - NVec2::new(-1.0, 0.0)).norm() < 1e-12,
        "Expected (-1, 0), got {:?}",
        a
    );
}

#[test]
fn force_inverse_square_law() {
    let attractors = vec![attractor_at(0.0, 0.0, 1.0, [1.0, 1.0, 1.0])];
    let p = test_params();
    let forces = gravity_set(&p);

    let a_r = accel_at(&attractors, &forces, NVec2::new(1.0, 0.0));
    let a_2r = accel_at(&attractors, &forces, NVec2::new(2.0, 0.0));

    let ratio = a_r.norm() / a_2r.norm();

    assert!((ratio - 4.0).abs() < 1e-9, "Expected ~4x, got {}", ratio);
}

#[test]
fn force_skips_coincident_attractor() {
    // First pole sits exactly on the sample; only the second contributes
    let attractors = vec![
        attractor_at(0.0, 0.0, 1.0, [1.0, 1.0, 1.0]),
        attractor_at(1.0, 0.0, 1.0, [1.0, 1.0, 1.0]),
    ];
    let p = test_params();
    let forces = gravity_set(&p);

    let a = accel_at(&attractors, &forces, NVec2::new(0.0, 0.0));

    assert!(
        (a - NVec2::new(1.0, 0.0)).norm() < 1e-12,
        "Coincident pole was not skipped: {:?}",
        a
    );
}

#[test]
fn force_symmetric_midpoint_cancels() {
    let attractors = twin_attractors();
    let p = test_params();
    let forces = gravity_set(&p);

    let a = accel_at(&attractors, &forces, NVec2::new(0.0, 0.0));

    assert!(a.norm() < 1e-12, "Net force at midpoint not zero: {:?}", a);
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn capture_inside_radius_on_first_check() {
    // Weak pole so one step barely moves the particle
    let attractors = vec![attractor_at(0.0, 0.0, 1e-6, [1.0, 1.0, 1.0])];
    let p = test_params();
    let forces = gravity_set(&p);
    let start = Particle::stationary(NVec2::new(0.01, 0.0));

    assert_eq!(rk4_integrator(start, &attractors, &forces, &p), Outcome::Captured(0));
    assert_eq!(symplectic_integrator(start, &attractors, &forces, &p), Outcome::Captured(0));
}

#[test]
fn capture_tie_goes_to_first_attractor() {
    // Sample within the capture radius of both poles
    let attractors = vec![
        attractor_at(0.0, 0.0, 1e-6, [1.0, 1.0, 1.0]),
        attractor_at(0.005, 0.0, 1e-6, [1.0, 1.0, 1.0]),
    ];
    let p = test_params();
    let forces = gravity_set(&p);
    let start = Particle::stationary(NVec2::new(0.002, 0.0));

    assert_eq!(rk4_integrator(start, &attractors, &forces, &p), Outcome::Captured(0));
    assert_eq!(symplectic_integrator(start, &attractors, &forces, &p), Outcome::Captured(0));
}

#[test]
fn deep_interior_points_agree_across_integrators() {
    let attractors = twin_attractors();
    let p = test_params();
    let forces = gravity_set(&p);

    // Far from the basin boundary the two integrators must classify alike
    let near_left = Particle::stationary(NVec2::new(-0.4, 0.0));
    let near_right = Particle::stationary(NVec2::new(0.4, 0.0));

    assert_eq!(rk4_integrator(near_left, &attractors, &forces, &p), Outcome::Captured(0));
    assert_eq!(symplectic_integrator(near_left, &attractors, &forces, &p), Outcome::Captured(0));

    assert_eq!(rk4_integrator(near_right, &attractors, &forces, &p), Outcome::Captured(1));
    assert_eq!(symplectic_integrator(near_right, &attractors, &forces, &p), Outcome::Captured(1));
}

#[test]
fn fast_particle_escapes() {
    let attractors = vec![attractor_at(0.0, 0.0, 0.5, [1.0, 1.0, 1.0])];
    let p = test_params();
    let forces = gravity_set(&p);

    // Well above escape velocity at r = 1
    let start = Particle {
        x: NVec2::new(1.0, 0.0),
        v: NVec2::new(3.0, 0.0),
    };

    assert_eq!(rk4_integrator(start, &attractors, &forces, &p), Outcome::Escaped);
    assert_eq!(symplectic_integrator(start, &attractors, &forces, &p), Outcome::Escaped);
}

#[test]
fn exhausted_step_budget_counts_as_escape() {
    let attractors = vec![attractor_at(0.0, 0.0, 1.0, [1.0, 1.0, 1.0])];
    let mut p = test_params();
    p.n_steps = 0;
    let forces = gravity_set(&p);

    // Even a sample inside the capture radius: no steps, no checks
    let start = Particle::stationary(NVec2::new(0.01, 0.0));

    assert_eq!(rk4_integrator(start, &attractors, &forces, &p), Outcome::Escaped);
    assert_eq!(symplectic_integrator(start, &attractors, &forces, &p), Outcome::Escaped);
}

#[test]
fn integration_is_deterministic() {
    let attractors = twin_attractors();
    let p = test_params();
    let forces = gravity_set(&p);
    let start = Particle::stationary(NVec2::new(-0.13, 0.27));

    let first = rk4_integrator(start, &attractors, &forces, &p);
    let second = rk4_integrator(start, &attractors, &forces, &p);

    assert_eq!(first, second);
}

// ==================================================================================
// Basin map tests
// ==================================================================================

#[test]
fn map_generation_is_deterministic() {
    // 3x3 grid over the twin scenario includes the equidistant center
    // sample, where the forces nearly cancel
    let p = test_params();
    let scenario = scenario_with(twin_attractors(), p, 3, IntegratorConfig::Rk4);

    let first = generate_map(&scenario, &IntegratorConfig::Rk4, false);
    let second = generate_map(&scenario, &IntegratorConfig::Rk4, false);

    assert_eq!(first.pixels.len(), 27);
    assert_eq!(first, second, "Repeated runs must be byte-identical");

    let symp_first = generate_map(&scenario, &IntegratorConfig::Symplectic, false);
    let symp_second = generate_map(&scenario, &IntegratorConfig::Symplectic, false);

    assert_eq!(symp_first, symp_second);
}

#[test]
fn smallest_grid_does_not_divide_by_zero() {
    // grid_size = 2 puts the samples exactly on the domain corners; a weak
    // pole resolves nothing within the budget, so every cell escapes white
    let attractors = vec![attractor_at(0.0, 0.0, 1e-6, [1.0, 0.0, 0.0])];
    let p = test_params();
    let scenario = scenario_with(attractors, p, 2, IntegratorConfig::Rk4);

    let map = generate_map(&scenario, &IntegratorConfig::Rk4, false);

    assert_eq!(map.pixels.len(), 12);
    assert!(map.pixels.iter().all(|&b| b == 255), "Expected all-white map");
}

#[test]
fn single_attractor_captures_every_sample() {
    // Pure radial infall: every zero-velocity start falls onto the pole,
    // including the sample sitting exactly on it
    let attractors = vec![attractor_at(0.0, 0.0, 1.0, [1.0, 0.0, 0.0])];
    let p = test_params();

    for integ in [IntegratorConfig::Rk4, IntegratorConfig::Symplectic] {
        let scenario = scenario_with(attractors.clone(), p.clone(), 3, integ.clone());
        let map = generate_map(&scenario, &integ, false);

        for cell in map.pixels.chunks(3) {
            assert_eq!(cell, [255, 0, 0], "Cell not captured red ({})", integ.name());
        }
    }
}

#[test]
fn progress_bar_does_not_change_output() {
    let attractors = vec![attractor_at(0.0, 0.0, 1e-6, [1.0, 0.0, 0.0])];
    let mut p = test_params();
    p.n_steps = 50;
    let scenario = scenario_with(attractors, p, 2, IntegratorConfig::Rk4);

    let with_bar = generate_map(&scenario, &IntegratorConfig::Rk4, true);
    let without = generate_map(&scenario, &IntegratorConfig::Rk4, false);

    assert_eq!(with_bar, without);
}

// ==================================================================================
// Configuration tests
// ==================================================================================

const TWIN_YAML: &str = r#"
engine:
  integrator: "symplectic"

parameters:
  dt: 0.004
  n_steps: 5000
  capture_radius: 0.03

attractors:
  - k: 1.0
    x: [ -0.5, 0.0 ]
    color: [ 1.0, 0.0, 0.0 ]
  - k: 1.0
    x: [ 0.5, 0.0 ]
    color: [ 0.0, 1.0, 0.0 ]
"#;

#[test]
fn yaml_scenario_builds_with_defaults() {
    let cfg: ScenarioConfig = serde_yaml::from_str(TWIN_YAML).expect("valid scenario YAML");
    let scenario = Scenario::build_scenario(cfg);

    assert_eq!(scenario.engine.integrator, IntegratorConfig::Symplectic);
    assert_eq!(scenario.engine.grid_size, 500); // omitted in YAML
    assert_eq!(scenario.parameters.escape_radius, 2.0); // omitted in YAML
    assert_eq!(scenario.attractors.len(), 2);
    assert!((scenario.attractors[0].x - NVec2::new(-0.5, 0.0)).norm() < 1e-12);
}

#[test]
fn unknown_integrator_name_is_rejected() {
    assert_eq!(IntegratorConfig::from_name("rk4"), Some(IntegratorConfig::Rk4));
    assert_eq!(IntegratorConfig::from_name("symplectic"), Some(IntegratorConfig::Symplectic));
    assert_eq!(IntegratorConfig::from_name("euler"), None);

    let bad_yaml = TWIN_YAML.replace("symplectic", "euler");
    let parsed: Result<ScenarioConfig, _> = serde_yaml::from_str(&bad_yaml);
    assert!(parsed.is_err(), "Unknown integrator must fail to parse");
}

// ==================================================================================
// PPM writer tests
// ==================================================================================

#[test]
fn ppm_header_is_bit_exact() {
    let path = std::env::temp_dir().join("basinsim_ppm_header_test.ppm");
    let pixels: Vec<u8> = (0..12).collect();

    write_ppm(&path, 2, 2, &pixels).expect("write ppm");

    let bytes = std::fs::read(&path).expect("read ppm back");
    let _ = std::fs::remove_file(&path);

    assert!(bytes.starts_with(b"P6\n2 2\n255\n"));
    assert_eq!(bytes.len(), 11 + 12);
    assert_eq!(&bytes[11..], &pixels[..]);
}
