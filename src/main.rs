use basinsim::{generate_map, IntegratorConfig, Scenario, ScenarioConfig};
use basinsim::write_ppm;

use clap::Parser;
use anyhow::{anyhow, Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario YAML in the scenarios/ directory; random scenario when omitted
    #[arg(short, long)]
    file_name: Option<String>,

    /// Override the configured integrator ("rk4" or "symplectic")
    #[arg(short, long)]
    integrator: Option<String>,

    /// Seed for the random scenario generator
    #[arg(short, long)]
    seed: Option<u64>,

    /// Output file prefix
    #[arg(short, long, default_value = "basin")]
    out: String,

    /// Disable the progress bar
    #[arg(short, long)]
    quiet: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let from_file = args.file_name.is_some();
    let scenario = match &args.file_name {
        Some(name) => Scenario::build_scenario(load_scenario_from_yaml(name)?),
        None => {
            let mut rng = match args.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            Scenario::random(&mut rng)
        }
    };

    // Which maps to render: an explicit override wins, a YAML scenario uses
    // its configured integrator, and a random run renders both so the
    // fractal boundaries can be compared side by side
    let selected: Vec<IntegratorConfig> = match &args.integrator {
        Some(name) => vec![
            IntegratorConfig::from_name(name)
                .ok_or_else(|| anyhow!("unknown integrator: {name}"))?,
        ],
        None if from_file => vec![scenario.engine.integrator.clone()],
        None => vec![IntegratorConfig::Rk4, IntegratorConfig::Symplectic],
    };

    let g = scenario.engine.grid_size;
    let mut written = Vec::new();

    for kind in &selected {
        let map = generate_map(&scenario, kind, !args.quiet);

        let path = PathBuf::from(format!("{}_{}.ppm", args.out, kind.name()));
        write_ppm(&path, g, g, &map.pixels)
            .with_context(|| format!("failed to write {}", path.display()))?;
        written.push(path.display().to_string());
    }

    println!(
        "Generated {} with {} attractors.",
        written.join(" and "),
        scenario.attractors.len()
    );

    //bench_force();
    //bench_map();

    Ok(())
}
