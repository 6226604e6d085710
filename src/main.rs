use planetsim::{ScenarioConfig, Simulation};
use planetsim::{run_2d, run_headless};
use planetsim::bench_step;

use anyhow::{Context, Result};
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "2D gravitational N-body simulator")]
struct Args {
    /// Scenario file under `scenarios/`, the built-in inner solar system when omitted
    #[arg(short, long)]
    file_name: Option<String>,

    /// Run this many steps without a window and log distances
    #[arg(long)]
    headless: Option<u64>,

    /// Log distances every N steps in headless mode
    #[arg(long, default_value_t = 30)]
    report_every: u64,

    /// Time one step for growing body counts and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_step();
        return Ok(());
    }

    let scenario_cfg = match &args.file_name {
        Some(name) => load_scenario_from_yaml(name)?,
        None => ScenarioConfig::default(),
    };

    let display = scenario_cfg.display.clone();
    let sim = Simulation::build_simulation(scenario_cfg).context("invalid scenario")?;

    match args.headless {
        Some(steps) => run_headless(sim, steps, args.report_every),
        None => {
            display.validate().context("invalid display settings")?;
            run_2d(sim, display);
        }
    }

    Ok(())
}
