use planetsim::{run_2d, Scenario, ScenarioConfig, AU, SECONDS_PER_DAY};

use anyhow::{bail, Context, Result};
use bevy::app::AppExit;
use clap::Parser;
use log::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Real-time gravitational N-body planet simulation")]
struct Args {
    /// Scenario YAML, either a path or a file name under `scenarios/`.
    /// Without it the built-in inner solar system is used.
    #[arg(short, long)]
    file: Option<String>,

    /// Run without a window and print a summary at the end
    #[arg(long)]
    headless: bool,

    /// Number of ticks for a headless run
    #[arg(long, default_value_t = 365)]
    ticks: u64,
}

fn resolve_path(file_name: &str) -> PathBuf {
    let direct = PathBuf::from(file_name);
    if direct.exists() {
        return direct;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

// load here to keep main clean
fn load_scenario(file: Option<&str>) -> Result<ScenarioConfig> {
    let Some(file_name) = file else {
        return Ok(ScenarioConfig::inner_planets());
    };

    let config_path = resolve_path(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let cfg = ScenarioConfig::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;

    info!("loaded scenario {} with {} bodies", config_path.display(), cfg.bodies.len());
    Ok(cfg)
}

fn run_headless(mut scenario: Scenario, ticks: u64) -> Result<()> {
    scenario.simulation.run(ticks).context("simulation failed")?;

    let sim = &scenario.simulation;
    info!(
        "{} ticks, {:.1} simulated days",
        sim.ticks(),
        sim.elapsed_seconds() / SECONDS_PER_DAY
    );
    for (body, style) in sim.bodies().iter().zip(&scenario.styles) {
        info!(
            "{:>8}: x = ({:+.4}, {:+.4}) AU, |v| = {:.1} m/s, anchor distance = {:.1} km, {} trail points",
            style.name,
            body.x.x / AU,
            body.x.y / AU,
            body.v.norm(),
            body.distance_to_anchor / 1000.0,
            body.trajectory.len()
        );
    }
    let p = sim.total_momentum();
    info!("total momentum: ({:.6e}, {:.6e}) kg m/s", p.x, p.y);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let cfg = load_scenario(args.file.as_deref())?;
    let scenario = Scenario::build_scenario(cfg).context("invalid scenario")?;

    if args.headless {
        return run_headless(scenario, args.ticks);
    }

    if let AppExit::Error(code) = run_2d(scenario) {
        bail!("viewer exited with error code {code}");
    }
    Ok(())
}
