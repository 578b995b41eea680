use gyrosim::{ScenarioConfig, Scenario};
use gyrosim::run_2d;
use gyrosim::bench_integrator_curve;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file, looked up under `scenarios/` unless it is an existing path
    #[arg(short, default_value = "earth_l4.yaml")]
    file_name: String,

    /// Only integrate and log the summary, do not open the viewer
    #[arg(long)]
    headless: bool,

    /// Print the integrator timing curve as CSV and exit
    #[arg(long)]
    bench: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(level: LevelFilter) -> Result<()> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {h({l:<5})} {t} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let direct = PathBuf::from(file_name);
    let config_path = if direct.is_file() {
        direct
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
    };
    info!("loading scenario {}", config_path.display());

    let scenario_cfg = ScenarioConfig::from_yaml_file(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))?;
    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(if args.verbose { LevelFilter::Debug } else { LevelFilter::Info })?;

    if args.bench {
        bench_integrator_curve();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg)?;

    let runs = scenario.run();

    if !args.headless {
        run_2d(scenario, runs);
    }

    Ok(())
}
