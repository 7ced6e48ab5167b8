use gravwell::{Scenario, ScenarioConfig};
use gravwell::run_2d;

use clap::Parser;
use anyhow::{Context, Result};

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario YAML under scenarios/; built-in defaults when omitted
    #[arg(short)]
    file_name: Option<String>,
}

// load here to keep main clean
fn load_scenario_config() -> Result<ScenarioConfig> {
    let args = Args::parse();
    let Some(file_name) = args.file_name else {
        return Ok(ScenarioConfig::default());
    };

    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(&file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

#[macroquad::main("gravwell")]
async fn main() {
    let scenario_cfg = match load_scenario_config() {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("gravwell: {err:#}");
            std::process::exit(1);
        }
    };

    let scenario = Scenario::build_scenario(scenario_cfg);
    run_2d(scenario).await;
}
