use beam_explorer::config::{Cli, Config};
use beam_explorer::error::SearchError;
use beam_explorer::scenario::Scenario;
use beam_explorer::solver::{BeamSolver, Solver, UcsSolver};

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let cli = Cli::parse();

    let config = if let Some(config_file) = cli.config.as_ref() {
        let config_str = std::fs::read_to_string(config_file)
            .with_context(|| format!("failed to read config file: {config_file}"))?;
        Config::from_yaml_str(&config_str)
            .with_context(|| format!("error with config file: {config_file}"))?
    } else {
        info!("No config file specified, using default config");
        Config::default()
    }
    .override_from_command_line(&cli)?;

    let scenario = if let Some(path) = config.scenario_path.as_ref() {
        Scenario::load_from_file(path)?
    } else if config.random {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let scenario = Scenario::generate_random(&mut rng, config.min_size, config.max_size);
        if config.debug_yaml {
            scenario.write_to_yaml("debug.yaml")?;
        }
        scenario
    } else {
        info!("No scenario specified, using the builtin terrain");
        Scenario::builtin()
    };
    let map = scenario.map().context("invalid scenario terrain")?;

    if config.print_terrain {
        println!("{map}");
    }

    let mut solver: Box<dyn Solver> = match config.solver.as_str() {
        "ucs" => Box::new(UcsSolver::new(&map, scenario.start, scenario.goal)),
        _ => Box::new(BeamSolver::new(&map, scenario.start, scenario.goal, &config)),
    };

    let result = solver.solve();
    let output = match &result {
        Ok(solution) => {
            assert!(solution.verify(&map));
            info!("solution: {:?}", solution.steps);
            json!({ "solution": solution, "stats": solver.stats() })
        }
        Err(SearchError::FrontierExhausted) => {
            error!("{}", SearchError::FrontierExhausted);
            json!({ "error": SearchError::FrontierExhausted.to_string(), "stats": solver.stats() })
        }
        Err(err) => return Err(err.clone()).context("search failed"),
    };

    if let Some(output_path) = config.output_path.as_ref() {
        let output_str = serde_json::to_string_pretty(&output)?;
        std::fs::write(output_path, output_str)
            .with_context(|| format!("failed to write output: {output_path}"))?;
    }

    Ok(())
}
