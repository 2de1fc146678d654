use anyhow::anyhow;
use clap::Parser;
use serde::Deserialize;

use crate::algorithm::EvictionPolicy;

pub const DEFAULT_BEAM_SIZE: usize = 10;

#[derive(Parser, Debug, Default)]
#[command(
    name = "Beam Explorer",
    about = "Terrain crossing with a bounded beam search and exact gap repair.",
    version = "0.1"
)]
pub struct Cli {
    #[arg(long, help = "Path to a YAML config file")]
    pub config: Option<String>,

    #[arg(long, help = "Path to the YAML scenario file (terrain, start, goal)")]
    pub scenario_path: Option<String>,

    #[arg(long, help = "Generate a random scenario", default_value_t = false)]
    pub random: bool,

    #[arg(long, help = "Seed for the random number generator")]
    pub seed: Option<u64>,

    #[arg(long, help = "Smallest random terrain size")]
    pub min_size: Option<usize>,

    #[arg(long, help = "Largest random terrain size")]
    pub max_size: Option<usize>,

    #[arg(long, help = "Frontier capacity (BEAM_SIZE)")]
    pub beam_size: Option<usize>,

    #[arg(long, value_enum, help = "Which node leaves an overflowing beam")]
    pub eviction: Option<EvictionPolicy>,

    #[arg(long, help = "Solver to use: beam or ucs")]
    pub solver: Option<String>,

    #[arg(long, help = "Path to the JSON output file")]
    pub output_path: Option<String>,

    #[arg(long, help = "Print the terrain before solving", default_value_t = false)]
    pub print_terrain: bool,

    #[arg(
        long,
        help = "Dump generated scenarios to debug.yaml",
        default_value_t = false
    )]
    pub debug_yaml: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub scenario_path: Option<String>,
    pub random: bool,
    pub seed: u64,
    pub min_size: usize,
    pub max_size: usize,
    pub beam_size: usize,
    pub eviction: EvictionPolicy,
    pub solver: String,
    pub output_path: Option<String>,
    pub print_terrain: bool,
    pub debug_yaml: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            scenario_path: None,
            random: false,
            seed: 0,
            min_size: 5,
            max_size: 100,
            beam_size: DEFAULT_BEAM_SIZE,
            eviction: EvictionPolicy::default(),
            solver: "beam".to_string(),
            output_path: None,
            print_terrain: false,
            debug_yaml: false,
        }
    }
}

impl Config {
    pub fn from_yaml_str(yaml: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn override_from_command_line(mut self, cli: &Cli) -> anyhow::Result<Self> {
        if let Some(scenario_path) = &cli.scenario_path {
            self.scenario_path = Some(scenario_path.clone());
        }
        if let Some(seed) = cli.seed {
            self.seed = seed;
        }
        if let Some(min_size) = cli.min_size {
            self.min_size = min_size;
        }
        if let Some(max_size) = cli.max_size {
            self.max_size = max_size;
        }
        if let Some(beam_size) = cli.beam_size {
            self.beam_size = beam_size;
        }
        if let Some(eviction) = cli.eviction {
            self.eviction = eviction;
        }
        if let Some(solver) = &cli.solver {
            self.solver = solver.clone();
        }
        if let Some(output_path) = &cli.output_path {
            self.output_path = Some(output_path.clone());
        }
        self.random |= cli.random;
        self.print_terrain |= cli.print_terrain;
        self.debug_yaml |= cli.debug_yaml;

        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        match self.solver.as_str() {
            "beam" | "ucs" => {}
            other => return Err(anyhow!("Unknown solver {other:?}, expected beam or ucs")),
        }

        if self.beam_size == 0 {
            return Err(anyhow!("Beam size must be at least 1"));
        }

        if self.min_size == 0 || self.min_size > self.max_size {
            return Err(anyhow!(
                "Random terrain size range must satisfy 1 <= min <= max, got {}..={}",
                self.min_size,
                self.max_size
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.beam_size, 10);
        assert_eq!(config.eviction, EvictionPolicy::LastSlot);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_from_yaml() {
        let config = Config::from_yaml_str("beam_size: 3\neviction: worst\nsolver: ucs\n").unwrap();
        assert_eq!(config.beam_size, 3);
        assert_eq!(config.eviction, EvictionPolicy::Worst);
        assert_eq!(config.solver, "ucs");
        assert_eq!(config.max_size, 100);

        assert!(Config::from_yaml_str("beam_width: 3\n").is_err());
    }

    #[test]
    fn test_command_line_overrides() {
        let cli = Cli::parse_from([
            "beam_explorer",
            "--beam-size",
            "4",
            "--eviction",
            "worst",
            "--random",
            "--seed",
            "42",
        ]);
        let config = Config::from_yaml_str("beam_size: 3\nmin_size: 6\n")
            .unwrap()
            .override_from_command_line(&cli)
            .unwrap();

        assert_eq!(config.beam_size, 4);
        assert_eq!(config.eviction, EvictionPolicy::Worst);
        assert_eq!(config.min_size, 6);
        assert_eq!(config.seed, 42);
        assert!(config.random);
    }

    #[test]
    fn test_validate() {
        let cli = Cli {
            beam_size: Some(0),
            ..Default::default()
        };
        assert!(Config::default().override_from_command_line(&cli).is_err());

        let config = Config {
            solver: "astar".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            min_size: 20,
            max_size: 10,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
