use anyhow::{Context, Result};
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufReader, Write};
use tracing::info;

use crate::common::State;
use crate::map::Map;

/// A terrain together with the start and goal of one crossing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub start: State,
    pub goal: State,
    pub terrain: Vec<String>,
}

impl Scenario {
    pub fn load_from_file(path: &str) -> Result<Scenario> {
        let file = File::open(path).with_context(|| format!("failed to open scenario {path}"))?;
        let reader = BufReader::new(file);
        let scenario = serde_yaml::from_reader(reader)
            .with_context(|| format!("failed to parse scenario {path}"))?;
        Ok(scenario)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Scenario> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn map(&self) -> Result<Map> {
        Map::from_rows(&self.terrain)
    }

    /// 8x8 demonstration terrain.
    pub fn builtin() -> Scenario {
        Scenario {
            start: (6, 7),
            goal: (6, 2),
            terrain: [
                "wwwwwwww", "mmsssppw", "sspspsmw", "pwmsssww", "wwmwwmpp", "wpwwspwm",
                "msswwppp", "sspmmpww",
            ]
            .iter()
            .map(|row| row.to_string())
            .collect(),
        }
    }

    /// Random square terrain of paths, sand, mountains and walls, with random start and goal.
    pub fn generate_random<R: Rng + ?Sized>(
        rng: &mut R,
        min_size: usize,
        max_size: usize,
    ) -> Scenario {
        const SYMBOLS: [char; 4] = ['m', 'p', 's', 'w'];

        let size = rng.gen_range(min_size..=max_size);
        let start = (rng.gen_range(0..size), rng.gen_range(0..size));
        let goal = (rng.gen_range(0..size), rng.gen_range(0..size));
        let terrain: Vec<String> = (0..size)
            .map(|_| {
                (0..size)
                    .map(|_| *SYMBOLS.choose(rng).unwrap_or(&'p'))
                    .collect::<String>()
            })
            .collect();

        info!("Generate scenario: size {size}, start {start:?}, goal {goal:?}");
        Scenario {
            start,
            goal,
            terrain,
        }
    }

    pub fn write_to_yaml(&self, path: &str) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = io::BufWriter::new(file);
        let yaml_data = serde_yaml::to_string(self)?;
        writer.write_all(yaml_data.as_bytes())?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::Terrain;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_read_scenario() {
        let scenario = Scenario::load_from_file("map_file/test/corridor.yaml").unwrap();
        assert_eq!(scenario.start, (0, 0));
        assert_eq!(scenario.goal, (4, 4));

        let map = scenario.map().unwrap();
        assert_eq!(map.size, 5);
        assert_eq!(map.terrain((1, 1)).unwrap(), Terrain::Wall);
    }

    #[test]
    fn test_builtin_matches_fixture() {
        let scenario = Scenario::load_from_file("map_file/builtin.yaml").unwrap();
        assert_eq!(scenario, Scenario::builtin());
    }

    #[test]
    fn test_builtin_scenario() {
        let scenario = Scenario::builtin();
        let map = scenario.map().unwrap();
        assert_eq!(map.size, 8);
        assert_eq!(map.terrain((0, 0)).unwrap(), Terrain::Wall);
        assert_eq!(map.terrain(scenario.start).unwrap(), Terrain::Path);
        assert_eq!(map.terrain(scenario.goal).unwrap(), Terrain::Sand);
    }

    #[test]
    fn test_generate_random() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let scenario = Scenario::generate_random(&mut rng, 5, 12);
            let map = scenario.map().unwrap();
            assert!((5..=12).contains(&map.size));
            assert!(map.in_bounds(scenario.start));
            assert!(map.in_bounds(scenario.goal));
            assert!(map
                .grid
                .iter()
                .flatten()
                .all(|terrain| *terrain != Terrain::Unknown));
        }

        // Same seed, same scenario.
        let first = Scenario::generate_random(&mut StdRng::seed_from_u64(3), 5, 100);
        let second = Scenario::generate_random(&mut StdRng::seed_from_u64(3), 5, 100);
        assert_eq!(first, second);
    }

    #[test]
    fn test_yaml_round_trip() {
        let yaml = serde_yaml::to_string(&Scenario::builtin()).unwrap();
        assert_eq!(Scenario::from_yaml_str(&yaml).unwrap(), Scenario::builtin());
    }
}
