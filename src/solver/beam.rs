use super::Solver;
use crate::algorithm::{beam_search, EvictionPolicy};
use crate::common::{Solution, State};
use crate::config::Config;
use crate::error::SearchError;
use crate::map::Map;
use crate::stat::Stats;

use std::time::Instant;
use tracing::debug;

pub struct BeamSolver {
    map: Map,
    start: State,
    goal: State,
    beam_size: usize,
    eviction: EvictionPolicy,
    stats: Stats,
}

impl BeamSolver {
    pub fn new(map: &Map, start: State, goal: State, config: &Config) -> Self {
        BeamSolver {
            map: map.clone(),
            start,
            goal,
            beam_size: config.beam_size,
            eviction: config.eviction,
            stats: Stats::default(),
        }
    }
}

impl Solver for BeamSolver {
    fn solve(&mut self) -> Result<Solution, SearchError> {
        let total_solve_start_time = Instant::now();
        self.stats = Stats::default();

        let result = beam_search(
            &self.map,
            self.start,
            self.goal,
            self.beam_size,
            self.eviction,
            &mut self.stats,
        );
        self.stats.time_us = total_solve_start_time.elapsed().as_micros() as usize;

        let steps = result?;
        debug!("beam walk: {steps:?}");
        let solution = Solution::from_steps(&self.map, self.start, self.goal, steps)?;
        self.stats.cost = solution.cost;
        self.stats.path_len = solution.steps.len();
        self.stats.print();

        Ok(solution)
    }

    fn stats(&self) -> &Stats {
        &self.stats
    }
}
