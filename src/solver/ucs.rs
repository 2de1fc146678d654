use super::Solver;
use crate::algorithm::repair_search;
use crate::common::{Solution, State};
use crate::error::SearchError;
use crate::map::Map;
use crate::stat::Stats;

use std::time::Instant;

/// Exact uniform-cost crossing, the reference the beam is measured against.
pub struct UcsSolver {
    map: Map,
    start: State,
    goal: State,
    stats: Stats,
}

impl UcsSolver {
    pub fn new(map: &Map, start: State, goal: State) -> Self {
        UcsSolver {
            map: map.clone(),
            start,
            goal,
            stats: Stats::default(),
        }
    }
}

impl Solver for UcsSolver {
    fn solve(&mut self) -> Result<Solution, SearchError> {
        let total_solve_start_time = Instant::now();
        self.stats = Stats::default();
        self.map.terrain(self.start)?;
        self.map.terrain(self.goal)?;

        let result = repair_search(&self.map, self.start, self.goal, &mut self.stats);
        self.stats.time_us = total_solve_start_time.elapsed().as_micros() as usize;

        let repair = result.map_err(|err| match err {
            SearchError::NoConnectingPath { .. } => SearchError::FrontierExhausted,
            other => other,
        })?;
        self.stats.expanded_nodes = self.stats.repair_expanded_nodes;
        self.stats.cost = repair.cost;
        self.stats.path_len = repair.steps.len();
        self.stats.print();

        Ok(Solution {
            start: self.start,
            goal: self.goal,
            steps: repair.steps,
            cost: repair.cost,
        })
    }

    fn stats(&self) -> &Stats {
        &self.stats
    }
}
