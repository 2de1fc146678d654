mod beam;
mod ucs;

pub use beam::BeamSolver;
pub use ucs::UcsSolver;

use crate::algorithm::{beam_search, EvictionPolicy};
use crate::common::{Solution, State};
use crate::error::SearchError;
use crate::map::Map;
use crate::stat::Stats;

pub trait Solver {
    fn solve(&mut self) -> Result<Solution, SearchError>;

    fn stats(&self) -> &Stats;
}

/// Crosses `map` from `start` to `goal` with a beam of `beam_size` nodes.
///
/// The returned walk excludes `start` and ends at `goal`.
pub fn solve(
    start: State,
    goal: State,
    map: &Map,
    beam_size: usize,
) -> Result<Vec<State>, SearchError> {
    beam_search(
        map,
        start,
        goal,
        beam_size,
        EvictionPolicy::default(),
        &mut Stats::default(),
    )
}
