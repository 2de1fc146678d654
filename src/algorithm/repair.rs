use super::frontier::{Frontier, FrontierEntry};
use crate::common::{NodeArena, State};
use crate::error::SearchError;
use crate::map::Map;
use crate::stat::Stats;

use std::collections::HashSet;
use tracing::{debug, instrument, trace};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RepairPath {
    /// From the origin (exclusive) to the target (inclusive).
    pub(crate) steps: Vec<State>,
    pub(crate) cost: usize,
}

/// Unbounded uniform-cost search from `origin` to `target`.
#[instrument(skip_all, name = "repair_search", fields(origin = format!("{origin:?}"), target = format!("{target:?}")), level = "debug")]
pub(crate) fn repair_search(
    map: &Map,
    origin: State,
    target: State,
    stats: &mut Stats,
) -> Result<RepairPath, SearchError> {
    stats.repair_calls += 1;

    let mut arena = NodeArena::new();
    let mut frontier = Frontier::unbounded();
    let mut explored = HashSet::new();

    let root = arena.root(origin);
    frontier.insert(FrontierEntry::from_node(&arena, root));

    while let Some(current) = frontier.pop_min() {
        trace!("expand node: {current:?}");
        if current.state == target {
            let steps = arena.trace(current.node);
            let cost = arena.get(current.node).accumulated_cost;
            debug!("bridged with {} steps, cost {cost}", steps.len());
            stats.generated_nodes += arena.len();
            return Ok(RepairPath { steps, cost });
        }

        stats.repair_expanded_nodes += 1;
        explored.insert(current.state);

        for action in map.legal_actions(current.state) {
            let next = action.apply(current.state);
            if frontier.contains_state(next) || explored.contains(&next) {
                continue;
            }
            let child = arena.repair_child(map, current.node, action)?;
            frontier.insert(FrontierEntry::from_node(&arena, child));
        }
    }

    debug!("cannot bridge gap");
    stats.generated_nodes += arena.len();
    Err(SearchError::NoConnectingPath {
        from: origin,
        to: target,
    })
}
