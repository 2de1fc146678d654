use super::frontier::{EvictionPolicy, Frontier, FrontierEntry};
use super::repair_search;
use crate::common::{manhattan_distance, NodeArena, State};
use crate::error::SearchError;
use crate::map::Map;
use crate::stat::Stats;

use std::collections::HashSet;
use tracing::{debug, instrument, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchStatus {
    Running,
    GoalFound,
    Exhausted,
}

/// Beam search keeping at most `beam_size` frontier nodes, ranked by the raw cost of the cell
/// they enter. Whenever two consecutively expanded states are not neighbors, the gap is bridged
/// with an exact repair search so the returned walk stays contiguous.
///
/// Returns the walk from `start` (exclusive) to `goal` (inclusive).
#[instrument(skip_all, name = "beam_search", fields(start = format!("{start:?}"), goal = format!("{goal:?}"), beam_size = beam_size), level = "debug")]
pub(crate) fn beam_search(
    map: &Map,
    start: State,
    goal: State,
    beam_size: usize,
    policy: EvictionPolicy,
    stats: &mut Stats,
) -> Result<Vec<State>, SearchError> {
    map.terrain(start)?;
    map.terrain(goal)?;

    let mut path = Vec::new();
    if start == goal {
        return Ok(path);
    }

    let mut arena = NodeArena::new();
    let mut frontier = Frontier::bounded(beam_size, policy);
    let mut explored = HashSet::new();
    let mut previous: Option<State> = None;

    let root = arena.root(start);
    frontier.insert(FrontierEntry::from_node(&arena, root));

    let mut status = SearchStatus::Running;
    while status == SearchStatus::Running {
        let current = match frontier.pop_min() {
            Some(current) => current,
            None => {
                status = SearchStatus::Exhausted;
                continue;
            }
        };
        trace!(
            "expand node: {current:?} via {:?}",
            arena.get(current.node).action
        );
        stats.expanded_nodes += 1;

        // The root itself is not part of the walk.
        if let Some(previous) = previous {
            if manhattan_distance(previous, current.state) > 1 {
                debug!("gap between {previous:?} and {:?}", current.state);
                let repair = repair_search(map, previous, current.state, stats)?;
                path.extend(repair.steps);
            } else {
                path.push(current.state);
            }
        }
        previous = Some(current.state);
        explored.insert(current.state);

        for action in map.legal_actions(current.state) {
            let child = arena.beam_child(map, current.node, action)?;
            let child_state = arena.get(child).state;

            if child_state == goal {
                path.push(goal);
                status = SearchStatus::GoalFound;
                break;
            }

            if frontier.contains_state(child_state) || explored.contains(&child_state) {
                continue;
            }
            if let Some(evicted) = frontier.insert(FrontierEntry::from_node(&arena, child)) {
                trace!("evict node: {evicted:?}");
                stats.evictions += 1;
            }
        }
        trace!("frontier size {}", frontier.len());
    }

    stats.generated_nodes += arena.len();
    match status {
        SearchStatus::GoalFound => Ok(path),
        _ => {
            debug!("frontier exhausted after {} expansions", explored.len());
            Err(SearchError::FrontierExhausted)
        }
    }
}
