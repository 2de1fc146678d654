use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::common::{NodeArena, NodeId, State};

/// Which entry goes when a bounded frontier overflows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum EvictionPolicy {
    /// Drop the last slot of the backing array. Not necessarily the costliest entry.
    #[default]
    LastSlot,
    /// Drop the costliest entry.
    Worst,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FrontierEntry {
    pub(crate) priority: usize,
    pub(crate) state: State,
    pub(crate) node: NodeId,
}

impl FrontierEntry {
    pub(crate) fn from_node(arena: &NodeArena, node: NodeId) -> Self {
        let search_node = arena.get(node);
        FrontierEntry {
            priority: search_node.priority_cost,
            state: search_node.state,
            node,
        }
    }
}

/// Array-backed binary min-heap on priority, optionally capped in size.
///
/// Membership is by state only: callers check `contains_state` before inserting, so a cheaper
/// node for a state already queued is skipped rather than replacing the stale entry.
#[derive(Debug)]
pub(crate) struct Frontier {
    heap: Vec<FrontierEntry>,
    states: HashSet<State>,
    capacity: Option<usize>,
    policy: EvictionPolicy,
}

impl Frontier {
    pub(crate) fn bounded(capacity: usize, policy: EvictionPolicy) -> Self {
        Frontier {
            heap: Vec::with_capacity(capacity + 1),
            states: HashSet::new(),
            capacity: Some(capacity),
            policy,
        }
    }

    pub(crate) fn unbounded() -> Self {
        Frontier {
            heap: Vec::new(),
            states: HashSet::new(),
            capacity: None,
            policy: EvictionPolicy::default(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }

    pub(crate) fn contains_state(&self, state: State) -> bool {
        self.states.contains(&state)
    }

    /// Inserts `entry` and returns whatever had to be evicted to stay within capacity.
    pub(crate) fn insert(&mut self, entry: FrontierEntry) -> Option<FrontierEntry> {
        debug_assert!(!self.contains_state(entry.state));
        self.states.insert(entry.state);
        self.heap.push(entry);
        self.sift_up(self.heap.len() - 1);

        match self.capacity {
            Some(capacity) if self.heap.len() > capacity => {
                let evicted = self.evict()?;
                self.states.remove(&evicted.state);
                Some(evicted)
            }
            _ => None,
        }
    }

    pub(crate) fn pop_min(&mut self) -> Option<FrontierEntry> {
        let last = self.heap.pop()?;
        let min = if self.heap.is_empty() {
            last
        } else {
            let min = std::mem::replace(&mut self.heap[0], last);
            self.sift_down(0);
            min
        };
        self.states.remove(&min.state);
        Some(min)
    }

    fn evict(&mut self) -> Option<FrontierEntry> {
        match self.policy {
            EvictionPolicy::LastSlot => self.heap.pop(),
            EvictionPolicy::Worst => {
                // The maximum of a min-heap always sits in the leaf half.
                let len = self.heap.len();
                let worst = (len / 2..len).max_by_key(|&index| self.heap[index].priority)?;
                let evicted = self.heap.swap_remove(worst);
                if worst < self.heap.len() {
                    self.sift_up(worst);
                }
                Some(evicted)
            }
        }
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.heap[pos].priority < self.heap[parent].priority {
                self.heap.swap(pos, parent);
                pos = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.heap[right].priority < self.heap[left].priority {
                right
            } else {
                left
            };
            if self.heap[child].priority < self.heap[pos].priority {
                self.heap.swap(pos, child);
                pos = child;
            } else {
                break;
            }
        }
    }
}
