use super::{Action, State};
use crate::error::SearchError;
use crate::map::Map;

pub(crate) type NodeId = usize;

#[derive(Debug, Clone)]
pub(crate) struct SearchNode {
    // Beam children rank by the raw cost of the entered cell, repair children by the
    // cumulative cost from the repair origin.
    pub(crate) priority_cost: usize,
    pub(crate) accumulated_cost: usize,
    pub(crate) state: State,
    pub(crate) parent: Option<NodeId>,
    pub(crate) action: Option<Action>,
}

/// Owns every node one search creates; parents are referenced by index.
#[derive(Debug, Default)]
pub(crate) struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id]
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    fn push(&mut self, node: SearchNode) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    pub(crate) fn root(&mut self, state: State) -> NodeId {
        self.push(SearchNode {
            priority_cost: 0,
            accumulated_cost: 0,
            state,
            parent: None,
            action: None,
        })
    }

    /// Child for the beam: ranked only by the terrain cost of the destination cell.
    pub(crate) fn beam_child(
        &mut self,
        map: &Map,
        parent: NodeId,
        action: Action,
    ) -> Result<NodeId, SearchError> {
        let state = action.apply(self.nodes[parent].state);
        let priority_cost = map.cost(state)?;
        Ok(self.push(SearchNode {
            priority_cost,
            accumulated_cost: 0,
            state,
            parent: Some(parent),
            action: Some(action),
        }))
    }

    /// Child for the repair search: ranked by the cost accumulated since the repair origin.
    pub(crate) fn repair_child(
        &mut self,
        map: &Map,
        parent: NodeId,
        action: Action,
    ) -> Result<NodeId, SearchError> {
        let parent_node = &self.nodes[parent];
        let state = action.apply(parent_node.state);
        let accumulated_cost = parent_node.accumulated_cost + map.cost(state)?;
        Ok(self.push(SearchNode {
            priority_cost: accumulated_cost,
            accumulated_cost,
            state,
            parent: Some(parent),
            action: Some(action),
        }))
    }

    /// States from the root (exclusive) down to `id` (inclusive).
    pub(crate) fn trace(&self, mut id: NodeId) -> Vec<State> {
        let mut path = Vec::new();
        while let Some(parent) = self.nodes[id].parent {
            path.push(self.nodes[id].state);
            id = parent;
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_costs() {
        let map = Map::from_rows(&["psm", "ppp", "ppp"]).unwrap();
        let mut arena = NodeArena::new();
        let root = arena.root((1, 0));
        assert_eq!(arena.get(root).priority_cost, 0);
        assert_eq!(arena.get(root).accumulated_cost, 0);

        let up = arena.beam_child(&map, root, Action::North).unwrap();
        assert_eq!(arena.get(up).state, (0, 0));
        assert_eq!(arena.get(up).priority_cost, 10);
        assert_eq!(arena.get(up).accumulated_cost, 0);

        let first = arena.repair_child(&map, root, Action::North).unwrap();
        let second = arena.repair_child(&map, first, Action::East).unwrap();
        let third = arena.repair_child(&map, second, Action::East).unwrap();
        assert_eq!(arena.get(second).priority_cost, 40);
        assert_eq!(arena.get(third).accumulated_cost, 140);
        assert_eq!(arena.get(third).priority_cost, 140);
        assert_eq!(arena.get(third).action, Some(Action::East));

        assert_eq!(arena.trace(third), vec![(0, 0), (0, 1), (0, 2)]);
        assert!(arena.trace(root).is_empty());
        assert_eq!(arena.len(), 5);
    }
}
