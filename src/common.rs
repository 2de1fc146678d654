mod node;

pub(crate) use node::{NodeArena, NodeId};

use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::map::Map;

/// Grid coordinates as (row, column).
pub type State = (usize, usize);

pub fn manhattan_distance(a: State, b: State) -> usize {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    North,
    South,
    East,
    West,
}

impl Action {
    /// Only valid for actions returned by `Map::legal_actions` for `state`.
    pub fn apply(&self, state: State) -> State {
        match self {
            Action::North => (state.0 - 1, state.1),
            Action::South => (state.0 + 1, state.1),
            Action::East => (state.0, state.1 + 1),
            Action::West => (state.0, state.1 - 1),
        }
    }

    /// The single action leading from `from` to `to`, if they are grid neighbors.
    pub fn between(from: State, to: State) -> Option<Action> {
        if manhattan_distance(from, to) != 1 {
            return None;
        }
        Some(if to.0 < from.0 {
            Action::North
        } else if to.0 > from.0 {
            Action::South
        } else if to.1 > from.1 {
            Action::East
        } else {
            Action::West
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Solution {
    pub start: State,
    pub goal: State,
    // Start is excluded, goal is the last step.
    pub steps: Vec<State>,
    pub cost: usize,
}

impl Solution {
    pub fn from_steps(
        map: &Map,
        start: State,
        goal: State,
        steps: Vec<State>,
    ) -> Result<Self, SearchError> {
        let mut cost = 0;
        for &step in &steps {
            cost += map.cost(step)?;
        }
        Ok(Solution {
            start,
            goal,
            steps,
            cost,
        })
    }

    pub fn verify(&self, map: &Map) -> bool {
        match self.steps.last() {
            Some(&last) if last == self.goal => {}
            None if self.start == self.goal => return true,
            _ => return false,
        }

        let mut prev = self.start;
        for &step in &self.steps {
            // Exactly one legal action must lead from the previous state.
            match Action::between(prev, step) {
                Some(action) if map.legal_actions(prev).contains(&action) => {}
                _ => return false,
            }
            prev = step;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_between() {
        assert_eq!(Action::between((2, 2), (1, 2)), Some(Action::North));
        assert_eq!(Action::between((2, 2), (3, 2)), Some(Action::South));
        assert_eq!(Action::between((2, 2), (2, 3)), Some(Action::East));
        assert_eq!(Action::between((2, 2), (2, 1)), Some(Action::West));
        assert_eq!(Action::between((2, 2), (3, 3)), None);
        assert_eq!(Action::between((2, 2), (2, 2)), None);

        for action in [Action::North, Action::South, Action::East, Action::West] {
            assert_eq!(Action::between((2, 2), action.apply((2, 2))), Some(action));
        }
    }

    #[test]
    fn test_verify_solution() {
        let map = Map::from_rows(&["ppp", "pwp", "ppp"]).unwrap();

        let good = Solution::from_steps(&map, (0, 0), (2, 2), vec![(0, 1), (0, 2), (1, 2), (2, 2)])
            .unwrap();
        assert_eq!(good.cost, 40);
        assert!(good.verify(&map));

        // Crosses the wall in the middle.
        let through_wall = Solution {
            start: (0, 1),
            goal: (2, 1),
            steps: vec![(1, 1), (2, 1)],
            cost: 1010,
        };
        assert!(!through_wall.verify(&map));

        let with_gap = Solution {
            start: (0, 0),
            goal: (0, 2),
            steps: vec![(0, 2)],
            cost: 10,
        };
        assert!(!with_gap.verify(&map));

        let wrong_goal = Solution {
            start: (0, 0),
            goal: (2, 2),
            steps: vec![(0, 1)],
            cost: 10,
        };
        assert!(!wrong_goal.verify(&map));

        let empty = Solution {
            start: (0, 0),
            goal: (0, 0),
            steps: vec![],
            cost: 0,
        };
        assert!(empty.verify(&map));
    }
}
