use anyhow::{anyhow, bail, Context};
use std::fmt;
use std::fs;
use std::str::FromStr;

use crate::common::{Action, State};
use crate::error::SearchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terrain {
    Path,
    Sand,
    Mountain,
    Wall,
    Unknown,
}

impl Terrain {
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'p' => Some(Terrain::Path),
            's' => Some(Terrain::Sand),
            'm' => Some(Terrain::Mountain),
            'w' => Some(Terrain::Wall),
            'u' => Some(Terrain::Unknown),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Terrain::Path => 'p',
            Terrain::Sand => 's',
            Terrain::Mountain => 'm',
            Terrain::Wall => 'w',
            Terrain::Unknown => 'u',
        }
    }

    /// Calories spent entering a cell of this terrain.
    pub fn cost(&self) -> usize {
        match self {
            Terrain::Path => 10,
            Terrain::Sand => 30,
            Terrain::Mountain => 100,
            Terrain::Wall | Terrain::Unknown => 1000,
        }
    }

    // Walls carry a nominal cost but are never entered.
    pub fn is_passable(&self) -> bool {
        *self != Terrain::Wall
    }
}

/// Square terrain grid indexed by (row, column).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map {
    pub size: usize,
    pub grid: Vec<Vec<Terrain>>,
}

impl Map {
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> anyhow::Result<Self> {
        let mut grid = Vec::with_capacity(rows.len());
        for (row_index, row) in rows.iter().enumerate() {
            let tiles = row
                .as_ref()
                .chars()
                .filter(|ch| !ch.is_whitespace() && *ch != ',')
                .map(|ch| {
                    Terrain::from_symbol(ch)
                        .ok_or_else(|| anyhow!("unknown terrain symbol {ch:?} in row {row_index}"))
                })
                .collect::<anyhow::Result<Vec<_>>>()?;
            grid.push(tiles);
        }

        let size = grid.len();
        if size == 0 {
            bail!("terrain is empty");
        }
        if let Some((row_index, row)) = grid.iter().enumerate().find(|(_, row)| row.len() != size)
        {
            bail!(
                "terrain must be square: row {row_index} has {} cells, expected {size}",
                row.len()
            );
        }

        Ok(Map { size, grid })
    }

    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("failed to read terrain {path}"))?;
        content.parse()
    }

    pub fn in_bounds(&self, state: State) -> bool {
        state.0 < self.size && state.1 < self.size
    }

    pub fn terrain(&self, state: State) -> Result<Terrain, SearchError> {
        if !self.in_bounds(state) {
            return Err(SearchError::OutOfBounds {
                state,
                size: self.size,
            });
        }
        Ok(self.grid[state.0][state.1])
    }

    pub fn cost(&self, state: State) -> Result<usize, SearchError> {
        self.terrain(state).map(|terrain| terrain.cost())
    }

    pub fn is_passable(&self, x: usize, y: usize) -> bool {
        self.grid[x][y].is_passable()
    }

    /// Moves staying inside the grid and not entering a wall, in N, S, W, E order.
    pub fn legal_actions(&self, state: State) -> Vec<Action> {
        let (x, y) = state;
        let last = self.size - 1;
        let mut actions = Vec::with_capacity(4);

        if x > 0 && self.is_passable(x - 1, y) {
            actions.push(Action::North);
        }
        if x < last && self.is_passable(x + 1, y) {
            actions.push(Action::South);
        }
        if y > 0 && self.is_passable(x, y - 1) {
            actions.push(Action::West);
        }
        if y < last && self.is_passable(x, y + 1) {
            actions.push(Action::East);
        }

        actions
    }
}

impl FromStr for Map {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.lines().filter(|line| !line.trim().is_empty()).collect();
        Map::from_rows(&rows)
    }
}

impl fmt::Display for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.grid {
            let line: String = row.iter().map(Terrain::symbol).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_map() {
        let map = Map::from_file("map_file/test/test.map").unwrap();

        assert_eq!(map.size, 4);
        assert!(!map.is_passable(0, 0));
        assert!(map.is_passable(0, 1));
        assert_eq!(map.terrain((1, 1)).unwrap(), Terrain::Sand);
        assert_eq!(map.terrain((2, 2)).unwrap(), Terrain::Mountain);
        assert_eq!(map.terrain((3, 3)).unwrap(), Terrain::Unknown);

        // Rendering gives back the file content.
        let rendered = map.to_string();
        assert_eq!(rendered.parse::<Map>().unwrap(), map);
    }

    #[test]
    fn test_reject_bad_terrain() {
        assert!(Map::from_rows(&["pp", "p"]).is_err());
        assert!(Map::from_rows(&["px", "pp"]).is_err());
        assert!(Map::from_rows::<&str>(&[]).is_err());
        assert!("p p\np p\n".parse::<Map>().is_ok());
    }

    #[test]
    fn test_cost_table() {
        let map = Map::from_rows(&["psm", "wup", "ppp"]).unwrap();
        assert_eq!(map.cost((0, 0)), Ok(10));
        assert_eq!(map.cost((0, 1)), Ok(30));
        assert_eq!(map.cost((0, 2)), Ok(100));
        assert_eq!(map.cost((1, 0)), Ok(1000));
        assert_eq!(map.cost((1, 1)), Ok(1000));
        assert_eq!(
            map.cost((3, 0)),
            Err(SearchError::OutOfBounds {
                state: (3, 0),
                size: 3
            })
        );
    }

    #[test]
    fn test_legal_actions() {
        let map = Map::from_rows(&["pwp", "pup", "ppp"]).unwrap();

        // Corner: north and west leave the grid, east is a wall.
        assert_eq!(map.legal_actions((0, 0)), vec![Action::South]);

        // Unknown cells are entered like any other non-wall cell.
        assert_eq!(
            map.legal_actions((1, 0)),
            vec![Action::North, Action::South, Action::East]
        );

        assert_eq!(
            map.legal_actions((1, 1)),
            vec![Action::South, Action::West, Action::East]
        );
        assert_eq!(
            map.legal_actions((2, 2)),
            vec![Action::North, Action::West]
        );

        // Leaving a wall cell is allowed; only entering one is not.
        assert_eq!(
            map.legal_actions((0, 1)),
            vec![Action::South, Action::West, Action::East]
        );
    }
}
