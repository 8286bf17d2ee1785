use std::fmt::{Display, Formatter};

use itertools::Itertools;
use ndarray::{Array2, AssignElem};
use petgraph::graphmap::UnGraphMap;

use crate::cell::Cell;
use crate::location::{KingStep, Location, GRID_SIZE};

/// A square Gogen board of [`GRID_SIZE`] rows and columns.
///
/// Grids are usually obtained from a [`PuzzleBuilder`](crate::builder::PuzzleBuilder) or by parsing,
/// and come back from [`solve`](crate::model::solve) with every cell [`Known`](Cell::Known).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grid {
    pub(crate) cells: Array2<Cell>,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            cells: Array2::from_shape_simple_fn((GRID_SIZE, GRID_SIZE), Cell::default),
        }
    }
}

impl Grid {
    /// The cell at `location`, or [`None`] if it is off the board.
    pub fn get(&self, location: Location) -> Option<Cell> {
        self.cells.get(location.as_index()).copied()
    }

    pub(crate) fn set(&mut self, location: Location, cell: Cell) {
        if let Some(slot) = self.cells.get_mut(location.as_index()) {
            slot.assign_elem(cell);
        }
    }

    /// Every location on the board in row-major order.
    pub fn locations(&self) -> impl Iterator<Item = Location> + '_ {
        self.cells.indexed_iter().map(|(ind, _)| Location::from(ind))
    }

    /// Every location paired with its cell, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Location, Cell)> + '_ {
        self.cells.indexed_iter().map(|(ind, cell)| (Location::from(ind), *cell))
    }

    /// Locations of all blank cells, in row-major order.
    pub fn blanks(&self) -> Vec<Location> {
        self.cells()
            .filter(|(_, cell)| cell.is_blank())
            .map(|(location, _)| location)
            .collect_vec()
    }

    /// Whether no cell is blank.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_blank())
    }

    /// Locations currently holding `letter`.
    pub fn find(&self, letter: char) -> Vec<Location> {
        self.cells()
            .filter(|(_, cell)| cell.letter() == Some(letter))
            .map(|(location, _)| location)
            .collect_vec()
    }

    /// The board as an undirected graph, one vertex per location and one edge per pair of 8-adjacent locations.
    pub(crate) fn adjacency(&self) -> UnGraphMap<Location, ()> {
        let mut graph = UnGraphMap::with_capacity(
            self.cells.len(),
            // horizontal and vertical, then both diagonals
            2 * GRID_SIZE * (GRID_SIZE - 1) + 2 * (GRID_SIZE - 1) * (GRID_SIZE - 1),
        );

        for location in self.locations() {
            graph.add_node(location);
        }

        for location in self.locations() {
            // only step forward so every pair is visited once
            for step in KingStep::FORWARD_VARIANTS {
                let neighbor = step.attempt_from(location);
                if neighbor.in_bounds() {
                    graph.add_edge(location, neighbor, ());
                }
            }
        }

        graph
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.rows() {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::cell::Cell;
    use crate::grid::Grid;
    use crate::location::Location;

    #[test]
    fn default_is_blank() {
        let grid = Grid::default();
        assert_eq!(grid.blanks().len(), 25);
        assert!(!grid.is_complete());
        assert_eq!(format!("{}", grid), "?????
?????
?????
?????
?????
");
    }

    #[test]
    fn set_and_find() {
        let mut grid = Grid::default();
        grid.set(Location(1, 3), Cell::Known('Q'));
        grid.set(Location(7, 7), Cell::Known('Z'));

        assert_eq!(grid.get(Location(1, 3)), Some(Cell::Known('Q')));
        assert_eq!(grid.get(Location(7, 7)), None);
        assert_eq!(grid.find('Q'), vec![Location(1, 3)]);
        assert!(grid.find('Z').is_empty());
        assert_eq!(format!("{}", grid).lines().nth(1), Some("???Q?"));
    }

    #[test]
    fn adjacency_graph() {
        let graph = Grid::default().adjacency();
        assert_eq!(graph.node_count(), 25);
        assert_eq!(graph.edge_count(), 72);
        assert_eq!(graph.neighbors(Location(0, 0)).count(), 3);
        assert_eq!(graph.neighbors(Location(2, 2)).count(), 8);
        assert!(graph.contains_edge(Location(3, 1), Location(2, 2)));
        assert!(!graph.contains_edge(Location(0, 0), Location(2, 2)));
    }
}
