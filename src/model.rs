//! The Gogen constraint model: declaring cell variables, asserting the rules, and reading a solved grid back out.

use itertools::Itertools;
use ndarray::Array2;
use petgraph::graphmap::UnGraphMap;
use unordered_pair::UnorderedPair;

use crate::cell::Cell;
use crate::engine::{CheckResult, ConstraintEngine, IntVar, VarisatEngine};
use crate::grid::Grid;
use crate::location::Location;
use crate::logic::Expr;

/// Reasons solving a Gogen may fail.
#[derive(Debug, Clone, Copy, Eq, PartialEq, thiserror::Error)]
pub enum SolverFailure {
    /// The constraint engine proved the puzzle as stated has no solution.
    #[error("the puzzle has no solution")]
    Inconsistent,
    /// The constraint engine gave up without deciding.
    #[error("the constraint engine could not decide the puzzle")]
    Unknown,
    /// The engine reported a model in which some cell has no letter.
    /// This should probably never happen.
    #[error("no letter found for the cell at {0:?}")]
    Undecodable(Location),
}

impl SolverFailure {
    /// Whether this failure means the puzzle is unsolvable, as opposed to the engine failing.
    pub fn is_no_solution(&self) -> bool {
        matches!(self, Self::Inconsistent)
    }
}

#[inline]
fn code_of(letter: char) -> u32 {
    letter as u32
}

/// Consecutive letter pairs over all `words`, without repeats.
///
/// Adjacency is symmetric, so `(a, b)` and `(b, a)` are the same requirement and only the first seen is kept.
pub(crate) fn letter_pairs(words: &[Vec<char>]) -> Vec<UnorderedPair<char>> {
    words.iter()
        .flat_map(|word| word.iter().tuple_windows().map(|(a, b)| UnorderedPair(*a, *b)))
        .unique()
        .collect_vec()
}

/// The constraint model of one Gogen: one integer variable per cell, holding the code of that cell's letter.
///
/// Each model is built for a single solve and owns its engine session.
/// Use [`solve`] unless a different [`ConstraintEngine`] is wanted.
pub struct GogenModel<'a, E: ConstraintEngine> {
    grid: &'a Grid,
    letters: &'a [char],
    words: &'a [Vec<char>],
    adjacency: UnGraphMap<Location, ()>,
    cells: Array2<IntVar>,
    engine: E,
}

impl<'a, E: ConstraintEngine> GogenModel<'a, E> {
    /// Declare the cell variables on `engine`.
    /// A cell with a given letter ranges over that letter alone; a blank cell ranges over the pool.
    pub fn new(mut engine: E, grid: &'a Grid, letters: &'a [char], words: &'a [Vec<char>]) -> Self {
        let pool = letters.iter().copied().map(code_of).sorted().dedup().collect_vec();

        let cells = grid.cells.map(|cell| match cell {
            Cell::Known(letter) => engine.new_int_var([code_of(*letter)]),
            Cell::Blank => engine.new_int_var(pool.iter().copied()),
        });

        Self {
            grid,
            letters,
            words,
            adjacency: grid.adjacency(),
            cells,
            engine,
        }
    }

    #[inline]
    fn cell_is(&self, location: Location, letter: char) -> Expr {
        Expr::Eq(self.cells[location.as_index()], code_of(letter))
    }

    /// A cell whose letter is known holds that letter.
    pub fn fixed_cells(&self) -> Vec<Expr> {
        self.grid.cells()
            .filter_map(|(location, cell)| cell.letter().map(|letter| self.cell_is(location, letter)))
            .collect_vec()
    }

    /// A blank cell holds one of the pool letters.
    pub fn blank_domains(&self) -> Vec<Expr> {
        self.grid.blanks().into_iter()
            .map(|location| Expr::or(self.letters.iter().map(|letter| self.cell_is(location, *letter))))
            .collect_vec()
    }

    /// Every pool letter is placed in at least one blank cell.
    pub fn pool_coverage(&self) -> Vec<Expr> {
        let blanks = self.grid.blanks();
        self.letters.iter()
            .map(|letter| Expr::or(blanks.iter().map(|location| self.cell_is(*location, *letter))))
            .collect_vec()
    }

    /// For each pair of consecutive letters `a`, `b` in some word, some cell holding `a` touches a cell holding `b`.
    ///
    /// Candidate cells already holding some other letter are left out; they could never satisfy the atom anyway.
    /// Letter positions are unique in a well-formed puzzle, so one such pair of cells suffices.
    pub fn word_adjacency(&self) -> Vec<Expr> {
        letter_pairs(self.words).into_iter()
            .map(|UnorderedPair(a, b)| Expr::or(
                self.grid.cells()
                    .filter(|(_, cell)| cell.admits(a))
                    .map(|(location, _)| Expr::and([
                        self.cell_is(location, a),
                        Expr::or(
                            self.adjacency.neighbors(location)
                                .filter(|neighbor| self.grid.get(*neighbor).is_some_and(|cell| cell.admits(b)))
                                .map(|neighbor| self.cell_is(neighbor, b))
                        ),
                    ]))
            ))
            .collect_vec()
    }

    /// Groups of atoms of which at most one can hold in any solution, one group per pool letter.
    ///
    /// When the pool has exactly as many distinct letters as there are blanks, every blank holds a pool letter and
    /// every pool letter is held by some blank, so each letter sits in exactly one blank.
    /// These groups restate that consequence so the engine need not derive it by counting.
    /// They add no requirement of their own; otherwise nothing is implied and no groups are returned.
    pub fn implied_single_use(&self) -> Vec<Vec<(IntVar, u32)>> {
        let blanks = self.grid.blanks();
        let distinct = self.letters.iter().unique().collect_vec();
        if distinct.len() != blanks.len() {
            return Vec::new();
        }

        distinct.into_iter()
            .map(|letter| blanks.iter()
                .map(|location| (self.cells[location.as_index()], code_of(*letter)))
                .collect_vec())
            .collect_vec()
    }

    /// Assert every constraint, run the engine, and read the letters back out.
    pub fn solve(mut self) -> Result<Grid, SolverFailure> {
        let families = [
            ("fixed", self.fixed_cells()),
            ("domain", self.blank_domains()),
            ("coverage", self.pool_coverage()),
            ("adjacency", self.word_adjacency()),
        ];

        for (family, constraints) in families {
            log::debug!(
                "asserting {} {} constraints over {} atoms",
                constraints.len(),
                family,
                constraints.iter().map(Expr::atom_count).sum::<usize>(),
            );
            constraints.into_iter().for_each(|constraint| self.engine.assert(constraint));
        }

        let implied = self.implied_single_use();
        if !implied.is_empty() {
            log::debug!("pool fills the blanks exactly; restating {} single-use groups", implied.len());
        }
        implied.iter().for_each(|atoms| self.engine.assert_at_most_one(atoms));

        match self.engine.check() {
            CheckResult::Sat => {}
            CheckResult::Unsat => return Err(SolverFailure::Inconsistent),
            CheckResult::Unknown => return Err(SolverFailure::Unknown),
        }

        let mut solved = Grid::default();
        for (index, var) in self.cells.indexed_iter() {
            let location = Location::from(index);
            let letter = self.engine.value(*var)
                .and_then(char::from_u32)
                .ok_or(SolverFailure::Undecodable(location))?;
            solved.set(location, Cell::Known(letter));
        }

        Ok(solved)
    }
}

/// Fill the blanks of `grid` from `remaining_letters` so that every word in `words` can be traced through adjacent cells.
///
/// Returns the completed grid, or [`SolverFailure::Inconsistent`] if no filling satisfies the rules.
/// Letters must already be normalized to one case.
pub fn solve(grid: &Grid, remaining_letters: &[char], words: &[Vec<char>]) -> Result<Grid, SolverFailure> {
    GogenModel::new(VarisatEngine::new(), grid, remaining_letters, words).solve()
}
