use std::fmt::{Display, Formatter};

use crate::grid::Grid;
use crate::model;
use crate::model::SolverFailure;

/// A Gogen: a partially filled [`Grid`], the letters remaining to place, and the words which must be traceable.
///
/// [`Puzzle`]s should be built using a [`PuzzleBuilder`](crate::builder::PuzzleBuilder) or parsed from text with [`str::parse`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Puzzle {
    pub(crate) grid: Grid,
    pub(crate) letters: Vec<char>,
    pub(crate) words: Vec<Vec<char>>,
}

impl Puzzle {
    /// The board, with any blanks still unfilled.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Letters still to be placed in the blank cells.
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Words which must be traceable through adjacent cells, one letter per cell.
    pub fn words(&self) -> &[Vec<char>] {
        &self.words
    }

    /// Whether every cell is filled and nothing remains to be placed or traced.
    pub fn is_solved(&self) -> bool {
        self.grid.is_complete() && self.letters.is_empty() && self.words.is_empty()
    }

    /// Solves this puzzle, consuming it and returning a version whose grid is complete and whose letters and words are used up.
    ///
    /// Returns according to the result of [`model::solve`].
    pub fn solve(self) -> Result<Self, SolverFailure> {
        let grid = model::solve(&self.grid, &self.letters, &self.words)?;
        log::info!("solved a puzzle with {} blanks and {} words", self.grid.blanks().len(), self.words.len());

        Ok(Self {
            grid,
            letters: Vec::new(),
            words: Vec::new(),
        })
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Board:")?;
        for line in self.grid.to_string().lines() {
            writeln!(f, "\t{}", line)?;
        }

        writeln!(f, "Remaining letters: {}", self.letters.iter().collect::<String>())?;

        writeln!(f, "Words:")?;
        for word in &self.words {
            writeln!(f, "\t{}", word.iter().collect::<String>())?;
        }

        Ok(())
    }
}
