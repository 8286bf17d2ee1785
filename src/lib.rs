#![warn(missing_docs)]

//! # `gogen`
//!
//! A solver for [Gogen](https://en.wikipedia.org/wiki/Gogen_(puzzle)) letter-grid puzzles.
//! Begin by building a puzzle with a [`PuzzleBuilder`](builder::PuzzleBuilder) or by parsing its text form (see [`parse`]).
//! Then call [`solve()`](crate::Puzzle::solve), consuming the puzzle and yielding a solved version of it.
//!
//! A Gogen is a 5×5 board on which some letters are given. The remaining letters must be placed in the blank cells
//! so that each of a list of words can be spelled by moving between cells touching by side or corner.
//!
//! # Internals
//! This crate is driven by expressing the puzzle as a finite-domain constraint problem, handing it to a SAT solver,
//! and reading the letters back out of the model it returns.
//!
//! Each cell gets one integer variable holding the code of its letter. We then assert:
//! 1. Every cell with a given letter holds that letter.
//! 2. Every blank cell holds one of the letters in the pool.
//! 3. Every letter in the pool is held by at least one blank cell.
//! 4. For every two letters `a`, `b` appearing consecutively in some word, some cell holding `a` has a neighbor holding `b`.
//!
//! A [`ConstraintEngine`](engine::ConstraintEngine) turns these into clauses; the default, [`VarisatEngine`](engine::VarisatEngine),
//! encodes each integer variable as a one-hot group of Boolean variables and solves with `varisat`.
//!
//! Nothing here forces two blanks to take different letters.
//! With one distinct pool letter per blank, as in published puzzles, requirement 3 already makes the filling a
//! permutation of the pool. The solver cannot see that by itself without counting, so in that case the model also
//! states that each pool letter sits in at most one blank (see [`GogenModel::implied_single_use`](model::GogenModel::implied_single_use)).
//! This follows from requirements 2 and 3 and never rules out a solution.

pub use builder::PuzzleBuilder;
pub use cell::Cell;
pub use grid::Grid;
pub use location::{KingStep, Location, GRID_SIZE};
pub use model::{solve, SolverFailure};
pub use puzzle::Puzzle;

pub mod builder;
pub(crate) mod cell;
pub mod engine;
pub(crate) mod grid;
pub(crate) mod location;
pub mod logic;
pub mod model;
pub mod parse;
pub(crate) mod puzzle;
#[cfg(feature = "wasm")]
mod wasm;
