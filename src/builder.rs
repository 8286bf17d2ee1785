//! Assembling a [`Puzzle`] piece by piece, with validation as it goes.

use itertools::Itertools;

use crate::cell::Cell;
use crate::grid::Grid;
use crate::location::Location;
use crate::puzzle::Puzzle;

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum BuilderInvalidReason {
    /// A letter was placed outside the board.
    #[error("location {0:?} is outside the board")]
    LocationOutOfBounds(Location),
    /// A letter, pool entry, or word contained something other than an ASCII letter.
    #[error("'{0}' is not a letter")]
    NotALetter(char),
    /// A word with no letters was added.
    #[error("words must have at least one letter")]
    EmptyWord,
}

/// A builder for [`Puzzle`]s.
///
/// Letters are normalized to uppercase as they are added.
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
///
/// ```
/// use gogen::builder::PuzzleBuilder;
/// use gogen::Location;
///
/// let puzzle = PuzzleBuilder::new()
///     .set_letter(Location(0, 0), 'a')
///     .add_letters("b")
///     .add_word("ab")
///     .build()
///     .unwrap();
/// assert_eq!(puzzle.letters(), &['B']);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PuzzleBuilder {
    grid: Grid,
    letters: Vec<char>,
    words: Vec<Vec<char>>,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl PuzzleBuilder {
    /// Construct a builder with every cell blank, no letters and no words.
    pub fn new() -> Self {
        Self::default()
    }

    fn normalize(&mut self, letter: char) -> Option<char> {
        if letter.is_ascii_alphabetic() {
            Some(letter.to_ascii_uppercase())
        } else {
            self.invalid_reasons.push(BuilderInvalidReason::NotALetter(letter));
            None
        }
    }

    fn normalize_all(&mut self, letters: &str) -> Option<Vec<char>> {
        let mut normalized = Vec::with_capacity(letters.len());
        for letter in letters.chars() {
            normalized.push(self.normalize(letter)?);
        }
        Some(normalized)
    }

    /// Fix the letter at `location`.
    ///
    /// May cause the builder to enter a [`LocationOutOfBounds`](BuilderInvalidReason::LocationOutOfBounds) invalid state if `location` is off the board,
    /// or a [`NotALetter`](BuilderInvalidReason::NotALetter) invalid state if `letter` is not an ASCII letter.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn set_letter(&mut self, location: Location, letter: char) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if !location.in_bounds() {
            self.invalid_reasons.push(BuilderInvalidReason::LocationOutOfBounds(location));
            return self;
        }

        if let Some(letter) = self.normalize(letter) {
            self.grid.set(location, Cell::Known(letter));
        }

        self
    }

    /// Make the cell at `location` blank again.
    ///
    /// May cause the builder to enter a [`LocationOutOfBounds`](BuilderInvalidReason::LocationOutOfBounds) invalid state if `location` is off the board.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn clear(&mut self, location: Location) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if !location.in_bounds() {
            self.invalid_reasons.push(BuilderInvalidReason::LocationOutOfBounds(location));
            return self;
        }

        self.grid.set(location, Cell::Blank);
        self
    }

    /// Append every character of `letters` to the pool of letters to be placed.
    ///
    /// May cause the builder to enter a [`NotALetter`](BuilderInvalidReason::NotALetter) invalid state, in which case no letter is added.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn add_letters(&mut self, letters: &str) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if let Some(letters) = self.normalize_all(letters) {
            self.letters.extend(letters);
        }

        self
    }

    /// Add a word which must be traceable through adjacent cells once solved.
    ///
    /// May cause the builder to enter an [`EmptyWord`](BuilderInvalidReason::EmptyWord) or [`NotALetter`](BuilderInvalidReason::NotALetter) invalid state.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn add_word(&mut self, word: &str) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if word.is_empty() {
            self.invalid_reasons.push(BuilderInvalidReason::EmptyWord);
            return self;
        }

        if let Some(word) = self.normalize_all(word) {
            self.words.push(word);
        }

        self
    }

    /// Check the validity of this builder, ensuring no [`BuilderInvalidReason`] condition has arisen.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Puzzle`].
    /// If the builder is invalid for any reason, a reference to a [`Vec`] of [`BuilderInvalidReason`] will indicate why.
    pub fn build(&self) -> Result<Puzzle, &Vec<BuilderInvalidReason>> {
        if !self.invalid_reasons.is_empty() {
            return Err(&self.invalid_reasons);
        }

        let duplicated = self.grid.cells()
            .filter_map(|(_, cell)| cell.letter())
            .duplicates()
            .collect_vec();
        if !duplicated.is_empty() {
            // legal, but such a puzzle's words may be satisfied by the wrong copy
            log::warn!("letters {:?} are fixed in more than one cell", duplicated);
        }

        Ok(Puzzle {
            grid: self.grid.clone(),
            letters: self.letters.clone(),
            words: self.words.clone(),
        })
    }
}
