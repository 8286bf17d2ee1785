use std::fmt::{Display, Formatter};

/// Character used for blank cells in the text format and when printing.
pub const BLANK: char = '?';

/// A single cell of a Gogen board.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Cell {
    /// A cell whose letter is given, or has been solved.
    Known(char),
    /// A cell which must be filled from the letter pool.
    #[default]
    Blank,
}

impl Cell {
    /// The letter in this cell, if any.
    pub fn letter(&self) -> Option<char> {
        match self {
            Self::Known(letter) => Some(*letter),
            Self::Blank => None,
        }
    }

    /// Whether this cell is still to be filled.
    pub fn is_blank(&self) -> bool {
        *self == Self::Blank
    }

    /// Whether this cell could hold `letter`, i.e. it is blank or already holds exactly `letter`.
    pub(crate) fn admits(&self, letter: char) -> bool {
        match self {
            Self::Known(known) => *known == letter,
            Self::Blank => true,
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter().unwrap_or(BLANK))
    }
}
