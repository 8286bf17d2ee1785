//! Reading puzzles from their text form.
//!
//! A puzzle file holds the board as five rows of five characters, `?` marking a blank, then a separator line,
//! the pool of letters on one line, another separator line, and finally one word per line:
//!
//! ```text
//! J?H?Y
//! ?????
//! X?D?G
//! ?????
//! F?U?W
//!
//! ABCEIKLMNOPQRSTV
//!
//! QUICK
//! VARY
//! ```
//!
//! Surrounding whitespace on each line is ignored, as are blank lines among the words.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::builder::{BuilderInvalidReason, PuzzleBuilder};
use crate::cell::BLANK;
use crate::location::{Location, GRID_SIZE};
use crate::puzzle::Puzzle;

const LETTERS_LINE: usize = GRID_SIZE + 1;
const FIRST_WORD_LINE: usize = GRID_SIZE + 3;

/// Reasons a puzzle could not be read. Line numbers count from 1.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The text ends before the pool line.
    #[error("expected at least {expected} lines, found {found}")]
    TooShort {
        /// Minimum number of lines.
        expected: usize,
        /// Number of lines present.
        found: usize,
    },

    /// A board row has the wrong number of cells.
    #[error("line {line}: board rows must have {expected} cells, found {found}")]
    RowWidth {
        /// Line of the offending row.
        line: usize,
        /// Cells required per row.
        expected: usize,
        /// Cells present.
        found: usize,
    },

    /// A line holds something the builder rejects.
    #[error("line {line}: {source}")]
    Invalid {
        /// Line the rejected content is on.
        line: usize,
        /// Why it was rejected.
        #[source]
        source: BuilderInvalidReason,
    },

    /// The file could not be read.
    #[error("could not read puzzle: {0}")]
    Io(#[from] std::io::Error),
}

impl Puzzle {
    /// Read and parse the puzzle stored at `path`.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        let text = fs::read_to_string(path)?;
        text.parse()
    }
}

/// Run `apply` against `builder`, attributing any new invalid reason to `line`.
fn checked(
    builder: &mut PuzzleBuilder,
    line: usize,
    apply: impl FnOnce(&mut PuzzleBuilder),
) -> Result<(), ParseError> {
    apply(builder);
    match builder.is_valid().and_then(|reasons| reasons.first()) {
        None => Ok(()),
        Some(reason) => Err(ParseError::Invalid { line, source: *reason }),
    }
}

impl FromStr for Puzzle {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().map(str::trim).collect();
        if lines.len() <= LETTERS_LINE {
            return Err(ParseError::TooShort { expected: LETTERS_LINE + 1, found: lines.len() });
        }

        let mut builder = PuzzleBuilder::new();

        for (row, line) in lines[..GRID_SIZE].iter().enumerate() {
            let width = line.chars().count();
            if width != GRID_SIZE {
                return Err(ParseError::RowWidth { line: row + 1, expected: GRID_SIZE, found: width });
            }

            for (col, c) in line.chars().enumerate() {
                if c != BLANK {
                    checked(&mut builder, row + 1, |b| { b.set_letter(Location(row, col), c); })?;
                }
            }
        }

        checked(&mut builder, LETTERS_LINE + 1, |b| { b.add_letters(lines[LETTERS_LINE]); })?;

        for (offset, word) in lines.iter().enumerate().skip(FIRST_WORD_LINE) {
            if !word.is_empty() {
                checked(&mut builder, offset + 1, |b| { b.add_word(word); })?;
            }
        }

        builder.build().map_err(|reasons| ParseError::Invalid {
            line: lines.len(),
            source: reasons[0],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::ParseError;
    use crate::builder::BuilderInvalidReason;
    use crate::cell::Cell;
    use crate::location::Location;
    use crate::puzzle::Puzzle;

    const SMALL: &str = "A?C?E
?????
K?M?O
?????
U?W?Y

BDFGHIJLNPQRSTVX

ABC
  fed

KLM
";

    #[test]
    fn parses_all_sections() {
        let puzzle: Puzzle = SMALL.parse().unwrap();

        assert_eq!(puzzle.grid().get(Location(0, 0)), Some(Cell::Known('A')));
        assert_eq!(puzzle.grid().get(Location(0, 1)), Some(Cell::Blank));
        assert_eq!(puzzle.grid().get(Location(4, 4)), Some(Cell::Known('Y')));
        assert_eq!(puzzle.grid().blanks().len(), 16);
        assert_eq!(puzzle.letters().len(), 16);
        assert_eq!(puzzle.words(), &[vec!['A', 'B', 'C'], vec!['F', 'E', 'D'], vec!['K', 'L', 'M']]);
    }

    #[test]
    fn missing_words_section_is_fine() {
        let puzzle: Puzzle = "ABCDE\nFGHIJ\nKLMNO\nPQRST\nUVWXY\n\n\n".parse().unwrap();
        assert!(puzzle.grid().is_complete());
        assert!(puzzle.letters().is_empty());
        assert!(puzzle.words().is_empty());
    }

    #[test]
    fn display_round_trips_the_board() {
        let puzzle: Puzzle = SMALL.parse().unwrap();
        assert_eq!(format!("{}", puzzle.grid()), "A?C?E
?????
K?M?O
?????
U?W?Y
");
    }

    #[test]
    fn too_short() {
        assert!(matches!(
            "A?C?E\n?????\n".parse::<Puzzle>(),
            Err(ParseError::TooShort { expected: 7, found: 2 })
        ));
    }

    #[test]
    fn bad_row_width() {
        let text = SMALL.replacen("K?M?O", "K?M?", 1);
        assert!(matches!(
            text.parse::<Puzzle>(),
            Err(ParseError::RowWidth { line: 3, expected: 5, found: 4 })
        ));
    }

    #[test]
    fn bad_cell_character() {
        let text = SMALL.replacen("U?W?Y", "U?W*Y", 1);
        assert!(matches!(
            text.parse::<Puzzle>(),
            Err(ParseError::Invalid { line: 5, source: BuilderInvalidReason::NotALetter('*') })
        ));
    }

    #[test]
    fn bad_word_character() {
        let text = SMALL.replacen("KLM", "K-M", 1);
        let err = text.parse::<Puzzle>().unwrap_err();
        assert!(matches!(err, ParseError::Invalid { line: 12, source: BuilderInvalidReason::NotALetter('-') }));
        assert_eq!(err.to_string(), "line 12: '-' is not a letter");
    }
}
