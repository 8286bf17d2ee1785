//! End-to-end tests: read puzzle files from `tests/fixtures`, solve them, and check the boards.

use gogen::parse::ParseError;
use gogen::{Cell, Location, Puzzle};

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

/// Every consecutive pair of letters in every word sits in touching cells.
fn words_are_traceable(solved: &Puzzle, words: &[Vec<char>]) -> bool {
    let grid = solved.grid();
    words.iter().all(|word| word.windows(2).all(|pair| {
        grid.find(pair[0]).iter().any(|a| grid.find(pair[1]).iter().any(|b| a.is_adjacent_to(b)))
    }))
}

#[test]
fn quick_fixture() {
    let puzzle = Puzzle::load_from_path(fixture("quick.gogen")).expect("fixture should parse");
    assert_eq!(puzzle.grid().blanks().len(), 16);
    assert_eq!(puzzle.words().len(), 11);

    let words = puzzle.words().to_vec();
    let solved = puzzle.solve().expect("fixture should be solvable");

    assert!(solved.is_solved());
    assert!(words_are_traceable(&solved, &words));
    assert_eq!(solved.grid().to_string(), "JTHVY\nSEARM\nXODNG\nBLCIP\nFQUKW\n");
}

#[test]
fn vital_fixture() {
    let puzzle = Puzzle::load_from_path(fixture("vital.gogen")).expect("fixture should parse");
    let words = puzzle.words().to_vec();
    let solved = puzzle.solve().expect("fixture should be solvable");

    assert!(words_are_traceable(&solved, &words));
    assert_eq!(solved.grid().to_string(), "PYBJQ\nFLEMU\nGRASO\nDNTHC\nKVIWX\n");
}

#[test]
fn fixture_without_a_word_is_ambiguous_but_solvable() {
    let mut text = std::fs::read_to_string(fixture("quick.gogen")).unwrap();
    text = text.replace("QUICK\n", "");

    let puzzle: Puzzle = text.parse().unwrap();
    let solved = puzzle.clone().solve().unwrap();

    // the given letters never move
    for (location, cell) in puzzle.grid().cells() {
        if let Cell::Known(letter) = cell {
            assert_eq!(solved.grid().get(location), Some(Cell::Known(letter)));
        }
    }
}

#[test]
fn contradictory_fixture() {
    // J and Y are given in opposite corners of the top row
    let text = std::fs::read_to_string(fixture("quick.gogen")).unwrap() + "JY\n";
    let puzzle: Puzzle = text.parse().unwrap();

    let failure = puzzle.solve().unwrap_err();
    assert!(failure.is_no_solution());
    assert_eq!(failure, gogen::SolverFailure::Inconsistent);
}

#[test]
fn truncated_fixture() {
    let err = Puzzle::load_from_path(fixture("truncated.gogen")).unwrap_err();
    assert!(matches!(err, ParseError::TooShort { found: 2, .. }));
}

#[test]
fn missing_fixture() {
    let err = Puzzle::load_from_path(fixture("does-not-exist.gogen")).unwrap_err();
    assert!(matches!(err, ParseError::Io(_)));
}

#[test]
fn solve_free_function() {
    let puzzle = Puzzle::load_from_path(fixture("quick.gogen")).unwrap();
    let grid = gogen::solve(puzzle.grid(), puzzle.letters(), puzzle.words()).unwrap();
    assert_eq!(grid.get(Location(1, 2)), Some(Cell::Known('A')));
}
