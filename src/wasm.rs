use wasm_bindgen::prelude::*;

use crate::puzzle::Puzzle;

/// Parse and solve `text`, describing any failure in a message fit for the user.
fn solve_text(text: &str) -> Result<String, String> {
    let puzzle: Puzzle = text.parse()
        .map_err(|e| format!("Could not read puzzle: {}", e))?;
    let solved = puzzle.solve()
        .map_err(|failure| format!("Could not solve puzzle: {}", failure))?;

    Ok(solved.grid().to_string())
}

/// Solve the puzzle given in the text format read by [`Puzzle::from_str`](std::str::FromStr::from_str),
/// returning the completed board as five lines of five letters.
///
/// Unreadable or unsolvable puzzles raise a JavaScript `Error`.
#[wasm_bindgen]
pub fn solve_gogen(text: &str) -> Result<String, JsValue> {
    solve_text(text).map_err(|message| js_sys::Error::new(&message).into())
}

#[cfg(test)]
mod tests {
    use super::solve_text;

    const BOARD: &str = "ABCDE\nFGHIJ\nKL?NO\nPQRST\nUVWXY\n\n";

    #[test]
    fn solves_to_board_text() {
        let text = format!("{}M\n\nLMN\n", BOARD);
        assert_eq!(solve_text(&text).unwrap(), "ABCDE\nFGHIJ\nKLMNO\nPQRST\nUVWXY\n");
    }

    #[test]
    fn unreadable_puzzle() {
        assert_eq!(
            solve_text("ABCDE\nFGHIJ\n").unwrap_err(),
            "Could not read puzzle: expected at least 7 lines, found 2"
        );
    }

    #[test]
    fn unsolvable_puzzle() {
        let text = format!("{}M\n\nAY\n", BOARD);
        assert_eq!(solve_text(&text).unwrap_err(), "Could not solve puzzle: the puzzle has no solution");
    }
}
