//! Plain-text board rendering
//!
//! Light pieces are upper case, Dark pieces lower case. Empty cells show their terrain: `~`
//! river, `#` trap, `*` den, `.` land. Cells a selected piece may move to are marked `+`.

use jungle_engine::constants::{HEIGHT, WIDTH};
use jungle_engine::{Board, GameStatus, Outcome, Position, Side, Terrain};

/// Render `board` with optional move markers
pub fn render_board(board: &Board, marks: &[Position]) -> String {
    let mut out = String::new();

    for row in 0..HEIGHT {
        out.push_str(&format!("{} ", row + 1));
        for col in 0..WIDTH {
            let position = Position::new(col, row);
            let cell = board.get_cell(position);

            let symbol = match cell.piece() {
                Some(piece) if piece.side == Side::Light => piece.kind.symbol(),
                Some(piece) => piece.kind.symbol().to_ascii_lowercase(),
                None if marks.contains(&position) => '+',
                None => match cell.terrain() {
                    Terrain::River => '~',
                    Terrain::Trap(_) => '#',
                    Terrain::Den(_) => '*',
                    Terrain::Empty => '.',
                },
            };
            out.push(' ');
            out.push(symbol);
        }
        out.push('\n');
    }

    out.push_str("  ");
    for col in 0..WIDTH {
        out.push(' ');
        out.push((b'a' + col as u8) as char);
    }
    out.push('\n');
    out
}

/// One-line summary of the game state
pub fn describe_status(board: &Board, status: GameStatus) -> String {
    match status {
        GameStatus::InProgress => format!("{} to move", board.side_to_move()),
        GameStatus::Won(side) => format!("{} wins", side),
    }
}

pub fn describe_outcome(outcome: &Outcome) -> String {
    format!("{} wins: {}", outcome.winner, outcome.reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jungle_engine::new_game;

    #[test]
    fn test_opening_board() {
        let text = render_board(&new_game(), &[]);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "1  l . # * # . t");
        assert_eq!(lines[3], "4  . ~ ~ . ~ ~ .");
        assert_eq!(lines[8], "9  T . # * # . L");
        assert_eq!(lines[9], "   a b c d e f g");
    }

    #[test]
    fn test_marks_only_on_empty_cells() {
        let board = new_game();
        let marks = [Position::new(5, 6), Position::new(5, 7)];
        let text = render_board(&board, &marks);
        let row7: &str = text.lines().nth(6).expect("row 7");

        assert_eq!(row7, "7  E . W . P + R");
    }
}
