//! Terminal-oriented board renderer.
//!
//! Draws the 8x8 board with row and column labels, light squares blank and
//! dark squares showing `w`/`W`/`b`/`B` or `.` when empty.

use crate::game_state::checkers_types::*;
use crate::game_state::square_geometry::index_from_rc;

pub fn render_game_state(position: &Position) -> String {
    let mut out = String::new();

    out.push_str("  0 1 2 3 4 5 6 7\n");

    for row in 0..8 {
        out.push(char::from(b'0' + row as u8));
        out.push(' ');

        for col in 0..8 {
            match index_from_rc(row, col) {
                Some(sq) => out.push(position.piece_at(sq).map_or('.', Piece::to_char)),
                None => out.push(' '),
            }
            if col < 7 {
                out.push(' ');
            }
        }
        out.push('\n');
    }

    out.push_str(match position.side_to_move() {
        Side::White => "White to move",
        Side::Black => "Black to move",
    });

    out
}

#[cfg(test)]
mod tests {
    use super::render_game_state;
    use crate::game_state::checkers_types::Position;

    #[test]
    fn renders_opening_board() {
        let rendered = render_game_state(&Position::new_game());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "  0 1 2 3 4 5 6 7");
        assert_eq!(lines[1], "0   b   b   b   b");
        assert_eq!(lines[4], "3 .   .   .   .  ");
        assert_eq!(lines[8], "7 w   w   w   w  ");
        assert_eq!(lines[9], "White to move");
    }
}
