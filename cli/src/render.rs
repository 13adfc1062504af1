// SPDX-License-Identifier: MIT OR Apache-2.0

//! ASCII board rendering for the CLI.

use chessboard_core::{Coord, GameState, BOARD_SIZE};

/// Render the game board as ASCII art, row 0 at the top
pub fn render_board(game_state: &GameState) -> String {
    let mut output = String::new();

    push_file_labels(&mut output);

    for row in 0..BOARD_SIZE {
        let rank = row_to_rank(row);
        output.push_str(&format!("{:2} ", rank));

        for col in 0..BOARD_SIZE {
            let symbol = Coord::new(row, col)
                .ok()
                .and_then(|coord| game_state.piece_at(coord))
                .map_or('.', |piece| piece.symbol());
            output.push_str(&format!(" {}", symbol));
        }

        output.push_str(&format!(" {}", rank));
        output.push('\n');
    }

    push_file_labels(&mut output);
    output.push_str(&format!("{} to move\n", game_state.turn()));

    output
}

/// One display line per piece, in board order
pub fn render_piece_list(game_state: &GameState) -> String {
    game_state
        .board()
        .pieces()
        .map(|piece| format!("{}\n", piece))
        .collect()
}

fn push_file_labels(output: &mut String) {
    output.push_str("   ");
    for col in 0..BOARD_SIZE {
        output.push_str(&format!(" {}", col_to_file_char(col)));
    }
    output.push('\n');
}

/// Convert a column index to its file letter (a-h)
fn col_to_file_char(col: u8) -> char {
    (b'a' + col) as char
}

/// Row 0 is rank 8, row 7 is rank 1
fn row_to_rank(row: u8) -> u8 {
    BOARD_SIZE - row
}
