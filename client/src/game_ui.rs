use common::tictactoe::{BOARD_SIZE, Mark, TicTacToeGameState, status_text};

const ROW_SEPARATOR: &str = "---+---+---";

/// Text grid: empty cells show their key, the winning line is bracketed.
pub fn render_board(state: &TicTacToeGameState) -> String {
    let winning_line = state.winning_line();
    let rows: Vec<String> = (0..BOARD_SIZE)
        .map(|row| {
            (0..BOARD_SIZE)
                .map(|col| {
                    let index = row * BOARD_SIZE + col;
                    let symbol = match state.cell_at(index) {
                        Some(Mark::X) => "X".to_string(),
                        Some(Mark::O) => "O".to_string(),
                        _ => (index + 1).to_string(),
                    };
                    if winning_line.is_some_and(|line| line.contains(index)) {
                        format!("[{}]", symbol)
                    } else {
                        format!(" {} ", symbol)
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();

    let separator = format!("\n{}\n", ROW_SEPARATOR);
    format!("{}\n{}", rows.join(separator.as_str()), status_text(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::tictactoe::Player;

    #[test]
    fn test_render_empty_board() {
        let rendered = render_board(&TicTacToeGameState::new());
        let expected = " 1 | 2 | 3 \n---+---+---\n 4 | 5 | 6 \n---+---+---\n 7 | 8 | 9 \nPlayer X's turn";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_marks_and_winning_line() {
        let mut state = TicTacToeGameState::new();
        for index in [0, 3, 1, 4, 2] {
            state = state.apply_move(index, state.active_player()).unwrap();
        }
        assert_eq!(state.status().winner(), Some(Player::X));

        let rendered = render_board(&state);
        let expected = "[X]|[X]|[X]\n---+---+---\n O | O | 6 \n---+---+---\n 7 | 8 | 9 \nPlayer X wins!";
        assert_eq!(rendered, expected);
    }
}
