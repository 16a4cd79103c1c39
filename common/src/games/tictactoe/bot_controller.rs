use scopeguard::guard;

use super::board::{Board, get_available_moves};
use super::types::{Mark, Player};
use super::win_detector::check_winner;

const WIN_SCORE: i32 = 10;

/// Optimal move for O, the side the AI plays.
pub fn best_move(board: &Board) -> Option<usize> {
    best_move_for(board, Player::O)
}

/// Optimal move for `bot`. Returns `None` on a board that is already won or
/// has no empty cell. Ties go to the lowest index.
pub fn best_move_for(board: &Board, bot: Player) -> Option<usize> {
    if check_winner(board, Player::X) || check_winner(board, Player::O) {
        return None;
    }

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for (index, score) in score_moves(board, bot) {
        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

/// Minimax score of every empty cell for `bot`, in index order.
pub fn score_moves(board: &Board, bot: Player) -> Vec<(usize, i32)> {
    let mut board = *board;
    get_available_moves(&board)
        .into_iter()
        .map(|index| (index, score_placement(&mut board, index, bot.mark(), 0, false, bot)))
        .collect()
}

// Places `mark`, searches, and clears the cell again on every exit path.
fn score_placement(
    board: &mut Board,
    index: usize,
    mark: Mark,
    depth: i32,
    is_maximizing: bool,
    bot: Player,
) -> i32 {
    let mut placed = guard(board, |board| board.clear(index));
    placed.set(index, mark);
    minimax(&mut **placed, depth, is_maximizing, bot)
}

fn minimax(board: &mut Board, depth: i32, is_maximizing: bool, bot: Player) -> i32 {
    if check_winner(board, bot) {
        return WIN_SCORE - depth;
    }
    if check_winner(board, bot.opponent()) {
        return depth - WIN_SCORE;
    }
    if board.is_full() {
        return 0;
    }

    let moves = get_available_moves(board);

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for index in moves {
            let eval = score_placement(board, index, bot.mark(), depth + 1, false, bot);
            max_eval = max_eval.max(eval);
        }
        max_eval
    } else {
        let opponent_mark = bot.opponent().mark();
        let mut min_eval = i32::MAX;
        for index in moves {
            let eval = score_placement(board, index, opponent_mark, depth + 1, true, bot);
            min_eval = min_eval.min(eval);
        }
        min_eval
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::board::CELL_COUNT;

    fn board_from(layout: &str) -> Board {
        let mut board = Board::new();
        for (index, ch) in layout.chars().filter(|c| !c.is_whitespace()).enumerate() {
            match ch {
                'X' => board.set(index, Mark::X),
                'O' => board.set(index, Mark::O),
                _ => {}
            }
        }
        board
    }

    #[test]
    fn test_takes_immediate_win() {
        let board = board_from(
            "O O .
             X X .
             X . .",
        );
        assert_eq!(best_move(&board), Some(2));
    }

    #[test]
    fn test_prefers_win_over_block() {
        let board = board_from(
            "X X .
             O O .
             X . .",
        );
        assert_eq!(best_move(&board), Some(5));
    }

    #[test]
    fn test_blocks_opponent_win() {
        let board = board_from(
            "X . .
             . O .
             X . .",
        );
        assert_eq!(best_move(&board), Some(3));
    }

    #[test]
    fn test_blocks_row_threat() {
        let board = board_from(
            "X . X
             . O .
             . . .",
        );
        assert_eq!(best_move(&board), Some(1));
    }

    #[test]
    fn test_takes_center_after_corner_opening() {
        let board = board_from(
            "X . .
             . . .
             . . .",
        );
        assert_eq!(best_move(&board), Some(4));
    }

    #[test]
    fn test_faster_win_scores_higher() {
        let board = board_from(
            "O O .
             X X .
             X . .",
        );
        let scores = score_moves(&board, Player::O);
        let immediate = scores.iter().find(|(index, _)| *index == 2).map(|(_, s)| *s);
        assert_eq!(immediate, Some(WIN_SCORE));
        assert!(scores.iter().all(|(_, score)| *score <= WIN_SCORE));
    }

    #[test]
    fn test_search_leaves_board_untouched() {
        let board = board_from(
            "X . .
             . O .
             . . X",
        );
        let copy = board;
        let _ = score_moves(&board, Player::O);
        let _ = best_move(&board);
        assert_eq!(board, copy);
    }

    #[test]
    fn test_empty_board_scores_are_all_draws() {
        let scores = score_moves(&Board::new(), Player::X);
        assert_eq!(scores.len(), CELL_COUNT);
        assert!(scores.iter().all(|(_, score)| *score <= 0));
        assert_eq!(best_move_for(&Board::new(), Player::X), Some(0));
    }

    #[test]
    fn test_no_move_on_full_or_won_board() {
        let full = board_from(
            "X O X
             X O O
             O X X",
        );
        assert_eq!(best_move(&full), None);

        let won = board_from(
            "X X X
             O O .
             . . .",
        );
        assert_eq!(best_move(&won), None);
    }

    #[test]
    fn test_ties_go_to_lowest_index() {
        // Every reply draws with best play, so the scan order decides.
        let board = board_from(
            ". . .
             . X .
             . . .",
        );
        let scores = score_moves(&board, Player::O);
        let best = scores.iter().map(|(_, s)| *s).max();
        let first_best = scores.iter().find(|(_, s)| Some(*s) == best).map(|(i, _)| *i);
        assert_eq!(best_move(&board), first_best);
        assert_eq!(best_move(&board), Some(0));
    }
}
