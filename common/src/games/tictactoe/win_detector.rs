use super::board::Board;
use super::types::{Player, WinningLine};

pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_winner(board: &Board, player: Player) -> bool {
    find_line(board, player).is_some()
}

/// The first completed line in `WIN_LINES` order, X checked before O.
pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    [Player::X, Player::O]
        .into_iter()
        .find_map(|player| find_line(board, player).map(|cells| WinningLine::new(player, cells)))
}

pub fn is_draw(board: &Board) -> bool {
    board.is_full() && !check_winner(board, Player::X) && !check_winner(board, Player::O)
}

fn find_line(board: &Board, player: Player) -> Option<[usize; 3]> {
    let mark = player.mark();
    WIN_LINES
        .iter()
        .find(|line| line.iter().all(|&index| board.get(index) == Some(mark)))
        .copied()
}
