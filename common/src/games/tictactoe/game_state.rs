use thiserror::Error;

use super::board::{Board, CELL_COUNT, is_valid_move};
use super::types::{GameStatus, Mark, Player, WinningLine};
use super::win_detector::{check_win_with_line, check_winner, is_draw};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalMove {
    #[error("Position {0} is out of bounds")]
    OutOfRange(usize),

    #[error("Cell {0} is already marked")]
    Occupied(usize),

    #[error("Game is already over")]
    GameOver,

    #[error("Not player {0}'s turn")]
    NotYourTurn(Player),
}

/// One immutable step of a game. Moves produce a new state and leave the
/// receiver untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicTacToeGameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
    last_move: Option<usize>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn restart(&self) -> Self {
        Self::new()
    }

    pub fn apply_move(&self, index: usize, player: Player) -> Result<Self, IllegalMove> {
        if self.status.is_terminal() {
            return Err(IllegalMove::GameOver);
        }

        if index >= CELL_COUNT {
            return Err(IllegalMove::OutOfRange(index));
        }

        if player != self.current_player {
            return Err(IllegalMove::NotYourTurn(player));
        }

        if !is_valid_move(&self.board, index) {
            return Err(IllegalMove::Occupied(index));
        }

        let mut next = *self;
        next.board.set(index, player.mark());
        next.last_move = Some(index);
        next.status = evaluate_status(&next.board, player);

        if next.status == GameStatus::InProgress {
            next.current_player = player.opponent();
        }

        Ok(next)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn active_player(&self) -> Player {
        self.current_player
    }

    pub fn cell_at(&self, index: usize) -> Option<Mark> {
        self.board.get(index)
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        match self.status {
            GameStatus::Won(_) => check_win_with_line(&self.board),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }
}

// The mover's win is checked before fullness: a last move can fill the
// board and complete a line at once.
fn evaluate_status(board: &Board, mover: Player) -> GameStatus {
    if check_winner(board, mover) {
        return GameStatus::Won(mover);
    }

    if is_draw(board) {
        return GameStatus::Draw;
    }

    GameStatus::InProgress
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(moves: &[usize]) -> TicTacToeGameState {
        let mut state = TicTacToeGameState::new();
        for &index in moves {
            state = state.apply_move(index, state.active_player()).unwrap();
        }
        state
    }

    #[test]
    fn test_new_game() {
        let state = TicTacToeGameState::new();
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.active_player(), Player::X);
        assert!((0..CELL_COUNT).all(|i| state.cell_at(i) == Some(Mark::Empty)));
        assert_eq!(state.last_move(), None);
    }

    #[test]
    fn test_apply_move_marks_cell_and_switches_turn() {
        let state = TicTacToeGameState::new();
        let next = state.apply_move(4, Player::X).unwrap();
        assert_eq!(next.cell_at(4), Some(Mark::X));
        assert_eq!(next.active_player(), Player::O);
        assert_eq!(next.last_move(), Some(4));
        assert_eq!(state, TicTacToeGameState::new());
    }

    #[test]
    fn test_occupied_cell_is_rejected() {
        let state = play(&[0]);
        assert_eq!(state.apply_move(0, Player::O), Err(IllegalMove::Occupied(0)));
        assert_eq!(state, play(&[0]));
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let state = TicTacToeGameState::new();
        assert_eq!(state.apply_move(9, Player::X), Err(IllegalMove::OutOfRange(9)));
        assert_eq!(state, TicTacToeGameState::new());
    }

    #[test]
    fn test_wrong_player_is_rejected() {
        let state = TicTacToeGameState::new();
        assert_eq!(state.apply_move(0, Player::O), Err(IllegalMove::NotYourTurn(Player::O)));
    }

    #[test]
    fn test_move_after_win_is_rejected() {
        // X: 0 1 2, O: 3 4
        let state = play(&[0, 3, 1, 4, 2]);
        assert_eq!(state.status(), GameStatus::Won(Player::X));
        assert_eq!(state.active_player(), Player::X);
        let before = state;
        assert_eq!(state.apply_move(8, Player::O), Err(IllegalMove::GameOver));
        assert_eq!(state.apply_move(8, Player::X), Err(IllegalMove::GameOver));
        assert_eq!(state, before);
    }

    #[test]
    fn test_o_can_win() {
        // X: 0 1 8, O: 3 4 5
        let state = play(&[0, 3, 1, 4, 8, 5]);
        assert_eq!(state.status(), GameStatus::Won(Player::O));
        assert_eq!(state.winning_line(), Some(WinningLine::new(Player::O, [3, 4, 5])));
    }

    #[test]
    fn test_draw() {
        // X O X
        // X O O
        // O X X
        let state = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(state.status(), GameStatus::Draw);
        assert_eq!(state.winning_line(), None);
        assert_eq!(state.apply_move(0, Player::O), Err(IllegalMove::GameOver));
    }

    #[test]
    fn test_win_on_last_cell_is_not_draw() {
        // X X X
        // O O X
        // X O O   final X move fills index 2
        let state = play(&[0, 3, 1, 4, 5, 8, 6, 7, 2]);
        assert!(state.board().is_full());
        assert_eq!(state.status(), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_queries_are_idempotent() {
        let state = play(&[4, 0]);
        assert_eq!(state.status(), state.status());
        assert_eq!(state.active_player(), state.active_player());
        for index in 0..CELL_COUNT {
            assert_eq!(state.cell_at(index), state.cell_at(index));
        }
        assert_eq!(state.cell_at(9), None);
    }

    #[test]
    fn test_restart_resets_everything() {
        let state = play(&[0, 3, 1, 4, 2]).restart();
        assert_eq!(state, TicTacToeGameState::new());
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.active_player(), Player::X);
    }
}
