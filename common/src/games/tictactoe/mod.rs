mod board;
mod bot_controller;
mod game_state;
mod session;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, Board, CELL_COUNT, get_available_moves, is_valid_move};
pub use bot_controller::{best_move, best_move_for, score_moves};
pub use game_state::{IllegalMove, TicTacToeGameState};
pub use session::{AI_PLAYER, TicTacToeSession, status_text};
pub use types::{GameMode, GameStatus, Mark, Player, WinningLine};
pub use win_detector::{WIN_LINES, check_win_with_line, check_winner, is_draw};
