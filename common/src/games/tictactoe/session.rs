use crate::log;

use super::bot_controller::best_move;
use super::game_state::{IllegalMove, TicTacToeGameState};
use super::types::{GameMode, GameStatus, Player};

/// The side the AI plays in `GameMode::VsAi`.
pub const AI_PLAYER: Player = Player::O;

/// Front-end facing driver: decides whose clicks count in the current mode
/// and when the AI has to answer.
#[derive(Debug, Clone)]
pub struct TicTacToeSession {
    mode: GameMode,
    state: TicTacToeGameState,
}

impl TicTacToeSession {
    pub fn new(mode: GameMode) -> Self {
        Self {
            mode,
            state: TicTacToeGameState::new(),
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn state(&self) -> &TicTacToeGameState {
        &self.state
    }

    /// Switching modes starts a fresh game.
    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.restart();
        log!("Mode switched to {}", mode);
    }

    pub fn restart(&mut self) {
        self.state = self.state.restart();
    }

    pub fn handle_click(&mut self, index: usize) -> Result<GameStatus, IllegalMove> {
        if self.is_ai_turn() {
            return Err(IllegalMove::NotYourTurn(AI_PLAYER));
        }
        self.apply(index, self.state.active_player())
    }

    pub fn is_ai_turn(&self) -> bool {
        self.mode == GameMode::VsAi
            && !self.state.is_over()
            && self.state.active_player() == AI_PLAYER
    }

    pub fn play_ai_move(&mut self) -> Option<usize> {
        if !self.is_ai_turn() {
            return None;
        }

        let index = best_move(self.state.board())?;
        match self.apply(index, AI_PLAYER) {
            Ok(_) => Some(index),
            Err(e) => {
                log!("AI failed to place mark at {}: {}", index, e);
                None
            }
        }
    }

    pub fn status_text(&self) -> String {
        status_text(&self.state)
    }

    fn apply(&mut self, index: usize, player: Player) -> Result<GameStatus, IllegalMove> {
        self.state = self.state.apply_move(index, player)?;
        log!("Player {} placed mark at {}", player, index);

        let status = self.state.status();
        match status {
            GameStatus::Won(winner) => log!("Game over: player {} wins", winner),
            GameStatus::Draw => log!("Game over: draw"),
            GameStatus::InProgress => {}
        }
        Ok(status)
    }
}

pub fn status_text(state: &TicTacToeGameState) -> String {
    match state.status() {
        GameStatus::InProgress => format!("Player {}'s turn", state.active_player()),
        GameStatus::Won(player) => format!("Player {} wins!", player),
        GameStatus::Draw => "It's a draw!".to_string(),
    }
}
