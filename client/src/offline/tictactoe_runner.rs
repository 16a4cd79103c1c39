use std::io::{self, Write};
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use common::log;
use common::tictactoe::{GameMode, IllegalMove, TicTacToeSession, best_move_for};

use crate::command::{ClientCommand, HELP_TEXT, parse_command};
use crate::game_ui::render_board;

/// Plays until `input` is exhausted or the player quits. The AI reply is
/// delayed by `ai_delay` for pacing; the search itself runs inline.
pub async fn run_tictactoe_game<R, W>(
    input: R,
    output: &mut W,
    mode: GameMode,
    ai_delay: Duration,
) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut session = TicTacToeSession::new(mode);
    let mut lines = input.lines();

    log!("Starting game, mode: {}", mode);
    writeln!(output, "Mode: {}", mode)?;
    writeln!(output, "{}", HELP_TEXT)?;
    writeln!(output, "{}", render_board(session.state()))?;

    loop {
        if session.is_ai_turn() {
            tokio::time::sleep(ai_delay).await;
            if let Some(index) = session.play_ai_move() {
                writeln!(output, "AI plays {}", index + 1)?;
            }
            writeln!(output, "{}", render_board(session.state()))?;
            continue;
        }

        output.flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        let Some(command) = parse_command(&line) else {
            if !line.trim().is_empty() {
                writeln!(output, "Unknown command: {}", line.trim())?;
                writeln!(output, "{}", HELP_TEXT)?;
            }
            continue;
        };

        match command {
            ClientCommand::Place { index } => match session.handle_click(index) {
                Ok(_) => writeln!(output, "{}", render_board(session.state()))?,
                Err(e) => writeln!(output, "Ignored: {}", describe_illegal_move(e))?,
            },
            ClientCommand::Hint => {
                let state = session.state();
                if state.is_over() {
                    writeln!(output, "Game is over, r to restart")?;
                } else if let Some(index) = best_move_for(state.board(), state.active_player()) {
                    writeln!(output, "Hint: {}", index + 1)?;
                }
            }
            ClientCommand::ToggleMode => {
                session.set_mode(session.mode().toggled());
                writeln!(output, "Mode: {}", session.mode())?;
                writeln!(output, "{}", render_board(session.state()))?;
            }
            ClientCommand::Restart => {
                session.restart();
                log!("Game restarted");
                writeln!(output, "{}", render_board(session.state()))?;
            }
            ClientCommand::Quit => break,
        }
    }

    output.flush()?;
    log!("Game loop finished");
    Ok(())
}

fn describe_illegal_move(error: IllegalMove) -> String {
    match error {
        IllegalMove::OutOfRange(index) => format!("cell {} does not exist", index + 1),
        IllegalMove::Occupied(index) => format!("cell {} is already marked", index + 1),
        IllegalMove::GameOver => "game is over, r to restart".to_string(),
        IllegalMove::NotYourTurn(player) => format!("it is not player {}'s turn", player),
    }
}
