use common::tictactoe::CELL_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCommand {
    Place { index: usize },
    Hint,
    ToggleMode,
    Restart,
    Quit,
}

/// Cells are typed as 1-9, row-major from the top-left.
pub fn parse_command(line: &str) -> Option<ClientCommand> {
    let input = line.trim().to_ascii_lowercase();
    match input.as_str() {
        "h" | "hint" => Some(ClientCommand::Hint),
        "m" | "mode" => Some(ClientCommand::ToggleMode),
        "r" | "restart" => Some(ClientCommand::Restart),
        "q" | "quit" | "exit" => Some(ClientCommand::Quit),
        _ => {
            let key: usize = input.parse().ok()?;
            (1..=CELL_COUNT)
                .contains(&key)
                .then(|| ClientCommand::Place { index: key - 1 })
        }
    }
}

pub const HELP_TEXT: &str = "Commands: 1-9 place a mark, h hint, m toggle mode, r restart, q quit";
