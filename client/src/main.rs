mod command;
mod config;
mod game_ui;
mod offline;

use clap::Parser;
use common::config::Validate;
use common::tictactoe::GameMode;
use common::{log, logger};
use std::path::PathBuf;
use tokio::io::BufReader;

use config::{Config, ConfigManager, get_config_manager};
use offline::run_tictactoe_game;

#[derive(Parser)]
#[command(name = "tictactoe", about = "Tic-tac-toe against a friend or an unbeatable AI")]
struct Args {
    /// Both sides are played from the keyboard
    #[arg(long)]
    two_player: bool,

    /// Pause before the AI answers, in milliseconds
    #[arg(long)]
    ai_delay_ms: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,

    /// YAML config file, defaults to one next to the executable
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Args {
    fn apply(&self, mut config: Config) -> Config {
        if self.two_player {
            config.mode = GameMode::TwoPlayer;
        }
        if let Some(ai_delay_ms) = self.ai_delay_ms {
            config.ai_delay_ms = ai_delay_ms;
        }
        config.use_log_prefix |= self.use_log_prefix;
        config
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = match &args.config {
        Some(path) => ConfigManager::from_yaml_file(path.clone()),
        None => get_config_manager(),
    };
    let (config, config_error) = match config_manager.get_config() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    let config = args.apply(config);

    let prefix = config.use_log_prefix.then(|| "Client".to_string());
    logger::init_logger(prefix);

    if let Some(e) = config_error {
        log!("Falling back to default config: {}", e);
    }
    config.validate()?;

    run_tictactoe_game(
        BufReader::new(tokio::io::stdin()),
        &mut std::io::stdout(),
        config.mode,
        config.ai_delay(),
    )
    .await?;

    Ok(())
}
