use std::process::ExitCode;

use env_logger::Env;
use game_of_life::{config::Config, game::Game};
use log::error;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut game = match Game::new(Config::default()) {
        Ok(game) => game,
        Err(err) => {
            error!("{err}");
            eprintln!("Failed to initialize: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = game.run() {
        error!("{err}");
        eprintln!("Game of Life stopped: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
