mod config;
mod driver;
mod food;
mod game;
mod grid;
mod input;
mod render;
mod snake;
mod term;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::GameConfig;
use crate::driver::Outcome;
use crate::game::Game;
use crate::term::TermManager;

fn main() -> Result<()> {
    // Diagnostics go to stderr; the playfield owns stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config = GameConfig::default();
    let mut term = TermManager::new(&config);
    term.setup()?;

    // Put the terminal back before reporting anything that went wrong.
    let result = play(&mut term, config);
    term.restore()?;

    let outcome = result?;
    info!(?outcome, "finished");
    Ok(())
}

fn play(term: &mut TermManager, config: GameConfig) -> Result<Outcome> {
    let mut game = Game::new(config);
    let outcome = driver::run(&mut game, term)?;
    info!(
        score = game.score(),
        length = game.snake().len(),
        food = ?game.food().position(),
        "game ended"
    );

    // Restarting means launching the game again, so any key just leaves.
    if let Outcome::GameOver { .. } = outcome {
        term.read_key_blocking()?;
    }

    Ok(outcome)
}
