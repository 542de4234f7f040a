use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::KeyEvent;
use tracing::info;

use crate::game::{Game, State};
use crate::input::{command_for, Command};
use crate::render::Surface;

/// Where the game draws and where key presses come from.
pub trait Console: Surface {
    /// Key presses that arrive within `timeout`. May return early, and may
    /// return nothing.
    fn read_keys(&mut self, timeout: Duration) -> Result<Vec<KeyEvent>>;
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    GameOver { score: u32 },
    Quit,
}

/// Runs ticks until the game ends or the player quits. The first tick is
/// immediate; each later one is due a full period after the previous
/// tick finished.
pub fn run<C: Console + ?Sized>(game: &mut Game, console: &mut C) -> Result<Outcome> {
    let period = game.config().tick_period;
    let mut next_tick = Instant::now();

    loop {
        let now = Instant::now();

        if now >= next_tick {
            game.update(console)?;
            if game.state() == State::Over {
                game.end(console)?;
                console.present()?;
                return Ok(Outcome::GameOver { score: game.score() });
            }
            console.present()?;
            next_tick = Instant::now() + period;
            continue;
        }

        for key in console.read_keys(next_tick - now)? {
            match command_for(&key) {
                Some(Command::Turn(direction)) => game.change_direction(direction),
                Some(Command::Quit) => {
                    info!(score = game.score(), "player quit");
                    return Ok(Outcome::Quit);
                }
                None => {}
            }
        }
    }
}
