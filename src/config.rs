use std::time::Duration;

use crate::grid::{CELL_SIZE, PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};

const TICK_PERIOD_MS: u64 = 200;
const FOOD_REWARD: u32 = 10;

/// Fixed game parameters. The defaults are the only values the game ships with.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub cell_size: i32,
    pub width: i32,
    pub height: i32,
    pub tick_period: Duration,
    pub food_reward: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            cell_size: CELL_SIZE,
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
            tick_period: Duration::from_millis(TICK_PERIOD_MS),
            food_reward: FOOD_REWARD,
        }
    }
}

impl GameConfig {
    /// Playfield size in whole cells, (columns, rows).
    pub fn cells(&self) -> (i32, i32) {
        (self.width / self.cell_size, self.height / self.cell_size)
    }
}
