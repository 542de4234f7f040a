use anyhow::Result;
use crossterm::style::Color;
use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::food::Food;
use crate::grid::Direction;
use crate::render::Surface;
use crate::snake::Snake;

const TEXT_COLOR: Color = Color::Reset;
const SCORE_FONT: u16 = 20;
const TITLE_FONT: u16 = 40;

const GAME_OVER_TEXT: &str = "Game Over";
const RESTART_TEXT: &str = "Press any key to exit";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum State {
    Running,
    Over,
}

pub struct Game {
    config: GameConfig,
    snake: Snake,
    food: Food,
    score: u32,
    state: State,
    rng: StdRng,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    pub fn with_rng(config: GameConfig, mut rng: StdRng) -> Self {
        let snake = Snake::new(&config);
        let food = Food::new(&config, &mut rng);
        Game { config, snake, food, score: 0, state: State::Running, rng }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn change_direction(&mut self, requested: Direction) {
        self.snake.change_direction(requested);
    }

    /// Advances one tick. The frame is only redrawn when the snake survives
    /// the move; once over, further calls do nothing.
    pub fn update<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<State> {
        if self.state == State::Over {
            return Ok(State::Over);
        }

        // Growth is armed before the move so the tick that reaches the food
        // is also the tick that keeps the tail. When the food sits on the
        // tail cell being vacated, keeping the tail would kill the snake, so
        // growth waits for the following move.
        let next_head = self.snake.next_head();
        let eats = next_head == self.food.position();
        let grow_now = eats && next_head != self.snake.tail();
        if grow_now {
            self.snake.grow();
        }

        let step = self.snake.move_step();
        debug!(head = ?step.new_head, heading = ?self.snake.heading(), freed = ?step.old_tail, "tick");

        if self.snake.check_collision(self.config.width, self.config.height) {
            self.state = State::Over;
            info!(score = self.score, head = ?step.new_head, "game over");
            return Ok(State::Over);
        }

        if eats {
            if !grow_now {
                self.snake.grow();
            }
            self.score += self.config.food_reward;
            self.food.randomize(&self.config, &mut self.rng);
            info!(score = self.score, next_food = ?self.food.position(), "food eaten");
        }

        self.draw(surface)?;
        Ok(State::Running)
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<()> {
        surface.clear_rect(0, 0, self.config.width, self.config.height)?;

        self.snake.draw(surface)?;
        self.food.draw(surface)?;
        self.draw_score(surface)
    }

    /// The end screen, drawn over whatever the last frame left behind.
    pub fn end<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<()> {
        let (mid_x, mid_y) = (self.config.width / 2, self.config.height / 2);

        surface.fill_text(GAME_OVER_TEXT, TITLE_FONT, mid_x - 100, mid_y, TEXT_COLOR)?;
        surface.fill_text(RESTART_TEXT, SCORE_FONT, mid_x - 90, mid_y + 30, TEXT_COLOR)
    }

    fn draw_score<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<()> {
        let text = format!("Score: {}", self.score);
        surface.fill_text(&text, SCORE_FONT, 10, 20, TEXT_COLOR)
    }

    #[cfg(test)]
    pub fn food_mut(&mut self) -> &mut Food {
        &mut self.food
    }

    #[cfg(test)]
    pub fn snake_mut(&mut self) -> &mut Snake {
        &mut self.snake
    }
}
