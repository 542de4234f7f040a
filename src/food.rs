use anyhow::Result;
use crossterm::style::Color;
use rand::Rng;

use crate::config::GameConfig;
use crate::grid::Point;
use crate::render::Surface;

const FOOD_COLOR: Color = Color::Red;

pub struct Food {
    position: Point,
    cell: i32,
}

impl Food {
    pub fn new<R: Rng>(config: &GameConfig, rng: &mut R) -> Self {
        let mut food = Food { position: Point::new(0, 0), cell: config.cell_size };
        food.randomize(config, rng);
        food
    }

    pub fn position(&self) -> Point {
        self.position
    }

    #[cfg(test)]
    pub fn place(&mut self, position: Point) {
        self.position = position;
    }

    /// Moves to a uniformly random cell of the playfield. Cells under the
    /// snake are not excluded.
    pub fn randomize<R: Rng>(&mut self, config: &GameConfig, rng: &mut R) {
        let (cols, rows) = config.cells();
        self.position = Point::new(
            rng.gen_range(0..cols) * config.cell_size,
            rng.gen_range(0..rows) * config.cell_size,
        );
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<()> {
        surface.fill_rect(self.position.x, self.position.y, self.cell, self.cell, FOOD_COLOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Direction;
    use crate::render::recording::{Op, RecordingSurface};
    use crate::snake::Snake;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_randomize_stays_on_grid() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        let mut food = Food::new(&config, &mut rng);

        for _ in 0..2000 {
            food.randomize(&config, &mut rng);
            let p = food.position();
            assert!(p.x >= 0 && p.x < config.width, "x out of range: {:?}", p);
            assert!(p.y >= 0 && p.y < config.height, "y out of range: {:?}", p);
            assert!(p.is_aligned(config.cell_size), "not aligned: {:?}", p);
        }
    }

    #[test]
    fn test_randomize_reaches_far_cells() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(11);
        let mut food = Food::new(&config, &mut rng);
        let (mut max_x, mut max_y) = (0, 0);

        for _ in 0..5000 {
            food.randomize(&config, &mut rng);
            max_x = max_x.max(food.position().x);
            max_y = max_y.max(food.position().y);
        }

        assert_eq!(max_x, 780);
        assert_eq!(max_y, 580);
    }

    // Known limitation: spawning does not look at the snake, so food can land on it.
    #[test]
    fn test_food_can_spawn_under_snake() {
        let config = GameConfig { width: 20, height: 20, ..GameConfig::default() };
        let snake = Snake::from_body(vec![Point::new(0, 0)], Direction::Right, config.cell_size);
        let mut rng = StdRng::seed_from_u64(3);

        let food = Food::new(&config, &mut rng);
        assert_eq!(food.position(), snake.head());
    }

    #[test]
    fn test_draw_single_cell() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut food = Food::new(&config, &mut rng);
        food.place(Point::new(40, 60));

        let mut surface = RecordingSurface::new();
        food.draw(&mut surface).unwrap();
        assert_eq!(
            surface.ops,
            vec![Op::Rect { x: 40, y: 60, width: 20, height: 20, color: FOOD_COLOR }]
        );
    }
}
