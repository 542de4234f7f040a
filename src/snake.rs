use std::collections::VecDeque;

use anyhow::Result;
use crossterm::style::Color;
use tracing::trace;

use crate::config::GameConfig;
use crate::grid::{Direction, Point};
use crate::render::Surface;

const INITIAL_BODY: [Point; 3] = [Point::new(160, 300), Point::new(140, 300), Point::new(120, 300)];
const INITIAL_HEADING: Direction = Direction::Right;

const SNAKE_COLOR: Color = Color::Green;

/// What a single move changed.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub new_head: Point,
    pub old_tail: Option<Point>,
}

pub struct Snake {
    // Head first, tail last. Never empty.
    body: VecDeque<Point>,
    heading: Direction,
    cell: i32,
    grow_next_move: bool,
}

impl Snake {
    pub fn new(config: &GameConfig) -> Self {
        Snake {
            body: INITIAL_BODY.iter().copied().collect(),
            heading: INITIAL_HEADING,
            cell: config.cell_size,
            grow_next_move: false,
        }
    }

    #[cfg(test)]
    pub fn from_body(body: Vec<Point>, heading: Direction, cell: i32) -> Self {
        assert!(!body.is_empty(), "a snake needs at least one segment");
        Snake { body: body.into(), heading, cell, grow_next_move: false }
    }

    pub fn body(&self) -> impl Iterator<Item = &Point> + '_ {
        self.body.iter()
    }

    pub fn head(&self) -> Point {
        self.body[0]
    }

    pub fn tail(&self) -> Point {
        self.body[self.body.len() - 1]
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Where the head lands on the next move.
    pub fn next_head(&self) -> Point {
        self.head().offset(self.heading.delta(self.cell))
    }

    pub fn move_step(&mut self) -> Step {
        let new_head = self.next_head();
        self.body.push_front(new_head);

        if self.grow_next_move {
            self.grow_next_move = false;
            Step { new_head, old_tail: None }
        } else {
            Step { new_head, old_tail: self.body.pop_back() }
        }
    }

    /// Turns only onto the other axis. Same-axis requests, reversals
    /// included, leave the heading alone.
    pub fn change_direction(&mut self, requested: Direction) {
        if requested.is_perpendicular_to(self.heading) {
            self.heading = requested;
        } else {
            trace!(?requested, heading = ?self.heading, "ignored same-axis turn");
        }
    }

    pub fn check_collision(&self, width: i32, height: i32) -> bool {
        let head = self.head();

        if head.x < 0 || head.x >= width || head.y < 0 || head.y >= height {
            return true;
        }

        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    pub fn grow(&mut self) {
        self.grow_next_move = true;
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<()> {
        for segment in self.body() {
            surface.fill_rect(segment.x, segment.y, self.cell, self.cell, SNAKE_COLOR)?;
        }
        Ok(())
    }
}
