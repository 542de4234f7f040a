/// Side of one grid cell, in playfield units.
pub const CELL_SIZE: i32 = 20;
pub const PLAYFIELD_WIDTH: i32 = 800;
pub const PLAYFIELD_HEIGHT: i32 = 600;

/// A position on the playfield. Game code only ever builds grid-aligned points.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    pub fn offset(self, delta: Point) -> Point {
        Point::new(self.x + delta.x, self.y + delta.y)
    }

    #[cfg(test)]
    pub fn is_aligned(self, cell: i32) -> bool {
        self.x % cell == 0 && self.y % cell == 0
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The one-cell step taken when moving this way.
    pub fn delta(self, cell: i32) -> Point {
        match self {
            Direction::Up => Point::new(0, -cell),
            Direction::Down => Point::new(0, cell),
            Direction::Left => Point::new(-cell, 0),
            Direction::Right => Point::new(cell, 0),
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    pub fn is_perpendicular_to(self, other: Direction) -> bool {
        self.is_horizontal() != other.is_horizontal()
    }
}
