use anyhow::Result;
use crossterm::style::Color;

/// The drawing operations the game needs from whatever it renders onto.
///
/// Coordinates and sizes are in playfield units. Text is positioned by its
/// baseline, so `y` is the bottom edge of the glyphs.
pub trait Surface {
    fn clear_rect(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result<()>;

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) -> Result<()>;

    fn fill_text(&mut self, text: &str, font_size: u16, x: i32, y: i32, color: Color) -> Result<()>;

    /// Push everything drawn so far to the screen.
    fn present(&mut self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
pub mod recording {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Op {
        Clear { x: i32, y: i32, width: i32, height: i32 },
        Rect { x: i32, y: i32, width: i32, height: i32, color: Color },
        Text { text: String, font_size: u16, x: i32, y: i32 },
        Present,
    }

    /// Surface that remembers every call, for asserting on what got drawn.
    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub ops: Vec<Op>,
    }

    impl RecordingSurface {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn texts(&self) -> Vec<&str> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Text { text, .. } => Some(text.as_str()),
                    _ => None,
                })
                .collect()
        }

        pub fn rects(&self, color: Color) -> usize {
            self.ops
                .iter()
                .filter(|op| matches!(op, Op::Rect { color: c, .. } if *c == color))
                .count()
        }

        pub fn clears(&self) -> usize {
            self.ops.iter().filter(|op| matches!(op, Op::Clear { .. })).count()
        }
    }

    impl Surface for RecordingSurface {
        fn clear_rect(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result<()> {
            self.ops.push(Op::Clear { x, y, width, height });
            Ok(())
        }

        fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) -> Result<()> {
            self.ops.push(Op::Rect { x, y, width, height, color });
            Ok(())
        }

        fn fill_text(&mut self, text: &str, font_size: u16, x: i32, y: i32, _color: Color) -> Result<()> {
            self.ops.push(Op::Text { text: text.to_string(), font_size, x, y });
            Ok(())
        }

        fn present(&mut self) -> Result<()> {
            self.ops.push(Op::Present);
            Ok(())
        }
    }
}
