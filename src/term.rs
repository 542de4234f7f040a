use std::io::{stdout, Stdout, Write};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use crossterm::event::{poll, read, Event, KeyEvent};
use crossterm::style::{self, Attribute, Color};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, terminal};
use tracing::warn;

use crate::config::GameConfig;
use crate::driver::Console;
use crate::render::Surface;

pub type Coords = (u16, u16);

const CELL_CHAR: char = '█';
const COLUMNS_PER_CELL: i32 = 2;
const BOLD_FONT_SIZE: u16 = 30;

/// Maps playfield units onto terminal character cells inside the border.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    origin: Coords,
    cell: i32,
    cols: i32,
    rows: i32,
}

impl Viewport {
    pub fn new(config: &GameConfig) -> Self {
        let (cells_x, cells_y) = config.cells();
        Viewport { origin: (1, 1), cell: config.cell_size, cols: cells_x * COLUMNS_PER_CELL, rows: cells_y }
    }

    /// Terminal size needed to show the playfield and its border.
    pub fn required_size(&self) -> Coords {
        ((self.cols + 2) as u16, (self.rows + 2) as u16)
    }

    pub fn column(&self, x: i32) -> i32 {
        x.div_euclid(self.cell) * COLUMNS_PER_CELL
    }

    pub fn row(&self, y: i32) -> i32 {
        y.div_euclid(self.cell)
    }

    /// Row holding text whose baseline sits at `y`.
    pub fn text_row(&self, y: i32) -> i32 {
        (y - 1).div_euclid(self.cell).max(0)
    }

    /// Screen position of a playfield column/row, or `None` when clipped.
    pub fn to_screen(&self, col: i32, row: i32) -> Option<Coords> {
        if col < 0 || col >= self.cols || row < 0 || row >= self.rows {
            return None;
        }
        Some((self.origin.0 + col as u16, self.origin.1 + row as u16))
    }

    /// Every on-screen cell covered by a rectangle in playfield units.
    pub fn cover(&self, x: i32, y: i32, width: i32, height: i32) -> Vec<Coords> {
        if width <= 0 || height <= 0 {
            return vec![];
        }

        let (col_start, col_end) = (self.column(x), self.column(x + width - 1) + COLUMNS_PER_CELL);
        let (row_start, row_end) = (self.row(y), self.row(y + height - 1) + 1);

        (row_start..row_end)
            .flat_map(|row| (col_start..col_end).map(move |col| (col, row)))
            .filter_map(|(col, row)| self.to_screen(col, row))
            .collect()
    }
}

/// Runs `undo` when `result` failed, keeping the original error.
fn undo_on_error<T, F>(result: Result<T>, undo: F) -> Result<T>
where
    F: FnOnce() -> Result<()>,
{
    if result.is_err() {
        if let Err(e) = undo() {
            warn!("cleanup after failed setup also failed: {:#}", e);
        }
    }
    result
}

pub struct TermManager {
    stdout: Stdout,
    viewport: Viewport,
}

impl TermManager {
    pub fn new(config: &GameConfig) -> Self {
        TermManager { stdout: stdout(), viewport: Viewport::new(config) }
    }

    pub fn setup(&mut self) -> Result<()> {
        let (width, height) = terminal::size().context("Error reading terminal size")?;
        let (need_w, need_h) = self.viewport.required_size();
        if width < need_w || height < need_h {
            bail!("terminal is {}x{}, the playfield needs at least {}x{}", width, height, need_w, need_h);
        }

        let entered = self.enter();
        undo_on_error(entered, || self.restore())
    }

    fn enter(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen).context("Error entering alt screen")?;
        terminal::enable_raw_mode().context("Error enabling raw mode")?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking).context("Error hiding cursor")?;
        execute!(self.stdout, terminal::Clear(ClearType::All)).context("Error clearing")?;

        self.draw_borders()
    }

    pub fn restore(&mut self) -> Result<()> {
        terminal::disable_raw_mode().context("Error disabling raw mode")?;
        execute!(self.stdout, style::ResetColor, cursor::Show, cursor::EnableBlinking)
            .context("Error showing cursor")?;
        execute!(self.stdout, LeaveAlternateScreen).context("Error leaving alt screen")?;
        Ok(())
    }

    pub fn read_key_blocking(&self) -> Result<KeyEvent> {
        loop {
            if let Event::Key(ev) = read().context("Error reading key")? {
                return Ok(ev);
            }
        }
    }

    /// Waits up to `timeout` for the first event, then drains whatever else is queued.
    pub fn read_key_events(&self, timeout: Duration) -> Result<Vec<KeyEvent>> {
        let mut events = vec![];
        let mut wait = timeout;

        while poll(wait).context("Error polling events")? {
            if let Event::Key(ev) = read().context("Error reading key")? {
                events.push(ev);
            }
            wait = Duration::from_millis(0);
        }

        Ok(events)
    }

    fn draw_borders(&mut self) -> Result<()> {
        let (width, height) = self.viewport.required_size();
        let (end_x, end_y) = (width - 1, height - 1);

        for x in 0..width {
            let ch = if x == 0 || x == end_x { '+' } else { '-' };
            self.print_at((x, 0), ch, Color::Reset)?;
            self.print_at((x, end_y), ch, Color::Reset)?;
        }

        for y in 1..end_y {
            self.print_at((0, y), '|', Color::Reset)?;
            self.print_at((end_x, y), '|', Color::Reset)?;
        }

        self.flush()
    }

    fn print_at(&mut self, pos: Coords, ch: char, color: Color) -> Result<()> {
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::SetForegroundColor(color), style::Print(ch))?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.flush().context("Error flushing")
    }
}

impl Surface for TermManager {
    fn clear_rect(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result<()> {
        for pos in self.viewport.cover(x, y, width, height) {
            self.print_at(pos, ' ', Color::Reset)?;
        }
        Ok(())
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) -> Result<()> {
        for pos in self.viewport.cover(x, y, width, height) {
            self.print_at(pos, CELL_CHAR, color)?;
        }
        Ok(())
    }

    fn fill_text(&mut self, text: &str, font_size: u16, x: i32, y: i32, color: Color) -> Result<()> {
        let (col, row) = (self.viewport.column(x), self.viewport.text_row(y));

        if font_size >= BOLD_FONT_SIZE {
            queue!(self.stdout, style::SetAttribute(Attribute::Bold))?;
        }
        for (i, ch) in text.chars().enumerate() {
            if let Some(pos) = self.viewport.to_screen(col + i as i32, row) {
                self.print_at(pos, ch, color)?;
            }
        }
        queue!(self.stdout, style::SetAttribute(Attribute::Reset))?;
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.flush()
    }
}

impl Console for TermManager {
    fn read_keys(&mut self, timeout: Duration) -> Result<Vec<KeyEvent>> {
        self.read_key_events(timeout)
    }
}
