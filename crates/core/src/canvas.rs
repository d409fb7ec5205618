//! Canvas contract between the simulation and whatever shows the glyphs.
//!
//! Implementors only provide cell writes; the frame drawing rules (rounding,
//! transparency, clipping) live here so every backend behaves the same.

use crate::types::{Bounds, Emphasis};

/// Whether a frame is painted or wiped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawMode {
    Draw,
    /// Write spaces over exactly the cells `Draw` would have written.
    Erase,
}

/// A character grid the tasks draw on.
///
/// Writes outside [`Canvas::bounds`] must be silently ignored.
pub trait Canvas {
    fn bounds(&self) -> Bounds;

    fn put_char(&mut self, row: i32, column: i32, ch: char, emphasis: Emphasis);

    /// Audible alert. Backends without sound ignore it.
    fn beep(&mut self) {}

    fn put_str(&mut self, row: i32, column: i32, text: &str, emphasis: Emphasis) {
        for (dx, ch) in text.chars().enumerate() {
            self.put_char(row, column + dx as i32, ch, emphasis);
        }
    }

    /// Draw a multi-line frame with its top-left corner at `(row, column)`.
    ///
    /// Spaces in the frame are transparent. The bottom-right cell of the canvas
    /// is never written (terminals scroll when it is).
    fn draw_frame(&mut self, row: f64, column: f64, frame: &Frame, mode: DrawMode) {
        let bounds = self.bounds();
        let start_row = row.round() as i32;
        let start_column = column.round() as i32;

        for (dy, line) in frame.lines().enumerate() {
            let r = start_row + dy as i32;
            if r < 0 {
                continue;
            }
            if r >= bounds.rows {
                break;
            }
            for (dx, symbol) in line.chars().enumerate() {
                let c = start_column + dx as i32;
                if c < 0 {
                    continue;
                }
                if c >= bounds.columns {
                    break;
                }
                if symbol == ' ' {
                    continue;
                }
                if r == bounds.rows - 1 && c == bounds.columns - 1 {
                    continue;
                }
                let ch = match mode {
                    DrawMode::Draw => symbol,
                    DrawMode::Erase => ' ',
                };
                self.put_char(r, c, ch, Emphasis::Normal);
            }
        }
    }

    /// Single-line box outline, clipped to the canvas.
    fn draw_box(&mut self, row: i32, column: i32, rows: i32, columns: i32) {
        if rows < 2 || columns < 2 {
            return;
        }
        let bottom = row + rows - 1;
        let right = column + columns - 1;
        for c in column + 1..right {
            self.put_char(row, c, '─', Emphasis::Normal);
            self.put_char(bottom, c, '─', Emphasis::Normal);
        }
        for r in row + 1..bottom {
            self.put_char(r, column, '│', Emphasis::Normal);
            self.put_char(r, right, '│', Emphasis::Normal);
        }
        self.put_char(row, column, '┌', Emphasis::Normal);
        self.put_char(row, right, '┐', Emphasis::Normal);
        self.put_char(bottom, column, '└', Emphasis::Normal);
        self.put_char(bottom, right, '┘', Emphasis::Normal);
    }

    /// Outline the whole canvas.
    fn border(&mut self) {
        let b = self.bounds();
        self.draw_box(0, 0, b.rows, b.columns);
    }
}

/// A named block of glyphs with its size precomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    text: String,
    rows: usize,
    columns: usize,
}

impl Frame {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let rows = text.lines().count();
        let columns = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
        Self {
            text,
            rows,
            columns,
        }
    }

    pub fn lines(&self) -> std::str::Lines<'_> {
        self.text.lines()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.columns == 0
    }
}
