//! Blinking background stars.

use crate::error::TaskError;
use crate::rng::SimpleRng;
use crate::scheduler::{Countdown, Step, Task, TaskContext};
use crate::types::{Bounds, Emphasis, BORDER_WIDTH};

pub const STAR_SYMBOLS: [char; 4] = ['+', '*', '.', ':'];

const NORMAL_TICKS: u32 = 3;
const BOLD_TICKS: u32 = 5;

/// dim → normal → bold → normal, repeated forever.
#[derive(Debug, Clone)]
pub struct Star {
    row: i32,
    column: i32,
    symbol: char,
    dim_ticks: u32,
    phase: usize,
    wait: Countdown,
}

impl Star {
    /// `dim_ticks` is how long the star stays dim on each cycle; it staggers the field.
    pub fn new(row: i32, column: i32, symbol: char, dim_ticks: u32) -> Self {
        Self {
            row,
            column,
            symbol,
            dim_ticks,
            phase: 0,
            wait: Countdown::default(),
        }
    }

    pub fn position(&self) -> (i32, i32) {
        (self.row, self.column)
    }
}

impl Task for Star {
    fn name(&self) -> &'static str {
        "star"
    }

    fn step(&mut self, ctx: &mut TaskContext<'_>) -> Result<Step, TaskError> {
        if !self.wait.tick() {
            return Ok(Step::Running);
        }

        let (emphasis, ticks) = match self.phase {
            0 => (Emphasis::Dim, self.dim_ticks),
            1 => (Emphasis::Normal, NORMAL_TICKS),
            2 => (Emphasis::Bold, BOLD_TICKS),
            _ => (Emphasis::Normal, NORMAL_TICKS),
        };
        ctx.canvas.put_char(self.row, self.column, self.symbol, emphasis);
        self.wait = Countdown::new(ticks);
        self.phase = (self.phase + 1) % 4;
        Ok(Step::Running)
    }
}

/// Scatter `amount` stars over the sky, above the year window.
pub fn generate_stars(rng: &mut SimpleRng, bounds: Bounds, amount: usize) -> Vec<Star> {
    let max_row = bounds.window_row() - 1;
    let max_column = bounds.columns - BORDER_WIDTH * 2;
    (0..amount)
        .map(|_| {
            let row = rng.range_inclusive(BORDER_WIDTH, max_row);
            let column = rng.range_inclusive(BORDER_WIDTH, max_column);
            let dim_ticks = rng.range_inclusive(10, 30) as u32;
            let symbol = *rng.choose(&STAR_SYMBOLS).unwrap_or(&'*');
            Star::new(row, column, symbol, dim_ticks)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_stay_inside_the_sky() {
        let mut rng = SimpleRng::new(3);
        let bounds = Bounds::new(24, 80);
        let stars = generate_stars(&mut rng, bounds, 500);
        assert_eq!(stars.len(), 500);
        for s in &stars {
            let (row, column) = s.position();
            assert!(row >= 1 && row < bounds.window_row());
            assert!(column >= 1 && column < bounds.columns - 1);
            assert!(STAR_SYMBOLS.contains(&s.symbol));
            assert!((10..=30).contains(&s.dim_ticks));
        }
    }
}
