//! The timeline: a task that moves the clock and the window that shows it.

use crate::error::TaskError;
use crate::scheduler::{Countdown, Step, Task, TaskContext};
use crate::types::{Emphasis, BORDER_WIDTH};

const TEXT_OFFSET: usize = 2;

/// Advances the clock by one year every `ticks_per_year` ticks. Never completes.
#[derive(Debug, Clone)]
pub struct YearCounter {
    ticks_per_year: u32,
    wait: Countdown,
}

impl YearCounter {
    pub fn new(ticks_per_year: u32) -> Self {
        let ticks_per_year = ticks_per_year.max(1);
        Self {
            ticks_per_year,
            wait: Countdown::new(ticks_per_year),
        }
    }
}

impl Task for YearCounter {
    fn name(&self) -> &'static str {
        "year_counter"
    }

    fn step(&mut self, ctx: &mut TaskContext<'_>) -> Result<Step, TaskError> {
        if !self.wait.tick() {
            return Ok(Step::Running);
        }
        self.wait = Countdown::new(self.ticks_per_year);

        let year = ctx.world.clock.advance();
        if let Some(phrase) = ctx.world.curve.phrase_for(year) {
            log::info!("{}: {}", year, phrase);
        }
        if year == ctx.world.curve.weapon_after_year().saturating_add(1) {
            log::info!("weapon unlocked in {}", year);
        }
        Ok(Step::Running)
    }
}

/// Bottom band with the current year and the latest phrase.
///
/// Phrases are looked up by exact year; years without one keep the last
/// phrase on screen.
#[derive(Debug, Clone, Default)]
pub struct YearWindow {
    phrase: String,
}

impl YearWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// Text line for `year`, padded or cut to `width`.
    pub fn compose(&self, year: u32, width: usize) -> String {
        let text = format!("{:offset$}{}: {}", "", year, self.phrase, offset = TEXT_OFFSET);
        format!("{:<width$.width$}", text, width = width)
    }
}

impl Task for YearWindow {
    fn name(&self) -> &'static str {
        "year_window"
    }

    fn step(&mut self, ctx: &mut TaskContext<'_>) -> Result<Step, TaskError> {
        let year = ctx.year();
        if let Some(phrase) = ctx.world.curve.phrase_for(year) {
            if phrase != self.phrase {
                self.phrase = phrase.to_string();
            }
        }

        let bounds = ctx.world.bounds;
        let start_row = bounds.window_row();
        let width = (bounds.columns - BORDER_WIDTH * 2).max(0) as usize;
        let text = self.compose(year, width);

        ctx.canvas.draw_box(start_row, 0, bounds.rows - start_row, bounds.columns);
        ctx.canvas.put_str(start_row + 1, BORDER_WIDTH, &text, Emphasis::Normal);
        Ok(Step::Running)
    }
}
