//! Explosion animation.

use crate::canvas::{DrawMode, Frame};
use crate::error::TaskError;
use crate::scheduler::{Step, Task, TaskContext};

pub const EXPLOSION_FRAMES: [&str; 4] = [
    "    (_)\n(  (   (  (\n() (  (  )\n( )  ()",
    "    (_)\n(  (   (\n    (  (  )\n    )  (",
    "    (\n    (   (\n    (     (\n    )  (",
    "    (\n        (\n    (",
];

/// Each frame is shown for one tick and wiped on the next.
#[derive(Debug, Clone)]
pub struct Explosion {
    row: f64,
    column: f64,
    frames: Vec<Frame>,
    cursor: usize,
}

impl Explosion {
    pub fn new(center_row: f64, center_column: f64) -> Self {
        let frames: Vec<Frame> = EXPLOSION_FRAMES.iter().map(|f| Frame::new(*f)).collect();
        let (rows, columns) = (frames[0].rows() as f64, frames[0].columns() as f64);
        Self {
            row: center_row - rows / 2.0,
            column: center_column - columns / 2.0,
            frames,
            cursor: 0,
        }
    }

    pub fn corner(&self) -> (f64, f64) {
        (self.row, self.column)
    }
}

impl Task for Explosion {
    fn name(&self) -> &'static str {
        "explosion"
    }

    fn step(&mut self, ctx: &mut TaskContext<'_>) -> Result<Step, TaskError> {
        let Some(frame) = self.frames.get(self.cursor / 2) else {
            return Ok(Step::Completed);
        };
        if self.cursor == 0 {
            ctx.canvas.beep();
        }
        let mode = if self.cursor % 2 == 0 {
            DrawMode::Draw
        } else {
            DrawMode::Erase
        };
        ctx.canvas.draw_frame(self.row, self.column, frame, mode);
        self.cursor += 1;
        Ok(Step::Running)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::testing::{step, world, Grid};
    use crate::types::{Bounds, ControlInput};

    #[test]
    fn centred_on_the_wreck() {
        // First frame is 4 rows by 11 columns.
        assert_eq!(Explosion::new(10.0, 20.0).corner(), (8.0, 14.5));
    }

    #[test]
    fn plays_four_frames_then_ends() {
        let bounds = Bounds::new(20, 40);
        let mut explosion = Explosion::new(10.0, 20.0);
        let mut w = world(bounds, 1957);
        let mut g = Grid::new(bounds);

        let mut running = 0;
        while step(&mut explosion, &mut w, &mut g, ControlInput::default()).0 == Step::Running {
            running += 1;
            assert!(running <= 8);
        }
        assert_eq!(running, 8);
        assert_eq!(g.beeps, 1);
        assert!(g.inked().is_empty());
    }
}
