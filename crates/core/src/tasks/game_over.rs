//! End-of-game banner.

use crate::canvas::{DrawMode, Frame};
use crate::error::TaskError;
use crate::scheduler::{Step, Task, TaskContext};

pub const GAME_OVER_BANNER: &str = r"   _____                         ____
  / ____|                       / __ \
 | |  __  __ _ _ __ ___   ___  | |  | |_   _____ _ __
 | | |_ |/ _` | '_ ` _ \ / _ \ | |  | \ \ / / _ \ '__|
 | |__| | (_| | | | | | |  __/ | |__| |\ V /  __/ |
  \_____|\__,_|_| |_| |_|\___|  \____/  \_/ \___|_|";

/// Redraws the banner in the middle of the canvas on every tick, forever.
#[derive(Debug, Clone)]
pub struct GameOver {
    banner: Frame,
}

impl GameOver {
    pub fn new() -> Self {
        Self {
            banner: Frame::new(GAME_OVER_BANNER),
        }
    }
}

impl Default for GameOver {
    fn default() -> Self {
        Self::new()
    }
}

impl Task for GameOver {
    fn name(&self) -> &'static str {
        "game_over"
    }

    fn step(&mut self, ctx: &mut TaskContext<'_>) -> Result<Step, TaskError> {
        let bounds = ctx.world.bounds;
        let row = bounds.rows / 2 - self.banner.rows() as i32 / 2;
        let column = bounds.columns / 2 - self.banner.columns() as i32 / 2;
        ctx.canvas.draw_frame(f64::from(row), f64::from(column), &self.banner, DrawMode::Draw);
        Ok(Step::Running)
    }
}
