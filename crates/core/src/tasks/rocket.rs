//! The player's rocket.

use std::rc::Rc;

use crate::canvas::{DrawMode, Frame};
use crate::collision::Rect;
use crate::error::{AssetError, TaskError};
use crate::physics::SpeedRule;
use crate::scheduler::{Step, Task, TaskContext};
use crate::tasks::{GameOver, Projectile};
use crate::types::{Bounds, BORDER_WIDTH, ROCKET_FIRE_ROW_SIZE};

/// Playable area for the rocket's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits {
    pub min_row: f64,
    pub min_column: f64,
    pub max_row: f64,
    pub max_column: f64,
}

impl Limits {
    /// Inside the border and above the year window, leaving room for the sprite.
    pub fn for_sprite(bounds: Bounds, rows: usize, columns: usize) -> Self {
        Self {
            min_row: f64::from(BORDER_WIDTH),
            min_column: f64::from(BORDER_WIDTH),
            max_row: f64::from(bounds.window_row()) - rows as f64,
            max_column: f64::from(bounds.columns - BORDER_WIDTH) - columns as f64,
        }
    }

    fn clamp(&self, row: f64, column: f64) -> (f64, f64) {
        (
            row.max(self.min_row).min(self.max_row),
            column.max(self.min_column).min(self.max_column),
        )
    }
}

/// Reads the controls, moves and draws the rocket, fires when the year allows.
///
/// Every step starts with a collision check of the hull (the sprite minus
/// its exhaust rows). A hit marks the obstacle, raises [`GameOver`] and ends
/// the task.
pub struct RocketController {
    /// Animation cycle: each sprite is shown for two ticks.
    frames: [Rc<Frame>; 4],
    frame_index: usize,
    rows: usize,
    columns: usize,
    row: f64,
    column: f64,
    speed: (f64, f64),
    limits: Limits,
    rule: Box<dyn SpeedRule>,
    projectile_speed: f64,
    drawn: Option<(f64, f64, usize)>,
}

impl RocketController {
    /// Place the rocket in the middle of the canvas.
    pub fn new(
        sprites: &[Rc<Frame>],
        bounds: Bounds,
        rule: Box<dyn SpeedRule>,
        projectile_speed: f64,
    ) -> Result<Self, AssetError> {
        let (first, second) = match sprites {
            [first, second, ..] => (first, second),
            [only] => (only, only),
            [] => return Err(AssetError::MissingFrame("rocket_frame_1".to_string())),
        };
        let frames = [
            Rc::clone(first),
            Rc::clone(first),
            Rc::clone(second),
            Rc::clone(second),
        ];
        let rows = frames.iter().map(|f| f.rows()).max().unwrap_or(0);
        let columns = frames.iter().map(|f| f.columns()).max().unwrap_or(0);

        Ok(Self {
            frames,
            frame_index: 0,
            rows,
            columns,
            row: f64::from(bounds.rows) / 2.0,
            column: f64::from(bounds.columns) / 2.0,
            speed: (0.0, 0.0),
            limits: Limits::for_sprite(bounds, rows, columns),
            rule,
            projectile_speed,
            drawn: None,
        })
    }

    /// Put the rocket somewhere else, e.g. in tests.
    pub fn with_position(mut self, row: f64, column: f64) -> Self {
        self.row = row;
        self.column = column;
        self
    }

    pub fn position(&self) -> (f64, f64) {
        (self.row, self.column)
    }

    pub fn speed(&self) -> (f64, f64) {
        self.speed
    }

    /// Collision box: the full sprite width, without the trailing exhaust rows.
    pub fn hull(&self) -> Rect {
        let rows = (self.rows as i32 - ROCKET_FIRE_ROW_SIZE).max(0);
        Rect::new(self.row, self.column, f64::from(rows), self.columns as f64)
    }
}

impl Task for RocketController {
    fn name(&self) -> &'static str {
        "rocket"
    }

    fn step(&mut self, ctx: &mut TaskContext<'_>) -> Result<Step, TaskError> {
        if let Some((row, column, index)) = self.drawn.take() {
            ctx.canvas.draw_frame(row, column, &self.frames[index], DrawMode::Erase);
        }

        if ctx.world.registry.mark_hits(&self.hull()) > 0 {
            log::info!("rocket destroyed in {}", ctx.year());
            ctx.spawn(GameOver::new());
            return Ok(Step::Completed);
        }

        let input = ctx.input;
        let direction = (input.rows_direction, input.columns_direction);
        self.speed = self.rule.update(self.speed, direction);
        (self.row, self.column) = self
            .limits
            .clamp(self.row + self.speed.0, self.column + self.speed.1);

        let frame = &self.frames[self.frame_index];
        if input.fire && ctx.world.curve.weapon_enabled(ctx.year()) {
            let nose = self.column + (frame.columns() / 2) as f64;
            ctx.spawn(Projectile::new(self.row, nose, -self.projectile_speed, 0.0));
        }

        ctx.canvas.draw_frame(self.row, self.column, frame, DrawMode::Draw);
        self.drawn = Some((self.row, self.column, self.frame_index));
        self.frame_index = (self.frame_index + 1) % self.frames.len();
        Ok(Step::Running)
    }
}
