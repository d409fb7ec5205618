//! Falling orbital garbage and the spawner that throws it in.

use std::rc::Rc;

use crate::canvas::{DrawMode, Frame};
use crate::collision::ObstacleId;
use crate::error::TaskError;
use crate::scheduler::{Countdown, Step, Task, TaskContext};
use crate::tasks::Explosion;
use crate::types::BORDER_WIDTH;

pub const GARBAGE_SPEEDS: [f64; 2] = [0.5, 0.6];

/// One piece of garbage falling straight down its column.
///
/// The obstacle is registered on the first step and removed on the last one,
/// whether the piece was shot down or left the sky.
#[derive(Debug, Clone)]
pub struct Garbage {
    frame: Rc<Frame>,
    row: f64,
    column: f64,
    speed: f64,
    obstacle: Option<ObstacleId>,
    drawn: bool,
}

impl Garbage {
    pub fn new(frame: Rc<Frame>, column: f64, speed: f64) -> Self {
        // Start above the border so the sprite slides in instead of popping up.
        let row = f64::from(BORDER_WIDTH + 1) - frame.rows() as f64;
        Self {
            frame,
            row,
            column,
            speed,
            obstacle: None,
            drawn: false,
        }
    }

    pub fn obstacle(&self) -> Option<ObstacleId> {
        self.obstacle
    }

    fn center(&self) -> (f64, f64) {
        (
            self.row + (self.frame.rows() / 2) as f64,
            self.column + (self.frame.columns() / 2) as f64,
        )
    }
}

impl Task for Garbage {
    fn name(&self) -> &'static str {
        "garbage"
    }

    fn step(&mut self, ctx: &mut TaskContext<'_>) -> Result<Step, TaskError> {
        let id = match self.obstacle {
            Some(id) => id,
            None => {
                let max_column = f64::from(ctx.world.bounds.columns - 1);
                self.column = self.column.max(0.0).min(max_column);
                let id = ctx.world.registry.add_obstacle(
                    self.row,
                    self.column,
                    self.frame.rows() as f64,
                    self.frame.columns() as f64,
                );
                self.obstacle = Some(id);
                id
            }
        };

        if self.drawn {
            ctx.canvas.draw_frame(self.row, self.column, &self.frame, DrawMode::Erase);
            self.drawn = false;
            self.row += self.speed;
            ctx.world.registry.set_position(id, self.row, self.column);
        }

        if self.row >= f64::from(ctx.world.bounds.window_row()) {
            ctx.world.registry.remove_obstacle(id);
            return Ok(Step::Completed);
        }

        if ctx.world.registry.consume_mark(id) {
            let (row, column) = self.center();
            ctx.spawn(Explosion::new(row, column));
            ctx.world.registry.remove_obstacle(id);
            return Ok(Step::Completed);
        }

        ctx.canvas.draw_frame(self.row, self.column, &self.frame, DrawMode::Draw);
        self.drawn = true;
        Ok(Step::Running)
    }
}

/// Launches a new [`Garbage`] every `spawn_delay(year)` ticks, forever.
///
/// While the curve has no delay for the current year it checks again on the
/// next tick.
#[derive(Debug, Clone)]
pub struct GarbageSpawner {
    frames: Vec<Rc<Frame>>,
    wait: Option<Countdown>,
}

impl GarbageSpawner {
    pub fn new(frames: Vec<Rc<Frame>>) -> Self {
        Self { frames, wait: None }
    }

    fn launch(&self, ctx: &mut TaskContext<'_>) -> Result<(), TaskError> {
        let bounds = ctx.world.bounds;
        let rng = &mut ctx.world.rng;
        let column = rng.range_inclusive(BORDER_WIDTH, bounds.columns - BORDER_WIDTH);
        let frame = rng
            .choose(&self.frames)
            .cloned()
            .ok_or_else(|| TaskError::new("garbage_spawner", "no garbage frames to choose from"))?;
        let speed = rng.choose(&GARBAGE_SPEEDS).copied().unwrap_or(GARBAGE_SPEEDS[0]);
        ctx.spawn(Garbage::new(frame, f64::from(column), speed));
        Ok(())
    }
}

impl Task for GarbageSpawner {
    fn name(&self) -> &'static str {
        "garbage_spawner"
    }

    fn step(&mut self, ctx: &mut TaskContext<'_>) -> Result<Step, TaskError> {
        if let Some(wait) = self.wait.as_mut() {
            if !wait.tick() {
                return Ok(Step::Running);
            }
            self.launch(ctx)?;
            self.wait = None;
        }

        // The year may have changed while waiting, so the delay is looked up fresh.
        self.wait = ctx.world.curve.spawn_delay(ctx.year()).map(Countdown::new);
        Ok(Step::Running)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::testing::{step, world, Grid};
    use crate::types::{Bounds, ControlInput};

    const BOUNDS: Bounds = Bounds::new(20, 40);

    fn block() -> Rc<Frame> {
        Rc::new(Frame::new("###\n###"))
    }

    #[test]
    fn registers_on_first_step_above_the_top() {
        let mut garbage = Garbage::new(block(), 10.0, 1.0);
        let mut w = world(BOUNDS, 1957);
        let mut g = Grid::new(BOUNDS);
        assert!(garbage.obstacle().is_none());

        step(&mut garbage, &mut w, &mut g, ControlInput::default());
        let id = garbage.obstacle().unwrap();
        let obstacle = w.registry.get(id).unwrap();
        assert_eq!((obstacle.row, obstacle.column), (0.0, 10.0));
        assert_eq!((obstacle.rows, obstacle.columns), (2.0, 3.0));

        step(&mut garbage, &mut w, &mut g, ControlInput::default());
        assert_eq!(w.registry.get(id).unwrap().row, 1.0);
        assert_eq!(g.at(0, 10), ' ');
        assert_eq!(g.at(1, 10), '#');
    }

    #[test]
    fn column_is_clamped_to_the_canvas() {
        let mut garbage = Garbage::new(block(), 100.0, 1.0);
        let mut w = world(BOUNDS, 1957);
        let mut g = Grid::new(BOUNDS);
        step(&mut garbage, &mut w, &mut g, ControlInput::default());
        let id = garbage.obstacle().unwrap();
        assert_eq!(w.registry.get(id).unwrap().column, 39.0);
    }

    #[test]
    fn mark_turns_into_an_explosion() {
        let mut garbage = Garbage::new(block(), 10.0, 1.0);
        let mut w = world(BOUNDS, 1957);
        let mut g = Grid::new(BOUNDS);
        step(&mut garbage, &mut w, &mut g, ControlInput::default());
        let id = garbage.obstacle().unwrap();

        w.registry.mark(id);
        let (outcome, spawned) = step(&mut garbage, &mut w, &mut g, ControlInput::default());
        assert_eq!(outcome, Step::Completed);
        assert_eq!(spawned, vec!["explosion"]);
        assert!(w.registry.is_empty());
        assert!(g.inked().is_empty());
    }

    #[test]
    fn spawner_without_frames_fails() {
        let mut spawner = GarbageSpawner::new(Vec::new());
        let mut w = world(BOUNDS, 1961);
        let mut g = Grid::new(BOUNDS);
        let mut spawned = Vec::new();
        let err = loop {
            let result = {
                let mut ctx = TaskContext::new(&mut w, &mut g, ControlInput::default(), &mut spawned);
                spawner.step(&mut ctx)
            };
            if let Err(err) = result {
                break err;
            }
        };
        assert_eq!(err.task, "garbage_spawner");
        assert!(spawned.is_empty());
    }

    #[test]
    fn spawner_idles_before_the_first_stage() {
        let mut spawner = GarbageSpawner::new(vec![block()]);
        let mut w = world(BOUNDS, 1960);
        let mut g = Grid::new(BOUNDS);
        for _ in 0..50 {
            let (_, spawned) = step(&mut spawner, &mut w, &mut g, ControlInput::default());
            assert!(spawned.is_empty());
        }
        w.clock.advance();
        let launched: usize = (0..21)
            .map(|_| step(&mut spawner, &mut w, &mut g, ControlInput::default()).1.len())
            .sum();
        assert_eq!(launched, 1);
    }
}
