//! Plasma gun shot.

use crate::collision::Rect;
use crate::error::TaskError;
use crate::scheduler::{Step, Task, TaskContext};
use crate::types::Emphasis;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Flash,
    Muzzle,
    Flying,
}

/// Flies in a straight line at constant speed.
///
/// After every move it checks the obstacles under it; on a hit it marks them
/// and disappears. Destroying the obstacle is left to its garbage task.
#[derive(Debug, Clone)]
pub struct Projectile {
    row: f64,
    column: f64,
    rows_speed: f64,
    columns_speed: f64,
    phase: Phase,
}

impl Projectile {
    pub fn new(row: f64, column: f64, rows_speed: f64, columns_speed: f64) -> Self {
        Self {
            row,
            column,
            rows_speed,
            columns_speed,
            phase: Phase::Flash,
        }
    }

    pub fn position(&self) -> (f64, f64) {
        (self.row, self.column)
    }

    fn cell(&self) -> (i32, i32) {
        (self.row.round() as i32, self.column.round() as i32)
    }

    fn symbol(&self) -> char {
        if self.columns_speed != 0.0 {
            '-'
        } else {
            '|'
        }
    }
}

impl Task for Projectile {
    fn name(&self) -> &'static str {
        "projectile"
    }

    fn step(&mut self, ctx: &mut TaskContext<'_>) -> Result<Step, TaskError> {
        let (row, column) = self.cell();
        match self.phase {
            Phase::Flash => {
                ctx.canvas.put_char(row, column, '*', Emphasis::Normal);
                self.phase = Phase::Muzzle;
                return Ok(Step::Running);
            }
            Phase::Muzzle => {
                ctx.canvas.put_char(row, column, 'O', Emphasis::Normal);
                ctx.canvas.beep();
                self.phase = Phase::Flying;
                return Ok(Step::Running);
            }
            Phase::Flying => {
                ctx.canvas.put_char(row, column, ' ', Emphasis::Normal);
            }
        }

        self.row += self.rows_speed;
        self.column += self.columns_speed;

        let bounds = ctx.world.bounds;
        let inside = 0.0 < self.row
            && self.row < f64::from(bounds.rows - 1)
            && 0.0 < self.column
            && self.column < f64::from(bounds.columns - 1);
        if !inside {
            return Ok(Step::Completed);
        }

        if ctx.world.registry.mark_hits(&Rect::point(self.row, self.column)) > 0 {
            return Ok(Step::Completed);
        }

        let (row, column) = self.cell();
        ctx.canvas.put_char(row, column, self.symbol(), Emphasis::Normal);
        Ok(Step::Running)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::testing::{step, world, Grid};
    use crate::types::{Bounds, ControlInput};

    const BOUNDS: Bounds = Bounds::new(20, 20);

    #[test]
    fn muzzle_flash_then_flight() {
        let mut p = Projectile::new(10.0, 5.0, -2.0, 0.0);
        let mut w = world(BOUNDS, 2021);
        let mut g = Grid::new(BOUNDS);

        step(&mut p, &mut w, &mut g, ControlInput::default());
        assert_eq!(g.at(10, 5), '*');
        step(&mut p, &mut w, &mut g, ControlInput::default());
        assert_eq!(g.at(10, 5), 'O');
        assert_eq!(g.beeps, 1);
        assert_eq!(p.position(), (10.0, 5.0));

        step(&mut p, &mut w, &mut g, ControlInput::default());
        assert_eq!(p.position(), (8.0, 5.0));
        assert_eq!(g.at(10, 5), ' ');
        assert_eq!(g.at(8, 5), '|');
    }

    #[test]
    fn leaves_the_canvas_without_a_hit() {
        let mut p = Projectile::new(10.0, 5.0, -2.0, 0.0);
        let mut w = world(BOUNDS, 2021);
        let mut g = Grid::new(BOUNDS);

        let mut outcomes = Vec::new();
        for _ in 0..7 {
            outcomes.push(step(&mut p, &mut w, &mut g, ControlInput::default()).0);
        }
        assert_eq!(outcomes[..6], [Step::Running; 6]);
        assert_eq!(outcomes[6], Step::Completed);
        assert_eq!(p.position(), (0.0, 5.0));
        assert!(g.inked().is_empty());
    }

    #[test]
    fn hit_marks_the_obstacle_and_stops() {
        let mut p = Projectile::new(10.0, 5.0, -2.0, 0.0);
        let mut w = world(BOUNDS, 2021);
        let mut g = Grid::new(BOUNDS);
        let id = w.registry.add_obstacle(3.0, 4.0, 2.0, 3.0);

        let mut steps = 0;
        while step(&mut p, &mut w, &mut g, ControlInput::default()).0 == Step::Running {
            steps += 1;
            assert!(steps < 10);
        }
        assert_eq!(p.position(), (4.0, 5.0));
        assert!(w.registry.is_marked(id));
        // Destroying it is the garbage task's job.
        assert_eq!(w.registry.len(), 1);
    }

    #[test]
    fn sideways_shot_uses_dash() {
        let mut p = Projectile::new(5.0, 5.0, 0.0, 1.0);
        let mut w = world(BOUNDS, 2021);
        let mut g = Grid::new(BOUNDS);
        for _ in 0..3 {
            step(&mut p, &mut w, &mut g, ControlInput::default());
        }
        assert_eq!(g.at(5, 6), '-');
    }
}
