//! A launch session: the initial scene wired onto a scheduler.

use crate::assets::{FrameStore, GARBAGE_FRAMES, ROCKET_FRAMES};
use crate::canvas::Canvas;
use crate::clock::Clock;
use crate::config::LaunchConfig;
use crate::error::{SchedulerError, SetupError};
use crate::scheduler::{Scheduler, TickReport, World};
use crate::tasks::{generate_stars, GarbageSpawner, RocketController, YearCounter, YearWindow};
use crate::types::{Bounds, ControlInput};

/// Stars, rocket, garbage spawner and year counter, with the year window on top.
pub struct Launch {
    scheduler: Scheduler,
    world: World,
}

impl Launch {
    pub fn new(
        config: &LaunchConfig,
        frames: &FrameStore,
        bounds: Bounds,
        seed: u32,
    ) -> Result<Self, SetupError> {
        config.validate()?;
        let rocket_frames = frames.get_all(ROCKET_FRAMES)?;
        let garbage_frames = frames.get_all(GARBAGE_FRAMES)?;

        let mut world = World::new(bounds, Clock::new(config.start_year), config.curve()?, seed);
        let mut scheduler = Scheduler::new(config.failure_policy);

        for star in generate_stars(&mut world.rng, bounds, config.stars) {
            scheduler.register(star);
        }
        scheduler.register(RocketController::new(
            &rocket_frames,
            bounds,
            Box::new(config.speed_rule()),
            config.rocket.projectile_speed,
        )?);
        scheduler.register(GarbageSpawner::new(garbage_frames));
        scheduler.register(YearCounter::new(config.ticks_per_year));
        scheduler.set_overlay(YearWindow::new());

        log::info!(
            "launch: {}x{} canvas, {} stars, seed {}, year {}",
            bounds.columns,
            bounds.rows,
            config.stars,
            seed,
            config.start_year
        );
        Ok(Self { scheduler, world })
    }

    /// Step every task once, then redraw the canvas border.
    pub fn tick(
        &mut self,
        canvas: &mut dyn Canvas,
        input: ControlInput,
    ) -> Result<TickReport, SchedulerError> {
        let report = self.scheduler.tick(&mut self.world, canvas, input)?;
        canvas.border();
        Ok(report)
    }

    pub fn year(&self) -> u32 {
        self.world.clock.year()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// True once the rocket has been destroyed.
    pub fn is_over(&self) -> bool {
        self.scheduler.task_names().contains(&"game_over")
    }
}
