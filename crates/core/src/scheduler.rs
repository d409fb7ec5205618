//! Cooperative scheduler.
//!
//! Every task is a small state machine advanced by exactly one [`Task::step`]
//! per tick. Tasks run in registration order, then the overlay task (if any)
//! runs last so whatever it draws stays on top. Tasks registered while a tick
//! is running are queued and first stepped on the following tick.
//!
//! Waiting is never blocking: a task that wants to sleep for N ticks keeps a
//! [`Countdown`] in its own state and returns [`Step::Running`] until it runs
//! out.
//!
//! # Failures
//!
//! What happens when a step returns an error is decided by [`FailurePolicy`]:
//! `Halt` stops the run (the error is returned from [`Scheduler::tick`]),
//! `Isolate` logs the error, drops the failing task and carries on.

use serde::Deserialize;

use crate::canvas::Canvas;
use crate::clock::{Clock, DifficultyCurve};
use crate::collision::CollisionRegistry;
use crate::error::{SchedulerError, TaskError};
use crate::rng::SimpleRng;
use crate::types::{Bounds, ControlInput};

/// Outcome of one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Running,
    Completed,
}

/// A unit of cooperatively scheduled behaviour.
pub trait Task {
    /// Short label for logs.
    fn name(&self) -> &'static str;

    fn step(&mut self, ctx: &mut TaskContext<'_>) -> Result<Step, TaskError>;
}

/// State shared by all tasks. Owned by the session, lent to each step.
#[derive(Debug, Clone)]
pub struct World {
    pub bounds: Bounds,
    pub clock: Clock,
    pub curve: DifficultyCurve,
    pub registry: CollisionRegistry,
    pub rng: SimpleRng,
}

impl World {
    pub fn new(bounds: Bounds, clock: Clock, curve: DifficultyCurve, seed: u32) -> Self {
        Self {
            bounds,
            clock,
            curve,
            registry: CollisionRegistry::new(),
            rng: SimpleRng::new(seed),
        }
    }
}

/// Everything a task may touch during its step.
pub struct TaskContext<'a> {
    pub world: &'a mut World,
    pub canvas: &'a mut dyn Canvas,
    /// Commands gathered since the previous tick.
    pub input: ControlInput,
    spawned: &'a mut Vec<Box<dyn Task>>,
}

impl<'a> TaskContext<'a> {
    pub fn new(
        world: &'a mut World,
        canvas: &'a mut dyn Canvas,
        input: ControlInput,
        spawned: &'a mut Vec<Box<dyn Task>>,
    ) -> Self {
        Self {
            world,
            canvas,
            input,
            spawned,
        }
    }

    /// Register a new task. It is first stepped on the next tick.
    pub fn spawn(&mut self, task: impl Task + 'static) {
        log::debug!("spawn {}", task.name());
        self.spawned.push(Box::new(task));
    }

    pub fn year(&self) -> u32 {
        self.world.clock.year()
    }
}

/// Tick-count suspension embedded in a task's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Countdown {
    remaining: u32,
}

impl Countdown {
    /// Run out after `ticks` calls to [`Countdown::tick`].
    pub fn new(ticks: u32) -> Self {
        Self { remaining: ticks }
    }

    /// Consume one tick. Returns true once the countdown has run out.
    pub fn tick(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining == 0
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}

/// How the scheduler reacts to a failing step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Stop the whole run.
    Halt,
    /// Log, drop the task, keep ticking.
    #[default]
    Isolate,
}

/// Bookkeeping for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    pub tick: u64,
    pub stepped: usize,
    pub completed: usize,
    pub failed: usize,
    pub spawned: usize,
}

pub struct Scheduler {
    tasks: Vec<Box<dyn Task>>,
    pending: Vec<Box<dyn Task>>,
    overlay: Option<Box<dyn Task>>,
    policy: FailurePolicy,
    ticks: u64,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(FailurePolicy::default())
    }
}

impl Scheduler {
    pub fn new(policy: FailurePolicy) -> Self {
        Self {
            tasks: Vec::new(),
            pending: Vec::new(),
            overlay: None,
            policy,
            ticks: 0,
        }
    }

    /// Add a task; it is stepped from the next tick on.
    pub fn register(&mut self, task: impl Task + 'static) {
        self.pending.push(Box::new(task));
    }

    /// Install the task that is stepped last on every tick, replacing any previous one.
    pub fn set_overlay(&mut self, task: impl Task + 'static) {
        self.overlay = Some(Box::new(task));
    }

    pub fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }

    /// Live tasks, including ones waiting for their first step. The overlay is not counted.
    pub fn len(&self) -> usize {
        self.tasks.len() + self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Names of live tasks in stepping order.
    pub fn task_names(&self) -> Vec<&'static str> {
        self.tasks
            .iter()
            .chain(self.pending.iter())
            .map(|t| t.name())
            .collect()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Advance every live task by one step, then the overlay.
    pub fn tick(
        &mut self,
        world: &mut World,
        canvas: &mut dyn Canvas,
        input: ControlInput,
    ) -> Result<TickReport, SchedulerError> {
        self.ticks += 1;
        self.tasks.append(&mut self.pending);

        let mut report = TickReport {
            tick: self.ticks,
            ..TickReport::default()
        };
        let mut spawned: Vec<Box<dyn Task>> = Vec::new();

        let mut i = 0;
        while i < self.tasks.len() {
            let result = {
                let mut ctx = TaskContext::new(world, canvas, input, &mut spawned);
                self.tasks[i].step(&mut ctx)
            };
            report.stepped += 1;
            match result {
                Ok(Step::Running) => i += 1,
                Ok(Step::Completed) => {
                    let task = self.tasks.remove(i);
                    log::debug!("tick {}: {} completed", self.ticks, task.name());
                    report.completed += 1;
                }
                Err(err) => {
                    self.on_failure(err)?;
                    self.tasks.remove(i);
                    report.failed += 1;
                }
            }
        }

        if let Some(overlay) = self.overlay.as_mut() {
            let result = {
                let mut ctx = TaskContext::new(world, canvas, input, &mut spawned);
                overlay.step(&mut ctx)
            };
            match result {
                Ok(Step::Running) => {}
                Ok(Step::Completed) => self.overlay = None,
                Err(err) => {
                    self.on_failure(err)?;
                    self.overlay = None;
                }
            }
        }

        report.spawned = spawned.len();
        self.pending.append(&mut spawned);
        Ok(report)
    }

    fn on_failure(&self, err: TaskError) -> Result<(), SchedulerError> {
        match self.policy {
            FailurePolicy::Halt => Err(SchedulerError {
                tick: self.ticks,
                source: err,
            }),
            FailurePolicy::Isolate => {
                log::error!("tick {}: dropping task: {}", self.ticks, err);
                Ok(())
            }
        }
    }
}
