//! Integration tests for the cooperative scheduler

use std::cell::RefCell;
use std::rc::Rc;

use tui_launch::core::{
    Canvas, Clock, DifficultyCurve, FailurePolicy, Scheduler, Step, Task, TaskContext, TaskError,
    World,
};
use tui_launch::types::{Bounds, ControlInput, Emphasis};

struct NullCanvas;

impl Canvas for NullCanvas {
    fn bounds(&self) -> Bounds {
        Bounds::new(20, 40)
    }

    fn put_char(&mut self, _row: i32, _column: i32, _ch: char, _emphasis: Emphasis) {}
}

type Log = Rc<RefCell<Vec<&'static str>>>;

/// Records its name on every step; completes after `steps` steps if given.
struct Recorder {
    name: &'static str,
    log: Log,
    steps: Option<u32>,
}

impl Recorder {
    fn forever(name: &'static str, log: &Log) -> Self {
        Self {
            name,
            log: Rc::clone(log),
            steps: None,
        }
    }

    fn finite(name: &'static str, log: &Log, steps: u32) -> Self {
        Self {
            name,
            log: Rc::clone(log),
            steps: Some(steps),
        }
    }
}

impl Task for Recorder {
    fn name(&self) -> &'static str {
        self.name
    }

    fn step(&mut self, _ctx: &mut TaskContext<'_>) -> Result<Step, TaskError> {
        self.log.borrow_mut().push(self.name);
        match self.steps.as_mut() {
            Some(0) => Ok(Step::Completed),
            Some(n) => {
                *n -= 1;
                Ok(Step::Running)
            }
            None => Ok(Step::Running),
        }
    }
}

/// Spawns one child on its first step.
struct Parent {
    log: Log,
    spawned: bool,
}

impl Task for Parent {
    fn name(&self) -> &'static str {
        "parent"
    }

    fn step(&mut self, ctx: &mut TaskContext<'_>) -> Result<Step, TaskError> {
        self.log.borrow_mut().push("parent");
        if !self.spawned {
            ctx.spawn(Recorder::forever("child", &self.log));
            self.spawned = true;
        }
        Ok(Step::Running)
    }
}

struct Failing;

impl Task for Failing {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn step(&mut self, _ctx: &mut TaskContext<'_>) -> Result<Step, TaskError> {
        Err(TaskError::new("failing", "boom"))
    }
}

fn world() -> World {
    World::new(Bounds::new(20, 40), Clock::default(), DifficultyCurve::default(), 3)
}

fn tick(s: &mut Scheduler, w: &mut World) -> tui_launch::core::TickReport {
    s.tick(w, &mut NullCanvas, ControlInput::default()).unwrap()
}

#[test]
fn test_tasks_step_in_registration_order_with_overlay_last() {
    let log: Log = Rc::default();
    let mut s = Scheduler::default();
    let mut w = world();

    // Overlay installed first still runs last.
    s.set_overlay(Recorder::forever("overlay", &log));
    s.register(Recorder::forever("a", &log));
    s.register(Recorder::forever("b", &log));
    s.register(Recorder::forever("c", &log));

    tick(&mut s, &mut w);
    tick(&mut s, &mut w);

    assert_eq!(
        *log.borrow(),
        vec!["a", "b", "c", "overlay", "a", "b", "c", "overlay"]
    );
}

#[test]
fn test_spawned_task_waits_for_next_tick() {
    let log: Log = Rc::default();
    let mut s = Scheduler::default();
    let mut w = world();
    s.register(Parent {
        log: Rc::clone(&log),
        spawned: false,
    });

    let r = tick(&mut s, &mut w);
    assert_eq!(r.spawned, 1);
    assert_eq!(r.stepped, 1);
    assert_eq!(*log.borrow(), vec!["parent"]);
    assert_eq!(s.len(), 2);

    tick(&mut s, &mut w);
    assert_eq!(*log.borrow(), vec!["parent", "parent", "child"]);
}

#[test]
fn test_live_count_tracks_registrations_and_completions() {
    let log: Log = Rc::default();
    let mut s = Scheduler::default();
    let mut w = world();

    s.register(Recorder::finite("short", &log, 0));
    s.register(Recorder::finite("medium", &log, 2));
    s.register(Recorder::forever("long", &log));
    assert_eq!(s.len(), 3);

    let mut completed = 0;
    for _ in 0..5 {
        let r = tick(&mut s, &mut w);
        completed += r.completed;
        assert_eq!(s.len(), 3 - completed);
    }
    assert_eq!(completed, 2);
    assert_eq!(s.task_names(), vec!["long"]);
}

#[test]
fn test_completed_task_does_not_skip_its_neighbour() {
    let log: Log = Rc::default();
    let mut s = Scheduler::default();
    let mut w = world();
    s.register(Recorder::finite("gone", &log, 0));
    s.register(Recorder::forever("next", &log));

    tick(&mut s, &mut w);
    assert_eq!(*log.borrow(), vec!["gone", "next"]);
}

#[test]
fn test_overlay_only_scheduler_keeps_ticking() {
    let log: Log = Rc::default();
    let mut s = Scheduler::default();
    let mut w = world();
    s.set_overlay(Recorder::forever("overlay", &log));

    for _ in 0..10 {
        tick(&mut s, &mut w);
    }
    assert!(s.is_empty());
    assert!(s.has_overlay());
    assert_eq!(log.borrow().len(), 10);
}

#[test]
fn test_policy_defaults_to_isolate() {
    assert_eq!(Scheduler::default().policy(), FailurePolicy::Isolate);
    assert_eq!(Scheduler::new(FailurePolicy::Halt).policy(), FailurePolicy::Halt);
}

#[test]
fn test_halt_policy_stops_the_run() {
    let log: Log = Rc::default();
    let mut s = Scheduler::new(FailurePolicy::Halt);
    let mut w = world();
    s.register(Recorder::forever("before", &log));
    s.register(Failing);
    s.register(Recorder::forever("after", &log));

    let err = s
        .tick(&mut w, &mut NullCanvas, ControlInput::default())
        .unwrap_err();
    assert_eq!(err.tick, 1);
    assert_eq!(err.source.task, "failing");
    assert_eq!(*log.borrow(), vec!["before"]);
}

#[test]
fn test_isolate_policy_drops_only_the_failing_task() {
    let log: Log = Rc::default();
    let mut s = Scheduler::new(FailurePolicy::Isolate);
    let mut w = world();
    s.register(Recorder::forever("before", &log));
    s.register(Failing);
    s.register(Recorder::forever("after", &log));

    let r = tick(&mut s, &mut w);
    assert_eq!(r.failed, 1);
    assert_eq!(s.task_names(), vec!["before", "after"]);

    tick(&mut s, &mut w);
    assert_eq!(*log.borrow(), vec!["before", "after", "before", "after"]);
}
