//! Core simulation - cooperative tasks on a fixed tick, no terminal I/O
//!
//! A rocket dodges orbital garbage in a blinking starfield. Every moving or
//! animated thing on screen is a [`Task`] that the [`Scheduler`] advances by
//! exactly one step per tick:
//!
//! - **Deterministic**: all randomness comes from one seeded [`SimpleRng`]
//! - **Headless**: tasks draw through the [`Canvas`] trait; any grid will do
//! - **Single-threaded**: tasks run one after another, shared state is lent
//!   to each step through a [`TaskContext`], never locked
//!
//! # Module Structure
//!
//! - [`scheduler`]: task contract, countdown suspension, failure policy, scheduler
//! - [`collision`]: obstacles and the mark-then-consume hit protocol
//! - [`clock`]: year counter and difficulty curve (spawn rate, phrases, weapon gate)
//! - [`tasks`]: stars, rocket, garbage, projectiles, explosions, overlays
//! - [`canvas`]: drawing contract and frame clipping rules
//! - [`assets`]: sprite frames
//! - [`physics`]: rocket speed rule
//! - [`config`]: JSON configuration
//! - [`game`]: the initial scene
//!
//! # Example
//!
//! ```
//! use tui_launch_core::{Canvas, FrameStore, Launch, LaunchConfig};
//! use tui_launch_core::types::{Bounds, ControlInput, Emphasis};
//!
//! struct Blank(Bounds);
//!
//! impl Canvas for Blank {
//!     fn bounds(&self) -> Bounds {
//!         self.0
//!     }
//!     fn put_char(&mut self, _row: i32, _column: i32, _ch: char, _emphasis: Emphasis) {}
//! }
//!
//! let bounds = Bounds::new(30, 100);
//! let config = LaunchConfig::default();
//! let mut launch = Launch::new(&config, &FrameStore::builtin(), bounds, 7).unwrap();
//! let mut canvas = Blank(bounds);
//!
//! for _ in 0..config.ticks_per_year {
//!     launch.tick(&mut canvas, ControlInput::default()).unwrap();
//! }
//! assert_eq!(launch.year(), 1958);
//! ```
//!
//! # Timing
//!
//! One tick is [`TICK_MS`](types::TICK_MS) milliseconds of wall time by
//! default. All motion and waiting inside the core is counted in ticks.

pub mod assets;
pub mod canvas;
pub mod clock;
pub mod collision;
pub mod config;
pub mod error;
pub mod game;
pub mod physics;
pub mod rng;
pub mod scheduler;
pub mod tasks;

pub use tui_launch_types as types;

pub use assets::FrameStore;
pub use canvas::{Canvas, DrawMode, Frame};
pub use clock::{Clock, DifficultyCurve, SpawnStage};
pub use collision::{CollisionRegistry, Obstacle, ObstacleId, Rect};
pub use config::LaunchConfig;
pub use error::{AssetError, ConfigError, SchedulerError, SetupError, TaskError};
pub use game::Launch;
pub use physics::{AdditiveSpeed, SpeedRule};
pub use rng::SimpleRng;
pub use scheduler::{Countdown, FailurePolicy, Scheduler, Step, Task, TaskContext, TickReport, World};
