//! Entity tasks.
//!
//! Each task is a two-state machine: it returns [`Step::Running`] until it is
//! done, then [`Step::Completed`] once and is dropped by the scheduler.
//!
//! - [`Star`]: blinks forever, no shared state
//! - [`Garbage`]: owns one obstacle, falls, explodes when marked
//! - [`GarbageSpawner`]: launches garbage at the rate the difficulty curve allows
//! - [`Projectile`]: flies straight, marks the first obstacles it touches
//! - [`Explosion`]: four-frame animation
//! - [`RocketController`]: player ship; spawns [`GameOver`] when hit
//! - [`GameOver`]: centred banner, forever
//! - [`YearCounter`] and [`YearWindow`]: the timeline and its bottom band
//!
//! [`Step::Running`]: crate::scheduler::Step::Running
//! [`Step::Completed`]: crate::scheduler::Step::Completed

pub mod explosion;
pub mod game_over;
pub mod garbage;
pub mod projectile;
pub mod rocket;
pub mod star;
pub mod year;

pub use explosion::Explosion;
pub use game_over::GameOver;
pub use garbage::{Garbage, GarbageSpawner};
pub use projectile::Projectile;
pub use rocket::RocketController;
pub use star::{generate_stars, Star};
pub use year::{YearCounter, YearWindow};
