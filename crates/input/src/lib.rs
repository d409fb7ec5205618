//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`ControlInput`](types::ControlInput) commands and folds all
//! events that arrive between two ticks into one command, the way the rocket
//! expects it: per axis the last pressed direction wins, fire is sticky.

pub mod map;

pub use tui_launch_types as types;

pub use map::{control_for_key, should_quit, InputCollector};
