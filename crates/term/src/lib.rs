//! Terminal "game renderer" module.
//!
//! Tasks draw into a [`FrameBuffer`] through the core `Canvas` trait; the
//! [`TerminalRenderer`] then flushes only the cell runs that changed since the
//! previous flush.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - One persistent grid, curses-style: tasks erase what they drew
//! - Minimal terminal traffic at ten frames per second

pub mod fb;
pub mod renderer;

pub use tui_launch_core as core;
pub use tui_launch_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
