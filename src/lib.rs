//! TUI Launch (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_launch::{core,input,term,types}`; the
//! implementation lives in dedicated crates under `crates/`.

pub use tui_launch_core as core;
pub use tui_launch_input as input;
pub use tui_launch_term as term;
pub use tui_launch_types as types;
