//! Shared types module - plain data and constants
//!
//! Everything here is dependency-free so it can be shared by the simulation
//! core, the terminal renderer and the input mapping without pulling in any
//! I/O.
//!
//! # Canvas layout
//!
//! The canvas is a character grid addressed as `(row, column)` with the origin
//! in the top-left corner. A one-cell border runs around the edge and a
//! three-row year window occupies the bottom of the screen:
//!
//! ```text
//! ┌──────────────────────────┐  row 0
//! │ *   .    stars, rocket,  │
//! │    garbage, projectiles  │
//! │──────────────────────────│  row rows - 3
//! │  1969: Armstrong got on  │
//! └──────────────────────────┘  row rows - 1
//! ```
//!
//! # Timing constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 100 | Fixed tick interval |
//! | `TICKS_PER_YEAR` | 15 | Ticks between year increments |
//! | `START_YEAR` | 1957 | Year shown on the first tick |
//! | `WEAPON_AFTER_YEAR` | 2020 | Firing is enabled strictly after this year |
//!
//! # Examples
//!
//! ```
//! use tui_launch_types::{Bounds, ControlInput};
//!
//! let bounds = Bounds::new(24, 80);
//! assert!(bounds.contains(0, 0));
//! assert!(!bounds.contains(24, 0));
//!
//! let input = ControlInput::default();
//! assert!(input.is_neutral());
//! ```

/// Fixed tick interval in milliseconds.
pub const TICK_MS: u32 = 100;

/// Ticks between two year increments.
pub const TICKS_PER_YEAR: u32 = 15;

/// First year on the timeline.
pub const START_YEAR: u32 = 1957;

/// The weapon unlocks for years strictly greater than this one.
pub const WEAPON_AFTER_YEAR: u32 = 2020;

/// Number of blinking stars in the default scene.
pub const STARS_AMOUNT: usize = 250;

/// Width of the canvas border in cells.
pub const BORDER_WIDTH: i32 = 1;

/// Height of the year window content (excluding its own border).
pub const DERIVED_WINDOW_HEIGHT: i32 = 1;

/// Trailing rows of the rocket sprite that are exhaust flame, not hull.
///
/// Obstacles touching only these rows do not end the game.
pub const ROCKET_FIRE_ROW_SIZE: i32 = 3;

/// Canvas size in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub rows: i32,
    pub columns: i32,
}

impl Bounds {
    pub const fn new(rows: i32, columns: i32) -> Self {
        Self { rows, columns }
    }

    /// Whether a cell lies on the canvas.
    pub fn contains(&self, row: i32, column: i32) -> bool {
        row >= 0 && column >= 0 && row < self.rows && column < self.columns
    }

    /// First row of the year window at the bottom of the canvas.
    ///
    /// Everything that flies (rocket, garbage, stars) stays above it.
    pub fn window_row(&self) -> i32 {
        self.rows - BORDER_WIDTH * 2 - DERIVED_WINDOW_HEIGHT
    }
}

/// Visual intensity of a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Emphasis {
    Dim,
    #[default]
    Normal,
    Bold,
}

/// Player commands gathered during one tick.
///
/// - `rows_direction`: -1 up, 1 down, 0 none
/// - `columns_direction`: -1 left, 1 right, 0 none
/// - `fire`: fire requested at least once during the tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControlInput {
    pub rows_direction: i8,
    pub columns_direction: i8,
    pub fire: bool,
}

impl ControlInput {
    pub const fn rows(direction: i8) -> Self {
        Self {
            rows_direction: direction,
            columns_direction: 0,
            fire: false,
        }
    }

    pub const fn columns(direction: i8) -> Self {
        Self {
            rows_direction: 0,
            columns_direction: direction,
            fire: false,
        }
    }

    pub const fn fire() -> Self {
        Self {
            rows_direction: 0,
            columns_direction: 0,
            fire: true,
        }
    }

    pub fn is_neutral(&self) -> bool {
        self.rows_direction == 0 && self.columns_direction == 0 && !self.fire
    }

    /// Fold a later command into this one.
    ///
    /// A non-zero direction overrides the earlier value on its axis; fire is sticky.
    pub fn merge(&mut self, later: ControlInput) {
        if later.rows_direction != 0 {
            self.rows_direction = later.rows_direction.signum();
        }
        if later.columns_direction != 0 {
            self.columns_direction = later.columns_direction.signum();
        }
        self.fire |= later.fire;
    }
}
