//! Error types for the simulation core.
//!
//! Lookup misses (no spawn delay for a year, no phrase) and off-canvas draws
//! are not errors; they resolve to defaults where they happen.

use std::path::PathBuf;

use thiserror::Error;

/// Invalid configuration, detected before the first tick.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("spawn delay for year {year} must be a positive tick count")]
    ZeroSpawnDelay { year: u32 },

    #[error("`{field}` must be greater than zero")]
    NotPositive { field: &'static str },
}

/// Sprite assets could not be loaded.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read frames from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("frame `{0}` is missing")]
    MissingFrame(String),

    #[error("frame `{0}` is empty")]
    EmptyFrame(String),
}

/// A task step failed.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("task `{task}` failed: {reason}")]
pub struct TaskError {
    pub task: &'static str,
    pub reason: String,
}

impl TaskError {
    pub fn new(task: &'static str, reason: impl Into<String>) -> Self {
        Self {
            task,
            reason: reason.into(),
        }
    }
}

/// The scheduler stopped because a task failed under [`FailurePolicy::Halt`].
///
/// [`FailurePolicy::Halt`]: crate::scheduler::FailurePolicy::Halt
#[derive(Debug, Clone, PartialEq, Error)]
#[error("tick {tick} halted: {source}")]
pub struct SchedulerError {
    pub tick: u64,
    #[source]
    pub source: TaskError,
}

/// Anything that prevents a session from starting.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Asset(#[from] AssetError),
}
