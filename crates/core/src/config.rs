//! Run configuration.
//!
//! Every field has a default, so an empty JSON object (or no file at all)
//! gives the classic game.
//!
//! ```
//! use tui_launch_core::LaunchConfig;
//!
//! let config = LaunchConfig::from_json_str(r#"{ "ticks_per_year": 5, "seed": 42 }"#).unwrap();
//! assert_eq!(config.ticks_per_year, 5);
//! assert_eq!(config.tick_ms, 100);
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::clock::{default_phrases, DifficultyCurve, SpawnStage, DEFAULT_SPAWN_STAGES};
use crate::error::ConfigError;
use crate::physics::AdditiveSpeed;
use crate::scheduler::FailurePolicy;
use crate::types::{STARS_AMOUNT, START_YEAR, TICKS_PER_YEAR, TICK_MS, WEAPON_AFTER_YEAR};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LaunchConfig {
    pub tick_ms: u32,
    pub ticks_per_year: u32,
    pub start_year: u32,
    pub stars: usize,
    /// RNG seed; derived from the wall clock when absent.
    pub seed: Option<u32>,
    pub failure_policy: FailurePolicy,
    /// Directory of `*.txt` sprites overriding the builtin ones.
    pub frames_dir: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub rocket: RocketConfig,
    pub difficulty: DifficultyConfig,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            ticks_per_year: TICKS_PER_YEAR,
            start_year: START_YEAR,
            stars: STARS_AMOUNT,
            seed: None,
            failure_policy: FailurePolicy::default(),
            frames_dir: None,
            log_file: None,
            rocket: RocketConfig::default(),
            difficulty: DifficultyConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RocketConfig {
    /// Velocity change per tick while a direction is held.
    pub step: f64,
    pub max_speed: f64,
    /// Rows per tick travelled by a shot.
    pub projectile_speed: f64,
}

impl Default for RocketConfig {
    fn default() -> Self {
        let speed = AdditiveSpeed::default();
        Self {
            step: speed.step,
            max_speed: speed.max,
            projectile_speed: 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DifficultyConfig {
    pub spawn_delays: Vec<SpawnStage>,
    pub phrases: BTreeMap<u32, String>,
    pub weapon_after_year: u32,
}

impl Default for DifficultyConfig {
    fn default() -> Self {
        Self {
            spawn_delays: DEFAULT_SPAWN_STAGES.to_vec(),
            phrases: default_phrases(),
            weapon_after_year: WEAPON_AFTER_YEAR,
        }
    }
}

impl LaunchConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_ms == 0 {
            return Err(ConfigError::NotPositive { field: "tick_ms" });
        }
        if self.ticks_per_year == 0 {
            return Err(ConfigError::NotPositive {
                field: "ticks_per_year",
            });
        }
        if self.rocket.step <= 0.0 {
            return Err(ConfigError::NotPositive {
                field: "rocket.step",
            });
        }
        if self.rocket.max_speed <= 0.0 {
            return Err(ConfigError::NotPositive {
                field: "rocket.max_speed",
            });
        }
        if self.rocket.projectile_speed <= 0.0 {
            return Err(ConfigError::NotPositive {
                field: "rocket.projectile_speed",
            });
        }
        self.curve().map(|_| ())
    }

    pub fn curve(&self) -> Result<DifficultyCurve, ConfigError> {
        DifficultyCurve::new(
            &self.difficulty.spawn_delays,
            self.difficulty.phrases.clone(),
            self.difficulty.weapon_after_year,
        )
    }

    pub fn speed_rule(&self) -> AdditiveSpeed {
        AdditiveSpeed {
            step: self.rocket.step,
            max: self.rocket.max_speed,
        }
    }

    pub fn tick_duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.tick_ms))
    }
}
