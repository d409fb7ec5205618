//! Timeline: the year counter and the year-indexed difficulty curve.
//!
//! The curve is a set of pure lookups. Spawn delays use the nearest lower
//! threshold; phrases are looked up by exact year only, and a miss means
//! "keep whatever phrase is already on screen".

use std::collections::BTreeMap;
use std::num::NonZeroU32;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::types::{START_YEAR, WEAPON_AFTER_YEAR};

/// Current year of the simulation.
///
/// Only the year counter task advances it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock {
    year: u32,
}

impl Clock {
    pub fn new(start_year: u32) -> Self {
        Self { year: start_year }
    }

    pub fn year(&self) -> u32 {
        self.year
    }

    /// Move one year forward.
    pub fn advance(&mut self) -> u32 {
        self.year = self.year.saturating_add(1);
        self.year
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new(START_YEAR)
    }
}

/// From `from_year` on, a new garbage piece appears every `delay_ticks` ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SpawnStage {
    pub from_year: u32,
    pub delay_ticks: u32,
}

/// Default spawn schedule: nothing flies before Gagarin.
pub const DEFAULT_SPAWN_STAGES: [SpawnStage; 6] = [
    SpawnStage { from_year: 1961, delay_ticks: 20 },
    SpawnStage { from_year: 1969, delay_ticks: 14 },
    SpawnStage { from_year: 1981, delay_ticks: 10 },
    SpawnStage { from_year: 1995, delay_ticks: 8 },
    SpawnStage { from_year: 2010, delay_ticks: 6 },
    SpawnStage { from_year: 2020, delay_ticks: 2 },
];

pub const DEFAULT_PHRASES: [(u32, &str); 8] = [
    (1957, "First Sputnik"),
    (1961, "Gagarin flew!"),
    (1969, "Armstrong got on the moon!"),
    (1971, "First orbital space station Salute-1"),
    (1981, "Flight of the Shuttle Columbia"),
    (1998, "ISS start building"),
    (2011, "Messenger launch to Mercury"),
    (2020, "Take the plasma gun! Shoot the garbage!"),
];

/// Year → spawn delay, narrative phrase and weapon gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DifficultyCurve {
    /// Sorted by year, one entry per year.
    spawn_delays: Vec<(u32, NonZeroU32)>,
    phrases: BTreeMap<u32, String>,
    weapon_after_year: u32,
}

impl DifficultyCurve {
    /// Build a curve, rejecting zero delays. Stages may come in any order;
    /// when two stages name the same year the later one wins.
    pub fn new(
        stages: &[SpawnStage],
        phrases: BTreeMap<u32, String>,
        weapon_after_year: u32,
    ) -> Result<Self, ConfigError> {
        let mut by_year = BTreeMap::new();
        for stage in stages {
            let delay = NonZeroU32::new(stage.delay_ticks).ok_or(ConfigError::ZeroSpawnDelay {
                year: stage.from_year,
            })?;
            by_year.insert(stage.from_year, delay);
        }

        Ok(Self {
            spawn_delays: by_year.into_iter().collect(),
            phrases,
            weapon_after_year,
        })
    }

    /// Ticks between garbage spawns in `year`, or `None` while nothing spawns yet.
    pub fn spawn_delay(&self, year: u32) -> Option<u32> {
        let idx = self.spawn_delays.partition_point(|(from, _)| *from <= year);
        idx.checked_sub(1).map(|i| self.spawn_delays[i].1.get())
    }

    /// Phrase introduced exactly in `year`.
    pub fn phrase_for(&self, year: u32) -> Option<&str> {
        self.phrases.get(&year).map(String::as_str)
    }

    /// Whether the rocket may fire in `year`.
    pub fn weapon_enabled(&self, year: u32) -> bool {
        year > self.weapon_after_year
    }

    pub fn weapon_after_year(&self) -> u32 {
        self.weapon_after_year
    }
}

impl Default for DifficultyCurve {
    fn default() -> Self {
        Self {
            spawn_delays: DEFAULT_SPAWN_STAGES
                .iter()
                .filter_map(|s| NonZeroU32::new(s.delay_ticks).map(|d| (s.from_year, d)))
                .collect(),
            phrases: default_phrases(),
            weapon_after_year: WEAPON_AFTER_YEAR,
        }
    }
}

pub fn default_phrases() -> BTreeMap<u32, String> {
    DEFAULT_PHRASES
        .iter()
        .map(|(year, text)| (*year, text.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_advances_by_one() {
        let mut clock = Clock::default();
        assert_eq!(clock.year(), 1957);
        assert_eq!(clock.advance(), 1958);
        assert_eq!(clock.year(), 1958);
    }

    #[test]
    fn default_spawn_delays() {
        let curve = DifficultyCurve::default();
        assert_eq!(curve.spawn_delay(1957), None);
        assert_eq!(curve.spawn_delay(1960), None);
        assert_eq!(curve.spawn_delay(1961), Some(20));
        assert_eq!(curve.spawn_delay(1968), Some(20));
        assert_eq!(curve.spawn_delay(1969), Some(14));
        assert_eq!(curve.spawn_delay(1994), Some(10));
        assert_eq!(curve.spawn_delay(2019), Some(6));
        assert_eq!(curve.spawn_delay(2020), Some(2));
        assert_eq!(curve.spawn_delay(3000), Some(2));
    }

    #[test]
    fn stage_order_does_not_matter() {
        let stages = [
            SpawnStage { from_year: 1969, delay_ticks: 10 },
            SpawnStage { from_year: 1961, delay_ticks: 20 },
        ];
        let curve = DifficultyCurve::new(&stages, BTreeMap::new(), 2020).unwrap();
        assert_eq!(curve.spawn_delay(1965), Some(20));
        assert_eq!(curve.spawn_delay(1970), Some(10));
    }

    #[test]
    fn zero_delay_is_rejected() {
        let stages = [SpawnStage { from_year: 1961, delay_ticks: 0 }];
        let err = DifficultyCurve::new(&stages, BTreeMap::new(), 2020).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroSpawnDelay { year: 1961 }));
    }

    #[test]
    fn weapon_gate_is_strict() {
        let curve = DifficultyCurve::default();
        assert!(!curve.weapon_enabled(2019));
        assert!(!curve.weapon_enabled(2020));
        assert!(curve.weapon_enabled(2021));
    }
}
