//! Collision registry: live obstacles plus pending hit marks.
//!
//! Detectors (rocket, projectiles) never remove obstacles. They `mark` what
//! they hit; the garbage task owning the obstacle consumes the mark on its
//! next step, explodes and deregisters itself.

use std::collections::{BTreeMap, BTreeSet};

/// Axis-aligned rectangle in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub row: f64,
    pub column: f64,
    pub rows: f64,
    pub columns: f64,
}

impl Rect {
    pub fn new(row: f64, column: f64, rows: f64, columns: f64) -> Self {
        Self {
            row,
            column,
            rows,
            columns,
        }
    }

    /// One-cell rectangle, used for projectiles.
    pub fn point(row: f64, column: f64) -> Self {
        Self::new(row, column, 1.0, 1.0)
    }

    /// True when both the row ranges and the column ranges share a non-empty span.
    pub fn overlaps(&self, other: &Rect) -> bool {
        fn spans(a: f64, a_len: f64, b: f64, b_len: f64) -> bool {
            a_len > 0.0 && b_len > 0.0 && a < b + b_len && b < a + a_len
        }
        spans(self.row, self.rows, other.row, other.rows)
            && spans(self.column, self.columns, other.column, other.columns)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObstacleId(u64);

impl ObstacleId {
    pub fn get(&self) -> u64 {
        self.0
    }
}

/// A falling piece of garbage as seen by collision detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub id: ObstacleId,
    pub row: f64,
    pub column: f64,
    pub rows: f64,
    pub columns: f64,
}

impl Obstacle {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.row, self.column, self.rows, self.columns)
    }

    pub fn has_collision(&self, other: &Rect) -> bool {
        self.bounds().overlaps(other)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CollisionRegistry {
    next_id: u64,
    obstacles: BTreeMap<ObstacleId, Obstacle>,
    marks: BTreeSet<ObstacleId>,
}

impl CollisionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new obstacle and return its identity.
    pub fn add_obstacle(&mut self, row: f64, column: f64, rows: f64, columns: f64) -> ObstacleId {
        let id = ObstacleId(self.next_id);
        self.next_id += 1;
        self.obstacles.insert(
            id,
            Obstacle {
                id,
                row,
                column,
                rows,
                columns,
            },
        );
        id
    }

    /// Drop an obstacle and any mark it still carries. Unknown ids are ignored.
    pub fn remove_obstacle(&mut self, id: ObstacleId) -> Option<Obstacle> {
        self.marks.remove(&id);
        self.obstacles.remove(&id)
    }

    pub fn get(&self, id: ObstacleId) -> Option<&Obstacle> {
        self.obstacles.get(&id)
    }

    /// Move an obstacle. Returns false for unknown ids.
    pub fn set_position(&mut self, id: ObstacleId, row: f64, column: f64) -> bool {
        match self.obstacles.get_mut(&id) {
            Some(o) => {
                o.row = row;
                o.column = column;
                true
            }
            None => false,
        }
    }

    /// Obstacles in registration order.
    pub fn list_obstacles(&self) -> impl Iterator<Item = &Obstacle> + '_ {
        self.obstacles.values()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Flag an obstacle as hit. Marking twice before consumption is a no-op.
    ///
    /// Returns true when a new mark was set.
    pub fn mark(&mut self, id: ObstacleId) -> bool {
        if !self.obstacles.contains_key(&id) {
            return false;
        }
        self.marks.insert(id)
    }

    pub fn is_marked(&self, id: ObstacleId) -> bool {
        self.marks.contains(&id)
    }

    /// Take the mark off an obstacle. True only for the first call after a hit.
    pub fn consume_mark(&mut self, id: ObstacleId) -> bool {
        self.marks.remove(&id)
    }

    /// Snapshot of every obstacle overlapping `area`.
    ///
    /// Returned as owned ids so callers can mutate the registry afterwards.
    pub fn hits(&self, area: &Rect) -> Vec<ObstacleId> {
        self.obstacles
            .values()
            .filter(|o| o.has_collision(area))
            .map(|o| o.id)
            .collect()
    }

    /// Mark every obstacle overlapping `area`. Returns how many were hit.
    pub fn mark_hits(&mut self, area: &Rect) -> usize {
        let hits = self.hits(area);
        for id in &hits {
            self.mark(*id);
        }
        hits.len()
    }
}
