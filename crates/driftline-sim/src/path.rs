//! Path provider — the single source of truth for the enemy route.
//!
//! Holds the polyline either fixed at construction or drifting: every
//! shift interval the whole path slides one cell toward the left edge,
//! waypoints that scrolled far enough off-screen are dropped, and one new
//! procedurally chosen waypoint is appended at the trailing end.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use driftline_core::config::{GridConfig, ShiftConfig};
use driftline_core::enums::PathMode;
use driftline_core::types::Point;

/// Owns the ordered waypoint polyline enemies follow.
#[derive(Debug, Clone)]
pub struct PathProvider {
    points: Vec<Point>,
    mode: PathMode,
    interval_ticks: u64,
    ticks_since_shift: u64,
    max_len: usize,
    cell_size: f64,
    rows: u32,
}

impl PathProvider {
    pub fn new(points: Vec<Point>, shift: &ShiftConfig, grid: &GridConfig) -> Self {
        Self {
            points,
            mode: shift.mode,
            interval_ticks: shift.interval_ticks,
            ticks_since_shift: 0,
            max_len: shift.max_path_len,
            cell_size: grid.cell_size,
            rows: grid.rows,
        }
    }

    /// The current route, spawn to base.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Advance the shift timer by one tick. Returns true when a shift is
    /// due; the timer resets and the caller performs the shift.
    pub fn advance(&mut self) -> bool {
        if self.mode != PathMode::Drifting {
            return false;
        }
        self.ticks_since_shift += 1;
        if self.ticks_since_shift >= self.interval_ticks {
            self.ticks_since_shift = 0;
            true
        } else {
            false
        }
    }

    /// Scroll the path one cell left, drop waypoints that are a full cell
    /// past the edge, and append one new waypoint adjacent to the end.
    ///
    /// Returns the number of leading waypoints removed so callers can
    /// remap enemy path indices.
    pub fn shift(&mut self, rng: &mut ChaCha8Rng) -> usize {
        let cell = self.cell_size;
        let mut dropped = 0;

        for p in &mut self.points {
            p.x -= cell;
        }

        // One-cell tolerance: a waypoint just off-screen may still be the
        // movement target of an enemy near the edge.
        while self.points.len() > 1 && self.points[0].x < -cell {
            self.points.remove(0);
            dropped += 1;
        }

        if let Some(last) = self.points.last().copied() {
            self.points.push(self.next_waypoint(last, rng));
        }

        while self.points.len() > self.max_len {
            self.points.remove(0);
            dropped += 1;
        }

        dropped
    }

    /// Choose the next waypoint: one cell right of `last`, with the row
    /// nudged up, down, or kept, clamped to the grid.
    fn next_waypoint(&self, last: Point, rng: &mut ChaCha8Rng) -> Point {
        let cell = self.cell_size;
        let last_row = (last.y / cell).floor() as i32;
        let delta: i32 = rng.gen_range(-1..=1);
        let row = (last_row + delta).clamp(0, self.rows as i32 - 1);
        Point::new(last.x + cell, row as f64 * cell + cell / 2.0)
    }
}

/// The default six-waypoint route, expressed in grid cells.
pub fn default_route(grid: &GridConfig) -> Vec<Point> {
    let c = grid.cell_size;
    let mid = c / 2.0;
    vec![
        Point::new(0.0, 4.0 * c + mid),
        Point::new(5.0 * c + mid, 4.0 * c + mid),
        Point::new(5.0 * c + mid, 2.0 * c + mid),
        Point::new(10.0 * c + mid, 2.0 * c + mid),
        Point::new(10.0 * c + mid, 6.0 * c + mid),
        Point::new(14.0 * c + mid, 6.0 * c + mid),
    ]
}
