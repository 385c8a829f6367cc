//! Grid math: coordinate snapping and path/cell collision tests.
//!
//! Pure functions, no simulation state.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::PATH_DISTANCE_FACTOR;
use crate::enums::PathCellPolicy;
use crate::types::Point;

/// Result of snapping a pixel coordinate to the grid: the containing cell
/// and its center in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSnap {
    pub x: f64,
    pub y: f64,
    pub col: i32,
    pub row: i32,
}

/// Map a pixel coordinate to the center of its containing cell.
pub fn snap_to_grid(x: f64, y: f64, cell_size: f64) -> GridSnap {
    let col = (x / cell_size).floor() as i32;
    let row = (y / cell_size).floor() as i32;
    GridSnap {
        x: col as f64 * cell_size + cell_size / 2.0,
        y: row as f64 * cell_size + cell_size / 2.0,
        col,
        row,
    }
}

/// Grid cell containing a path waypoint.
pub fn cell_of(p: &Point, cell_size: f64) -> (i32, i32) {
    (
        (p.x / cell_size).floor() as i32,
        (p.y / cell_size).floor() as i32,
    )
}

/// True iff cell `(col, row)` lies on the path under the given policy.
pub fn is_path_cell(
    col: i32,
    row: i32,
    path: &[Point],
    cell_size: f64,
    policy: PathCellPolicy,
) -> bool {
    match policy {
        PathCellPolicy::AxisAlignedSpan => span_contains(col, row, path, cell_size),
        PathCellPolicy::SegmentDistance => within_segment_distance(col, row, path, cell_size),
        PathCellPolicy::VertexOnly => vertex_coincides(col, row, path, cell_size),
    }
}

/// Segment-span test: for each consecutive waypoint pair, vertical segments
/// match the same column across the row span, horizontal segments the same
/// row across the column span.
fn span_contains(col: i32, row: i32, path: &[Point], cell_size: f64) -> bool {
    for pair in path.windows(2) {
        let (start_col, start_row) = cell_of(&pair[0], cell_size);
        let (end_col, end_row) = cell_of(&pair[1], cell_size);

        if start_col == end_col {
            if col == start_col
                && row >= start_row.min(end_row)
                && row <= start_row.max(end_row)
            {
                return true;
            }
        } else if start_row == end_row
            && row == start_row
            && col >= start_col.min(end_col)
            && col <= start_col.max(end_col)
        {
            return true;
        }
    }
    false
}

/// Distance test: cell center within `PATH_DISTANCE_FACTOR * cell_size` of
/// any path segment. Works for segments that are not axis-aligned.
fn within_segment_distance(col: i32, row: i32, path: &[Point], cell_size: f64) -> bool {
    let center = DVec2::new(
        col as f64 * cell_size + cell_size / 2.0,
        row as f64 * cell_size + cell_size / 2.0,
    );
    let threshold = PATH_DISTANCE_FACTOR * cell_size;

    path.windows(2).any(|pair| {
        point_segment_distance(center, pair[0].to_vec(), pair[1].to_vec()) <= threshold
    })
}

/// Vertex test: the cell coincides with some path vertex's cell.
fn vertex_coincides(col: i32, row: i32, path: &[Point], cell_size: f64) -> bool {
    path.iter().any(|p| cell_of(p, cell_size) == (col, row))
}

/// Distance from a point to a line segment.
fn point_segment_distance(p: DVec2, a: DVec2, b: DVec2) -> f64 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}
