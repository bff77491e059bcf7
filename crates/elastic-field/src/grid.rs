//! Lattice construction.

use alloc::vec::Vec;
use core::fmt;

use crate::point::Point;

/// An ordered, row-major collection of points covering the surface.
///
/// A grid is never resized in place: a new surface size means a new grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    points: Vec<Point>,
    rows: usize,
    cols: usize,
}

/// Number of lattice intervals needed to span `extent`.
fn intervals(extent: f32, spacing: f32) -> usize {
    if !extent.is_finite() || extent <= 0.0 || !(spacing > 0.0) {
        return 0;
    }
    libm::ceilf(extent / spacing) as usize
}

impl Grid {
    /// Build a lattice from `(0, 0)` to `(ceil(width / spacing) * spacing,
    /// ceil(height / spacing) * spacing)` inclusive.
    ///
    /// Both axes carry one extra point past the last full interval so the
    /// far edges of the surface are always covered. Points are produced row
    /// by row, each at rest. Non-positive dimensions collapse to the single
    /// point at the origin, as does a non-positive spacing.
    ///
    /// # Arguments
    ///
    /// * `width`: Surface width.
    /// * `height`: Surface height.
    /// * `spacing`: Distance between adjacent rest positions.
    #[must_use]
    pub fn build(width: f32, height: f32, spacing: f32) -> Self {
        let rows = intervals(height, spacing) + 1;
        let cols = intervals(width, spacing) + 1;

        let mut points = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                points.push(Point::at_rest(col as f32 * spacing, row as f32 * spacing));
            }
        }

        Grid { points, rows, cols }
    }

    /// Points in row-major order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Mutable access for the physics step. The slice length is fixed.
    pub fn points_mut(&mut self) -> &mut [Point] {
        &mut self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the grid holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of lattice rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of lattice columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Iterate over the points in row-major order.
    pub fn iter(&self) -> core::slice::Iter<'_, Point> {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Point;
    type IntoIter = core::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid ({}x{}, {} points)", self.cols, self.rows, self.points.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::REST_BRIGHTNESS;

    #[test]
    fn test_empty_surface_yields_origin() {
        let grid = Grid::build(0.0, 0.0, 30.0);
        assert_eq!(grid.len(), 1);
        let p = grid.points()[0];
        assert_eq!((p.x, p.y), (0.0, 0.0));
        assert!(p.is_at_rest());
    }

    #[test]
    fn test_point_count_includes_far_edge() {
        // rows = ceil(60/30) + 1 = 3, cols = ceil(90/30) + 1 = 4
        let grid = Grid::build(90.0, 60.0, 30.0);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.len(), 12);
        for p in &grid {
            assert_eq!(p.home_x(), p.x);
            assert_eq!(p.home_y(), p.y);
            assert_eq!(p.brightness, REST_BRIGHTNESS);
            assert_eq!((p.velocity_x, p.velocity_y), (0.0, 0.0));
        }
    }

    #[test]
    fn test_partial_interval_rounds_up() {
        // 100 / 30 = 3.33 -> 4 intervals -> 5 columns, last at x = 120
        let grid = Grid::build(100.0, 10.0, 30.0);
        assert_eq!(grid.cols(), 5);
        assert_eq!(grid.rows(), 2);
        let last = grid.points().last().unwrap();
        assert_eq!((last.x, last.y), (120.0, 30.0));
    }

    #[test]
    fn test_row_major_order() {
        let grid = Grid::build(60.0, 30.0, 30.0);
        let coords: Vec<(f32, f32)> = grid.iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(
            coords,
            vec![
                (0.0, 0.0), (30.0, 0.0), (60.0, 0.0),
                (0.0, 30.0), (30.0, 30.0), (60.0, 30.0),
            ]
        );
    }

    #[test]
    fn test_build_is_deterministic() {
        let a = Grid::build(640.0, 480.0, 30.0);
        let b = Grid::build(640.0, 480.0, 30.0);
        assert_eq!(a, b);
        assert_ne!(a.points().as_ptr(), b.points().as_ptr());
    }

    #[test]
    fn test_negative_dimensions_collapse() {
        let grid = Grid::build(-50.0, f32::NAN, 30.0);
        assert_eq!(grid.len(), 1);
    }

    #[test]
    fn test_display() {
        let grid = Grid::build(90.0, 60.0, 30.0);
        assert_eq!(format!("{}", grid), "Grid (4x3, 12 points)");
    }
}
