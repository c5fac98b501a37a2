// src/grid/mod.rs
// Dense evaluation of both agents' travel times over the whole board, and
// the isochrone locus where neither side has a decisive advantage.

use std::collections::HashMap;
use std::time::Instant;

use log::info;
use rayon::prelude::*;

use crate::geom::{GeometryError, Obstacle, Point2D};
use crate::planner::shortest_path;

/// Default sampling step along each axis, in distance units.
pub const DEFAULT_GRID_STEP: f64 = 0.1;

/// Default |time difference| below which a cell joins the isochrone.
pub const DEFAULT_TOLERANCE: f64 = 0.004;

/// Per-cell evaluation result.
///
/// `time_difference` is a first-arrival comparison, not a raw distance
/// difference: `pursuer_distance * evader_speed - evader_distance *
/// pursuer_speed`, so the slower agent is penalized accordingly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellValue {
    pub pursuer_distance: f64,
    pub evader_distance: f64,
    pub time_difference: f64,
}

/// A square grid of candidate positions, evaluated against a fixed snapshot
/// of both agents. Cells are keyed by integer sample indices; index `i`
/// along an axis maps to coordinate `-half_extent + i * step`, with both
/// boundaries included.
///
/// `build` recomputes every cell wholesale; there is no incremental update.
pub struct IsochroneGrid {
    pursuer_position: Point2D,
    pursuer_speed: f64,
    evader_position: Point2D,
    evader_speed: f64,
    obstacle: Obstacle,
    half_extent: f64,
    step: f64,
    cells: HashMap<(i32, i32), CellValue>,
    isochrones: Vec<Point2D>,
}

impl IsochroneGrid {
    pub fn new(
        pursuer_position: Point2D,
        pursuer_speed: f64,
        evader_position: Point2D,
        evader_speed: f64,
        obstacle: Obstacle,
        half_extent: f64,
        step: f64,
    ) -> Self {
        IsochroneGrid {
            pursuer_position,
            pursuer_speed,
            evader_position,
            evader_speed,
            obstacle,
            half_extent,
            step,
            cells: HashMap::new(),
            isochrones: Vec::new(),
        }
    }

    /// Number of samples along one axis, both boundaries inclusive.
    pub fn samples_per_axis(&self) -> usize {
        (2.0 * self.half_extent / self.step).round() as usize + 1
    }

    /// World coordinates of the sample with the given index key.
    pub fn cell_center(&self, key: (i32, i32)) -> Point2D {
        Point2D::new(
            -self.half_extent + key.0 as f64 * self.step,
            -self.half_extent + key.1 as f64 * self.step,
        )
    }

    /// Evaluates every cell and collects the isochrone point set.
    ///
    /// Columns are evaluated in parallel; each worker owns its own output
    /// vectors, which are merged in column order after the join, so repeat
    /// builds with unchanged inputs produce identical results. Samples
    /// inside the obstacle get the sentinel value `(0, 0, half_extent)`,
    /// keeping them far outside any sensible tolerance.
    pub fn build(&mut self, tolerance: f64) -> Result<(), GeometryError> {
        let started = Instant::now();
        self.cells.clear();
        self.isochrones.clear();

        let n = self.samples_per_axis() as i32;
        let columns: Result<Vec<_>, GeometryError> = (0..n)
            .into_par_iter()
            .map(|ix| self.build_column(ix, n, tolerance))
            .collect();

        for (cells, isochrone_points) in columns? {
            self.cells.extend(cells);
            self.isochrones.extend(isochrone_points);
        }

        info!(
            "isochrone grid built: {} cells, {} isochrone points, {:.2?} elapsed",
            self.cells.len(),
            self.isochrones.len(),
            started.elapsed()
        );
        Ok(())
    }

    fn build_column(
        &self,
        ix: i32,
        n: i32,
        tolerance: f64,
    ) -> Result<(Vec<((i32, i32), CellValue)>, Vec<Point2D>), GeometryError> {
        let mut cells = Vec::with_capacity(n as usize);
        let mut isochrone_points = Vec::new();

        for iy in 0..n {
            let point = self.cell_center((ix, iy));
            if self.obstacle.contains(&point) {
                // Unreachable/neutral: never joins the isochrone.
                cells.push((
                    (ix, iy),
                    CellValue {
                        pursuer_distance: 0.0,
                        evader_distance: 0.0,
                        time_difference: self.half_extent,
                    },
                ));
                continue;
            }

            let pursuer_distance =
                shortest_path(&self.obstacle, &point, &self.pursuer_position)?.length;
            let evader_distance =
                shortest_path(&self.obstacle, &point, &self.evader_position)?.length;
            let time_difference =
                pursuer_distance * self.evader_speed - evader_distance * self.pursuer_speed;

            cells.push((
                (ix, iy),
                CellValue {
                    pursuer_distance,
                    evader_distance,
                    time_difference,
                },
            ));
            if time_difference.abs() <= tolerance {
                isochrone_points.push(point);
            }
        }

        Ok((cells, isochrone_points))
    }

    pub fn cells(&self) -> &HashMap<(i32, i32), CellValue> {
        &self.cells
    }

    /// Isochrone points in deterministic column-major order.
    pub fn isochrones(&self) -> &[Point2D] {
        &self.isochrones
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn symmetric_grid() -> IsochroneGrid {
        IsochroneGrid::new(
            Point2D::new(2.0, 2.0),
            0.1,
            Point2D::new(-2.0, -2.0),
            0.1,
            Obstacle::circle(Point2D::new(0.0, 0.0), 0.5),
            2.0,
            1.0,
        )
    }

    #[test]
    fn test_cell_center_maps_indices_to_board() {
        let grid = symmetric_grid();
        assert_eq!(grid.samples_per_axis(), 5);
        assert_eq!(grid.cell_center((0, 0)), Point2D::new(-2.0, -2.0));
        assert_eq!(grid.cell_center((4, 4)), Point2D::new(2.0, 2.0));
        assert_eq!(grid.cell_center((2, 2)), Point2D::new(0.0, 0.0));
    }

    #[test]
    fn test_build_covers_every_sample() {
        let mut grid = symmetric_grid();
        grid.build(1e-9).unwrap();
        assert_eq!(grid.cells().len(), 25);
    }

    #[test]
    fn test_in_obstacle_cell_gets_sentinel() {
        let mut grid = symmetric_grid();
        grid.build(1e-9).unwrap();
        let center = grid.cells()[&(2, 2)];
        assert_eq!(center.pursuer_distance, 0.0);
        assert_eq!(center.evader_distance, 0.0);
        assert_approx_eq!(center.time_difference, 2.0);
    }

    #[test]
    fn test_equidistant_cells_join_isochrone() {
        // Equal speeds and mirror-image agents: the anti-diagonal corners
        // are exactly equidistant from both.
        let mut grid = symmetric_grid();
        grid.build(1e-9).unwrap();
        assert!(grid
            .isochrones()
            .iter()
            .any(|p| *p == Point2D::new(-2.0, 2.0)));
        assert!(grid
            .isochrones()
            .iter()
            .any(|p| *p == Point2D::new(2.0, -2.0)));

        let corner = grid.cells()[&(0, 4)];
        assert_approx_eq!(corner.time_difference, 0.0, 1e-12);
    }

    #[test]
    fn test_unequal_speeds_weight_time_difference() {
        let mut grid = IsochroneGrid::new(
            Point2D::new(2.0, 2.0),
            0.2,
            Point2D::new(-2.0, -2.0),
            0.1,
            Obstacle::circle(Point2D::new(0.0, 0.0), 0.5),
            2.0,
            1.0,
        );
        grid.build(1e-9).unwrap();
        // Equidistant corner: d * 0.1 - d * 0.2 < 0, the faster pursuer
        // arrives first.
        let corner = grid.cells()[&(0, 4)];
        assert_approx_eq!(corner.pursuer_distance, corner.evader_distance, 1e-12);
        assert!(corner.time_difference < 0.0);
    }

    #[test]
    fn test_build_is_idempotent() {
        let mut grid = symmetric_grid();
        grid.build(0.05).unwrap();
        let cells_first = grid.cells().clone();
        let isochrones_first = grid.isochrones().to_vec();

        grid.build(0.05).unwrap();
        assert_eq!(grid.cells(), &cells_first);
        assert_eq!(grid.isochrones(), &isochrones_first[..]);
    }

    #[test]
    fn test_agent_inside_obstacle_propagates_degenerate_error() {
        let mut grid = IsochroneGrid::new(
            Point2D::new(0.0, 0.0),
            0.1,
            Point2D::new(-2.0, -2.0),
            0.1,
            Obstacle::circle(Point2D::new(0.0, 0.0), 0.5),
            2.0,
            1.0,
        );
        let result = grid.build(1e-9);
        assert!(matches!(
            result,
            Err(GeometryError::DegenerateGeometry { .. })
        ));
    }
}
