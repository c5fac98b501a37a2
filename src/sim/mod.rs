// src/sim/mod.rs
// The game board: both agents, the obstacle, and the isochrone grid, with
// the per-tick update entry point the outer rendering layer drives.

use log::info;
use serde::{Deserialize, Serialize};

use crate::agents::{Evader, Pursuer};
use crate::geom::{GeometryError, Obstacle, Point2D};
use crate::grid::{IsochroneGrid, DEFAULT_GRID_STEP, DEFAULT_TOLERANCE};

/// All numeric parameters of a simulation. No shared defaults: every board
/// built from a config owns its own obstacle and agents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    pub pursuer_position: Point2D,
    pub pursuer_speed: f64,
    pub evader_position: Point2D,
    pub evader_speed: f64,
    pub obstacle_center: Point2D,
    pub obstacle_radius: f64,
    pub obstacle_shape: String,
    pub board_half_extent: f64,
    pub grid_step: f64,
    pub tolerance: f64,
}

impl Default for SimConfig {
    /// The reference scenario: radius-5 obstacle at the origin, a faster
    /// pursuer starting at (6, -10) and a slower evader at (0, 10).
    fn default() -> Self {
        SimConfig {
            pursuer_position: Point2D::new(6.0, -10.0),
            pursuer_speed: 0.1,
            evader_position: Point2D::new(0.0, 10.0),
            evader_speed: 0.05,
            obstacle_center: Point2D::new(0.0, 0.0),
            obstacle_radius: 5.0,
            obstacle_shape: "circle".to_string(),
            board_half_extent: 40.0,
            grid_step: DEFAULT_GRID_STEP,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

/// A running pursuit-evasion simulation.
pub struct Board {
    pursuer: Pursuer,
    evader: Evader,
    obstacle: Obstacle,
    half_extent: f64,
    grid_step: f64,
    grid: IsochroneGrid,
}

impl Board {
    /// Validates the configuration (obstacle shape, agent start positions)
    /// and builds the board. The isochrone grid starts empty; call
    /// [`Board::compute_isochrones`] to populate it.
    pub fn new(config: &SimConfig) -> Result<Self, GeometryError> {
        let obstacle = Obstacle::from_config(
            config.obstacle_center,
            &config.obstacle_shape,
            config.obstacle_radius,
        )?;
        if obstacle.contains(&config.evader_position) {
            return Err(GeometryError::DegenerateGeometry {
                x: config.evader_position.x,
                y: config.evader_position.y,
            });
        }
        let pursuer = Pursuer::new(
            config.pursuer_position,
            config.pursuer_speed,
            config.board_half_extent,
            obstacle,
        )?;
        let evader = Evader::new(
            config.evader_position,
            config.evader_speed,
            config.board_half_extent,
            obstacle,
        );
        let grid = IsochroneGrid::new(
            pursuer.position(),
            pursuer.speed(),
            evader.position(),
            evader.speed(),
            obstacle,
            config.board_half_extent,
            config.grid_step,
        );
        Ok(Board {
            pursuer,
            evader,
            obstacle,
            half_extent: config.board_half_extent,
            grid_step: config.grid_step,
            grid,
        })
    }

    /// Advances the simulation by exactly one tick: the pursuer steps
    /// first, then the evader. Callers observe the effect through the read
    /// accessors.
    pub fn update(&mut self) -> Result<(), GeometryError> {
        let evader_position = self.evader.position();
        self.pursuer.step(&evader_position)?;
        let pursuer_position = self.pursuer.position();
        self.evader.step(&pursuer_position)?;
        Ok(())
    }

    /// Rebuilds the isochrone grid against the agents' current positions.
    /// The previous snapshot is discarded wholesale.
    pub fn compute_isochrones(&mut self, tolerance: f64) -> Result<(), GeometryError> {
        let mut grid = IsochroneGrid::new(
            self.pursuer.position(),
            self.pursuer.speed(),
            self.evader.position(),
            self.evader.speed(),
            self.obstacle,
            self.half_extent,
            self.grid_step,
        );
        grid.build(tolerance)?;
        self.grid = grid;
        info!("isochrones computed");
        Ok(())
    }

    pub fn pursuer(&self) -> &Pursuer {
        &self.pursuer
    }

    pub fn evader(&self) -> &Evader {
        &self.evader
    }

    pub fn obstacle(&self) -> &Obstacle {
        &self.obstacle
    }

    pub fn half_extent(&self) -> f64 {
        self.half_extent
    }

    /// The last built isochrone grid (empty until the first
    /// [`Board::compute_isochrones`] call).
    pub fn grid(&self) -> &IsochroneGrid {
        &self.grid
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Game board:\n{}\n{}\n{}\nHalf-extent: {}",
            self.pursuer, self.evader, self.obstacle, self.half_extent
        )
    }
}
