//! Tic Tac Cube - 3D tic-tac-toe on a 3x3x3 grid of cubes
//!
//! Core modules:
//! - `game`: Pure game logic (board, win lines, turn state machine, events)
//! - `picking`: Pointer-to-cell resolution (rays, hitboxes, gesture classification)
//! - `camera`: View collaborator that turns screen positions into world rays
//! - `controller`: Wires picking into the game and fans events out to subscribers

pub mod camera;
pub mod controller;
pub mod game;
pub mod picking;

pub use controller::{GameController, Viewport};
pub use game::{Game, GameEvent, Player};

use glam::Vec3;

/// Game configuration constants
pub mod consts {
    /// Cells per axis
    pub const GRID_DIM: u8 = 3;
    /// Total number of cells
    pub const CELL_COUNT: usize = 27;

    /// Visual cube edge length (world units)
    pub const CUBE_SIZE: f32 = 0.4;
    /// Center-to-center spacing between adjacent cells
    pub const CELL_SPACING: f32 = CUBE_SIZE * 3.0;
    /// Hitboxes are scaled up from the visual cube to ease selection
    pub const HITBOX_SCALE: f32 = 1.2;

    /// A press drifting this many pixels or more on either axis is a drag
    pub const CLICK_MAX_DRIFT_PX: f32 = 5.0;
    /// A press held this long or longer belongs to the camera, not a cell
    pub const CLICK_MAX_DURATION_MS: f64 = 200.0;

    /// Default camera eye position (desktop scene framing)
    pub const CAMERA_EYE: [f32; 3] = [4.0, 3.5, 5.5];
    /// Vertical field of view in degrees
    pub const CAMERA_FOV_DEG: f32 = 45.0;
}

/// World-space center of a cell; the grid is centered on the origin
#[inline]
pub fn cell_center(cell: game::Cell) -> Vec3 {
    Vec3::new(
        (cell.x as f32 - 1.0) * consts::CELL_SPACING,
        (cell.y as f32 - 1.0) * consts::CELL_SPACING,
        (cell.z as f32 - 1.0) * consts::CELL_SPACING,
    )
}
