//! Darts Arcade - a click-to-throw dartboard simulation
//!
//! Core modules:
//! - `board`: Board spec, ring/sector classification, scoring and wedge geometry
//! - `sim`: Throw perturbation and the game session state machine
//! - `renderer`: Colored triangle meshes for an external renderer
//! - `settings`: JSON configuration and validation

pub mod board;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use board::{BoardSpec, BoardSpecError, Ring, ScoreResult, generate_wedge_geometry, resolve};
pub use settings::{ConfigError, Settings};
pub use sim::{GamePhase, GameSession, Hit, perturb};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Drawing surface the default board is centered on
    pub const SURFACE_WIDTH: f32 = 800.0;
    pub const SURFACE_HEIGHT: f32 = 600.0;

    /// Board outer radius in pixels
    pub const BOARD_RADIUS: f32 = 250.0;

    /// Darts per game
    pub const THROWS_PER_GAME: u32 = 10;
    /// Maximum per-axis throw inaccuracy in pixels
    pub const DEVIATION: u32 = 20;

    /// Numbered wedges around the board
    pub const SECTOR_COUNT: usize = 20;
    /// Angular width of one wedge (degrees)
    pub const SECTOR_SPAN_DEG: f32 = 360.0 / SECTOR_COUNT as f32;

    /// Distance outside the board edge where numbers are drawn
    pub const LABEL_OFFSET: f32 = 25.0;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if a >= 360.0 { 0.0 } else { a }
}

/// Convert a screen angle (0° = east, clockwise positive with +y down) to a
/// clockwise bearing from north in [0, 360)
#[inline]
pub fn screen_angle_to_bearing(angle_deg: f32) -> f32 {
    normalize_degrees(angle_deg + 90.0)
}

/// Clockwise bearing from north of an offset from the board center.
///
/// Screen space has +y pointing down, so `atan2(dy, dx)` already grows
/// clockwise and only needs re-anchoring from east to north.
#[inline]
pub fn offset_to_bearing(offset: Vec2) -> f32 {
    screen_angle_to_bearing(offset.y.atan2(offset.x).to_degrees())
}

/// Offset from the board center at a clockwise bearing from north
#[inline]
pub fn bearing_to_offset(bearing_deg: f32, radius: f32) -> Vec2 {
    let theta = (bearing_deg - 90.0).to_radians();
    Vec2::new(radius * theta.cos(), radius * theta.sin())
}
