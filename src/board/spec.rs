//! Immutable board configuration
//!
//! A `BoardSpec` can only be built through validation, so every consumer may
//! assume ordered ring proportions and a complete sector permutation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::sector::DART_NUMBERS;
use crate::consts::{BOARD_RADIUS, SECTOR_COUNT, SURFACE_HEIGHT, SURFACE_WIDTH};

/// Errors raised when a board configuration violates its invariants.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BoardSpecError {
    #[error("board radius must be positive and finite (got {0})")]
    InvalidRadius(f32),
    #[error("board center must be finite (got {x}, {y})")]
    InvalidCenter { x: f32, y: f32 },
    #[error("ring {name} proportion must be positive and finite (got {value})")]
    InvalidProportion { name: &'static str, value: f32 },
    #[error("ring {inner} ({inner_value}) must lie strictly inside ring {outer} ({outer_value})")]
    RingOrder {
        inner: &'static str,
        inner_value: f32,
        outer: &'static str,
        outer_value: f32,
    },
    #[error("outer board proportion must be exactly 1.0 (got {0})")]
    OuterBoard(f32),
    #[error("expected {expected} sector numbers, got {got}")]
    SectorCount { expected: usize, got: usize },
    #[error("sector number {0} is outside 1..=20")]
    SectorOutOfRange(u8),
    #[error("sector number {0} appears more than once")]
    DuplicateSector(u8),
}

/// Ring radii as proportions of the board radius, center outward
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingProportions {
    pub inner_bull: f32,
    pub outer_bull: f32,
    pub single_inner: f32,
    pub triple_inner: f32,
    pub triple_outer: f32,
    pub single_outer: f32,
    pub double_inner: f32,
    pub outer_board: f32,
}

impl Default for RingProportions {
    fn default() -> Self {
        Self {
            inner_bull: 0.05,
            outer_bull: 0.12,
            single_inner: 0.25,
            triple_inner: 0.47,
            triple_outer: 0.57,
            single_outer: 0.62,
            double_inner: 0.90,
            outer_board: 1.00,
        }
    }
}

impl RingProportions {
    /// Proportions paired with their names, center outward
    pub fn named(&self) -> [(&'static str, f32); 8] {
        [
            ("inner_bull", self.inner_bull),
            ("outer_bull", self.outer_bull),
            ("single_inner", self.single_inner),
            ("triple_inner", self.triple_inner),
            ("triple_outer", self.triple_outer),
            ("single_outer", self.single_outer),
            ("double_inner", self.double_inner),
            ("outer_board", self.outer_board),
        ]
    }

    pub fn validate(&self) -> Result<(), BoardSpecError> {
        let named = self.named();
        for &(name, value) in &named {
            if !value.is_finite() || value <= 0.0 {
                return Err(BoardSpecError::InvalidProportion { name, value });
            }
        }
        for pair in named.windows(2) {
            let (inner, inner_value) = pair[0];
            let (outer, outer_value) = pair[1];
            if inner_value >= outer_value {
                return Err(BoardSpecError::RingOrder {
                    inner,
                    inner_value,
                    outer,
                    outer_value,
                });
            }
        }
        if self.outer_board != 1.0 {
            return Err(BoardSpecError::OuterBoard(self.outer_board));
        }
        Ok(())
    }
}

/// Validated board geometry and numbering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardSpec {
    radius: f32,
    center: Vec2,
    rings: RingProportions,
    numbers: [u8; SECTOR_COUNT],
}

impl Default for BoardSpec {
    /// Standard board centered on the default drawing surface
    fn default() -> Self {
        Self {
            radius: BOARD_RADIUS,
            center: Vec2::new(SURFACE_WIDTH / 2.0, SURFACE_HEIGHT / 2.0),
            rings: RingProportions::default(),
            numbers: DART_NUMBERS,
        }
    }
}

impl BoardSpec {
    pub fn new(
        radius: f32,
        center: Vec2,
        rings: RingProportions,
        numbers: &[u8],
    ) -> Result<Self, BoardSpecError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(BoardSpecError::InvalidRadius(radius));
        }
        if !center.is_finite() {
            return Err(BoardSpecError::InvalidCenter {
                x: center.x,
                y: center.y,
            });
        }
        rings.validate()?;

        let numbers: [u8; SECTOR_COUNT] =
            numbers
                .try_into()
                .map_err(|_| BoardSpecError::SectorCount {
                    expected: SECTOR_COUNT,
                    got: numbers.len(),
                })?;
        let mut seen = [false; SECTOR_COUNT];
        for &n in &numbers {
            if !(1..=SECTOR_COUNT as u8).contains(&n) {
                return Err(BoardSpecError::SectorOutOfRange(n));
            }
            let slot = &mut seen[usize::from(n) - 1];
            if *slot {
                return Err(BoardSpecError::DuplicateSector(n));
            }
            *slot = true;
        }

        Ok(Self {
            radius,
            center,
            rings,
            numbers,
        })
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    #[inline]
    pub fn rings(&self) -> &RingProportions {
        &self.rings
    }

    /// Sector numbers, clockwise from the top
    #[inline]
    pub fn numbers(&self) -> &[u8; SECTOR_COUNT] {
        &self.numbers
    }

    /// Number printed on the wedge at `index` (wraps modulo 20)
    #[inline]
    pub fn number_at(&self, index: usize) -> u8 {
        self.numbers[index % SECTOR_COUNT]
    }

    /// Absolute radius of a ring proportion
    #[inline]
    pub fn ring_radius(&self, proportion: f32) -> f32 {
        self.radius * proportion
    }
}
