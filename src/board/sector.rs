//! Sector numbering and angular lookup
//!
//! Sector `i` is centered on bearing `i * 18°` clockwise from north, so
//! sector 0 (the "20" on a standard board) straddles the top of the board.

use crate::consts::{SECTOR_COUNT, SECTOR_SPAN_DEG};
use crate::{normalize_degrees, screen_angle_to_bearing};

/// Standard dartboard numbering, clockwise starting at the top
pub const DART_NUMBERS: [u8; SECTOR_COUNT] = [
    20, 1, 18, 4, 13, 6, 10, 15, 2, 17, 3, 19, 7, 16, 8, 11, 14, 9, 12, 5,
];

/// Index of the wedge containing a clockwise bearing from north.
///
/// Floor bucketing: a bearing exactly on a boundary belongs to the wedge
/// whose range starts there.
#[inline]
pub fn sector_index(bearing_deg: f32) -> usize {
    let shifted = normalize_degrees(bearing_deg + SECTOR_SPAN_DEG / 2.0);
    (shifted / SECTOR_SPAN_DEG).floor() as usize % SECTOR_COUNT
}

/// Bearing range `[start, end)` covered by a wedge.
///
/// `start` is negative for sector 0, which wraps through north.
#[inline]
pub fn sector_bearings(index: usize) -> (f32, f32) {
    let mid = (index % SECTOR_COUNT) as f32 * SECTOR_SPAN_DEG;
    (mid - SECTOR_SPAN_DEG / 2.0, mid + SECTOR_SPAN_DEG / 2.0)
}

/// Board number under a screen angle (0° = east, clockwise with +y down)
pub fn angle_to_number(numbers: &[u8; SECTOR_COUNT], angle_deg: f32) -> u8 {
    numbers[sector_index(screen_angle_to_bearing(angle_deg))]
}
