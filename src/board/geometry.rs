//! Wedge and ring geometry for rendering
//!
//! In board polar coordinates, a wedge is defined by:
//! - inner/outer radius: radial extent in pixels
//! - bearing_start, bearing_end: clockwise angular extent from north (degrees)
//!
//! Bearings use the same convention as scoring, so polygon edges sit exactly
//! on the boundaries `resolve` uses.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ring::{Band, Ring};
use super::sector::sector_bearings;
use super::spec::BoardSpec;
use crate::bearing_to_offset;
use crate::consts::{LABEL_OFFSET, SECTOR_COUNT, SECTOR_SPAN_DEG};

/// Minimum samples along each arc of a wedge
const MIN_ARC_STEPS: usize = 16;
/// Samples for a full circle (bull discs)
const CIRCLE_STEPS: usize = 72;

/// A thickened arc between two radii, relative to the board center
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WedgeArc {
    pub inner_radius: f32,
    pub outer_radius: f32,
    /// Start bearing (degrees clockwise from north)
    pub bearing_start: f32,
    /// End bearing, greater than `bearing_start`
    pub bearing_end: f32,
}

impl WedgeArc {
    pub fn new(inner_radius: f32, outer_radius: f32, bearing_start: f32, bearing_end: f32) -> Self {
        Self {
            inner_radius,
            outer_radius,
            bearing_start,
            bearing_end,
        }
    }

    /// Angular span in degrees
    #[inline]
    pub fn angular_span(&self) -> f32 {
        self.bearing_end - self.bearing_start
    }

    /// Arc resolution: one step per 2° with a floor of 16
    pub fn steps(&self) -> usize {
        MIN_ARC_STEPS.max((self.angular_span() / 2.0) as usize)
    }

    /// Sample the outer edge from start to end bearing
    pub fn sample_outer_edge(&self, center: Vec2) -> Vec<Vec2> {
        self.sample_edge(center, self.outer_radius, false)
    }

    /// Sample the inner edge from end back to start bearing
    pub fn sample_inner_edge(&self, center: Vec2) -> Vec<Vec2> {
        self.sample_edge(center, self.inner_radius, true)
    }

    fn sample_edge(&self, center: Vec2, radius: f32, reverse: bool) -> Vec<Vec2> {
        let steps = self.steps();
        let span = self.angular_span();

        (0..=steps)
            .map(|i| {
                let t = i as f32 / steps as f32;
                let t = if reverse { 1.0 - t } else { t };
                center + bearing_to_offset(self.bearing_start + t * span, radius)
            })
            .collect()
    }

    /// Closed outline: outer arc forward, inner arc in reverse
    pub fn outline(&self, center: Vec2) -> Vec<Vec2> {
        let mut points = self.sample_outer_edge(center);
        points.extend(self.sample_inner_edge(center));
        points
    }
}

#[cfg(test)]
impl WedgeArc {
    /// Point at a fractional position inside the wedge (0..1 along each axis)
    pub fn interior_point(&self, center: Vec2, radial_t: f32, angular_t: f32) -> Vec2 {
        let radius = self.inner_radius + (self.outer_radius - self.inner_radius) * radial_t;
        let bearing = self.bearing_start + self.angular_span() * angular_t;
        center + bearing_to_offset(bearing, radius)
    }
}

/// Polygon for one (band, sector) cell of the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WedgePolygon {
    pub ring: Ring,
    /// Index into `RingProportions::bands`
    pub band: usize,
    /// Wedge index, clockwise from the top
    pub sector: usize,
    /// Board number printed on this wedge
    pub number: u8,
    pub arc: WedgeArc,
    /// Closed loop, outer arc then inner arc reversed
    pub points: Vec<Vec2>,
}

#[cfg(test)]
impl WedgePolygon {
    /// Even-odd point-in-polygon test against the sampled outline
    pub fn contains(&self, point: Vec2) -> bool {
        let n = self.points.len();
        if n < 3 {
            return false;
        }

        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[j];
            if (a.y > point.y) != (b.y > point.y)
                && point.x < (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }
}

/// Generate one polygon per sector-dependent band and sector
pub fn generate_wedge_geometry(board: &BoardSpec) -> Vec<WedgePolygon> {
    let center = board.center();
    let bands = board.rings().bands();

    let mut polygons = Vec::with_capacity(bands.len() * SECTOR_COUNT);
    for (band_index, band) in bands.iter().enumerate() {
        if !band.is_sector_dependent() {
            continue;
        }
        for sector in 0..SECTOR_COUNT {
            let (start, end) = sector_bearings(sector);
            let arc = WedgeArc::new(
                board.ring_radius(band.inner),
                board.ring_radius(band.outer),
                start,
                end,
            );
            polygons.push(WedgePolygon {
                ring: band.ring,
                band: band_index,
                sector,
                number: board.number_at(sector),
                arc,
                points: arc.outline(center),
            });
        }
    }
    polygons
}

/// A filled bull disc
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BullDisc {
    pub ring: Ring,
    pub radius: f32,
    pub points: Vec<Vec2>,
}

/// Bull discs, outer first so the inner bull draws on top
pub fn bull_geometry(board: &BoardSpec) -> Vec<BullDisc> {
    let center = board.center();
    let bulls: Vec<Band> = board
        .rings()
        .bands()
        .into_iter()
        .filter(|band| band.ring.is_bull())
        .collect();

    bulls
        .iter()
        .rev()
        .map(|band| {
            let radius = board.ring_radius(band.outer);
            let points = (0..CIRCLE_STEPS)
                .map(|i| {
                    let bearing = i as f32 * 360.0 / CIRCLE_STEPS as f32;
                    center + bearing_to_offset(bearing, radius)
                })
                .collect();
            BullDisc {
                ring: band.ring,
                radius,
                points,
            }
        })
        .collect()
}

/// Radii of the ring outlines drawn between bands (excludes the board edge)
pub fn boundary_radii(board: &BoardSpec) -> Vec<f32> {
    let bands = board.rings().bands();
    bands[..bands.len() - 1]
        .iter()
        .rev()
        .map(|band| board.ring_radius(band.outer))
        .collect()
}

/// Where a sector number is printed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelAnchor {
    pub number: u8,
    pub position: Vec2,
}

/// Number anchors just outside the board, centered on each wedge
pub fn label_anchors(board: &BoardSpec) -> Vec<LabelAnchor> {
    let radius = board.radius() + LABEL_OFFSET;
    (0..SECTOR_COUNT)
        .map(|sector| LabelAnchor {
            number: board.number_at(sector),
            position: board.center() + bearing_to_offset(sector as f32 * SECTOR_SPAN_DEG, radius),
        })
        .collect()
}
