//! Radial ring classification
//!
//! The board is a stack of concentric bands, each owning the radii up to and
//! including its outer edge. Classification and wedge geometry both walk
//! `RingProportions::bands`, so they cannot disagree about where a ring ends.

use serde::{Deserialize, Serialize};

use super::spec::RingProportions;

/// Score-multiplier band a point falls in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ring {
    InnerBull,
    OuterBull,
    /// Single band between the bull and the triple ring
    SingleInner,
    Triple,
    /// Single band between the triple and the double ring
    SingleOuter,
    Double,
    Miss,
}

impl Ring {
    pub fn name(self) -> &'static str {
        match self {
            Ring::InnerBull => "Inner Bull",
            Ring::OuterBull => "Outer Bull",
            Ring::SingleInner | Ring::SingleOuter => "Single",
            Ring::Triple => "Triple",
            Ring::Double => "Double",
            Ring::Miss => "Miss",
        }
    }

    /// Multiplier applied to the sector number (0 for bulls and misses)
    pub fn multiplier(self) -> u32 {
        match self {
            Ring::SingleInner | Ring::SingleOuter => 1,
            Ring::Double => 2,
            Ring::Triple => 3,
            Ring::InnerBull | Ring::OuterBull | Ring::Miss => 0,
        }
    }

    /// Bulls score the same regardless of angle
    pub fn is_bull(self) -> bool {
        matches!(self, Ring::InnerBull | Ring::OuterBull)
    }
}

/// One concentric band, as proportions of the board radius
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub ring: Ring,
    /// Exclusive inner edge (0 for the inner bull)
    pub inner: f32,
    /// Inclusive outer edge
    pub outer: f32,
}

impl Band {
    /// Wedge-shaped bands get one polygon per sector
    pub fn is_sector_dependent(&self) -> bool {
        !self.ring.is_bull()
    }
}

impl RingProportions {
    /// All bands, center outward.
    ///
    /// The single ring inside the triple is split at `single_inner` and both
    /// halves score as singles. Everything from `single_outer` to the board
    /// edge is the double ring.
    pub fn bands(&self) -> [Band; 8] {
        let band = |ring, inner, outer| Band { ring, inner, outer };
        [
            band(Ring::InnerBull, 0.0, self.inner_bull),
            band(Ring::OuterBull, self.inner_bull, self.outer_bull),
            band(Ring::SingleInner, self.outer_bull, self.single_inner),
            band(Ring::SingleInner, self.single_inner, self.triple_inner),
            band(Ring::Triple, self.triple_inner, self.triple_outer),
            band(Ring::SingleOuter, self.triple_outer, self.single_outer),
            band(Ring::Double, self.single_outer, self.double_inner),
            band(Ring::Double, self.double_inner, self.outer_board),
        ]
    }
}

/// Classify a normalized radius (distance / board radius).
///
/// Boundary radii belong to the inner band; anything past the outer board
/// edge is a miss.
pub fn classify(normalized_radius: f32, rings: &RingProportions) -> Ring {
    rings
        .bands()
        .iter()
        .find(|band| normalized_radius <= band.outer)
        .map_or(Ring::Miss, |band| band.ring)
}
