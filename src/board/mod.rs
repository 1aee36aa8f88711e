//! Dartboard model
//!
//! Pure functions over an immutable `BoardSpec`:
//! - Sector numbering and angular sector lookup
//! - Radial ring classification
//! - Point scoring
//! - Wedge/ring polygon geometry for rendering
//!
//! Scoring and geometry share the bearing convention in the crate root and
//! the band table in `ring`, so drawn boundaries always match scored ones.

pub mod geometry;
pub mod ring;
pub mod score;
pub mod sector;
pub mod spec;

pub use geometry::{
    BullDisc, LabelAnchor, WedgeArc, WedgePolygon, boundary_radii, bull_geometry,
    generate_wedge_geometry, label_anchors,
};
pub use ring::{Band, Ring, classify};
pub use score::{ScoreResult, resolve};
pub use sector::{DART_NUMBERS, angle_to_number, sector_bearings, sector_index};
pub use spec::{BoardSpec, BoardSpecError, RingProportions};
