//! Board mesh generation
//!
//! Turns board geometry and hit history into colored triangles. No graphics
//! API is touched here; the output is plain vertex data for whatever surface
//! draws the board.

pub mod shapes;
pub mod vertex;

pub use shapes::{board_mesh, hit_markers};
pub use vertex::{Vertex, colors};
