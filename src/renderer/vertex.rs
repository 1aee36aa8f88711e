//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Map surface pixels (origin top-left, +y down) to normalized device
/// coordinates (-1..1, +y up)
pub fn surface_to_ndc(vertices: &mut [Vertex], width: f32, height: f32) {
    for v in vertices {
        let [x, y] = v.position;
        v.position = [x / width * 2.0 - 1.0, 1.0 - y / height * 2.0];
    }
}

/// Raw little-endian bytes ready for a GPU vertex buffer
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

const fn rgb(r: u8, g: u8, b: u8) -> [f32; 4] {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

/// Colors for board elements
pub mod colors {
    use super::rgb;

    pub const BOARD: [f32; 4] = rgb(10, 10, 10);
    pub const SINGLE_EVEN: [f32; 4] = rgb(30, 150, 60);
    pub const SINGLE_ODD: [f32; 4] = rgb(180, 30, 30);
    pub const SCORING_EVEN: [f32; 4] = rgb(210, 170, 30);
    pub const SCORING_ODD: [f32; 4] = rgb(240, 240, 240);
    pub const OUTER_BULL: [f32; 4] = rgb(30, 150, 60);
    pub const INNER_BULL: [f32; 4] = rgb(180, 30, 30);
    pub const RING_LINE: [f32; 4] = rgb(40, 40, 40);
    pub const HIT_DOT: [f32; 4] = rgb(240, 240, 240);
    pub const HIT_OUTLINE: [f32; 4] = rgb(10, 10, 10);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
        let vertices = [Vertex::new(1.0, 2.0, colors::BOARD); 3];
        assert_eq!(as_bytes(&vertices).len(), 72);
    }

    #[test]
    fn test_surface_to_ndc() {
        let mut vertices = [
            Vertex::new(0.0, 0.0, colors::BOARD),
            Vertex::new(400.0, 300.0, colors::BOARD),
            Vertex::new(800.0, 600.0, colors::BOARD),
        ];
        surface_to_ndc(&mut vertices, 800.0, 600.0);
        assert_eq!(vertices[0].position, [-1.0, 1.0]);
        assert_eq!(vertices[1].position, [0.0, 0.0]);
        assert_eq!(vertices[2].position, [1.0, -1.0]);
    }
}
