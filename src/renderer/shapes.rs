//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};
use crate::board::{BoardSpec, Ring, WedgePolygon, boundary_radii, bull_geometry, generate_wedge_geometry};
use crate::sim::Hit;

/// Segments used for full circles (board disc, outlines, hit markers)
const CIRCLE_SEGMENTS: u32 = 90;
/// Hit marker radius in pixels
const HIT_RADIUS: f32 = 5.0;
/// Ring outline width in pixels
const LINE_WIDTH: f32 = 1.0;

/// Alternating wedge color for a band and sector
pub fn wedge_color(ring: Ring, sector: usize) -> [f32; 4] {
    let even = sector % 2 == 0;
    match ring {
        Ring::Triple | Ring::Double if even => colors::SCORING_EVEN,
        Ring::Triple | Ring::Double => colors::SCORING_ODD,
        Ring::OuterBull => colors::OUTER_BULL,
        Ring::InnerBull => colors::INNER_BULL,
        _ if even => colors::SINGLE_EVEN,
        _ => colors::SINGLE_ODD,
    }
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a ring (hollow circle)
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        let dir1 = Vec2::new(theta1.cos(), theta1.sin());
        let dir2 = Vec2::new(theta2.cos(), theta2.sin());
        let inner1 = center + dir1 * inner_radius;
        let outer1 = center + dir1 * outer_radius;
        let inner2 = center + dir2 * inner_radius;
        let outer2 = center + dir2 * outer_radius;

        quad(&mut vertices, inner1, outer1, inner2, outer2, color);
    }

    vertices
}

/// Triangle fan over a closed convex outline
pub fn fan(center: Vec2, outline: &[Vec2], color: [f32; 4]) -> Vec<Vertex> {
    let n = outline.len();
    let mut vertices = Vec::with_capacity(n * 3);
    for i in 0..n {
        let a = outline[i];
        let b = outline[(i + 1) % n];
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(a.x, a.y, color));
        vertices.push(Vertex::new(b.x, b.y, color));
    }
    vertices
}

/// Generate vertices for a wedge polygon (thick arc band).
///
/// The outline holds the outer arc forward then the inner arc reversed, so
/// outer sample `k` pairs with the `k`-th point from the end.
pub fn wedge(polygon: &WedgePolygon, color: [f32; 4]) -> Vec<Vertex> {
    let points = &polygon.points;
    let n = points.len();
    let half = n / 2;
    if half < 2 {
        return Vec::new();
    }

    let mut vertices = Vec::with_capacity((half - 1) * 6);
    for k in 0..half - 1 {
        let outer1 = points[k];
        let outer2 = points[k + 1];
        let inner1 = points[n - 1 - k];
        let inner2 = points[n - 2 - k];
        quad(&mut vertices, inner1, outer1, inner2, outer2, color);
    }
    vertices
}

fn quad(vertices: &mut Vec<Vertex>, inner1: Vec2, outer1: Vec2, inner2: Vec2, outer2: Vec2, color: [f32; 4]) {
    // Two triangles per segment
    vertices.push(Vertex::new(inner1.x, inner1.y, color));
    vertices.push(Vertex::new(outer1.x, outer1.y, color));
    vertices.push(Vertex::new(inner2.x, inner2.y, color));

    vertices.push(Vertex::new(inner2.x, inner2.y, color));
    vertices.push(Vertex::new(outer1.x, outer1.y, color));
    vertices.push(Vertex::new(outer2.x, outer2.y, color));
}

/// Full board in draw order: backing disc, wedges, bulls, ring outlines
pub fn board_mesh(board: &BoardSpec) -> Vec<Vertex> {
    let center = board.center();
    let mut vertices = circle(center, board.radius(), colors::BOARD, CIRCLE_SEGMENTS);

    for polygon in generate_wedge_geometry(board) {
        vertices.extend(wedge(&polygon, wedge_color(polygon.ring, polygon.sector)));
    }

    for disc in bull_geometry(board) {
        vertices.extend(fan(center, &disc.points, wedge_color(disc.ring, 0)));
    }

    for radius in boundary_radii(board) {
        vertices.extend(ring(
            center,
            radius - LINE_WIDTH / 2.0,
            radius + LINE_WIDTH / 2.0,
            colors::RING_LINE,
            CIRCLE_SEGMENTS,
        ));
    }

    vertices
}

/// Outlined dots at every recorded landing point
pub fn hit_markers(hits: &[Hit]) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    for hit in hits {
        vertices.extend(circle(hit.point, HIT_RADIUS, colors::HIT_DOT, CIRCLE_SEGMENTS));
        vertices.extend(ring(
            hit.point,
            HIT_RADIUS - LINE_WIDTH / 2.0,
            HIT_RADIUS + LINE_WIDTH / 2.0,
            colors::HIT_OUTLINE,
            CIRCLE_SEGMENTS,
        ));
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameSession;

    #[test]
    fn test_wedge_triangulation() {
        let board = BoardSpec::default();
        let polygon = &generate_wedge_geometry(&board)[0];
        let vertices = wedge(polygon, colors::SCORING_EVEN);
        // 16 arc steps, two triangles each
        assert_eq!(vertices.len(), 16 * 6);

        // Every vertex lies on the wedge's inner or outer radius
        for v in &vertices {
            let r = (Vec2::from(v.position) - board.center()).length();
            let on_inner = (r - polygon.arc.inner_radius).abs() < 1e-2;
            let on_outer = (r - polygon.arc.outer_radius).abs() < 1e-2;
            assert!(on_inner || on_outer, "radius {r}");
        }
    }

    #[test]
    fn test_wedge_colors_alternate() {
        assert_eq!(wedge_color(Ring::SingleInner, 0), colors::SINGLE_EVEN);
        assert_eq!(wedge_color(Ring::SingleOuter, 1), colors::SINGLE_ODD);
        assert_eq!(wedge_color(Ring::Triple, 0), colors::SCORING_EVEN);
        assert_eq!(wedge_color(Ring::Double, 3), colors::SCORING_ODD);
        assert_eq!(wedge_color(Ring::InnerBull, 0), colors::INNER_BULL);
    }

    #[test]
    fn test_board_mesh_size() {
        let board = BoardSpec::default();
        let segments = CIRCLE_SEGMENTS as usize;
        let expected = segments * 3           // backing disc
            + 120 * 16 * 6                    // wedges
            + 2 * 72 * 3                      // bulls
            + 7 * segments * 6; // outlines
        assert_eq!(board_mesh(&board).len(), expected);
    }

    #[test]
    fn test_hit_markers() {
        let mut session = GameSession::standard(3);
        assert!(hit_markers(session.hits()).is_empty());
        session.throw_dart(Vec2::new(400.0, 300.0));
        session.throw_dart(Vec2::new(400.0, 200.0));
        let per_hit = CIRCLE_SEGMENTS as usize * 9;
        assert_eq!(hit_markers(session.hits()).len(), 2 * per_hit);
    }
}
