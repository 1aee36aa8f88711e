//! Point scoring

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ring::{Ring, classify};
use super::sector::sector_index;
use super::spec::BoardSpec;
use crate::offset_to_bearing;

/// Points and description for a single impact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u32,
    pub ring: Ring,
    /// Wedge number, absent for bulls and misses
    pub sector: Option<u8>,
    pub label: String,
}

impl ScoreResult {
    pub fn miss() -> Self {
        Self {
            score: 0,
            ring: Ring::Miss,
            sector: None,
            label: Ring::Miss.name().to_string(),
        }
    }

    fn new(ring: Ring, number: u8) -> Self {
        match ring {
            Ring::Miss => Self::miss(),
            Ring::InnerBull => Self::bull(ring, 50),
            Ring::OuterBull => Self::bull(ring, 25),
            Ring::SingleInner | Ring::SingleOuter | Ring::Triple | Ring::Double => Self {
                score: ring.multiplier() * u32::from(number),
                ring,
                sector: Some(number),
                label: format!("{} {}", ring.name(), number),
            },
        }
    }

    fn bull(ring: Ring, score: u32) -> Self {
        Self {
            score,
            ring,
            sector: None,
            label: format!("{} ({})", ring.name(), score),
        }
    }

    pub fn is_miss(&self) -> bool {
        self.ring == Ring::Miss
    }
}

/// Score an impact point against a board
pub fn resolve(point: Vec2, board: &BoardSpec) -> ScoreResult {
    let offset = point - board.center();
    let distance = offset.length();
    if distance > board.radius() {
        return ScoreResult::miss();
    }

    let number = board.number_at(sector_index(offset_to_bearing(offset)));
    let ring = classify(distance / board.radius(), board.rings());
    ScoreResult::new(ring, number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bearing_to_offset;
    use proptest::prelude::*;

    fn at(board: &BoardSpec, bearing: f32, proportion: f32) -> Vec2 {
        board.center() + bearing_to_offset(bearing, board.ring_radius(proportion))
    }

    fn valid_scores() -> Vec<u32> {
        let mut scores = vec![0, 25, 50];
        for n in 1..=20 {
            scores.extend([n, 2 * n, 3 * n]);
        }
        scores
    }

    #[test]
    fn test_center_is_inner_bull() {
        let board = BoardSpec::default();
        let result = resolve(board.center(), &board);
        assert_eq!(result.score, 50);
        assert_eq!(result.ring, Ring::InnerBull);
        assert_eq!(result.label, "Inner Bull (50)");
        assert_eq!(result.sector, None);
    }

    #[test]
    fn test_outer_edge_is_double() {
        let board = BoardSpec::default();
        // Straight up, exactly one radius away
        let point = board.center() - Vec2::new(0.0, board.radius());
        let result = resolve(point, &board);
        assert_eq!(result.ring, Ring::Double);
        assert_eq!(result.score, 40);
        assert_eq!(result.label, "Double 20");
    }

    #[test]
    fn test_outside_board_is_miss() {
        let board = BoardSpec::default();
        let point = board.center() + Vec2::new(board.radius() + 0.5, 0.0);
        assert_eq!(resolve(point, &board), ScoreResult::miss());
        assert_eq!(resolve(Vec2::new(0.0, 0.0), &board).label, "Miss");
    }

    #[test]
    fn test_north_is_twenty_at_any_radius() {
        let board = BoardSpec::default();
        for proportion in [0.2, 0.3, 0.5, 0.6, 0.8, 0.95] {
            let result = resolve(at(&board, 0.0, proportion), &board);
            assert_eq!(result.sector, Some(20), "proportion {proportion}");
        }
    }

    #[test]
    fn test_wedge_clockwise_of_north_is_one() {
        let board = BoardSpec::default();
        let result = resolve(at(&board, 18.0, 0.3), &board);
        assert_eq!(result.sector, Some(1));
        assert_eq!(result.label, "Single 1");
    }

    #[test]
    fn test_multipliers_applied() {
        let board = BoardSpec::default();
        let triple = resolve(at(&board, 0.0, 0.52), &board);
        assert_eq!((triple.score, triple.label.as_str()), (60, "Triple 20"));

        let double = resolve(at(&board, 90.0, 0.95), &board);
        assert_eq!((double.score, double.label.as_str()), (12, "Double 6"));

        let outer_bull = resolve(at(&board, 200.0, 0.1), &board);
        assert_eq!((outer_bull.score, outer_bull.label.as_str()), (25, "Outer Bull (25)"));
    }

    #[test]
    fn test_single_bands_flank_triple() {
        let board = BoardSpec::default();
        for proportion in [0.15, 0.4, 0.6] {
            let result = resolve(at(&board, 180.0, proportion), &board);
            assert_eq!(result.score, 3, "proportion {proportion}");
            assert_eq!(result.label, "Single 3");
        }
    }

    #[test]
    fn test_double_ring_spans_single_outer_to_edge() {
        let board = BoardSpec::default();
        for proportion in [0.63, 0.75, 0.9, 0.95, 1.0] {
            let result = resolve(at(&board, 0.0, proportion), &board);
            assert_eq!(result.ring, Ring::Double, "proportion {proportion}");
            assert_eq!((result.score, result.label.as_str()), (40, "Double 20"));
        }
    }

    proptest! {
        #[test]
        fn prop_out_of_board_is_miss(bearing in 0.0f32..360.0, extra in 0.01f32..500.0) {
            let board = BoardSpec::default();
            let point = board.center() + bearing_to_offset(bearing, board.radius() + extra);
            let result = resolve(point, &board);
            prop_assert_eq!(result.score, 0);
            prop_assert_eq!(result.label, "Miss");
        }

        #[test]
        fn prop_scores_are_valid(x in -200.0f32..1000.0, y in -200.0f32..800.0) {
            let board = BoardSpec::default();
            let result = resolve(Vec2::new(x, y), &board);
            prop_assert!(valid_scores().contains(&result.score), "score {}", result.score);
        }
    }
}
