//! Throw inaccuracy
//!
//! A throw lands somewhere in the square of side `2 * deviation + 1` around
//! the aim point: independent uniform integer offsets on each axis. This is a
//! Chebyshev-ball perturbation, not a physical spread model.

use glam::Vec2;
use rand::Rng;

/// Offset an aim point by a random integer amount in `[-deviation, deviation]` per axis
pub fn perturb<R: Rng + ?Sized>(aim: Vec2, deviation: u32, rng: &mut R) -> Vec2 {
    if deviation == 0 {
        return aim;
    }

    let d = i32::try_from(deviation).unwrap_or(i32::MAX);
    let dx = rng.random_range(-d..=d);
    let dy = rng.random_range(-d..=d);
    aim + Vec2::new(dx as f32, dy as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_zero_deviation_is_identity() {
        let mut rng = Pcg32::seed_from_u64(1);
        let aim = Vec2::new(412.25, 87.5);
        assert_eq!(perturb(aim, 0, &mut rng), aim);
    }

    #[test]
    fn test_seeded_perturbation_is_reproducible() {
        let aim = Vec2::new(400.0, 300.0);
        let mut rng1 = Pcg32::seed_from_u64(42);
        let mut rng2 = Pcg32::seed_from_u64(42);
        for _ in 0..20 {
            assert_eq!(perturb(aim, 20, &mut rng1), perturb(aim, 20, &mut rng2));
        }
    }

    #[test]
    fn test_offsets_are_whole_pixels() {
        let mut rng = Pcg32::seed_from_u64(7);
        let aim = Vec2::new(400.0, 300.0);
        for _ in 0..100 {
            let offset = perturb(aim, 5, &mut rng) - aim;
            assert_eq!(offset.x.fract(), 0.0);
            assert_eq!(offset.y.fract(), 0.0);
        }
    }

    #[test]
    fn test_offsets_cover_full_range() {
        let mut rng = Pcg32::seed_from_u64(3);
        let aim = Vec2::ZERO;
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..2000 {
            let p = perturb(aim, 2, &mut rng);
            seen_min |= p.x == -2.0;
            seen_max |= p.x == 2.0;
        }
        assert!(seen_min && seen_max);
    }

    proptest! {
        #[test]
        fn prop_within_chebyshev_distance(
            x in -1000.0f32..1000.0,
            y in -1000.0f32..1000.0,
            deviation in 0u32..100,
            seed in any::<u64>(),
        ) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let aim = Vec2::new(x, y);
            let p = perturb(aim, deviation, &mut rng);
            let chebyshev = (p - aim).abs().max_element();
            prop_assert!(chebyshev <= deviation as f32 + 1e-3);
        }
    }
}
