//! Sampler - random bounce parameters for an element

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::placed::BouncePlan;
use crate::error::BounceError;
use crate::primitives::{CycleDuration, Direction, Position, StartDelay, Viewport};

/// Draws the randomized parts of a bounce
pub struct Sampler;

impl Sampler {
    /// Whole-pixel offset in `[0, travel)`, or 0 when there is no room
    pub fn random_offset<R: Rng>(rng: &mut R, travel: f32) -> f32 {
        if travel > 0.0 {
            rng.random_range(0.0..travel).floor()
        } else {
            0.0
        }
    }

    /// Fair coin between the two directions of an axis
    pub fn random_direction<R: Rng>(rng: &mut R) -> Direction {
        if rng.random_bool(0.5) { Direction::Forward } else { Direction::Backward }
    }

    /// Draw every parameter of a bounce for an element of `elem_size` pixels.
    ///
    /// Draw order: duration, delay, x, y, x direction, y direction.
    pub fn random_plan<R: Rng>(rng: &mut R, viewport: Viewport, elem_size: f32) -> BouncePlan {
        let travel = viewport.travel(elem_size);
        let duration = CycleDuration::sample(rng);
        let delay = StartDelay::sample(rng);
        let x = Self::random_offset(rng, travel.0);
        let y = Self::random_offset(rng, travel.1);
        let dir_x = Self::random_direction(rng);
        let dir_y = Self::random_direction(rng);

        BouncePlan::new(Position::new(x, y), travel)
            .with_duration(duration)
            .with_delay(delay)
            .with_directions(dir_x, dir_y)
    }
}

/// A small RNG seeded from the host's entropy source
pub fn fresh_rng() -> Result<SmallRng, BounceError> {
    let mut buf = [0u8; 32];
    getrandom::fill(&mut buf).map_err(|e| BounceError::Entropy(e.to_string()))?;
    Ok(SmallRng::from_seed(buf))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_stay_inside_travel() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..500 {
            let x = Sampler::random_offset(&mut rng, 700.0);
            assert!((0.0..700.0).contains(&x));
            assert_eq!(x, x.floor());
        }
    }

    #[test]
    fn offset_without_travel_is_zero() {
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(Sampler::random_offset(&mut rng, 0.0), 0.0);
        assert_eq!(Sampler::random_offset(&mut rng, -40.0), 0.0);
    }

    #[test]
    fn plan_respects_bounds() {
        let mut rng = SmallRng::seed_from_u64(9);
        let vp = Viewport::new(1280.0, 720.0);
        for _ in 0..500 {
            let plan = Sampler::random_plan(&mut rng, vp, 100.0);
            assert!(plan.position.x >= 0.0 && plan.position.x <= 1180.0);
            assert!(plan.position.y >= 0.0 && plan.position.y <= 620.0);
            let d = plan.duration.seconds();
            assert!((3.0..7.0).contains(&d), "duration {d}");
            let s = plan.delay.seconds();
            assert!((0.0..2.0).contains(&s), "delay {s}");
            assert_eq!(plan.travel, (1180.0, 620.0));
        }
    }

    #[test]
    fn both_directions_are_drawn() {
        let mut rng = SmallRng::seed_from_u64(3);
        let draws: Vec<Direction> = (0..200).map(|_| Sampler::random_direction(&mut rng)).collect();
        assert!(draws.contains(&Direction::Forward));
        assert!(draws.contains(&Direction::Backward));
    }

    #[test]
    fn same_seed_same_plan() {
        let vp = Viewport::new(800.0, 600.0);
        let a = Sampler::random_plan(&mut SmallRng::seed_from_u64(5), vp, 100.0);
        let b = Sampler::random_plan(&mut SmallRng::seed_from_u64(5), vp, 100.0);
        assert_eq!(a, b);
    }

    #[test]
    fn degenerate_viewport_plan_is_stationary() {
        let mut rng = SmallRng::seed_from_u64(11);
        let plan = Sampler::random_plan(&mut rng, Viewport::default(), 100.0);
        assert_eq!(plan.position, Position::ORIGIN);
        assert!(plan.cycle().frames().iter().all(|f| f.dx == 0.0 && f.dy == 0.0));
    }
}
