//! Random Source
//!
//! Every random draw in the terrain pipeline goes through [`RandomSource`],
//! so a seeded generator reproduces the exact same terrain.

// ============================================================================
// TRAIT
// ============================================================================

/// A source of uniformly distributed pseudo-random numbers.
pub trait RandomSource {
    /// Return a pseudo-random `f32` in `[0.0, 1.0)`.
    fn next_f32(&mut self) -> f32;

    /// Return a pseudo-random `f32` in `[min, max)`.
    fn range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f32(&mut self) -> f32 {
        (**self).next_f32()
    }
}

// ============================================================================
// SIMPLE RNG (xorshift32)
// ============================================================================

/// A minimal deterministic pseudo-random number generator using the xorshift32
/// algorithm. Given the same seed, it always produces the same sequence.
#[derive(Clone, Debug)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed. A seed of 0 is bumped to 1
    /// because xorshift32 requires a non-zero state.
    pub fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    /// Advance the state and return the next pseudo-random `u32`.
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}

impl RandomSource for SimpleRng {
    fn next_f32(&mut self) -> f32 {
        // Top 24 bits fit the f32 mantissa exactly, keeping 1.0 out of range
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_rng_deterministic() {
        let mut rng1 = SimpleRng::new(42);
        let mut rng2 = SimpleRng::new(42);
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_simple_rng_zero_seed_bumped() {
        let mut rng = SimpleRng::new(0);
        let val = rng.next_u32();
        assert_ne!(val, 0);
    }

    #[test]
    fn test_next_f32_half_open() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..10_000 {
            let v = rng.next_f32();
            assert!((0.0..1.0).contains(&v), "value {v} outside [0, 1)");
        }
    }

    #[test]
    fn test_range_bounds() {
        let mut rng = SimpleRng::new(123);
        for _ in 0..200 {
            let v = rng.range(-2.0, 5.0);
            assert!(v >= -2.0 && v < 5.0, "range value {v} out of bounds");
        }
    }

    #[test]
    fn test_mut_ref_forwards() {
        let mut a = SimpleRng::new(9);
        let mut b = SimpleRng::new(9);
        let mut by_ref = &mut b;
        assert_eq!(a.next_f32(), RandomSource::next_f32(&mut by_ref));
    }
}
