//! Spawn context for particle initialization.
//!
//! Provides a seeded RNG plus helpers for the spawn patterns the particle
//! populations need, so the spawners stay free of RNG boilerplate:
//!
//! ```ignore
//! let mut ctx = SpawnContext::seeded(42);
//! let x = ctx.random_x(&viewport);          // uniform across the width
//! let size = ctx.random_range(4.0, 12.0);   // uniform in [4, 12)
//! let twinkles = ctx.coin_flip();
//! ```

use crate::particles::Viewport;
use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded random source for particle spawning.
///
/// Wraps a [`SmallRng`] so spawn batches are reproducible when a seed is
/// supplied (tests) and varied otherwise (normal operation).
#[derive(Debug)]
pub struct SpawnContext {
    rng: SmallRng,
}

impl SpawnContext {
    /// Create a context seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Create a context with an explicit seed for reproducible spawns.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    // ========== Random primitives ==========

    /// Random f32 between 0.0 and 1.0.
    #[inline]
    pub fn random(&mut self) -> f32 {
        self.rng.gen()
    }

    /// Random f32 in `[min, max)`.
    #[inline]
    pub fn random_range(&mut self, min: f32, max: f32) -> f32 {
        self.rng.gen_range(min..max)
    }

    /// Fair coin flip.
    #[inline]
    pub fn coin_flip(&mut self) -> bool {
        self.rng.gen::<f32>() > 0.5
    }

    // ========== Position helpers ==========

    /// Random x coordinate across the viewport width.
    pub fn random_x(&mut self, viewport: &Viewport) -> f32 {
        self.rng.gen_range(0.0..viewport.width)
    }

    /// Random point uniformly distributed over the viewport.
    pub fn random_in_viewport(&mut self, viewport: &Viewport) -> Vec2 {
        Vec2::new(
            self.rng.gen_range(0.0..viewport.width),
            self.rng.gen_range(0.0..viewport.height),
        )
    }

    /// Random rotation in degrees, `[0, 360)`.
    pub fn random_rotation(&mut self) -> f32 {
        self.rng.gen_range(0.0..360.0)
    }

    // ========== Selection helpers ==========

    /// Uniform-random element of a non-empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.rng.gen_range(0..items.len())]
    }
}

impl Default for SpawnContext {
    fn default() -> Self {
        Self::new()
    }
}
