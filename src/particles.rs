//! Particle populations and their per-frame physics.
//!
//! Three independent decorative populations, each with its own motion law
//! and survivorship predicate:
//!
//! | Population | Motion | Removal |
//! |------------|--------|---------|
//! | [`Confetti`] | falls by `fall_speed`, spins 2°/frame | `y >= height + 50` |
//! | [`Heart`] | rises by `rise_speed`, sways with `sin(y * 0.01)` | `y <= -50` |
//! | [`Sparkle`] | stationary; twinklers oscillate opacity | fixed population |
//!
//! The motion laws are deliberately not unified behind a generic particle
//! with a velocity field: each population advances through its own pure
//! step function and filter. Populations are rebuilt on every spawn and
//! tick, never mutated in place, so renderers can treat the returned
//! slices as immutable snapshots.
//!
//! # Example
//!
//! ```ignore
//! let mut system = ParticleSystem::new(Viewport::new(1920.0, 1080.0));
//! system.spawn_all();
//!
//! // ~60 Hz frame loop:
//! system.tick(clock.elapsed_secs());
//! for c in system.confetti() { /* draw */ }
//! ```

use crate::spawn::SpawnContext;
use crate::visuals::Palette;
use glam::Vec2;

/// Default confetti population size.
pub const CONFETTI_COUNT: usize = 50;
/// Default heart population size.
pub const HEARTS_COUNT: usize = 20;
/// Default sparkle population size.
pub const SPARKLES_COUNT: usize = 30;

/// Margin past the viewport edge before falling/rising particles are culled.
const CULL_MARGIN: f32 = 50.0;

/// The visible area particles live in, in layout units (pixels).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    /// 1080p reference viewport.
    fn default() -> Self {
        Self::new(1920.0, 1080.0)
    }
}

/// A piece of falling confetti.
#[derive(Clone, Debug)]
pub struct Confetti {
    /// Stable identity for rendering/removal, unique within the system.
    pub id: u64,
    /// Position in viewport units.
    pub pos: Vec2,
    /// Rotation in degrees, advances 2° per frame.
    pub rotation_deg: f32,
    /// CSS hex color from the active palette.
    pub color: &'static str,
    /// Side length in viewport units, `[4, 12)`.
    pub size: f32,
    /// Fall distance per frame, `[2, 5)`.
    pub fall_speed: f32,
}

impl Confetti {
    /// One frame of fall: descend and spin.
    fn advanced(mut self) -> Self {
        self.pos.y += self.fall_speed;
        self.rotation_deg += 2.0;
        self
    }

    /// Survives while still above the cull line below the viewport.
    fn on_screen(&self, viewport: &Viewport) -> bool {
        self.pos.y < viewport.height + CULL_MARGIN
    }
}

/// A rising heart.
#[derive(Clone, Debug)]
pub struct Heart {
    /// Stable identity, unique within the system.
    pub id: u64,
    /// Position in viewport units.
    pub pos: Vec2,
    /// Glyph size, `[15, 35)`.
    pub size: f32,
    /// Rise distance per frame, `[1, 3)`.
    pub rise_speed: f32,
    /// Opacity, `[0.3, 1.0)`.
    pub opacity: f32,
}

impl Heart {
    /// One frame of rise: sway horizontally by the pre-step height, then
    /// ascend. The sway uses the old `y` so the drift matches the height
    /// the heart was at when the frame began.
    fn advanced(mut self) -> Self {
        self.pos.x += (self.pos.y * 0.01).sin() * 0.5;
        self.pos.y -= self.rise_speed;
        self
    }

    /// Survives while still below the cull line above the viewport.
    fn on_screen(&self) -> bool {
        self.pos.y > -CULL_MARGIN
    }
}

/// A stationary sparkle.
#[derive(Clone, Debug)]
pub struct Sparkle {
    /// Stable identity, unique within the system. Also offsets the twinkle
    /// phase so sparkles don't pulse in unison.
    pub id: u64,
    /// Position in viewport units.
    pub pos: Vec2,
    /// Glyph size, `[2, 8)`.
    pub size: f32,
    /// Current opacity. Recomputed each frame when `twinkles` is set.
    pub opacity: f32,
    /// Whether this sparkle oscillates or keeps its spawn opacity.
    pub twinkles: bool,
}

impl Sparkle {
    /// One frame: twinklers track `|sin|` of the shared timeline, offset by
    /// their id; the rest keep their spawn opacity.
    fn advanced(mut self, elapsed_secs: f32) -> Self {
        if self.twinkles {
            self.opacity = (elapsed_secs * 5.0 + self.id as f32).sin().abs();
        }
        self
    }
}

/// Owns the three particle populations and advances them each frame.
///
/// Built with defaults and customized by chaining:
///
/// ```ignore
/// let mut system = ParticleSystem::new(Viewport::default())
///     .with_palette(Palette::Pastel)
///     .with_seed(42);
/// ```
#[derive(Debug)]
pub struct ParticleSystem {
    viewport: Viewport,
    palette: Palette,
    confetti_count: usize,
    hearts_count: usize,
    sparkles_count: usize,
    confetti: Vec<Confetti>,
    hearts: Vec<Heart>,
    sparkles: Vec<Sparkle>,
    ctx: SpawnContext,
    next_id: u64,
}

impl ParticleSystem {
    /// Create an empty system for the given viewport.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            palette: Palette::default(),
            confetti_count: CONFETTI_COUNT,
            hearts_count: HEARTS_COUNT,
            sparkles_count: SPARKLES_COUNT,
            confetti: Vec::new(),
            hearts: Vec::new(),
            sparkles: Vec::new(),
            ctx: SpawnContext::new(),
            next_id: 0,
        }
    }

    /// Seed the spawn RNG for reproducible batches.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.ctx = SpawnContext::seeded(seed);
        self
    }

    /// Set the confetti color palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Override the population sizes (defaults 50/20/30).
    pub fn with_counts(mut self, confetti: usize, hearts: usize, sparkles: usize) -> Self {
        self.confetti_count = confetti;
        self.hearts_count = hearts;
        self.sparkles_count = sparkles;
        self
    }

    /// Replace the spawn RNG with a seeded one.
    pub fn reseed(&mut self, seed: u64) {
        self.ctx = SpawnContext::seeded(seed);
    }

    /// Change the viewport. Existing particles keep their positions; the
    /// new bounds apply from the next spawn/tick.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Change the confetti palette, applied from the next spawn.
    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    // =========================================================================
    // SPAWNING
    // =========================================================================

    /// Replace the confetti population with a fresh batch falling in from
    /// just above the viewport.
    pub fn spawn_confetti(&mut self) {
        let colors = self.palette.colors();
        self.confetti = (0..self.confetti_count)
            .map(|_| Confetti {
                id: self.next_id(),
                pos: Vec2::new(self.ctx.random_x(&self.viewport), -10.0),
                rotation_deg: self.ctx.random_rotation(),
                color: *self.ctx.pick(&colors),
                size: self.ctx.random_range(4.0, 12.0),
                fall_speed: self.ctx.random_range(2.0, 5.0),
            })
            .collect();
    }

    /// Replace the heart population with a fresh batch rising in from just
    /// below the viewport.
    pub fn spawn_hearts(&mut self) {
        let height = self.viewport.height;
        self.hearts = (0..self.hearts_count)
            .map(|_| Heart {
                id: self.next_id(),
                pos: Vec2::new(self.ctx.random_x(&self.viewport), height + 10.0),
                size: self.ctx.random_range(15.0, 35.0),
                rise_speed: self.ctx.random_range(1.0, 3.0),
                opacity: self.ctx.random_range(0.3, 1.0),
            })
            .collect();
    }

    /// Replace the sparkle population, scattered over the whole viewport.
    pub fn spawn_sparkles(&mut self) {
        self.sparkles = (0..self.sparkles_count)
            .map(|_| Sparkle {
                id: self.next_id(),
                pos: self.ctx.random_in_viewport(&self.viewport),
                size: self.ctx.random_range(2.0, 8.0),
                opacity: self.ctx.random(),
                twinkles: self.ctx.coin_flip(),
            })
            .collect();
    }

    /// Celebratory burst: spawn all three populations.
    ///
    /// Called when a new slide set loads.
    pub fn spawn_all(&mut self) {
        self.spawn_confetti();
        self.spawn_hearts();
        self.spawn_sparkles();
    }

    // =========================================================================
    // PHYSICS
    // =========================================================================

    /// Advance all populations by one frame.
    ///
    /// `elapsed_secs` is the shared timeline (drives the sparkle twinkle
    /// phase). Reference cadence is ~60 Hz; the motion laws are per-frame
    /// amounts, matching that cadence.
    pub fn tick(&mut self, elapsed_secs: f32) {
        let viewport = self.viewport;

        self.confetti = std::mem::take(&mut self.confetti)
            .into_iter()
            .map(Confetti::advanced)
            .filter(|c| c.on_screen(&viewport))
            .collect();

        self.hearts = std::mem::take(&mut self.hearts)
            .into_iter()
            .map(Heart::advanced)
            .filter(Heart::on_screen)
            .collect();

        self.sparkles = std::mem::take(&mut self.sparkles)
            .into_iter()
            .map(|s| s.advanced(elapsed_secs))
            .collect();
    }

    // =========================================================================
    // SNAPSHOTS
    // =========================================================================

    /// Current confetti population.
    #[inline]
    pub fn confetti(&self) -> &[Confetti] {
        &self.confetti
    }

    /// Current heart population.
    #[inline]
    pub fn hearts(&self) -> &[Heart] {
        &self.hearts
    }

    /// Current sparkle population.
    #[inline]
    pub fn sparkles(&self) -> &[Sparkle] {
        &self.sparkles
    }

    /// The viewport particles live in.
    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}
