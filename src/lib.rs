//! # Fiesta - slideshow particle effects & timed captions
//!
//! Decorative particle populations and a caption scheduler for photo
//! slideshows, with a simple, declarative API.
//!
//! Fiesta owns the state-machine parts of a slideshow - particle physics and
//! caption timing - so the host application only has to render snapshots.
//! There is no rendering, no I/O, and no hidden threads: everything advances
//! when you call `tick`/`update`, which makes the whole crate drivable by a
//! fixed-delta clock in tests.
//!
//! ## Quick Start
//!
//! ```ignore
//! use fiesta::prelude::*;
//! use std::time::Duration;
//!
//! fn main() {
//!     let mut show = Slideshow::new(24)
//!         .expect("at least one slide")
//!         .with_viewport(Viewport::new(1920.0, 1080.0))
//!         .with_captions(CaptionConfig::default());
//!
//!     let mut clock = Clock::new();
//!     loop {
//!         let (_, delta) = clock.update();
//!         show.tick(Duration::from_secs_f32(delta));
//!
//!         // Render read-only snapshots:
//!         for c in show.effects().confetti() { /* draw */ }
//!         for h in show.effects().hearts() { /* draw */ }
//!         for s in show.effects().sparkles() { /* draw */ }
//!         if let Some(caption) = show.caption() { /* overlay */ }
//!     }
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Particle populations
//!
//! Three independent populations with distinct motion laws and removal
//! predicates:
//!
//! | Population | Count | Motion | Removed when |
//! |------------|-------|--------|--------------|
//! | [`Confetti`] | 50 | falls, spins | below viewport + 50 |
//! | [`Heart`] | 20 | rises, sways sinusoidally | above viewport - 50 |
//! | [`Sparkle`] | 30 | static, twinkles | never (replaced on spawn) |
//!
//! Each `spawn_*` call replaces its population wholesale; [`ParticleSystem::tick`]
//! advances all three by one frame (reference cadence ~60 Hz).
//!
//! ### Caption scheduling
//!
//! [`CaptionScheduler`] runs an `Idle -> Pending -> Visible -> Idle` cycle per
//! slide transition: a delay after [`CaptionScheduler::advance`], a
//! weighted-random phrase pick that avoids repeats, and an auto-hide delay.
//! Timers are plain deadlines polled by [`CaptionScheduler::update`], so
//! cancellation is total and disposal can never fire a stale callback.
//!
//! ### Driving it
//!
//! [`Slideshow`] ties both together: it advances the slide index on a fixed
//! interval, bursts [`ParticleSystem::spawn_all`] when a slide set loads, and
//! forwards slide changes to the scheduler. Captions are an optional
//! configuration, not a separate code path.

pub mod error;
pub mod particles;
pub mod phrases;
pub mod scheduler;
pub mod slideshow;
pub mod spawn;
pub mod time;
pub mod visuals;

pub use error::SlideshowError;
pub use glam::Vec2;
pub use particles::{Confetti, Heart, ParticleSystem, Sparkle, Viewport};
pub use phrases::{Category, PhraseBank};
pub use scheduler::{CaptionConfig, CaptionScheduler};
pub use slideshow::Slideshow;
pub use spawn::SpawnContext;
pub use time::Clock;
pub use visuals::Palette;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use fiesta::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::SlideshowError;
    pub use crate::particles::{Confetti, Heart, ParticleSystem, Sparkle, Viewport};
    pub use crate::phrases::{Category, PhraseBank};
    pub use crate::scheduler::{CaptionConfig, CaptionScheduler};
    pub use crate::slideshow::Slideshow;
    pub use crate::spawn::SpawnContext;
    pub use crate::time::Clock;
    pub use crate::visuals::Palette;
    pub use crate::Vec2;
}
