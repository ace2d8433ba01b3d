//! Slideshow driver: slide advancement wired to effects and captions.
//!
//! [`Slideshow`] owns the slide index, a [`ParticleSystem`], and an optional
//! [`CaptionScheduler`]. It advances the index on a fixed interval
//! (wrapping), forwards every transition to the scheduler, and steps the
//! particle physics each tick. Captions are a configuration, not a separate
//! code path: a slideshow without `.with_captions(..)` simply has none.
//!
//! The driver keeps its own accumulated timeline and is advanced with
//! explicit deltas, so it runs identically against wall-clock deltas from
//! [`crate::Clock`] or fixed steps in tests.
//!
//! # Example
//!
//! ```ignore
//! let mut show = Slideshow::new(images.len())?
//!     .with_interval(Duration::from_secs(3))
//!     .with_captions(CaptionConfig::default());
//!
//! loop {
//!     show.tick(frame_delta);
//!     draw(images[show.current_index()], show.effects(), show.caption());
//! }
//! ```

use crate::error::SlideshowError;
use crate::particles::{ParticleSystem, Viewport};
use crate::scheduler::{CaptionConfig, CaptionScheduler};
use crate::visuals::Palette;
use log::debug;
use std::time::Duration;

/// Default time each slide is shown.
pub const DEFAULT_SLIDE_INTERVAL: Duration = Duration::from_millis(3000);

/// Drives slide advancement, particle bursts, and caption scheduling.
#[derive(Debug)]
pub struct Slideshow {
    slide_count: usize,
    current: usize,
    interval: Duration,
    now: Duration,
    next_advance: Duration,
    effects: ParticleSystem,
    captions: Option<CaptionScheduler>,
}

impl Slideshow {
    /// Create a slideshow over `slide_count` slides.
    ///
    /// Starts at slide 0 with a celebratory particle burst, matching the
    /// behavior when a fresh image set finishes loading.
    pub fn new(slide_count: usize) -> Result<Self, SlideshowError> {
        if slide_count == 0 {
            return Err(SlideshowError::NoSlides);
        }
        let mut effects = ParticleSystem::new(Viewport::default());
        effects.spawn_all();
        Ok(Self {
            slide_count,
            current: 0,
            interval: DEFAULT_SLIDE_INTERVAL,
            now: Duration::ZERO,
            next_advance: DEFAULT_SLIDE_INTERVAL,
            effects,
            captions: None,
        })
    }

    /// Set how long each slide is shown (default 3 s).
    ///
    /// Clamped to at least 1 ms; a zero interval would make the catch-up
    /// loop in [`Slideshow::tick`] never terminate.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval.max(Duration::from_millis(1));
        self.next_advance = self.interval;
        self
    }

    /// Set the viewport particles animate in.
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.effects.set_viewport(viewport);
        self.effects.spawn_all();
        self
    }

    /// Set the confetti palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.effects.set_palette(palette);
        self.effects.spawn_all();
        self
    }

    /// Attach a caption scheduler.
    pub fn with_captions(mut self, config: CaptionConfig) -> Self {
        self.captions = Some(CaptionScheduler::new(config));
        self
    }

    /// Seed both the particle and caption RNGs for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.effects.reseed(seed);
        self.effects.spawn_all();
        if let Some(captions) = &mut self.captions {
            captions.reseed(seed);
        }
        self
    }

    /// Advance the slideshow timeline by `delta`.
    ///
    /// Steps the particle physics once, fires due caption timers, and
    /// advances the slide index (wrapping) whenever the interval elapses.
    pub fn tick(&mut self, delta: Duration) {
        self.now += delta;
        self.effects.tick(self.now.as_secs_f32());

        while self.now >= self.next_advance {
            self.next_advance += self.interval;
            self.current = (self.current + 1) % self.slide_count;
            debug!("slide advanced to {}/{}", self.current, self.slide_count);
            if let Some(captions) = &mut self.captions {
                captions.advance(self.current, self.slide_count, self.now);
            }
        }

        if let Some(captions) = &mut self.captions {
            captions.update(self.now);
        }
    }

    /// Load a fresh slide set: reset to slide 0 and burst particles.
    pub fn load(&mut self, slide_count: usize) -> Result<(), SlideshowError> {
        if slide_count == 0 {
            return Err(SlideshowError::NoSlides);
        }
        self.slide_count = slide_count;
        self.current = 0;
        self.next_advance = self.now + self.interval;
        self.effects.spawn_all();
        if let Some(captions) = &mut self.captions {
            captions.advance(0, slide_count, self.now);
        }
        Ok(())
    }

    /// Jump to a specific slide, clamping to the valid range.
    pub fn go_to(&mut self, slide_index: usize) {
        self.current = slide_index.min(self.slide_count - 1);
        self.next_advance = self.now + self.interval;
        if let Some(captions) = &mut self.captions {
            captions.advance(self.current, self.slide_count, self.now);
        }
    }

    /// Zero-based index of the slide currently shown.
    #[inline]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Number of slides in the loaded set.
    #[inline]
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// The particle populations, for rendering.
    #[inline]
    pub fn effects(&self) -> &ParticleSystem {
        &self.effects
    }

    /// Mutable access to the particle system (manual bursts).
    #[inline]
    pub fn effects_mut(&mut self) -> &mut ParticleSystem {
        &mut self.effects
    }

    /// The caption scheduler, when captions are configured.
    #[inline]
    pub fn captions(&self) -> Option<&CaptionScheduler> {
        self.captions.as_ref()
    }

    /// Mutable scheduler access (manual show/hide/toggle).
    #[inline]
    pub fn captions_mut(&mut self) -> Option<&mut CaptionScheduler> {
        self.captions.as_mut()
    }

    /// The caption to overlay right now, if one is visible.
    pub fn caption(&self) -> Option<&'static str> {
        self.captions
            .as_ref()
            .filter(|c| c.is_visible())
            .and_then(|c| c.current_phrase())
    }

    /// The timeline the slideshow has accumulated so far.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: fn(u64) -> Duration = Duration::from_millis;

    #[test]
    fn test_zero_slides_rejected() {
        assert_eq!(Slideshow::new(0).unwrap_err(), SlideshowError::NoSlides);
    }

    #[test]
    fn test_starts_with_burst() {
        let show = Slideshow::new(5).unwrap();
        assert_eq!(show.current_index(), 0);
        assert!(!show.effects().confetti().is_empty());
        assert!(!show.effects().hearts().is_empty());
        assert!(!show.effects().sparkles().is_empty());
    }

    #[test]
    fn test_advances_and_wraps() {
        let mut show = Slideshow::new(3)
            .unwrap()
            .with_interval(MS(100));

        show.tick(MS(100));
        assert_eq!(show.current_index(), 1);
        show.tick(MS(100));
        assert_eq!(show.current_index(), 2);
        show.tick(MS(100));
        assert_eq!(show.current_index(), 0);
    }

    #[test]
    fn test_large_delta_catches_up() {
        let mut show = Slideshow::new(10)
            .unwrap()
            .with_interval(MS(100));
        show.tick(MS(450));
        assert_eq!(show.current_index(), 4);
    }

    #[test]
    fn test_captions_follow_slides() {
        let mut show = Slideshow::new(4)
            .unwrap()
            .with_interval(MS(1000))
            .with_captions(
                CaptionConfig::default()
                    .with_selection_delay(MS(200))
                    .with_auto_hide_delay(MS(500)),
            )
            .with_seed(42);

        // First transition at 1000 ms, caption at 1200 ms.
        show.tick(MS(1000));
        assert!(show.caption().is_none());
        show.tick(MS(200));
        assert!(show.caption().is_some());

        // Auto-hides at 1700 ms.
        show.tick(MS(500));
        assert!(show.caption().is_none());
    }

    #[test]
    fn test_no_captions_configured() {
        let mut show = Slideshow::new(4).unwrap().with_interval(MS(100));
        show.tick(MS(10_000));
        assert!(show.captions().is_none());
        assert!(show.caption().is_none());
    }

    #[test]
    fn test_load_resets_index() {
        let mut show = Slideshow::new(3).unwrap().with_interval(MS(100));
        show.tick(MS(200));
        assert_eq!(show.current_index(), 2);

        show.load(7).unwrap();
        assert_eq!(show.current_index(), 0);
        assert_eq!(show.slide_count(), 7);
        assert_eq!(show.load(0).unwrap_err(), SlideshowError::NoSlides);
    }

    #[test]
    fn test_go_to_clamps() {
        let mut show = Slideshow::new(3).unwrap();
        show.go_to(99);
        assert_eq!(show.current_index(), 2);
    }
}
