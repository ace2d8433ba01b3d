//! Caption scheduling: one timed caption per slide transition.
//!
//! The scheduler runs a single cycle per slide change:
//!
//! ```text
//! Idle -> Pending (selection timer) -> Visible (auto-hide timer) -> Idle
//! ```
//!
//! [`CaptionScheduler::advance`] is the only entry point that arms timers,
//! and it always cancels both timers first - stale timers firing against
//! updated state cannot happen. Timers are plain [`Duration`] deadlines on
//! the caller's monotonic timeline, polled by [`CaptionScheduler::update`];
//! there are no callbacks, so cancellation is total and a dropped scheduler
//! can never mutate anything afterwards.
//!
//! # Example
//!
//! ```ignore
//! let mut captions = CaptionScheduler::new(CaptionConfig::default());
//!
//! // On each slide change:
//! captions.advance(index, total, clock.elapsed());
//!
//! // Every frame:
//! captions.update(clock.elapsed());
//! if captions.is_visible() {
//!     let text = captions.current_phrase().unwrap();
//! }
//! ```

use crate::phrases::{pick_category, PhraseBank};
use log::{debug, warn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::time::Duration;

/// Bounded retries before the repeat-avoidance gives up and allows any phrase.
const SELECTION_ATTEMPTS: u32 = 10;

/// Caption scheduler configuration.
///
/// Defaults: enabled, 2.5 s selection delay, auto-hide after 8 s. The
/// selection delay sits below the default 3 s slide interval so a caption
/// gets to appear before the next transition cancels it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaptionConfig {
    /// Master on/off switch.
    pub enabled: bool,
    /// Delay between a slide change and the caption appearing.
    pub selection_delay: Duration,
    /// Whether a visible caption hides itself.
    pub auto_hide: bool,
    /// How long a caption stays visible when auto-hide is on.
    pub auto_hide_delay: Duration,
}

impl Default for CaptionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            selection_delay: Duration::from_millis(2500),
            auto_hide: true,
            auto_hide_delay: Duration::from_millis(8000),
        }
    }
}

impl CaptionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable captions at construction.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the delay between slide change and caption selection.
    pub fn with_selection_delay(mut self, delay: Duration) -> Self {
        self.selection_delay = delay;
        self
    }

    /// Enable or disable auto-hide.
    pub fn with_auto_hide(mut self, auto_hide: bool) -> Self {
        self.auto_hide = auto_hide;
        self
    }

    /// Set how long a caption stays visible before auto-hiding.
    pub fn with_auto_hide_delay(mut self, delay: Duration) -> Self {
        self.auto_hide_delay = delay;
        self
    }
}

/// Where the caption cycle currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    /// Nothing armed.
    Idle,
    /// Selection timer armed for the given slide.
    Pending {
        deadline: Duration,
        slide_index: usize,
        total_slides: usize,
    },
    /// Caption showing; auto-hide deadline armed when configured.
    Visible { hide_at: Option<Duration> },
}

/// Selects, times, and presents one caption per slide transition.
///
/// Phrases already shown are tracked for the life of the scheduler (one
/// slideshow session) and avoided with bounded retries; when the pool is
/// exhausted the selection degrades gracefully to an allowed repeat.
#[derive(Debug)]
pub struct CaptionScheduler {
    config: CaptionConfig,
    bank: PhraseBank,
    phase: Phase,
    current: Option<&'static str>,
    visible: bool,
    enabled: bool,
    used: HashSet<&'static str>,
    rng: SmallRng,
}

impl CaptionScheduler {
    /// Create a scheduler with the given configuration.
    pub fn new(config: CaptionConfig) -> Self {
        Self {
            config,
            bank: PhraseBank,
            phase: Phase::Idle,
            current: None,
            visible: false,
            enabled: config.enabled,
            used: HashSet::new(),
            rng: SmallRng::from_entropy(),
        }
    }

    /// Seed the selection RNG for reproducible tests.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.reseed(seed);
        self
    }

    /// Replace the selection RNG with a seeded one.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = SmallRng::seed_from_u64(seed);
    }

    // =========================================================================
    // SLIDE TRANSITIONS
    // =========================================================================

    /// Handle a slide change at time `now`.
    ///
    /// Cancels any pending selection or auto-hide, hides whatever is
    /// showing, and arms a fresh selection timer. No-op while disabled.
    ///
    /// Precondition handling: `total_slides == 0` is a logged no-op; an
    /// out-of-range `slide_index` is clamped to the last slide. Neither
    /// leaves a timer armed against bad state.
    pub fn advance(&mut self, slide_index: usize, total_slides: usize, now: Duration) {
        if !self.enabled {
            return;
        }

        self.phase = Phase::Idle;
        self.visible = false;

        if total_slides == 0 {
            warn!("caption advance with zero slides ignored");
            return;
        }
        let slide_index = if slide_index >= total_slides {
            warn!(
                "slide index {slide_index} out of range for {total_slides} slides, clamping"
            );
            total_slides - 1
        } else {
            slide_index
        };

        self.phase = Phase::Pending {
            deadline: now + self.config.selection_delay,
            slide_index,
            total_slides,
        };
    }

    /// Fire any due timer. Call every frame with the current timeline.
    pub fn update(&mut self, now: Duration) {
        match self.phase {
            Phase::Pending {
                deadline,
                slide_index,
                total_slides,
            } if now >= deadline => {
                let phrase = self.select_phrase(slide_index, total_slides);
                debug!("caption selected for slide {slide_index}: {phrase}");
                self.current = Some(phrase);
                self.used.insert(phrase);
                self.visible = true;
                self.phase = Phase::Visible {
                    hide_at: self
                        .config
                        .auto_hide
                        .then(|| now + self.config.auto_hide_delay),
                };
            }
            Phase::Visible {
                hide_at: Some(hide_at),
            } if now >= hide_at => {
                self.visible = false;
                self.phase = Phase::Idle;
            }
            _ => {}
        }
    }

    /// Weighted category pick, then an unused phrase from it.
    ///
    /// Retries a bounded number of times against the used set; if the
    /// category is exhausted, falls back to a fully random phrase with the
    /// repeat constraint lifted.
    fn select_phrase(&mut self, slide_index: usize, total_slides: usize) -> &'static str {
        let draw: f32 = self.rng.gen();
        let category = pick_category(draw, slide_index, total_slides);

        for _ in 0..SELECTION_ATTEMPTS {
            let candidate = self.bank.random_from(category, &mut self.rng);
            if !self.used.contains(candidate) {
                return candidate;
            }
        }
        self.bank.random_any(&mut self.rng)
    }

    // =========================================================================
    // MANUAL CONTROLS
    // =========================================================================

    /// Hide the caption immediately and cancel any armed timer.
    pub fn hide_caption(&mut self) {
        self.phase = Phase::Idle;
        self.visible = false;
    }

    /// Re-show the current phrase, re-arming auto-hide when configured.
    ///
    /// Does not reselect; a scheduler that has never shown a caption has
    /// nothing to show and this is a no-op. Cancels a pending selection.
    pub fn show_caption(&mut self, now: Duration) {
        if self.current.is_none() {
            return;
        }
        self.visible = true;
        self.phase = Phase::Visible {
            hide_at: self
                .config
                .auto_hide
                .then(|| now + self.config.auto_hide_delay),
        };
    }

    /// Flip the master switch, hiding the caption when turning off.
    ///
    /// Returns the new enabled state.
    pub fn toggle_enabled(&mut self) -> bool {
        self.enabled = !self.enabled;
        if !self.enabled {
            self.hide_caption();
        }
        self.enabled
    }

    /// Forget which phrases have been shown, restoring the full pool.
    pub fn clear_used_phrases(&mut self) {
        self.used.clear();
    }

    // =========================================================================
    // SNAPSHOTS
    // =========================================================================

    /// The currently selected phrase, if one has ever been selected.
    #[inline]
    pub fn current_phrase(&self) -> Option<&'static str> {
        self.current
    }

    /// Whether the caption is currently displayed.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the scheduler is enabled.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// How many distinct phrases have been shown this session.
    #[inline]
    pub fn used_count(&self) -> usize {
        self.used.len()
    }

    #[cfg(test)]
    fn mark_all_used(&mut self) {
        self.used = self.bank.iter().collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: fn(u64) -> Duration = Duration::from_millis;

    fn scheduler() -> CaptionScheduler {
        CaptionScheduler::new(CaptionConfig::default()).with_seed(42)
    }

    #[test]
    fn test_caption_cycle() {
        let mut s = scheduler();
        s.advance(3, 10, MS(0));
        assert!(!s.is_visible());

        // Before the selection delay nothing fires.
        s.update(MS(2499));
        assert!(!s.is_visible());
        assert!(s.current_phrase().is_none());

        // Selection fires at the deadline.
        s.update(MS(2500));
        assert!(s.is_visible());
        assert!(s.current_phrase().is_some());
        assert_eq!(s.used_count(), 1);

        // Auto-hide fires 8 s later.
        s.update(MS(10_499));
        assert!(s.is_visible());
        s.update(MS(10_500));
        assert!(!s.is_visible());
        // The phrase survives hiding.
        assert!(s.current_phrase().is_some());
    }

    #[test]
    fn test_advance_cancels_pending_selection() {
        let mut s = scheduler();
        s.advance(0, 10, MS(0));
        // Second advance before the first deadline re-arms the timer.
        s.advance(1, 10, MS(1000));

        // The first deadline passes without a selection.
        s.update(MS(2500));
        assert!(s.current_phrase().is_none());
        assert!(!s.is_visible());

        // Only the second selection ever fires.
        s.update(MS(3500));
        assert!(s.is_visible());
        assert_eq!(s.used_count(), 1);
    }

    #[test]
    fn test_advance_hides_current_caption() {
        let mut s = scheduler();
        s.advance(0, 10, MS(0));
        s.update(MS(3000));
        assert!(s.is_visible());

        s.advance(1, 10, MS(4000));
        assert!(!s.is_visible());
    }

    #[test]
    fn test_disabled_is_noop() {
        let mut s = CaptionScheduler::new(CaptionConfig::default().with_enabled(false));
        s.advance(0, 10, MS(0));
        s.update(MS(60_000));
        assert!(!s.is_visible());
        assert!(s.current_phrase().is_none());
    }

    #[test]
    fn test_zero_slides_is_noop() {
        let mut s = scheduler();
        s.advance(0, 0, MS(0));
        s.update(MS(60_000));
        assert!(s.current_phrase().is_none());
        assert_eq!(s.used_count(), 0);
    }

    #[test]
    fn test_out_of_range_index_clamps() {
        let mut s = scheduler();
        s.advance(99, 10, MS(0));
        s.update(MS(3000));
        // Clamped to the last slide; still selects normally.
        assert!(s.is_visible());
    }

    #[test]
    fn test_exhausted_pool_falls_back() {
        let mut s = scheduler();
        s.mark_all_used();

        s.advance(0, 10, MS(0));
        s.update(MS(3000));

        // Every phrase is used; selection still terminates with a repeat.
        assert!(s.is_visible());
        assert!(s.current_phrase().is_some());
    }

    #[test]
    fn test_clear_used_phrases() {
        let mut s = scheduler();
        s.mark_all_used();
        s.clear_used_phrases();
        assert_eq!(s.used_count(), 0);
    }

    #[test]
    fn test_hide_cancels_auto_hide_and_pending() {
        let mut s = scheduler();
        s.advance(0, 10, MS(0));
        s.hide_caption();

        // The cancelled selection never fires.
        s.update(MS(10_000));
        assert!(s.current_phrase().is_none());
        assert!(!s.is_visible());
    }

    #[test]
    fn test_show_rearms_auto_hide() {
        let mut s = scheduler();
        s.advance(0, 10, MS(0));
        s.update(MS(3000));
        s.hide_caption();
        assert!(!s.is_visible());

        s.show_caption(MS(5000));
        assert!(s.is_visible());

        s.update(MS(12_999));
        assert!(s.is_visible());
        s.update(MS(13_000));
        assert!(!s.is_visible());
    }

    #[test]
    fn test_show_without_phrase_is_noop() {
        let mut s = scheduler();
        s.show_caption(MS(0));
        assert!(!s.is_visible());
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut s = scheduler();
        s.advance(0, 10, MS(0));
        s.update(MS(3000));
        assert!(s.is_visible());

        assert!(!s.toggle_enabled());
        assert!(!s.is_visible());
        assert!(s.toggle_enabled());
        assert!(s.is_enabled());
        // Passing through disabled leaves the caption hidden.
        assert!(!s.is_visible());
    }

    #[test]
    fn test_no_mutation_after_hide() {
        // Disposal safety: once timers are cancelled, elapsed time changes
        // nothing. With deadlines-as-data this holds structurally; the test
        // pins it down.
        let mut s = scheduler();
        s.advance(0, 10, MS(0));
        s.update(MS(3000));
        let phrase = s.current_phrase();
        s.hide_caption();

        s.update(MS(500_000));
        assert_eq!(s.current_phrase(), phrase);
        assert!(!s.is_visible());
    }

    #[test]
    fn test_no_auto_hide_stays_visible() {
        let mut s = CaptionScheduler::new(CaptionConfig::default().with_auto_hide(false))
            .with_seed(7);
        s.advance(0, 10, MS(0));
        s.update(MS(3000));
        assert!(s.is_visible());

        s.update(MS(600_000));
        assert!(s.is_visible());
    }

    #[test]
    fn test_repeats_avoided_until_exhausted() {
        let mut s = scheduler();
        let mut seen = HashSet::new();
        // 6 transitions; far fewer than the 48-phrase bank, so with
        // retries every selection should be fresh.
        for i in 0..6u64 {
            let base = MS(i * 20_000);
            s.advance((i as usize) % 10, 10, base);
            s.update(base + MS(3000));
            let phrase = s.current_phrase().unwrap();
            assert!(seen.insert(phrase), "repeated phrase: {phrase}");
        }
    }
}
