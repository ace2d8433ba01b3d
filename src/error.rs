//! Error types for fiesta.
//!
//! The crate has no fallible I/O; errors are construction-time precondition
//! violations. Runtime precondition violations (bad slide indices, zero
//! totals) are clamped or ignored with a logged warning instead, so a bad
//! call can never corrupt scheduler state.

use std::fmt;

/// Errors that can occur when building a slideshow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideshowError {
    /// A slideshow needs at least one slide.
    NoSlides,
}

impl fmt::Display for SlideshowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlideshowError::NoSlides => {
                write!(f, "Slideshow requires at least one slide")
            }
        }
    }
}

impl std::error::Error for SlideshowError {}
