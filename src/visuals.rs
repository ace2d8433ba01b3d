//! Color palettes for confetti.
//!
//! Confetti carries a CSS hex color picked uniformly from a 5-color palette.
//! The default [`Palette::Celebration`] is the classic party set; the other
//! presets suit different slideshow moods.

/// Confetti color palette.
///
/// Each palette provides exactly 5 CSS hex colors. Spawning picks one
/// uniformly per particle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Palette {
    /// Bright party colors (coral, teal, sky, salmon, mint).
    #[default]
    Celebration,

    /// Soft pastels for gentle slideshows.
    Pastel,

    /// Saturated neon for high-energy sets.
    Neon,

    /// Warm golds and ambers.
    Golden,
}

impl Palette {
    /// The 5 hex colors for this palette.
    pub fn colors(&self) -> [&'static str; 5] {
        match self {
            Palette::Celebration => ["#FF6B6B", "#4ECDC4", "#45B7D1", "#FFA07A", "#98D8C8"],
            Palette::Pastel => ["#FFD1DC", "#B5EAD7", "#C7CEEA", "#FFDAC1", "#E2F0CB"],
            Palette::Neon => ["#FF2079", "#04FFF7", "#CCFF00", "#FF6EC7", "#7DF9FF"],
            Palette::Golden => ["#FFD700", "#FFB347", "#E6B800", "#F5DEB3", "#DAA520"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_celebration() {
        assert_eq!(Palette::default(), Palette::Celebration);
    }

    #[test]
    fn test_all_palettes_are_hex() {
        for palette in [
            Palette::Celebration,
            Palette::Pastel,
            Palette::Neon,
            Palette::Golden,
        ] {
            for color in palette.colors() {
                assert!(color.starts_with('#') && color.len() == 7, "{color}");
            }
        }
    }
}
