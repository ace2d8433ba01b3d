//! Categorized phrase bank and weighted category selection.
//!
//! Captions are drawn from six fixed categories. Selection is a two-step
//! process: pick a category by weighted cumulative threshold against a
//! single `[0, 1)` draw, then pick a phrase uniformly within it.
//!
//! Category weights depend on slide position:
//!
//! | Category | Base | First slide | Last slide |
//! |--------------|------|-------------|------------|
//! | Celebrative | 0.30 | 0.40 | 0.30 |
//! | Funny | 0.25 | 0.25 | 0.25 |
//! | Loving | 0.20 | 0.20 | 0.20 |
//! | Birthday | 0.15 | 0.30 | 0.15 |
//! | Memories | 0.05 | 0.05 | 0.30 |
//! | Motivational | 0.05 | 0.05 | 0.20 |
//!
//! The overrides are deliberately not renormalized, matching the reference
//! behavior: the cumulative walk stops at the first category whose running
//! sum meets the draw, so weight past 1.0 only shifts relative likelihood
//! and later categories can become unreachable.

use rand::rngs::SmallRng;
use rand::Rng;

/// Phrase category, in the fixed declaration order the cumulative walk uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Celebrative,
    Funny,
    Loving,
    Birthday,
    Memories,
    Motivational,
}

/// Declaration order for the weighted cumulative walk.
pub const CATEGORY_ORDER: [Category; 6] = [
    Category::Celebrative,
    Category::Funny,
    Category::Loving,
    Category::Birthday,
    Category::Memories,
    Category::Motivational,
];

impl Category {
    /// Base probability mass for this category.
    pub fn base_weight(self) -> f32 {
        match self {
            Category::Celebrative => 0.30,
            Category::Funny => 0.25,
            Category::Loving => 0.20,
            Category::Birthday => 0.15,
            Category::Memories => 0.05,
            Category::Motivational => 0.05,
        }
    }
}

/// Weight for a category given the slide position.
///
/// First slide boosts celebration and birthday wishes; last slide (of a
/// multi-slide set) boosts nostalgia and motivation. Other categories keep
/// their base weight - sums over 1.0 are intentional (see module docs).
pub fn weight_for_slide(category: Category, slide_index: usize, total_slides: usize) -> f32 {
    if slide_index == 0 {
        match category {
            Category::Celebrative => 0.40,
            Category::Birthday => 0.30,
            other => other.base_weight(),
        }
    } else if slide_index + 1 == total_slides {
        match category {
            Category::Memories => 0.30,
            Category::Motivational => 0.20,
            other => other.base_weight(),
        }
    } else {
        category.base_weight()
    }
}

/// Resolve a `[0, 1)` draw to a category via cumulative thresholding.
///
/// Walks [`CATEGORY_ORDER`], accumulating the slide-adjusted weights; the
/// first category whose running sum reaches the draw wins. Falls back to
/// `Celebrative` if rounding leaves the draw unreached.
pub fn pick_category(draw: f32, slide_index: usize, total_slides: usize) -> Category {
    let mut accumulated = 0.0;
    for category in CATEGORY_ORDER {
        accumulated += weight_for_slide(category, slide_index, total_slides);
        if draw <= accumulated {
            return category;
        }
    }
    Category::Celebrative
}

/// The compiled-in caption phrase bank.
///
/// Six categories, eight phrases each. Phrase counts are not load-bearing;
/// any non-empty category satisfies the selection contract.
#[derive(Clone, Copy, Debug, Default)]
pub struct PhraseBank;

impl PhraseBank {
    /// All phrases in a category.
    pub fn phrases(&self, category: Category) -> &'static [&'static str] {
        match category {
            Category::Celebrative => CELEBRATIVE,
            Category::Funny => FUNNY,
            Category::Loving => LOVING,
            Category::Birthday => BIRTHDAY,
            Category::Memories => MEMORIES,
            Category::Motivational => MOTIVATIONAL,
        }
    }

    /// Total phrase count across all categories.
    pub fn len(&self) -> usize {
        CATEGORY_ORDER
            .iter()
            .map(|&c| self.phrases(c).len())
            .sum()
    }

    /// Whether the bank has no phrases at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate every phrase in every category.
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        CATEGORY_ORDER
            .into_iter()
            .flat_map(|c| self.phrases(c).iter().copied())
    }

    /// Uniform-random phrase from one category.
    pub fn random_from(&self, category: Category, rng: &mut SmallRng) -> &'static str {
        let phrases = self.phrases(category);
        phrases[rng.gen_range(0..phrases.len())]
    }

    /// Uniform-random phrase from the whole bank, ignoring categories.
    pub fn random_any(&self, rng: &mut SmallRng) -> &'static str {
        let index = rng.gen_range(0..self.len());
        self.iter().nth(index).unwrap_or(CELEBRATIVE[0])
    }
}

const CELEBRATIVE: &[&str] = &[
    "What a special moment!",
    "This photo belongs in a frame!",
    "Pure happiness in one picture!",
    "Moments like these matter most!",
    "That smile lights up the room!",
    "A memory to last forever!",
    "The joy is contagious!",
    "Perfect timing for this shot!",
];

const FUNNY: &[&str] = &[
    "That happy face is priceless!",
    "Somebody is enjoying the party!",
    "The most contagious grin of the day!",
    "The cake must have been delicious!",
    "When the fun is real!",
    "That laugh could fix any bad day!",
    "Happiness in its purest form!",
    "A scene straight out of a movie!",
];

const LOVING: &[&str] = &[
    "You can feel the love in every pixel!",
    "What a beautiful connection!",
    "The best moments are shared ones!",
    "Warmth that reaches through the screen!",
    "Family and friends, what matters most!",
    "These are life's real treasures!",
    "Pure love in a photograph!",
    "Together in celebration!",
];

const BIRTHDAY: &[&str] = &[
    "Happy birthday! May moments like this repeat!",
    "Another year of life, another year of joy!",
    "Birthdays exist for memories like this!",
    "Celebrating life the best way possible!",
    "A year wiser and a year happier!",
    "May every wish come true!",
    "Age is just a number, fun is forever!",
    "Here's to many more birthdays!",
];

const MEMORIES: &[&str] = &[
    "A memory worth its weight in gold!",
    "Straight into the favorites album!",
    "One of those moments you never forget!",
    "Family history in the making!",
    "Capturing the essence of happiness!",
    "A little piece of paradise in pixels!",
    "Life is made of moments like this!",
    "Building memories one photo at a time!",
];

const MOTIVATIONAL: &[&str] = &[
    "May you always have reasons to smile like this!",
    "Happiness looks great on you!",
    "You are the star of your own celebration!",
    "Keep shining the way only you can!",
    "Life is beautiful when lived fully!",
    "May this much joy be your baseline!",
    "You deserve all the happiness in the world!",
    "Keep collecting moments like these!",
];
