//! Per-run display identity and cosmetic attributes

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use serde::{Deserialize, Serialize};

// Names and tags end up space-separated in the history file, so none may
// contain whitespace.
const NAMES: &[&str] = &[
    "Gus", "Pip", "Dot", "Moxie", "Biscuit", "Noodle", "Ziggy", "Pepper", "Waffles", "Juniper",
    "Otto", "Sprocket", "Lulu", "Tofu", "Rocket", "Mango",
];

const TAGS: &[&str] = &[
    "cap", "bowtie", "scarf", "monocle", "goggles", "crown", "headband", "sunglasses",
];

/// Most cosmetic tags a single run can draw
pub const MAX_TAGS: usize = 2;

/// Who is flying this run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunIdentity {
    pub name: String,
    pub tags: Vec<String>,
}

impl RunIdentity {
    /// Draw a name and up to [`MAX_TAGS`] distinct tags
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let name = NAMES.choose(rng).copied().unwrap_or("Gopher").to_string();
        let count = rng.random_range(0..=MAX_TAGS);
        let mut pool: Vec<&str> = TAGS.to_vec();
        pool.shuffle(rng);
        let tags = pool.into_iter().take(count).map(str::to_string).collect();
        Self { name, tags }
    }
}
