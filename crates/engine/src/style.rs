//! How well item styles suit an occasion.

use crate::types::mean_or;
use crate::wardrobe::{ClothingItem, ItemStyle, Occasion};

pub const PREFERRED_SCORE: f64 = 1.0;
pub const ACCEPTABLE_SCORE: f64 = 0.7;
pub const AVOID_SCORE: f64 = 0.2;
/// Style not mentioned in any bucket for the occasion.
pub const UNLISTED_SCORE: f64 = 0.5;

/// Style buckets for one occasion.
#[derive(Debug)]
pub struct StyleProfile {
    pub preferred: &'static [ItemStyle],
    pub acceptable: &'static [ItemStyle],
    pub avoid: &'static [ItemStyle],
}

use ItemStyle::*;

static CASUAL: StyleProfile = StyleProfile {
    preferred: &[Casual, Trendy],
    acceptable: &[Sporty],
    avoid: &[Elegant],
};

static WORK: StyleProfile = StyleProfile {
    preferred: &[Business],
    acceptable: &[Casual, Elegant],
    avoid: &[Sporty],
};

static DATE: StyleProfile = StyleProfile {
    preferred: &[Elegant, Trendy],
    acceptable: &[Casual],
    avoid: &[Sporty],
};

static FORMAL: StyleProfile = StyleProfile {
    preferred: &[Elegant],
    acceptable: &[Business],
    avoid: &[Casual, Sporty],
};

static PARTY: StyleProfile = StyleProfile {
    preferred: &[Trendy, Elegant],
    acceptable: &[Casual],
    avoid: &[Business],
};

/// Style profile for an occasion.
pub fn style_profile(occasion: Occasion) -> &'static StyleProfile {
    match occasion {
        Occasion::Casual => &CASUAL,
        Occasion::Work => &WORK,
        Occasion::Date => &DATE,
        Occasion::Formal => &FORMAL,
        Occasion::Party => &PARTY,
    }
}

/// Score a single style tag against an occasion.
pub fn item_style_score(style: ItemStyle, occasion: Occasion) -> f64 {
    let profile = style_profile(occasion);
    if profile.preferred.contains(&style) {
        PREFERRED_SCORE
    } else if profile.acceptable.contains(&style) {
        ACCEPTABLE_SCORE
    } else if profile.avoid.contains(&style) {
        AVOID_SCORE
    } else {
        UNLISTED_SCORE
    }
}

/// Mean style fit of the items for `occasion`; 0 for an empty outfit.
pub fn style_score(items: &[&ClothingItem], occasion: Occasion) -> f64 {
    mean_or(
        items.iter().map(|i| item_style_score(i.style, occasion)),
        0.0,
    )
}
