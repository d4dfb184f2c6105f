//! Confidence scoring for a single outfit.

use super::{explainer, OutfitRecommendation, ScoreBreakdown};
use crate::harmony::outfit_harmony;
use crate::style::style_score;
use crate::types::{mean_or, Confidence};
use crate::wardrobe::{ClothingItem, ColorFamily, Occasion};

/// Weights for the base score. They sum to 0.9, leaving room for bonuses.
const STYLE_WEIGHT: f64 = 0.5;
const HARMONY_WEIGHT: f64 = 0.4;

const COLOR_PREFERENCE_BONUS: f64 = 0.1;
const FAVORITE_BONUS: f64 = 0.05;
/// Maximum freshness bonus, earned by never-worn outfits.
const FRESHNESS_BONUS: f64 = 0.1;
/// Average wear count at which the freshness bonus reaches zero.
const FRESHNESS_HORIZON: f64 = 10.0;

/// Trait for scoring an outfit against an occasion.
pub trait Scorer {
    /// Score the items as one outfit.
    fn score(&self, items: &[&ClothingItem], occasion: Occasion) -> OutfitRecommendation;
}

/// Scorer combining style fit, color harmony and situational bonuses.
#[derive(Debug, Clone, Default)]
pub struct OutfitScorer {
    preferred_colors: Vec<ColorFamily>,
}

impl OutfitScorer {
    /// Create a new scorer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reward outfits that wear any of these colors.
    pub fn with_preferred_colors(mut self, colors: Vec<ColorFamily>) -> Self {
        self.preferred_colors = colors;
        self
    }

    /// Bonus when any item wears a preferred color.
    pub fn color_preference_bonus(&self, items: &[&ClothingItem]) -> f64 {
        let matched = items
            .iter()
            .any(|item| self.preferred_colors.iter().any(|c| item.has_color(*c)));
        if matched {
            COLOR_PREFERENCE_BONUS
        } else {
            0.0
        }
    }
}

/// Bonus shrinking linearly with average wear count, never negative.
pub fn freshness_bonus(items: &[&ClothingItem]) -> f64 {
    let average_wear = mean_or(items.iter().map(|i| f64::from(i.wear_count)), 0.0);
    ((FRESHNESS_HORIZON - average_wear) / FRESHNESS_HORIZON * FRESHNESS_BONUS).max(0.0)
}

/// Bonus when the outfit includes at least one favorite.
pub fn favorite_bonus(items: &[&ClothingItem]) -> f64 {
    if items.iter().any(|i| i.is_favorite) {
        FAVORITE_BONUS
    } else {
        0.0
    }
}

impl Scorer for OutfitScorer {
    fn score(&self, items: &[&ClothingItem], occasion: Occasion) -> OutfitRecommendation {
        let style = style_score(items, occasion);
        let harmony = outfit_harmony(items);

        let breakdown = ScoreBreakdown {
            base: STYLE_WEIGHT * style + HARMONY_WEIGHT * harmony,
            color_preference_bonus: self.color_preference_bonus(items),
            freshness_bonus: freshness_bonus(items),
            favorite_bonus: favorite_bonus(items),
        };

        OutfitRecommendation {
            items: items.iter().map(|i| (*i).clone()).collect(),
            confidence: Confidence::new(breakdown.total()),
            style_score: style,
            color_harmony: harmony,
            reasoning: explainer::generate_reasoning(items, occasion, style, harmony),
            occasion,
            skeleton: None,
            breakdown,
        }
    }
}
