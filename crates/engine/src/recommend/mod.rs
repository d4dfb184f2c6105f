//! Outfit scoring and the recommendation record it produces.

mod explainer;
mod scorer;

pub use explainer::{generate_reasoning, summarize_recommendations, FALLBACK_REASONING};
pub use scorer::{OutfitScorer, Scorer};

use crate::types::Confidence;
use crate::wardrobe::{ClothingItem, Occasion};
use serde::{Deserialize, Serialize};

/// One scored outfit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitRecommendation {
    /// Items composing the outfit, in skeleton category order.
    pub items: Vec<ClothingItem>,
    /// Final confidence (0.0 - 1.0).
    pub confidence: Confidence,
    /// Style fit for the occasion (0.0 - 1.0).
    pub style_score: f64,
    /// Mean pairwise color harmony (0.0 - 1.0).
    pub color_harmony: f64,
    /// Human-readable explanation.
    pub reasoning: String,
    /// Occasion the outfit was scored against.
    pub occasion: Occasion,
    /// Skeleton that produced the outfit, when it came from the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skeleton: Option<String>,
    /// Additive parts of the confidence.
    pub breakdown: ScoreBreakdown,
}

impl OutfitRecommendation {
    /// Item ids in outfit order.
    pub fn item_ids(&self) -> Vec<&str> {
        self.items.iter().map(|i| i.id.as_str()).collect()
    }

    /// Item ids sorted, identifying the outfit regardless of item order.
    pub fn outfit_key(&self) -> Vec<&str> {
        let mut ids = self.item_ids();
        ids.sort_unstable();
        ids
    }
}

/// Components summed into an outfit's confidence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    /// Weighted style and harmony.
    pub base: f64,
    /// Bonus for wearing a preferred color.
    pub color_preference_bonus: f64,
    /// Bonus for rarely worn items.
    pub freshness_bonus: f64,
    /// Bonus for including a favorite.
    pub favorite_bonus: f64,
}

impl ScoreBreakdown {
    /// Unclamped sum of all components.
    pub fn total(&self) -> f64 {
        self.base + self.color_preference_bonus + self.freshness_bonus + self.favorite_bonus
    }
}
