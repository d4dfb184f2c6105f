//! Generate human-readable reasoning for scored outfits.

use super::OutfitRecommendation;
use crate::wardrobe::{ClothingItem, Occasion};

/// Reasoning used when no clause applies.
pub const FALLBACK_REASONING: &str = "Solid outfit combination for the occasion.";

const PERFECT_STYLE_THRESHOLD: f64 = 0.8;
const GOOD_STYLE_THRESHOLD: f64 = 0.6;
const EXCELLENT_COLOR_THRESHOLD: f64 = 0.85;
const GOOD_COLOR_THRESHOLD: f64 = 0.7;

/// Build the reasoning sentence for an outfit.
///
/// Clauses appear in a fixed order: style tier, color tier, favorites,
/// unworn items.
pub fn generate_reasoning(
    items: &[&ClothingItem],
    occasion: Occasion,
    style_score: f64,
    color_harmony: f64,
) -> String {
    let mut parts = Vec::new();

    if style_score >= PERFECT_STYLE_THRESHOLD {
        parts.push(format!("Perfect {} styling", occasion));
    } else if style_score >= GOOD_STYLE_THRESHOLD {
        parts.push(format!("Good fit for {}", occasion));
    }

    if color_harmony >= EXCELLENT_COLOR_THRESHOLD {
        parts.push("Excellent color coordination".to_string());
    } else if color_harmony >= GOOD_COLOR_THRESHOLD {
        parts.push("Good color harmony".to_string());
    }

    let favorites = items.iter().filter(|i| i.is_favorite).count();
    if favorites > 0 {
        parts.push(format!("Includes {}", count_items(favorites, "favorite")));
    }

    let unworn = items.iter().filter(|i| i.wear_count == 0).count();
    if unworn > 0 {
        parts.push(format!("Features {}", count_items(unworn, "unworn")));
    }

    if parts.is_empty() {
        return FALLBACK_REASONING.to_string();
    }

    format!("{}.", parts.join(". "))
}

fn count_items(count: usize, adjective: &str) -> String {
    if count == 1 {
        format!("1 {} item", adjective)
    } else {
        format!("{} {} items", count, adjective)
    }
}

/// One-line summary of a recommendation list.
pub fn summarize_recommendations(recommendations: &[OutfitRecommendation]) -> String {
    let Some(top) = recommendations.first() else {
        return "No outfits found".to_string();
    };

    let noun = if recommendations.len() == 1 {
        "outfit"
    } else {
        "outfits"
    };
    format!(
        "Found {} {} for {}, top confidence {}",
        recommendations.len(),
        noun,
        top.occasion,
        top.confidence
    )
}
