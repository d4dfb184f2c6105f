//! Errors raised where wardrobe records are admitted into the engine.
//!
//! Scoring itself never fails. Every "no result" situation is an empty
//! recommendation list, so the only fallible step is turning an untyped
//! record into a [`ClothingItem`](crate::ClothingItem).

use thiserror::Error;
use trigram::similarity;

/// Minimum trigram similarity for a "did you mean" suggestion.
const SUGGESTION_THRESHOLD: f32 = 0.3;

/// Errors that can occur while admitting wardrobe data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum WardrobeError {
    /// Category outside the fixed set.
    #[error("invalid category '{value}'{}", did_you_mean(.suggestion))]
    InvalidCategory {
        value: String,
        suggestion: Option<String>,
    },

    /// Color outside the color-family enumeration.
    #[error("invalid color '{value}'{}", did_you_mean(.suggestion))]
    InvalidColor {
        value: String,
        suggestion: Option<String>,
    },

    /// Style tag outside the style enumeration.
    #[error("invalid style '{value}'{}", did_you_mean(.suggestion))]
    InvalidStyle {
        value: String,
        suggestion: Option<String>,
    },

    /// Season outside the season enumeration.
    #[error("invalid season '{value}'{}", did_you_mean(.suggestion))]
    InvalidSeason {
        value: String,
        suggestion: Option<String>,
    },

    /// Occasion outside the occasion enumeration.
    #[error("invalid occasion '{value}'{}", did_you_mean(.suggestion))]
    InvalidOccasion {
        value: String,
        suggestion: Option<String>,
    },

    /// The primary color is neither one of the item's colors nor `multi`.
    #[error("item '{id}': primary color '{primary}' is not among its colors")]
    PrimaryColorNotListed { id: String, primary: String },

    /// A record arrived without an identifier.
    #[error("item id must not be empty")]
    EmptyItemId,
}

fn did_you_mean(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!("; did you mean '{}'?", s),
        None => String::new(),
    }
}

/// Closest candidate to `value` by trigram similarity, if any is close enough.
pub(crate) fn closest_match(value: &str, candidates: &[&str]) -> Option<String> {
    let needle = value.to_lowercase();
    candidates
        .iter()
        .map(|c| (*c, similarity(&needle, c)))
        .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(c, _)| c.to_string())
}
