//! Outfit recommendations from a tagged wardrobe.
//!
//! This crate provides:
//! - Typed wardrobe items, validated when records are admitted
//! - Directional color harmony and occasion-style fit models
//! - Bounded enumeration of outfit combinations per skeleton
//! - Confidence scoring with human-readable reasoning
//! - A ranking engine that filters, scores, sorts and de-duplicates
//!
//! Everything is synchronous and side-effect free; the same wardrobe,
//! occasion and options always yield the same ordered list.
//!
//! # Example
//!
//! ```rust
//! use stylist_engine::{recommend, ClothingItem, Occasion, RecommendOptions};
//!
//! let wardrobe: Vec<ClothingItem> = serde_json::from_str(r#"[
//!   {"id": "t1", "category": "tops", "colors": ["white"], "primaryColor": "white",
//!    "style": "business", "seasons": ["all-season"], "addedAt": "2024-01-01T00:00:00Z"},
//!   {"id": "b1", "category": "bottoms", "colors": ["navy"], "primaryColor": "navy",
//!    "style": "business", "seasons": ["all-season"], "addedAt": "2024-01-01T00:00:00Z"},
//!   {"id": "s1", "category": "shoes", "colors": ["black"], "primaryColor": "black",
//!    "style": "casual", "seasons": ["all-season"], "addedAt": "2024-01-01T00:00:00Z"}
//! ]"#).unwrap();
//!
//! let outfits = recommend(&wardrobe, Occasion::Work, &RecommendOptions::default());
//! assert_eq!(outfits.len(), 1);
//! assert!(outfits[0].reasoning.starts_with("Perfect work styling"));
//! ```

#![deny(unsafe_code)]

pub mod combinations;
pub mod config;
pub mod engine;
pub mod error;
pub mod harmony;
pub mod recommend;
pub mod style;
pub mod types;
pub mod wardrobe;

#[cfg(test)]
mod test_support;

pub use combinations::{
    generate_combinations, partition_by_category, CategoryIndex, Skeleton, APPLY_SKELETON_WEIGHT,
    SKELETONS,
};
pub use config::EngineConfig;
pub use engine::{item_priority, recommend, RecommendOptions, RecommendationEngine};
pub use error::WardrobeError;
pub use harmony::{harmony_profile, outfit_harmony, pair_harmony, HarmonyProfile};
pub use recommend::{
    generate_reasoning, summarize_recommendations, OutfitRecommendation, OutfitScorer,
    ScoreBreakdown, Scorer, FALLBACK_REASONING,
};
pub use style::{item_style_score, style_profile, style_score, StyleProfile};
pub use types::Confidence;
pub use wardrobe::{
    Category, ClothingItem, ClothingRecord, ColorFamily, ItemStyle, Occasion, Season,
};
