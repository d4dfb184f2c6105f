//! Tunable limits for a recommendation run.

use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_ITEMS_PER_CATEGORY: usize = 5;
pub const DEFAULT_MAX_COMBINATIONS_PER_SKELETON: usize = 100;
pub const DEFAULT_MAX_RECOMMENDATIONS: usize = 10;

/// Caps that bound combinatorial work regardless of wardrobe size.
///
/// Missing keys fall back to the defaults when deserialized, so a config file
/// only has to name the values it changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Items taken from the front of each required category.
    pub max_items_per_category: usize,
    /// Combinations kept per skeleton before enumeration stops.
    pub max_combinations_per_skeleton: usize,
    /// Result count when the caller does not ask for one.
    pub max_recommendations: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_items_per_category: DEFAULT_MAX_ITEMS_PER_CATEGORY,
            max_combinations_per_skeleton: DEFAULT_MAX_COMBINATIONS_PER_SKELETON,
            max_recommendations: DEFAULT_MAX_RECOMMENDATIONS,
        }
    }
}

impl EngineConfig {
    pub fn with_max_items_per_category(mut self, max: usize) -> Self {
        self.max_items_per_category = max;
        self
    }

    pub fn with_max_combinations_per_skeleton(mut self, max: usize) -> Self {
        self.max_combinations_per_skeleton = max;
        self
    }

    pub fn with_max_recommendations(mut self, max: usize) -> Self {
        self.max_recommendations = max;
        self
    }
}
