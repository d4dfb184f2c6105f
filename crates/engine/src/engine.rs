//! Recommendation pipeline: filter, generate, score, rank, de-duplicate.

use crate::combinations::{
    generate_combinations, partition_by_category, APPLY_SKELETON_WEIGHT, SKELETONS,
};
use crate::config::EngineConfig;
use crate::recommend::{OutfitRecommendation, OutfitScorer, Scorer};
use crate::types::Confidence;
use crate::wardrobe::{ClothingItem, ColorFamily, Occasion, Season};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::{BTreeSet, HashSet};
use tracing::debug;

/// Items added within this many days count as new.
const NEW_ITEM_DAYS: i64 = 7;
const NEW_ITEM_PRIORITY: i64 = 5;
const FAVORITE_PRIORITY: i64 = 3;
/// Wear count at which an item's wear priority reaches zero.
const WEAR_PRIORITY_BASE: i64 = 10;

/// Per-request filters and preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendOptions {
    /// Keep only items wearable in this season.
    pub season: Option<Season>,
    /// Colors earning the color-preference bonus.
    pub preferred_colors: Vec<ColorFamily>,
    /// Item ids that must not appear.
    pub exclude_ids: BTreeSet<String>,
    /// Item ids that every outfit must contain, when set.
    pub include_ids: Option<BTreeSet<String>>,
    /// Result count; the engine config decides when unset.
    pub max_recommendations: Option<usize>,
}

impl RecommendOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_season(mut self, season: Season) -> Self {
        self.season = Some(season);
        self
    }

    pub fn with_preferred_colors(mut self, colors: Vec<ColorFamily>) -> Self {
        self.preferred_colors = colors;
        self
    }

    pub fn excluding<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_ids.extend(ids.into_iter().map(Into::into));
        self
    }

    pub fn including<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_ids
            .get_or_insert_with(BTreeSet::new)
            .extend(ids.into_iter().map(Into::into));
        self
    }

    pub fn with_max_recommendations(mut self, max: usize) -> Self {
        self.max_recommendations = Some(max);
        self
    }
}

/// Produces ranked outfit recommendations from a wardrobe snapshot.
///
/// The engine holds only its limits; every call is independent and returns
/// identical output for identical input.
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    config: EngineConfig,
}

impl RecommendationEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Rank outfits for `occasion`, best first.
    ///
    /// An empty result is a normal outcome: nothing left after filtering, no
    /// skeleton satisfiable, or no combination containing every included id.
    pub fn recommend(
        &self,
        wardrobe: &[ClothingItem],
        occasion: Occasion,
        options: &RecommendOptions,
    ) -> Vec<OutfitRecommendation> {
        self.recommend_from(wardrobe.iter(), occasion, options)
    }

    /// Like [`recommend`](Self::recommend), but items that are new, favorite or
    /// rarely worn are offered to the generator first.
    pub fn quick_suggestions(
        &self,
        wardrobe: &[ClothingItem],
        occasion: Occasion,
        max_suggestions: usize,
    ) -> Vec<OutfitRecommendation> {
        self.quick_suggestions_at(wardrobe, occasion, max_suggestions, Utc::now())
    }

    /// [`quick_suggestions`](Self::quick_suggestions) with an explicit clock.
    pub fn quick_suggestions_at(
        &self,
        wardrobe: &[ClothingItem],
        occasion: Occasion,
        max_suggestions: usize,
        now: DateTime<Utc>,
    ) -> Vec<OutfitRecommendation> {
        let mut prioritized: Vec<&ClothingItem> = wardrobe.iter().collect();
        // stable: equal priorities keep wardrobe order
        prioritized.sort_by_key(|item| Reverse(item_priority(item, now)));

        let options = RecommendOptions::new().with_max_recommendations(max_suggestions);
        self.recommend_from(prioritized, occasion, &options)
    }

    fn recommend_from<'a>(
        &self,
        wardrobe: impl IntoIterator<Item = &'a ClothingItem>,
        occasion: Occasion,
        options: &RecommendOptions,
    ) -> Vec<OutfitRecommendation> {
        let candidates: Vec<&ClothingItem> = wardrobe
            .into_iter()
            .filter(|item| !options.exclude_ids.contains(&item.id))
            .filter(|item| match options.season {
                Some(season) => item.fits_season(season),
                None => true,
            })
            .collect();

        if candidates.is_empty() {
            debug!(
                target: "stylist::engine",
                occasion = %occasion,
                "no items left after filtering"
            );
            return Vec::new();
        }

        let by_category = partition_by_category(candidates.iter().copied());
        let scorer = OutfitScorer::new().with_preferred_colors(options.preferred_colors.clone());

        let mut scored = Vec::new();
        for skeleton in &SKELETONS {
            let combinations = generate_combinations(&by_category, skeleton, &self.config);
            let generated = combinations.len();

            for combination in combinations {
                if !contains_all(&combination, options.include_ids.as_ref()) {
                    continue;
                }
                let mut recommendation = scorer.score(&combination, occasion);
                recommendation.skeleton = Some(skeleton.name.to_string());
                if APPLY_SKELETON_WEIGHT {
                    recommendation.confidence =
                        Confidence::new(recommendation.confidence.value() * skeleton.weight);
                }
                scored.push(recommendation);
            }

            debug!(
                target: "stylist::engine",
                skeleton = skeleton.name,
                generated,
                "skeleton evaluated"
            );
        }

        // sort_by is stable, so ties keep generation order
        scored.sort_by(|a, b| a.confidence.rank_cmp(&b.confidence));

        let max = options
            .max_recommendations
            .unwrap_or(self.config.max_recommendations);
        let mut ranked = dedup_by_outfit(scored);
        ranked.truncate(max);

        debug!(
            target: "stylist::engine",
            occasion = %occasion,
            candidates = candidates.len(),
            returned = ranked.len(),
            "recommendations ready"
        );
        ranked
    }
}

/// Rank outfits with the default limits.
pub fn recommend(
    wardrobe: &[ClothingItem],
    occasion: Occasion,
    options: &RecommendOptions,
) -> Vec<OutfitRecommendation> {
    RecommendationEngine::default().recommend(wardrobe, occasion, options)
}

/// Ordering priority used by quick suggestions; higher goes first.
pub fn item_priority(item: &ClothingItem, now: DateTime<Utc>) -> i64 {
    let wear = WEAR_PRIORITY_BASE - i64::from(item.wear_count);
    let new = if item.days_since_added(now) < NEW_ITEM_DAYS {
        NEW_ITEM_PRIORITY
    } else {
        0
    };
    let favorite = if item.is_favorite {
        FAVORITE_PRIORITY
    } else {
        0
    };
    wear + new + favorite
}

fn contains_all(combination: &[&ClothingItem], include: Option<&BTreeSet<String>>) -> bool {
    match include {
        Some(ids) => ids
            .iter()
            .all(|id| combination.iter().any(|item| &item.id == id)),
        None => true,
    }
}

/// Keep the first outfit for each distinct set of item ids.
pub(crate) fn dedup_by_outfit(ranked: Vec<OutfitRecommendation>) -> Vec<OutfitRecommendation> {
    let mut seen: HashSet<Vec<String>> = HashSet::new();
    ranked
        .into_iter()
        .filter(|rec| {
            let key = rec.outfit_key().into_iter().map(String::from).collect();
            seen.insert(key)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::item;
    use crate::wardrobe::{Category, ItemStyle};
    use chrono::TimeZone;

    fn work_wardrobe() -> Vec<ClothingItem> {
        let mut top = item("top", Category::Tops, ColorFamily::White, ItemStyle::Business);
        top.is_favorite = true;
        vec![
            top,
            item("bottom", Category::Bottoms, ColorFamily::Navy, ItemStyle::Business),
            item("shoes", Category::Shoes, ColorFamily::Black, ItemStyle::Casual),
        ]
    }

    fn tops_wardrobe(tops: usize) -> Vec<ClothingItem> {
        let mut wardrobe: Vec<ClothingItem> = (1..=tops)
            .map(|n| item(&format!("t{n}"), Category::Tops, ColorFamily::Gray, ItemStyle::Casual))
            .collect();
        wardrobe.push(item("b1", Category::Bottoms, ColorFamily::Gray, ItemStyle::Casual));
        wardrobe.push(item("s1", Category::Shoes, ColorFamily::Gray, ItemStyle::Casual));
        wardrobe
    }

    fn first_ids(recs: &[OutfitRecommendation]) -> Vec<String> {
        recs.iter().map(|r| r.items[0].id.clone()).collect()
    }

    #[test]
    fn test_empty_wardrobe_returns_empty() {
        assert!(recommend(&[], Occasion::Work, &RecommendOptions::default()).is_empty());
    }

    #[test]
    fn test_unsatisfiable_wardrobe_returns_empty() {
        let wardrobe = vec![
            item("t1", Category::Tops, ColorFamily::Black, ItemStyle::Casual),
            item("a1", Category::Accessories, ColorFamily::Black, ItemStyle::Casual),
        ];
        assert!(recommend(&wardrobe, Occasion::Casual, &RecommendOptions::default()).is_empty());
    }

    #[test]
    fn test_work_scenario_end_to_end() {
        let recs = recommend(&work_wardrobe(), Occasion::Work, &RecommendOptions::default());
        assert_eq!(recs.len(), 1);

        let rec = &recs[0];
        assert_eq!(rec.item_ids(), vec!["top", "bottom", "shoes"]);
        assert_eq!(rec.skeleton.as_deref(), Some("classic"));
        assert!((rec.style_score - 0.9).abs() < 1e-9);
        assert!((rec.color_harmony - 0.65).abs() < 1e-9);
        assert!((rec.confidence.value() - 0.86).abs() < 1e-9);
        assert_eq!(
            rec.reasoning,
            "Perfect work styling. Includes 1 favorite item. Features 3 unworn items."
        );
    }

    #[test]
    fn test_excluded_items_are_dropped() {
        let options = RecommendOptions::new().excluding(["shoes"]);
        assert!(recommend(&work_wardrobe(), Occasion::Work, &options).is_empty());
    }

    #[test]
    fn test_season_filter_keeps_all_season_items() {
        let mut wardrobe = work_wardrobe();
        wardrobe[0].seasons = vec![Season::Summer];
        // bottom and shoes stay all-season

        let summer = RecommendOptions::new().with_season(Season::Summer);
        assert_eq!(recommend(&wardrobe, Occasion::Work, &summer).len(), 1);

        let winter = RecommendOptions::new().with_season(Season::Winter);
        assert!(recommend(&wardrobe, Occasion::Work, &winter).is_empty());
    }

    #[test]
    fn test_include_filter_requires_all_ids() {
        let wardrobe = tops_wardrobe(3);

        let one = RecommendOptions::new().including(["t2"]);
        let recs = recommend(&wardrobe, Occasion::Casual, &one);
        assert_eq!(first_ids(&recs), vec!["t2"]);

        // no outfit holds two tops
        let both = RecommendOptions::new().including(["t1", "t2"]);
        assert!(recommend(&wardrobe, Occasion::Casual, &both).is_empty());

        let unknown = RecommendOptions::new().including(["missing"]);
        assert!(recommend(&wardrobe, Occasion::Casual, &unknown).is_empty());
    }

    #[test]
    fn test_ties_keep_generation_order() {
        let recs = recommend(&tops_wardrobe(3), Occasion::Casual, &RecommendOptions::default());
        assert_eq!(first_ids(&recs), vec!["t1", "t2", "t3"]);
    }

    #[test]
    fn test_results_sorted_by_confidence() {
        let mut wardrobe = tops_wardrobe(3);
        // worn items keep the total below the clamp
        for item in &mut wardrobe {
            item.wear_count = 10;
        }
        // a favorite top lifts its outfit above the rest
        wardrobe[2].is_favorite = true;
        let recs = recommend(&wardrobe, Occasion::Casual, &RecommendOptions::default());
        assert_eq!(first_ids(&recs), vec!["t3", "t1", "t2"]);
        assert!((recs[0].confidence.value() - 0.95).abs() < 1e-9);
        assert!((recs[1].confidence.value() - 0.9).abs() < 1e-9);
        assert!(recs
            .windows(2)
            .all(|w| w[0].confidence.value() >= w[1].confidence.value()));
    }

    #[test]
    fn test_category_cap_limits_tops() {
        let recs = recommend(&tops_wardrobe(7), Occasion::Casual, &RecommendOptions::default());
        assert_eq!(first_ids(&recs), vec!["t1", "t2", "t3", "t4", "t5"]);
    }

    #[test]
    fn test_max_recommendations() {
        let wardrobe = tops_wardrobe(5);
        let options = RecommendOptions::new().with_max_recommendations(2);
        assert_eq!(recommend(&wardrobe, Occasion::Casual, &options).len(), 2);

        let engine =
            RecommendationEngine::new(EngineConfig::default().with_max_recommendations(3));
        assert_eq!(
            engine
                .recommend(&wardrobe, Occasion::Casual, &RecommendOptions::default())
                .len(),
            3
        );
    }

    #[test]
    fn test_duplicate_wardrobe_entry_collapses() {
        let mut wardrobe = work_wardrobe();
        wardrobe.push(wardrobe[0].clone());

        let recs = recommend(&wardrobe, Occasion::Work, &RecommendOptions::default());
        assert_eq!(recs.len(), 1);
    }

    #[test]
    fn test_dedup_ignores_item_order() {
        let wardrobe = work_wardrobe();
        let scorer = OutfitScorer::new();
        let forward = scorer.score(&[&wardrobe[0], &wardrobe[1], &wardrobe[2]], Occasion::Work);
        let reversed = scorer.score(&[&wardrobe[2], &wardrobe[1], &wardrobe[0]], Occasion::Work);
        assert_ne!(forward.color_harmony, reversed.color_harmony);

        let unique = dedup_by_outfit(vec![forward.clone(), reversed]);
        assert_eq!(unique, vec![forward]);
    }

    #[test]
    fn test_layered_outfits_generated() {
        let mut wardrobe = work_wardrobe();
        wardrobe.push(item("coat", Category::Outerwear, ColorFamily::Beige, ItemStyle::Elegant));

        let recs = recommend(&wardrobe, Occasion::Work, &RecommendOptions::default());
        let skeletons: BTreeSet<&str> = recs.iter().filter_map(|r| r.skeleton.as_deref()).collect();
        assert_eq!(skeletons, BTreeSet::from(["classic", "layered"]));
    }

    #[test]
    fn test_recommend_is_deterministic() {
        let mut wardrobe = tops_wardrobe(6);
        wardrobe.push(item("d1", Category::Dresses, ColorFamily::Red, ItemStyle::Elegant));
        wardrobe.push(item("o1", Category::Outerwear, ColorFamily::Navy, ItemStyle::Business));
        let options = RecommendOptions::new().with_preferred_colors(vec![ColorFamily::Red]);

        let first = recommend(&wardrobe, Occasion::Date, &options);
        let second = recommend(&wardrobe, Occasion::Date, &options);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_item_priority() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let mut shirt = item("t1", Category::Tops, ColorFamily::White, ItemStyle::Casual);
        shirt.wear_count = 4;
        assert_eq!(item_priority(&shirt, now), 6);

        shirt.is_favorite = true;
        assert_eq!(item_priority(&shirt, now), 9);

        shirt.added_at = now - chrono::Duration::days(2);
        assert_eq!(item_priority(&shirt, now), 14);

        shirt.wear_count = 25;
        assert_eq!(item_priority(&shirt, now), -7);
    }

    #[test]
    fn test_quick_suggestions_prefer_fresh_items() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let mut wardrobe = tops_wardrobe(7);
        for top in wardrobe.iter_mut().take(7) {
            top.wear_count = 5;
        }
        wardrobe[5].wear_count = 0; // t6
        wardrobe[6].added_at = now - chrono::Duration::days(1); // t7

        let engine = RecommendationEngine::default();
        let recs = engine.quick_suggestions_at(&wardrobe, Occasion::Casual, 50, now);
        let tops: BTreeSet<String> = first_ids(&recs).into_iter().collect();
        let expected: BTreeSet<String> = ["t1", "t2", "t3", "t6", "t7"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(tops, expected);

        let plain = engine.recommend(&wardrobe, Occasion::Casual, &RecommendOptions::default());
        assert!(!first_ids(&plain).contains(&"t7".to_string()));
    }

    #[test]
    fn test_quick_suggestions_respects_max() {
        let engine = RecommendationEngine::default();
        let recs = engine.quick_suggestions(&tops_wardrobe(4), Occasion::Casual, 2);
        assert_eq!(recs.len(), 2);
    }
}
