//! Outfit skeletons and the enumeration of concrete item combinations.
//!
//! Enumeration order is part of the contract, since ties in confidence keep
//! generation order: required categories are walked in the skeleton's
//! declared order with the last category varying fastest, and items within a
//! category keep wardrobe order.

use crate::config::EngineConfig;
use crate::wardrobe::{Category, ClothingItem};
use std::collections::BTreeMap;
use tracing::trace;

/// Whether a skeleton's weight scales the final confidence.
///
/// Weights are carried on every skeleton but do not currently affect scoring.
pub const APPLY_SKELETON_WEIGHT: bool = false;

/// A complete outfit shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Skeleton {
    pub name: &'static str,
    /// Categories that must each contribute exactly one item.
    pub required: &'static [Category],
    /// Categories that may complement the outfit; not combined in.
    pub optional: &'static [Category],
    pub weight: f64,
}

/// Skeletons evaluated by the engine, in evaluation order.
pub const SKELETONS: [Skeleton; 3] = [
    Skeleton {
        name: "classic",
        required: &[Category::Tops, Category::Bottoms, Category::Shoes],
        optional: &[Category::Outerwear, Category::Accessories],
        weight: 1.0,
    },
    Skeleton {
        name: "dress",
        required: &[Category::Dresses, Category::Shoes],
        optional: &[Category::Outerwear, Category::Accessories],
        weight: 1.0,
    },
    Skeleton {
        name: "layered",
        required: &[
            Category::Tops,
            Category::Bottoms,
            Category::Shoes,
            Category::Outerwear,
        ],
        optional: &[Category::Accessories],
        weight: 0.9,
    },
];

/// Items grouped by category, each group in wardrobe order.
pub type CategoryIndex<'a> = BTreeMap<Category, Vec<&'a ClothingItem>>;

/// Group items by category, keeping their relative order.
pub fn partition_by_category<'a>(
    items: impl IntoIterator<Item = &'a ClothingItem>,
) -> CategoryIndex<'a> {
    let mut index = CategoryIndex::new();
    for item in items {
        index.entry(item.category).or_default().push(item);
    }
    index
}

/// Enumerate item combinations satisfying `skeleton`'s required categories.
///
/// Only the first `max_items_per_category` items of each category take part,
/// and enumeration stops silently after `max_combinations_per_skeleton`
/// combinations. A missing required category yields nothing.
pub fn generate_combinations<'a>(
    by_category: &CategoryIndex<'a>,
    skeleton: &Skeleton,
    config: &EngineConfig,
) -> Vec<Vec<&'a ClothingItem>> {
    let pools: Vec<&[&'a ClothingItem]> = skeleton
        .required
        .iter()
        .map(|category| {
            by_category
                .get(category)
                .map(|items| &items[..items.len().min(config.max_items_per_category)])
                .unwrap_or(&[])
        })
        .collect();

    if pools.is_empty()
        || pools.iter().any(|pool| pool.is_empty())
        || config.max_combinations_per_skeleton == 0
    {
        trace!(
            target: "stylist::engine",
            skeleton = skeleton.name,
            "skeleton cannot be satisfied"
        );
        return Vec::new();
    }

    let mut combinations = Vec::new();
    let mut cursor = vec![0usize; pools.len()];

    'enumerate: loop {
        let candidate: Vec<&'a ClothingItem> = cursor
            .iter()
            .zip(&pools)
            .map(|(&i, pool)| pool[i])
            .collect();

        // Distinct categories cannot share an item, unless the wardrobe itself
        // repeats an id.
        if !reuses_item(&candidate) {
            combinations.push(candidate);
            if combinations.len() >= config.max_combinations_per_skeleton {
                break;
            }
        }

        // Advance the odometer, last position fastest.
        let mut position = pools.len();
        loop {
            if position == 0 {
                break 'enumerate;
            }
            position -= 1;
            cursor[position] += 1;
            if cursor[position] < pools[position].len() {
                break;
            }
            cursor[position] = 0;
        }
    }

    trace!(
        target: "stylist::engine",
        skeleton = skeleton.name,
        count = combinations.len(),
        "generated combinations"
    );
    combinations
}

fn reuses_item(items: &[&ClothingItem]) -> bool {
    items
        .iter()
        .enumerate()
        .any(|(i, a)| items[i + 1..].iter().any(|b| b.id == a.id))
}
