//! Test utilities for the engine crate.

use crate::wardrobe::{Category, ClothingItem, ColorFamily, ItemStyle, Season};
use chrono::{TimeZone, Utc};

/// Unworn, non-favorite, all-season item with a single color.
pub(crate) fn item(
    id: &str,
    category: Category,
    color: ColorFamily,
    style: ItemStyle,
) -> ClothingItem {
    ClothingItem {
        id: id.to_string(),
        user_id: "tester".to_string(),
        category,
        item_type: None,
        colors: vec![color],
        primary_color: color,
        style,
        seasons: vec![Season::AllSeason],
        tags: Vec::new(),
        wear_count: 0,
        is_favorite: false,
        added_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
}
