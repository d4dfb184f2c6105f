//! Wardrobe items and the closed enumerations they are tagged with.
//!
//! Records coming from the item store are untyped. [`ClothingItem`]
//! deserializes through [`ClothingRecord`], so an unknown category, color,
//! style or season is rejected while the wardrobe is being loaded instead of
//! surfacing somewhere inside scoring.

use crate::error::{closest_match, WardrobeError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Clothing category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Tops,
    Bottoms,
    Dresses,
    Outerwear,
    Shoes,
    Accessories,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Self::Tops,
        Self::Bottoms,
        Self::Dresses,
        Self::Outerwear,
        Self::Shoes,
        Self::Accessories,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tops => "tops",
            Self::Bottoms => "bottoms",
            Self::Dresses => "dresses",
            Self::Outerwear => "outerwear",
            Self::Shoes => "shoes",
            Self::Accessories => "accessories",
        }
    }
}

impl FromStr for Category {
    type Err = WardrobeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(s, &Self::ALL, Self::as_str).ok_or_else(|| WardrobeError::InvalidCategory {
            value: s.to_string(),
            suggestion: suggest(s, &Self::ALL, Self::as_str),
        })
    }
}

/// Color family used for harmony scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFamily {
    Black,
    White,
    Gray,
    Navy,
    Blue,
    Red,
    Green,
    Yellow,
    Orange,
    Purple,
    Pink,
    Brown,
    Beige,
    /// Patterned or multicolored; has no harmony profile of its own.
    Multi,
}

impl ColorFamily {
    pub const ALL: [ColorFamily; 14] = [
        Self::Black,
        Self::White,
        Self::Gray,
        Self::Navy,
        Self::Blue,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Orange,
        Self::Purple,
        Self::Pink,
        Self::Brown,
        Self::Beige,
        Self::Multi,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::White => "white",
            Self::Gray => "gray",
            Self::Navy => "navy",
            Self::Blue => "blue",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
            Self::Purple => "purple",
            Self::Pink => "pink",
            Self::Brown => "brown",
            Self::Beige => "beige",
            Self::Multi => "multi",
        }
    }
}

impl FromStr for ColorFamily {
    type Err = WardrobeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(s, &Self::ALL, Self::as_str).ok_or_else(|| WardrobeError::InvalidColor {
            value: s.to_string(),
            suggestion: suggest(s, &Self::ALL, Self::as_str),
        })
    }
}

/// Style tag carried by each item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStyle {
    Casual,
    Business,
    Elegant,
    Sporty,
    Trendy,
}

impl ItemStyle {
    pub const ALL: [ItemStyle; 5] = [
        Self::Casual,
        Self::Business,
        Self::Elegant,
        Self::Sporty,
        Self::Trendy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Casual => "casual",
            Self::Business => "business",
            Self::Elegant => "elegant",
            Self::Sporty => "sporty",
            Self::Trendy => "trendy",
        }
    }
}

impl FromStr for ItemStyle {
    type Err = WardrobeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(s, &Self::ALL, Self::as_str).ok_or_else(|| WardrobeError::InvalidStyle {
            value: s.to_string(),
            suggestion: suggest(s, &Self::ALL, Self::as_str),
        })
    }
}

/// Season an item is suitable for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
    #[serde(rename = "all-season")]
    AllSeason,
}

impl Season {
    pub const ALL: [Season; 5] = [
        Self::Spring,
        Self::Summer,
        Self::Fall,
        Self::Winter,
        Self::AllSeason,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Fall => "fall",
            Self::Winter => "winter",
            Self::AllSeason => "all-season",
        }
    }
}

impl FromStr for Season {
    type Err = WardrobeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(s, &Self::ALL, Self::as_str).ok_or_else(|| WardrobeError::InvalidSeason {
            value: s.to_string(),
            suggestion: suggest(s, &Self::ALL, Self::as_str),
        })
    }
}

/// Context an outfit is scored against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Occasion {
    Casual,
    Work,
    Date,
    Formal,
    Party,
}

impl Occasion {
    pub const ALL: [Occasion; 5] = [
        Self::Casual,
        Self::Work,
        Self::Date,
        Self::Formal,
        Self::Party,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Casual => "casual",
            Self::Work => "work",
            Self::Date => "date",
            Self::Formal => "formal",
            Self::Party => "party",
        }
    }
}

impl FromStr for Occasion {
    type Err = WardrobeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(s, &Self::ALL, Self::as_str).ok_or_else(|| WardrobeError::InvalidOccasion {
            value: s.to_string(),
            suggestion: suggest(s, &Self::ALL, Self::as_str),
        })
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(Category, ColorFamily, ItemStyle, Season, Occasion);

fn parse_label<T: Copy>(s: &str, all: &[T], label: fn(&T) -> &'static str) -> Option<T> {
    let wanted = s.trim();
    all.iter()
        .copied()
        .find(|v| label(v).eq_ignore_ascii_case(wanted))
}

fn suggest<T>(s: &str, all: &[T], label: fn(&T) -> &'static str) -> Option<String> {
    let labels: Vec<&str> = all.iter().map(label).collect();
    closest_match(s.trim(), &labels)
}

/// One wardrobe entry, as seen by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ClothingRecord", rename_all = "camelCase")]
pub struct ClothingItem {
    pub id: String,
    pub user_id: String,
    pub category: Category,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    pub colors: Vec<ColorFamily>,
    pub primary_color: ColorFamily,
    pub style: ItemStyle,
    pub seasons: Vec<Season>,
    pub tags: Vec<String>,
    pub wear_count: u32,
    pub is_favorite: bool,
    pub added_at: DateTime<Utc>,
}

impl ClothingItem {
    /// True when the item can be worn in `season` (directly or as all-season).
    pub fn fits_season(&self, season: Season) -> bool {
        self.seasons
            .iter()
            .any(|s| *s == season || *s == Season::AllSeason)
    }

    /// True when `color` is the primary color or one of the listed colors.
    pub fn has_color(&self, color: ColorFamily) -> bool {
        self.primary_color == color || self.colors.contains(&color)
    }

    /// Whole days between `added_at` and `now` (negative if added in the future).
    pub fn days_since_added(&self, now: DateTime<Utc>) -> i64 {
        (now - self.added_at).num_days()
    }
}

/// Untyped wardrobe record as exported by the item store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClothingRecord {
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    pub category: String,
    #[serde(default, rename = "type")]
    pub item_type: Option<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    pub primary_color: String,
    pub style: String,
    #[serde(default)]
    pub seasons: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub wear_count: u32,
    #[serde(default)]
    pub is_favorite: bool,
    pub added_at: DateTime<Utc>,
}

impl TryFrom<ClothingRecord> for ClothingItem {
    type Error = WardrobeError;

    fn try_from(record: ClothingRecord) -> Result<Self, Self::Error> {
        if record.id.trim().is_empty() {
            return Err(WardrobeError::EmptyItemId);
        }

        let category = record.category.parse::<Category>()?;
        let colors = record
            .colors
            .iter()
            .map(|c| c.parse::<ColorFamily>())
            .collect::<Result<Vec<_>, _>>()?;
        let primary_color = record.primary_color.parse::<ColorFamily>()?;
        if primary_color != ColorFamily::Multi && !colors.contains(&primary_color) {
            return Err(WardrobeError::PrimaryColorNotListed {
                id: record.id,
                primary: primary_color.to_string(),
            });
        }
        let style = record.style.parse::<ItemStyle>()?;
        let seasons = record
            .seasons
            .iter()
            .map(|s| s.parse::<Season>())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: record.id,
            user_id: record.user_id,
            category,
            item_type: record.item_type,
            colors,
            primary_color,
            style,
            seasons,
            tags: record.tags,
            wear_count: record.wear_count,
            is_favorite: record.is_favorite,
            added_at: record.added_at,
        })
    }
}
