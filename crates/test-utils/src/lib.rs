//! Shared test utilities for stylist crates.
//!
//! This crate provides wardrobe fixtures and environment helpers used by
//! the integration tests of the engine and the CLI.

use chrono::{DateTime, TimeZone, Utc};
use std::path::PathBuf;
use std::sync::{LazyLock, Mutex, MutexGuard};
use stylist_engine::{Category, ClothingItem, ColorFamily, ItemStyle, Season};

/// Serialize tests that mutate process-global state (env vars, HOME).
pub fn env_guard() -> MutexGuard<'static, ()> {
    static TEST_SERIAL: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));
    TEST_SERIAL.lock().unwrap_or_else(|e| e.into_inner())
}

/// RAII guard for environment variables - restores original value on drop.
pub struct EnvVarGuard {
    key: &'static str,
    previous: Option<String>,
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        if let Some(v) = &self.previous {
            std::env::set_var(self.key, v);
        } else {
            std::env::remove_var(self.key);
        }
    }
}

/// Set an environment variable and return a guard that restores the original on drop.
pub fn set_env_var(key: &'static str, value: Option<&str>) -> EnvVarGuard {
    let previous = std::env::var(key).ok();
    if let Some(val) = value {
        std::env::set_var(key, val);
    } else {
        std::env::remove_var(key);
    }
    EnvVarGuard { key, previous }
}

/// Fixed point in time for fixtures that depend on item age.
pub fn fixture_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

/// Builder for wardrobe items with test-friendly defaults.
///
/// Items start unworn, non-favorite, all-season and added well before
/// [`fixture_now`].
#[derive(Debug, Clone)]
pub struct ItemBuilder {
    item: ClothingItem,
}

impl ItemBuilder {
    pub fn new(id: &str, category: Category) -> Self {
        Self {
            item: ClothingItem {
                id: id.to_string(),
                user_id: "fixture-user".to_string(),
                category,
                item_type: None,
                colors: vec![ColorFamily::Black],
                primary_color: ColorFamily::Black,
                style: ItemStyle::Casual,
                seasons: vec![Season::AllSeason],
                tags: Vec::new(),
                wear_count: 0,
                is_favorite: false,
                added_at: Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap(),
            },
        }
    }

    /// Set a single color, used as the primary color too.
    pub fn color(mut self, color: ColorFamily) -> Self {
        self.item.colors = vec![color];
        self.item.primary_color = color;
        self
    }

    /// Add a secondary color.
    pub fn also(mut self, color: ColorFamily) -> Self {
        self.item.colors.push(color);
        self
    }

    pub fn style(mut self, style: ItemStyle) -> Self {
        self.item.style = style;
        self
    }

    pub fn seasons(mut self, seasons: &[Season]) -> Self {
        self.item.seasons = seasons.to_vec();
        self
    }

    pub fn worn(mut self, wear_count: u32) -> Self {
        self.item.wear_count = wear_count;
        self
    }

    pub fn favorite(mut self) -> Self {
        self.item.is_favorite = true;
        self
    }

    pub fn added_days_ago(mut self, days: i64) -> Self {
        self.item.added_at = fixture_now() - chrono::Duration::days(days);
        self
    }

    pub fn build(self) -> ClothingItem {
        self.item
    }
}

/// The three-piece work wardrobe: white business top (favorite), navy
/// business bottom, black casual shoes.
pub fn work_wardrobe() -> Vec<ClothingItem> {
    vec![
        ItemBuilder::new("white-shirt", Category::Tops)
            .color(ColorFamily::White)
            .style(ItemStyle::Business)
            .favorite()
            .build(),
        ItemBuilder::new("navy-trousers", Category::Bottoms)
            .color(ColorFamily::Navy)
            .style(ItemStyle::Business)
            .build(),
        ItemBuilder::new("black-sneakers", Category::Shoes)
            .color(ColorFamily::Black)
            .style(ItemStyle::Casual)
            .build(),
    ]
}

/// A larger mixed wardrobe covering every skeleton.
pub fn mixed_wardrobe() -> Vec<ClothingItem> {
    vec![
        ItemBuilder::new("tee-white", Category::Tops)
            .color(ColorFamily::White)
            .worn(12)
            .build(),
        ItemBuilder::new("blouse-pink", Category::Tops)
            .color(ColorFamily::Pink)
            .style(ItemStyle::Elegant)
            .seasons(&[Season::Spring, Season::Summer])
            .build(),
        ItemBuilder::new("sweater-gray", Category::Tops)
            .color(ColorFamily::Gray)
            .style(ItemStyle::Trendy)
            .seasons(&[Season::Fall, Season::Winter])
            .worn(3)
            .build(),
        ItemBuilder::new("jeans-blue", Category::Bottoms)
            .color(ColorFamily::Blue)
            .worn(20)
            .favorite()
            .build(),
        ItemBuilder::new("skirt-black", Category::Bottoms)
            .color(ColorFamily::Black)
            .style(ItemStyle::Elegant)
            .build(),
        ItemBuilder::new("dress-red", Category::Dresses)
            .color(ColorFamily::Red)
            .also(ColorFamily::Black)
            .style(ItemStyle::Elegant)
            .seasons(&[Season::Summer])
            .added_days_ago(2)
            .build(),
        ItemBuilder::new("boots-brown", Category::Shoes)
            .color(ColorFamily::Brown)
            .style(ItemStyle::Trendy)
            .seasons(&[Season::Fall, Season::Winter])
            .build(),
        ItemBuilder::new("heels-black", Category::Shoes)
            .color(ColorFamily::Black)
            .style(ItemStyle::Elegant)
            .worn(1)
            .build(),
        ItemBuilder::new("coat-beige", Category::Outerwear)
            .color(ColorFamily::Beige)
            .style(ItemStyle::Business)
            .seasons(&[Season::Fall, Season::Winter])
            .build(),
        ItemBuilder::new("scarf-multi", Category::Accessories)
            .color(ColorFamily::Multi)
            .build(),
    ]
}

/// Temp directory holding a wardrobe export and optional config file.
///
/// The tempdir is removed when this struct is dropped.
pub struct WardrobeFixture {
    pub tempdir: tempfile::TempDir,
}

impl WardrobeFixture {
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            tempdir: tempfile::tempdir()?,
        })
    }

    /// Path to use as HOME so `~/.stylist/config.toml` lands in the fixture.
    pub fn home_path(&self) -> &std::path::Path {
        self.tempdir.path()
    }

    /// Create an RAII guard that sets HOME to this fixture's temp directory.
    pub fn home_guard(&self) -> EnvVarGuard {
        set_env_var("HOME", Some(self.home_path().to_str().unwrap()))
    }

    /// Write items as a JSON array; returns the file path.
    pub fn write_wardrobe(&self, name: &str, items: &[ClothingItem]) -> std::io::Result<PathBuf> {
        let json = serde_json::to_string_pretty(items).map_err(std::io::Error::other)?;
        self.write_file(name, &json)
    }

    /// Write raw content relative to the fixture root, creating parents.
    pub fn write_file(&self, name: &str, content: &str) -> std::io::Result<PathBuf> {
        let path = self.tempdir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, content)?;
        Ok(path)
    }

    /// Write `~/.stylist/config.toml` under the fixture home.
    pub fn write_config(&self, content: &str) -> std::io::Result<PathBuf> {
        self.write_file(".stylist/config.toml", content)
    }
}
