//! Configuration file support for stylist.
//!
//! Loads engine limits from `~/.stylist/config.toml` (or the file named by
//! `STYLIST_CONFIG`) with the following precedence:
//! CLI arguments > Environment variables > Config file > Defaults
//!
//! Flags and environment variables are merged by clap before they get here,
//! so this module only layers the file under them.
//!
//! ## Configuration File Format
//!
//! ```toml
//! # ~/.stylist/config.toml
//!
//! [engine]
//! # Items considered per category
//! max_items_per_category = 5
//!
//! # Combinations generated per skeleton
//! max_combinations_per_skeleton = 100
//!
//! # Recommendations returned
//! max_recommendations = 10
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;
use stylist_engine::EngineConfig;

use crate::cli::LimitArgs;

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "STYLIST_CONFIG";

/// Top-level configuration structure.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Engine limits.
    #[serde(default)]
    pub engine: EngineSection,
}

/// The `[engine]` table. Every key is optional.
#[derive(Debug, Default, Deserialize)]
pub struct EngineSection {
    pub max_items_per_category: Option<usize>,
    pub max_combinations_per_skeleton: Option<usize>,
    pub max_recommendations: Option<usize>,
}

/// Returns the config file path: `STYLIST_CONFIG`, else `~/.stylist/config.toml`.
fn config_path() -> Option<PathBuf> {
    if let Some(explicit) = std::env::var_os(CONFIG_PATH_ENV).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(explicit));
    }
    dirs::home_dir().map(|h| h.join(".stylist").join("config.toml"))
}

/// Loads the configuration file if it exists.
///
/// Returns `Ok(None)` if the file doesn't exist.
/// Returns `Err` if the file exists but fails to parse.
pub fn load_config() -> Result<Option<Config>> {
    let Some(path) = config_path() else {
        return Ok(None);
    };

    if !path.exists() {
        tracing::trace!(
            target: "stylist::config",
            path = %path.display(),
            "No configuration file"
        );
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;

    tracing::debug!(
        target: "stylist::config",
        path = %path.display(),
        "Loaded configuration file"
    );

    Ok(Some(config))
}

/// Layers flag/env limits over the config file over engine defaults.
pub fn resolve_engine_config(file: Option<&Config>, limits: &LimitArgs) -> EngineConfig {
    let section = file.map(|c| &c.engine);
    let defaults = EngineConfig::default();

    let resolved = EngineConfig {
        max_items_per_category: limits
            .max_items_per_category
            .or(section.and_then(|s| s.max_items_per_category))
            .unwrap_or(defaults.max_items_per_category),
        max_combinations_per_skeleton: limits
            .max_combinations_per_skeleton
            .or(section.and_then(|s| s.max_combinations_per_skeleton))
            .unwrap_or(defaults.max_combinations_per_skeleton),
        max_recommendations: limits
            .max_recommendations
            .or(section.and_then(|s| s.max_recommendations))
            .unwrap_or(defaults.max_recommendations),
    };

    tracing::debug!(
        target: "stylist::config",
        max_items_per_category = resolved.max_items_per_category,
        max_combinations_per_skeleton = resolved.max_combinations_per_skeleton,
        max_recommendations = resolved.max_recommendations,
        "Resolved engine limits"
    );

    resolved
}

/// Loads the config file and resolves the effective engine limits.
pub fn engine_config(limits: &LimitArgs) -> Result<EngineConfig> {
    let file = load_config()?;
    Ok(resolve_engine_config(file.as_ref(), limits))
}
