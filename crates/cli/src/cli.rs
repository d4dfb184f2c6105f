use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use stylist_engine::{ColorFamily, Occasion, Season};

/// Output format for recommendation listings.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable listing.
    #[default]
    Text,
    /// Pretty-printed JSON array.
    Json,
}

/// Command-line interface for the `stylist` application.
#[derive(Debug, Parser)]
#[command(
    name = "stylist",
    version,
    about = "Outfit recommendations from a tagged wardrobe"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Engine limits shared by the ranking commands.
///
/// Unset values fall back to the config file, then to engine defaults.
#[derive(Debug, Clone, Default, Args)]
pub struct LimitArgs {
    /// Items considered per category (overrides `STYLIST_MAX_ITEMS_PER_CATEGORY`).
    #[arg(long, value_name = "N", env = "STYLIST_MAX_ITEMS_PER_CATEGORY")]
    pub max_items_per_category: Option<usize>,
    /// Combinations generated per skeleton (overrides `STYLIST_MAX_COMBINATIONS`).
    #[arg(
        long = "max-combinations",
        value_name = "N",
        env = "STYLIST_MAX_COMBINATIONS"
    )]
    pub max_combinations_per_skeleton: Option<usize>,
    /// Recommendations returned (overrides `STYLIST_MAX_RECOMMENDATIONS`).
    #[arg(long = "max", value_name = "N", env = "STYLIST_MAX_RECOMMENDATIONS")]
    pub max_recommendations: Option<usize>,
}

/// Available `stylist` commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Ranks outfits for an occasion.
    Recommend {
        /// Wardrobe file (.json, .yaml, .yml) or directory of such files.
        #[arg(long, value_name = "PATH")]
        wardrobe: PathBuf,
        /// Occasion to dress for.
        #[arg(long)]
        occasion: Occasion,
        /// Only use items suited to this season.
        #[arg(long)]
        season: Option<Season>,
        /// Preferred colors (repeatable).
        #[arg(long = "prefer-color", value_name = "COLOR")]
        prefer_colors: Vec<ColorFamily>,
        /// Item ids to leave out (repeatable).
        #[arg(long = "exclude", value_name = "ID")]
        exclude: Vec<String>,
        /// Item ids every outfit must contain (repeatable).
        #[arg(long = "include", value_name = "ID")]
        include: Vec<String>,
        #[command(flatten)]
        limits: LimitArgs,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Ranks outfits built from fresh, favorite and rarely worn items first.
    Quick {
        /// Wardrobe file (.json, .yaml, .yml) or directory of such files.
        #[arg(long, value_name = "PATH")]
        wardrobe: PathBuf,
        /// Occasion to dress for.
        #[arg(long)]
        occasion: Occasion,
        #[command(flatten)]
        limits: LimitArgs,
        /// Reference time for item age (defaults to now).
        #[arg(long, value_name = "RFC3339", hide = true)]
        now: Option<DateTime<Utc>>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Prints the directional harmony scores between two colors.
    Harmony {
        /// First color.
        first: ColorFamily,
        /// Second color.
        second: ColorFamily,
    },
    /// Checks every wardrobe record and reports those that would be rejected.
    Validate {
        /// Wardrobe file (.json, .yaml, .yml) or directory of such files.
        #[arg(long, value_name = "PATH")]
        wardrobe: PathBuf,
    },
}
