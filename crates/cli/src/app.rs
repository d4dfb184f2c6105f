use anyhow::{bail, Result};
use clap::Parser;
use std::io::Write;
use stylist_engine::{RecommendOptions, RecommendationEngine};

use crate::cli::{Cli, Commands};
use crate::config::engine_config;
use crate::output::{write_harmony, write_recommendations, write_validation};
use crate::wardrobe_file::{load_wardrobe, validate_wardrobe};

/// Binary entry point: initializes logging, parses arguments and runs the command.
pub fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(cli.command, &mut out)
}

/// Run one command, writing its output to `out`.
pub fn execute(command: Commands, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Recommend {
            wardrobe,
            occasion,
            season,
            prefer_colors,
            exclude,
            include,
            limits,
            format,
        } => {
            let engine = RecommendationEngine::new(engine_config(&limits)?);
            let items = load_wardrobe(&wardrobe)?;

            let mut options = RecommendOptions::new()
                .with_preferred_colors(prefer_colors)
                .excluding(exclude);
            if let Some(season) = season {
                options = options.with_season(season);
            }
            if !include.is_empty() {
                options = options.including(include);
            }

            let recs = engine.recommend(&items, occasion, &options);
            write_recommendations(out, &recs, format)
        }
        Commands::Quick {
            wardrobe,
            occasion,
            limits,
            now,
            format,
        } => {
            let engine = RecommendationEngine::new(engine_config(&limits)?);
            let items = load_wardrobe(&wardrobe)?;
            let max = engine.config().max_recommendations;

            let recs = match now {
                Some(now) => engine.quick_suggestions_at(&items, occasion, max, now),
                None => engine.quick_suggestions(&items, occasion, max),
            };
            write_recommendations(out, &recs, format)
        }
        Commands::Harmony { first, second } => write_harmony(out, first, second),
        Commands::Validate { wardrobe } => {
            let report = validate_wardrobe(&wardrobe)?;
            write_validation(out, &report)?;
            if !report.is_clean() {
                bail!(
                    "{} of {} wardrobe records rejected",
                    report.rejected.len(),
                    report.total()
                );
            }
            Ok(())
        }
    }
}
