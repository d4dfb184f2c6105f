//! Rendering of recommendation listings and reports.

use anyhow::Result;
use std::io::Write;
use stylist_engine::{pair_harmony, summarize_recommendations, ColorFamily, OutfitRecommendation};

use crate::cli::OutputFormat;
use crate::wardrobe_file::ValidationReport;

/// Write a ranked listing in the requested format.
pub fn write_recommendations(
    out: &mut impl Write,
    recommendations: &[OutfitRecommendation],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, recommendations)?;
            writeln!(out)?;
        }
        OutputFormat::Text => write_text(out, recommendations)?,
    }
    Ok(())
}

fn write_text(out: &mut impl Write, recommendations: &[OutfitRecommendation]) -> Result<()> {
    writeln!(out, "{}", summarize_recommendations(recommendations))?;
    for (rank, rec) in recommendations.iter().enumerate() {
        let skeleton = rec.skeleton.as_deref().unwrap_or("outfit");
        writeln!(
            out,
            "{}. [{}] {}: {}",
            rank + 1,
            rec.confidence,
            skeleton,
            rec.item_ids().join(" + ")
        )?;
        writeln!(
            out,
            "   style {:.2}, harmony {:.2}",
            rec.style_score, rec.color_harmony
        )?;
        writeln!(out, "   {}", rec.reasoning)?;
    }
    Ok(())
}

/// Write both directional harmony scores for a color pair.
pub fn write_harmony(out: &mut impl Write, first: ColorFamily, second: ColorFamily) -> Result<()> {
    writeln!(
        out,
        "{first} -> {second}: {:.2}",
        pair_harmony(first, second)
    )?;
    writeln!(
        out,
        "{second} -> {first}: {:.2}",
        pair_harmony(second, first)
    )?;
    Ok(())
}

/// Write the rejected records followed by a totals line.
pub fn write_validation(out: &mut impl Write, report: &ValidationReport) -> Result<()> {
    for rejection in &report.rejected {
        writeln!(
            out,
            "{}: '{}': {}",
            rejection.source.display(),
            rejection.id,
            rejection.error
        )?;
    }
    writeln!(
        out,
        "{} of {} records valid",
        report.accepted,
        report.total()
    )?;
    Ok(())
}
