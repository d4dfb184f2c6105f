//! Loading wardrobe exports from JSON/YAML files or directories of them.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use stylist_engine::{ClothingItem, ClothingRecord, WardrobeError};
use walkdir::WalkDir;

/// A raw record together with the file it came from.
#[derive(Debug, Clone)]
pub struct SourcedRecord {
    pub source: PathBuf,
    pub record: ClothingRecord,
}

/// A record that failed admission.
#[derive(Debug, Clone)]
pub struct Rejection {
    pub source: PathBuf,
    pub id: String,
    pub error: WardrobeError,
}

/// Result of checking every record of a wardrobe.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub accepted: usize,
    pub rejected: Vec<Rejection>,
}

impl ValidationReport {
    pub fn total(&self) -> usize {
        self.accepted + self.rejected.len()
    }

    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

fn is_wardrobe_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("json" | "yaml" | "yml")
    )
}

// A document holds either an array of records or a single record.
fn from_json(content: &str) -> Result<Vec<ClothingRecord>> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    if value.is_array() {
        Ok(serde_json::from_value(value)?)
    } else {
        Ok(vec![serde_json::from_value(value)?])
    }
}

fn from_yaml(content: &str) -> Result<Vec<ClothingRecord>> {
    let value: serde_yaml::Value = serde_yaml::from_str(content)?;
    if value.is_sequence() {
        Ok(serde_yaml::from_value(value)?)
    } else {
        Ok(vec![serde_yaml::from_value(value)?])
    }
}

/// Read the records of a single wardrobe file.
pub fn read_records_file(path: &Path) -> Result<Vec<ClothingRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read wardrobe file {}", path.display()))?;

    let records = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => from_json(&content),
        Some("yaml" | "yml") => from_yaml(&content),
        _ => bail!(
            "unsupported wardrobe file {} (expected .json, .yaml or .yml)",
            path.display()
        ),
    }
    .with_context(|| format!("failed to parse wardrobe file {}", path.display()))?;

    tracing::debug!(
        target: "stylist::wardrobe",
        path = %path.display(),
        records = records.len(),
        "Read wardrobe file"
    );
    Ok(records)
}

/// Collect raw records from a file, or from every wardrobe file under a
/// directory in file-name order.
pub fn load_records(path: &Path) -> Result<Vec<SourcedRecord>> {
    if !path.exists() {
        bail!("wardrobe path {} does not exist", path.display());
    }

    let files: Vec<PathBuf> = if path.is_dir() {
        let mut files = Vec::new();
        for entry in WalkDir::new(path).sort_by_file_name() {
            let entry = entry
                .with_context(|| format!("failed to walk wardrobe directory {}", path.display()))?;
            if entry.file_type().is_file() && is_wardrobe_file(entry.path()) {
                files.push(entry.into_path());
            }
        }
        files
    } else {
        vec![path.to_path_buf()]
    };

    let mut sourced = Vec::new();
    for file in files {
        for record in read_records_file(&file)? {
            sourced.push(SourcedRecord {
                source: file.clone(),
                record,
            });
        }
    }
    Ok(sourced)
}

/// Load and admit every item; the first rejected record is an error.
pub fn load_wardrobe(path: &Path) -> Result<Vec<ClothingItem>> {
    let mut items = Vec::new();
    for SourcedRecord { source, record } in load_records(path)? {
        let id = record.id.clone();
        let item = ClothingItem::try_from(record).with_context(|| {
            format!("invalid wardrobe item '{}' in {}", id, source.display())
        })?;
        items.push(item);
    }

    tracing::debug!(
        target: "stylist::wardrobe",
        path = %path.display(),
        items = items.len(),
        "Loaded wardrobe"
    );
    Ok(items)
}

/// Check every record, keeping going past rejections.
pub fn validate_wardrobe(path: &Path) -> Result<ValidationReport> {
    let mut report = ValidationReport::default();
    for SourcedRecord { source, record } in load_records(path)? {
        let id = record.id.clone();
        match ClothingItem::try_from(record) {
            Ok(_) => report.accepted += 1,
            Err(error) => {
                tracing::warn!(
                    target: "stylist::wardrobe",
                    path = %source.display(),
                    id = %id,
                    error = %error,
                    "Rejected wardrobe record"
                );
                report.rejected.push(Rejection { source, id, error });
            }
        }
    }
    Ok(report)
}
