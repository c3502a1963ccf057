//! Catalog and order file handling.
//!
//! Catalogs are loaded from JSON so a shop can ship its own flowers, papers
//! and palette. Confirmed orders are written as JSON mirroring the selection
//! state, with the rendered summary alongside for human readers.

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::catalog::{Catalog, parse_hex};
use crate::selection::SelectionState;
use crate::summary::{SummaryView, derive_summary};

impl Catalog {
    /// Load a catalog from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog from {:?}", path.as_ref()))?;

        let catalog: Self =
            serde_json::from_str(&content).context("Failed to parse catalog JSON")?;

        info!(path = ?path.as_ref(), "catalog loaded");
        Ok(catalog)
    }

    /// Save the catalog to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).context("Failed to serialize catalog to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write catalog to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Validate the catalog
    pub fn validate(&self) -> Result<()> {
        if self.flowers.is_empty() {
            anyhow::bail!("Catalog must list at least one flower");
        }
        check_names("flower", self.flowers.iter().map(String::as_str))?;

        if self.papers.is_empty() {
            anyhow::bail!("Catalog must list at least one paper type");
        }
        check_names("paper type", self.papers.iter().map(|p| p.name.as_str()))?;

        if self.leaf_styles.is_empty() {
            anyhow::bail!("Catalog must list at least one leaf style");
        }
        check_names("leaf style", self.leaf_styles.iter().map(String::as_str))?;

        // Colorable papers and ribbons both draw from the palette
        if self.palette.is_empty() {
            anyhow::bail!("Palette must contain at least one color");
        }
        check_names("palette color", self.palette.iter().map(|c| c.name.as_str()))?;
        for color in &self.palette {
            if parse_hex(&color.hex).is_none() {
                anyhow::bail!(
                    "Palette color {:?} has invalid hex {:?} (expected #rrggbb)",
                    color.name,
                    color.hex
                );
            }
        }

        Ok(())
    }
}

/// Reject blank and duplicate names
fn check_names<'a>(what: &str, names: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for name in names {
        if name.trim().is_empty() {
            anyhow::bail!("Catalog contains a blank {what} name");
        }
        if !seen.insert(name) {
            anyhow::bail!("Duplicate {what}: {name}");
        }
    }
    Ok(())
}

/// On-disk order: the selection plus its summary
#[derive(Serialize)]
struct OrderRecord<'a> {
    #[serde(flatten)]
    selection: &'a SelectionState,
    summary: SummaryView,
}

/// Write a confirmed order to `path`
pub fn save_order<P: AsRef<Path>>(selection: &SelectionState, path: P) -> Result<()> {
    let record = OrderRecord {
        selection,
        summary: derive_summary(selection),
    };
    let json =
        serde_json::to_string_pretty(&record).context("Failed to serialize order to JSON")?;

    fs::write(&path, json)
        .with_context(|| format!("Failed to write order to {:?}", path.as_ref()))?;

    info!(path = ?path.as_ref(), "order saved");
    Ok(())
}

/// Read an order's selection back from `path`.
///
/// The result is not checked against any catalog; replay it through
/// [`crate::wizard::WizardSession::from_selection`] for that.
pub fn load_order<P: AsRef<Path>>(path: P) -> Result<SelectionState> {
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read order from {:?}", path.as_ref()))?;

    serde_json::from_str(&content).context("Failed to parse order JSON")
}
