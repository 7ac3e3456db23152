//! Reagent catalog.
//!
//! The catalog is loaded once and never mutated afterwards. It is passed
//! explicitly to whatever needs it; there is no process-wide instance.

use crate::error::CatalogError;
use crate::reagent::{RawReagent, ReagentRecord};
use crate::selection::Selection;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// On-disk catalog document: `{ "reagents": [ ... ] }`.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    reagents: Vec<RawReagent>,
}

/// Immutable collection of validated reagent records.
///
/// Records keep their catalog order. If two records share the same
/// (name, category, rarity) triple, lookups return the first one.
///
/// # Examples
///
/// ```rust
/// use alchemy_calc::{Catalog, Selection, Rarity};
///
/// let catalog = Catalog::from_json_str(r#"{
///     "reagents": [
///         { "name": "Silverleaf", "category": "Herb", "rarity": "Common",
///           "dc": 1, "value": "10gp", "type": "heal", "damage": "1d4" }
///     ]
/// }"#).unwrap();
///
/// let sel = Selection::new("Silverleaf", "Herb", Rarity::Common);
/// assert_eq!(catalog.resolve(&sel).map(|r| r.dc), Some(1));
/// assert_eq!(catalog.display_entries(), vec!["Silverleaf (Herb, Common)"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    reagents: Vec<ReagentRecord>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from already validated records.
    pub fn from_records(reagents: Vec<ReagentRecord>) -> Self {
        let mut seen = HashSet::new();
        for record in &reagents {
            let selection = record.selection();
            if !seen.insert(selection) {
                tracing::warn!(
                    reagent = %record.selection(),
                    "duplicate catalog entry, lookups will use the first one"
                );
            }
        }
        Self { reagents }
    }

    /// Validate raw catalog rows. The first malformed row aborts the load.
    pub fn from_raw(rows: Vec<RawReagent>) -> Result<Self, CatalogError> {
        let reagents = rows
            .into_iter()
            .map(ReagentRecord::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_records(reagents))
    }

    /// Parse a catalog document from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument =
            serde_json::from_str(json).map_err(|e| CatalogError::Json(e.to_string()))?;
        Self::from_raw(document.reagents)
    }

    /// Load a catalog document from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let catalog = Self::from_json_str(&content)?;
        tracing::info!(path = %path.display(), reagents = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Find the record matching a selection.
    pub fn resolve(&self, selection: &Selection) -> Option<&ReagentRecord> {
        self.reagents.iter().find(|r| selection.matches(r))
    }

    /// Resolve a row of selection slots.
    ///
    /// `None` slots are skipped. A selection with no matching record
    /// fails with [`CatalogError::Unresolved`] naming its 1-based slot.
    pub fn resolve_slots(
        &self,
        slots: &[Option<Selection>],
    ) -> Result<Vec<&ReagentRecord>, CatalogError> {
        let mut records = Vec::new();
        for (idx, slot) in slots.iter().enumerate() {
            let Some(selection) = slot else {
                continue;
            };
            let record = self.resolve(selection).ok_or_else(|| CatalogError::Unresolved {
                slot: idx + 1,
                selection: selection.to_string(),
            })?;
            records.push(record);
        }
        Ok(records)
    }

    /// Decode display strings into selection slots.
    ///
    /// An empty (or all-whitespace) string is an unset slot.
    pub fn parse_display_slots<S: AsRef<str>>(
        displays: &[S],
    ) -> Result<Vec<Option<Selection>>, CatalogError> {
        displays
            .iter()
            .enumerate()
            .map(|(idx, display)| {
                let display = display.as_ref();
                if display.trim().is_empty() {
                    return Ok(None);
                }
                Selection::parse_display(display)
                    .map(Some)
                    .map_err(|source| CatalogError::InvalidSelection {
                        slot: idx + 1,
                        source,
                    })
            })
            .collect()
    }

    /// All records in catalog order.
    pub fn entries(&self) -> &[ReagentRecord] {
        &self.reagents
    }

    /// Every record in `"<name> (<category>, <rarity>)"` form, catalog order.
    pub fn display_entries(&self) -> Vec<String> {
        self.reagents
            .iter()
            .map(|r| r.selection().to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.reagents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reagents.is_empty()
    }
}
