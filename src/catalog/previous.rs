//! The previously published `variants.json`, loaded read-only.
//!
//! It is the source of truth for id stability and for regression detection.
//! Only names and ids matter here; modifier fields are ignored.

use crate::catalog::identity::VariantId;
use crate::error::CatalogError;
use crate::schema_loader::{DocumentKind, validate_document};
use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Deserialize)]
/// A previous catalog entry as stored on disk.
pub struct RecordedVariant {
    #[serde(default)]
    pub id: Option<VariantId>,
}

#[derive(Clone, Debug, Default)]
/// Validated previous catalog: every entry has an id and no id repeats.
pub struct PreviousCatalog {
    ids: IndexMap<String, VariantId>,
    owners: BTreeMap<VariantId, String>,
}

impl PreviousCatalog {
    /// Validate raw entries, rejecting missing or duplicated ids.
    pub fn from_entries(
        entries: IndexMap<String, RecordedVariant>,
    ) -> Result<Self, CatalogError> {
        let mut ids = IndexMap::with_capacity(entries.len());
        let mut owners: BTreeMap<VariantId, String> = BTreeMap::new();
        for (name, entry) in entries {
            let Some(id) = entry.id else {
                return Err(CatalogError::MissingId { name });
            };
            if let Some(previous_name) = owners.get(&id) {
                return Err(CatalogError::DuplicateId {
                    id,
                    name,
                    previous_name: previous_name.clone(),
                });
            }
            owners.insert(id, name.clone());
            ids.insert(name, id);
        }
        Ok(Self { ids, owners })
    }

    pub fn from_value(value: Value) -> Result<Self> {
        validate_document(DocumentKind::Variants, &value)?;
        let entries: IndexMap<String, RecordedVariant> =
            serde_json::from_value(value).context("decoding variant catalog")?;
        Ok(Self::from_entries(entries)?)
    }

    pub fn from_json_str(data: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(data).context("parsing variant catalog JSON")?;
        Self::from_value(value)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        Self::from_json_str(&data).with_context(|| format!("loading {}", path.display()))
    }

    /// Id recorded for `name`, if the name existed previously.
    pub fn id_of(&self, name: &str) -> Option<VariantId> {
        self.ids.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.ids.contains_key(name)
    }

    /// Whether any previous entry, current or retired, holds `id`.
    pub fn id_in_use(&self, id: VariantId) -> bool {
        self.owners.contains_key(&id)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.ids.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
