//! Data sources that supply raw catalog records to a [`crate::CatalogStore`].

use std::path::PathBuf;

use crate::error::CatalogError;
use crate::types::RawRecord;

/// A provider of raw catalog records.
///
/// Each call returns the complete record set; callers never merge results
/// from successive calls.
pub trait CatalogSource {
    /// Returns every raw record in the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the underlying data cannot be read or is
    /// not a JSON array.
    fn records(&self) -> Result<Vec<RawRecord>, CatalogError>;
}

/// Records held in memory, typically parsed once from a bundled asset.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    records: Vec<RawRecord>,
}

impl InMemorySource {
    #[must_use]
    pub fn new(records: Vec<RawRecord>) -> Self {
        Self { records }
    }

    /// Parses a JSON array of raw records, skipping entries that are not
    /// records.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Malformed`] if `json` is not a JSON array.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let records = parse_records(json, "inline catalog")?;
        Ok(Self { records })
    }
}

impl CatalogSource for InMemorySource {
    fn records(&self) -> Result<Vec<RawRecord>, CatalogError> {
        Ok(self.records.clone())
    }
}

/// Reads a JSON catalog export from disk on every load.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for JsonFileSource {
    fn records(&self) -> Result<Vec<RawRecord>, CatalogError> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| CatalogError::Io {
            path: self.path.display().to_string(),
            source: e,
        })?;
        parse_records(&content, &self.path.display().to_string())
    }
}

/// Parses the top-level array, then each entry on its own. An entry that is
/// not a record (no `_id`, or a field of the wrong shape) is logged and
/// skipped so it cannot take the rest of the catalog down with it.
fn parse_records(json: &str, context: &str) -> Result<Vec<RawRecord>, CatalogError> {
    let entries: Vec<serde_json::Value> =
        serde_json::from_str(json).map_err(|e| CatalogError::Malformed {
            context: context.to_string(),
            source: e,
        })?;

    let mut records = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<RawRecord>(entry) {
            Ok(record) => records.push(record),
            Err(e) => {
                tracing::warn!(context, index, error = %e, "skipping malformed catalog record");
            }
        }
    }
    Ok(records)
}
