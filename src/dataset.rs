//! Dataset store - the static collection the list is seeded from

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::models::ExtensionRecord;

/// Bundled dataset shipped with the binary
const EMBEDDED_DATA: &str = include_str!("../data/data.json");

/// Read-only ordered collection loaded once at startup
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    records: Vec<ExtensionRecord>,
}

impl Dataset {
    /// Load the bundled dataset
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_DATA).context("bundled dataset is malformed")
    }

    /// Load a dataset from a JSON file on disk
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read dataset {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("failed to parse dataset {}", path.display()))
    }

    /// Use the configured path if any, otherwise the bundled data
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::embedded(),
        }
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let records: Vec<ExtensionRecord> = serde_json::from_str(content)?;
        Ok(Self::from_records(records))
    }

    pub fn from_records(records: Vec<ExtensionRecord>) -> Self {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.name.as_str()) {
                tracing::warn!(extension = %record.name, "Duplicate extension name in dataset");
            }
        }
        tracing::info!(count = records.len(), "Dataset loaded");
        Dataset { records }
    }

    pub fn records(&self) -> &[ExtensionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
