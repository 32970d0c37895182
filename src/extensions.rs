//! Extension list state - the mutable collection seeded from the dataset

use crate::dataset::Dataset;
use crate::models::ExtensionRecord;

/// Owned, ordered collection of extensions
///
/// Records are looked up by name. Operations on a name that matches nothing
/// are silent no-ops; a name matching several records affects all of them.
#[derive(Clone, Debug, Default)]
pub struct ExtensionList {
    records: Vec<ExtensionRecord>,
}

impl ExtensionList {
    pub fn new(records: Vec<ExtensionRecord>) -> Self {
        ExtensionList { records }
    }

    pub fn from_dataset(dataset: &Dataset) -> Self {
        Self::new(dataset.records().to_vec())
    }

    /// Flip `is_active` on every record named `name`
    pub fn toggle(&mut self, name: &str) {
        let mut matched = false;
        self.records = self
            .records
            .iter()
            .map(|record| {
                if record.name == name {
                    matched = true;
                    ExtensionRecord {
                        is_active: !record.is_active,
                        ..record.clone()
                    }
                } else {
                    record.clone()
                }
            })
            .collect();

        if matched {
            tracing::info!(extension = name, "Extension toggled");
        } else {
            tracing::debug!(extension = name, "Toggle matched no extension");
        }
    }

    /// Drop every record named `name`, keeping the order of the rest
    pub fn remove(&mut self, name: &str) {
        let before = self.records.len();
        self.records.retain(|record| record.name != name);

        if self.records.len() != before {
            tracing::info!(extension = name, remaining = self.records.len(), "Extension removed");
        } else {
            tracing::debug!(extension = name, "Remove matched no extension");
        }
    }

    pub fn get(&self, name: &str) -> Option<&ExtensionRecord> {
        self.records.iter().find(|record| record.name == name)
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
