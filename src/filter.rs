//! Filter state and the derived view rendered from it

use crate::models::{ExtensionRecord, FilterValue};

/// Current filter selection
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    value: FilterValue,
}

impl FilterState {
    pub fn new(value: FilterValue) -> Self {
        FilterState { value }
    }

    pub fn value(&self) -> FilterValue {
        self.value
    }

    pub fn set_filter(&mut self, value: FilterValue) {
        if self.value != value {
            tracing::info!(from = self.value.as_str(), to = value.as_str(), "Filter changed");
        }
        self.value = value;
    }
}

/// Records visible under `filter`, in collection order
pub fn derived_view(records: &[ExtensionRecord], filter: FilterValue) -> Vec<ExtensionRecord> {
    records
        .iter()
        .filter(|record| matches_filter(record, filter))
        .cloned()
        .collect()
}

pub fn matches_filter(record: &ExtensionRecord, filter: FilterValue) -> bool {
    match filter {
        FilterValue::All => true,
        FilterValue::Active => record.is_active,
        FilterValue::Inactive => !record.is_active,
    }
}

/// Message shown when the derived view is empty
pub fn empty_message(filter: FilterValue) -> &'static str {
    match filter {
        FilterValue::Active => "No active extensions",
        FilterValue::Inactive => "All extensions active",
        FilterValue::All => "No extensions found",
    }
}
