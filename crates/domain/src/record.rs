//! Population records and the read-only catalog built from them.

use serde::{Deserialize, Serialize};

/// Population change statistics for one U.S. state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulationRecord {
    /// State name. Used as the display label and selection key.
    pub state: String,
    /// Estimated population, 2020.
    pub pop_estimate_2020: u64,
    /// Estimated population, 2021.
    pub pop_estimate_2021: u64,
    /// Change from the baseline to 2020.
    pub pop_change_2020: i64,
    /// Change from 2020 to 2021.
    pub pop_change_2021: i64,
    /// Percentage representation of the change.
    pub pop_percent_diff: f64,
}

impl PopulationRecord {
    /// Label shown for this record in lists.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.state
    }

    /// One-line summary of the record's figures.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "2020: {} ({:+}) | 2021: {} ({:+}) | {:+.2}%",
            self.pop_estimate_2020,
            self.pop_change_2020,
            self.pop_estimate_2021,
            self.pop_change_2021,
            self.pop_percent_diff
        )
    }
}

/// Ordered, immutable collection of records produced by a single load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PopulationCatalog {
    records: Vec<PopulationRecord>,
}

impl PopulationCatalog {
    /// Wraps records in load order.
    #[must_use]
    pub const fn new(records: Vec<PopulationRecord>) -> Self {
        Self { records }
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true when no records were loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at a list position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&PopulationRecord> {
        self.records.get(index)
    }

    /// Display labels in load order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(PopulationRecord::label)
    }
}

impl From<Vec<PopulationRecord>> for PopulationCatalog {
    fn from(records: Vec<PopulationRecord>) -> Self {
        Self::new(records)
    }
}
