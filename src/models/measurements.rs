use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The user-defined list of body measurements to track. Ordered,
/// set-like (no duplicate names).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MeasurementCatalog {
    names: Vec<String>,
}

impl Default for MeasurementCatalog {
    fn default() -> Self {
        Self {
            names: vec!["Weight".to_string(), "Chest".to_string()],
        }
    }
}

impl MeasurementCatalog {
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Add a measurement name; blank or duplicate names are ignored.
    /// Returns whether the catalog changed.
    pub fn add(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.names.iter().any(|n| n == name) {
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    /// Remove a measurement name, preserving the order of the rest.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.names.len();
        self.names.retain(|n| n != name);
        self.names.len() != before
    }
}

/// Every measurement ever logged, all dates inside one record:
/// ISO date -> measurement name -> value string.
///
/// Lexical ordering of the ISO date keys is calendar ordering, which the
/// trend builder relies on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MeasurementLog {
    entries: BTreeMap<String, BTreeMap<String, String>>,
}

impl MeasurementLog {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dates with at least one logged value, ascending.
    pub fn dates(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|s| s.as_str())
    }

    pub fn for_date(&self, date: &str) -> Option<&BTreeMap<String, String>> {
        self.entries.get(date)
    }

    /// Merge one value into a date's map, creating the date entry if new.
    pub fn record(&mut self, date: &str, name: &str, value: &str) {
        self.entries
            .entry(date.to_string())
            .or_default()
            .insert(name.trim().to_string(), value.trim().to_string());
    }
}
