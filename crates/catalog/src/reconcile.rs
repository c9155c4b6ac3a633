use std::collections::HashMap;

use crate::catalog::Catalog;
use crate::tokenizer::{trim_field, Row};

/// Keys of data rows: trimmed column 0 of every row after the header.
/// Rows with an empty column 0 are spacers and yield nothing.
pub fn extract_keys(rows: &[Row]) -> Vec<&str> {
    rows.iter()
        .skip(1)
        .filter_map(|row| row.first())
        .map(|field| trim_field(field))
        .filter(|key| !key.is_empty())
        .collect()
}

/// Master keys in first-seen order with a "found in some split" flag each.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresenceIndex {
    keys: Vec<String>,
    positions: HashMap<String, usize>,
    found: Vec<bool>,
}

impl PresenceIndex {
    /// Build from keys in master order. Repeated keys keep their first position.
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::default();
        for key in keys {
            let key = key.as_ref();
            if index.positions.contains_key(key) {
                continue;
            }
            index.positions.insert(key.to_string(), index.keys.len());
            index.keys.push(key.to_string());
            index.found.push(false);
        }
        index
    }

    pub fn from_master(master: &Catalog) -> Self {
        Self::new(master.keys())
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// `None` if the key is not a master key.
    pub fn is_found(&self, key: &str) -> Option<bool> {
        self.positions.get(key).map(|&pos| self.found[pos])
    }

    pub fn found_count(&self) -> usize {
        self.found.iter().filter(|f| **f).count()
    }

    /// Mark a key as present. Unknown keys are ignored; marking twice is a no-op.
    /// Returns whether the key belongs to the master catalog.
    pub fn mark(&mut self, key: &str) -> bool {
        match self.positions.get(key) {
            Some(&pos) => {
                self.found[pos] = true;
                true
            }
            None => false,
        }
    }

    /// Mark every key of a split catalog. Returns how many of its keys are master keys.
    pub fn mark_catalog(&mut self, split: &Catalog) -> usize {
        split.keys().into_iter().filter(|key| self.mark(key)).count()
    }

    /// Unfound master keys, in master order.
    pub fn missing(&self) -> Vec<&str> {
        self.keys
            .iter()
            .zip(&self.found)
            .filter(|(_, found)| !**found)
            .map(|(key, _)| key.as_str())
            .collect()
    }
}

/// Outcome of reconciling one master against a set of splits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    pub total_keys: usize,
    pub missing: Vec<String>,
}

impl Reconciliation {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Which master keys appear in none of the split catalogs.
pub fn reconcile(master: &Catalog, splits: &[Catalog]) -> Reconciliation {
    let mut index = PresenceIndex::from_master(master);
    for split in splits {
        index.mark_catalog(split);
    }
    Reconciliation {
        total_keys: index.len(),
        missing: index.missing().into_iter().map(String::from).collect(),
    }
}
