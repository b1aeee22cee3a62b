use std::collections::HashSet;

use crate::catalog::item::{Item, RawItem};

/// Holds the last successfully fetched snapshot of the collection.
///
/// Starts empty and is only ever replaced wholesale: a failed fetch never
/// touches it, and no partial or incremental update is applied anywhere.
#[derive(Debug, Default)]
pub struct CatalogStore {
    items: Vec<Item>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: i64) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Replace the collection with a freshly fetched snapshot.
    ///
    /// Origin ranks are assigned from the received order. Duplicate IDs are
    /// a sheet-side anomaly; they are kept but logged.
    pub fn apply_snapshot(&mut self, records: Vec<RawItem>) {
        let items: Vec<Item> = records
            .into_iter()
            .enumerate()
            .map(|(rank, raw)| Item::from_raw(raw, rank))
            .collect();

        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id) {
                tracing::warn!(id = item.id, "Duplicate item ID in fetched snapshot");
            }
        }

        tracing::info!(count = items.len(), "Catalog snapshot replaced");
        self.items = items;
    }
}
