//! History store - bounded rolling price window per asset
//!
//! Append-only with front eviction: after every append the window holds
//! exactly the most recent `capacity` prices in arrival order. Repeated
//! identical prices are valid entries and are retained.

use std::collections::{HashMap, VecDeque};
use vigil_core::{AssetId, Price};

/// Default window capacity, matching the upstream session window
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// Bounded per-asset price histories
#[derive(Debug, Clone)]
pub struct HistoryStore {
    histories: HashMap<AssetId, VecDeque<Price>>,
    capacity: usize,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            histories: HashMap::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append a price to the asset's window, evicting from the front
    /// once the capacity bound is hit. Always succeeds; a history is
    /// created lazily on the asset's first append.
    pub fn append(&mut self, asset_id: &str, price: Price) {
        let window = self
            .histories
            .entry(asset_id.to_string())
            .or_insert_with(|| VecDeque::with_capacity(self.capacity));

        window.push_back(price);
        while window.len() > self.capacity {
            window.pop_front();
        }
    }

    /// Current window for an asset, oldest first. Empty for unseen assets.
    pub fn snapshot(&self, asset_id: &str) -> Vec<Price> {
        self.histories
            .get(asset_id)
            .map(|window| window.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Number of retained prices for an asset
    pub fn len(&self, asset_id: &str) -> usize {
        self.histories.get(asset_id).map_or(0, VecDeque::len)
    }

    /// Whether no asset has any retained history
    pub fn is_empty(&self) -> bool {
        self.histories.values().all(VecDeque::is_empty)
    }

    /// Clear one asset's history, or every history when `asset_id` is
    /// `None` (used on reconfiguration).
    pub fn clear(&mut self, asset_id: Option<&str>) {
        match asset_id {
            Some(id) => {
                self.histories.remove(id);
            }
            None => self.histories.clear(),
        }
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}
