//! Sharded Data Cache Adapter
//!
//! Implements `ShardedDataCache` with one in-memory map per cacher id.

use crate::ports::outbound::ShardedDataCache;
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// In-memory sharded data cache.
///
/// Cachers are created on first insert and keyed by their identifier.
pub struct InMemoryShardedDataCache {
    /// Entries per cacher: cacher_id -> (key -> value).
    cachers: RwLock<BTreeMap<String, HashMap<Vec<u8>, Vec<u8>>>>,
}

impl InMemoryShardedDataCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            cachers: RwLock::new(BTreeMap::new()),
        }
    }

    /// Number of entries held by one cacher.
    pub fn len_of(&self, cacher_id: &str) -> usize {
        self.cachers.read().get(cacher_id).map_or(0, HashMap::len)
    }

    /// Drop every entry of one cacher.
    pub fn clear_cacher(&self, cacher_id: &str) {
        self.cachers.write().remove(cacher_id);
    }
}

impl Default for InMemoryShardedDataCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ShardedDataCache for InMemoryShardedDataCache {
    fn add_data(&self, key: &[u8], value: Vec<u8>, cacher_id: &str) {
        debug!(
            "[genesis] Caching {} bytes under {} in {}",
            value.len(),
            hex::encode(key),
            cacher_id
        );

        self.cachers
            .write()
            .entry(cacher_id.to_string())
            .or_default()
            .insert(key.to_vec(), value);
    }

    fn get_data(&self, key: &[u8], cacher_id: &str) -> Option<Vec<u8>> {
        self.cachers
            .read()
            .get(cacher_id)
            .and_then(|entries| entries.get(key))
            .cloned()
    }

    fn remove_data(&self, key: &[u8], cacher_id: &str) {
        let mut cachers = self.cachers.write();
        if let Some(entries) = cachers.get_mut(cacher_id) {
            entries.remove(key);
            if entries.is_empty() {
                cachers.remove(cacher_id);
            }
        }
    }

    fn cacher_ids(&self) -> Vec<String> {
        self.cachers.read().keys().cloned().collect()
    }
}
