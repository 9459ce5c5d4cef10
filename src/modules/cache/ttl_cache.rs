use chrono::Utc;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use super::store::KeyValueStore;

/// Serialized envelope for one cached value.
#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry<T> {
    value: T,
    /// Unix timestamp in milliseconds at store time.
    ts: i64,
}

/// Time-boxed key-value cache with lazy per-read expiry.
///
/// An entry is valid iff `now - ts <= ttl`; anything else (expired, or a
/// blob that fails to parse) is treated as absent and deleted on the spot,
/// so the store self-heals without a background sweep. Reads and writes
/// never fail from the caller's point of view.
///
/// There is no size bound: growth is limited only by the TTL, an accepted
/// limitation of this design.
pub struct TtlCache<S> {
    store: S,
    ttl_ms: i64,
}

impl<S: KeyValueStore> TtlCache<S> {
    pub fn new(store: S, ttl: Duration) -> Self {
        Self {
            store,
            ttl_ms: ttl.as_millis() as i64,
        }
    }

    /// Raw access to the underlying store, for inspection.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn set<T: Serialize>(&self, key: &str, value: &T) {
        let entry = CacheEntry {
            value,
            ts: Utc::now().timestamp_millis(),
        };
        match serde_json::to_string(&entry) {
            Ok(json) => self.store.set_item(key, json),
            Err(e) => warn!("Failed to serialize cache entry for {}: {}", key, e),
        }
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.store.get_item(key)?;

        let entry: CacheEntry<T> = match serde_json::from_str(&raw) {
            Ok(entry) => entry,
            Err(_) => {
                self.store.remove_item(key);
                debug!("Dropped malformed cache entry for {}", key);
                return None;
            }
        };

        let age_ms = Utc::now().timestamp_millis() - entry.ts;
        if age_ms > self.ttl_ms {
            self.store.remove_item(key);
            debug!("Dropped expired cache entry for {} (age {} ms)", key, age_ms);
            return None;
        }

        Some(entry.value)
    }
}
