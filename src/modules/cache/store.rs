use dashmap::DashMap;

/// Persistent string key-value substrate (the browser's local storage in
/// the original deployment). The cache layer owns the entry format; the
/// store only moves opaque strings.
pub trait KeyValueStore: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: String);
    fn remove_item(&self, key: &str);
}

/// In-memory store, the default substrate for headless use and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: DashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).map(|entry| entry.value().clone())
    }

    fn set_item(&self, key: &str, value: String) {
        self.items.insert(key.to_string(), value);
    }

    fn remove_item(&self, key: &str) {
        self.items.remove(key);
    }
}
