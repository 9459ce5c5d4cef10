mod key;
mod store;
mod ttl_cache;

pub use key::{details_key, search_key};
pub use store::{KeyValueStore, MemoryStore};
pub use ttl_cache::TtlCache;
