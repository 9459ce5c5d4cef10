mod cache;
mod shell;

pub use cache::{
    CachedResponse, FetchRequest, Fetcher, NetworkFetcher, OfflineCache, Snapshot, SnapshotStore,
};
pub use shell::{APP_SHELL, CACHE_NAME, OFFLINE_FALLBACK};
