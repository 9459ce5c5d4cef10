//! Headless anime search client.
//!
//! Text, genre-filter and reverse-image search against public anime APIs,
//! normalized into uniform records, with a 24-hour TTL response cache,
//! cookie-persisted history/favorites lists, and a service-worker-style
//! offline cache for shell assets and API responses. All persistence and
//! network substrates sit behind traits so embedders (and tests) can swap
//! them out.

pub mod modules;
pub mod shared;

use std::sync::Arc;

use modules::cache::{MemoryStore, TtlCache};
use modules::lists::MemoryCookieJar;
use modules::offline::{NetworkFetcher, OfflineCache};
use modules::provider::{JikanClient, LibreTranslateClient, TraceMoeClient};

pub use modules::anime::{AnimeDetails, AnimeSummary};
pub use modules::lists::FavoriteEntry;
pub use modules::provider::ImageUpload;
pub use modules::search::{SearchOrchestrator, SearchOutcome, SearchService, SearchSession};
pub use shared::config::AppConfig;
pub use shared::errors::{AppError, AppResult};

/// Build a [`SearchService`] against the live third-party APIs, with
/// in-memory persistence substrates.
pub fn live_service(
    config: AppConfig,
) -> AppResult<SearchService<MemoryStore, Arc<MemoryCookieJar>>> {
    let provider = Arc::new(JikanClient::new(&config)?);
    let image_lookup = Arc::new(TraceMoeClient::new(&config)?);
    let translator = Arc::new(LibreTranslateClient::new(&config)?);
    let cache = TtlCache::new(MemoryStore::new(), config.cache_ttl);

    let orchestrator = SearchOrchestrator::new(provider, image_lookup, translator, cache, &config);
    Ok(SearchService::new(
        orchestrator,
        Arc::new(MemoryCookieJar::new()),
    ))
}

/// Build an [`OfflineCache`] over the live network for the given app
/// origin.
pub fn live_offline_cache(
    config: &AppConfig,
    origin: &str,
) -> AppResult<OfflineCache<NetworkFetcher>> {
    Ok(OfflineCache::new(NetworkFetcher::new(config)?, origin))
}
