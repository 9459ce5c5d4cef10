use async_trait::async_trait;
use dashmap::DashMap;
use reqwest::Url;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::modules::provider::common::HttpHandler;
use crate::shared::config::AppConfig;
use crate::shared::errors::{AppError, AppResult};

use super::shell::{APP_SHELL, CACHE_NAME, OFFLINE_FALLBACK};

/// Stored copy of one upstream response.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

/// A fetch to intercept. `navigation` marks full-page navigations, which
/// get the offline fallback treatment regardless of origin.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    pub url: String,
    pub navigation: bool,
}

impl FetchRequest {
    pub fn asset(url: &str) -> Self {
        Self {
            url: url.to_string(),
            navigation: false,
        }
    }

    pub fn navigate(url: &str) -> Self {
        Self {
            url: url.to_string(),
            navigation: true,
        }
    }
}

/// Network port; the real implementation wraps reqwest, tests substitute
/// their own.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> AppResult<CachedResponse>;
}

#[async_trait]
impl<F: Fetcher + ?Sized> Fetcher for Arc<F> {
    async fn fetch(&self, url: &str) -> AppResult<CachedResponse> {
        (**self).fetch(url).await
    }
}

/// Live-network fetcher. Non-success statuses and transport errors are
/// treated uniformly as fetch failures, which is what routes a request
/// onto the cache fallback path.
pub struct NetworkFetcher {
    client: reqwest::Client,
}

impl NetworkFetcher {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        Ok(Self {
            client: HttpHandler::create_http_client(config.http_timeout, &config.user_agent)?,
        })
    }
}

#[async_trait]
impl Fetcher for NetworkFetcher {
    async fn fetch(&self, url: &str) -> AppResult<CachedResponse> {
        let response = self.client.get(url).send().await.map_err(AppError::from)?;

        let status = response.status();
        HttpHandler::check_status(status, "offline fetch")?;

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await.map_err(AppError::from)?.to_vec();

        Ok(CachedResponse {
            status: status.as_u16(),
            content_type,
            body,
        })
    }
}

/// One named cache snapshot: exact request URL -> stored response.
pub type Snapshot = DashMap<String, CachedResponse>;

/// The persistent cache storage holding every named snapshot. Shared
/// across cache versions the way the browser's cache storage outlives
/// individual worker deployments.
pub type SnapshotStore = Arc<DashMap<String, Arc<Snapshot>>>;

/// Service-worker-equivalent offline cache: named, version-tagged response
/// snapshots plus the per-request-class fetch strategies.
///
/// Runs independently of the page-side cache; the two share nothing but
/// the requests that pass through.
pub struct OfflineCache<F> {
    fetcher: F,
    version: String,
    snapshots: SnapshotStore,
    origin: String,
}

impl<F: Fetcher> OfflineCache<F> {
    pub fn new(fetcher: F, origin: &str) -> Self {
        Self::with_version(fetcher, origin, CACHE_NAME)
    }

    pub fn with_version(fetcher: F, origin: &str, version: &str) -> Self {
        Self::with_storage(fetcher, origin, version, Arc::new(DashMap::new()))
    }

    /// Attach to existing storage, as a new deployment does.
    pub fn with_storage(
        fetcher: F,
        origin: &str,
        version: &str,
        snapshots: SnapshotStore,
    ) -> Self {
        Self {
            fetcher,
            version: version.to_string(),
            snapshots,
            origin: origin.trim_end_matches('/').to_string(),
        }
    }

    /// Install: prefetch the whole app shell into the current snapshot.
    /// Any unreachable resource fails the install and nothing is kept —
    /// partial shells are rejected.
    pub async fn install(&self) -> AppResult<()> {
        let urls: Vec<String> = APP_SHELL.iter().map(|r| self.absolute(r)).collect();

        let responses =
            futures::future::try_join_all(urls.iter().map(|url| self.fetcher.fetch(url)))
                .await
                .map_err(|e| {
                    warn!("App shell install aborted: {}", e);
                    AppError::CacheError(format!("App shell install failed: {}", e))
                })?;

        let staged = Snapshot::new();
        for (url, response) in urls.into_iter().zip(responses) {
            staged.insert(url, response);
        }
        self.snapshots.insert(self.version.clone(), Arc::new(staged));

        info!("Installed app shell snapshot {}", self.version);
        Ok(())
    }

    /// Activate: delete every snapshot whose name is not the current
    /// version tag. This wholesale replacement is the only invalidation
    /// across deployments.
    pub fn activate(&self) {
        self.snapshots.retain(|name, _| name == &self.version);
        info!("Activated snapshot {}", self.version);
    }

    pub fn snapshot_names(&self) -> Vec<String> {
        self.snapshots
            .iter()
            .map(|entry| entry.key().clone())
            .collect()
    }

    /// Insert a response into the current snapshot under its exact URL.
    pub fn put(&self, url: &str, response: CachedResponse) {
        self.current().insert(url.to_string(), response);
    }

    pub fn cached(&self, url: &str) -> Option<CachedResponse> {
        let snapshot = self.snapshots.get(&self.version)?;
        snapshot.get(url).map(|entry| entry.value().clone())
    }

    /// Fetch interception entry point: navigations prefer network with the
    /// cached entry document as fallback; cross-origin requests are
    /// network-first; same-origin shell assets are cache-first.
    pub async fn handle_fetch(&self, request: &FetchRequest) -> AppResult<CachedResponse> {
        if request.navigation {
            return self.navigation_fetch(&request.url).await;
        }
        if self.is_same_origin(&request.url) {
            self.cache_first(&request.url).await
        } else {
            self.network_first(&request.url).await
        }
    }

    /// Network-first: the live response wins and overwrites the stored
    /// copy for that exact request; the stored copy serves only when the
    /// network does not. A miss on both propagates the network failure.
    async fn network_first(&self, url: &str) -> AppResult<CachedResponse> {
        match self.fetcher.fetch(url).await {
            Ok(response) => {
                self.put(url, response.clone());
                Ok(response)
            }
            Err(err) => {
                debug!("Network failed for {}, trying cache: {}", url, err);
                self.cached(url).ok_or(err)
            }
        }
    }

    /// Cache-first: the stored copy wins outright; the network only
    /// populates a miss.
    async fn cache_first(&self, url: &str) -> AppResult<CachedResponse> {
        if let Some(response) = self.cached(url) {
            debug!("Serving {} from snapshot {}", url, self.version);
            return Ok(response);
        }

        let response = self.fetcher.fetch(url).await?;
        self.put(url, response.clone());
        Ok(response)
    }

    /// Navigations always try the network and fall back to the cached
    /// entry document, whatever the other strategies would decide.
    async fn navigation_fetch(&self, url: &str) -> AppResult<CachedResponse> {
        match self.fetcher.fetch(url).await {
            Ok(response) => Ok(response),
            Err(err) => {
                warn!("Navigation to {} failed, serving offline fallback", url);
                self.cached(&self.absolute(OFFLINE_FALLBACK)).ok_or(err)
            }
        }
    }

    fn current(&self) -> Arc<Snapshot> {
        self.snapshots
            .entry(self.version.clone())
            .or_default()
            .value()
            .clone()
    }

    fn absolute(&self, resource: &str) -> String {
        if resource.starts_with("http://") || resource.starts_with("https://") {
            resource.to_string()
        } else {
            format!("{}{}", self.origin, resource)
        }
    }

    fn is_same_origin(&self, url: &str) -> bool {
        match (Url::parse(url), Url::parse(&self.origin)) {
            (Ok(a), Ok(b)) => {
                a.scheme() == b.scheme()
                    && a.host_str() == b.host_str()
                    && a.port_or_known_default() == b.port_or_known_default()
            }
            _ => false,
        }
    }
}
