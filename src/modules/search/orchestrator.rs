use std::sync::Arc;
use tracing::debug;

use crate::modules::anime::{AnimeDetails, AnimeSummary};
use crate::modules::cache::{details_key, search_key, KeyValueStore, TtlCache};
use crate::modules::provider::{ImageLookup, ImageUpload, MetadataProvider, SearchPage, Translator};
use crate::shared::config::AppConfig;
use crate::shared::errors::{AppError, AppResult};

use super::session::SearchSession;

/// Terminal state of one search operation. Failures travel separately, as
/// the `Err` branch of the result.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Fresh results; the previous result view is replaced.
    Replaced(Vec<AnimeSummary>),
    /// A further page of the active query, appended to the existing view.
    Appended(Vec<AnimeSummary>),
    /// A fresh query matched nothing.
    Empty,
    /// An appended page came back empty: the result set is exhausted. Not
    /// an error, and distinct from [`SearchOutcome::Empty`].
    Exhausted,
    /// Nothing happened: no active session, or another fetch already holds
    /// the session's single-flight guard.
    Skipped,
}

/// Turns user queries into cache lookups or remote fetches and drives
/// pagination. Results land in the TTL cache under the composite search
/// key; detail records under their own `details-<id>` namespace.
pub struct SearchOrchestrator<S> {
    provider: Arc<dyn MetadataProvider>,
    image_lookup: Arc<dyn ImageLookup>,
    translator: Arc<dyn Translator>,
    cache: TtlCache<S>,
    page_size: u32,
}

impl<S: KeyValueStore> SearchOrchestrator<S> {
    pub fn new(
        provider: Arc<dyn MetadataProvider>,
        image_lookup: Arc<dyn ImageLookup>,
        translator: Arc<dyn Translator>,
        cache: TtlCache<S>,
        config: &AppConfig,
    ) -> Self {
        Self {
            provider,
            image_lookup,
            translator,
            cache,
            page_size: config.page_size,
        }
    }

    pub fn cache(&self) -> &TtlCache<S> {
        &self.cache
    }

    /// Start a fresh search session: page 1 replaces the result view. A
    /// request with neither query text nor genres is rejected up front.
    pub async fn search_by_text(
        &self,
        session: &mut SearchSession,
        query: &str,
        genre_ids: Vec<u32>,
    ) -> AppResult<SearchOutcome> {
        let query = query.trim().to_string();
        if query.is_empty() && genre_ids.is_empty() {
            return Err(AppError::ValidationError(
                "Search needs a query or at least one genre".to_string(),
            ));
        }

        session.begin(query, genre_ids);
        self.fetch_page(session, 1, false).await
    }

    /// Load the next page of the active session in append mode. A no-op
    /// when no session is active or a fetch is already in flight.
    pub async fn load_next_page(&self, session: &mut SearchSession) -> AppResult<SearchOutcome> {
        if !session.is_active() {
            return Ok(SearchOutcome::Skipped);
        }
        let next = session.page() + 1;
        self.fetch_page(session, next, true).await
    }

    /// Reverse-image search. Only the highest-confidence match counts; no
    /// match at all is an empty result, not an error. A match delegates to
    /// a fresh text search on the cross-referenced identifier.
    pub async fn search_by_image(
        &self,
        session: &mut SearchSession,
        upload: ImageUpload,
    ) -> AppResult<SearchOutcome> {
        match self.image_lookup.identify(upload).await? {
            Some(id) => self.search_by_text(session, &id.to_string(), Vec::new()).await,
            None => Ok(SearchOutcome::Empty),
        }
    }

    /// Detail lookup. The canonical (untranslated) record is what gets
    /// cached; the synopsis is re-translated on every view and a
    /// translation failure silently keeps the original text. A fetch
    /// failure caches nothing and surfaces as the error state.
    pub async fn view_details(&self, id: i64) -> AppResult<AnimeDetails> {
        let key = details_key(id);

        let mut details = match self.cache.get::<AnimeDetails>(&key) {
            Some(details) => {
                debug!("Detail cache hit for {}", key);
                details
            }
            None => {
                let fetched = self.provider.full_details(id).await?;
                self.cache.set(&key, &fetched);
                fetched
            }
        };

        if let Some(synopsis) = details.synopsis.clone() {
            match self.translator.translate(&synopsis).await {
                Ok(translated) => details.synopsis = Some(translated),
                Err(e) => debug!("Translation failed, keeping original synopsis: {}", e),
            }
        }

        Ok(details)
    }

    async fn fetch_page(
        &self,
        session: &mut SearchSession,
        page: u32,
        append: bool,
    ) -> AppResult<SearchOutcome> {
        let key = search_key(session.query(), page, session.genre_ids());

        // Cache hits render immediately and never re-validate upstream.
        if let Some(items) = self.cache.get::<Vec<AnimeSummary>>(&key) {
            debug!("Search cache hit for {}", key);
            session.set_page(page);
            return Ok(Self::outcome(items, append));
        }

        let _guard = match session.loading_guard() {
            Some(guard) => guard,
            None => {
                debug!("Search already in flight, skipping page {}", page);
                return Ok(SearchOutcome::Skipped);
            }
        };

        let request = SearchPage {
            query: session.query().to_string(),
            page,
            limit: self.page_size,
            genre_ids: session.genre_ids().to_vec(),
        };

        // An error drops the guard on the way out, releasing the flag.
        let items = self.provider.search(&request).await?;

        self.cache.set(&key, &items);
        session.set_page(page);

        Ok(Self::outcome(items, append))
    }

    fn outcome(items: Vec<AnimeSummary>, append: bool) -> SearchOutcome {
        match (items.is_empty(), append) {
            (true, false) => SearchOutcome::Empty,
            (true, true) => SearchOutcome::Exhausted,
            (false, false) => SearchOutcome::Replaced(items),
            (false, true) => SearchOutcome::Appended(items),
        }
    }
}
