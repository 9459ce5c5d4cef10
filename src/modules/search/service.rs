use tracing::info;

use crate::modules::anime::{AnimeDetails, AnimeSummary};
use crate::modules::cache::KeyValueStore;
use crate::modules::lists::{
    CookieJar, FavoriteEntry, Favorites, SearchHistory, GENRE_FILTER_MARKER, IMAGE_SEARCH_MARKER,
};
use crate::modules::provider::ImageUpload;
use crate::shared::errors::AppResult;

use super::orchestrator::{SearchOrchestrator, SearchOutcome};
use super::session::SearchSession;

/// Application facade tying the orchestrator to the persisted lists: every
/// successful search records a history entry, favorites are pushed on
/// explicit request. The lists live outside the cache path.
pub struct SearchService<S, J> {
    orchestrator: SearchOrchestrator<S>,
    session: SearchSession,
    history: SearchHistory<J>,
    favorites: Favorites<J>,
}

impl<S: KeyValueStore, J: CookieJar + Clone> SearchService<S, J> {
    pub fn new(orchestrator: SearchOrchestrator<S>, jar: J) -> Self {
        Self {
            orchestrator,
            session: SearchSession::new(),
            history: SearchHistory::load(jar.clone()),
            favorites: Favorites::load(jar),
        }
    }

    pub fn session(&self) -> &SearchSession {
        &self.session
    }

    pub fn orchestrator(&self) -> &SearchOrchestrator<S> {
        &self.orchestrator
    }

    /// Fresh text/genre search. Genre-only searches record the filter
    /// marker instead of an empty string.
    pub async fn search(&mut self, query: &str, genre_ids: Vec<u32>) -> AppResult<SearchOutcome> {
        let outcome = self
            .orchestrator
            .search_by_text(&mut self.session, query, genre_ids)
            .await?;

        if !matches!(outcome, SearchOutcome::Skipped) {
            let entry = if self.session.query().is_empty() {
                GENRE_FILTER_MARKER.to_string()
            } else {
                self.session.query().to_string()
            };
            self.history.push(&entry);
            info!("Search for '{}' recorded", entry);
        }
        Ok(outcome)
    }

    /// Reverse-image search, recorded in history under its marker entry.
    pub async fn search_by_image(&mut self, upload: ImageUpload) -> AppResult<SearchOutcome> {
        let outcome = self
            .orchestrator
            .search_by_image(&mut self.session, upload)
            .await?;

        self.history.push(IMAGE_SEARCH_MARKER);
        Ok(outcome)
    }

    /// Next page of the active search; appends do not touch history.
    pub async fn load_next_page(&mut self) -> AppResult<SearchOutcome> {
        self.orchestrator.load_next_page(&mut self.session).await
    }

    pub async fn details(&self, id: i64) -> AppResult<AnimeDetails> {
        self.orchestrator.view_details(id).await
    }

    /// Returns whether the item was added (false when already a favorite).
    pub fn add_favorite(&mut self, item: &AnimeSummary) -> bool {
        self.favorites.push(FavoriteEntry {
            id: item.id,
            title: item.title.clone(),
        })
    }

    pub fn history(&self) -> &[String] {
        self.history.entries()
    }

    pub fn suggestions(&self, partial: &str) -> Vec<String> {
        self.history.suggestions(partial)
    }

    pub fn favorites(&self) -> &[FavoriteEntry] {
        self.favorites.entries()
    }
}
