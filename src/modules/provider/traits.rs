use async_trait::async_trait;

use crate::modules::anime::{AnimeDetails, AnimeSummary};
use crate::shared::errors::AppResult;

/// One page of search parameters sent to the metadata API.
#[derive(Debug, Clone, Default)]
pub struct SearchPage {
    pub query: String,
    pub page: u32,
    pub limit: u32,
    pub genre_ids: Vec<u32>,
}

/// An uploaded image frame for reverse lookup.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Anime metadata service boundary.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    async fn search(&self, page: &SearchPage) -> AppResult<Vec<AnimeSummary>>;

    async fn full_details(&self, id: i64) -> AppResult<AnimeDetails>;
}

/// Reverse-image-search service boundary.
#[async_trait]
pub trait ImageLookup: Send + Sync {
    /// Resolve an uploaded frame to the cross-referenced identifier of the
    /// highest-confidence match, if any. No ranking of further candidates.
    async fn identify(&self, upload: ImageUpload) -> AppResult<Option<i64>>;
}

/// Machine-translation service boundary.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str) -> AppResult<String>;
}
