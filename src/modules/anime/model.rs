use serde::{Deserialize, Serialize};

/// Normalized search result record. Produced by the provider mappers from
/// heterogeneous upstream payloads and never mutated afterwards; missing
/// upstream fields stay explicit as `None` instead of being dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimeSummary {
    /// Externally assigned, stable identifier (MAL id).
    pub id: i64,
    pub title: String,
    pub synopsis: Option<String>,
    pub episodes: Option<u32>,
    pub status: Option<String>,
    pub score: Option<f32>,
    pub image_url: String,
}

/// Full detail record backing the details view. Superset of
/// [`AnimeSummary`]; cached under its own `details-<id>` key namespace
/// because detail fetches are more expensive and reused independently of
/// which search surfaced the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimeDetails {
    pub id: i64,
    pub title: String,
    pub synopsis: Option<String>,
    pub episodes: Option<u32>,
    pub status: Option<String>,
    pub score: Option<f32>,
    pub image_url: String,
    pub genres: Vec<String>,
    /// First five character names, in upstream order.
    pub characters: Vec<String>,
    pub trailer_youtube_id: Option<String>,
}
