use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct JikanAnimeResponse {
    pub data: JikanAnimeData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JikanAnimeListResponse {
    pub data: Vec<JikanAnimeData>,
    pub pagination: Option<JikanPagination>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JikanPagination {
    pub last_visible_page: Option<i32>,
    pub has_next_page: bool,
}

/// The slice of a Jikan record the normalizer consumes. Unknown upstream
/// fields are ignored by serde.
#[derive(Debug, Clone, Deserialize)]
pub struct JikanAnimeData {
    pub mal_id: i64,
    pub title: String,
    pub title_english: Option<String>,
    pub synopsis: Option<String>,
    pub episodes: Option<u32>,
    pub status: Option<String>,
    pub score: Option<f32>,
    pub images: Option<JikanImages>,
    pub trailer: Option<JikanTrailer>,
    #[serde(default)]
    pub genres: Vec<JikanEntity>,
    /// Only present on `/anime/{id}/full` responses.
    pub characters: Option<JikanCharacters>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JikanImages {
    pub jpg: Option<JikanImageSet>,
    pub webp: Option<JikanImageSet>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JikanImageSet {
    pub image_url: Option<String>,
    pub small_image_url: Option<String>,
    pub large_image_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JikanTrailer {
    pub youtube_id: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JikanEntity {
    pub mal_id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JikanCharacters {
    pub data: Vec<JikanCharacterEdge>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JikanCharacterEdge {
    pub character: JikanCharacter,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JikanCharacter {
    pub name: String,
}

// Search request parameters
#[derive(Debug, Clone, Serialize)]
pub struct JikanSearchParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genres: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sfw: Option<bool>,
}

impl Default for JikanSearchParams {
    fn default() -> Self {
        Self {
            q: None,
            page: Some(1),
            limit: Some(12),
            genres: None,
            sfw: Some(true),
        }
    }
}
