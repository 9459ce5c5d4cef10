use super::dto::{JikanAnimeData, JikanImages};
use crate::modules::anime::{AnimeDetails, AnimeSummary};

/// How many character names a detail record carries.
const CHARACTER_LIMIT: usize = 5;

/// Normalizes Jikan payloads into the crate's uniform records.
pub struct JikanMapper;

impl JikanMapper {
    /// Prefer the English title, fall back to the primary title.
    fn display_title(data: &JikanAnimeData) -> String {
        data.title_english
            .clone()
            .unwrap_or_else(|| data.title.clone())
    }

    /// Best available cover image, largest first; empty when the record
    /// ships none.
    fn extract_image_url(images: &Option<JikanImages>) -> String {
        images
            .as_ref()
            .and_then(|img| img.jpg.as_ref())
            .and_then(|jpg| {
                jpg.large_image_url
                    .clone()
                    .or_else(|| jpg.image_url.clone())
                    .or_else(|| jpg.small_image_url.clone())
            })
            .unwrap_or_default()
    }

    pub fn to_summary(data: JikanAnimeData) -> AnimeSummary {
        AnimeSummary {
            id: data.mal_id,
            title: Self::display_title(&data),
            image_url: Self::extract_image_url(&data.images),
            synopsis: data.synopsis,
            episodes: data.episodes,
            status: data.status,
            score: data.score,
        }
    }

    pub fn to_details(data: JikanAnimeData) -> AnimeDetails {
        AnimeDetails {
            id: data.mal_id,
            title: Self::display_title(&data),
            image_url: Self::extract_image_url(&data.images),
            synopsis: data.synopsis,
            episodes: data.episodes,
            status: data.status,
            score: data.score,
            genres: data.genres.into_iter().map(|g| g.name).collect(),
            characters: data
                .characters
                .map(|c| {
                    c.data
                        .into_iter()
                        .take(CHARACTER_LIMIT)
                        .map(|edge| edge.character.name)
                        .collect()
                })
                .unwrap_or_default(),
            trailer_youtube_id: data.trailer.and_then(|t| t.youtube_id),
        }
    }
}
