use async_trait::async_trait;
use reqwest::Client;

use crate::modules::anime::{AnimeDetails, AnimeSummary};
use crate::modules::provider::common::HttpHandler;
use crate::modules::provider::traits::{MetadataProvider, SearchPage};
use crate::shared::config::AppConfig;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::RateLimiter;

use super::{
    dto::{JikanAnimeListResponse, JikanAnimeResponse, JikanSearchParams},
    mapper::JikanMapper,
};

/// Jikan (MyAnimeList) metadata client.
pub struct JikanClient {
    client: Client,
    base_url: String,
    rate_limiter: RateLimiter,
}

impl JikanClient {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let client = HttpHandler::create_http_client(config.http_timeout, &config.user_agent)?;

        Ok(Self {
            client,
            base_url: config.jikan_base_url.clone(),
            rate_limiter: RateLimiter::new(3.0), // 3 requests per second (official Jikan limit)
        })
    }

    fn genre_csv(genre_ids: &[u32]) -> Option<String> {
        if genre_ids.is_empty() {
            return None;
        }
        Some(
            genre_ids
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(","),
        )
    }
}

#[async_trait]
impl MetadataProvider for JikanClient {
    async fn search(&self, page: &SearchPage) -> AppResult<Vec<AnimeSummary>> {
        self.rate_limiter.wait().await;

        let query = page.query.trim();
        let params = JikanSearchParams {
            q: (!query.is_empty()).then(|| query.to_string()),
            page: Some(page.page),
            limit: Some(page.limit),
            genres: Self::genre_csv(&page.genre_ids),
            ..Default::default()
        };

        let url = format!("{}/anime", self.base_url);
        let response = HttpHandler::execute(
            || self.client.get(&url).query(&params).send(),
            "Jikan",
            "search anime",
        )
        .await?;

        let jikan_response = response
            .json::<JikanAnimeListResponse>()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse Jikan response: {}", e)))?;

        Ok(jikan_response
            .data
            .into_iter()
            .map(JikanMapper::to_summary)
            .collect())
    }

    async fn full_details(&self, id: i64) -> AppResult<AnimeDetails> {
        self.rate_limiter.wait().await;

        let url = format!("{}/anime/{}/full", self.base_url, id);
        let response =
            HttpHandler::execute(|| self.client.get(&url).send(), "Jikan", "get anime details")
                .await?;

        let jikan_response = response
            .json::<JikanAnimeResponse>()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse Jikan response: {}", e)))?;

        Ok(JikanMapper::to_details(jikan_response.data))
    }
}
