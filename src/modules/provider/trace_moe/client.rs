use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use tracing::debug;

use crate::modules::provider::common::HttpHandler;
use crate::modules::provider::traits::{ImageLookup, ImageUpload};
use crate::shared::config::AppConfig;
use crate::shared::errors::{AppError, AppResult};

use super::dto::TraceMoeResponse;

/// trace.moe reverse-image-search client.
pub struct TraceMoeClient {
    client: Client,
    base_url: String,
}

impl TraceMoeClient {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let client = HttpHandler::create_http_client(config.http_timeout, &config.user_agent)?;

        Ok(Self {
            client,
            base_url: config.trace_moe_base_url.clone(),
        })
    }
}

#[async_trait]
impl ImageLookup for TraceMoeClient {
    async fn identify(&self, upload: ImageUpload) -> AppResult<Option<i64>> {
        let part = Part::bytes(upload.bytes).file_name(upload.file_name);
        let form = Form::new().part("image", part);

        // anilistInfo expands each match's cross-referenced identifier.
        let url = format!("{}/search?anilistInfo", self.base_url);
        let response = HttpHandler::execute(
            || self.client.post(&url).multipart(form).send(),
            "trace.moe",
            "reverse image search",
        )
        .await?;

        let body = response.json::<TraceMoeResponse>().await.map_err(|e| {
            AppError::ApiError(format!("Failed to parse trace.moe response: {}", e))
        })?;

        let top = body.result.into_iter().next();
        if let Some(top) = &top {
            debug!(
                "trace.moe top match: anilist {} (similarity {:?})",
                top.anilist.id, top.similarity
            );
        }
        Ok(top.map(|m| m.anilist.id))
    }
}
