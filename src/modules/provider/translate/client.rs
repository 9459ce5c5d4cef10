use async_trait::async_trait;
use reqwest::Client;

use crate::modules::provider::common::HttpHandler;
use crate::modules::provider::traits::Translator;
use crate::shared::config::AppConfig;
use crate::shared::errors::{AppError, AppResult};

use super::dto::{TranslateRequest, TranslateResponse};

/// LibreTranslate client. Callers treat every failure here as
/// non-fatal and fall back to the untranslated text.
pub struct LibreTranslateClient {
    client: Client,
    base_url: String,
}

impl LibreTranslateClient {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let client = HttpHandler::create_http_client(config.http_timeout, &config.user_agent)?;

        Ok(Self {
            client,
            base_url: config.translate_base_url.clone(),
        })
    }
}

#[async_trait]
impl Translator for LibreTranslateClient {
    async fn translate(&self, text: &str) -> AppResult<String> {
        if text.is_empty() {
            return Err(AppError::InvalidInput(
                "Nothing to translate".to_string(),
            ));
        }

        let body = TranslateRequest {
            q: text,
            source: "auto",
            target: "en",
        };

        let url = format!("{}/translate", self.base_url);
        let response = HttpHandler::execute(
            || self.client.post(&url).json(&body).send(),
            "LibreTranslate",
            "translate",
        )
        .await?;

        let parsed = response.json::<TranslateResponse>().await.map_err(|e| {
            AppError::ApiError(format!("Failed to parse translation response: {}", e))
        })?;

        parsed
            .translated_text
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::ApiError("Empty translation response".to_string()))
    }
}
