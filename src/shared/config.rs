use std::time::Duration;

/// Runtime configuration for the client. Defaults match the public
/// deployments of the three upstream services; every field can be
/// overridden from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub jikan_base_url: String,
    pub trace_moe_base_url: String,
    pub translate_base_url: String,
    /// Results requested per search page.
    pub page_size: u32,
    /// Validity window for cached search results and detail records.
    pub cache_ttl: Duration,
    pub http_timeout: Duration,
    pub user_agent: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            jikan_base_url: "https://api.jikan.moe/v4".to_string(),
            trace_moe_base_url: "https://api.trace.moe".to_string(),
            translate_base_url: "https://libretranslate.de".to_string(),
            page_size: 12,
            cache_ttl: Duration::from_secs(24 * 60 * 60),
            http_timeout: Duration::from_secs(30),
            user_agent: "Sagasu-Anime-Client/0.1".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration, letting `SAGASU_*` environment variables (and a
    /// local `.env` file) override the defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();
        if let Ok(url) = std::env::var("SAGASU_JIKAN_BASE_URL") {
            config.jikan_base_url = url;
        }
        if let Ok(url) = std::env::var("SAGASU_TRACE_MOE_BASE_URL") {
            config.trace_moe_base_url = url;
        }
        if let Ok(url) = std::env::var("SAGASU_TRANSLATE_BASE_URL") {
            config.translate_base_url = url;
        }
        if let Ok(size) = std::env::var("SAGASU_PAGE_SIZE") {
            if let Ok(size) = size.parse() {
                config.page_size = size;
            }
        }
        if let Ok(hours) = std::env::var("SAGASU_CACHE_TTL_HOURS") {
            if let Ok(hours) = hours.parse::<u64>() {
                config.cache_ttl = Duration::from_secs(hours * 60 * 60);
            }
        }
        config
    }
}
