use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct TranslateRequest<'a> {
    pub q: &'a str,
    pub source: &'a str,
    pub target: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranslateResponse {
    #[serde(rename = "translatedText")]
    pub translated_text: Option<String>,
}
