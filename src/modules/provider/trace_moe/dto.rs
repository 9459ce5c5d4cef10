use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct TraceMoeResponse {
    #[serde(default)]
    pub result: Vec<TraceMoeMatch>,
}

/// One candidate match; results arrive highest-confidence first.
#[derive(Debug, Clone, Deserialize)]
pub struct TraceMoeMatch {
    pub anilist: TraceMoeAnilist,
    pub similarity: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TraceMoeAnilist {
    pub id: i64,
}
