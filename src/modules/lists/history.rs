use strsim::jaro_winkler;
use tracing::debug;

use super::cookie_jar::{CookieJar, LIST_COOKIE_MAX_AGE_DAYS};

pub const HISTORY_COOKIE: &str = "history";
pub const HISTORY_LIMIT: usize = 10;
/// Partial queries shorter than this produce no suggestions.
pub const SUGGESTION_MIN_CHARS: usize = 2;

/// Marker entries recorded for non-text searches.
pub const IMAGE_SEARCH_MARKER: &str = "[Image Search]";
pub const GENRE_FILTER_MARKER: &str = "[Genre Filter]";

/// Bounded, deduplicated, most-recent-first search history, persisted as a
/// single JSON blob in the cookie jar.
pub struct SearchHistory<J> {
    jar: J,
    entries: Vec<String>,
}

impl<J: CookieJar> SearchHistory<J> {
    /// Load the persisted list; a missing or malformed blob resets to empty.
    pub fn load(jar: J) -> Self {
        let entries = jar
            .get(HISTORY_COOKIE)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();

        Self { jar, entries }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Append-or-promote: any existing occurrence moves to the front, the
    /// tail past the cap is evicted. Repeating a push is a no-op apart from
    /// ordering, so the list never grows from duplicates.
    pub fn push(&mut self, entry: &str) {
        self.entries.retain(|existing| existing != entry);
        self.entries.insert(0, entry.to_string());
        self.entries.truncate(HISTORY_LIMIT);
        self.persist();
    }

    /// Case-insensitive substring matches for a partial query, best match
    /// first.
    pub fn suggestions(&self, partial: &str) -> Vec<String> {
        let partial = partial.trim();
        if partial.chars().count() < SUGGESTION_MIN_CHARS {
            return Vec::new();
        }

        let needle = partial.to_lowercase();
        let mut matches: Vec<(f64, &String)> = self
            .entries
            .iter()
            .filter(|entry| entry.to_lowercase().contains(&needle))
            .map(|entry| (jaro_winkler(&needle, &entry.to_lowercase()), entry))
            .collect();

        matches.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        matches.into_iter().map(|(_, entry)| entry.clone()).collect()
    }

    fn persist(&self) {
        match serde_json::to_string(&self.entries) {
            Ok(json) => self.jar.set(HISTORY_COOKIE, &json, LIST_COOKIE_MAX_AGE_DAYS),
            Err(e) => debug!("Failed to serialize history: {}", e),
        }
    }
}
