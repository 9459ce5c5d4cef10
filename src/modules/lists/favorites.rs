use serde::{Deserialize, Serialize};
use tracing::debug;

use super::cookie_jar::{CookieJar, LIST_COOKIE_MAX_AGE_DAYS};

pub const FAVORITES_COOKIE: &str = "favs";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    pub id: i64,
    pub title: String,
}

/// Unbounded favorites list, deduplicated by id, persisted as a single JSON
/// blob in the cookie jar. Append-only.
pub struct Favorites<J> {
    jar: J,
    entries: Vec<FavoriteEntry>,
}

impl<J: CookieJar> Favorites<J> {
    /// Load the persisted list; a missing or malformed blob resets to empty.
    pub fn load(jar: J) -> Self {
        let entries = jar
            .get(FAVORITES_COOKIE)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();

        Self { jar, entries }
    }

    pub fn entries(&self) -> &[FavoriteEntry] {
        &self.entries
    }

    pub fn contains(&self, id: i64) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    /// Appends unless an entry with the same id already exists; the first
    /// write wins. Returns whether the entry was added.
    pub fn push(&mut self, entry: FavoriteEntry) -> bool {
        if self.contains(entry.id) {
            return false;
        }
        self.entries.push(entry);
        self.persist();
        true
    }

    fn persist(&self) {
        match serde_json::to_string(&self.entries) {
            Ok(json) => self
                .jar
                .set(FAVORITES_COOKIE, &json, LIST_COOKIE_MAX_AGE_DAYS),
            Err(e) => debug!("Failed to serialize favorites: {}", e),
        }
    }
}
