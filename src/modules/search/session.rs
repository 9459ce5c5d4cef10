use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Pixel distance from the page bottom at which the next page load fires.
pub const SCROLL_TRIGGER_PX: f64 = 300.0;

/// Mutable state of one logical search session: the active query and genre
/// filter, the last page fetched, and the single-flight flag. Replaces the
/// module-level globals of the original with state the orchestrator's
/// operations receive explicitly.
#[derive(Debug, Default)]
pub struct SearchSession {
    query: String,
    genre_ids: Vec<u32>,
    page: u32,
    in_flight: Arc<AtomicBool>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn genre_ids(&self) -> &[u32] {
        &self.genre_ids
    }

    /// Last successfully loaded page; 0 before the first search.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// A session is active once a query or genre filter is set; only active
    /// sessions load further pages.
    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || !self.genre_ids.is_empty()
    }

    /// True while an outbound search request is in flight.
    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub(crate) fn begin(&mut self, query: String, genre_ids: Vec<u32>) {
        self.query = query;
        self.genre_ids = genre_ids;
        self.page = 0;
    }

    pub(crate) fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    /// Take the single-flight guard, or `None` if a fetch already holds it.
    pub(crate) fn loading_guard(&self) -> Option<LoadingGuard> {
        LoadingGuard::acquire(&self.in_flight)
    }
}

/// RAII hold on the session's single-flight flag. The flag is set before a
/// request starts and released when the guard drops, which happens on every
/// exit path — so a failed request can never leave it permanently set.
pub(crate) struct LoadingGuard {
    flag: Arc<AtomicBool>,
}

impl LoadingGuard {
    fn acquire(flag: &Arc<AtomicBool>) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
            .then(|| Self { flag: flag.clone() })
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// True when the viewport has scrolled to within [`SCROLL_TRIGGER_PX`] of
/// the bottom of the page content.
pub fn near_page_bottom(viewport_height: f64, scroll_y: f64, content_height: f64) -> bool {
    viewport_height + scroll_y >= content_height - SCROLL_TRIGGER_PX
}
