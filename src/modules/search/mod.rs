mod orchestrator;
mod service;
mod session;

pub use orchestrator::{SearchOrchestrator, SearchOutcome};
pub use service::SearchService;
pub use session::{near_page_bottom, SearchSession, SCROLL_TRIGGER_PX};
