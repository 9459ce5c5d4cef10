pub mod common;
pub mod jikan;
pub mod trace_moe;
pub mod translate;
mod traits;

pub use jikan::JikanClient;
pub use trace_moe::TraceMoeClient;
pub use translate::LibreTranslateClient;
pub use traits::{ImageLookup, ImageUpload, MetadataProvider, SearchPage, Translator};
