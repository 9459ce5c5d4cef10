mod genres;
mod model;

pub use genres::{genre_id, genre_ids, GENRES};
pub use model::{AnimeDetails, AnimeSummary};
