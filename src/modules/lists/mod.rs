mod cookie_jar;
mod favorites;
mod history;

pub use cookie_jar::{
    cookie_from_header, set_cookie_header, CookieJar, MemoryCookieJar, LIST_COOKIE_MAX_AGE_DAYS,
};
pub use favorites::{FavoriteEntry, Favorites, FAVORITES_COOKIE};
pub use history::{
    SearchHistory, GENRE_FILTER_MARKER, HISTORY_COOKIE, HISTORY_LIMIT, IMAGE_SEARCH_MARKER,
    SUGGESTION_MIN_CHARS,
};
