use dashmap::DashMap;
use regex::Regex;

/// Both persisted lists live for a year.
pub const LIST_COOKIE_MAX_AGE_DAYS: u32 = 365;

/// Browser cookie jar substrate. Each list persists as a single serialized
/// blob under one name; partial updates never happen.
pub trait CookieJar: Send + Sync {
    fn get(&self, name: &str) -> Option<String>;
    fn set(&self, name: &str, value: &str, max_age_days: u32);
}

impl<J: CookieJar + ?Sized> CookieJar for std::sync::Arc<J> {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }

    fn set(&self, name: &str, value: &str, max_age_days: u32) {
        (**self).set(name, value, max_age_days)
    }
}

/// In-memory jar, the default substrate for headless use and tests. Expiry
/// is left to the embedding runtime.
#[derive(Debug, Default)]
pub struct MemoryCookieJar {
    cookies: DashMap<String, String>,
}

impl MemoryCookieJar {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CookieJar for MemoryCookieJar {
    fn get(&self, name: &str) -> Option<String> {
        self.cookies.get(name).map(|entry| entry.value().clone())
    }

    fn set(&self, name: &str, value: &str, _max_age_days: u32) {
        self.cookies.insert(name.to_string(), value.to_string());
    }
}

/// Extract one cookie's decoded value from a `Cookie:` header line.
pub fn cookie_from_header(header: &str, name: &str) -> Option<String> {
    let pattern = format!(r"(?:^|;\s*){}=([^;]*)", regex::escape(name));
    let re = Regex::new(&pattern).ok()?;
    let raw = re.captures(header)?.get(1)?.as_str();

    Some(
        urlencoding::decode(raw)
            .map(|decoded| decoded.into_owned())
            .unwrap_or_else(|_| raw.to_string()),
    )
}

/// Render a `Set-Cookie` value the way the lists persist them: URL-encoded,
/// max-age in seconds, root path.
pub fn set_cookie_header(name: &str, value: &str, max_age_days: u32) -> String {
    format!(
        "{}={};max-age={};path=/",
        name,
        urlencoding::encode(value),
        max_age_days as u64 * 86_400
    )
}
