/// Version-tagged snapshot name. Bumping the tag is the whole deployment
/// story: activate() deletes every snapshot that does not carry it.
pub const CACHE_NAME: &str = "sagasu-v1";

/// Application shell: the fixed resource set needed to render offline.
/// Same-origin paths are resolved against the configured origin; the
/// styling CDN is fetched as-is.
pub const APP_SHELL: &[&str] = &[
    "/",
    "/index.html",
    "/app.js",
    "/cover.jpg",
    "/manifest.json",
    "https://cdn.tailwindcss.com",
];

/// Served for failed full-page navigations.
pub const OFFLINE_FALLBACK: &str = "/index.html";
