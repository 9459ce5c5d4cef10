pub mod logger;
mod rate_limiter;

pub use rate_limiter::RateLimiter;
