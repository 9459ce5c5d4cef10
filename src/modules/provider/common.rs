use reqwest::StatusCode;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

use crate::shared::errors::{AppError, AppResult};

/// Shared HTTP plumbing for all provider clients: one client construction
/// path and one status-code-to-error mapping, so every upstream failure
/// lands in the same taxonomy.
pub struct HttpHandler;

impl HttpHandler {
    pub fn create_http_client(timeout: Duration, user_agent: &str) -> AppResult<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Failed to create HTTP client: {}", e))
            })
    }

    /// Map a response status onto the error taxonomy. Success statuses pass.
    pub fn check_status(status: StatusCode, service: &str) -> AppResult<()> {
        match status {
            s if s.is_success() => Ok(()),
            StatusCode::TOO_MANY_REQUESTS => Err(AppError::RateLimitError(format!(
                "{} rate limit exceeded",
                service
            ))),
            StatusCode::NOT_FOUND => {
                Err(AppError::NotFound(format!("{} resource not found", service)))
            }
            StatusCode::BAD_REQUEST => {
                Err(AppError::ApiError(format!("Bad request to {}", service)))
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(AppError::ApiError(format!("Access denied by {}", service)))
            }
            s if s.is_server_error() => Err(AppError::ExternalServiceError(format!(
                "{} unavailable ({})",
                service, s
            ))),
            s => Err(AppError::ApiError(format!(
                "Unexpected status from {}: {}",
                service, s
            ))),
        }
    }

    /// Execute one request. Exactly one attempt is made; any transport error
    /// or non-success status surfaces as a fetch failure.
    pub async fn execute<F, Fut>(
        request_fn: F,
        service: &str,
        operation: &str,
    ) -> AppResult<reqwest::Response>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<reqwest::Response, reqwest::Error>>,
    {
        let response = request_fn().await.map_err(AppError::from)?;
        let status = response.status();

        if let Err(e) = Self::check_status(status, service) {
            warn!("{} {} failed: {}", service, operation, e);
            return Err(e);
        }

        debug!("{} {} -> {}", service, operation, status);
        Ok(response)
    }
}
