//! Rate-limited HTTP client shared by provider adapters.
//!
//! Paces requests with a governor quota and turns every non-success outcome
//! into a typed [`AppError`]. It never retries: retry policy belongs to the
//! caller.

use crate::modules::catalog::domain::ProviderConfig;
use crate::modules::catalog::infrastructure::tmdb::models::TmdbError;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::LogContext;
use governor::{Quota, RateLimiter as GovernorRateLimiter};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::num::NonZeroU32;
use std::time::{Duration, Instant};

/// How much of an undecodable body ends up in the error message.
const BODY_SNIPPET_CHARS: usize = 200;

pub type DirectRateLimiter = GovernorRateLimiter<
    governor::state::direct::NotKeyed,
    governor::state::InMemoryState,
    governor::clock::DefaultClock,
    governor::middleware::NoOpMiddleware,
>;

/// HTTP client that paces requests and classifies failures
pub struct RateLimitClient {
    client: Client,
    rate_limiter: DirectRateLimiter,
    user_agent: String,
    provider_name: String,
}

impl RateLimitClient {
    /// Create a client for TMDB from the injected provider configuration
    pub fn for_tmdb(config: &ProviderConfig) -> AppResult<Self> {
        Self::new(
            "TMDB",
            Self::create_rate_limiter(config.requests_per_second, config.burst)?,
            config.user_agent.clone(),
            config.request_timeout,
        )
    }

    /// Create a rate limiter with specified requests per second and burst capacity
    pub fn create_rate_limiter(
        requests_per_second: f64,
        burst_size: u32,
    ) -> AppResult<DirectRateLimiter> {
        if !requests_per_second.is_finite() || requests_per_second <= 0.0 {
            return Err(AppError::ConfigError(format!(
                "requests_per_second must be positive, got {}",
                requests_per_second
            )));
        }

        let period = Duration::try_from_secs_f64(1.0 / requests_per_second).map_err(|_| {
            AppError::ConfigError(format!(
                "requests_per_second {} is too low to pace",
                requests_per_second
            ))
        })?;
        let burst = NonZeroU32::new(burst_size.max(1))
            .ok_or_else(|| AppError::ConfigError("burst size must be positive".to_string()))?;
        let quota = Quota::with_period(period)
            .ok_or_else(|| {
                AppError::ConfigError(format!(
                    "requests_per_second {} is too high to pace",
                    requests_per_second
                ))
            })?
            .allow_burst(burst);

        Ok(GovernorRateLimiter::direct(quota))
    }

    /// Create a custom client
    pub fn new(
        provider_name: &str,
        rate_limiter: DirectRateLimiter,
        user_agent: String,
        timeout: Option<Duration>,
    ) -> AppResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            AppError::ConfigError(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self {
            client,
            rate_limiter,
            user_agent,
            provider_name: provider_name.to_string(),
        })
    }

    /// GET `url` and decode the JSON body into `T`.
    ///
    /// `endpoint` is what gets logged; `url` may carry the credential and is
    /// never written to the log.
    pub async fn get<T>(&self, url: &str, endpoint: &str) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        self.rate_limiter.until_ready().await;

        LogContext::api_call(&self.provider_name, endpoint, "", None);
        let started = Instant::now();

        let response = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                log::warn!(
                    "{} API request to {} failed: {}",
                    self.provider_name,
                    endpoint,
                    e
                );
                AppError::from(e)
            })?;

        let status = response.status();
        LogContext::api_call(
            &self.provider_name,
            endpoint,
            status.as_str(),
            Some(started.elapsed().as_millis() as u64),
        );

        if !status.is_success() {
            return Err(self.error_for_status(status, response).await);
        }

        self.parse_response(response, endpoint).await
    }

    /// Build a `ProviderError`, preferring the provider's own status message
    async fn error_for_status(&self, status: StatusCode, response: Response) -> AppError {
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<TmdbError>(&body)
            .ok()
            .and_then(|error| error.status_message)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown status")
                    .to_string()
            });

        log::warn!(
            "{} API returned error: {} ({})",
            self.provider_name,
            status,
            message
        );

        AppError::ProviderError {
            status: status.as_u16(),
            message,
        }
    }

    /// Parse a success body into the expected shape
    async fn parse_response<T>(&self, response: Response, endpoint: &str) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let response_text = response.text().await.map_err(|e| {
            AppError::TransportError(format!(
                "Failed to read {} response: {}",
                self.provider_name,
                e.without_url()
            ))
        })?;

        serde_json::from_str(&response_text).map_err(|e| {
            let snippet: String = response_text.chars().take(BODY_SNIPPET_CHARS).collect();
            let ellipsis = if response_text.chars().count() > BODY_SNIPPET_CHARS {
                "..."
            } else {
                ""
            };
            AppError::DecodeError(format!(
                "Failed to parse {} response from {}: {}. Response: {}{}",
                self.provider_name, endpoint, e, snippet, ellipsis
            ))
        })
    }

    /// Check if a request can be made now (for testing/debugging)
    pub fn can_make_request_now(&self) -> bool {
        self.rate_limiter.check().is_ok()
    }

    /// Get provider name
    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }
}
