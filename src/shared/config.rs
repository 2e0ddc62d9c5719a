use std::str::FromStr;
use std::time::Duration;

use crate::modules::aggregation::{AggregationConfig, FailurePolicy};
use crate::modules::browse::{DisplayLimits, ListConfig, RightAffordance};
use crate::modules::catalog::ProviderConfig;
use crate::shared::errors::{AppError, AppResult};

pub const ENV_API_KEY: &str = "TMDB_API_KEY";
pub const ENV_BASE_URL: &str = "TMDB_BASE_URL";
pub const ENV_IMAGE_BASE_URL: &str = "TMDB_IMAGE_BASE_URL";
pub const ENV_LANGUAGE: &str = "TMDB_LANGUAGE";
pub const ENV_REQUESTS_PER_SECOND: &str = "TMDB_REQUESTS_PER_SECOND";
pub const ENV_TIMEOUT_SECS: &str = "TMDB_TIMEOUT_SECS";
pub const ENV_FAILURE_POLICY: &str = "MARQUEE_FAILURE_POLICY";
pub const ENV_DEADLINE_MS: &str = "MARQUEE_DEADLINE_MS";
pub const ENV_RIGHT_BOUNDARY: &str = "MARQUEE_RIGHT_BOUNDARY";

/// Everything a browse session needs, assembled once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub provider: ProviderConfig,
    pub aggregation: AggregationConfig,
    /// Landing page sections.
    pub list: ListConfig,
    /// Single-category pages.
    pub strip: ListConfig,
    pub display: DisplayLimits,
}

impl AppConfig {
    pub fn new(provider: ProviderConfig) -> Self {
        Self {
            provider,
            aggregation: AggregationConfig::default(),
            list: ListConfig::section(),
            strip: ListConfig::strip(),
            display: DisplayLimits::default(),
        }
    }

    /// Read configuration from the process environment. Call `dotenvy::dotenv()` first
    /// to pick up a local `.env`.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let api_key = get(ENV_API_KEY).ok_or_else(|| {
            AppError::ConfigError(format!("{} environment variable not found", ENV_API_KEY))
        })?;

        let mut provider = ProviderConfig::new(api_key);
        if let Some(base_url) = get(ENV_BASE_URL) {
            provider = provider.with_base_url(base_url);
        }
        if let Some(image_base_url) = get(ENV_IMAGE_BASE_URL) {
            provider.image_base_url = image_base_url.trim_end_matches('/').to_string();
        }
        if let Some(language) = get(ENV_LANGUAGE) {
            provider = provider.with_language(language);
        }
        if let Some(rps) = get(ENV_REQUESTS_PER_SECOND) {
            let rps: f64 = parse_value(ENV_REQUESTS_PER_SECOND, &rps)?;
            if !rps.is_finite() || rps <= 0.0 || Duration::try_from_secs_f64(1.0 / rps).is_err() {
                return Err(AppError::ConfigError(format!(
                    "{} must be a positive, paceable rate, got {}",
                    ENV_REQUESTS_PER_SECOND, rps
                )));
            }
            let burst = provider.burst;
            provider = provider.with_rate_limit(rps, burst);
        }
        if let Some(secs) = get(ENV_TIMEOUT_SECS) {
            let secs: u64 = parse_value(ENV_TIMEOUT_SECS, &secs)?;
            provider = provider.with_timeout(Duration::from_secs(secs));
        }

        let mut config = Self::new(provider);

        if let Some(policy) = get(ENV_FAILURE_POLICY) {
            config.aggregation = config
                .aggregation
                .with_policy(FailurePolicy::from_str(&policy)?);
        }
        if let Some(ms) = get(ENV_DEADLINE_MS) {
            let ms: u64 = parse_value(ENV_DEADLINE_MS, &ms)?;
            config.aggregation = config.aggregation.with_deadline(Duration::from_millis(ms));
        }
        if let Some(boundary) = get(ENV_RIGHT_BOUNDARY) {
            let affordance = RightAffordance::from_str(&boundary)?;
            config.list = config.list.with_right_affordance(affordance);
            config.strip = config.strip.with_right_affordance(affordance);
        }

        log::debug!("Loaded configuration: {:?}", config.provider);
        Ok(config)
    }
}

fn parse_value<T>(key: &str, raw: &str) -> AppResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse::<T>()
        .map_err(|e| AppError::ConfigError(format!("{} has invalid value '{}': {}", key, raw, e)))
}
