//! Rate limiter tests
//!
//! Tests the HTTP client rate limiting implementation with RateLimitClient.

use marquee_lib::modules::catalog::infrastructure::http_client::RateLimitClient;
use marquee_lib::modules::catalog::ProviderConfig;
use marquee_lib::shared::errors::AppError;
use std::time::{Duration, Instant};

#[tokio::test]
async fn test_rate_limit_client_creation() {
    let client = RateLimitClient::for_tmdb(&ProviderConfig::new("k")).unwrap();
    assert_eq!(client.provider_name(), "TMDB");
}

#[tokio::test]
async fn test_can_make_request() {
    let client = RateLimitClient::for_tmdb(&ProviderConfig::new("k")).unwrap();
    assert!(client.can_make_request_now());
}

#[tokio::test]
async fn test_burst_then_paced() {
    let limiter = RateLimitClient::create_rate_limiter(10.0, 3).unwrap();
    let client = RateLimitClient::new("Test", limiter, "test-agent".to_string(), None).unwrap();

    // Burst capacity is available immediately
    for _ in 0..3 {
        assert!(client.can_make_request_now());
    }
    assert!(!client.can_make_request_now());
}

#[tokio::test]
async fn test_limiter_waits_instead_of_failing() {
    let limiter = RateLimitClient::create_rate_limiter(20.0, 1).unwrap();

    let start = Instant::now();
    for _ in 0..3 {
        limiter.until_ready().await;
    }

    // Two paced waits of 50ms each
    assert!(start.elapsed() >= Duration::from_millis(80));
}

#[test]
fn test_invalid_rate_is_config_error() {
    for rps in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            RateLimitClient::create_rate_limiter(rps, 5),
            Err(AppError::ConfigError(_))
        ));
    }
}
