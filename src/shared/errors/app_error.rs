use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    /// Connection, TLS or timeout failure before a status line was received.
    #[error("Transport error: {0}")]
    TransportError(String),

    /// The provider answered with a non-2xx status.
    #[error("Provider error: HTTP {status}: {message}")]
    ProviderError { status: u16, message: String },

    /// The body could not be parsed into the expected shape.
    #[error("Decode error: {0}")]
    DecodeError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Aggregation failed for {scope}: {source}")]
    AggregationFailed {
        scope: String,
        source: Box<AppError>,
    },

    #[error("Deadline exceeded: {0}")]
    DeadlineExceeded(String),

    #[error("Cancelled: {0}")]
    Cancelled(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::DecodeError(err.to_string())
        } else if let Some(status) = err.status() {
            AppError::ProviderError {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else if err.is_timeout() {
            AppError::TransportError("Request timeout".to_string())
        } else if err.is_connect() {
            AppError::TransportError(format!("Failed to connect to provider: {}", err))
        } else {
            AppError::TransportError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::DecodeError(err.to_string())
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::InvalidInput(format!("Invalid number: {}", err))
    }
}

impl AppError {
    /// HTTP status carried by this error, looking through aggregation wrappers.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::ProviderError { status, .. } => Some(*status),
            AppError::AggregationFailed { source, .. } => source.status(),
            _ => None,
        }
    }

    /// The innermost error, past any aggregation wrappers.
    pub fn root_cause(&self) -> &AppError {
        match self {
            AppError::AggregationFailed { source, .. } => source.root_cause(),
            other => other,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self.root_cause(), AppError::Cancelled(_))
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
