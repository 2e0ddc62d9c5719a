use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;
use std::str::FromStr;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use crate::shared::errors::{AppError, AppResult};

/// What a multi-section page does when some of its fetches fail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Any failed section fails the whole page.
    #[default]
    AllOrNothing,
    /// Render what succeeded and report the rest. Still fails if nothing succeeded.
    PartialSuccess,
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FailurePolicy::AllOrNothing => write!(f, "all_or_nothing"),
            FailurePolicy::PartialSuccess => write!(f, "partial_success"),
        }
    }
}

impl FromStr for FailurePolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "all_or_nothing" | "strict" => Ok(FailurePolicy::AllOrNothing),
            "partial_success" | "partial" => Ok(FailurePolicy::PartialSuccess),
            other => Err(AppError::ConfigError(format!(
                "Unknown failure policy: '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregationConfig {
    pub failure_policy: FailurePolicy,
    /// Caller deadline for a whole fan-out. `None` waits for the slowest request.
    pub deadline: Option<Duration>,
}

impl AggregationConfig {
    pub fn with_policy(mut self, failure_policy: FailurePolicy) -> Self {
        self.failure_policy = failure_policy;
        self
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }
}

/// Drive `future` to completion unless `cancel` fires or `deadline` passes.
///
/// On cancel or deadline the future is dropped, which aborts whatever
/// requests it still had in flight.
pub async fn run_bounded<F>(
    future: F,
    scope: &str,
    cancel: &CancellationToken,
    deadline: Option<Duration>,
) -> AppResult<F::Output>
where
    F: Future,
{
    let bounded = async {
        match deadline {
            Some(limit) => tokio::time::timeout(limit, future).await.map_err(|_| {
                AppError::DeadlineExceeded(format!("{} did not settle within {:?}", scope, limit))
            }),
            None => Ok(future.await),
        }
    };

    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(AppError::Cancelled(format!("{} was cancelled", scope))),
        result = bounded => result,
    }
}
