use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::errors::{AppError, AppResult};

/// Provider-assigned movie identifier. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(u64);

impl MovieId {
    pub fn new(id: u64) -> AppResult<Self> {
        if id == 0 {
            return Err(AppError::InvalidInput(
                "Movie id must be a positive integer".to_string(),
            ));
        }
        Ok(Self(id))
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MovieId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id: u64 = s
            .trim()
            .parse()
            .map_err(|_| AppError::InvalidInput(format!("Invalid movie id: '{}'", s)))?;
        Self::new(id)
    }
}

impl TryFrom<u64> for MovieId {
    type Error = AppError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
