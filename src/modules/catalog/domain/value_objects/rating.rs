use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::errors::{AppError, AppResult};

pub const MAX_RATING: f64 = 10.0;

/// Average user rating on the provider's 0–10 scale.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(f64);

impl Rating {
    pub fn new(value: f64) -> AppResult<Self> {
        if !value.is_finite() || !(0.0..=MAX_RATING).contains(&value) {
            return Err(AppError::DecodeError(format!(
                "Rating {} outside [0, {}]",
                value, MAX_RATING
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// "Match" score shown on expanded cards: the rating as a whole percentage.
    pub fn match_percent(&self) -> u8 {
        (self.0 * 10.0).round() as u8
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}
