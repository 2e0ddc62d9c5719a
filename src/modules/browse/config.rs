use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::shared::errors::AppError;

/// Section lists switch to a carousel above this many items.
pub const SECTION_CAROUSEL_THRESHOLD: usize = 5;
/// Strip lists are a carousel as soon as they hold anything.
pub const STRIP_CAROUSEL_THRESHOLD: usize = 0;
/// Offsets within this many pixels of an edge count as being at that edge.
pub const SCROLL_EPSILON_PX: f64 = 20.0;
pub const VIEWPORT_SCROLL_FRACTION: f64 = 0.75;
pub const FIXED_SCROLL_DELTA_PX: f64 = 800.0;

pub const MAX_CAST_CARDS: usize = 12;
pub const MAX_REVIEWS: usize = 4;
pub const MAX_SIMILAR: usize = 6;

/// How far one scroll command moves the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ScrollStep {
    /// Fraction of the visible width.
    ViewportFraction(f64),
    /// Constant pixel distance.
    Fixed(f64),
}

impl ScrollStep {
    pub fn delta(&self, viewport_width: f64) -> f64 {
        match self {
            ScrollStep::ViewportFraction(fraction) => viewport_width.max(0.0) * fraction,
            ScrollStep::Fixed(px) => *px,
        }
    }
}

/// When the right scroll arrow is offered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RightAffordance {
    /// Always offered in carousel layout, even at the right edge.
    #[default]
    Always,
    /// Hidden once the right edge is within epsilon. Needs a known content width.
    BoundaryChecked,
}

impl FromStr for RightAffordance {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "always" => Ok(RightAffordance::Always),
            "checked" | "boundary_checked" => Ok(RightAffordance::BoundaryChecked),
            other => Err(AppError::ConfigError(format!(
                "Unknown right boundary mode: '{}'",
                other
            ))),
        }
    }
}

/// Which card a list renders for each item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardStyle {
    /// Landscape card with actions and match score on hover.
    Feature,
    /// Portrait poster with year and rating on hover.
    Poster,
}

/// Per-variant list behaviour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListConfig {
    /// Carousel iff item count is strictly greater than this.
    pub carousel_threshold: usize,
    pub scroll_step: ScrollStep,
    pub scroll_epsilon: f64,
    pub right_affordance: RightAffordance,
    pub card_style: CardStyle,
    /// Show the "Explore All" hint while the section is hovered.
    pub explore_hint: bool,
}

impl ListConfig {
    /// Landing page sections.
    pub fn section() -> Self {
        Self {
            carousel_threshold: SECTION_CAROUSEL_THRESHOLD,
            scroll_step: ScrollStep::ViewportFraction(VIEWPORT_SCROLL_FRACTION),
            scroll_epsilon: SCROLL_EPSILON_PX,
            right_affordance: RightAffordance::Always,
            card_style: CardStyle::Feature,
            explore_hint: true,
        }
    }

    /// Single-category pages.
    pub fn strip() -> Self {
        Self {
            carousel_threshold: STRIP_CAROUSEL_THRESHOLD,
            scroll_step: ScrollStep::Fixed(FIXED_SCROLL_DELTA_PX),
            scroll_epsilon: SCROLL_EPSILON_PX,
            right_affordance: RightAffordance::Always,
            card_style: CardStyle::Poster,
            explore_hint: false,
        }
    }

    pub fn with_right_affordance(mut self, right_affordance: RightAffordance) -> Self {
        self.right_affordance = right_affordance;
        self
    }

    pub fn with_threshold(mut self, carousel_threshold: usize) -> Self {
        self.carousel_threshold = carousel_threshold;
        self
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self::section()
    }
}

/// Truncation applied when a detail page is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayLimits {
    pub cast: usize,
    pub reviews: usize,
    pub similar: usize,
}

impl Default for DisplayLimits {
    fn default() -> Self {
        Self {
            cast: MAX_CAST_CARDS,
            reviews: MAX_REVIEWS,
            similar: MAX_SIMILAR,
        }
    }
}
