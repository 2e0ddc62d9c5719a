use serde::{Deserialize, Serialize};

use super::config::{RightAffordance, ScrollStep};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    Grid,
    Carousel,
}

impl LayoutMode {
    /// Fixed for the lifetime of a list: carousel iff `item_count > threshold`.
    pub fn for_count(item_count: usize, threshold: usize) -> Self {
        if item_count > threshold {
            LayoutMode::Carousel
        } else {
            LayoutMode::Grid
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollDirection {
    Left,
    Right,
}

/// Horizontal position of a carousel, in pixels.
///
/// `viewport_width` and `content_width` are reported by the host; both start
/// at zero (unknown). Offsets never go negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScrollState {
    pub offset: f64,
    pub viewport_width: f64,
    pub content_width: f64,
}

impl ScrollState {
    pub fn content_known(&self) -> bool {
        self.content_width > 0.0
    }

    fn max_offset(&self) -> Option<f64> {
        self.content_known()
            .then(|| (self.content_width - self.viewport_width).max(0.0))
    }

    fn clamp(&self, offset: f64) -> f64 {
        let offset = if offset.is_finite() { offset.max(0.0) } else { 0.0 };
        match self.max_offset() {
            Some(max) => offset.min(max),
            None => offset,
        }
    }

    pub fn can_scroll_left(&self, epsilon: f64) -> bool {
        self.offset > epsilon
    }

    pub fn can_scroll_right(&self, epsilon: f64, affordance: RightAffordance) -> bool {
        match (affordance, self.max_offset()) {
            (RightAffordance::Always, _) | (RightAffordance::BoundaryChecked, None) => true,
            (RightAffordance::BoundaryChecked, Some(max)) => max - self.offset > epsilon,
        }
    }

    /// Move one step. A new command simply replaces the previous target.
    pub fn scroll(&mut self, direction: ScrollDirection, step: ScrollStep) -> f64 {
        let delta = step.delta(self.viewport_width);
        let target = match direction {
            ScrollDirection::Left => self.offset - delta,
            ScrollDirection::Right => self.offset + delta,
        };
        self.offset = self.clamp(target);
        self.offset
    }

    /// Position the host actually reached (smooth scrolling, user drag).
    pub fn report(&mut self, offset: f64) {
        self.offset = self.clamp(offset);
    }

    pub fn resize(&mut self, viewport_width: f64, content_width: f64) {
        self.viewport_width = viewport_width.max(0.0);
        self.content_width = content_width.max(0.0);
        self.offset = self.clamp(self.offset);
    }
}
